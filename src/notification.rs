//! Transient on-screen messages ("Grid reset", "Color picked: #...").
//!
//! A single reusable slot: showing a message replaces whatever is visible and
//! restarts the dismiss deadline, so the most recent message always wins.

use std::time::{Duration, Instant};

use crate::config::NotificationConfig;

/// Runtime settings derived from the `[ui.notification]` config section.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    /// How long a message stays visible
    pub duration: Duration,
    /// Delay before the welcome message appears after startup
    pub welcome_delay: Duration,
    /// Startup greeting; empty disables it
    pub welcome_message: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self::from(&NotificationConfig::default())
    }
}

impl From<&NotificationConfig> for NotificationSettings {
    fn from(cfg: &NotificationConfig) -> Self {
        Self {
            duration: Duration::from_millis(cfg.duration_ms),
            welcome_delay: Duration::from_millis(cfg.welcome_delay_ms),
            welcome_message: cfg.welcome_message.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct Active {
    message: String,
    hide_at: Instant,
}

#[derive(Debug, Clone)]
struct Pending {
    message: String,
    show_at: Instant,
}

/// Single-slot notification surface with deadline-based dismissal.
#[derive(Debug, Clone)]
pub struct NotificationState {
    duration: Duration,
    active: Option<Active>,
    pending: Option<Pending>,
}

impl NotificationState {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
            pending: None,
        }
    }

    /// Shows `message` immediately, replacing any visible message and restarting the timer.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        log::debug!("Notification: {}", message);
        self.active = Some(Active {
            message,
            hide_at: now + self.duration,
        });
    }

    /// Defers `message` until `at`. A later call replaces the pending message.
    pub fn schedule(&mut self, message: impl Into<String>, at: Instant) {
        self.pending = Some(Pending {
            message: message.into(),
            show_at: at,
        });
    }

    /// Advances timers. Returns true when the visible text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.active.as_ref().is_some_and(|active| now >= active.hide_at) {
            self.active = None;
            changed = true;
        }

        if self.pending.as_ref().is_some_and(|pending| now >= pending.show_at) {
            if let Some(pending) = self.pending.take() {
                self.show(pending.message, now);
                changed = true;
            }
        }

        changed
    }

    /// Earliest instant at which [`tick`](Self::tick) will change something.
    pub fn next_deadline(&self) -> Option<Instant> {
        let hide = self.active.as_ref().map(|active| active.hide_at);
        let show = self.pending.as_ref().map(|pending| pending.show_at);
        match (hide, show) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Text currently on screen, if any.
    pub fn current(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.message.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECONDS: Duration = Duration::from_millis(2000);

    #[test]
    fn message_hides_after_duration() {
        let start = Instant::now();
        let mut state = NotificationState::new(TWO_SECONDS);
        state.show("Grid reset", start);
        assert_eq!(state.current(), Some("Grid reset"));

        assert!(!state.tick(start + Duration::from_millis(1999)));
        assert!(state.is_visible());

        assert!(state.tick(start + TWO_SECONDS));
        assert_eq!(state.current(), None);
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn newer_message_is_not_dismissed_by_older_timer() {
        let start = Instant::now();
        let mut state = NotificationState::new(TWO_SECONDS);
        state.show("Eraser mode activated", start);
        state.show("Grid reset", start + Duration::from_millis(1500));

        // The first message's deadline has passed but the second one restarted the timer.
        assert!(!state.tick(start + Duration::from_millis(2100)));
        assert_eq!(state.current(), Some("Grid reset"));
        assert_eq!(
            state.next_deadline(),
            Some(start + Duration::from_millis(3500))
        );
    }

    #[test]
    fn scheduled_message_appears_when_due() {
        let start = Instant::now();
        let mut state = NotificationState::new(TWO_SECONDS);
        let due = start + Duration::from_millis(500);
        state.schedule("Welcome", due);

        assert_eq!(state.next_deadline(), Some(due));
        assert!(!state.tick(start));
        assert!(state.current().is_none());

        assert!(state.tick(due));
        assert_eq!(state.current(), Some("Welcome"));
        assert_eq!(state.next_deadline(), Some(due + TWO_SECONDS));
    }

    #[test]
    fn next_deadline_picks_earliest() {
        let start = Instant::now();
        let mut state = NotificationState::new(TWO_SECONDS);
        state.show("Drawing paused", start);
        state.schedule("Welcome", start + Duration::from_millis(500));
        assert_eq!(
            state.next_deadline(),
            Some(start + Duration::from_millis(500))
        );
    }

    #[test]
    fn settings_follow_config() {
        let cfg = NotificationConfig {
            duration_ms: 750,
            welcome_delay_ms: 0,
            welcome_message: String::new(),
        };
        let settings = NotificationSettings::from(&cfg);
        assert_eq!(settings.duration, Duration::from_millis(750));
        assert!(settings.welcome_message.is_empty());
    }
}
