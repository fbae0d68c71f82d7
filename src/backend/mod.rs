//! Display backend and startup wiring.
//!
//! Wayland is the only backend. Everything that turns a loaded [`Config`] plus
//! command-line overrides into a ready [`InputState`] lives here so it can be
//! tested without a compositor.

use anyhow::{Result, anyhow};
use log::{info, warn};
use rand::rngs::StdRng;
use std::time::Instant;

use crate::config::Config;
use crate::draw::{Color, FontDescriptor};
use crate::input::{GridLimits, InputState, Mode};
use crate::notification::NotificationSettings;

pub mod wayland;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Cells per side
    pub grid_size: Option<u32>,
    /// Initial base color
    pub base_color: Option<Color>,
    /// Initial mode
    pub mode: Option<Mode>,
    /// Start with hover painting paused
    pub paused: bool,
}

/// Run the Wayland backend until the user exits.
pub fn run_wayland(options: LaunchOptions) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(options);
    backend.run()
}

/// Builds the initial application state from `config` and `options`.
///
/// The welcome message, when configured, is scheduled relative to `now`.
pub fn build_input_state(
    config: &Config,
    options: &LaunchOptions,
    rng: StdRng,
    now: Instant,
) -> Result<InputState> {
    let action_map = config
        .keybindings
        .build_action_map()
        .map_err(|e| anyhow!("Invalid keybindings: {}", e))?;

    let limits = GridLimits::from(&config.canvas);
    let requested = options.grid_size.unwrap_or(config.canvas.grid_size);
    let grid_size = limits.clamp(requested);
    if grid_size != requested {
        warn!(
            "Grid size {} outside {}-{}, using {}",
            requested, limits.min, limits.max, grid_size
        );
    }

    let palette: Vec<Color> = config
        .drawing
        .palette
        .iter()
        .map(|spec| spec.to_color())
        .collect();

    let base_color = options
        .base_color
        .unwrap_or_else(|| config.drawing.default_color.to_color());
    let mode = options.mode.unwrap_or(config.drawing.default_mode);
    let drawing_enabled = config.drawing.drawing_enabled && !options.paused;

    let settings = NotificationSettings::from(&config.ui.notification);
    let font_descriptor = FontDescriptor::new(config.ui.font_family.clone(), "normal", "normal");

    let mut input_state = InputState::with_defaults(
        base_color,
        mode,
        drawing_enabled,
        grid_size,
        config.canvas.extent,
        limits,
        palette,
        font_descriptor,
        config.ui.show_status_bar,
        settings.duration,
        action_map,
        rng,
    );

    if !settings.welcome_message.is_empty() {
        input_state
            .notifications
            .schedule(settings.welcome_message, now + settings.welcome_delay);
    }

    info!(
        "Starting with {}x{} grid, {} mode, base color {}, drawing {}",
        grid_size,
        grid_size,
        mode,
        base_color,
        if drawing_enabled { "enabled" } else { "paused" }
    );

    Ok(input_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::time::Duration;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    #[test]
    fn config_defaults_drive_initial_state() {
        let config = Config::default();
        let state =
            build_input_state(&config, &LaunchOptions::default(), rng(), Instant::now()).unwrap();

        assert_eq!(state.grid.size(), config.canvas.grid_size);
        assert_eq!(state.mode, config.drawing.default_mode);
        assert_eq!(state.base_color, config.drawing.default_color.to_color());
        assert_eq!(state.palette.len(), config.drawing.palette.len());
        assert!(state.grid.is_pristine());
    }

    #[test]
    fn launch_options_override_config() {
        let options = LaunchOptions {
            grid_size: Some(24),
            base_color: Some(Color::rgb(0x10, 0x20, 0x30)),
            mode: Some(Mode::Shader),
            paused: true,
        };
        let state =
            build_input_state(&Config::default(), &options, rng(), Instant::now()).unwrap();

        assert_eq!(state.grid.size(), 24);
        assert_eq!(state.base_color, Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(state.mode, Mode::Shader);
        assert!(!state.drawing_enabled);
    }

    #[test]
    fn oversized_grid_request_is_clamped() {
        let config = Config::default();
        let options = LaunchOptions {
            grid_size: Some(10_000),
            ..LaunchOptions::default()
        };
        let state = build_input_state(&config, &options, rng(), Instant::now()).unwrap();
        assert_eq!(state.grid.size(), config.canvas.max_grid_size);
    }

    #[test]
    fn welcome_message_is_scheduled_after_delay() {
        let mut config = Config::default();
        config.ui.notification.welcome_message = "Hello".to_string();
        config.ui.notification.welcome_delay_ms = 500;

        let now = Instant::now();
        let mut state =
            build_input_state(&config, &LaunchOptions::default(), rng(), now).unwrap();

        assert!(!state.notifications.is_visible());
        assert_eq!(state.next_deadline(), Some(now + Duration::from_millis(500)));

        state.tick(now + Duration::from_millis(600));
        assert_eq!(state.notifications.current(), Some("Hello"));
    }

    #[test]
    fn empty_welcome_message_schedules_nothing() {
        let mut config = Config::default();
        config.ui.notification.welcome_message.clear();
        let state =
            build_input_state(&config, &LaunchOptions::default(), rng(), Instant::now()).unwrap();
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn conflicting_keybindings_are_an_error() {
        let mut config = Config::default();
        config.keybindings.toggle_help = vec!["1".to_string()];
        let result = build_input_state(&config, &LaunchOptions::default(), rng(), Instant::now());
        assert!(result.is_err());
    }
}
