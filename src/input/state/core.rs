//! Application state record and controller bookkeeping.

use crate::config::{Action, CanvasConfig, KeyBinding};
use crate::draw::{Color, DirtyTracker, FontDescriptor, Grid};
use crate::input::{cursor::CursorStyle, mode::Mode, modifiers::Modifiers};
use crate::notification::NotificationState;
use crate::ui::AppLayout;
use crate::util::Rect;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Keyboard sub-state.
///
/// Hex entry captures plain keys so typing digits does not switch modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardState {
    /// Keys go through the keybinding map
    Idle,
    /// Typing a base color; `buffer` holds up to six hex digits without the `#`
    HexInput { buffer: String },
}

/// Size limits applied to every grid-size request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    pub min: u32,
    pub max: u32,
    /// Cells added or removed per grow/shrink keypress
    pub step: u32,
}

impl GridLimits {
    /// Clamps `size` into `[min, max]`.
    pub fn clamp(&self, size: u32) -> u32 {
        size.clamp(self.min, self.max.max(self.min))
    }
}

impl Default for GridLimits {
    fn default() -> Self {
        Self::from(&CanvasConfig::default())
    }
}

impl From<&CanvasConfig> for GridLimits {
    fn from(cfg: &CanvasConfig) -> Self {
        Self {
            min: cfg.min_grid_size.max(1),
            max: cfg.max_grid_size.max(cfg.min_grid_size.max(1)),
            step: cfg.size_step.max(1),
        }
    }
}

/// Main application state.
///
/// Owns the grid and every piece of process-wide drawing state (mode, base color,
/// drawing toggle) and turns backend keyboard and pointer events into changes to it.
/// Nothing here touches Wayland, so the whole controller runs in unit tests.
pub struct InputState {
    /// The paintable cells
    pub grid: Grid,
    /// Active drawing behavior
    pub mode: Mode,
    /// Color used by Color and Shader modes
    pub base_color: Color,
    /// Whether entering a cell paints it
    pub drawing_enabled: bool,
    /// Swatches offered by the control panel
    pub palette: Vec<Color>,
    /// Bounds for grid-size changes
    pub grid_limits: GridLimits,
    /// Single-slot transient messages
    pub notifications: NotificationState,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Keybinding lookup or hex entry
    pub keyboard: KeyboardState,
    /// Pointer position in surface coordinates, `None` while outside the surface
    pub pointer: Option<(f64, f64)>,
    /// Font for panel labels and notifications
    pub font_descriptor: FontDescriptor,
    /// Geometry of card, panel and canvas for the current surface size
    pub layout: AppLayout,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible
    pub show_help: bool,
    /// Whether the status bar is currently visible
    pub show_status_bar: bool,
    /// Screen width in pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Screen height in pixels (set by backend after configuration)
    pub screen_height: u32,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
    /// Cell under the pointer, used to detect cell entry
    pub(crate) hovered_cell: Option<usize>,
    /// Whether the grid-size slider is being dragged
    pub(crate) slider_drag: bool,
    /// Where the cursor glyph was last drawn
    pub(crate) last_cursor_bounds: Option<Rect>,
    /// Source of rainbow colors
    pub(crate) rng: StdRng,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Text waiting to be placed on the clipboard by the backend
    pending_clipboard: Option<String>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// Screen dimensions default to 0 and should be updated by the backend
    /// after surface configuration (see `update_screen_dimensions`).
    ///
    /// # Arguments
    /// * `base_color` - Initial base color
    /// * `mode` - Initial mode
    /// * `drawing_enabled` - Whether hovering paints from the start
    /// * `grid_size` - Requested cells per side (clamped to `grid_limits`)
    /// * `extent` - Canvas side length in pixels
    /// * `grid_limits` - Slider range and keyboard step
    /// * `palette` - Panel swatches
    /// * `font_descriptor` - Font for labels and notifications
    /// * `show_status_bar` - Whether the status bar starts visible
    /// * `notification_duration` - How long each message stays visible
    /// * `action_map` - Keybinding action map
    /// * `rng` - Random source for rainbow mode
    #[allow(clippy::too_many_arguments)]
    pub fn with_defaults(
        base_color: Color,
        mode: Mode,
        drawing_enabled: bool,
        grid_size: u32,
        extent: f64,
        grid_limits: GridLimits,
        palette: Vec<Color>,
        font_descriptor: FontDescriptor,
        show_status_bar: bool,
        notification_duration: Duration,
        action_map: HashMap<KeyBinding, Action>,
        rng: StdRng,
    ) -> Self {
        let grid = Grid::new(grid_limits.clamp(grid_size), extent);
        let layout = AppLayout::compute(0, 0, extent, &palette, (grid_limits.min, grid_limits.max));

        Self {
            grid,
            mode,
            base_color,
            drawing_enabled,
            palette,
            grid_limits,
            notifications: NotificationState::new(notification_duration),
            modifiers: Modifiers::new(),
            keyboard: KeyboardState::Idle,
            pointer: None,
            font_descriptor,
            layout,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            screen_width: 0,
            screen_height: 0,
            dirty_tracker: DirtyTracker::new(),
            hovered_cell: None,
            slider_drag: false,
            last_cursor_bounds: None,
            rng,
            action_map,
            pending_clipboard: None,
        }
    }

    /// Updates screen dimensions after backend configuration.
    ///
    /// This should be called by the backend when it receives the actual
    /// screen dimensions from the display server. The layout is recomputed
    /// and the whole surface marked dirty.
    ///
    /// # Arguments
    /// * `width` - Screen width in pixels
    /// * `height` - Screen height in pixels
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.layout = AppLayout::compute(
            width,
            height,
            self.grid.extent(),
            &self.palette,
            (self.grid_limits.min, self.grid_limits.max),
        );
        self.hovered_cell = None;
        self.mark_full_redraw();
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Advances notification timers. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.notifications.tick(now) {
            self.mark_full_redraw();
        }
        self.needs_redraw
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.notifications.next_deadline()
    }

    /// Shows `message` in the notification slot and schedules a redraw.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.show(message, Instant::now());
        self.mark_full_redraw();
    }

    /// Takes and clears text queued for the clipboard.
    ///
    /// This is called by the backend, which owns the Wayland connection
    /// needed to serve the selection.
    pub fn take_pending_clipboard(&mut self) -> Option<String> {
        self.pending_clipboard.take()
    }

    pub(super) fn set_pending_clipboard(&mut self, text: String) {
        self.pending_clipboard = Some(text);
    }

    /// Look up an action for the given key and modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }

    /// Glyph to draw at the pointer.
    ///
    /// The mode glyph only appears over the canvas; the panel and margins get the arrow.
    pub fn cursor_style(&self) -> CursorStyle {
        match self.pointer {
            Some((x, y)) if self.layout.canvas.contains(x, y) => {
                CursorStyle::for_state(self.mode, self.drawing_enabled, self.base_color)
            }
            _ => CursorStyle::Default,
        }
    }

    /// Marks the old and new cursor glyph areas dirty after the pointer or its style changed.
    pub(crate) fn refresh_cursor_dirty(&mut self) {
        let new_bounds = self
            .pointer
            .and_then(|(x, y)| self.cursor_style().bounds(x, y));
        let previous = self.last_cursor_bounds;

        if new_bounds != previous {
            self.dirty_tracker.mark_optional_rect(previous);
        }
        self.dirty_tracker.mark_optional_rect(new_bounds);
        self.last_cursor_bounds = new_bounds;
        self.needs_redraw = true;
    }

    /// Marks one cell's screen area dirty.
    pub(crate) fn mark_cell_dirty(&mut self, index: usize) {
        let rect = self.layout.cell_rect(&self.grid, index);
        self.dirty_tracker.mark_optional_rect(rect);
        self.needs_redraw = true;
    }

    pub(crate) fn mark_full_redraw(&mut self) {
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }
}
