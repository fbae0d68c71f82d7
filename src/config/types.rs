//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use crate::input::Mode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grid dimensions and resize behavior.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Cells per side when the application starts (clamped to min/max)
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,

    /// Smallest grid the slider and keyboard shortcuts allow (1 - 256)
    #[serde(default = "default_min_grid_size")]
    pub min_grid_size: u32,

    /// Largest grid the slider and keyboard shortcuts allow (at most 256)
    #[serde(default = "default_max_grid_size")]
    pub max_grid_size: u32,

    /// Cells added or removed per grow/shrink keypress
    #[serde(default = "default_size_step")]
    pub size_step: u32,

    /// Side length of the square canvas in pixels (valid range: 128 - 2048)
    #[serde(default = "default_extent")]
    pub extent: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            min_grid_size: default_min_grid_size(),
            max_grid_size: default_max_grid_size(),
            size_step: default_size_step(),
            extent: default_extent(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the state of the drawing tools when the application first opens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial base color: "#rrggbb", "rgb(r, g, b)", a palette name, or `[r, g, b]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial mode (color, rainbow, shader, eraser, picker)
    #[serde(default)]
    pub default_mode: Mode,

    /// Whether pointer movement paints right away
    #[serde(default = "default_drawing_enabled")]
    pub drawing_enabled: bool,

    /// Swatches shown on the control panel (at most 16)
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_mode: Mode::default(),
            drawing_enabled: default_drawing_enabled(),
            palette: default_palette(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Wait for frame callbacks before drawing the next frame
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
///
/// Controls the visibility, positioning and styling of on-screen UI elements.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the status bar displaying mode, color, grid size and drawing state
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar screen position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Font family for the title, panel labels and notifications
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Fill behind the application card [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_backdrop_color")]
    pub backdrop_color: [f64; 4],

    /// Notification timing and welcome message
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Control panel styling options
    #[serde(default)]
    pub panel_style: PanelStyle,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            font_family: default_font_family(),
            backdrop_color: default_backdrop_color(),
            notification: NotificationConfig::default(),
            panel_style: PanelStyle::default(),
            status_bar_style: StatusBarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Notification toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NotificationConfig {
    /// How long each message stays on screen in milliseconds (valid range: 250 - 60000)
    #[serde(default = "default_notification_duration")]
    pub duration_ms: u64,

    /// Delay before the welcome message appears in milliseconds (max 60000)
    #[serde(default = "default_welcome_delay")]
    pub welcome_delay_ms: u64,

    /// Message shown shortly after startup; empty disables it
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_notification_duration(),
            welcome_delay_ms: default_welcome_delay(),
            welcome_message: default_welcome_message(),
        }
    }
}

/// Control panel and card styling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PanelStyle {
    /// Font size for button captions and labels
    #[serde(default = "default_panel_font_size")]
    pub font_size: f64,

    /// Card background [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_card_color")]
    pub card_color: [f64; 4],

    /// Idle button background [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_button_color")]
    pub button_color: [f64; 4],

    /// Highlight for the active mode and the drawing toggle [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_accent_color")]
    pub accent_color: [f64; 4],

    /// Caption color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_panel_text_color")]
    pub text_color: [f64; 4],
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            font_size: default_panel_font_size(),
            card_color: default_card_color(),
            button_color: default_button_color(),
            accent_color: default_accent_color(),
            text_color: default_panel_text_color(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Base color indicator dot radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_grid_size() -> u32 {
    16
}

fn default_min_grid_size() -> u32 {
    8
}

fn default_max_grid_size() -> u32 {
    64
}

fn default_size_step() -> u32 {
    4
}

fn default_extent() -> f64 {
    480.0
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#4361ee".to_string())
}

fn default_drawing_enabled() -> bool {
    true
}

fn default_palette() -> Vec<ColorSpec> {
    ["black", "red", "orange", "yellow", "green", "blue", "purple", "pink"]
        .into_iter()
        .map(|name| ColorSpec::Name(name.to_string()))
        .collect()
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_backdrop_color() -> [f64; 4] {
    [0.945, 0.953, 0.969, 1.0]
}

// Notification defaults
fn default_notification_duration() -> u64 {
    2000
}

fn default_welcome_delay() -> u64 {
    500
}

fn default_welcome_message() -> String {
    "Welcome to Pixel Studio! Start drawing...".to_string()
}

// Panel style defaults
fn default_panel_font_size() -> f64 {
    14.0
}

fn default_card_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_button_color() -> [f64; 4] {
    [0.918, 0.929, 0.953, 1.0]
}

fn default_accent_color() -> [f64; 4] {
    [0.263, 0.380, 0.933, 1.0]
}

fn default_panel_text_color() -> [f64; 4] {
    [0.17, 0.19, 0.26, 1.0]
}

// Status bar style defaults
fn default_status_font_size() -> f64 {
    14.0
}

fn default_status_padding() -> f64 {
    12.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.75]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_status_dot_radius() -> f64 {
    5.0
}

// Help overlay style defaults
fn default_help_font_size() -> f64 {
    16.0
}

fn default_help_line_height() -> f64 {
    22.0
}

fn default_help_padding() -> f64 {
    20.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.26, 0.38, 0.93, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
