//! Configuration file support for pixel-studio.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pixel-studio/config.toml`. Settings include grid dimensions,
//! drawing defaults, UI preferences, performance tuning and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StatusPosition};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CanvasConfig, DrawingConfig, HelpOverlayStyle, NotificationConfig, PanelStyle,
    PerformanceConfig, StatusBarStyle, UiConfig,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest number of palette swatches the control panel lays out.
pub const MAX_PALETTE_SIZE: usize = 16;

/// Upper bound for `min_grid_size` and `max_grid_size`.
pub const MAX_GRID_SIZE: u32 = 256;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// grid_size = 32
///
/// [drawing]
/// default_color = "#e63946"
/// default_mode = "shader"
///
/// [ui]
/// show_status_bar = true
/// status_bar_position = "bottom-left"
///
/// [keybindings]
/// reset_grid = ["Ctrl+R", "Ctrl+N"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Grid dimensions and resize behavior
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial color, mode and palette
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the default)
    /// and a warning is logged.
    ///
    /// Validated ranges:
    /// - `min_grid_size`: 1 - 256; `max_grid_size`: `min_grid_size` - 256
    /// - `grid_size`: `min_grid_size` - `max_grid_size`
    /// - `size_step`: at least 1
    /// - `extent`: 128.0 - 2048.0
    /// - `palette`: at most 16 parseable entries
    /// - `notification.duration_ms`: 250 - 60000; `welcome_delay_ms`: at most 60000
    /// - `buffer_count`: 2 - 4
    /// - all RGBA arrays: 0.0 - 1.0 per component
    pub fn validate_and_clamp(&mut self) {
        let canvas = &mut self.canvas;

        if canvas.min_grid_size == 0 {
            warn!("Invalid min_grid_size 0, using 1");
            canvas.min_grid_size = 1;
        }

        if canvas.max_grid_size > MAX_GRID_SIZE {
            warn!(
                "Invalid max_grid_size {}, clamping to {}",
                canvas.max_grid_size, MAX_GRID_SIZE
            );
            canvas.max_grid_size = MAX_GRID_SIZE;
        }

        if canvas.min_grid_size > MAX_GRID_SIZE {
            warn!(
                "Invalid min_grid_size {}, clamping to {}",
                canvas.min_grid_size, MAX_GRID_SIZE
            );
            canvas.min_grid_size = MAX_GRID_SIZE;
        }

        if canvas.max_grid_size < canvas.min_grid_size {
            warn!(
                "max_grid_size {} is below min_grid_size {}, raising it",
                canvas.max_grid_size, canvas.min_grid_size
            );
            canvas.max_grid_size = canvas.min_grid_size;
        }

        if !(canvas.min_grid_size..=canvas.max_grid_size).contains(&canvas.grid_size) {
            warn!(
                "Invalid grid_size {}, clamping to {}-{} range",
                canvas.grid_size, canvas.min_grid_size, canvas.max_grid_size
            );
            canvas.grid_size = canvas
                .grid_size
                .clamp(canvas.min_grid_size, canvas.max_grid_size);
        }

        if canvas.size_step == 0 {
            warn!("Invalid size_step 0, using 1");
            canvas.size_step = 1;
        }

        if !(128.0..=2048.0).contains(&canvas.extent) {
            warn!(
                "Invalid canvas extent {:.1}, clamping to 128.0-2048.0 range",
                canvas.extent
            );
            canvas.extent = if canvas.extent.is_nan() {
                128.0
            } else {
                canvas.extent.clamp(128.0, 2048.0)
            };
        }

        if let Err(err) = self.drawing.default_color.parse() {
            warn!("Invalid default_color: {}, using #4361ee", err);
            self.drawing.default_color = DrawingConfig::default().default_color;
        }

        self.drawing.palette.retain(|spec| match spec.parse() {
            Ok(_) => true,
            Err(err) => {
                warn!("Dropping palette entry: {}", err);
                false
            }
        });
        if self.drawing.palette.len() > MAX_PALETTE_SIZE {
            warn!(
                "Palette has {} entries, keeping the first {}",
                self.drawing.palette.len(),
                MAX_PALETTE_SIZE
            );
            self.drawing.palette.truncate(MAX_PALETTE_SIZE);
        }

        let notification = &mut self.ui.notification;
        if !(250..=60_000).contains(&notification.duration_ms) {
            warn!(
                "Invalid notification duration_ms {}, clamping to 250-60000 range",
                notification.duration_ms
            );
            notification.duration_ms = notification.duration_ms.clamp(250, 60_000);
        }
        if notification.welcome_delay_ms > 60_000 {
            warn!(
                "Invalid welcome_delay_ms {}, clamping to 60000",
                notification.welcome_delay_ms
            );
            notification.welcome_delay_ms = 60_000;
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        for (name, size) in [
            ("panel_style.font_size", &mut self.ui.panel_style.font_size),
            ("status_bar_style.font_size", &mut self.ui.status_bar_style.font_size),
            ("help_overlay_style.font_size", &mut self.ui.help_overlay_style.font_size),
        ] {
            if !(6.0..=48.0).contains(&*size) {
                warn!("Invalid {} {:.1}, clamping to 6.0-48.0 range", name, size);
                *size = if size.is_nan() { 14.0 } else { size.clamp(6.0, 48.0) };
            }
        }

        let ui = &mut self.ui;
        for (name, rgba) in [
            ("backdrop_color", &mut ui.backdrop_color),
            ("panel_style.card_color", &mut ui.panel_style.card_color),
            ("panel_style.button_color", &mut ui.panel_style.button_color),
            ("panel_style.accent_color", &mut ui.panel_style.accent_color),
            ("panel_style.text_color", &mut ui.panel_style.text_color),
            ("status_bar_style.bg_color", &mut ui.status_bar_style.bg_color),
            ("status_bar_style.text_color", &mut ui.status_bar_style.text_color),
            ("help_overlay_style.bg_color", &mut ui.help_overlay_style.bg_color),
            ("help_overlay_style.border_color", &mut ui.help_overlay_style.border_color),
            ("help_overlay_style.text_color", &mut ui.help_overlay_style.text_color),
        ] {
            clamp_rgba(name, rgba);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pixel-studio/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pixel-studio");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example configuration to the user's config directory.
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        fs::write(&config_path, Self::example_toml())
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The commented example configuration shipped with the binary.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing every configuration key.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(Config);
        serde_json::to_value(&schema).unwrap_or_default()
    }
}

fn clamp_rgba(name: &str, rgba: &mut [f64; 4]) {
    for (i, component) in rgba.iter_mut().enumerate() {
        if !(0.0..=1.0).contains(&*component) {
            warn!(
                "Invalid {}[{}] = {:.3}, clamping to 0.0-1.0",
                name, i, component
            );
            *component = if component.is_nan() {
                1.0
            } else {
                component.clamp(0.0, 1.0)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::DEFAULT_BASE_COLOR;
    use crate::input::Mode;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_initial_application_state() {
        let config = Config::default();
        assert_eq!(config.canvas.grid_size, 16);
        assert_eq!(config.canvas.min_grid_size, 8);
        assert_eq!(config.canvas.max_grid_size, 64);
        assert_eq!(config.canvas.extent, 480.0);
        assert_eq!(config.drawing.default_color.to_color(), DEFAULT_BASE_COLOR);
        assert_eq!(config.drawing.default_mode, Mode::Color);
        assert!(config.drawing.drawing_enabled);
        assert_eq!(config.ui.notification.duration_ms, 2000);
        assert_eq!(config.ui.notification.welcome_delay_ms, 500);
    }

    #[test]
    fn example_file_parses_and_matches_defaults() {
        let mut config: Config = toml::from_str(Config::example_toml()).unwrap();
        config.validate_and_clamp();
        assert_eq!(config.canvas.grid_size, 16);
        assert_eq!(config.drawing.palette.len(), 8);
        config.keybindings.build_action_map().unwrap();
    }

    #[test]
    fn grid_size_is_clamped_into_configured_range() {
        let mut config = Config::default();
        config.canvas.grid_size = 200;
        config.validate_and_clamp();
        assert_eq!(config.canvas.grid_size, 64);

        config.canvas.min_grid_size = 0;
        config.canvas.max_grid_size = 0;
        config.canvas.grid_size = 0;
        config.validate_and_clamp();
        assert_eq!(config.canvas.min_grid_size, 1);
        assert_eq!(config.canvas.max_grid_size, 1);
        assert_eq!(config.canvas.grid_size, 1);
    }

    #[test]
    fn invalid_colors_are_replaced_or_dropped() {
        let mut config = Config::default();
        config.drawing.default_color = ColorSpec::Name("not-a-color".into());
        config.drawing.palette = vec![
            ColorSpec::Name("red".into()),
            ColorSpec::Name("#12".into()),
            ColorSpec::Rgb([1, 2, 3]),
        ];
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_color.to_color(), DEFAULT_BASE_COLOR);
        assert_eq!(config.drawing.palette.len(), 2);
    }

    #[test]
    fn palette_is_truncated() {
        let mut config = Config::default();
        config.drawing.palette = vec![ColorSpec::Rgb([0, 0, 0]); 20];
        config.validate_and_clamp();
        assert_eq!(config.drawing.palette.len(), MAX_PALETTE_SIZE);
    }

    #[test]
    fn numeric_ranges_are_clamped() {
        let mut config = Config::default();
        config.canvas.extent = 10_000.0;
        config.canvas.size_step = 0;
        config.ui.notification.duration_ms = 10;
        config.performance.buffer_count = 9;
        config.ui.backdrop_color = [2.0, -1.0, 0.5, 1.0];
        config.validate_and_clamp();
        assert_eq!(config.canvas.extent, 2048.0);
        assert_eq!(config.canvas.size_step, 1);
        assert_eq!(config.ui.notification.duration_ms, 250);
        assert_eq!(config.performance.buffer_count, 4);
        assert_eq!(config.ui.backdrop_color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn oversized_grid_limits_are_capped() {
        let mut config = Config::default();
        config.canvas.min_grid_size = 100_000;
        config.canvas.max_grid_size = 70_000;
        config.canvas.grid_size = 70_000;
        config.validate_and_clamp();
        assert_eq!(config.canvas.max_grid_size, MAX_GRID_SIZE);
        assert_eq!(config.canvas.min_grid_size, MAX_GRID_SIZE);
        assert_eq!(config.canvas.grid_size, MAX_GRID_SIZE);
    }

    #[test]
    fn oversized_max_grid_size_in_file_is_capped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas]
max_grid_size = 70000
grid_size = 70000
").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.max_grid_size, MAX_GRID_SIZE);
        assert_eq!(config.canvas.grid_size, MAX_GRID_SIZE);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.canvas.grid_size, 16);
    }

    #[test]
    fn load_from_reads_and_validates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[canvas]\ngrid_size = 4\n\n[drawing]\ndefault_mode = \"eraser\"\ndefault_color = [1, 2, 3]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.grid_size, 8);
        assert_eq!(config.drawing.default_mode, Mode::Eraser);
        assert_eq!(config.drawing.default_color, ColorSpec::Rgb([1, 2, 3]));
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn json_schema_lists_sections() {
        let schema = Config::json_schema();
        let properties = schema.get("properties").unwrap();
        for section in ["canvas", "drawing", "performance", "ui", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
