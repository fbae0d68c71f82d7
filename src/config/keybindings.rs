//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize keyboard shortcuts for all actions in the application.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::input::Mode;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit
    Exit,

    // Mode selection
    ModeColor,
    ModeRainbow,
    ModeShader,
    ModeEraser,
    ModePicker,

    // Canvas actions
    ToggleDrawing,
    ResetGrid,
    GrowGrid,
    ShrinkGrid,

    // Base color
    EnterHexColor,
    CopyColor,

    // UI toggles
    ToggleHelp,
    ToggleStatusBar,
}

impl Action {
    /// Mode activated by this action, if it is a mode selection.
    pub fn mode(self) -> Option<Mode> {
        match self {
            Action::ModeColor => Some(Mode::Color),
            Action::ModeRainbow => Some(Mode::Rainbow),
            Action::ModeShader => Some(Mode::Shader),
            Action::ModeEraser => Some(Mode::Eraser),
            Action::ModePicker => Some(Mode::Picker),
            _ => None,
        }
    }
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+R" or "Escape".
    /// Modifiers can appear in any order: "Shift+Ctrl+R", "Alt+Shift+Ctrl+R", etc.
    /// Supports spaces around '+' (e.g., "Ctrl + R")
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the empty parts are the '+' key itself.
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    ///
    /// Shift is ignored for punctuation keys, since producing '+' or '_'
    /// already requires it on most layouts.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        let shift_matches = self.shift == shift || (!self.shift && is_punctuation(&self.key));
        self.key.eq_ignore_ascii_case(key) && self.ctrl == ctrl && shift_matches && self.alt == alt
    }
}

fn is_punctuation(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// reset_grid = ["Ctrl+R"]
/// mode_eraser = ["4", "E"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_mode_color")]
    pub mode_color: Vec<String>,

    #[serde(default = "default_mode_rainbow")]
    pub mode_rainbow: Vec<String>,

    #[serde(default = "default_mode_shader")]
    pub mode_shader: Vec<String>,

    #[serde(default = "default_mode_eraser")]
    pub mode_eraser: Vec<String>,

    #[serde(default = "default_mode_picker")]
    pub mode_picker: Vec<String>,

    #[serde(default = "default_toggle_drawing")]
    pub toggle_drawing: Vec<String>,

    #[serde(default = "default_reset_grid")]
    pub reset_grid: Vec<String>,

    #[serde(default = "default_grow_grid")]
    pub grow_grid: Vec<String>,

    #[serde(default = "default_shrink_grid")]
    pub shrink_grid: Vec<String>,

    #[serde(default = "default_enter_hex_color")]
    pub enter_hex_color: Vec<String>,

    #[serde(default = "default_copy_color")]
    pub copy_color: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_toggle_status_bar")]
    pub toggle_status_bar: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            mode_color: default_mode_color(),
            mode_rainbow: default_mode_rainbow(),
            mode_shader: default_mode_shader(),
            mode_eraser: default_mode_eraser(),
            mode_picker: default_mode_picker(),
            toggle_drawing: default_toggle_drawing(),
            reset_grid: default_reset_grid(),
            grow_grid: default_grow_grid(),
            shrink_grid: default_shrink_grid(),
            enter_hex_color: default_enter_hex_color(),
            copy_color: default_copy_color(),
            toggle_help: default_toggle_help(),
            toggle_status_bar: default_toggle_status_bar(),
        }
    }
}

impl KeybindingsConfig {
    /// Binding strings paired with the action they trigger, in declaration order.
    fn entries(&self) -> [(&[String], Action); 14] {
        [
            (self.exit.as_slice(), Action::Exit),
            (self.mode_color.as_slice(), Action::ModeColor),
            (self.mode_rainbow.as_slice(), Action::ModeRainbow),
            (self.mode_shader.as_slice(), Action::ModeShader),
            (self.mode_eraser.as_slice(), Action::ModeEraser),
            (self.mode_picker.as_slice(), Action::ModePicker),
            (self.toggle_drawing.as_slice(), Action::ToggleDrawing),
            (self.reset_grid.as_slice(), Action::ResetGrid),
            (self.grow_grid.as_slice(), Action::GrowGrid),
            (self.shrink_grid.as_slice(), Action::ShrinkGrid),
            (self.enter_hex_color.as_slice(), Action::EnterHexColor),
            (self.copy_color.as_slice(), Action::CopyColor),
            (self.toggle_help.as_slice(), Action::ToggleHelp),
            (self.toggle_status_bar.as_slice(), Action::ToggleStatusBar),
        ]
    }

    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();
        // Keys compare case-insensitively, so "r" and "R" are the same binding.
        let mut seen: HashMap<KeyBinding, Action> = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                let normalized = KeyBinding {
                    key: binding.key.to_ascii_uppercase(),
                    ..binding.clone()
                };
                if let Some(existing_action) = seen.insert(normalized, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
                map.insert(binding, action);
            }
        }

        Ok(map)
    }

    /// Every binding string for `action` joined with " / ", used by the help overlay.
    pub fn describe(&self, action: Action) -> String {
        self.entries()
            .into_iter()
            .find(|(_, candidate)| *candidate == action)
            .map(|(bindings, _)| bindings.join(" / "))
            .unwrap_or_default()
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_mode_color() -> Vec<String> {
    vec!["1".to_string(), "B".to_string()]
}

fn default_mode_rainbow() -> Vec<String> {
    vec!["2".to_string(), "R".to_string()]
}

fn default_mode_shader() -> Vec<String> {
    vec!["3".to_string(), "S".to_string()]
}

fn default_mode_eraser() -> Vec<String> {
    vec!["4".to_string(), "E".to_string()]
}

fn default_mode_picker() -> Vec<String> {
    vec!["5".to_string(), "I".to_string()]
}

fn default_toggle_drawing() -> Vec<String> {
    vec!["Space".to_string()]
}

fn default_reset_grid() -> Vec<String> {
    vec!["Ctrl+R".to_string()]
}

fn default_grow_grid() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_shrink_grid() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_enter_hex_color() -> Vec<String> {
    vec!["H".to_string()]
}

fn default_copy_color() -> Vec<String> {
    vec!["Ctrl+C".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F1".to_string(), "F10".to_string()]
}

fn default_toggle_status_bar() -> Vec<String> {
    vec!["F12".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+R").unwrap();
        assert_eq!(binding.key, "R");
        assert!(binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let a = KeyBinding::parse("Ctrl + Shift + W").unwrap();
        let b = KeyBinding::parse("Shift+Ctrl+W").unwrap();
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift && !a.alt);
    }

    #[test]
    fn test_parse_plus_key() {
        let plain = KeyBinding::parse("+").unwrap();
        assert_eq!(plain.key, "+");
        assert!(!plain.ctrl);

        let ctrl_plus = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(ctrl_plus.key, "+");
        assert!(ctrl_plus.ctrl);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+R").unwrap();
        assert!(binding.matches("R", true, false, false));
        assert!(binding.matches("r", true, false, false));
        assert!(!binding.matches("r", false, false, false));
        assert!(!binding.matches("r", true, true, false));
    }

    #[test]
    fn test_punctuation_ignores_shift() {
        let plus = KeyBinding::parse("+").unwrap();
        assert!(plus.matches("+", false, true, false));
        assert!(plus.matches("+", false, false, false));
        assert!(!plus.matches("+", true, true, false));

        // Letters stay strict.
        let letter = KeyBinding::parse("E").unwrap();
        assert!(!letter.matches("E", false, true, false));
    }

    #[test]
    fn test_build_action_map() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Exit));

        let four = KeyBinding::parse("4").unwrap();
        assert_eq!(map.get(&four), Some(&Action::ModeEraser));

        let space = KeyBinding::parse("Space").unwrap();
        assert_eq!(map.get(&space), Some(&Action::ToggleDrawing));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.exit = vec!["Ctrl+R".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("Ctrl+R"));
    }

    #[test]
    fn test_duplicate_detection_ignores_letter_case() {
        let mut config = KeybindingsConfig::default();
        config.mode_shader = vec!["e".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("ModeEraser"));
    }

    #[test]
    fn test_action_mode_mapping() {
        assert_eq!(Action::ModePicker.mode(), Some(Mode::Picker));
        assert_eq!(Action::ResetGrid.mode(), None);
    }

    #[test]
    fn test_describe_joins_bindings() {
        let config = KeybindingsConfig::default();
        assert_eq!(config.describe(Action::Exit), "Escape / Ctrl+Q");
    }
}
