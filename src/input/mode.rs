//! Drawing mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Active drawing behavior applied to the cell under the pointer.
///
/// Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Paint the active base color (default)
    #[default]
    Color,
    /// Paint a uniformly random color
    Rainbow,
    /// Progressive shading toward the base color
    Shader,
    /// Restore cells to unpainted white
    Eraser,
    /// Pick the base color from a painted cell on click
    Picker,
}

impl Mode {
    /// All modes in panel order.
    pub const ALL: [Mode; 5] = [
        Mode::Color,
        Mode::Rainbow,
        Mode::Shader,
        Mode::Eraser,
        Mode::Picker,
    ];

    /// Lowercase identifier used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Color => "color",
            Mode::Rainbow => "rainbow",
            Mode::Shader => "shader",
            Mode::Eraser => "eraser",
            Mode::Picker => "picker",
        }
    }

    /// Capitalized name used in notifications ("Picker mode activated").
    pub fn title(self) -> &'static str {
        match self {
            Mode::Color => "Color",
            Mode::Rainbow => "Rainbow",
            Mode::Shader => "Shader",
            Mode::Eraser => "Eraser",
            Mode::Picker => "Picker",
        }
    }

    /// Button caption on the control panel.
    pub fn button_label(self) -> &'static str {
        match self {
            Mode::Picker => "Pick Color",
            other => other.title(),
        }
    }

    /// Whether pointer-enter and click events change cells in this mode.
    pub fn paints(self) -> bool {
        !matches!(self, Mode::Picker)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" => Ok(Self::Color),
            "rainbow" => Ok(Self::Rainbow),
            "shader" | "shade" => Ok(Self::Shader),
            "eraser" | "erase" => Ok(Self::Eraser),
            "picker" | "pick" => Ok(Self::Picker),
            other => Err(format!(
                "unknown mode '{other}' (expected color, rainbow, shader, eraser or picker)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_color() {
        assert_eq!(Mode::default(), Mode::Color);
    }

    #[test]
    fn from_str_accepts_names_and_aliases() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_str(mode.name()).unwrap(), mode);
        }
        assert_eq!(Mode::from_str("PICKER").unwrap(), Mode::Picker);
        assert_eq!(Mode::from_str("erase").unwrap(), Mode::Eraser);
        assert!(Mode::from_str("spray").is_err());
    }

    #[test]
    fn labels_match_panel_captions() {
        assert_eq!(Mode::Picker.button_label(), "Pick Color");
        assert_eq!(Mode::Shader.button_label(), "Shader");
        assert_eq!(Mode::Picker.title(), "Picker");
    }

    #[test]
    fn only_picker_does_not_paint() {
        let painting: Vec<Mode> = Mode::ALL.into_iter().filter(|m| m.paints()).collect();
        assert_eq!(painting.len(), 4);
        assert!(!Mode::Picker.paints());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: Mode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"rainbow\"").unwrap();
        assert_eq!(parsed.mode, Mode::Rainbow);
    }
}
