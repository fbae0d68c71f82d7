//! Configuration enum types.

use crate::draw::color::{Color, ColorParseError, DEFAULT_BASE_COLOR};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status bar position on screen.
///
/// Controls where the status bar appears relative to screen edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Hex, rgb() or palette name
/// default_color = "#4361ee"
/// default_color = "rgb(230, 57, 70)"
/// default_color = "purple"
///
/// # RGB array (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` or a palette name
    /// (black, white, red, orange, yellow, green, blue, purple, pink)
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Strictly parses the specification.
    pub fn parse(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorSpec::Name(text) => text.parse(),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`].
    ///
    /// Unparseable strings fall back to the default base color with a warning.
    pub fn to_color(&self) -> Color {
        self.parse().unwrap_or_else(|err| {
            warn!("{}, using {}", err, DEFAULT_BASE_COLOR);
            DEFAULT_BASE_COLOR
        })
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_accepts_every_string_form() {
        let blue = Color::rgb(0x43, 0x61, 0xee);
        assert_eq!(ColorSpec::Name("#4361ee".into()).to_color(), blue);
        assert_eq!(ColorSpec::Name("rgb(67, 97, 238)".into()).to_color(), blue);
        assert_eq!(ColorSpec::Name("blue".into()).to_color(), blue);
        assert_eq!(
            ColorSpec::Rgb([255, 128, 0]).to_color(),
            Color::rgb(255, 128, 0)
        );
    }

    #[test]
    fn unknown_color_falls_back_to_default_base() {
        let spec = ColorSpec::Name("chartreuse-ish".into());
        assert!(spec.parse().is_err());
        assert_eq!(spec.to_color(), DEFAULT_BASE_COLOR);
    }

    #[test]
    fn untagged_deserialization() {
        #[derive(Deserialize)]
        struct Wrapper {
            a: ColorSpec,
            b: ColorSpec,
        }
        let parsed: Wrapper = toml::from_str("a = \"red\"\nb = [1, 2, 3]").unwrap();
        assert_eq!(parsed.a, ColorSpec::Name("red".into()));
        assert_eq!(parsed.b, ColorSpec::Rgb([1, 2, 3]));
    }

    #[test]
    fn status_position_is_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            pos: StatusPosition,
        }
        let parsed: Wrapper = toml::from_str("pos = \"top-right\"").unwrap();
        assert_eq!(parsed.pos, StatusPosition::TopRight);
    }
}
