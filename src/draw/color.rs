//! RGB color type, CSS-style parsing, and the color arithmetic used by the drawing modes.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque 8-bit-per-channel RGB color.
///
/// Alpha is never tracked: cells are always fully opaque.
///
/// # Examples
///
/// ```
/// use pixel_studio::draw::Color;
/// let blue = Color::rgb(67, 97, 238);
/// assert_eq!(blue.to_hex(), "#4361ee");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Creates a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draws a color with every channel independently uniform over `[0, 255]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0..=u8::MAX),
            g: rng.gen_range(0..=u8::MAX),
            b: rng.gen_range(0..=u8::MAX),
        }
    }

    /// Returns true for pure white, the color of an unpainted cell.
    pub fn is_white(&self) -> bool {
        *self == WHITE
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Channels scaled to Cairo's 0.0-1.0 range.
    pub fn to_cairo(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Relative luminance approximation used to pick readable label colors.
    pub fn is_dark(&self) -> bool {
        let luma = 0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64;
        luma < 140.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Predefined Colors
// ============================================================================

/// Unpainted cell color.
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Fallback for unparseable color strings.
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// Base color selected at startup (#4361ee).
pub const DEFAULT_BASE_COLOR: Color = Color::rgb(0x43, 0x61, 0xee);

/// Faint outline drawn around untouched cells (#f0f0f0).
pub const CELL_OUTLINE: Color = Color::rgb(0xf0, 0xf0, 0xf0);

// ============================================================================
// Conversions
// ============================================================================

/// Formats three channels as a zero-padded, lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parses a hex or `rgb()`/`rgba()` color string, falling back to black.
///
/// - Strings starting with `#` are read as `#rrggbb`.
/// - Otherwise the first `rgb(r, g, b)` or `rgba(r, g, b, a)` occurrence is used;
///   alpha is ignored and channels above 255 saturate.
/// - Anything else yields [`BLACK`]. This is a silent fallback, not an error.
pub fn parse_color(input: &str) -> Color {
    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex6(hex).unwrap_or(BLACK);
    }

    find_rgb_function(input).unwrap_or(BLACK)
}

/// Multiplies every channel by `1 - percentage`, flooring the result.
///
/// `percentage` is clamped to `[0, 1]`, so 0 is the identity and 1 yields black.
pub fn darken_color(color: Color, percentage: f64) -> Color {
    let factor = 1.0 - percentage.clamp(0.0, 1.0);
    let scale = |channel: u8| (channel as f64 * factor).floor().max(0.0) as u8;
    Color {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

fn hex_pair(pair: &[u8]) -> Option<u8> {
    let text = std::str::from_utf8(pair).ok()?;
    u8::from_str_radix(text, 16).ok()
}

fn parse_hex6(hex: &str) -> Option<Color> {
    let bytes = hex.as_bytes();
    if bytes.len() < 6 {
        return None;
    }
    Some(Color {
        r: hex_pair(&bytes[0..2])?,
        g: hex_pair(&bytes[2..4])?,
        b: hex_pair(&bytes[4..6])?,
    })
}

/// Scans for the first well-formed `rgb(`/`rgba(` call anywhere in `input`.
fn find_rgb_function(input: &str) -> Option<Color> {
    let lower = input.to_ascii_lowercase();
    let mut offset = 0;

    while let Some(found) = lower[offset..].find("rgb") {
        let start = offset + found + 3;
        let rest = &lower[start..];
        let rest = rest.strip_prefix('a').unwrap_or(rest);
        if let Some(args) = rest.strip_prefix('(') {
            if let Some(color) = parse_rgb_args(args) {
                return Some(color);
            }
        }
        offset = start;
    }

    None
}

/// Parses `r, g, b[, a])` with integer channels.
fn parse_rgb_args(args: &str) -> Option<Color> {
    let close = args.find(')')?;
    let parts: Vec<&str> = args[..close].split(',').collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let channel = |index: usize| -> Option<u8> {
        let raw = parts[index];
        // Whitespace is allowed after a comma but not before the first channel.
        let raw = if index == 0 { raw } else { raw.trim_start() };
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: u32 = raw.parse().unwrap_or(u32::MAX);
        Some(value.min(u8::MAX as u32) as u8)
    };

    if parts.len() == 4 {
        let alpha = parts[3].trim_start();
        if alpha.is_empty() || !alpha.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return None;
        }
    }

    Some(Color {
        r: channel(0)?,
        g: channel(1)?,
        b: channel(2)?,
    })
}

// ============================================================================
// Strict Parsing
// ============================================================================

/// Errors reported by the strict [`Color`] parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color '{0}' (expected #rgb or #rrggbb)")]
    InvalidHex(String),
    #[error("invalid rgb()/rgba() color '{0}'")]
    InvalidFunction(String),
    #[error("channel value {0} is out of range 0-255")]
    OutOfRange(u32),
    #[error("unknown color '{0}'")]
    Unknown(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Strict parsing for user-supplied colors (config file, CLI, hex entry).
    ///
    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and palette names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_strict_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("));
        if let Some(args) = args {
            return parse_strict_function(args, s);
        }

        crate::util::name_to_color(trimmed).ok_or_else(|| ColorParseError::Unknown(s.to_string()))
    }
}

fn parse_strict_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
            Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => parse_hex6(hex),
        _ => None,
    }
}

fn parse_strict_function(args: &str, original: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction(original.to_string());
    let body = args.strip_suffix(')').ok_or_else(invalid)?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(invalid());
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: u32 = part.parse().map_err(|_| invalid())?;
        if value > u8::MAX as u32 {
            return Err(ColorParseError::OutOfRange(value));
        }
        *slot = value as u8;
    }

    if let Some(alpha) = parts.get(3) {
        alpha.parse::<f64>().map_err(|_| invalid())?;
    }

    Ok(Color::rgb(channels[0], channels[1], channels[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn parses_hex_strings() {
        assert_eq!(parse_color("#4361ee"), DEFAULT_BASE_COLOR);
        assert_eq!(parse_color("#FF0000"), Color::rgb(255, 0, 0));
    }

    #[test]
    fn parses_rgb_and_rgba_functions() {
        assert_eq!(parse_color("rgb(255, 229, 229)"), Color::rgb(255, 229, 229));
        assert_eq!(parse_color("rgb(1,2,3)"), Color::rgb(1, 2, 3));
        assert_eq!(parse_color("RGBA(10, 20, 30, 0.5)"), Color::rgb(10, 20, 30));
        assert_eq!(parse_color("color: rgb(7, 8, 9);"), Color::rgb(7, 8, 9));
    }

    #[test]
    fn unparseable_input_falls_back_to_black() {
        assert_eq!(parse_color("white"), BLACK);
        assert_eq!(parse_color(""), BLACK);
        assert_eq!(parse_color("#zzzzzz"), BLACK);
        assert_eq!(parse_color("rgb(1.5, 2, 3)"), BLACK);
        assert_eq!(parse_color("hsl(120, 50%, 50%)"), BLACK);
    }

    #[test]
    fn oversized_channels_saturate() {
        assert_eq!(parse_color("rgb(300, 0, 1000)"), Color::rgb(255, 0, 255));
    }

    #[test]
    fn hex_output_is_zero_padded_lowercase() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(1, 171, 255), "#01abff");
        assert_eq!(DEFAULT_BASE_COLOR.to_string(), "#4361ee");
    }

    #[test]
    fn hex_round_trip_covers_every_channel_value() {
        for v in 0..=u8::MAX {
            let color = Color::rgb(v, 255 - v, v / 2);
            assert_eq!(parse_color(&color.to_hex()), color);
        }
    }

    #[test]
    fn darken_zero_is_identity_and_one_is_black() {
        let color = Color::rgb(100, 50, 200);
        assert_eq!(darken_color(color, 0.0), color);
        assert_eq!(darken_color(color, 1.0), BLACK);
    }

    #[test]
    fn darken_floors_each_channel() {
        // 0.9 * 255 = 229.5, 0.9 * 15 = 13.5
        assert_eq!(
            darken_color(Color::rgb(255, 15, 1), 0.1),
            Color::rgb(229, 13, 0)
        );
    }

    #[test]
    fn darken_clamps_out_of_range_percentages() {
        let color = Color::rgb(10, 20, 30);
        assert_eq!(darken_color(color, -0.5), color);
        assert_eq!(darken_color(color, 2.0), BLACK);
    }

    #[test]
    fn strict_parser_accepts_supported_forms() {
        assert_eq!("#4361ee".parse::<Color>().unwrap(), DEFAULT_BASE_COLOR);
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(
            "rgba(1, 2, 3, 0.25)".parse::<Color>().unwrap(),
            Color::rgb(1, 2, 3)
        );
        assert_eq!("Black".parse::<Color>().unwrap(), BLACK);
    }

    #[test]
    fn strict_parser_reports_errors() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert_eq!(
            "rgb(256, 0, 0)".parse::<Color>(),
            Err(ColorParseError::OutOfRange(256))
        );
        assert!(matches!(
            "rgb(1, 2)".parse::<Color>(),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(ColorParseError::Unknown(_))
        ));
    }

    #[test]
    fn random_channels_are_uniform() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let trials = 40_000;
        let mut buckets = [[0usize; 4]; 3];

        for _ in 0..trials {
            let color = Color::random(&mut rng);
            for (channel, value) in [color.r, color.g, color.b].into_iter().enumerate() {
                buckets[channel][(value / 64) as usize] += 1;
            }
        }

        for channel in buckets {
            for count in channel {
                let share = count as f64 / trials as f64;
                assert!((0.23..0.27).contains(&share), "bucket share {share}");
            }
        }
    }

    #[test]
    fn whiteness_and_darkness_helpers() {
        assert!(WHITE.is_white());
        assert!(!CELL_OUTLINE.is_white());
        assert!(BLACK.is_dark());
        assert!(!WHITE.is_dark());
    }
}
