//! Utility functions for palette names and rectangle geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the built-in palette (config files, CLI, strict parsing)
//! - Color-to-name lookup for the status bar
//! - The `Rect` helper used by dirty-region tracking and hit testing

use crate::draw::Color;

// ============================================================================
// Color Mapping
// ============================================================================

/// Named colors understood by configuration files and the command line.
///
/// Order matches the default swatch row of the control panel.
pub const NAMED_COLORS: [(&str, Color); 9] = [
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("red", Color::rgb(0xe6, 0x39, 0x46)),
    ("orange", Color::rgb(0xf7, 0x7f, 0x00)),
    ("yellow", Color::rgb(0xfc, 0xbf, 0x49)),
    ("green", Color::rgb(0x2a, 0x9d, 0x8f)),
    ("blue", Color::rgb(0x43, 0x61, 0xee)),
    ("purple", Color::rgb(0x72, 0x09, 0xb7)),
    ("pink", Color::rgb(0xf7, 0x25, 0x85)),
];

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "orange", "yellow", "green", "blue", "purple", "pink"
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

/// Maps a Color value to its palette name.
///
/// Only exact matches are named; anything else is reported as "Custom".
/// Used by the status bar next to the hex value.
pub fn color_to_name(color: &Color) -> &'static str {
    NAMED_COLORS
        .iter()
        .find(|(_, candidate)| candidate == color)
        .map(|(name, _)| *name)
        .unwrap_or("custom")
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Smallest integer rectangle covering the floating-point area, grown by `pad` pixels.
    pub fn covering(x: f64, y: f64, width: f64, height: f64, pad: i32) -> Option<Self> {
        let min_x = x.floor() as i32 - pad;
        let min_y = y.floor() as i32 - pad;
        let max_x = (x + width).ceil() as i32 + pad;
        let max_y = (y + height).ceil() as i32 + pad;
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    /// Returns true if the point lies inside the rectangle (exclusive max edges).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < (self.x + self.width) as f64
            && y < (self.y + self.height) as f64
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
