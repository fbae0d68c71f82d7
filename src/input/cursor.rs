//! Pointer glyph reflecting the active mode and base color.

use super::Mode;
use crate::draw::Color;
use crate::util::Rect;

/// Radius of the circular brush and eraser glyphs.
pub const CURSOR_RADIUS: f64 = 8.0;

/// Half-length of the crosshair arms.
pub const CROSSHAIR_ARM: f64 = 10.0;

/// Pointer appearance drawn by the renderer in place of the system cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    /// Plain arrow: drawing paused or pointer outside the canvas
    Default,
    /// Thin cross used by the picker
    Crosshair,
    /// White circle with a black outline
    Eraser,
    /// Circle filled with the base color, white outline
    Brush(Color),
}

impl CursorStyle {
    /// Glyph for the canvas given the current controller state.
    pub fn for_state(mode: Mode, drawing_enabled: bool, base_color: Color) -> Self {
        if !drawing_enabled {
            return Self::Default;
        }
        match mode {
            Mode::Picker => Self::Crosshair,
            Mode::Eraser => Self::Eraser,
            Mode::Color | Mode::Rainbow | Mode::Shader => Self::Brush(base_color),
        }
    }

    /// Screen area touched when the glyph is drawn at `(x, y)`.
    pub fn bounds(&self, x: f64, y: f64) -> Option<Rect> {
        match self {
            // Arrow extends down and right from the hotspot.
            Self::Default => Rect::covering(x, y, 14.0, 20.0, 2),
            Self::Crosshair => Rect::covering(
                x - CROSSHAIR_ARM,
                y - CROSSHAIR_ARM,
                CROSSHAIR_ARM * 2.0,
                CROSSHAIR_ARM * 2.0,
                2,
            ),
            Self::Eraser | Self::Brush(_) => Rect::covering(
                x - CURSOR_RADIUS,
                y - CURSOR_RADIUS,
                CURSOR_RADIUS * 2.0,
                CURSOR_RADIUS * 2.0,
                2,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::DEFAULT_BASE_COLOR;

    #[test]
    fn paused_drawing_shows_default_cursor_in_every_mode() {
        for mode in Mode::ALL {
            assert_eq!(
                CursorStyle::for_state(mode, false, DEFAULT_BASE_COLOR),
                CursorStyle::Default
            );
        }
    }

    #[test]
    fn mode_selects_glyph() {
        let base = Color::rgb(10, 20, 30);
        assert_eq!(CursorStyle::for_state(Mode::Picker, true, base), CursorStyle::Crosshair);
        assert_eq!(CursorStyle::for_state(Mode::Eraser, true, base), CursorStyle::Eraser);
        assert_eq!(CursorStyle::for_state(Mode::Color, true, base), CursorStyle::Brush(base));
        assert_eq!(CursorStyle::for_state(Mode::Shader, true, base), CursorStyle::Brush(base));
        assert_eq!(CursorStyle::for_state(Mode::Rainbow, true, base), CursorStyle::Brush(base));
    }

    #[test]
    fn bounds_cover_the_glyph() {
        let rect = CursorStyle::Eraser.bounds(100.0, 100.0).unwrap();
        assert!(rect.contains(100.0 - CURSOR_RADIUS, 100.0));
        assert!(rect.contains(100.0 + CURSOR_RADIUS, 100.0));
    }
}
