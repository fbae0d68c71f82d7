//! Progressive shading: each pass pushes a cell 10% further toward its target.

use super::color::{Color, darken_color};
use super::grid::Cell;

/// Shade level at which a cell stops changing.
pub const MAX_SHADE_LEVEL: u8 = 10;

const SHADE_STEP: f64 = 0.1;

/// Blends `base` toward white, keeping `level` tenths of the base color.
///
/// `channel = 255 - (255 - base) * level * 0.1`, floored. Level 10 is the base color itself.
pub fn tint_toward_white(base: Color, level: u8) -> Color {
    let amount = level as f64 * SHADE_STEP;
    let blend = |channel: u8| (255.0 - (255.0 - channel as f64) * amount).floor() as u8;
    Color {
        r: blend(base.r),
        g: blend(base.g),
        b: blend(base.b),
    }
}

/// Computes the next `(shade_level, color)` for a cell, or `None` once saturated.
///
/// A white cell takes the base color tinted by its new level; any other color is
/// darkened by 10%.
pub fn next_shade(level: u8, current: Color, base: Color) -> Option<(u8, Color)> {
    if level >= MAX_SHADE_LEVEL {
        return None;
    }

    let level = level + 1;
    let color = if current.is_white() {
        tint_toward_white(base, level)
    } else {
        darken_color(current, SHADE_STEP)
    };
    Some((level, color))
}

/// Applies one shading pass to `cell`. Returns false when the cell is already saturated.
pub fn shade_cell(cell: &mut Cell, base: Color) -> bool {
    match next_shade(cell.shade_level, cell.color, base) {
        Some((level, color)) => {
            cell.shade_level = level;
            cell.color = color;
            cell.outlined = false;
            true
        }
        None => false,
    }
}
