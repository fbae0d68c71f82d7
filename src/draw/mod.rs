//! Pixel grid model and Cairo rendering primitives.
//!
//! This module defines the core drawing types:
//! - [`Color`]: opaque RGB color with CSS-style parsing and darkening
//! - [`Grid`] and [`Cell`]: the square canvas of paintable cells
//! - [`shade`]: the progressive shading state machine
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod dirty;
pub mod font;
pub mod grid;
pub mod render;
pub mod shade;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError, darken_color, parse_color, rgb_to_hex};
pub use dirty::DirtyTracker;
pub use font::FontDescriptor;
pub use grid::{Cell, Grid};
pub use render::{render_backdrop, render_cursor, render_grid};
pub use shade::{MAX_SHADE_LEVEL, shade_cell};
