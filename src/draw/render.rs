//! Cairo-based rendering of the pixel grid, cursor glyphs and text labels.

use super::color::{CELL_OUTLINE, Color};
use super::font::FontDescriptor;
use super::grid::Grid;
use crate::input::cursor::{CROSSHAIR_ARM, CURSOR_RADIUS, CursorStyle};

/// Fills the whole surface with the configured backdrop, replacing previous contents.
pub fn render_backdrop(ctx: &cairo::Context, width: i32, height: i32, rgba: [f64; 4]) {
    let _ = ctx.save();
    let [r, g, b, a] = rgba;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    let _ = ctx.fill();
    let _ = ctx.restore();
}

/// Paints every cell of `grid` with its top-left corner at `(origin_x, origin_y)`.
///
/// Untouched cells get a 1px `#f0f0f0` outline drawn inside their bounds.
pub fn render_grid(ctx: &cairo::Context, grid: &Grid, origin_x: f64, origin_y: f64) {
    let _ = ctx.save();
    // Crisp cell edges; antialiasing blurs neighbouring cells together at small sizes.
    ctx.set_antialias(cairo::Antialias::None);

    for (index, cell) in grid.cells().iter().enumerate() {
        let Some((x, y, w, h)) = grid.cell_bounds(index) else {
            continue;
        };
        let (r, g, b) = cell.color.to_cairo();
        ctx.set_source_rgb(r, g, b);
        ctx.rectangle(origin_x + x, origin_y + y, w, h);
        let _ = ctx.fill();

        if cell.outlined {
            let (r, g, b) = CELL_OUTLINE.to_cairo();
            ctx.set_source_rgb(r, g, b);
            ctx.set_line_width(1.0);
            ctx.rectangle(
                origin_x + x + 0.5,
                origin_y + y + 0.5,
                (w - 1.0).max(0.0),
                (h - 1.0).max(0.0),
            );
            let _ = ctx.stroke();
        }
    }

    let _ = ctx.restore();
}

/// Draws the pointer glyph with its hotspot at `(x, y)`.
pub fn render_cursor(ctx: &cairo::Context, style: CursorStyle, x: f64, y: f64) {
    let _ = ctx.save();
    ctx.set_antialias(cairo::Antialias::Best);

    match style {
        CursorStyle::Default => render_arrow(ctx, x, y),
        CursorStyle::Crosshair => {
            ctx.set_line_width(3.0);
            ctx.set_source_rgba(1.0, 1.0, 1.0, 0.9);
            stroke_crosshair(ctx, x, y);
            ctx.set_line_width(1.0);
            ctx.set_source_rgb(0.0, 0.0, 0.0);
            stroke_crosshair(ctx, x, y);
        }
        CursorStyle::Eraser => {
            render_disc(ctx, x, y, Color::rgb(255, 255, 255), Color::rgb(0, 0, 0));
        }
        CursorStyle::Brush(color) => {
            render_disc(ctx, x, y, color, Color::rgb(255, 255, 255));
        }
    }

    let _ = ctx.restore();
}

fn stroke_crosshair(ctx: &cairo::Context, x: f64, y: f64) {
    let x = x.floor() + 0.5;
    let y = y.floor() + 0.5;
    ctx.move_to(x - CROSSHAIR_ARM, y);
    ctx.line_to(x + CROSSHAIR_ARM, y);
    ctx.move_to(x, y - CROSSHAIR_ARM);
    ctx.line_to(x, y + CROSSHAIR_ARM);
    let _ = ctx.stroke();
}

fn render_disc(ctx: &cairo::Context, x: f64, y: f64, fill: Color, outline: Color) {
    let (r, g, b) = fill.to_cairo();
    ctx.set_source_rgb(r, g, b);
    ctx.arc(x, y, CURSOR_RADIUS, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill_preserve();

    let (r, g, b) = outline.to_cairo();
    ctx.set_source_rgb(r, g, b);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();
}

fn render_arrow(ctx: &cairo::Context, x: f64, y: f64) {
    ctx.move_to(x, y);
    ctx.line_to(x, y + 16.0);
    ctx.line_to(x + 4.0, y + 12.0);
    ctx.line_to(x + 7.0, y + 18.0);
    ctx.line_to(x + 9.5, y + 17.0);
    ctx.line_to(x + 6.5, y + 11.0);
    ctx.line_to(x + 11.5, y + 11.0);
    ctx.close_path();
    ctx.set_source_rgb(0.0, 0.0, 0.0);
    let _ = ctx.fill_preserve();
    ctx.set_source_rgb(1.0, 1.0, 1.0);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();
}

/// Adds a rounded rectangle to the current path.
pub fn rounded_rect(ctx: &cairo::Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let radius = radius.min(width / 2.0).min(height / 2.0).max(0.0);
    let pi = std::f64::consts::PI;
    ctx.new_sub_path();
    ctx.arc(x + width - radius, y + radius, radius, -pi / 2.0, 0.0);
    ctx.arc(x + width - radius, y + height - radius, radius, 0.0, pi / 2.0);
    ctx.arc(x + radius, y + height - radius, radius, pi / 2.0, pi);
    ctx.arc(x + radius, y + radius, radius, pi, 3.0 * pi / 2.0);
    ctx.close_path();
}

fn text_layout(
    ctx: &cairo::Context,
    text: &str,
    size: f64,
    font_descriptor: &FontDescriptor,
) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font_descriptor.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);
    layout
}

/// Logical `(width, height)` of `text` in pixels.
pub fn measure_text(
    ctx: &cairo::Context,
    text: &str,
    size: f64,
    font_descriptor: &FontDescriptor,
) -> (f64, f64) {
    let layout = text_layout(ctx, text, size, font_descriptor);
    let (_ink, logical) = layout.extents();
    (
        logical.width() as f64 / pango::SCALE as f64,
        logical.height() as f64 / pango::SCALE as f64,
    )
}

/// Renders `text` with its logical box centered inside the given rectangle.
pub fn render_label_centered(
    ctx: &cairo::Context,
    text: &str,
    rect: (f64, f64, f64, f64),
    size: f64,
    font_descriptor: &FontDescriptor,
    rgba: [f64; 4],
) {
    let (x, y, width, height) = rect;
    let (text_width, text_height) = measure_text(ctx, text, size, font_descriptor);
    render_label(
        ctx,
        text,
        x + (width - text_width) / 2.0,
        y + (height - text_height) / 2.0,
        size,
        font_descriptor,
        rgba,
    );
}

/// Renders `text` with the top-left of its logical box at `(x, y)`.
pub fn render_label(
    ctx: &cairo::Context,
    text: &str,
    x: f64,
    y: f64,
    size: f64,
    font_descriptor: &FontDescriptor,
    rgba: [f64; 4],
) {
    let _ = ctx.save();
    // Gray antialiasing; subpixel fringes on the ARGB overlay.
    ctx.set_antialias(cairo::Antialias::Best);
    let layout = text_layout(ctx, text, size, font_descriptor);
    let [r, g, b, a] = rgba;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x, y);
    pangocairo::functions::show_layout(ctx, &layout);
    let _ = ctx.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(size: i32) -> (cairo::ImageSurface, cairo::Context) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        (surface, ctx)
    }

    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> [u8; 4] {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        // ARGB32 is stored as native-endian u32: B, G, R, A on little-endian.
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    #[test]
    fn grid_cells_are_filled_with_their_colors() {
        let (mut surface, ctx) = surface(40);
        let mut grid = Grid::new(4, 40.0);
        grid.cell_mut(0).unwrap().fill(Color::rgb(255, 0, 0));
        render_grid(&ctx, &grid, 0.0, 0.0);
        drop(ctx);

        assert_eq!(pixel(&mut surface, 5, 5), [0, 0, 255, 255]);
        // Interior of an untouched cell is white, its edge carries the outline.
        assert_eq!(pixel(&mut surface, 15, 5), [255, 255, 255, 255]);
        assert_eq!(pixel(&mut surface, 10, 5), [0xf0, 0xf0, 0xf0, 255]);
    }

    #[test]
    fn brush_cursor_uses_base_color() {
        let (mut surface, ctx) = surface(40);
        render_cursor(&ctx, CursorStyle::Brush(Color::rgb(0, 0, 255)), 20.0, 20.0);
        drop(ctx);
        assert_eq!(pixel(&mut surface, 20, 20), [255, 0, 0, 255]);
    }

    #[test]
    fn backdrop_replaces_contents() {
        let (mut surface, ctx) = surface(8);
        ctx.set_source_rgb(1.0, 0.0, 0.0);
        let _ = ctx.paint();
        render_backdrop(&ctx, 8, 8, [0.0, 0.0, 0.0, 0.0]);
        drop(ctx);
        assert_eq!(pixel(&mut surface, 4, 4), [0, 0, 0, 0]);
    }
}
