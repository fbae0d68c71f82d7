//! Notification toast drawn near the bottom of the card.

use super::layout::Bounds;
use crate::draw::FontDescriptor;
use crate::draw::render::{measure_text, render_label, rounded_rect};

const TOAST_PADDING_X: f64 = 20.0;
const TOAST_PADDING_Y: f64 = 10.0;
const TOAST_MARGIN: f64 = 24.0;
const TOAST_FONT_SIZE: f64 = 15.0;

/// Area the toast covers for `message` under `card`.
pub fn toast_bounds(
    ctx: &cairo::Context,
    message: &str,
    card: Bounds,
    screen_height: u32,
    font: &FontDescriptor,
) -> Bounds {
    let (text_width, text_height) = measure_text(ctx, message, TOAST_FONT_SIZE, font);
    let width = text_width + TOAST_PADDING_X * 2.0;
    let height = text_height + TOAST_PADDING_Y * 2.0;
    let x = card.x + (card.width - width) / 2.0;
    // Below the card when there is room, otherwise overlapping its bottom edge.
    let y = (card.bottom() + TOAST_MARGIN).min(screen_height as f64 - height - TOAST_MARGIN);
    Bounds::new(x, y.max(0.0), width, height)
}

/// Renders a dark pill with `message` in white.
pub fn render_toast(
    ctx: &cairo::Context,
    message: &str,
    card: Bounds,
    screen_height: u32,
    font: &FontDescriptor,
) {
    let bounds = toast_bounds(ctx, message, card, screen_height, font);

    let _ = ctx.save();
    rounded_rect(
        ctx,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        bounds.height / 2.0,
    );
    ctx.set_source_rgba(0.17, 0.19, 0.26, 0.92);
    let _ = ctx.fill();

    render_label(
        ctx,
        message,
        bounds.x + TOAST_PADDING_X,
        bounds.y + TOAST_PADDING_Y,
        TOAST_FONT_SIZE,
        font,
        [1.0, 1.0, 1.0, 1.0],
    );
    let _ = ctx.restore();
}
