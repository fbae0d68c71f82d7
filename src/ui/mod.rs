//! On-screen UI: card layout, control panel, status bar, help overlay and notifications.

pub mod layout;
pub mod panel;
pub mod status;
pub mod toast;

pub use layout::{AppLayout, Bounds};
pub use panel::{PanelAction, PanelLayout, render_panel};
pub use status::{render_help_overlay, render_status_bar};
pub use toast::render_toast;

use crate::config::Config;
use crate::draw::render::{render_label, rounded_rect};
use crate::draw::{render_backdrop, render_cursor, render_grid};
use crate::input::InputState;

const TITLE_FONT_SIZE: f64 = 26.0;
const CARD_RADIUS: f64 = 16.0;

/// Renders the complete frame for `state` onto `ctx`.
///
/// The backend calls this once per frame; tests call it with an image surface.
pub fn render_scene(ctx: &cairo::Context, state: &InputState, config: &Config) {
    let width = state.screen_width;
    let height = state.screen_height;
    let layout = &state.layout;
    let panel_style = &config.ui.panel_style;
    let bold = state.font_descriptor.with_weight("bold");

    render_backdrop(
        ctx,
        width.min(i32::MAX as u32) as i32,
        height.min(i32::MAX as u32) as i32,
        config.ui.backdrop_color,
    );

    // Card with a soft drop shadow
    let card = layout.card;
    let _ = ctx.save();
    rounded_rect(ctx, card.x + 2.0, card.y + 6.0, card.width, card.height, CARD_RADIUS);
    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.08);
    let _ = ctx.fill();
    rounded_rect(ctx, card.x, card.y, card.width, card.height, CARD_RADIUS);
    let [r, g, b, a] = panel_style.card_color;
    ctx.set_source_rgba(r, g, b, a);
    let _ = ctx.fill();
    let _ = ctx.restore();

    render_label(
        ctx,
        "Pixel Studio",
        layout.title.x,
        layout.title.y,
        TITLE_FONT_SIZE,
        &bold,
        panel_style.text_color,
    );
    render_label(
        ctx,
        "Canvas",
        layout.canvas_title.x,
        layout.canvas_title.y,
        panel_style.font_size + 2.0,
        &bold,
        panel_style.text_color,
    );

    render_panel(ctx, state, panel_style);
    render_grid(ctx, &state.grid, layout.canvas.x, layout.canvas.y);

    if state.show_status_bar {
        render_status_bar(
            ctx,
            state,
            config.ui.status_bar_position,
            &config.ui.status_bar_style,
            width,
            height,
        );
    }

    if let Some(message) = state.notifications.current() {
        render_toast(ctx, message, card, height, &state.font_descriptor);
    }

    if state.show_help {
        render_help_overlay(
            ctx,
            &config.ui.help_overlay_style,
            &config.keybindings,
            width,
            height,
        );
    }

    if let Some((x, y)) = state.pointer {
        render_cursor(ctx, state.cursor_style(), x, y);
    }
}
