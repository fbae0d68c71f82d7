//! Control panel: mode buttons, palette swatches, grid-size slider and grid actions.

use super::layout::{Bounds, PANEL_WIDTH};
use crate::config::PanelStyle;
use crate::draw::Color;
use crate::draw::render::{render_label, render_label_centered, rounded_rect};
use crate::input::{InputState, KeyboardState, Mode};

const SECTION_TITLE_HEIGHT: f64 = 28.0;
const ROW_HEIGHT: f64 = 32.0;
const SWATCH_SIZE: f64 = 25.0;
const SWATCH_GAP: f64 = 6.0;
const SWATCH_COLUMNS: usize = 6;
const BUTTON_HEIGHT: f64 = 36.0;
const BUTTON_GAP: f64 = 8.0;
const SECTION_GAP: f64 = 16.0;
const LABEL_HEIGHT: f64 = 24.0;
const SLIDER_HEIGHT: f64 = 20.0;
const COLOR_BOX_WIDTH: f64 = 48.0;
const COLOR_BOX_HEIGHT: f64 = 28.0;
const CORNER_RADIUS: f64 = 6.0;

/// What a panel region shows and how it reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelItemKind {
    SectionTitle(&'static str),
    ColorLabel,
    /// Box showing the base color; clicking starts hex entry
    CurrentColor,
    Swatch(Color),
    ModeButton(Mode),
    SizeLabel,
    SizeSlider,
    ResetButton,
    DrawingToggle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelItem {
    pub kind: PanelItemKind,
    pub bounds: Bounds,
}

/// Result of clicking the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    SetMode(Mode),
    SetColor(Color),
    EditHexColor,
    SetGridSize(u32),
    ResetGrid,
    ToggleDrawing,
}

/// Positions of every control in the panel column.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    pub bounds: Bounds,
    pub items: Vec<PanelItem>,
    pub slider: Bounds,
    size_range: (u32, u32),
}

impl PanelLayout {
    /// Height of the panel column for a palette of `palette_len` swatches.
    pub fn content_height(palette_len: usize) -> f64 {
        let swatch_rows = palette_len.div_ceil(SWATCH_COLUMNS) as f64;
        SECTION_TITLE_HEIGHT
            + ROW_HEIGHT
            + swatch_rows * (SWATCH_SIZE + SWATCH_GAP)
            + Mode::ALL.len() as f64 * (BUTTON_HEIGHT + BUTTON_GAP)
            + SECTION_GAP
            + SECTION_TITLE_HEIGHT
            + LABEL_HEIGHT
            + SLIDER_HEIGHT
            + SECTION_GAP
            + BUTTON_HEIGHT * 2.0
            + BUTTON_GAP
    }

    /// Lays out the panel with its top-left corner at `(x, y)`.
    pub fn compute(x: f64, y: f64, palette: &[Color], size_range: (u32, u32)) -> Self {
        let mut items = Vec::new();
        let mut cursor_y = y;
        let mut push = |kind, bounds| items.push(PanelItem { kind, bounds });

        push(
            PanelItemKind::SectionTitle("Tools"),
            Bounds::new(x, cursor_y, PANEL_WIDTH, SECTION_TITLE_HEIGHT),
        );
        cursor_y += SECTION_TITLE_HEIGHT;

        push(
            PanelItemKind::ColorLabel,
            Bounds::new(x, cursor_y, PANEL_WIDTH - COLOR_BOX_WIDTH, ROW_HEIGHT),
        );
        push(
            PanelItemKind::CurrentColor,
            Bounds::new(
                x + PANEL_WIDTH - COLOR_BOX_WIDTH,
                cursor_y + (ROW_HEIGHT - COLOR_BOX_HEIGHT) / 2.0,
                COLOR_BOX_WIDTH,
                COLOR_BOX_HEIGHT,
            ),
        );
        cursor_y += ROW_HEIGHT;

        for (index, color) in palette.iter().enumerate() {
            let col = (index % SWATCH_COLUMNS) as f64;
            let row = (index / SWATCH_COLUMNS) as f64;
            push(
                PanelItemKind::Swatch(*color),
                Bounds::new(
                    x + col * (SWATCH_SIZE + SWATCH_GAP),
                    cursor_y + row * (SWATCH_SIZE + SWATCH_GAP),
                    SWATCH_SIZE,
                    SWATCH_SIZE,
                ),
            );
        }
        cursor_y += palette.len().div_ceil(SWATCH_COLUMNS) as f64 * (SWATCH_SIZE + SWATCH_GAP);

        for mode in Mode::ALL {
            push(
                PanelItemKind::ModeButton(mode),
                Bounds::new(x, cursor_y, PANEL_WIDTH, BUTTON_HEIGHT),
            );
            cursor_y += BUTTON_HEIGHT + BUTTON_GAP;
        }
        cursor_y += SECTION_GAP;

        push(
            PanelItemKind::SectionTitle("Grid Settings"),
            Bounds::new(x, cursor_y, PANEL_WIDTH, SECTION_TITLE_HEIGHT),
        );
        cursor_y += SECTION_TITLE_HEIGHT;

        push(
            PanelItemKind::SizeLabel,
            Bounds::new(x, cursor_y, PANEL_WIDTH, LABEL_HEIGHT),
        );
        cursor_y += LABEL_HEIGHT;

        let slider = Bounds::new(x, cursor_y, PANEL_WIDTH, SLIDER_HEIGHT);
        push(PanelItemKind::SizeSlider, slider);
        cursor_y += SLIDER_HEIGHT + SECTION_GAP;

        push(
            PanelItemKind::ResetButton,
            Bounds::new(x, cursor_y, PANEL_WIDTH, BUTTON_HEIGHT),
        );
        cursor_y += BUTTON_HEIGHT + BUTTON_GAP;

        push(
            PanelItemKind::DrawingToggle,
            Bounds::new(x, cursor_y, PANEL_WIDTH, BUTTON_HEIGHT),
        );
        cursor_y += BUTTON_HEIGHT;

        Self {
            bounds: Bounds::new(x, y, PANEL_WIDTH, cursor_y - y),
            items,
            slider,
            size_range,
        }
    }

    /// Maps a click at `(x, y)` to the control under it.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PanelAction> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let item = self.items.iter().find(|item| item.bounds.contains(x, y))?;
        match item.kind {
            PanelItemKind::CurrentColor => Some(PanelAction::EditHexColor),
            PanelItemKind::Swatch(color) => Some(PanelAction::SetColor(color)),
            PanelItemKind::ModeButton(mode) => Some(PanelAction::SetMode(mode)),
            PanelItemKind::SizeSlider => Some(PanelAction::SetGridSize(self.slider_value(x))),
            PanelItemKind::ResetButton => Some(PanelAction::ResetGrid),
            PanelItemKind::DrawingToggle => Some(PanelAction::ToggleDrawing),
            PanelItemKind::SectionTitle(_) | PanelItemKind::ColorLabel | PanelItemKind::SizeLabel => {
                None
            }
        }
    }

    /// Grid size for a pointer at horizontal position `x`, rounded to the nearest step.
    ///
    /// Positions beyond either end of the track clamp to the range limits.
    pub fn slider_value(&self, x: f64) -> u32 {
        let (min, max) = self.size_range;
        if max <= min || self.slider.width <= 0.0 {
            return min;
        }
        let t = ((x - self.slider.x) / self.slider.width).clamp(0.0, 1.0);
        min + (t * (max - min) as f64).round() as u32
    }

    /// Horizontal knob position for `size`.
    pub fn slider_position(&self, size: u32) -> f64 {
        let (min, max) = self.size_range;
        if max <= min {
            return self.slider.x;
        }
        let t = (size.clamp(min, max) - min) as f64 / (max - min) as f64;
        self.slider.x + t * self.slider.width
    }
}

/// Draws the panel for the current controller state.
pub fn render_panel(ctx: &cairo::Context, state: &InputState, style: &PanelStyle) {
    let layout = &state.layout.panel;
    let font = &state.font_descriptor;
    let bold = font.with_weight("bold");
    let size = style.font_size;

    for item in &layout.items {
        let b = item.bounds;
        match item.kind {
            PanelItemKind::SectionTitle(title) => {
                render_label(ctx, title, b.x, b.y, size + 2.0, &bold, style.text_color);
            }
            PanelItemKind::ColorLabel => {
                let text = match &state.keyboard {
                    KeyboardState::HexInput { buffer } => format!("Hex: #{buffer}_"),
                    KeyboardState::Idle => "Color".to_string(),
                };
                render_label_centered_left(ctx, &text, b, size, font, style.text_color);
            }
            PanelItemKind::CurrentColor => {
                let (r, g, bl) = state.base_color.to_cairo();
                rounded_rect(ctx, b.x, b.y, b.width, b.height, CORNER_RADIUS);
                ctx.set_source_rgb(r, g, bl);
                let _ = ctx.fill_preserve();
                set_rgba(ctx, style.text_color);
                ctx.set_line_width(1.0);
                let _ = ctx.stroke();
            }
            PanelItemKind::Swatch(color) => {
                let (r, g, bl) = color.to_cairo();
                ctx.rectangle(b.x, b.y, b.width, b.height);
                ctx.set_source_rgb(r, g, bl);
                let _ = ctx.fill();
                if color == state.base_color {
                    set_rgba(ctx, style.accent_color);
                    ctx.set_line_width(2.0);
                    ctx.rectangle(b.x - 2.0, b.y - 2.0, b.width + 4.0, b.height + 4.0);
                    let _ = ctx.stroke();
                }
            }
            PanelItemKind::ModeButton(mode) => {
                render_button(ctx, b, mode.button_label(), mode == state.mode, style, state);
            }
            PanelItemKind::SizeLabel => {
                let n = state.grid.size();
                let text = format!("Grid Size: {n} × {n}");
                render_label_centered_left(ctx, &text, b, size, font, style.text_color);
            }
            PanelItemKind::SizeSlider => render_slider(ctx, layout, state.grid.size(), style),
            PanelItemKind::ResetButton => {
                render_button(ctx, b, "Reset Grid", false, style, state);
            }
            PanelItemKind::DrawingToggle => {
                let label = if state.drawing_enabled {
                    "Pause Drawing"
                } else {
                    "Resume Drawing"
                };
                render_button(ctx, b, label, state.drawing_enabled, style, state);
            }
        }
    }
}

fn render_button(
    ctx: &cairo::Context,
    bounds: Bounds,
    label: &str,
    active: bool,
    style: &PanelStyle,
    state: &InputState,
) {
    rounded_rect(
        ctx,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        CORNER_RADIUS,
    );
    set_rgba(
        ctx,
        if active {
            style.accent_color
        } else {
            style.button_color
        },
    );
    let _ = ctx.fill();

    let text_color = if active {
        [1.0, 1.0, 1.0, 1.0]
    } else {
        style.text_color
    };
    render_label_centered(
        ctx,
        label,
        bounds.as_tuple(),
        style.font_size,
        &state.font_descriptor,
        text_color,
    );
}

fn render_slider(ctx: &cairo::Context, layout: &PanelLayout, size: u32, style: &PanelStyle) {
    let track = layout.slider;
    let mid_y = track.y + track.height / 2.0;
    let knob_x = layout.slider_position(size);

    rounded_rect(ctx, track.x, mid_y - 3.0, track.width, 6.0, 3.0);
    set_rgba(ctx, style.button_color);
    let _ = ctx.fill();

    rounded_rect(ctx, track.x, mid_y - 3.0, knob_x - track.x, 6.0, 3.0);
    set_rgba(ctx, style.accent_color);
    let _ = ctx.fill();

    ctx.arc(knob_x, mid_y, 8.0, 0.0, std::f64::consts::PI * 2.0);
    set_rgba(ctx, style.accent_color);
    let _ = ctx.fill_preserve();
    ctx.set_source_rgb(1.0, 1.0, 1.0);
    ctx.set_line_width(2.0);
    let _ = ctx.stroke();
}

fn render_label_centered_left(
    ctx: &cairo::Context,
    text: &str,
    bounds: Bounds,
    size: f64,
    font: &crate::draw::FontDescriptor,
    rgba: [f64; 4],
) {
    let (_, text_height) = crate::draw::render::measure_text(ctx, text, size, font);
    render_label(
        ctx,
        text,
        bounds.x,
        bounds.y + (bounds.height - text_height) / 2.0,
        size,
        font,
        rgba,
    );
}

fn set_rgba(ctx: &cairo::Context, rgba: [f64; 4]) {
    let [r, g, b, a] = rgba;
    ctx.set_source_rgba(r, g, b, a);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    fn panel(palette: &[Color]) -> PanelLayout {
        PanelLayout::compute(100.0, 50.0, palette, (8, 64))
    }

    fn center_of(layout: &PanelLayout, kind: PanelItemKind) -> (f64, f64) {
        let item = layout
            .items
            .iter()
            .find(|item| item.kind == kind)
            .expect("item present");
        (
            item.bounds.x + item.bounds.width / 2.0,
            item.bounds.y + item.bounds.height / 2.0,
        )
    }

    #[test]
    fn content_height_matches_computed_layout() {
        for len in [0, 1, 6, 7, 16] {
            let palette = vec![BLACK; len];
            let layout = panel(&palette);
            assert!((layout.bounds.height - PanelLayout::content_height(len)).abs() < 1e-9);
        }
    }

    #[test]
    fn mode_buttons_hit_their_mode() {
        let layout = panel(&[]);
        for mode in Mode::ALL {
            let (x, y) = center_of(&layout, PanelItemKind::ModeButton(mode));
            assert_eq!(layout.hit_test(x, y), Some(PanelAction::SetMode(mode)));
        }
    }

    #[test]
    fn swatches_report_their_color() {
        let red = Color::rgb(0xe6, 0x39, 0x46);
        let layout = panel(&[BLACK, red, WHITE]);
        let (x, y) = center_of(&layout, PanelItemKind::Swatch(red));
        assert_eq!(layout.hit_test(x, y), Some(PanelAction::SetColor(red)));
    }

    #[test]
    fn action_buttons_and_color_box() {
        let layout = panel(&[]);
        let (x, y) = center_of(&layout, PanelItemKind::ResetButton);
        assert_eq!(layout.hit_test(x, y), Some(PanelAction::ResetGrid));
        let (x, y) = center_of(&layout, PanelItemKind::DrawingToggle);
        assert_eq!(layout.hit_test(x, y), Some(PanelAction::ToggleDrawing));
        let (x, y) = center_of(&layout, PanelItemKind::CurrentColor);
        assert_eq!(layout.hit_test(x, y), Some(PanelAction::EditHexColor));
    }

    #[test]
    fn labels_and_outside_points_are_inert() {
        let layout = panel(&[]);
        let (x, y) = center_of(&layout, PanelItemKind::SizeLabel);
        assert_eq!(layout.hit_test(x, y), None);
        assert_eq!(layout.hit_test(0.0, 0.0), None);
    }

    #[test]
    fn slider_maps_linearly_and_rounds() {
        let layout = panel(&[]);
        let track = layout.slider;
        assert_eq!(layout.slider_value(track.x), 8);
        assert_eq!(layout.slider_value(track.right()), 64);
        assert_eq!(layout.slider_value(track.x + track.width / 2.0), 36);
        assert_eq!(layout.slider_value(track.x - 50.0), 8);
        assert_eq!(layout.slider_value(track.right() + 50.0), 64);

        let y = track.y + track.height / 2.0;
        assert_eq!(
            layout.hit_test(track.x + 1.0, y),
            Some(PanelAction::SetGridSize(8))
        );
    }

    #[test]
    fn slider_position_inverts_value() {
        let layout = panel(&[]);
        for size in [8, 16, 33, 64] {
            let x = layout.slider_position(size);
            assert_eq!(layout.slider_value(x), size);
        }
    }
}
