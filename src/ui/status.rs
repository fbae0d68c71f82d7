/// Status bar and help overlay
use crate::config::{Action, HelpOverlayStyle, KeybindingsConfig, StatusBarStyle, StatusPosition};
use crate::input::InputState;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Room left of the text for the base color dot
const STATUS_DOT_SPACE: f64 = 16.0;

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

/// One-line summary of the controller state.
pub fn status_text(input_state: &InputState) -> String {
    let size = input_state.grid.size();
    let drawing = if input_state.drawing_enabled {
        "Drawing"
    } else {
        "Paused"
    };
    format!(
        "[{}] [{}] [{}×{}] [{}]  F1=Help",
        input_state.mode.title(),
        input_state.base_color.to_hex(),
        size,
        size,
        drawing
    )
}

/// Render status bar showing mode, base color, grid size and drawing state
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let status_text = status_text(input_state);

    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return;
        }
    };
    let text_width = extents.width() + STATUS_DOT_SPACE;
    let text_height = extents.height();

    let padding = style.padding;
    let (x, y) = match position {
        StatusPosition::TopLeft => (padding, padding + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - text_width - padding,
            padding + text_height,
        ),
        StatusPosition::BottomLeft => (padding, screen_height as f64 - padding),
        StatusPosition::BottomRight => (
            screen_width as f64 - text_width - padding,
            screen_height as f64 - padding,
        ),
    };

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        text_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    // Base color dot
    let (r, g, b) = input_state.base_color.to_cairo();
    ctx.set_source_rgb(r, g, b);
    ctx.arc(
        x + style.dot_radius,
        y - text_height / 2.0,
        style.dot_radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x + STATUS_DOT_SPACE, y);
    let _ = ctx.show_text(&status_text);
}

/// Lines of the help overlay, built from the active keybindings.
pub fn help_lines(keybindings: &KeybindingsConfig) -> Vec<String> {
    let row = |action: Action, label: &str| format!("    {:<20}{}", keybindings.describe(action), label);

    let mut lines = vec![
        "━━━━━━━━━━━━━━━━━━━━ PIXEL STUDIO CONTROLS ━━━━━━━━━━━━━━━━━━━━".to_string(),
        String::new(),
        "  MODES".to_string(),
        row(Action::ModeColor, "Color"),
        row(Action::ModeRainbow, "Rainbow"),
        row(Action::ModeShader, "Shader"),
        row(Action::ModeEraser, "Eraser"),
        row(Action::ModePicker, "Pick color"),
        String::new(),
        "  GRID".to_string(),
        row(Action::ToggleDrawing, "Pause / resume drawing"),
        row(Action::ResetGrid, "Reset grid"),
        row(Action::GrowGrid, "Grow grid"),
        row(Action::ShrinkGrid, "Shrink grid"),
        String::new(),
        "  COLOR".to_string(),
        row(Action::EnterHexColor, "Type a hex color (Enter to apply)"),
        row(Action::CopyColor, "Copy base color"),
        String::new(),
        "  MOUSE".to_string(),
        format!("    {:<20}{}", "Hover", "Paint while drawing is enabled"),
        format!("    {:<20}{}", "Click", "Paint one cell / pick a color"),
        String::new(),
        row(Action::ToggleHelp, "Toggle help"),
        row(Action::ToggleStatusBar, "Toggle status bar"),
        row(Action::Exit, "Exit"),
    ];
    lines.push("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".to_string());
    lines
}

/// Render help overlay showing all keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    keybindings: &KeybindingsConfig,
    screen_width: u32,
    screen_height: u32,
) {
    let help_text = help_lines(keybindings);

    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    let mut max_width: f64 = 0.0;
    for line in &help_text {
        let extents = match ctx.text_extents(line) {
            Ok(ext) => ext,
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                let fallback_width = line.chars().count() as f64 * HELP_CHAR_WIDTH_ESTIMATE;
                max_width = max_width.max(fallback_width);
                continue;
            }
        };
        max_width = max_width.max(extents.width());
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (help_text.len() as f64) * style.line_height + style.padding * 2.0;

    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in help_text.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lines_reflect_configured_bindings() {
        let mut keybindings = KeybindingsConfig::default();
        keybindings.reset_grid = vec!["Ctrl+N".to_string()];
        let lines = help_lines(&keybindings);
        assert!(
            lines
                .iter()
                .any(|line| line.contains("Ctrl+N") && line.contains("Reset grid"))
        );
        assert!(lines.iter().any(|line| line.contains("Escape / Ctrl+Q")));
    }
}
