use crate::config::Action;
use crate::draw::Color;
use crate::input::{Mode, events::Key};
use crate::ui::PanelAction;
use log::{debug, info, warn};

use super::{InputState, KeyboardState};

/// Longest hex buffer accepted while typing a color (`rrggbb`).
const HEX_INPUT_MAX: usize = 6;

impl InputState {
    /// Processes a key press event.
    ///
    /// Handles all keyboard input including:
    /// - Modifier key tracking
    /// - Hex color entry (when in HexInput state)
    /// - Mode selection, grid actions and UI toggles (configurable keybindings)
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        if matches!(self.keyboard, KeyboardState::HexInput { .. }) {
            // Chords still reach the keybinding map so Ctrl+Q works mid-entry.
            if self.modifiers.ctrl || self.modifiers.alt {
                if let Some(action) = key_name(key).and_then(|name| self.find_action(&name)) {
                    self.handle_action(action);
                }
                return;
            }
            self.on_hex_key(key);
            return;
        }

        let Some(key_str) = key_name(key) else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    fn on_hex_key(&mut self, key: Key) {
        let KeyboardState::HexInput { buffer } = &mut self.keyboard else {
            return;
        };

        match key {
            Key::Char(c) if c.is_ascii_hexdigit() => {
                if buffer.len() < HEX_INPUT_MAX {
                    buffer.push(c.to_ascii_lowercase());
                }
            }
            Key::Char('#') => {}
            Key::Backspace => {
                buffer.pop();
            }
            Key::Return => {
                let text = format!("#{buffer}");
                self.keyboard = KeyboardState::Idle;
                match text.parse::<Color>() {
                    Ok(color) => self.set_base_color(color),
                    Err(err) => {
                        debug!("Rejected hex entry {}: {}", text, err);
                        self.notify(format!("Invalid color: {text}"));
                    }
                }
            }
            Key::Escape => {
                self.keyboard = KeyboardState::Idle;
            }
            _ => return,
        }
        self.mark_full_redraw();
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        if let Some(mode) = action.mode() {
            self.set_mode(mode);
            return;
        }

        match action {
            Action::Exit => {
                if matches!(self.keyboard, KeyboardState::HexInput { .. }) {
                    self.keyboard = KeyboardState::Idle;
                    self.mark_full_redraw();
                } else if self.show_help {
                    self.show_help = false;
                    self.mark_full_redraw();
                } else {
                    self.should_exit = true;
                }
            }
            Action::ToggleDrawing => self.toggle_drawing(),
            Action::ResetGrid => self.reset_grid(),
            Action::GrowGrid => self.adjust_grid_size(self.grid_limits.step as i64),
            Action::ShrinkGrid => self.adjust_grid_size(-(self.grid_limits.step as i64)),
            Action::EnterHexColor => self.begin_hex_input(),
            Action::CopyColor => self.copy_base_color(),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.mark_full_redraw();
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.mark_full_redraw();
            }
            Action::ModeColor
            | Action::ModeRainbow
            | Action::ModeShader
            | Action::ModeEraser
            | Action::ModePicker => {}
        }
    }

    /// Runs the control behind a panel click.
    pub fn handle_panel_action(&mut self, action: PanelAction) {
        debug!("Panel action {:?}", action);
        match action {
            PanelAction::SetMode(mode) => self.set_mode(mode),
            PanelAction::SetColor(color) => self.set_base_color(color),
            PanelAction::EditHexColor => self.begin_hex_input(),
            PanelAction::SetGridSize(size) => {
                // The slider only rebuilds when the value actually moves.
                if size != self.grid.size() {
                    self.change_grid_size(size);
                }
            }
            PanelAction::ResetGrid => self.reset_grid(),
            PanelAction::ToggleDrawing => self.toggle_drawing(),
        }
    }

    /// Switches the active mode and announces it.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        info!("Mode set to {}", mode);
        self.refresh_cursor_dirty();
        self.notify(format!("{} mode activated", mode.title()));
    }

    /// Color-picker input: adopts `color` as the base color and switches to Color mode.
    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
        info!("Base color set to {}", color);
        self.set_mode(Mode::Color);
    }

    /// Flips the drawing toggle.
    pub fn toggle_drawing(&mut self) {
        self.drawing_enabled = !self.drawing_enabled;
        info!("Drawing enabled: {}", self.drawing_enabled);
        self.refresh_cursor_dirty();
        self.notify(if self.drawing_enabled {
            "Drawing enabled"
        } else {
            "Drawing paused"
        });
    }

    /// Blanks every cell, keeping the grid size.
    pub fn reset_grid(&mut self) {
        self.grid.reset();
        info!("Grid reset");
        self.notify("Grid reset");
    }

    /// Rebuilds the grid at `requested` cells per side, clamped to the configured limits.
    ///
    /// Always rebuilds, discarding every cell, even when the size is unchanged.
    pub fn change_grid_size(&mut self, requested: u32) {
        let size = self.grid_limits.clamp(requested);
        if size != requested {
            warn!(
                "Grid size {} outside {}-{}, using {}",
                requested, self.grid_limits.min, self.grid_limits.max, size
            );
        }
        self.grid.rebuild(size);
        self.hovered_cell = None;
        self.notify(format!("Grid size: {size} × {size}"));
    }

    /// Grows or shrinks the grid by `delta` cells per side.
    ///
    /// Does nothing once the limit in that direction is reached, so the drawing survives.
    pub fn adjust_grid_size(&mut self, delta: i64) {
        let target = (self.grid.size() as i64 + delta).clamp(0, u32::MAX as i64) as u32;
        let size = self.grid_limits.clamp(target);
        if size == self.grid.size() {
            debug!("Grid already at {}x{}, ignoring resize", size, size);
            return;
        }
        self.change_grid_size(size);
    }

    fn begin_hex_input(&mut self) {
        self.keyboard = KeyboardState::HexInput {
            buffer: String::new(),
        };
        self.mark_full_redraw();
    }

    fn copy_base_color(&mut self) {
        let hex = self.base_color.to_hex();
        debug!("Queueing {} for the clipboard", hex);
        self.set_pending_clipboard(hex.clone());
        self.notify(format!("Copied {hex}"));

        // The compositor may not deliver the release for keys held while the selection
        // changes hands.
        self.modifiers.ctrl = false;
        self.modifiers.shift = false;
        self.modifiers.alt = false;
    }

    /// Processes a key release event.
    ///
    /// Currently only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}

/// Name used by keybinding strings for `key`.
fn key_name(key: Key) -> Option<String> {
    let name = match key {
        Key::Char(c) => return Some(c.to_string()),
        Key::Escape => "Escape",
        Key::Return => "Return",
        Key::Backspace => "Backspace",
        Key::Tab => "Tab",
        Key::Space => "Space",
        Key::F1 => "F1",
        Key::F10 => "F10",
        Key::F12 => "F12",
        Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
    };
    Some(name.to_string())
}
