use crate::draw::{Color, shade_cell};
use crate::input::Mode;

use super::InputState;

impl InputState {
    /// Applies the active mode to the cell at `index`.
    ///
    /// Returns true when the cell changed. Picker mode never paints, and a
    /// saturated cell in Shader mode is left as is.
    pub fn paint_cell(&mut self, index: usize) -> bool {
        let base = self.base_color;
        let Some(cell) = self.grid.cell_mut(index) else {
            return false;
        };

        let changed = match self.mode {
            Mode::Color => {
                cell.fill(base);
                true
            }
            Mode::Rainbow => {
                cell.fill(Color::random(&mut self.rng));
                true
            }
            Mode::Shader => shade_cell(cell, base),
            Mode::Eraser => {
                cell.erase();
                true
            }
            Mode::Picker => false,
        };

        if changed {
            self.mark_cell_dirty(index);
        }
        changed
    }

    /// Pointer entered a cell: paints it when drawing is enabled.
    pub fn on_cell_entered(&mut self, index: usize) {
        if self.drawing_enabled && self.mode.paints() {
            self.paint_cell(index);
        }
    }

    /// Click on a cell.
    ///
    /// Picker mode picks regardless of the drawing toggle; every other mode paints a
    /// single cell when drawing is enabled, so a click never depends on a prior hover.
    pub fn on_cell_click(&mut self, index: usize) {
        if !self.mode.paints() {
            self.pick_color(index);
        } else if self.drawing_enabled {
            self.paint_cell(index);
        }
    }

    /// Adopts the color of the cell at `index` as the base color and returns to Color mode.
    ///
    /// White cells carry no color to pick and leave everything unchanged.
    pub fn pick_color(&mut self, index: usize) -> bool {
        let Some(color) = self.grid.cell(index).map(|cell| cell.color) else {
            return false;
        };
        if color.is_white() {
            log::debug!("Ignoring pick on blank cell {}", index);
            return false;
        }

        self.base_color = color;
        // Switch without `set_mode` so its notification doesn't replace "Color picked"
        self.mode = Mode::Color;
        log::info!("Picked base color {}", color);
        self.refresh_cursor_dirty();
        self.notify(format!("Color picked: {}", color.to_hex()));
        true
    }
}
