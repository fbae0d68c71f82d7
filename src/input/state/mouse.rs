use crate::input::events::MouseButton;
use crate::ui::PanelAction;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate
    /// * `y` - Mouse Y coordinate
    ///
    /// # Behavior
    /// - Left click on a panel control: runs its action (a slider press also starts a drag)
    /// - Left click on a cell: picks or paints that cell
    /// - Other buttons are ignored
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }
        self.pointer = Some((x, y));

        if let Some(action) = self.layout.panel.hit_test(x, y) {
            if matches!(action, PanelAction::SetGridSize(_)) {
                self.slider_drag = true;
            }
            self.handle_panel_action(action);
            return;
        }

        if let Some((local_x, local_y)) = self.layout.canvas_local(x, y) {
            if let Some(index) = self.grid.index_at(local_x, local_y) {
                self.hovered_cell = Some(index);
                self.on_cell_click(index);
            }
        }
    }

    /// Processes pointer motion.
    ///
    /// # Arguments
    /// * `x` - Current mouse X coordinate
    /// * `y` - Current mouse Y coordinate
    ///
    /// # Behavior
    /// - While dragging the slider: resizes the grid as the knob crosses sizes
    /// - Otherwise: entering a new cell counts as a pointer-enter on that cell;
    ///   moving within the same cell does nothing
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
        self.refresh_cursor_dirty();

        if self.slider_drag {
            let size = self.layout.panel.slider_value(x);
            if size != self.grid.size() {
                self.change_grid_size(size);
            }
            return;
        }

        let hovered = self
            .layout
            .canvas_local(x, y)
            .and_then(|(local_x, local_y)| self.grid.index_at(local_x, local_y));

        if hovered != self.hovered_cell {
            self.hovered_cell = hovered;
            if let Some(index) = hovered {
                self.on_cell_entered(index);
            }
        }
    }

    /// Processes mouse button release events.
    ///
    /// Ends a slider drag; painting has no press/release pairing.
    pub fn on_mouse_release(&mut self, button: MouseButton, _x: f64, _y: f64) {
        if button == MouseButton::Left {
            self.slider_drag = false;
        }
    }

    /// Pointer left the surface: forget the hovered cell and hide the glyph.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.hovered_cell = None;
        self.slider_drag = false;
        self.refresh_cursor_dirty();
    }
}
