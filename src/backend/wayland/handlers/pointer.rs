// Feeds pointer enter/leave, motion and button events into the interaction controller.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = event.position;
            match event.kind {
                PointerEventKind::Enter { serial } => {
                    debug!("Pointer entered at ({:.1}, {:.1})", x, y);
                    // The studio draws its own cursor glyph
                    pointer.set_cursor(serial, None, 0, 0);
                    self.input_state.on_mouse_motion(x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    self.input_state.on_pointer_leave();
                }
                PointerEventKind::Motion { .. } => {
                    self.input_state.on_mouse_motion(x, y);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({:.1}, {:.1})", button, x, y);
                    if let Some(mb) = map_button(button) {
                        self.input_state.on_mouse_press(mb, x, y);
                    }
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    if let Some(mb) = map_button(button) {
                        self.input_state.on_mouse_release(mb, x, y);
                    }
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
