// Translates xkb keysyms into `Key` values for the interaction controller.
use log::debug;
use smithay_client_toolkit::seat::keyboard::{
    KeyEvent, KeyboardHandler, Keysym, Modifiers, RawModifiers,
};
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_keyboard, wl_surface},
};

use crate::input::{Key, Modifiers as KeyModifiers};

use super::super::state::WaylandState;

impl KeyboardHandler for WaylandState {
    fn enter(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
        _raw: &[u32],
        _keysyms: &[Keysym],
    ) {
        debug!("Keyboard focus entered");
    }

    fn leave(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _surface: &wl_surface::WlSurface,
        _serial: u32,
    ) {
        debug!("Keyboard focus left");
        // Releases may never arrive once focus is gone
        self.input_state.modifiers = KeyModifiers::new();
    }

    fn press_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym);
        debug!("Key pressed: {:?}", key);
        self.input_state.on_key_press(key);
    }

    fn release_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym);
        debug!("Key released: {:?}", key);
        self.input_state.on_key_release(key);
    }

    fn update_modifiers(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        modifiers: Modifiers,
        _raw: RawModifiers,
        _layout: u32,
    ) {
        debug!(
            "Modifiers: ctrl={} alt={} shift={}",
            modifiers.ctrl, modifiers.alt, modifiers.shift
        );
        self.input_state.modifiers.ctrl = modifiers.ctrl;
        self.input_state.modifiers.alt = modifiers.alt;
        self.input_state.modifiers.shift = modifiers.shift;
    }

    fn repeat_key(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _keyboard: &wl_keyboard::WlKeyboard,
        _serial: u32,
        event: KeyEvent,
    ) {
        let key = keysym_to_key(event.keysym);
        // Only hex editing benefits from auto-repeat; repeated mode switches are noise
        if matches!(key, Key::Backspace) {
            self.input_state.on_key_press(key);
        }
    }
}

fn keysym_to_key(keysym: Keysym) -> Key {
    match keysym {
        Keysym::Escape => Key::Escape,
        Keysym::Return | Keysym::KP_Enter => Key::Return,
        Keysym::BackSpace => Key::Backspace,
        Keysym::Tab => Key::Tab,
        Keysym::space => Key::Space,
        Keysym::Shift_L | Keysym::Shift_R => Key::Shift,
        Keysym::Control_L | Keysym::Control_R => Key::Ctrl,
        Keysym::Alt_L | Keysym::Alt_R => Key::Alt,
        Keysym::F1 => Key::F1,
        Keysym::F10 => Key::F10,
        Keysym::F12 => Key::F12,
        _ => match keysym.key_char() {
            Some(c) if !c.is_control() => Key::Char(c),
            _ => Key::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_keys_map_to_named_keys() {
        assert_eq!(keysym_to_key(Keysym::F1), Key::F1);
        assert_eq!(keysym_to_key(Keysym::F12), Key::F12);
        assert_eq!(keysym_to_key(Keysym::KP_Enter), Key::Return);
    }

    #[test]
    fn printable_keysyms_keep_their_character() {
        assert_eq!(keysym_to_key(Keysym::c), Key::Char('c'));
        assert_eq!(keysym_to_key(Keysym::R), Key::Char('R'));
        assert_eq!(keysym_to_key(Keysym::plus), Key::Char('+'));
        assert_eq!(keysym_to_key(Keysym::_7), Key::Char('7'));
    }

    #[test]
    fn unmapped_keysyms_are_unknown() {
        assert_eq!(keysym_to_key(Keysym::Home), Key::Unknown);
    }
}
