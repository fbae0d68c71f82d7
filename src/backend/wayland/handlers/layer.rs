// Layer-shell configure/close events; a configure resizes the buffer pool and the card layout.
use log::info;
use smithay_client_toolkit::shell::wlr_layer::{
    LayerShellHandler, LayerSurface, LayerSurfaceConfigure,
};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl LayerShellHandler for WaylandState {
    fn closed(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _layer: &LayerSurface) {
        info!("Layer surface closed by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _layer: &LayerSurface,
        configure: LayerSurfaceConfigure,
        _serial: u32,
    ) {
        let (width, height) = configure.new_size;
        info!("Layer surface configured: {}x{}", width, height);

        // A zero dimension means "pick your own size"; keep the previous one
        if width == 0 || height == 0 {
            if !self.surface.is_configured() {
                return;
            }
        } else if self.surface.configure(width, height) {
            self.input_state.update_screen_dimensions(width, height);
        }

        self.input_state.needs_redraw = true;
    }
}
