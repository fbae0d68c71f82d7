// Live Wayland protocol state shared by the event loop and the handler submodules,
// plus the frame renderer that paints the studio into a shared-memory buffer.
use anyhow::{Context, Result};
use log::{debug, warn};
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell}, shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{clipboard, config::Config, input::InputState, util::Rect};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    pub(super) surface: SurfaceState,
    pub(super) config: Config,
    pub(super) input_state: InputState,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            input_state,
        }
    }

    /// Serves a queued copy request, reporting failures in the notification slot.
    pub(super) fn flush_clipboard(&mut self) {
        let Some(text) = self.input_state.take_pending_clipboard() else {
            return;
        };
        if let Err(err) = clipboard::copy_text(&text) {
            warn!("Clipboard copy failed: {}", err);
            self.input_state.notify("Clipboard unavailable");
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();
        let stride = (width * 4) as i32;

        let (buffer, canvas) = self
            .surface
            .pool_for_frame(&self.shm, buffer_count)?
            .create_buffer(width as i32, height as i32, stride, wl_shm::Format::Argb8888)
            .context("Failed to create buffer")?;

        // SAFETY: `canvas` is the SlotPool slice backing `buffer`, exactly
        // height * stride bytes in ARGB32 layout. The Cairo surface and context are
        // dropped below before the buffer is attached, so Cairo never touches the
        // memory once the compositor may read it.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                stride,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;
        crate::ui::render_scene(&ctx, &self.input_state, &self.config);

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        let surface_width = width.min(i32::MAX as u32) as i32;
        let surface_height = height.min(i32::MAX as u32) as i32;
        let dirty_regions = resolve_damage_regions(
            surface_width,
            surface_height,
            self.input_state.take_dirty_regions(),
        );

        for rect in &dirty_regions {
            debug!(
                "Damaging buffer region x={} y={} w={} h={}",
                rect.x, rect.y, rect.width, rect.height
            );
            wl_surface.damage_buffer(rect.x, rect.y, rect.width, rect.height);
        }

        if self.config.performance.enable_vsync {
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

/// Falls back to damaging the whole surface when no usable region was tracked.
fn resolve_damage_regions(width: i32, height: i32, mut regions: Vec<Rect>) -> Vec<Rect> {
    regions.retain(Rect::is_valid);

    if regions.is_empty() && width > 0 && height > 0 {
        if let Some(full) = Rect::new(0, 0, width, height) {
            regions.push(full);
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_damage_covers_whole_surface() {
        let regions = resolve_damage_regions(1920, 1080, Vec::new());
        assert_eq!(regions, vec![Rect::new(0, 0, 1920, 1080).unwrap()]);
    }

    #[test]
    fn zero_sized_damage_is_dropped() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![
                Rect {
                    x: 120,
                    y: 96,
                    width: 18,
                    height: 18,
                },
                Rect {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 10,
                },
            ],
        );

        assert_eq!(regions, vec![Rect::new(120, 96, 18, 18).unwrap()]);
    }

    #[test]
    fn unconfigured_surface_gets_no_damage() {
        assert!(resolve_damage_regions(0, 0, Vec::new()).is_empty());
    }
}
