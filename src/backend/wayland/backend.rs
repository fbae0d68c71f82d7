// Backend startup and the calloop-driven event loop; protocol handling and rendering
// live on `WaylandState` and its handler modules.
use anyhow::{Context, Result, anyhow};
use calloop::EventLoop;
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    reexports::calloop_wayland_source::WaylandSource,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use std::time::Instant;
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::backend::{LaunchOptions, build_input_state};
use crate::config::Config;

const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend entry point.
pub struct WaylandBackend {
    options: LaunchOptions,
}

impl WaylandBackend {
    pub fn new(options: LaunchOptions) -> Self {
        Self { options }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        let (globals, event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);
        debug!("Bound compositor, layer shell, shm, outputs and seats");

        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}. Using defaults.", e);
                Config::default()
            }
        };
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);
        debug!(
            "  Status bar: {} @ {:?}",
            config.ui.show_status_bar, config.ui.status_bar_position
        );

        let input_state = build_input_state(
            &config,
            &self.options,
            StdRng::from_entropy(),
            Instant::now(),
        )?;

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
        );

        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("pixel-studio"),
            None,
        );
        layer_surface.set_anchor(Anchor::all());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::Exclusive);
        layer_surface.set_size(0, 0);
        layer_surface.set_exclusive_zone(-1);
        layer_surface.commit();
        state.surface.set_layer_surface(layer_surface);

        let mut event_loop: EventLoop<WaylandState> =
            EventLoop::try_new().context("Failed to create event loop")?;
        WaylandSource::new(conn.clone(), event_queue)
            .insert(event_loop.handle())
            .map_err(|e| anyhow!("Failed to register Wayland source: {}", e.error))?;

        let mut consecutive_render_failures = 0u32;

        loop {
            if state.input_state.should_exit {
                info!("Exit requested, leaving event loop");
                break;
            }

            // Sleep until input arrives or the next notification deadline passes
            let timeout = state
                .input_state
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()));
            event_loop
                .dispatch(timeout, &mut state)
                .context("Wayland event loop dispatch failed")?;

            if state.input_state.should_exit {
                info!("Exit requested after dispatch, leaving event loop");
                break;
            }

            state.input_state.tick(Instant::now());
            state.flush_clipboard();

            let vsync = state.config.performance.enable_vsync;
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw
                && (!state.surface.frame_callback_pending() || !vsync);

            if !can_render {
                continue;
            }

            match state.render(&qh) {
                Ok(()) => {
                    consecutive_render_failures = 0;
                    state.input_state.needs_redraw = false;
                    if vsync {
                        state.surface.set_frame_callback_pending(true);
                    }
                }
                Err(e) => {
                    consecutive_render_failures += 1;
                    warn!(
                        "Rendering error (attempt {}/{}): {:#}",
                        consecutive_render_failures, MAX_RENDER_FAILURES, e
                    );
                    if consecutive_render_failures >= MAX_RENDER_FAILURES {
                        return Err(e.context(format!(
                            "Too many consecutive render failures ({})",
                            consecutive_render_failures
                        )));
                    }
                    state.input_state.needs_redraw = false;
                }
            }
        }

        info!("Wayland backend exiting");
        Ok(())
    }
}
