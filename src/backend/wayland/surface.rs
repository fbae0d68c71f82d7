//! Layer-surface bookkeeping and the shared-memory pool behind each frame.

use anyhow::{Context, Result};
use log::{debug, info};
use smithay_client_toolkit::{
    shell::wlr_layer::LayerSurface,
    shm::{Shm, slot::SlotPool},
};

/// The studio's single layer surface plus its sizing and frame-pacing flags.
pub struct SurfaceState {
    layer_surface: Option<LayerSurface>,
    pool: Option<SlotPool>,
    /// `None` until the compositor sends the first configure
    size: Option<(u32, u32)>,
    frame_callback_pending: bool,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            layer_surface: None,
            pool: None,
            size: None,
            frame_callback_pending: false,
        }
    }

    pub fn set_layer_surface(&mut self, surface: LayerSurface) {
        self.layer_surface = Some(surface);
    }

    pub fn layer_surface(&self) -> Option<&LayerSurface> {
        self.layer_surface.as_ref()
    }

    /// Records a configure from the compositor. Returns true if the size changed.
    pub fn configure(&mut self, width: u32, height: u32) -> bool {
        let changed = self.size != Some((width, height));
        if changed {
            debug!("Surface resized to {}x{}", width, height);
        }
        self.size = Some((width, height));
        changed
    }

    pub fn is_configured(&self) -> bool {
        self.size.is_some()
    }

    pub fn width(&self) -> u32 {
        self.size.map_or(0, |(w, _)| w)
    }

    pub fn height(&self) -> u32 {
        self.size.map_or(0, |(_, h)| h)
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Returns a pool large enough for `buffer_count` frames at the current size.
    ///
    /// An existing pool is grown in place after a resize instead of being recreated.
    pub fn pool_for_frame(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        let frame_bytes = self.width() as usize * self.height() as usize * 4;
        let wanted = frame_bytes * buffer_count.max(1);

        match self.pool.as_mut() {
            Some(pool) => {
                if pool.len() < wanted {
                    debug!("Growing SlotPool to {} bytes", wanted);
                    pool.resize(wanted).context("Failed to grow slot pool")?;
                }
            }
            None => {
                info!(
                    "Creating SlotPool ({}x{}, {} buffers, {} bytes)",
                    self.width(),
                    self.height(),
                    buffer_count,
                    wanted
                );
                self.pool = Some(SlotPool::new(wanted, shm).context("Failed to create slot pool")?);
            }
        }

        self.pool.as_mut().context("Slot pool missing after creation")
    }
}
