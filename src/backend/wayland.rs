// Wayland backend: a fullscreen wlr-layer-shell surface hosting the studio.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
