mod actions;
mod core;
mod mouse;
mod paint;

pub use core::{GridLimits, InputState, KeyboardState};
