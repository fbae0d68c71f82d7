//! Pixel Studio: a pixel-art drawing surface for Wayland compositors.
//!
//! The binary only parses arguments and hands off to [`backend`]; everything
//! else (grid model, interaction controller, UI rendering, configuration) is
//! exposed here so tests and tools such as the schema dumper can reuse it.

pub mod backend;
pub mod clipboard;
pub mod config;
pub mod draw;
pub mod input;
pub mod notification;
pub mod ui;
pub mod util;

pub use config::Config;
