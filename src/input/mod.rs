//! Input handling and the interaction controller.
//!
//! This module translates backend keyboard and pointer events into grid edits.
//! It owns the application state (mode, base color, drawing toggle, grid) and
//! dispatches each qualifying cell event to the active mode's behavior.

pub mod cursor;
pub mod events;
pub mod mode;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use cursor::CursorStyle;
pub use events::{Key, MouseButton};
pub use mode::Mode;
pub use modifiers::Modifiers;
pub use state::{GridLimits, InputState, KeyboardState};
