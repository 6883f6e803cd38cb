//! Platform layer for the interior viewer.
//!
//! This crate provides platform-specific functionality:
//! - Window management via winit
//! - Input handling (keyboard, mouse)

mod input;
mod window;

pub use input::{InputState, KeyCode, MouseButton};
pub use window::Window;

// Re-export winit types that users might need
pub use winit::event::{MouseScrollDelta, WindowEvent};
pub use winit::event_loop::EventLoop;
