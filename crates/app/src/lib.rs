//! Interactive viewer for the interior scene.
//!
//! The binary wires these pieces to a winit event loop; tests drive them
//! directly through [`InputState`](interior_platform::InputState).

pub mod bindings;
pub mod viewer;

pub use bindings::{HeldAction, Toggle};
pub use viewer::{FrameMatrices, Viewer};
