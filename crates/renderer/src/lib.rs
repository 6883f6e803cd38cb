//! Frame submission for the interior viewer.
//!
//! This crate turns scene state into backend calls:
//! - The backend contract and a recording backend
//! - Uniform naming and light upload
//! - The unit cube mesh
//! - Letterboxed viewport and per-frame submission

pub mod backend;
pub mod frame;
pub mod mesh;
pub mod recording;
pub mod uniforms;
pub mod viewport;

pub use backend::{MeshHandle, ProgramHandle, ProgramKind, RenderBackend};
pub use frame::{Frame, FrameRenderer, FrameStats, CLEAR_COLOR};
pub use mesh::{CubeMesh, Vertex};
pub use recording::{Command, RecordingBackend, UniformValue};
pub use viewport::Viewport;
