//! The render collaborator contract.
//!
//! The frame renderer never talks to a graphics API directly. It drives a
//! [`RenderBackend`]: bind a program, set named uniforms, bind the cube mesh
//! and issue indexed draws. A GPU backend maps these onto its API; the
//! [`RecordingBackend`](crate::RecordingBackend) records them for tests and
//! headless runs.

use glam::{Mat4, Vec3, Vec4};
use interior_core::Result;

use crate::viewport::Viewport;

/// Opaque handle to a compiled shader program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Opaque handle to an uploaded mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// The two shader programs the viewer needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// Phong lighting with materials and all light kinds.
    Lighting,
    /// Flat color, used for light bulb markers.
    Unlit,
}

/// Operations the frame renderer needs from a graphics backend.
///
/// Uniform setters address uniforms by their GLSL name on the program last
/// passed to [`use_program`](RenderBackend::use_program).
pub trait RenderBackend {
    /// Look up (or compile) the program for `kind`.
    fn program(&mut self, kind: ProgramKind) -> Result<ProgramHandle>;

    /// Upload interleaved vertex bytes with a fixed stride and 32-bit indices.
    fn upload_mesh(&mut self, vertices: &[u8], stride: usize, indices: &[u32]) -> Result<MeshHandle>;

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    fn clear(&mut self, color: Vec4) -> Result<()>;

    fn use_program(&mut self, program: ProgramHandle) -> Result<()>;

    fn bind(&mut self, mesh: MeshHandle) -> Result<()>;

    fn draw_indexed_triangles(&mut self, index_count: u32) -> Result<()>;

    fn set_uniform_mat4(&mut self, name: &str, value: Mat4) -> Result<()>;

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) -> Result<()>;

    fn set_uniform_vec4(&mut self, name: &str, value: Vec4) -> Result<()>;

    fn set_uniform_float(&mut self, name: &str, value: f32) -> Result<()>;

    fn set_uniform_bool(&mut self, name: &str, value: bool) -> Result<()>;
}
