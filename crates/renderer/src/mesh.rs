//! The unit cube every scene object is drawn with.
//!
//! The vertex layout must match the shader inputs: location 0 is the
//! position, location 1 the normal. `#[repr(C)]` plus `Pod` lets the vertex
//! array be uploaded as raw bytes.

use bytemuck::{Pod, Zeroable};
use interior_core::Result;

use crate::backend::{MeshHandle, RenderBackend};

/// Interleaved position and normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

const BACK: [f32; 3] = [0.0, 0.0, -1.0];
const RIGHT: [f32; 3] = [1.0, 0.0, 0.0];
const FRONT: [f32; 3] = [0.0, 0.0, 1.0];
const LEFT: [f32; 3] = [-1.0, 0.0, 0.0];
const TOP: [f32; 3] = [0.0, 1.0, 0.0];
const BOTTOM: [f32; 3] = [0.0, -1.0, 0.0];

/// Four vertices per face so each face has a flat normal.
pub const CUBE_VERTICES: [Vertex; 24] = [
    Vertex::new([0.0, 0.0, 0.0], BACK),
    Vertex::new([1.0, 0.0, 0.0], BACK),
    Vertex::new([1.0, 1.0, 0.0], BACK),
    Vertex::new([0.0, 1.0, 0.0], BACK),
    Vertex::new([1.0, 0.0, 0.0], RIGHT),
    Vertex::new([1.0, 1.0, 0.0], RIGHT),
    Vertex::new([1.0, 0.0, 1.0], RIGHT),
    Vertex::new([1.0, 1.0, 1.0], RIGHT),
    Vertex::new([0.0, 0.0, 1.0], FRONT),
    Vertex::new([1.0, 0.0, 1.0], FRONT),
    Vertex::new([1.0, 1.0, 1.0], FRONT),
    Vertex::new([0.0, 1.0, 1.0], FRONT),
    Vertex::new([0.0, 0.0, 1.0], LEFT),
    Vertex::new([0.0, 1.0, 1.0], LEFT),
    Vertex::new([0.0, 1.0, 0.0], LEFT),
    Vertex::new([0.0, 0.0, 0.0], LEFT),
    Vertex::new([1.0, 1.0, 1.0], TOP),
    Vertex::new([1.0, 1.0, 0.0], TOP),
    Vertex::new([0.0, 1.0, 0.0], TOP),
    Vertex::new([0.0, 1.0, 1.0], TOP),
    Vertex::new([0.0, 0.0, 0.0], BOTTOM),
    Vertex::new([1.0, 0.0, 0.0], BOTTOM),
    Vertex::new([1.0, 0.0, 1.0], BOTTOM),
    Vertex::new([0.0, 0.0, 1.0], BOTTOM),
];

pub const CUBE_INDICES: [u32; 36] = [
    0, 3, 2, 2, 1, 0, //
    4, 5, 7, 7, 6, 4, //
    8, 9, 10, 10, 11, 8, //
    12, 13, 14, 14, 15, 12, //
    16, 17, 18, 18, 19, 16, //
    20, 21, 22, 22, 23, 20,
];

/// The uploaded cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeMesh {
    handle: MeshHandle,
}

impl CubeMesh {
    pub const INDEX_COUNT: u32 = CUBE_INDICES.len() as u32;

    /// Upload the cube once; the handle is reused for every draw.
    pub fn upload(backend: &mut dyn RenderBackend) -> Result<Self> {
        let handle = backend.upload_mesh(
            bytemuck::cast_slice(&CUBE_VERTICES),
            Vertex::STRIDE,
            &CUBE_INDICES,
        )?;
        tracing::debug!(
            "Uploaded cube mesh: {} vertices, {} indices",
            CUBE_VERTICES.len(),
            CUBE_INDICES.len()
        );
        Ok(Self { handle })
    }

    pub fn handle(&self) -> MeshHandle {
        self.handle
    }
}
