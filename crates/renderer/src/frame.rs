//! Per-frame submission of the scene to a backend.

use glam::{Mat4, Vec3, Vec4};
use interior_core::Result;
use interior_scene::{DrawItem, LightRegistry};
use tracing::{debug, trace};

use crate::backend::{ProgramHandle, ProgramKind, RenderBackend};
use crate::mesh::CubeMesh;
use crate::uniforms;
use crate::viewport::Viewport;

/// Background color behind the room.
pub const CLEAR_COLOR: Vec4 = Vec4::new(0.2, 0.3, 0.3, 1.0);

/// Everything the renderer reads to draw one frame.
///
/// Matrices are computed after input has been applied, so the frame is a
/// consistent snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub view: Mat4,
    pub projection: Mat4,
    /// Active camera position, uploaded as `viewPos`.
    pub eye: Vec3,
    pub lights: &'a LightRegistry,
    /// Items drawn with the lighting program.
    pub lit: &'a [DrawItem],
    /// Items drawn with the unlit program.
    pub unlit: &'a [DrawItem],
}

/// Counters for one submitted frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub lit_draws: usize,
    pub unlit_draws: usize,
}

impl FrameStats {
    pub fn total(&self) -> usize {
        self.lit_draws + self.unlit_draws
    }
}

/// Owns the uploaded cube and program handles and submits frames.
#[derive(Debug)]
pub struct FrameRenderer {
    cube: CubeMesh,
    lighting: ProgramHandle,
    unlit: ProgramHandle,
    viewport: Viewport,
    aspect: f32,
    frame_count: u64,
}

impl FrameRenderer {
    /// Resolve programs and upload the cube mesh.
    pub fn new(backend: &mut dyn RenderBackend, width: u32, height: u32, aspect: f32) -> Result<Self> {
        let lighting = backend.program(ProgramKind::Lighting)?;
        let unlit = backend.program(ProgramKind::Unlit)?;
        let cube = CubeMesh::upload(backend)?;
        let viewport = Viewport::letterbox(width, height, aspect);
        debug!("Frame renderer ready, viewport {:?}", viewport);

        Ok(Self {
            cube,
            lighting,
            unlit,
            viewport,
            aspect,
            frame_count: 0,
        })
    }

    /// Recompute the letterboxed viewport for a new framebuffer size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::letterbox(width, height, self.aspect);
        debug!("Resized to {}x{}, viewport {:?}", width, height, self.viewport);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Submit one frame.
    ///
    /// Nothing is drawn while the viewport is empty (minimized window).
    pub fn render(&mut self, backend: &mut dyn RenderBackend, frame: &Frame<'_>) -> Result<FrameStats> {
        if self.viewport.is_empty() {
            trace!("Skipping frame: empty viewport");
            return Ok(FrameStats::default());
        }

        backend.set_viewport(self.viewport)?;
        backend.clear(CLEAR_COLOR)?;

        let mut stats = FrameStats::default();

        backend.use_program(self.lighting)?;
        uniforms::upload_lights(backend, frame.lights)?;
        backend.set_uniform_mat4(uniforms::PROJECTION, frame.projection)?;
        backend.set_uniform_mat4(uniforms::VIEW, frame.view)?;
        backend.set_uniform_vec3(uniforms::VIEW_POS, frame.eye)?;
        backend.bind(self.cube.handle())?;
        for item in frame.lit {
            uniforms::upload_material(backend, item)?;
            self.draw(backend, item.model)?;
            stats.lit_draws += 1;
        }

        backend.use_program(self.unlit)?;
        backend.set_uniform_mat4(uniforms::PROJECTION, frame.projection)?;
        backend.set_uniform_mat4(uniforms::VIEW, frame.view)?;
        backend.bind(self.cube.handle())?;
        for item in frame.unlit {
            backend.set_uniform_vec4(uniforms::COLOR, item.color.extend(1.0))?;
            self.draw(backend, item.model)?;
            stats.unlit_draws += 1;
        }

        self.frame_count += 1;
        trace!(
            "Frame {}: {} lit draws, {} unlit draws",
            self.frame_count,
            stats.lit_draws,
            stats.unlit_draws
        );
        Ok(stats)
    }

    fn draw(&self, backend: &mut dyn RenderBackend, model: Mat4) -> Result<()> {
        backend.set_uniform_mat4(uniforms::MODEL, model)?;
        backend.draw_indexed_triangles(CubeMesh::INDEX_COUNT)
    }
}
