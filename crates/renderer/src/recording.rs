//! A backend that records every call instead of drawing.
//!
//! Used by tests to assert on the exact command stream, and by the viewer
//! when running without a GPU backend.

use std::collections::HashMap;

use glam::{Mat4, Vec3, Vec4};
use interior_core::{Error, Result};

use crate::backend::{MeshHandle, ProgramHandle, ProgramKind, RenderBackend};
use crate::viewport::Viewport;

/// A uniform value as it was set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec3(Vec3),
    Vec4(Vec4),
    Float(f32),
    Bool(bool),
}

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    UploadMesh {
        mesh: MeshHandle,
        vertex_bytes: usize,
        index_count: usize,
    },
    Viewport(Viewport),
    Clear(Vec4),
    UseProgram(ProgramHandle),
    Bind(MeshHandle),
    Draw {
        program: ProgramHandle,
        index_count: u32,
        model: Option<Mat4>,
    },
    Uniform {
        name: String,
        value: UniformValue,
    },
}

/// Records commands and tracks the latest value of every uniform per program.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<Command>,
    programs: HashMap<ProgramKind, ProgramHandle>,
    uniforms: HashMap<(ProgramHandle, String), UniformValue>,
    current_program: Option<ProgramHandle>,
    next_mesh: u32,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Forget recorded commands but keep programs, meshes and uniform state.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Latest value of `name` on the current program.
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        let program = self.current_program?;
        self.uniforms.get(&(program, name.to_string()))
    }

    /// Latest value of `name` on the program for `kind`.
    pub fn program_uniform(&self, kind: ProgramKind, name: &str) -> Option<&UniformValue> {
        let program = *self.programs.get(&kind)?;
        self.uniforms.get(&(program, name.to_string()))
    }

    /// Names of recorded uniform writes, in order.
    pub fn uniform_names(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Uniform { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Recorded draws, in order.
    pub fn draws(&self) -> impl Iterator<Item = &Command> {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Draw { .. }))
    }

    fn bound_program(&self, call: &str) -> Result<ProgramHandle> {
        self.current_program
            .ok_or_else(|| Error::Render(format!("{call} with no program bound")))
    }

    fn set(&mut self, name: &str, value: UniformValue) -> Result<()> {
        let program = self.bound_program(&format!("uniform `{name}` set"))?;
        self.uniforms.insert((program, name.to_string()), value);
        self.commands.push(Command::Uniform {
            name: name.to_string(),
            value,
        });
        Ok(())
    }
}

impl RenderBackend for RecordingBackend {
    fn program(&mut self, kind: ProgramKind) -> Result<ProgramHandle> {
        let next = ProgramHandle(self.programs.len() as u32 + 1);
        Ok(*self.programs.entry(kind).or_insert(next))
    }

    fn upload_mesh(&mut self, vertices: &[u8], _stride: usize, indices: &[u32]) -> Result<MeshHandle> {
        self.next_mesh += 1;
        let mesh = MeshHandle(self.next_mesh);
        self.commands.push(Command::UploadMesh {
            mesh,
            vertex_bytes: vertices.len(),
            index_count: indices.len(),
        });
        Ok(mesh)
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.commands.push(Command::Viewport(viewport));
        Ok(())
    }

    fn clear(&mut self, color: Vec4) -> Result<()> {
        self.commands.push(Command::Clear(color));
        Ok(())
    }

    fn use_program(&mut self, program: ProgramHandle) -> Result<()> {
        self.current_program = Some(program);
        self.commands.push(Command::UseProgram(program));
        Ok(())
    }

    fn bind(&mut self, mesh: MeshHandle) -> Result<()> {
        self.commands.push(Command::Bind(mesh));
        Ok(())
    }

    fn draw_indexed_triangles(&mut self, index_count: u32) -> Result<()> {
        let program = self.bound_program("draw")?;
        let model = match self.uniform(crate::uniforms::MODEL) {
            Some(UniformValue::Mat4(m)) => Some(*m),
            _ => None,
        };
        self.commands.push(Command::Draw {
            program,
            index_count,
            model,
        });
        Ok(())
    }

    fn set_uniform_mat4(&mut self, name: &str, value: Mat4) -> Result<()> {
        self.set(name, UniformValue::Mat4(value))
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) -> Result<()> {
        self.set(name, UniformValue::Vec3(value))
    }

    fn set_uniform_vec4(&mut self, name: &str, value: Vec4) -> Result<()> {
        self.set(name, UniformValue::Vec4(value))
    }

    fn set_uniform_float(&mut self, name: &str, value: f32) -> Result<()> {
        self.set(name, UniformValue::Float(value))
    }

    fn set_uniform_bool(&mut self, name: &str, value: bool) -> Result<()> {
        self.set(name, UniformValue::Bool(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs_are_stable() {
        let mut backend = RecordingBackend::new();
        let lit = backend.program(ProgramKind::Lighting).expect("program");
        let unlit = backend.program(ProgramKind::Unlit).expect("program");
        assert_ne!(lit, unlit);
        assert_eq!(backend.program(ProgramKind::Lighting).expect("program"), lit);
    }

    #[test]
    fn test_uniforms_are_per_program() {
        let mut backend = RecordingBackend::new();
        let lit = backend.program(ProgramKind::Lighting).expect("program");
        let unlit = backend.program(ProgramKind::Unlit).expect("program");

        backend.use_program(lit).expect("use");
        backend.set_uniform_float("x", 1.0).expect("set");
        backend.use_program(unlit).expect("use");
        backend.set_uniform_float("x", 2.0).expect("set");

        assert_eq!(
            backend.program_uniform(ProgramKind::Lighting, "x"),
            Some(&UniformValue::Float(1.0))
        );
        assert_eq!(backend.uniform("x"), Some(&UniformValue::Float(2.0)));
    }

    #[test]
    fn test_draw_captures_model() {
        let mut backend = RecordingBackend::new();
        let lit = backend.program(ProgramKind::Lighting).expect("program");
        backend.use_program(lit).expect("use");
        let model = Mat4::from_translation(Vec3::X);
        backend.set_uniform_mat4("model", model).expect("set");
        backend.draw_indexed_triangles(36).expect("draw");

        let draws: Vec<_> = backend.draws().collect();
        assert_eq!(
            draws,
            vec![&Command::Draw {
                program: lit,
                index_count: 36,
                model: Some(model)
            }]
        );
    }

    #[test]
    fn test_uniform_without_program_is_error() {
        let mut backend = RecordingBackend::new();
        let err = backend.set_uniform_float("x", 1.0).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert!(backend.commands().is_empty());
        assert_eq!(backend.uniform("x"), None);
    }

    #[test]
    fn test_draw_without_program_is_error() {
        let mut backend = RecordingBackend::new();
        let err = backend.draw_indexed_triangles(36).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert_eq!(backend.draws().count(), 0);
    }
}
