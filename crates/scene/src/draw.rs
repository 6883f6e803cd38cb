//! Draw items produced by the scene for the renderer.

use glam::{Mat4, Vec3};

use crate::transform::{compose, Placement};

/// How a cube is shaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Phong lighting with the object color as material.
    Lit,
    /// Phong lighting plus the object color as emissive term.
    Emissive,
    /// Flat color, no lighting (light bulbs).
    Unlit,
}

/// One unit-cube draw with its model matrix and color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub model: Mat4,
    pub color: Vec3,
    pub shading: Shading,
}

impl DrawItem {
    pub fn new(model: Mat4, color: Vec3, shading: Shading) -> Self {
        Self {
            model,
            color,
            shading,
        }
    }

    /// A lit cube placed relative to the world origin.
    pub fn lit(placement: Placement, color: Vec3) -> Self {
        Self::new(compose(Mat4::IDENTITY, &placement), color, Shading::Lit)
    }
}
