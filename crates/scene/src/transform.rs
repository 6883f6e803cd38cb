//! Parent-relative placement of scene objects.
//!
//! Every drawable in the room is the unit cube placed by a [`Placement`]: a
//! translation, Euler rotation in degrees, and a scale. [`compose`] turns a
//! placement into a model matrix relative to a caller-supplied parent, so a
//! sub-assembly (the fan blades) can be authored in local space and then
//! re-parented under an animated matrix.
//!
//! # Example
//!
//! ```
//! use interior_scene::transform::{compose, Placement};
//! use glam::{Mat4, Vec3};
//!
//! // A parent one unit along x
//! let parent = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
//!
//! // A child placed one unit up, relative to the parent
//! let child = Placement::at(Vec3::new(0.0, 1.0, 0.0));
//!
//! let model = compose(parent, &child);
//! let origin = model.transform_point3(Vec3::ZERO);
//! assert!((origin - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
//! ```

use glam::{Mat4, Vec3};

/// Local placement of an object relative to its parent.
///
/// Rotation angles are in degrees and are applied X, then Y, then Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Translation relative to the parent
    pub position: Vec3,
    /// Euler angles in degrees, applied in X→Y→Z order
    pub rotation_degrees: Vec3,
    /// Per-axis scale factor; negative values mirror the cube
    pub scale: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Placement {
    /// Create an identity placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a placement at the given position.
    pub fn at(position: Vec3) -> Self {
        Self::default().with_position(position)
    }

    /// Create a placement with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a placement with the given Euler rotation in degrees.
    pub fn with_rotation(mut self, rotation_degrees: Vec3) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    /// Create a placement with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local matrix `translate · rotateX · rotateY · rotateZ · scale`.
    pub fn local_matrix(&self) -> Mat4 {
        let r = self.rotation_degrees;
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

/// Compose a model matrix for `local` relative to `parent`.
///
/// The result is `parent · translate · rotateX · rotateY · rotateZ · scale`.
/// Translation is always relative to the parent, never world-absolute.
#[inline]
pub fn compose(parent: Mat4, local: &Placement) -> Mat4 {
    parent * local.local_matrix()
}

/// Rotation about the Y axis through `pivot`.
///
/// Equal to `translate(pivot) · rotateY(angle) · translate(-pivot)`; the pivot
/// point itself is a fixed point of the returned matrix.
pub fn rotate_around_pivot(pivot: Vec3, angle_degrees: f32) -> Mat4 {
    Mat4::from_translation(pivot)
        * Mat4::from_rotation_y(angle_degrees.to_radians())
        * Mat4::from_translation(-pivot)
}
