//! Perspective projection.
//!
//! [`Perspective::matrix`] is the canonical construction used for rendering.
//! [`Perspective::explicit_matrix`] builds the same matrix element by element
//! and exists so the two can be checked against each other.
//!
//! ```
//! use interior_scene::Perspective;
//!
//! let projection = Perspective::new(45.0, 4.0 / 3.0, 0.1, 100.0);
//! assert!(projection.matrix().abs_diff_eq(projection.explicit_matrix(), 1e-5));
//! ```

use glam::{Mat4, Vec4};
use interior_core::Config;

/// Right-handed perspective projection with an OpenGL clip volume (z in [-1, 1]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Width over height of the viewport
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    /// Projection for the configured window aspect and clip planes.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.camera.zoom,
            config.window.aspect,
            config.projection.near,
            config.projection.far,
        )
    }

    /// Same projection with a different field of view.
    pub fn with_fov(mut self, fov_y_degrees: f32) -> Self {
        self.fov_y_degrees = fov_y_degrees;
        self
    }

    /// Same projection with a different aspect ratio.
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Projection matrix via the standard perspective formula.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Projection matrix assembled element by element.
    ///
    /// Column-major, `m[col][row]`: `m[0][0] = 1/(aspect·tan(fov/2))`,
    /// `m[1][1] = 1/tan(fov/2)`, `m[2][2] = -(far+near)/(far-near)`,
    /// `m[2][3] = -1`, `m[3][2] = -2·far·near/(far-near)`, zero elsewhere.
    pub fn explicit_matrix(&self) -> Mat4 {
        let tan_half_fov = (self.fov_y_degrees.to_radians() * 0.5).tan();
        let depth = self.far - self.near;

        Mat4::from_cols(
            Vec4::new(1.0 / (self.aspect * tan_half_fov), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0 / tan_half_fov, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -(self.far + self.near) / depth, -1.0),
            Vec4::new(0.0, 0.0, -(2.0 * self.far * self.near) / depth, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    /// Element-wise comparison relative to the element's magnitude.
    fn approx_eq_mat4(a: Mat4, b: Mat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() <= 1e-5 * x.abs().max(1.0))
    }

    #[test]
    fn test_formula_matches_explicit() {
        for fov in [1.0, 10.0, 30.0, 45.0, 60.0, 90.0, 120.0, 170.0] {
            for aspect in [0.5, 1.0, 4.0 / 3.0, 16.0 / 9.0, 3.2] {
                for (near, far) in [(0.01, 10.0), (0.1, 100.0), (1.0, 1000.0), (5.0, 6.0)] {
                    let p = Perspective::new(fov, aspect, near, far);
                    assert!(
                        approx_eq_mat4(p.matrix(), p.explicit_matrix()),
                        "mismatch for {:?}:\n{:?}\n{:?}",
                        p,
                        p.matrix(),
                        p.explicit_matrix()
                    );
                }
            }
        }
    }

    #[test]
    fn test_explicit_layout() {
        let p = Perspective::new(90.0, 2.0, 1.0, 3.0);
        let m = p.explicit_matrix();

        // tan(45 degrees) = 1
        assert!((m.x_axis.x - 0.5).abs() < 1e-6);
        assert!((m.y_axis.y - 1.0).abs() < 1e-6);
        assert_eq!(m.z_axis.z, -2.0);
        assert_eq!(m.z_axis.w, -1.0);
        assert_eq!(m.w_axis.z, -3.0);
        assert_eq!(m.w_axis.w, 0.0);
        assert_eq!(m.x_axis.y, 0.0);
        assert_eq!(m.z_axis.x, 0.0);
    }

    #[test]
    fn test_clip_planes_map_to_ndc_bounds() {
        let p = Perspective::new(45.0, 4.0 / 3.0, 0.1, 100.0);
        let m = p.matrix();

        let near = m.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -100.0));
        assert!((near.z + 1.0).abs() < 1e-4, "near z = {}", near.z);
        assert!((far.z - 1.0).abs() < 1e-4, "far z = {}", far.z);
    }

    #[test]
    fn test_from_config() {
        let config = Config::default();
        let p = Perspective::from_config(&config);
        assert_eq!(p.fov_y_degrees, 45.0);
        assert_eq!(p.aspect, 4.0 / 3.0);
        assert_eq!(p.near, 0.1);
        assert_eq!(p.far, 100.0);

        let narrowed = p.with_fov(30.0).with_aspect(2.0);
        assert_eq!(narrowed.fov_y_degrees, 30.0);
        assert_eq!(narrowed.aspect, 2.0);
        assert_eq!(narrowed.near, p.near);
    }
}
