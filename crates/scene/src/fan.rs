//! The ceiling fan: a static stick with a hub and four blades spinning about
//! a vertical axis through the hub center.

use glam::{Mat4, Vec3};

use crate::draw::{DrawItem, Shading};
use crate::transform::{compose, rotate_around_pivot, Placement};

const STICK_COLOR: Vec3 = Vec3::ZERO;
const BLADE_COLOR: Vec3 = Vec3::new(0.27, 0.12, 0.13);

/// Geometry of the fan, authored in stick-local space.
#[derive(Clone, Debug, PartialEq)]
pub struct Fan {
    mount: Vec3,
    stick_scale: Vec3,
    pivot: Vec3,
    hub: Placement,
    blades: [Placement; 4],
}

impl Default for Fan {
    fn default() -> Self {
        Self::ceiling()
    }
}

impl Fan {
    /// The fan hanging from the kitchen ceiling.
    pub fn ceiling() -> Self {
        let blade = |position: Vec3, scale: Vec3| Placement::at(position).with_scale(scale);
        Self {
            mount: Vec3::new(3.0, 4.0, 3.0),
            stick_scale: Vec3::new(0.1, 0.9, 0.1),
            pivot: Vec3::new(3.05, 4.0, 3.05),
            hub: blade(Vec3::new(-0.2, 0.0, -0.2), Vec3::new(0.5, -0.1, 0.5)),
            blades: [
                blade(Vec3::new(-0.2, 0.0, -0.2), Vec3::new(-2.0, -0.1, 0.5)),
                blade(Vec3::new(-0.2, 0.0, 0.3), Vec3::new(0.5, -0.1, 2.0)),
                blade(Vec3::new(0.25, 0.0, 0.25), Vec3::new(2.0, -0.1, -0.5)),
                blade(Vec3::new(0.25, 0.0, -0.25), Vec3::new(-0.5, -0.1, -2.0)),
            ],
        }
    }

    /// World-space point the blades rotate around.
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Parent matrix shared by the hub and blades at `angle_degrees`.
    pub fn rotor_matrix(&self, angle_degrees: f32) -> Mat4 {
        rotate_around_pivot(self.pivot, angle_degrees) * Mat4::from_translation(self.mount)
    }

    /// Stick, hub and blades, in that order.
    pub fn draw_items(&self, angle_degrees: f32) -> Vec<DrawItem> {
        let stick = Placement::at(self.mount).with_scale(self.stick_scale);
        let rotor = self.rotor_matrix(angle_degrees);

        let mut items = Vec::with_capacity(2 + self.blades.len());
        items.push(DrawItem::lit(stick, STICK_COLOR));
        items.extend(
            std::iter::once(&self.hub)
                .chain(self.blades.iter())
                .map(|part| DrawItem::new(compose(rotor, part), BLADE_COLOR, Shading::Lit)),
        );
        items
    }
}
