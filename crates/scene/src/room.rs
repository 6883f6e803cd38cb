//! The authored kitchen interior.
//!
//! Everything in the room is the unit cube `[0, 1]³` scaled and translated
//! into place. Placements are world-relative except the fan, which is
//! parented under its rotor (see [`Fan`]).

use glam::Vec3;

use crate::draw::{DrawItem, Shading};
use crate::fan::Fan;
use crate::light::{Attenuation, DirectionalLight, LightColors, LightRegistry, SpotLight};
use crate::transform::Placement;

const WOOD: Vec3 = Vec3::new(0.70, 0.45, 0.56);
const CREAM: Vec3 = Vec3::new(1.0, 0.99, 0.82);
const WHITE: Vec3 = Vec3::new(0.99, 0.99, 0.99);
const WALL: Vec3 = Vec3::new(0.678, 0.847, 0.902);
const FLOOR: Vec3 = Vec3::new(0.76, 0.57, 0.37);
const SEAT: Vec3 = Vec3::new(0.70, 0.10, 0.17);

const POINT_LIGHT_POSITIONS: [Vec3; 2] = [Vec3::new(2.0, 3.0, 2.0), Vec3::new(2.0, 3.0, 5.0)];
const BULB_SCALE: Vec3 = Vec3::new(0.2, -0.2, 0.2);

fn rgb8(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

fn cube(position: [f32; 3], scale: [f32; 3], color: Vec3) -> DrawItem {
    DrawItem::lit(
        Placement::at(Vec3::from(position)).with_scale(Vec3::from(scale)),
        color,
    )
}

/// Static room geometry plus the fan.
#[derive(Clone, Debug)]
pub struct Room {
    furniture: Vec<DrawItem>,
    holders: Vec<DrawItem>,
    fan: Fan,
}

impl Default for Room {
    fn default() -> Self {
        Self::kitchen()
    }
}

impl Room {
    pub fn kitchen() -> Self {
        let mut furniture = Vec::new();
        shell(&mut furniture);
        cabinets(&mut furniture);
        refrigerator(&mut furniture);
        dining_set(&mut furniture);
        sink_and_tap(&mut furniture);
        oven(&mut furniture);

        let holders = vec![
            light_holder(Vec3::new(2.08, 3.5, 2.08), Vec3::new(0.1, 0.0, 0.0)),
            light_holder(Vec3::new(2.08, 3.5, 5.08), Vec3::new(0.2, 0.3, 0.1)),
        ];

        tracing::debug!(
            "Room built: {} furniture cubes, {} light holders",
            furniture.len(),
            holders.len()
        );

        Self {
            furniture,
            holders,
            fan: Fan::ceiling(),
        }
    }

    /// Lights of the kitchen: two ceiling bulbs, a sun and a spot over the table.
    pub fn lights() -> LightRegistry {
        let mut registry = LightRegistry::new(DirectionalLight::default(), SpotLight::default());
        let colors = LightColors::new(Vec3::splat(0.2), Vec3::splat(0.8), Vec3::ONE);
        for position in POINT_LIGHT_POSITIONS {
            registry.add_point_light(position, colors, Attenuation::default());
        }
        registry
    }

    pub fn furniture(&self) -> &[DrawItem] {
        &self.furniture
    }

    pub fn light_holders(&self) -> &[DrawItem] {
        &self.holders
    }

    pub fn fan(&self) -> &Fan {
        &self.fan
    }

    /// Everything drawn with the lighting program, fan at `fan_angle_degrees`.
    pub fn lit_items(&self, fan_angle_degrees: f32) -> Vec<DrawItem> {
        let mut items = self.furniture.clone();
        items.extend(self.fan.draw_items(fan_angle_degrees));
        items.extend_from_slice(&self.holders);
        items
    }

    /// One unlit white marker cube per point light.
    pub fn bulbs(lights: &LightRegistry) -> Vec<DrawItem> {
        lights
            .point_lights()
            .iter()
            .map(|light| {
                DrawItem::new(
                    glam::Mat4::from_translation(light.position()) * glam::Mat4::from_scale(BULB_SCALE),
                    Vec3::ONE,
                    Shading::Unlit,
                )
            })
            .collect()
    }
}

fn light_holder(position: Vec3, color: Vec3) -> DrawItem {
    let placement = Placement::at(position).with_scale(Vec3::new(0.04, -0.5, 0.04));
    DrawItem {
        shading: Shading::Emissive,
        ..DrawItem::lit(placement, color)
    }
}

/// Floor, ceiling, walls and the window.
fn shell(items: &mut Vec<DrawItem>) {
    items.push(cube([0.0, 0.0, 0.0], [6.0, 0.1, 6.0], FLOOR));
    items.push(cube([0.0, 5.0, 0.0], [6.0, 0.1, 6.0], CREAM));
    items.push(cube([0.0, 0.1, -0.05], [6.0, 5.0, 0.1], WALL));
    items.push(cube([-0.05, 0.1, 0.0], [0.1, 5.0, 6.0], WALL));

    items.push(cube([2.0, 2.0, 0.1], [2.0, 1.5, 0.1], WOOD));
    items.push(cube([2.05, 2.05, 0.15], [0.9, 1.4, 0.1], WHITE));
    items.push(cube([3.05, 2.05, 0.15], [0.9, 1.4, 0.1], WHITE));
}

/// A run of `count` doors separated by thin gaps along one axis.
fn door_run(
    items: &mut Vec<DrawItem>,
    count: usize,
    width: f32,
    gap: f32,
    place: impl Fn(f32, f32) -> ([f32; 3], [f32; 3]),
    gap_color: Vec3,
) {
    for i in 0..count {
        let offset = i as f32 * (width + gap);
        let (position, scale) = place(offset, width);
        items.push(cube(position, scale, WOOD));
        if i + 1 < count {
            let (position, scale) = place(offset + width, gap);
            items.push(cube(position, scale, gap_color));
        }
    }
}

/// Counter tops, wall cabinets and base cabinets.
fn cabinets(items: &mut Vec<DrawItem>) {
    items.push(cube([0.1, 1.5, 0.1], [4.0, 0.1, 1.2], CREAM));
    items.push(cube([0.1, 1.5, 0.1], [1.2, 0.1, 5.9], CREAM));

    // Wall cabinets on the left wall.
    door_run(
        items,
        4,
        0.8,
        0.1,
        |z, depth| ([0.0, 2.5, z], [0.6, 1.0, depth]),
        CREAM,
    );
    // Corner cabinet on the right wall.
    items.push(cube([0.65, 2.5, 0.0], [0.8, 1.0, 0.6], WOOD));
    items.push(cube([0.65, 2.55, 0.6], [0.7, 0.9, 0.05], WHITE));

    // Base cabinets along both walls.
    door_run(
        items,
        6,
        0.8,
        0.1,
        |z, depth| ([0.0, 0.0, 0.5 + z], [1.2, 1.5, depth]),
        WHITE,
    );
    door_run(
        items,
        4,
        0.6,
        0.1,
        |x, width| ([1.2 + x, 0.0, 0.0], [width, 1.5, 1.2]),
        WHITE,
    );
}

fn refrigerator(items: &mut Vec<DrawItem>) {
    let handle = rgb8(20, 20, 20);
    items.push(cube([4.0, 0.0, 0.0], [2.0, 3.5, 1.5], WOOD));
    items.push(cube([4.05, 0.0, 1.5], [0.95, 3.5, 0.05], WHITE));
    items.push(cube([5.05, 0.0, 1.5], [0.95, 3.5, 0.05], WHITE));
    items.push(cube([4.9, 1.5, 1.55], [0.05, 1.1, 0.05], handle));
    items.push(cube([5.1, 1.5, 1.55], [0.05, 1.1, 0.05], handle));
}

/// Table with four legs and four chairs, two on each side.
fn dining_set(items: &mut Vec<DrawItem>) {
    items.push(cube([3.0, 1.5, 4.0], [2.0, 0.1, 1.5], WOOD));
    for (x, z) in [(3.0, 4.0), (4.9, 4.0), (3.0, 5.4), (4.9, 5.4)] {
        items.push(cube([x, 0.0, z], [0.1, 1.5, 0.1], WHITE));
    }

    let leg = rgb8(75, 62, 53);
    for row in 0..2 {
        let zf = row as f32;
        let z = zf * 2.0 + 3.0;
        // The backrest faces away from the table, so the tall legs swap sides.
        let (front_height, back_height) = if row == 0 { (1.5, 0.8) } else { (0.8, 1.5) };
        for column in 0..2 {
            let x = column as f32 * 0.9 + 3.2;

            items.push(cube([x, 0.8, z], [0.5, 0.1, 0.5], SEAT));
            items.push(cube([x, 0.0, z], [0.1, front_height, 0.1], leg));
            items.push(cube([x + 0.4, 0.0, z], [0.1, front_height, 0.1], leg));
            items.push(cube([x, 0.0, z + 0.4], [0.1, back_height, 0.1], leg));
            items.push(cube([x + 0.4, 0.0, z + 0.4], [0.1, back_height, 0.1], leg));

            let slat_z = z + 0.4 * zf;
            for slat_x in [0.13, 0.24, 0.35] {
                items.push(cube([x + slat_x, 0.9, slat_z], [0.05, 0.6, 0.1], leg));
            }
        }
    }
}

fn sink_and_tap(items: &mut Vec<DrawItem>) {
    items.push(cube([2.0, 1.6, 0.1], [1.5, 0.02, 1.3], rgb8(24, 21, 22)));

    const DRAIN_SLOTS: usize = 20;
    let unit = 1.3 / (2 * DRAIN_SLOTS) as f32;
    let slot = rgb8(60, 60, 60);
    for i in 0..DRAIN_SLOTS {
        let z = (i + 1) as f32 * 2.0 * unit;
        items.push(cube([2.0, 1.63, z], [1.0, 0.01, unit / 2.0], slot));
    }

    let chrome = rgb8(200, 200, 200);
    items.push(cube([3.2, 1.6, 0.3], [0.05, 0.5, 0.05], chrome));
    items.push(cube([3.2, 2.1, 0.3], [0.05, 0.05, 0.3], chrome));
    items.push(cube([3.2, 2.0, 0.6], [0.05, 0.2, 0.05], chrome));
}

fn oven(items: &mut Vec<DrawItem>) {
    let black = rgb8(20, 20, 20);
    items.push(cube([0.1, 1.6, 4.0], [0.8, 0.5, 1.2], rgb8(154, 134, 108)));
    items.push(cube([0.9, 1.6, 4.35], [0.01, 0.5, 0.8], black));

    const GRILL_BARS: usize = 15;
    let unit = 0.5 / (2 * GRILL_BARS) as f32;
    for i in 0..GRILL_BARS {
        let y = 1.6 + (i + 1) as f32 * 2.0 * unit;
        items.push(cube([0.9, y, 4.05], [0.01, unit / 4.0, 0.3], Vec3::ONE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Switchable;

    #[test]
    fn test_lights_fill_two_slots() {
        let lights = Room::lights();
        assert_eq!(lights.point_lights().len(), 2);
        assert_eq!(lights.point_lights()[1].position(), Vec3::new(2.0, 3.0, 5.0));
        assert!(lights.point_lights().iter().all(|l| l.is_on()));
    }

    #[test]
    fn test_holders_are_emissive() {
        let room = Room::kitchen();
        assert_eq!(room.light_holders().len(), 2);
        assert!(room
            .light_holders()
            .iter()
            .all(|item| item.shading == Shading::Emissive));
    }

    #[test]
    fn test_furniture_is_lit_and_inside_room() {
        let room = Room::kitchen();
        assert!(!room.furniture().is_empty());
        for item in room.furniture() {
            assert_eq!(item.shading, Shading::Lit);
            let origin = item.model.transform_point3(Vec3::ZERO);
            assert!(origin.x >= -0.05 && origin.x <= 6.0, "{origin:?}");
            assert!(origin.z >= -0.05 && origin.z <= 6.0, "{origin:?}");
        }
    }

    #[test]
    fn test_lit_items_include_fan_and_holders() {
        let room = Room::kitchen();
        let items = room.lit_items(0.0);
        assert_eq!(items.len(), room.furniture().len() + 6 + 2);
    }

    #[test]
    fn test_bulb_per_point_light() {
        let lights = Room::lights();
        let bulbs = Room::bulbs(&lights);
        assert_eq!(bulbs.len(), 2);
        for (bulb, light) in bulbs.iter().zip(lights.point_lights()) {
            assert_eq!(bulb.shading, Shading::Unlit);
            assert_eq!(bulb.model.transform_point3(Vec3::ZERO), light.position());
        }
    }

    #[test]
    fn test_door_run_counts() {
        let mut items = Vec::new();
        door_run(&mut items, 4, 0.8, 0.1, |z, d| ([0.0, 0.0, z], [1.0, 1.0, d]), WHITE);
        assert_eq!(items.len(), 7);
        assert_eq!(items.iter().filter(|i| i.color == WOOD).count(), 4);
    }
}
