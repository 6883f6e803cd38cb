//! Light definitions for the scene.
//!
//! Every light carries a master on/off state and a [`ChannelMask`] with one
//! flag per Phong channel. The authored colors are never modified; toggles
//! only change the mask, and the effective color sent to the shader is
//! `raw color × mask`.

use glam::Vec3;

/// Number of point-light slots in the lighting shader.
pub const MAX_POINT_LIGHTS: usize = 4;

/// One of the three Phong lighting channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Ambient,
    Diffuse,
    Specular,
}

/// Independent on/off flags for the three channels of a light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMask {
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
}

impl ChannelMask {
    pub const ALL_ON: Self = Self {
        ambient: true,
        diffuse: true,
        specular: true,
    };

    pub const ALL_OFF: Self = Self {
        ambient: false,
        diffuse: false,
        specular: false,
    };

    pub fn get(&self, channel: Channel) -> bool {
        match channel {
            Channel::Ambient => self.ambient,
            Channel::Diffuse => self.diffuse,
            Channel::Specular => self.specular,
        }
    }

    pub fn set(&mut self, channel: Channel, on: bool) {
        match channel {
            Channel::Ambient => self.ambient = on,
            Channel::Diffuse => self.diffuse = on,
            Channel::Specular => self.specular = on,
        }
    }

    /// The channel flag as a color multiplier (0.0 or 1.0).
    pub fn factor(&self, channel: Channel) -> f32 {
        if self.get(channel) { 1.0 } else { 0.0 }
    }

    pub fn all_on(&self) -> bool {
        self.ambient && self.diffuse && self.specular
    }
}

impl Default for ChannelMask {
    fn default() -> Self {
        Self::ALL_ON
    }
}

/// Ambient, diffuse and specular colors of a light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightColors {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl LightColors {
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    pub fn get(&self, channel: Channel) -> Vec3 {
        match channel {
            Channel::Ambient => self.ambient,
            Channel::Diffuse => self.diffuse,
            Channel::Specular => self.specular,
        }
    }

    /// Colors scaled by the mask.
    pub fn masked(&self, mask: ChannelMask) -> Self {
        Self {
            ambient: self.ambient * mask.factor(Channel::Ambient),
            diffuse: self.diffuse * mask.factor(Channel::Diffuse),
            specular: self.specular * mask.factor(Channel::Specular),
        }
    }

    pub const BLACK: Self = Self {
        ambient: Vec3::ZERO,
        diffuse: Vec3::ZERO,
        specular: Vec3::ZERO,
    };
}

/// Distance attenuation `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

/// Master state plus channel mask of one light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightSwitch {
    on: bool,
    mask: ChannelMask,
}

impl Default for LightSwitch {
    fn default() -> Self {
        Self {
            on: true,
            mask: ChannelMask::ALL_ON,
        }
    }
}

/// On/off behavior shared by every light kind.
///
/// `turn_on` and `turn_off` set the master state and all three channels;
/// the per-channel methods flip exactly one channel regardless of the master
/// state.
pub trait Switchable {
    fn switch(&self) -> &LightSwitch;
    fn switch_mut(&mut self) -> &mut LightSwitch;

    /// Raw authored colors.
    fn colors(&self) -> &LightColors;

    fn is_on(&self) -> bool {
        self.switch().on
    }

    fn mask(&self) -> ChannelMask {
        self.switch().mask
    }

    fn turn_on(&mut self) {
        let switch = self.switch_mut();
        switch.on = true;
        switch.mask = ChannelMask::ALL_ON;
    }

    fn turn_off(&mut self) {
        let switch = self.switch_mut();
        switch.on = false;
        switch.mask = ChannelMask::ALL_OFF;
    }

    fn set_channel(&mut self, channel: Channel, on: bool) {
        self.switch_mut().mask.set(channel, on);
    }

    fn turn_ambient_on(&mut self) {
        self.set_channel(Channel::Ambient, true);
    }

    fn turn_ambient_off(&mut self) {
        self.set_channel(Channel::Ambient, false);
    }

    fn turn_diffuse_on(&mut self) {
        self.set_channel(Channel::Diffuse, true);
    }

    fn turn_diffuse_off(&mut self) {
        self.set_channel(Channel::Diffuse, false);
    }

    fn turn_specular_on(&mut self) {
        self.set_channel(Channel::Specular, true);
    }

    fn turn_specular_off(&mut self) {
        self.set_channel(Channel::Specular, false);
    }

    /// Colors as the shader should see them: masked while on, black while off.
    fn effective_colors(&self) -> LightColors {
        if self.is_on() {
            self.colors().masked(self.mask())
        } else {
            LightColors::BLACK
        }
    }
}

/// A point light (omnidirectional bulb).
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    position: Vec3,
    colors: LightColors,
    attenuation: Attenuation,
    slot: usize,
    switch: LightSwitch,
}

impl PointLight {
    /// Create a light bound to shader slot `slot` (`pointLights[slot]`).
    pub fn new(slot: usize, position: Vec3, colors: LightColors, attenuation: Attenuation) -> Self {
        Self {
            position,
            colors,
            attenuation,
            slot,
            switch: LightSwitch::default(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }

    /// Index into the shader's `pointLights` array.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl Switchable for PointLight {
    fn switch(&self) -> &LightSwitch {
        &self.switch
    }

    fn switch_mut(&mut self) -> &mut LightSwitch {
        &mut self.switch
    }

    fn colors(&self) -> &LightColors {
        &self.colors
    }
}

/// A directional light (sun-like).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
    colors: LightColors,
    switch: LightSwitch,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, -1.0, 0.0),
            LightColors::new(Vec3::splat(0.1), Vec3::splat(0.8), Vec3::ONE),
        )
    }
}

impl DirectionalLight {
    pub fn new(direction: Vec3, colors: LightColors) -> Self {
        Self {
            direction,
            colors,
            switch: LightSwitch::default(),
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}

impl Switchable for DirectionalLight {
    fn switch(&self) -> &LightSwitch {
        &self.switch
    }

    fn switch_mut(&mut self) -> &mut LightSwitch {
        &mut self.switch
    }

    fn colors(&self) -> &LightColors {
        &self.colors
    }
}

/// A spot light (cone-shaped).
#[derive(Clone, Debug, PartialEq)]
pub struct SpotLight {
    position: Vec3,
    direction: Vec3,
    colors: LightColors,
    attenuation: Attenuation,
    cos_cutoff: f32,
    switch: LightSwitch,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self::new(
            Vec3::new(4.0, 4.5, 6.0),
            Vec3::new(0.0, -1.0, 0.0),
            LightColors::new(Vec3::splat(0.5), Vec3::splat(0.8), Vec3::ONE),
            Attenuation::default(),
            40.0,
        )
    }
}

impl SpotLight {
    /// Create a spot light whose cone has the given half-angle in degrees.
    pub fn new(
        position: Vec3,
        direction: Vec3,
        colors: LightColors,
        attenuation: Attenuation,
        half_angle_degrees: f32,
    ) -> Self {
        Self {
            position,
            direction,
            colors,
            attenuation,
            cos_cutoff: half_angle_degrees.to_radians().cos(),
            switch: LightSwitch::default(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }

    /// Cosine of the cone half-angle; fragments with a smaller cosine are unlit.
    pub fn cos_cutoff(&self) -> f32 {
        self.cos_cutoff
    }
}

impl Switchable for SpotLight {
    fn switch(&self) -> &LightSwitch {
        &self.switch
    }

    fn switch_mut(&mut self) -> &mut LightSwitch {
        &mut self.switch
    }

    fn colors(&self) -> &LightColors {
        &self.colors
    }
}

/// All lights of the scene: indexed point lights, one directional, one spot.
#[derive(Clone, Debug, Default)]
pub struct LightRegistry {
    point_lights: Vec<PointLight>,
    pub directional: DirectionalLight,
    pub spot: SpotLight,
}

impl LightRegistry {
    pub fn new(directional: DirectionalLight, spot: SpotLight) -> Self {
        Self {
            point_lights: Vec::new(),
            directional,
            spot,
        }
    }

    /// Add a point light in the next free shader slot.
    ///
    /// Returns the slot index, or `None` when all [`MAX_POINT_LIGHTS`] slots
    /// are taken.
    pub fn add_point_light(
        &mut self,
        position: Vec3,
        colors: LightColors,
        attenuation: Attenuation,
    ) -> Option<usize> {
        let slot = self.point_lights.len();
        if slot >= MAX_POINT_LIGHTS {
            tracing::warn!("Point light at {:?} dropped: all {} slots used", position, MAX_POINT_LIGHTS);
            return None;
        }
        self.point_lights
            .push(PointLight::new(slot, position, colors, attenuation));
        Some(slot)
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn point_light(&self, slot: usize) -> Option<&PointLight> {
        self.point_lights.get(slot)
    }

    pub fn point_light_mut(&mut self, slot: usize) -> Option<&mut PointLight> {
        self.point_lights.get_mut(slot)
    }

    /// Toggle one point light: fully lit lights turn off, anything else turns fully on.
    ///
    /// Returns the new master state, or `None` for an unknown slot.
    pub fn toggle_point_light(&mut self, slot: usize) -> Option<bool> {
        let light = self.point_lights.get_mut(slot)?;
        if light.is_on() && light.mask().all_on() {
            light.turn_off();
        } else {
            light.turn_on();
        }
        tracing::debug!("Point light {} on={}", slot, light.is_on());
        Some(light.is_on())
    }

    /// Toggle one channel on every point light that is individually on.
    ///
    /// If any of those lights has the channel lit, it is turned off on all of
    /// them; otherwise it is turned on on all of them. Lights that are off are
    /// left untouched. Returns the new channel state, or `None` when no point
    /// light is on.
    pub fn toggle_point_channel(&mut self, channel: Channel) -> Option<bool> {
        if !self.point_lights.iter().any(|l| l.is_on()) {
            return None;
        }

        let any_lit = self
            .point_lights
            .iter()
            .any(|l| l.is_on() && l.mask().get(channel));
        let next = !any_lit;
        for light in self.point_lights.iter_mut().filter(|l| l.is_on()) {
            light.set_channel(channel, next);
        }
        tracing::debug!("Point light {:?} channel on={}", channel, next);
        Some(next)
    }

    /// Toggle the directional light on or off.
    pub fn toggle_directional(&mut self) -> bool {
        toggle_master(&mut self.directional);
        tracing::debug!("Directional light on={}", self.directional.is_on());
        self.directional.is_on()
    }

    /// Flip one channel of the directional light while it is on.
    ///
    /// Returns the new channel state, or `None` when the light is off.
    pub fn toggle_directional_channel(&mut self, channel: Channel) -> Option<bool> {
        if !self.directional.is_on() {
            return None;
        }
        let next = !self.directional.mask().get(channel);
        self.directional.set_channel(channel, next);
        tracing::debug!("Directional {:?} channel on={}", channel, next);
        Some(next)
    }

    /// Toggle the spot light on or off.
    pub fn toggle_spot(&mut self) -> bool {
        toggle_master(&mut self.spot);
        tracing::debug!("Spot light on={}", self.spot.is_on());
        self.spot.is_on()
    }
}

fn toggle_master(light: &mut impl Switchable) {
    if light.is_on() {
        light.turn_off();
    } else {
        light.turn_on();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_two_bulbs() -> LightRegistry {
        let mut registry = LightRegistry::default();
        let colors = LightColors::new(Vec3::splat(0.2), Vec3::splat(0.8), Vec3::ONE);
        registry.add_point_light(Vec3::new(2.0, 3.0, 2.0), colors, Attenuation::default());
        registry.add_point_light(Vec3::new(2.0, 3.0, 5.0), colors, Attenuation::default());
        registry
    }

    #[test]
    fn test_mask_factor() {
        let mut mask = ChannelMask::ALL_ON;
        assert_eq!(mask.factor(Channel::Diffuse), 1.0);
        mask.set(Channel::Diffuse, false);
        assert_eq!(mask.factor(Channel::Diffuse), 0.0);
        assert!(!mask.all_on());
    }

    #[test]
    fn test_masked_keeps_raw_colors() {
        let mut registry = registry_with_two_bulbs();
        let light = registry.point_light_mut(0).expect("slot 0");
        let raw = *light.colors();

        light.turn_off();
        assert_eq!(light.effective_colors(), LightColors::BLACK);
        assert_eq!(*light.colors(), raw);

        light.turn_on();
        assert_eq!(light.effective_colors(), raw);
    }

    #[test]
    fn test_turn_on_idempotent() {
        let mut registry = registry_with_two_bulbs();
        let light = registry.point_light_mut(1).expect("slot 1");
        light.turn_ambient_off();

        light.turn_on();
        let once = light.clone();
        light.turn_on();
        assert_eq!(*light, once);
    }

    #[test]
    fn test_ambient_off_on_restores_contribution() {
        let mut light = DirectionalLight::default();
        let before = light.effective_colors();

        light.turn_ambient_off();
        assert_eq!(light.effective_colors().ambient, Vec3::ZERO);
        assert_eq!(light.effective_colors().diffuse, before.diffuse);

        light.turn_ambient_on();
        assert_eq!(light.effective_colors(), before);
    }

    #[test]
    fn test_channel_flip_ignores_master_state() {
        let mut light = SpotLight::default();
        light.turn_off();
        light.turn_specular_on();

        assert!(!light.is_on());
        assert!(light.mask().specular);
        assert!(!light.mask().ambient);
        // Still dark while the master switch is off.
        assert_eq!(light.effective_colors(), LightColors::BLACK);
    }

    #[test]
    fn test_slots_are_sequential() {
        let registry = registry_with_two_bulbs();
        let slots: Vec<usize> = registry.point_lights().iter().map(|l| l.slot()).collect();
        assert_eq!(slots, vec![0, 1]);
    }

    #[test]
    fn test_slots_are_bounded() {
        let mut registry = LightRegistry::default();
        for i in 0..MAX_POINT_LIGHTS {
            assert_eq!(
                registry.add_point_light(Vec3::ZERO, LightColors::BLACK, Attenuation::default()),
                Some(i)
            );
        }
        assert_eq!(
            registry.add_point_light(Vec3::ZERO, LightColors::BLACK, Attenuation::default()),
            None
        );
        assert_eq!(registry.point_lights().len(), MAX_POINT_LIGHTS);
    }

    #[test]
    fn test_toggle_point_light() {
        let mut registry = registry_with_two_bulbs();
        assert_eq!(registry.toggle_point_light(0), Some(false));
        assert_eq!(registry.toggle_point_light(0), Some(true));
        assert_eq!(registry.toggle_point_light(7), None);

        // A partially lit light turns fully on.
        registry
            .point_light_mut(1)
            .expect("slot 1")
            .turn_diffuse_off();
        assert_eq!(registry.toggle_point_light(1), Some(true));
        assert!(registry.point_light(1).expect("slot 1").mask().all_on());
    }

    #[test]
    fn test_scene_toggle_skips_off_lights() {
        let mut registry = registry_with_two_bulbs();
        registry.toggle_point_light(1);
        let b_before = registry.point_light(1).expect("slot 1").clone();

        assert_eq!(registry.toggle_point_channel(Channel::Ambient), Some(false));
        assert!(!registry.point_light(0).expect("slot 0").mask().ambient);
        assert_eq!(*registry.point_light(1).expect("slot 1"), b_before);

        assert_eq!(registry.toggle_point_channel(Channel::Ambient), Some(true));
        assert!(registry.point_light(0).expect("slot 0").mask().ambient);
        assert_eq!(*registry.point_light(1).expect("slot 1"), b_before);
    }

    #[test]
    fn test_scene_toggle_applies_identically() {
        let mut registry = registry_with_two_bulbs();
        registry
            .point_light_mut(0)
            .expect("slot 0")
            .turn_specular_off();

        // Light 1 still has specular lit, so the toggle turns it off everywhere.
        assert_eq!(registry.toggle_point_channel(Channel::Specular), Some(false));
        for light in registry.point_lights() {
            assert!(!light.mask().specular);
            assert!(light.mask().ambient && light.mask().diffuse);
        }
    }

    #[test]
    fn test_scene_toggle_with_all_lights_off() {
        let mut registry = registry_with_two_bulbs();
        registry.toggle_point_light(0);
        registry.toggle_point_light(1);
        assert_eq!(registry.toggle_point_channel(Channel::Diffuse), None);
    }

    #[test]
    fn test_directional_channel_requires_light_on() {
        let mut registry = LightRegistry::default();
        assert_eq!(registry.toggle_directional_channel(Channel::Diffuse), Some(false));
        assert_eq!(registry.toggle_directional_channel(Channel::Diffuse), Some(true));

        assert!(!registry.toggle_directional());
        assert_eq!(registry.toggle_directional_channel(Channel::Diffuse), None);
        assert!(registry.toggle_directional());
        assert!(registry.directional.mask().all_on());
    }

    #[test]
    fn test_spot_toggle_and_cutoff() {
        let mut registry = LightRegistry::default();
        assert!(!registry.toggle_spot());
        assert!(registry.toggle_spot());

        let spot = &registry.spot;
        assert!((spot.cos_cutoff() - 40f32.to_radians().cos()).abs() < 1e-6);
    }
}
