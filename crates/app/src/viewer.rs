//! Viewer state: cameras, lights, fan and room, driven by input each frame.

use glam::{Mat4, Vec3};
use interior_core::{Config, Result};
use interior_platform::InputState;
use interior_renderer::{Frame, FrameRenderer, FrameStats, RenderBackend};
use interior_scene::{
    CameraMode, CameraRig, FanAnimation, LightRegistry, Perspective, Room, ViewSource,
};
use tracing::{debug, info};

use crate::bindings::{self, HeldAction, Toggle};

/// Matrices for one frame, computed after all input has been applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
}

/// Everything that changes while the viewer runs.
pub struct Viewer {
    rig: CameraRig,
    lights: LightRegistry,
    fan: FanAnimation,
    room: Room,
    perspective: Perspective,
    quit: bool,
}

impl Viewer {
    pub fn new(config: &Config) -> Self {
        info!(
            "Viewer ready: eye {:?}, look-at {:?}",
            config.camera.eye, config.camera.look_at
        );
        Self {
            rig: CameraRig::from_config(config),
            lights: Room::lights(),
            fan: FanAnimation::from_config(config),
            room: Room::kitchen(),
            perspective: Perspective::from_config(config),
            quit: false,
        }
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn lights(&self) -> &LightRegistry {
        &self.lights
    }

    pub fn fan(&self) -> &FanAnimation {
        &self.fan
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply one frame of input, then advance the fan.
    pub fn update(&mut self, input: &InputState, delta_time: f32) {
        for toggle in bindings::pressed_toggles(input) {
            self.apply_toggle(toggle);
        }

        for action in bindings::held_actions(input, self.rig.mode()) {
            match action {
                HeldAction::Move(movement) => self.rig.free.process_keyboard(movement, delta_time),
                HeldAction::Dolly(direction) => self.rig.bird_eye.dolly(direction, delta_time),
                HeldAction::Orbit => self.rig.free.orbit(),
                HeldAction::StartFan => self.fan.start(),
                HeldAction::StopFan => self.fan.stop(),
                HeldAction::Quit => self.request_quit(),
            }
        }
        if input.close_requested() {
            self.request_quit();
        }

        if self.rig.mode() == CameraMode::Free {
            let (dx, dy) = input.look_delta();
            if dx != 0.0 || dy != 0.0 {
                self.rig.free.process_mouse_movement(dx, dy, true);
            }
        }
        let (_, scroll) = input.scroll_delta();
        if scroll != 0.0 {
            self.rig.free.process_mouse_scroll(scroll);
        }

        self.fan.advance();
    }

    fn request_quit(&mut self) {
        if !self.quit {
            info!("Quit requested");
        }
        self.quit = true;
    }

    fn apply_toggle(&mut self, toggle: Toggle) {
        match toggle {
            Toggle::CameraMode => {
                self.rig.toggle_mode();
            }
            Toggle::Directional => {
                self.lights.toggle_directional();
            }
            Toggle::PointLight(slot) => {
                if self.lights.toggle_point_light(slot).is_none() {
                    debug!("No point light in slot {}", slot);
                }
            }
            Toggle::Spot => {
                self.lights.toggle_spot();
            }
            Toggle::Channel(channel) => {
                self.lights.toggle_point_channel(channel);
                self.lights.toggle_directional_channel(channel);
            }
        }
    }

    /// View, projection and eye of the active camera.
    pub fn matrices(&self) -> FrameMatrices {
        FrameMatrices {
            view: self.rig.view_matrix(),
            projection: self.perspective.with_fov(self.rig.fov_degrees()).matrix(),
            eye: self.rig.eye_position(),
        }
    }

    /// Submit the current state as one frame.
    pub fn render(
        &self,
        renderer: &mut FrameRenderer,
        backend: &mut dyn RenderBackend,
    ) -> Result<FrameStats> {
        let matrices = self.matrices();
        let lit = self.room.lit_items(self.fan.rotation_degrees());
        let bulbs = Room::bulbs(&self.lights);
        let frame = Frame {
            view: matrices.view,
            projection: matrices.projection,
            eye: matrices.eye,
            lights: &self.lights,
            lit: &lit,
            unlit: &bulbs,
        };
        renderer.render(backend, &frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interior_platform::KeyCode;
    use interior_scene::Switchable;

    fn press(viewer: &mut Viewer, input: &mut InputState, key: KeyCode) {
        input.on_key_pressed(key);
        viewer.update(input, 1.0 / 60.0);
        input.on_key_released(key);
        input.begin_frame();
    }

    #[test]
    fn test_camera_toggle() {
        let mut viewer = Viewer::new(&Config::default());
        let mut input = InputState::new();
        press(&mut viewer, &mut input, KeyCode::KeyB);
        assert_eq!(viewer.rig().mode(), CameraMode::BirdEye);
        press(&mut viewer, &mut input, KeyCode::KeyB);
        assert_eq!(viewer.rig().mode(), CameraMode::Free);
    }

    #[test]
    fn test_held_toggle_key_fires_once() {
        let mut viewer = Viewer::new(&Config::default());
        let mut input = InputState::new();
        input.on_key_pressed(KeyCode::Digit4);
        for _ in 0..5 {
            viewer.update(&input, 1.0 / 60.0);
            input.begin_frame();
        }
        assert!(!viewer.lights().spot.is_on());
    }

    #[test]
    fn test_channel_toggle_hits_sun_and_bulbs() {
        let mut viewer = Viewer::new(&Config::default());
        let mut input = InputState::new();
        press(&mut viewer, &mut input, KeyCode::Digit6);

        assert!(!viewer.lights().directional.mask().diffuse);
        assert!(viewer.lights().point_lights().iter().all(|l| !l.mask().diffuse));
        assert!(viewer.lights().spot.mask().diffuse);
    }

    #[test]
    fn test_escape_quits() {
        let mut viewer = Viewer::new(&Config::default());
        let mut input = InputState::new();
        press(&mut viewer, &mut input, KeyCode::Escape);
        assert!(viewer.should_quit());
    }

    #[test]
    fn test_fan_spins_while_on() {
        let mut viewer = Viewer::new(&Config::default());
        let mut input = InputState::new();
        press(&mut viewer, &mut input, KeyCode::KeyO);
        for _ in 0..9 {
            viewer.update(&input, 1.0 / 60.0);
        }
        assert_eq!(viewer.fan().angle_degrees(), 10.0);

        press(&mut viewer, &mut input, KeyCode::KeyP);
        assert_eq!(viewer.fan().angle_degrees(), 0.0);
    }

    #[test]
    fn test_mouse_look_only_while_dragging() {
        let mut viewer = Viewer::new(&Config::default());
        let mut input = InputState::new();
        let yaw = viewer.rig().free.yaw();

        input.on_mouse_moved(100.0, 100.0);
        input.on_mouse_moved(200.0, 100.0);
        viewer.update(&input, 1.0 / 60.0);
        assert_eq!(viewer.rig().free.yaw(), yaw);
    }

    #[test]
    fn test_bird_eye_uses_default_fov() {
        let mut viewer = Viewer::new(&Config::default());
        let mut input = InputState::new();
        input.on_scroll(0.0, 10.0);
        viewer.update(&input, 1.0 / 60.0);
        input.begin_frame();
        let zoomed = viewer.matrices().projection;

        press(&mut viewer, &mut input, KeyCode::KeyB);
        let bird = viewer.matrices().projection;
        assert_ne!(zoomed, bird);
        assert_eq!(
            bird,
            Perspective::from_config(&Config::default()).with_fov(45.0).matrix()
        );
    }
}
