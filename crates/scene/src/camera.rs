//! Camera systems for viewing the room.
//!
//! Two camera models produce the view matrix:
//! - [`FreeCamera`]: a free-look camera driven by Euler yaw/pitch/roll,
//!   mouse look, scroll zoom and keyboard movement
//! - [`ScriptedCamera`]: the bird's-eye camera, a fixed eye/target pair
//!   that dollies along z between authored bounds
//!
//! [`CameraRig`] owns both and selects one per frame. The inactive camera keeps
//! its state across mode switches.

use glam::{Mat4, Quat, Vec3};
use interior_core::Config;

/// Pitch limit in degrees for constrained mouse look.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view reachable by scrolling, in degrees.
pub const MIN_ZOOM: f32 = 1.0;
/// Widest field of view reachable by scrolling, in degrees.
pub const MAX_ZOOM: f32 = 45.0;

/// Anything that can produce a view matrix for the frame.
pub trait ViewSource {
    /// World-to-eye transform. Recomputed on every call.
    fn view_matrix(&self) -> Mat4;

    /// Eye position in world space (the shader's `viewPos`).
    fn eye_position(&self) -> Vec3;
}

/// Discrete keyboard actions for the free camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

/// Free-look camera with Euler-angle orientation.
#[derive(Clone, Debug)]
pub struct FreeCamera {
    eye: Vec3,
    look_at: Vec3,
    world_up: Vec3,

    front: Vec3,
    right: Vec3,
    up: Vec3,

    yaw: f32,
    pitch: f32,
    roll: f32,
    zoom: f32,

    /// Degrees of yaw/pitch per unit of mouse motion
    pub mouse_sensitivity: f32,
    /// World units per second for keyboard movement
    pub movement_speed: f32,
    /// Degrees per second for keyboard pitch/yaw/roll nudges
    pub turn_speed: f32,

    orbit_angle: f32,
    orbit_radius: f32,
    orbit_step: f32,
}

impl FreeCamera {
    /// Create a camera at `eye` looking at `look_at`.
    ///
    /// Yaw and pitch are derived from the initial look direction, so the first
    /// view matrix looks straight at `look_at`.
    pub fn new(eye: Vec3, look_at: Vec3, world_up: Vec3) -> Self {
        let mut camera = Self {
            eye,
            look_at,
            world_up,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: world_up,
            yaw: -90.0,
            pitch: 0.0,
            roll: 0.0,
            zoom: MAX_ZOOM,
            mouse_sensitivity: 0.1,
            movement_speed: 2.5,
            turn_speed: 45.0,
            orbit_angle: 0.0,
            orbit_radius: 2.0,
            orbit_step: 0.01,
        };
        camera.aim_at(look_at);
        camera
    }

    /// Create the camera described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        let c = &config.camera;
        let mut camera = Self::new(c.eye, c.look_at, Vec3::Y);
        camera.mouse_sensitivity = c.mouse_sensitivity;
        camera.movement_speed = c.movement_speed;
        camera.turn_speed = c.turn_speed;
        camera.zoom = c.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        camera.orbit_radius = c.orbit_radius;
        camera.orbit_step = c.orbit_step;
        camera
    }

    /// Apply a mouse motion delta.
    ///
    /// With `constrain_pitch` the pitch is clamped to ±[`PITCH_LIMIT`] so the
    /// view never flips over the poles.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    /// Apply a vertical scroll delta to the zoom (field of view).
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Apply one keyboard action for `delta_time` seconds.
    pub fn process_keyboard(&mut self, movement: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let turn = self.turn_speed * delta_time;

        match movement {
            CameraMovement::Forward => self.eye += self.front * velocity,
            CameraMovement::Backward => self.eye -= self.front * velocity,
            CameraMovement::Left => self.eye -= self.right * velocity,
            CameraMovement::Right => self.eye += self.right * velocity,
            CameraMovement::Up => self.eye += self.up * velocity,
            CameraMovement::Down => self.eye -= self.up * velocity,
            CameraMovement::PitchUp => {
                self.pitch = (self.pitch + turn).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
            CameraMovement::PitchDown => {
                self.pitch = (self.pitch - turn).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
            CameraMovement::YawLeft => self.yaw -= turn,
            CameraMovement::YawRight => self.yaw += turn,
            CameraMovement::RollLeft => self.roll -= turn,
            CameraMovement::RollRight => self.roll += turn,
        }
        self.update_vectors();
    }

    /// Step the eye around the configured look-at point.
    ///
    /// The eye moves on a horizontal circle of the orbit radius at the look-at
    /// height and is re-aimed at the look-at point.
    pub fn orbit(&mut self) {
        self.orbit_angle += self.orbit_step;
        let (sin, cos) = self.orbit_angle.sin_cos();
        self.eye = self.look_at + Vec3::new(sin, 0.0, cos) * self.orbit_radius;
        self.aim_at(self.look_at);
    }

    /// Turn the camera to face `target`, keeping the eye in place.
    pub fn aim_at(&mut self, target: Vec3) {
        if let Some(forward) = (target - self.eye).try_normalize() {
            self.yaw = forward.z.atan2(forward.x).to_degrees();
            self.pitch = forward
                .y
                .clamp(-1.0, 1.0)
                .asin()
                .to_degrees()
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    /// Recompute the basis from yaw/pitch/roll.
    fn update_vectors(&mut self) {
        self.yaw = wrap_degrees(self.yaw);

        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        // Looking straight up or down leaves the right vector undefined; keep
        // the previous one.
        let right = self.front.cross(self.world_up).try_normalize().unwrap_or(self.right);
        let up = right.cross(self.front).normalize();

        let roll = Quat::from_axis_angle(self.front, self.roll.to_radians());
        self.right = roll * right;
        self.up = roll * up;
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Point the orbit nudge circles around.
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Unit forward vector.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees, wrapped into [-180, 180).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Roll in degrees.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Field of view in degrees, within [[`MIN_ZOOM`], [`MAX_ZOOM`]].
    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

impl ViewSource for FreeCamera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + self.front, self.up)
    }

    fn eye_position(&self) -> Vec3 {
        self.eye
    }
}

/// Direction of a bird's-eye dolly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dolly {
    /// Toward -z
    Forward,
    /// Toward +z
    Backward,
}

/// Bird's-eye camera: an eye/target pair that dollies along z.
#[derive(Clone, Debug)]
pub struct ScriptedCamera {
    position: Vec3,
    target: Vec3,
    /// World units per second along z
    pub speed: f32,
    position_z_bounds: (f32, f32),
    target_z_bounds: (f32, f32),
}

impl ScriptedCamera {
    /// Create a bird's-eye camera.
    ///
    /// Bounds are inclusive `(min, max)` ranges on z for the eye and the
    /// target respectively.
    pub fn new(
        position: Vec3,
        target: Vec3,
        speed: f32,
        position_z_bounds: (f32, f32),
        target_z_bounds: (f32, f32),
    ) -> Self {
        Self {
            position,
            target,
            speed,
            position_z_bounds,
            target_z_bounds,
        }
    }

    /// Create the camera described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        let b = &config.bird_eye;
        let [pos_min, pos_max] = b.position_z_bounds;
        let [target_min, target_max] = b.target_z_bounds;
        Self::new(
            b.position,
            b.target,
            b.speed,
            (pos_min, pos_max),
            (target_min, target_max),
        )
    }

    /// Move eye and target by the same z delta, each clamped to its own bounds.
    pub fn dolly(&mut self, direction: Dolly, delta_time: f32) {
        let step = self.speed * delta_time;
        let delta = match direction {
            Dolly::Forward => -step,
            Dolly::Backward => step,
        };

        let (min, max) = self.position_z_bounds;
        self.position.z = (self.position.z + delta).clamp(min, max);
        let (min, max) = self.target_z_bounds;
        self.target.z = (self.target.z + delta).clamp(min, max);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}

impl ViewSource for ScriptedCamera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    fn eye_position(&self) -> Vec3 {
        self.position
    }
}

/// Which camera produces the frame's view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Free,
    BirdEye,
}

/// The camera selected for the current frame.
#[derive(Clone, Copy, Debug)]
pub enum ActiveCamera<'a> {
    Free(&'a FreeCamera),
    BirdEye(&'a ScriptedCamera),
}

impl ViewSource for ActiveCamera<'_> {
    fn view_matrix(&self) -> Mat4 {
        match self {
            ActiveCamera::Free(camera) => camera.view_matrix(),
            ActiveCamera::BirdEye(camera) => camera.view_matrix(),
        }
    }

    fn eye_position(&self) -> Vec3 {
        match self {
            ActiveCamera::Free(camera) => camera.eye_position(),
            ActiveCamera::BirdEye(camera) => camera.eye_position(),
        }
    }
}

/// Owns both cameras and the mode that selects between them.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub free: FreeCamera,
    pub bird_eye: ScriptedCamera,
    mode: CameraMode,
    default_fov: f32,
}

impl CameraRig {
    pub fn new(free: FreeCamera, bird_eye: ScriptedCamera) -> Self {
        let default_fov = free.zoom();
        Self {
            free,
            bird_eye,
            mode: CameraMode::Free,
            default_fov,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            FreeCamera::from_config(config),
            ScriptedCamera::from_config(config),
        )
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            tracing::debug!("Camera mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Switch between the free and bird's-eye cameras.
    pub fn toggle_mode(&mut self) -> CameraMode {
        let next = match self.mode {
            CameraMode::Free => CameraMode::BirdEye,
            CameraMode::BirdEye => CameraMode::Free,
        };
        self.set_mode(next);
        next
    }

    pub fn active(&self) -> ActiveCamera<'_> {
        match self.mode {
            CameraMode::Free => ActiveCamera::Free(&self.free),
            CameraMode::BirdEye => ActiveCamera::BirdEye(&self.bird_eye),
        }
    }

    /// Vertical field of view in degrees for the active camera.
    ///
    /// The free camera's zoom drives the field of view; the bird's-eye view
    /// keeps the initial zoom.
    pub fn fov_degrees(&self) -> f32 {
        match self.mode {
            CameraMode::Free => self.free.zoom(),
            CameraMode::BirdEye => self.default_fov,
        }
    }
}

impl ViewSource for CameraRig {
    fn view_matrix(&self) -> Mat4 {
        self.active().view_matrix()
    }

    fn eye_position(&self) -> Vec3 {
        self.active().eye_position()
    }
}

/// Wrap an angle in degrees into [-180, 180).
fn wrap_degrees(angle: f32) -> f32 {
    if angle.is_finite() {
        (angle + 180.0).rem_euclid(360.0) - 180.0
    } else {
        angle
    }
}
