//! Viewer configuration.
//!
//! Every field has a default taken from the authored scene, so a config file
//! only needs to name the values it overrides:
//!
//! ```json
//! { "camera": { "movement_speed": 4.0 }, "fan": { "step_degrees": 2.0 } }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable consulted when no config path is given on the command line.
pub const CONFIG_ENV_VAR: &str = "INTERIOR_CONFIG";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub bird_eye: BirdEyeConfig,
    pub projection: ProjectionConfig,
    pub fan: FanConfig,
}

/// Window and viewport settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Aspect ratio the viewport is letterboxed to.
    pub aspect: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Interior".to_string(),
            aspect: 4.0 / 3.0,
        }
    }
}

/// Free-look camera settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub look_at: Vec3,
    /// World units per second.
    pub movement_speed: f32,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    pub zoom: f32,
    /// Degrees per second for keyboard pitch/yaw/roll nudges.
    pub turn_speed: f32,
    pub orbit_radius: f32,
    /// Radians added to the orbit angle per orbit step.
    pub orbit_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(1.5, 3.8, 10.0),
            look_at: Vec3::new(4.0, 4.0, 6.0),
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom: 45.0,
            turn_speed: 45.0,
            orbit_radius: 2.0,
            orbit_step: 0.01,
        }
    }
}

/// Bird's-eye camera settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdEyeConfig {
    pub position: Vec3,
    pub target: Vec3,
    /// World units per second along z.
    pub speed: f32,
    /// Inclusive `[min, max]` z range for the eye.
    pub position_z_bounds: [f32; 2],
    /// Inclusive `[min, max]` z range for the target.
    pub target_z_bounds: [f32; 2],
}

impl Default for BirdEyeConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.0, 2.5, 3.0),
            target: Vec3::new(1.0, 0.0, 0.0),
            speed: 1.0,
            position_z_bounds: [2.0, 13.5],
            target_z_bounds: [-4.0, 7.5],
        }
    }
}

/// Clip plane settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Ceiling fan settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    /// Degrees the blades advance per frame while spinning.
    pub step_degrees: f32,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self { step_degrees: 1.0 }
    }
}

impl Config {
    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, else from [`CONFIG_ENV_VAR`], else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the scene cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !(self.window.aspect > 0.0) {
            return Err(Error::Config(format!(
                "window aspect must be positive, got {}",
                self.window.aspect
            )));
        }
        let ProjectionConfig { near, far } = self.projection;
        if !(near > 0.0) || !(far > near) {
            return Err(Error::Config(format!(
                "clip planes must satisfy 0 < near < far, got near={near} far={far}"
            )));
        }
        if !(1.0..=45.0).contains(&self.camera.zoom) {
            return Err(Error::Config(format!(
                "camera zoom must lie in [1, 45], got {}",
                self.camera.zoom
            )));
        }
        for (name, [min, max]) in [
            ("position_z_bounds", self.bird_eye.position_z_bounds),
            ("target_z_bounds", self.bird_eye.target_z_bounds),
        ] {
            if min > max {
                return Err(Error::Config(format!(
                    "bird_eye.{name} is inverted: [{min}, {max}]"
                )));
            }
        }
        for (name, value) in [
            ("fan.step_degrees", self.fan.step_degrees),
            ("bird_eye.speed", self.bird_eye.speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
