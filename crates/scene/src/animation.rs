//! Per-frame animation state.

use interior_core::Config;

/// Rotation angle of the ceiling fan.
///
/// While spinning, every [`advance`](FanAnimation::advance) adds a fixed
/// step; while stopped, the angle snaps back to exactly zero on the next
/// frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanAnimation {
    angle_degrees: f32,
    step_degrees: f32,
    spinning: bool,
}

impl Default for FanAnimation {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FanAnimation {
    pub fn new(step_degrees: f32) -> Self {
        Self {
            angle_degrees: 0.0,
            step_degrees,
            spinning: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.fan.step_degrees)
    }

    pub fn start(&mut self) {
        if !self.spinning {
            tracing::debug!("Fan started");
        }
        self.spinning = true;
    }

    pub fn stop(&mut self) {
        if self.spinning {
            tracing::debug!("Fan stopped");
        }
        self.spinning = false;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        if self.spinning {
            self.angle_degrees += self.step_degrees;
        } else {
            self.angle_degrees = 0.0;
        }
    }

    /// Accumulated angle since the fan was started.
    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    /// Angle wrapped into [0, 360) for building the rotation matrix.
    pub fn rotation_degrees(&self) -> f32 {
        self.angle_degrees.rem_euclid(360.0)
    }
}
