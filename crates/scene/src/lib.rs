//! Scene state for the interior viewer.
//!
//! This crate provides everything that turns input into matrices:
//! - Placement composition and pivot rotation
//! - Free and scripted cameras behind one view capability
//! - Perspective projection
//! - Lights with per-channel masks
//! - Fan animation and the authored room

pub mod animation;
pub mod camera;
pub mod draw;
pub mod fan;
pub mod light;
pub mod projection;
pub mod room;
pub mod transform;

pub use animation::FanAnimation;
pub use camera::{
    ActiveCamera, CameraMode, CameraMovement, CameraRig, Dolly, FreeCamera, ScriptedCamera,
    ViewSource,
};
pub use draw::{DrawItem, Shading};
pub use fan::Fan;
pub use light::{
    Attenuation, Channel, ChannelMask, DirectionalLight, LightColors, LightRegistry, PointLight,
    SpotLight, Switchable,
};
pub use projection::Perspective;
pub use room::Room;
pub use transform::{compose, rotate_around_pivot, Placement};
