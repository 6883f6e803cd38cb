//! Uniform names shared with the shaders, and the uploads that use them.
//!
//! Names are part of the shader contract and must match the GLSL source
//! exactly.

use glam::Vec3;
use interior_core::Result;
use interior_scene::light::{LightColors, LightRegistry, Switchable};
use interior_scene::{DrawItem, Shading};

use crate::backend::RenderBackend;

pub const MODEL: &str = "model";
pub const VIEW: &str = "view";
pub const PROJECTION: &str = "projection";
pub const VIEW_POS: &str = "viewPos";
/// Flat color of the unlit program.
pub const COLOR: &str = "color";

pub const MATERIAL_AMBIENT: &str = "material.ambient";
pub const MATERIAL_DIFFUSE: &str = "material.diffuse";
pub const MATERIAL_SPECULAR: &str = "material.specular";
pub const MATERIAL_EMISSIVE: &str = "material.emissive";
pub const MATERIAL_SHININESS: &str = "material.shininess";

pub const DIRECTIONAL_ON: &str = "directionLightOn";
pub const SPOT_ON: &str = "spotLightOn";

/// Specular exponent used for every material.
pub const SHININESS: f32 = 32.0;

/// Fully qualified name of a field of point light `slot`,
/// e.g. `pointLights[1].diffuse`.
pub fn point_light_field(slot: usize, field: &str) -> String {
    format!("pointLights[{slot}].{field}")
}

fn set_colors(
    backend: &mut dyn RenderBackend,
    name: impl Fn(&str) -> String,
    colors: &LightColors,
) -> Result<()> {
    backend.set_uniform_vec3(&name("ambient"), colors.ambient)?;
    backend.set_uniform_vec3(&name("diffuse"), colors.diffuse)?;
    backend.set_uniform_vec3(&name("specular"), colors.specular)?;
    Ok(())
}

/// Upload every light of the registry to the lighting program.
///
/// Position or direction goes first, then the masked colors. Lights that are
/// off are uploaded with black colors so no stale values survive a toggle.
pub fn upload_lights(backend: &mut dyn RenderBackend, lights: &LightRegistry) -> Result<()> {
    for light in lights.point_lights() {
        let name = |field: &str| point_light_field(light.slot(), field);
        let attenuation = light.attenuation();
        backend.set_uniform_vec3(&name("position"), light.position())?;
        set_colors(backend, name, &light.effective_colors())?;
        backend.set_uniform_float(&name("k_c"), attenuation.constant)?;
        backend.set_uniform_float(&name("k_l"), attenuation.linear)?;
        backend.set_uniform_float(&name("k_q"), attenuation.quadratic)?;
    }

    let directional = &lights.directional;
    backend.set_uniform_vec3("directionalLight.direction", directional.direction())?;
    set_colors(backend, |f| format!("directionalLight.{f}"), &directional.effective_colors())?;
    backend.set_uniform_bool(DIRECTIONAL_ON, directional.is_on())?;

    let spot = &lights.spot;
    let attenuation = spot.attenuation();
    backend.set_uniform_vec3("spotLight.position", spot.position())?;
    backend.set_uniform_vec3("spotLight.direction", spot.direction())?;
    set_colors(backend, |f| format!("spotLight.{f}"), &spot.effective_colors())?;
    backend.set_uniform_float("spotLight.k_c", attenuation.constant)?;
    backend.set_uniform_float("spotLight.k_l", attenuation.linear)?;
    backend.set_uniform_float("spotLight.k_q", attenuation.quadratic)?;
    backend.set_uniform_float("spotLight.cos_theta", spot.cos_cutoff())?;
    backend.set_uniform_bool(SPOT_ON, spot.is_on())?;

    Ok(())
}

/// Upload the material of a lit item: the object color drives all three
/// channels, emissive items also glow in their own color.
pub fn upload_material(backend: &mut dyn RenderBackend, item: &DrawItem) -> Result<()> {
    let emissive = match item.shading {
        Shading::Emissive => item.color,
        Shading::Lit | Shading::Unlit => Vec3::ZERO,
    };
    backend.set_uniform_vec3(MATERIAL_AMBIENT, item.color)?;
    backend.set_uniform_vec3(MATERIAL_DIFFUSE, item.color)?;
    backend.set_uniform_vec3(MATERIAL_SPECULAR, item.color)?;
    backend.set_uniform_vec3(MATERIAL_EMISSIVE, emissive)?;
    backend.set_uniform_float(MATERIAL_SHININESS, SHININESS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ProgramKind;
    use crate::recording::{RecordingBackend, UniformValue};
    use glam::Mat4;
    use interior_scene::light::Channel;
    use interior_scene::Room;

    fn lighting_backend() -> RecordingBackend {
        let mut backend = RecordingBackend::new();
        let program = backend.program(ProgramKind::Lighting).expect("program");
        backend.use_program(program).expect("use");
        backend
    }

    #[test]
    fn test_point_light_field() {
        assert_eq!(point_light_field(1, "k_q"), "pointLights[1].k_q");
    }

    #[test]
    fn test_lights_use_slot_names() {
        let mut backend = lighting_backend();
        upload_lights(&mut backend, &Room::lights()).expect("upload");

        assert_eq!(
            backend.uniform(&point_light_field(0, "position")),
            Some(&UniformValue::Vec3(Vec3::new(2.0, 3.0, 2.0)))
        );
        assert_eq!(
            backend.uniform(&point_light_field(1, "position")),
            Some(&UniformValue::Vec3(Vec3::new(2.0, 3.0, 5.0)))
        );
        assert_eq!(backend.uniform(DIRECTIONAL_ON), Some(&UniformValue::Bool(true)));
        assert!(backend.uniform("spotLight.cos_theta").is_some());
    }

    #[test]
    fn test_masked_channel_uploads_black() {
        let mut lights = Room::lights();
        lights.toggle_point_channel(Channel::Ambient);

        let mut backend = lighting_backend();
        upload_lights(&mut backend, &lights).expect("upload");

        assert_eq!(
            backend.uniform(&point_light_field(0, "ambient")),
            Some(&UniformValue::Vec3(Vec3::ZERO))
        );
        assert_eq!(
            backend.uniform(&point_light_field(0, "diffuse")),
            Some(&UniformValue::Vec3(Vec3::splat(0.8)))
        );
    }

    #[test]
    fn test_position_before_colors() {
        let mut backend = lighting_backend();
        upload_lights(&mut backend, &Room::lights()).expect("upload");

        let names = backend.uniform_names();
        let position = names.iter().position(|n| n == "pointLights[0].position");
        let ambient = names.iter().position(|n| n == "pointLights[0].ambient");
        assert!(position < ambient);
    }

    #[test]
    fn test_emissive_material() {
        let item = DrawItem::new(Mat4::IDENTITY, Vec3::new(0.1, 0.0, 0.0), Shading::Emissive);
        let mut backend = lighting_backend();
        upload_material(&mut backend, &item).expect("upload");

        assert_eq!(
            backend.uniform(MATERIAL_EMISSIVE),
            Some(&UniformValue::Vec3(Vec3::new(0.1, 0.0, 0.0)))
        );
        assert_eq!(backend.uniform(MATERIAL_SHININESS), Some(&UniformValue::Float(32.0)));
    }
}
