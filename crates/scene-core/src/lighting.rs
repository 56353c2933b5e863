use crate::constants::*;
use crate::material::hex_to_linear;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

/// Sky/ground gradient light; `direction` points towards the sky colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HemisphereLight {
    pub direction: Vec3,
    pub sky: [f32; 3],
    pub ground: [f32; 3],
    pub intensity: f32,
}

impl HemisphereLight {
    fn at(position: [f32; 3], intensity: f32) -> Self {
        Self {
            direction: Vec3::from(position).normalize(),
            sky: hex_to_linear(HEMI_SKY_COLOR),
            ground: hex_to_linear(HEMI_GROUND_COLOR),
            intensity,
        }
    }
}

/// Fixed light rig: one point light, flat ambient, key and fill hemispheres.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub point: PointLight,
    pub ambient: [f32; 3],
    pub hemispheres: [HemisphereLight; 2],
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            point: PointLight {
                position: Vec3::from(POINT_LIGHT_POSITION),
                color: hex_to_linear(POINT_LIGHT_COLOR),
                intensity: POINT_LIGHT_INTENSITY,
                range: POINT_LIGHT_RANGE,
            },
            ambient: hex_to_linear(AMBIENT_COLOR).map(|c| c * AMBIENT_INTENSITY),
            hemispheres: [
                HemisphereLight::at(HEMI_KEY_POSITION, HEMI_KEY_INTENSITY),
                HemisphereLight::at(HEMI_FILL_POSITION, HEMI_FILL_INTENSITY),
            ],
        }
    }
}
