use crate::constants::{
    DEFAULT_SPHERE_COLOR, SPHERE_METALNESS, SPHERE_RADIUS, SPHERE_ROUGHNESS, SPHERE_SIZE_MAX,
    SPHERE_SIZE_MIN,
};
use crate::environment::EnvironmentLight;

/// Values bound to the control panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    /// Radius of the shared sphere geometry.
    pub sphere_size: f32,
    /// 0xRRGGBB.
    pub sphere_color: u32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            sphere_size: SPHERE_RADIUS,
            sphere_color: DEFAULT_SPHERE_COLOR,
        }
    }
}

impl SceneParams {
    #[inline]
    pub fn clamp_size(size: f32) -> f32 {
        if size.is_finite() {
            size.clamp(SPHERE_SIZE_MIN, SPHERE_SIZE_MAX)
        } else {
            SPHERE_RADIUS
        }
    }
}

/// The one material instance every sphere renders with.
#[derive(Clone, Debug)]
pub struct SphereMaterial {
    pub color: u32,
    pub roughness: f32,
    pub metalness: f32,
    pub environment: Option<EnvironmentLight>,
}

impl Default for SphereMaterial {
    fn default() -> Self {
        Self {
            color: DEFAULT_SPHERE_COLOR,
            roughness: SPHERE_ROUGHNESS,
            metalness: SPHERE_METALNESS,
            environment: None,
        }
    }
}

impl SphereMaterial {
    pub fn base_color_linear(&self) -> [f32; 3] {
        hex_to_linear(self.color)
    }
}

/// 0xRRGGBB to sRGB components in [0, 1].
#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_rgb(hex).map(srgb_to_linear)
}

/// Parse `#rrggbb` (or `rrggbb`) as produced by `<input type="color">`.
pub fn parse_hex_color(s: &str) -> Option<u32> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[inline]
pub fn format_hex_color(hex: u32) -> String {
    format!("#{:06x}", hex & 0x00ff_ffff)
}
