//! Environment lighting derived from an equirectangular HDR image.
//!
//! The renderer does not sample the map directly; it uses the solid-angle
//! weighted mean radiance of the upper and lower hemispheres as a two-colour
//! sky/ground light, plus the overall mean as the background.

use crate::error::SceneError;
use std::f32::consts::PI;

#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentLight {
    pub width: u32,
    pub height: u32,
    /// Mean linear radiance over the whole sphere.
    pub average: [f32; 3],
    /// Mean linear radiance over the upper hemisphere.
    pub sky: [f32; 3],
    /// Mean linear radiance over the lower hemisphere.
    pub ground: [f32; 3],
}

impl EnvironmentLight {
    /// Decode a Radiance `.hdr` file.
    pub fn decode_hdr(bytes: &[u8]) -> Result<Self, SceneError> {
        let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Hdr)?.to_rgb32f();
        Self::from_rgb32f(img.width(), img.height(), img.as_raw())
    }

    /// Build from tightly packed linear RGB floats, row-major, top row first.
    pub fn from_rgb32f(width: u32, height: u32, pixels: &[f32]) -> Result<Self, SceneError> {
        let (w, h) = (width as usize, height as usize);
        if w == 0 || h == 0 || pixels.len() < w * h * 3 {
            return Err(SceneError::EmptyEnvironment);
        }
        let mut all = [0.0f64; 3];
        let mut sky = [0.0f64; 3];
        let mut ground = [0.0f64; 3];
        let (mut w_all, mut w_sky, mut w_ground) = (0.0f64, 0.0f64, 0.0f64);

        for y in 0..h {
            let v = (y as f32 + 0.5) / h as f32;
            let latitude = (0.5 - v) * PI;
            let weight = latitude.cos().max(0.0) as f64;
            let row = &pixels[y * w * 3..(y + 1) * w * 3];
            let mut sum = [0.0f64; 3];
            for px in row.chunks_exact(3) {
                for c in 0..3 {
                    let s = px[c];
                    if s.is_finite() && s > 0.0 {
                        sum[c] += s as f64;
                    }
                }
            }
            let (bucket, bucket_w) = if latitude >= 0.0 {
                (&mut sky, &mut w_sky)
            } else {
                (&mut ground, &mut w_ground)
            };
            for c in 0..3 {
                let mean = sum[c] / w as f64;
                all[c] += mean * weight;
                bucket[c] += mean * weight;
            }
            w_all += weight;
            *bucket_w += weight;
        }

        let norm = |acc: [f64; 3], wt: f64| -> [f32; 3] {
            if wt > 0.0 {
                acc.map(|c| (c / wt) as f32)
            } else {
                [0.0; 3]
            }
        };
        let average = norm(all, w_all);
        Ok(Self {
            width,
            height,
            average,
            // a one-row map has no lower hemisphere; treat it as uniform
            sky: if w_sky > 0.0 { norm(sky, w_sky) } else { average },
            ground: if w_ground > 0.0 { norm(ground, w_ground) } else { average },
        })
    }

    /// Background colour for display: Reinhard-mapped mean radiance.
    pub fn background(&self) -> [f32; 3] {
        self.average.map(|c| c / (1.0 + c))
    }
}

/// Completion of the asynchronous environment load.
#[derive(Clone, Debug)]
pub enum EnvironmentEvent {
    Loaded(EnvironmentLight),
    Failed(String),
}

impl From<Result<EnvironmentLight, SceneError>> for EnvironmentEvent {
    fn from(res: Result<EnvironmentLight, SceneError>) -> Self {
        match res {
            Ok(env) => Self::Loaded(env),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// How the shared material is currently lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightingMode {
    /// Plain variant: direct lights plus ambient.
    DefaultLit,
    /// Environment requested, not yet delivered. Renders as `DefaultLit`.
    AwaitingEnvironment,
    EnvironmentLit,
    /// Environment failed to load; flat background and direct lights only.
    Fallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_and_ground_split_by_row() {
        // 2x2: top row bright white, bottom row dark blue
        let pixels = [
            2.0, 2.0, 2.0, 2.0, 2.0, 2.0, //
            0.0, 0.0, 0.5, 0.0, 0.0, 0.5,
        ];
        let env = EnvironmentLight::from_rgb32f(2, 2, &pixels).unwrap();
        assert_eq!(env.sky, [2.0, 2.0, 2.0]);
        assert_eq!(env.ground, [0.0, 0.0, 0.5]);
        assert!((env.average[0] - 1.0).abs() < 1e-5);
        assert!((env.average[2] - 1.25).abs() < 1e-5);
    }

    #[test]
    fn empty_or_short_buffers_are_rejected() {
        assert!(matches!(
            EnvironmentLight::from_rgb32f(0, 4, &[]),
            Err(SceneError::EmptyEnvironment)
        ));
        assert!(matches!(
            EnvironmentLight::from_rgb32f(2, 2, &[1.0; 6]),
            Err(SceneError::EmptyEnvironment)
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let res = EnvironmentLight::decode_hdr(b"definitely not radiance");
        assert!(matches!(res, Err(SceneError::EnvironmentDecode(_))));
        let ev = EnvironmentEvent::from(res);
        assert!(matches!(ev, EnvironmentEvent::Failed(_)));
    }

    #[test]
    fn background_is_tone_mapped_below_one() {
        let env = EnvironmentLight::from_rgb32f(1, 2, &[9.0, 9.0, 9.0, 1.0, 1.0, 1.0]).unwrap();
        assert!(env.background().iter().all(|c| *c < 1.0 && *c > 0.0));
    }
}
