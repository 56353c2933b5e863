//! Invisible wall field used as the only raycast target for spawning.

use crate::constants::{OCCLUDER_COUNT, OCCLUDER_HALF_EXTENT, OCCLUDER_SCALE};
use crate::ray::{ray_unit_box, Ray, RayHit};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// A unit box stretched by `scale`, rotated about +Y and placed at `position`.
///
/// Opacity only affects drawing; intersection tests ignore it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Occluder {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: Vec3,
    pub opacity: f32,
}

impl Occluder {
    pub fn new(position: Vec3, yaw: f32, scale: Vec3) -> Self {
        Self {
            position,
            yaw,
            scale,
            opacity: 0.0,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, Quat::from_rotation_y(self.yaw), self.position)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Distance along `ray` to the first front-facing surface, if any.
    ///
    /// The ray is carried into box space by the inverse model transform. That
    /// map is affine, so the box-space parameter equals the world-space one.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.is_degenerate() {
            return None;
        }
        let inv = self.model_matrix().inverse();
        let origin = inv.transform_point3(ray.origin);
        let dir = inv.transform_vector3(ray.direction);
        let (t_near, t_far) = ray_unit_box(origin, dir)?;
        // an origin inside the box only sees back faces
        (t_near >= 0.0 && t_near <= t_far).then_some(t_near)
    }
}

/// Fixed set of occluders generated once at startup.
#[derive(Clone, Debug, Default)]
pub struct OccluderField {
    occluders: Vec<Occluder>,
}

impl OccluderField {
    /// Scatter `count` walls: x/z uniform in [-10, 10), yaw uniform in
    /// [0, 2π), resting on y = 0, fully transparent.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let scale = Vec3::from(OCCLUDER_SCALE);
        let h = OCCLUDER_HALF_EXTENT;
        let occluders = (0..count)
            .map(|_| {
                let yaw = rng.gen_range(0.0..TAU);
                let x = rng.gen_range(-h..h);
                let z = rng.gen_range(-h..h);
                Occluder::new(Vec3::new(x, 0.0, z), yaw, scale)
            })
            .collect();
        Self { occluders }
    }

    pub fn generate_default<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate(rng, OCCLUDER_COUNT)
    }

    pub fn from_occluders(occluders: Vec<Occluder>) -> Self {
        Self { occluders }
    }

    pub fn len(&self) -> usize {
        self.occluders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occluders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Occluder> {
        self.occluders.iter()
    }

    pub fn as_slice(&self) -> &[Occluder] {
        &self.occluders
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        let o = opacity.clamp(0.0, 1.0);
        for occ in &mut self.occluders {
            occ.opacity = o;
        }
    }

    pub fn hide_all(&mut self) {
        self.set_opacity(0.0);
    }

    pub fn any_visible(&self) -> bool {
        self.occluders.iter().any(Occluder::is_visible)
    }

    /// All hits along `ray`, nearest first.
    pub fn intersect(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = self
            .occluders
            .iter()
            .enumerate()
            .filter_map(|(index, occ)| {
                occ.intersect(ray).map(|distance| RayHit {
                    index,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Nearest hit along `ray`, if any.
    pub fn nearest(&self, ray: &Ray) -> Option<RayHit> {
        let mut best = None::<RayHit>;
        for (index, occ) in self.occluders.iter().enumerate() {
            if let Some(distance) = occ.intersect(ray) {
                match best {
                    Some(b) if distance >= b.distance => {}
                    _ => {
                        best = Some(RayHit {
                            index,
                            distance,
                            point: ray.at(distance),
                        })
                    }
                }
            }
        }
        best
    }
}
