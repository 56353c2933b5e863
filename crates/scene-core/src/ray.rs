use glam::{Vec2, Vec3};

/// World-space ray. `direction` is unit length unless the ray is degenerate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }
}

/// One ray/occluder intersection. `index` refers into the occluder field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub index: usize,
    pub distance: f32,
    pub point: Vec3,
}

/// Map a pointer position in viewport pixels to normalized device coordinates.
///
/// X grows to the right and Y grows upward, so the vertical axis is flipped
/// relative to pixel space. Positions outside the viewport are not clamped;
/// they extrapolate linearly past [-1, 1].
#[inline]
pub fn pointer_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    let w = if width > 0.0 { width } else { 1.0 };
    let h = if height > 0.0 { height } else { 1.0 };
    Vec2::new(-1.0 + 2.0 * px / w, 1.0 - 2.0 * py / h)
}

/// Slab test against the axis-aligned unit box centred at the origin.
///
/// Returns the entry and exit ray parameters. `origin`/`dir` need not be
/// normalized; the parameters are in the units of `dir`.
pub fn ray_unit_box(origin: Vec3, dir: Vec3) -> Option<(f32, f32)> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < f32::EPSILON {
            if !(-0.5..=0.5).contains(&o) {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (-0.5 - o) * inv;
        let mut t1 = (0.5 - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some((t_min, t_max))
}
