use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Camera
pub const CAMERA_DISTANCE: f32 = 6.0; // eye sits at (d, d, d) looking at the origin
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Occluder field
pub const OCCLUDER_COUNT: usize = 25;
pub const OCCLUDER_HALF_EXTENT: f32 = 10.0; // x/z drawn from [-h, h)
pub const OCCLUDER_SCALE: [f32; 3] = [1200.0, 5.0, 1.0]; // long, tall-ish, thin unit box
pub const WALL_COLOR: u32 = 0xffffff;

// Markers
pub const MARKER_DISTANCE_SCALE: f32 = 0.05; // marker scale per unit of hit distance

// Shared sphere geometry + material
pub const SPHERE_RADIUS: f32 = 0.5;
pub const SPHERE_SEGMENTS: u32 = 20;
pub const SPHERE_SIZE_MIN: f32 = 0.1;
pub const SPHERE_SIZE_MAX: f32 = 2.0;
pub const DEFAULT_SPHERE_COLOR: u32 = 0x0000ff;
pub const SPHERE_ROUGHNESS: f32 = 0.5;
pub const SPHERE_METALNESS: f32 = 0.5;

// Light rig
pub const POINT_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const POINT_LIGHT_COLOR: u32 = 0xffffff;
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_RANGE: f32 = 100.0;

pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 1.0;

pub const HEMI_SKY_COLOR: u32 = 0xffffff;
pub const HEMI_GROUND_COLOR: u32 = 0x000088;
pub const HEMI_KEY_POSITION: [f32; 3] = [-1.0, 1.5, 1.0];
pub const HEMI_KEY_INTENSITY: f32 = 0.8;
pub const HEMI_FILL_POSITION: [f32; 3] = [1.0, 1.5, 1.0];
pub const HEMI_FILL_INTENSITY: f32 = 0.2;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 90.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Background when no environment is lit
pub const CLEAR_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

#[inline]
pub fn initial_eye() -> Vec3 {
    Vec3::splat(CAMERA_DISTANCE)
}
