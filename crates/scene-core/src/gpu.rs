//! GPU-facing data: uniform/instance layouts, shared meshes, and packing of
//! scene state into them. Pure CPU code so it can be tested on the host.

use crate::constants::{SPHERE_SEGMENTS, WALL_COLOR};
use crate::environment::LightingMode;
use crate::material::hex_to_linear;
use crate::scene::SceneController;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    pub pos: [f32; 3],
    pub radius: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WallInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Per-frame uniforms. Every member is a vec4 or mat4 so the WGSL layout
/// matches without manual padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    /// xyz position, w range.
    pub point_pos: [f32; 4],
    /// rgb premultiplied by intensity.
    pub point_color: [f32; 4],
    pub ambient: [f32; 4],
    pub hemi_dir: [[f32; 4]; 2],
    pub hemi_sky: [[f32; 4]; 2],
    pub hemi_ground: [[f32; 4]; 2],
    /// rgb base colour, w roughness.
    pub base_color: [f32; 4],
    /// x metalness, y environment strength.
    pub surface: [f32; 4],
    pub env_sky: [f32; 4],
    pub env_ground: [f32; 4],
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Unit-radius UV sphere with the same topology as the shared sphere geometry.
pub fn sphere_mesh(width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let p = [
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            ];
            vertices.push(Vertex {
                position: p,
                normal: p,
            });
        }
    }
    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = (iy * row + ix + 1) as u16;
            let b = (iy * row + ix) as u16;
            let c = ((iy + 1) * row + ix) as u16;
            let d = ((iy + 1) * row + ix + 1) as u16;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { vertices, indices }
}

pub fn default_sphere_mesh() -> MeshData {
    sphere_mesh(SPHERE_SEGMENTS, SPHERE_SEGMENTS)
}

/// Axis-aligned unit cube centred at the origin, flat normals per face.
pub fn box_mesh() -> MeshData {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let base = vertices.len() as u16;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let p = [
                n[0] * 0.5 + u[0] * su + v[0] * sv,
                n[1] * 0.5 + u[1] * su + v[1] * sv,
                n[2] * 0.5 + u[2] * su + v[2] * sv,
            ];
            vertices.push(Vertex {
                position: p,
                normal: n,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}

#[inline]
fn v4(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}

pub fn globals_for(scene: &SceneController) -> Globals {
    let cam = scene.camera();
    let lights = scene.lights();
    let material = scene.material();
    let [h0, h1] = lights.hemispheres;
    let (env_strength, env_sky, env_ground) = match (scene.lighting(), &material.environment) {
        (LightingMode::EnvironmentLit, Some(env)) => (1.0, env.sky, env.ground),
        _ => (0.0, [0.0; 3], [0.0; 3]),
    };
    Globals {
        view_proj: cam.view_proj().to_cols_array_2d(),
        eye: cam.eye.extend(1.0).to_array(),
        point_pos: lights.point.position.extend(lights.point.range).to_array(),
        point_color: v4(lights.point.color.map(|c| c * lights.point.intensity), 0.0),
        ambient: v4(lights.ambient, 0.0),
        hemi_dir: [h0.direction.extend(0.0).to_array(), h1.direction.extend(0.0).to_array()],
        hemi_sky: [
            v4(h0.sky.map(|c| c * h0.intensity), 0.0),
            v4(h1.sky.map(|c| c * h1.intensity), 0.0),
        ],
        hemi_ground: [
            v4(h0.ground.map(|c| c * h0.intensity), 0.0),
            v4(h1.ground.map(|c| c * h1.intensity), 0.0),
        ],
        base_color: v4(material.base_color_linear(), material.roughness),
        surface: [material.metalness, env_strength, 0.0, 0.0],
        env_sky: v4(env_sky, 0.0),
        env_ground: v4(env_ground, 0.0),
    }
}

/// Centre sphere plus markers. Radius = shared size × per-instance scale.
pub fn sphere_instances(scene: &SceneController) -> Vec<SphereInstance> {
    let size = scene.params().sphere_size;
    scene
        .spheres()
        .map(|(pos, scale)| SphereInstance {
            pos: pos.to_array(),
            radius: size * scale,
        })
        .collect()
}

/// Walls with non-zero opacity; fully transparent walls are not drawn.
pub fn wall_instances(scene: &SceneController) -> Vec<WallInstance> {
    let color = hex_to_linear(WALL_COLOR);
    scene
        .occluders()
        .iter()
        .filter(|o| o.is_visible())
        .map(|o| WallInstance {
            model: o.model_matrix().to_cols_array_2d(),
            color: v4(color, o.opacity),
        })
        .collect()
}
