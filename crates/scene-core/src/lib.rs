pub mod camera;
pub mod constants;
pub mod environment;
pub mod error;
pub mod gpu;
pub mod input;
pub mod lighting;
pub mod material;
pub mod occluder;
pub mod orbit;
pub mod ray;
pub mod render;
pub mod scene;
pub mod spawner;
pub mod viewport;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::{Camera, CameraPose};
pub use environment::{EnvironmentEvent, EnvironmentLight, LightingMode};
pub use error::SceneError;
pub use input::{key_action, KeyAction, PointerButton};
pub use material::{format_hex_color, parse_hex_color, SceneParams, SphereMaterial};
pub use occluder::{Occluder, OccluderField};
pub use orbit::{MouseBindings, OrbitAction, OrbitControls};
pub use ray::{pointer_to_ndc, Ray, RayHit};
pub use render::Renderer;
pub use scene::{SceneConfig, SceneController, SceneVariant, WALL_REVEAL_OPACITY};
pub use spawner::{DragSession, Marker, Spawner};
pub use viewport::Viewport;
