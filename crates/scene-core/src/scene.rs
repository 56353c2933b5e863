//! Explicit application state for the sphere painter.
//!
//! `SceneController` owns everything the event handlers and the frame loop
//! touch: camera, orbit controls, occluders, markers, the shared material and
//! the viewport. Frontends hold exactly one and route every platform event
//! into it; nothing here knows about the DOM or winit.

use crate::camera::{Camera, CameraPose};
use crate::constants::{CLEAR_COLOR, MARKER_DISTANCE_SCALE, OCCLUDER_COUNT};
use crate::environment::{EnvironmentEvent, LightingMode};
use crate::input::PointerButton;
use crate::lighting::LightRig;
use crate::material::{SceneParams, SphereMaterial};
use crate::occluder::OccluderField;
use crate::orbit::OrbitControls;
use crate::spawner::{DragSession, Marker, Spawner};
use crate::viewport::Viewport;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Opacity used when the walls are revealed for debugging.
pub const WALL_REVEAL_OPACITY: f32 = 0.25;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneVariant {
    /// Direct lights and ambient only.
    Plain,
    /// Light the shared material from an HDR environment map at `source`.
    EnvironmentMapped { source: String },
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub variant: SceneVariant,
    pub occluder_count: usize,
    pub marker_distance_scale: f32,
    pub initial_pose: CameraPose,
    pub orbit_damping: Option<f32>,
    /// Fixed seed for the occluder layout; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: SceneVariant::Plain,
            occluder_count: OCCLUDER_COUNT,
            marker_distance_scale: MARKER_DISTANCE_SCALE,
            initial_pose: CameraPose::initial(),
            orbit_damping: None,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub struct SceneController {
    config: SceneConfig,
    camera: Camera,
    controls: OrbitControls,
    occluders: OccluderField,
    markers: Vec<Marker>,
    spawner: Spawner,
    viewport: Viewport,
    params: SceneParams,
    material: SphereMaterial,
    lights: LightRig,
    lighting: LightingMode,
    pending_resize: Option<(u32, u32)>,
}

impl SceneController {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Self {
        let mut rng = config.rng();
        let occluders = OccluderField::generate(&mut rng, config.occluder_count);
        Self::with_occluders(config, viewport, occluders)
    }

    pub fn with_occluders(config: SceneConfig, viewport: Viewport, occluders: OccluderField) -> Self {
        let camera = Camera::new(config.initial_pose, viewport.aspect());
        let controls = OrbitControls::new(config.initial_pose).with_damping(config.orbit_damping);
        let lighting = match config.variant {
            SceneVariant::Plain => LightingMode::DefaultLit,
            SceneVariant::EnvironmentMapped { .. } => LightingMode::AwaitingEnvironment,
        };
        log::info!(
            "[scene] occluders={} variant={:?} viewport={}x{}@{}",
            occluders.len(),
            config.variant,
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
        Self {
            spawner: Spawner::new(config.marker_distance_scale),
            pending_resize: Some(viewport.physical_size()),
            config,
            camera,
            controls,
            occluders,
            markers: Vec::new(),
            viewport,
            params: SceneParams::default(),
            material: SphereMaterial::default(),
            lights: LightRig::default(),
            lighting,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn occluders(&self) -> &OccluderField {
        &self.occluders
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> SceneParams {
        self.params
    }

    pub fn material(&self) -> &SphereMaterial {
        &self.material
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn lighting(&self) -> LightingMode {
        self.lighting
    }

    pub fn drag_session(&self) -> DragSession {
        self.spawner.session()
    }

    /// Where the environment map should be fetched from, if this variant wants one.
    pub fn environment_source(&self) -> Option<&str> {
        match &self.config.variant {
            SceneVariant::EnvironmentMapped { source } => Some(source.as_str()),
            SceneVariant::Plain => None,
        }
    }

    // ---------------- Pointer ----------------

    /// Primary starts a spawn drag; bound orbit buttons start a gesture.
    /// Returns whether the press was consumed.
    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) -> bool {
        if self.spawner.press(button) {
            log::debug!("[spawn] drag start at ({:.1},{:.1})", x, y);
            return true;
        }
        self.controls.pointer_down(button, Vec2::new(x, y))
    }

    /// Route motion to the orbit gesture and, while dragging, spawn at the
    /// nearest wall hit. Returns the spawned marker, if any.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<Marker> {
        self.controls
            .pointer_move(&mut self.camera, Vec2::new(x, y), self.viewport.height);
        let marker = self
            .spawner
            .motion(&self.camera, &self.viewport, &self.occluders, x, y)?;
        self.markers.push(marker);
        log::debug!(
            "[spawn] marker #{} at ({:.2},{:.2},{:.2}) scale={:.3}",
            self.markers.len(),
            marker.position.x,
            marker.position.y,
            marker.position.z,
            marker.scale
        );
        Some(marker)
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if self.spawner.is_dragging() {
            log::debug!("[spawn] drag end, markers={}", self.markers.len());
        }
        self.spawner.release();
        self.controls.pointer_up(button);
    }

    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.controls.wheel(&mut self.camera, delta_y)
    }

    // ---------------- Frame ----------------

    /// Advance damped orbit motion. Called once per redraw.
    pub fn tick(&mut self) -> bool {
        self.controls.update(&mut self.camera)
    }

    /// Centre sphere followed by every marker, as (position, scale).
    pub fn spheres(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        std::iter::once((Vec3::ZERO, 1.0)).chain(self.markers.iter().map(|m| (m.position, m.scale)))
    }

    pub fn clear_color(&self) -> [f32; 3] {
        match (&self.lighting, &self.material.environment) {
            (LightingMode::EnvironmentLit, Some(env)) => env.background(),
            _ => CLEAR_COLOR,
        }
    }

    // ---------------- Viewport ----------------

    /// Adopt a new viewport: camera aspect now, render target before the next draw.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        let size = viewport.physical_size();
        log::info!(
            "[viewport] {}x{} css, {}x{} px",
            viewport.width,
            viewport.height,
            size.0,
            size.1
        );
        self.pending_resize = Some(size);
    }

    /// Physical size the render target must adopt, once per change.
    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.pending_resize.take()
    }

    // ---------------- Reset ----------------

    /// Clear markers, restore the camera, drop orbit inertia and hide walls.
    pub fn reset(&mut self) {
        let cleared = self.markers.len();
        self.markers.clear();
        self.spawner.release();
        self.camera.set_pose(self.config.initial_pose);
        self.controls.reset(&mut self.camera);
        self.occluders.hide_all();
        log::info!("[reset] cleared {} markers", cleared);
    }

    // ---------------- Panel ----------------

    pub fn set_sphere_size(&mut self, size: f32) -> f32 {
        self.params.sphere_size = SceneParams::clamp_size(size);
        self.params.sphere_size
    }

    pub fn set_sphere_color(&mut self, color: u32) {
        let color = color & 0x00ff_ffff;
        self.params.sphere_color = color;
        self.material.color = color;
    }

    /// Toggle the walls between invisible and a faint debug opacity.
    pub fn toggle_walls(&mut self) -> bool {
        let reveal = !self.occluders.any_visible();
        self.occluders
            .set_opacity(if reveal { WALL_REVEAL_OPACITY } else { 0.0 });
        reveal
    }

    // ---------------- Environment ----------------

    pub fn handle_environment(&mut self, event: EnvironmentEvent) {
        match event {
            EnvironmentEvent::Loaded(env) => {
                log::info!(
                    "[env] loaded {}x{} map, mean radiance ({:.2},{:.2},{:.2})",
                    env.width,
                    env.height,
                    env.average[0],
                    env.average[1],
                    env.average[2]
                );
                self.material.environment = Some(env);
                self.lighting = LightingMode::EnvironmentLit;
            }
            EnvironmentEvent::Failed(reason) => {
                log::warn!("[env] falling back to flat lighting: {}", reason);
                self.material.environment = None;
                self.lighting = LightingMode::Fallback;
            }
        }
    }
}
