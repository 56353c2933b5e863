//! Orbit-style camera manipulation around a target point.
//!
//! Gestures accumulate into pending spherical/pan deltas which `update`
//! applies to the camera. Without damping every update consumes the full
//! delta; with damping a fraction is applied per update and the remainder
//! carries over as inertia until it decays or `reset` drops it.

use crate::camera::{Camera, CameraPose};
use crate::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_PAN_SPEED, ORBIT_POLAR_EPSILON,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use crate::input::PointerButton;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitAction {
    Rotate,
    Pan,
}

/// Which orbit action each mouse button drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseBindings {
    pub primary: Option<OrbitAction>,
    pub middle: Option<OrbitAction>,
    pub secondary: Option<OrbitAction>,
}

impl Default for MouseBindings {
    /// Primary stays unbound: it belongs to marker spawning.
    fn default() -> Self {
        Self {
            primary: None,
            middle: Some(OrbitAction::Pan),
            secondary: Some(OrbitAction::Rotate),
        }
    }
}

impl MouseBindings {
    pub fn action_for(&self, button: PointerButton) -> Option<OrbitAction> {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Middle => self.middle,
            PointerButton::Secondary => self.secondary,
            PointerButton::Other(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    action: OrbitAction,
    button: PointerButton,
    last: Vec2,
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub bindings: MouseBindings,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of pending motion applied per update; `None` applies it all.
    pub damping: Option<f32>,
    saved: CameraPose,
    gesture: Option<Gesture>,
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    pub fn new(pose: CameraPose) -> Self {
        Self {
            bindings: MouseBindings::default(),
            rotate_speed: ORBIT_ROTATE_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            damping: None,
            saved: pose,
            gesture: None,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn with_damping(mut self, factor: Option<f32>) -> Self {
        self.damping = factor.map(|f| f.clamp(0.01, 1.0));
        self
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn active_action(&self) -> Option<OrbitAction> {
        self.gesture.map(|g| g.action)
    }

    /// Whether any inertia is still pending.
    pub fn is_settling(&self) -> bool {
        self.delta_theta != 0.0
            || self.delta_phi != 0.0
            || self.pan_offset != Vec3::ZERO
            || self.scale != 1.0
    }

    /// Restore the saved pose and drop any gesture or inertia.
    pub fn reset(&mut self, camera: &mut Camera) {
        camera.set_pose(self.saved);
        self.gesture = None;
        self.clear_pending();
    }

    /// Begin a gesture if `button` is bound. Returns whether it was consumed.
    pub fn pointer_down(&mut self, button: PointerButton, pos: Vec2) -> bool {
        match self.bindings.action_for(button) {
            Some(action) => {
                self.gesture = Some(Gesture {
                    action,
                    button,
                    last: pos,
                });
                true
            }
            None => false,
        }
    }

    /// Feed pointer motion. Returns whether the camera moved.
    pub fn pointer_move(&mut self, camera: &mut Camera, pos: Vec2, viewport_height: f32) -> bool {
        let Some(g) = self.gesture.as_mut() else {
            return false;
        };
        let delta = pos - g.last;
        g.last = pos;
        let action = g.action;
        if delta == Vec2::ZERO {
            return false;
        }
        match action {
            OrbitAction::Rotate => self.rotate(delta, viewport_height),
            OrbitAction::Pan => self.pan(camera, delta, viewport_height),
        }
        self.update(camera)
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        if matches!(self.gesture, Some(g) if g.button == button) {
            self.gesture = None;
        }
    }

    /// Wheel dolly: negative `delta_y` (scroll up) moves the eye closer.
    pub fn wheel(&mut self, camera: &mut Camera, delta_y: f32) -> bool {
        if delta_y < 0.0 {
            self.scale *= self.zoom_step;
        } else if delta_y > 0.0 {
            self.scale /= self.zoom_step;
        } else {
            return false;
        }
        self.update(camera)
    }

    fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * delta.x / h * self.rotate_speed;
        self.delta_phi -= TAU * delta.y / h * self.rotate_speed;
    }

    fn pan(&mut self, camera: &Camera, delta: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let offset = camera.eye - camera.target;
        let target_distance = offset.length() * (camera.fovy_radians * 0.5).tan();
        let forward = camera.forward();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let k = 2.0 * target_distance / h * self.pan_speed;
        self.pan_offset += -right * (delta.x * k) + up * (delta.y * k);
    }

    /// Apply pending motion to `camera`. Returns whether the pose changed.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.is_settling() {
            return false;
        }
        let before = camera.pose();
        let f = self.damping.unwrap_or(1.0);

        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.delta_theta * f;
        phi += self.delta_phi * f;
        phi = phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        camera.target += self.pan_offset * f;
        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.eye = camera.target + new_offset;

        if self.damping.is_some() {
            let keep = 1.0 - f;
            self.delta_theta *= keep;
            self.delta_phi *= keep;
            self.pan_offset *= keep;
            if self.delta_theta.abs() < 1e-5 && self.delta_phi.abs() < 1e-5 {
                self.delta_theta = 0.0;
                self.delta_phi = 0.0;
            }
            if self.pan_offset.length_squared() < 1e-10 {
                self.pan_offset = Vec3::ZERO;
            }
            self.scale = 1.0;
        } else {
            self.clear_pending();
        }
        camera.pose() != before
    }

    fn clear_pending(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.pan_offset = Vec3::ZERO;
        self.scale = 1.0;
    }
}
