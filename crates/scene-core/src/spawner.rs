use crate::camera::Camera;
use crate::input::PointerButton;
use crate::occluder::OccluderField;
use crate::ray::{pointer_to_ndc, RayHit};
use crate::viewport::Viewport;
use glam::Vec3;

/// A spawned sphere. Geometry and material are shared by every marker; only
/// placement and scale are per instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    pub scale: f32,
}

/// Primary-button drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging,
}

/// Turns primary-button drags into markers placed on the nearest occluder.
#[derive(Clone, Debug)]
pub struct Spawner {
    session: DragSession,
    distance_scale: f32,
}

impl Spawner {
    pub fn new(distance_scale: f32) -> Self {
        Self {
            session: DragSession::Idle,
            distance_scale,
        }
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session == DragSession::Dragging
    }

    /// Start a session on primary press. Other buttons are ignored entirely.
    pub fn press(&mut self, button: PointerButton) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.session = DragSession::Dragging;
        true
    }

    /// Any button release ends the session.
    pub fn release(&mut self) {
        self.session = DragSession::Idle;
    }

    /// Marker scale grows linearly with hit distance as a depth cue.
    #[inline]
    pub fn marker_scale(&self, distance: f32) -> f32 {
        distance * self.distance_scale
    }

    /// Cast from the pointer and return the nearest occluder hit.
    pub fn cast(
        &self,
        camera: &Camera,
        viewport: &Viewport,
        occluders: &OccluderField,
        px: f32,
        py: f32,
    ) -> Option<RayHit> {
        let ndc = pointer_to_ndc(px, py, viewport.width, viewport.height);
        let ray = camera.ray_from_ndc(ndc);
        occluders.nearest(&ray)
    }

    /// Pointer motion: while dragging, spawn at the nearest hit. A miss is a
    /// no-op.
    pub fn motion(
        &self,
        camera: &Camera,
        viewport: &Viewport,
        occluders: &OccluderField,
        px: f32,
        py: f32,
    ) -> Option<Marker> {
        if !self.is_dragging() {
            return None;
        }
        let hit = self.cast(camera, viewport, occluders, px, py)?;
        Some(Marker {
            position: hit.point,
            scale: self.marker_scale(hit.distance),
        })
    }
}
