// Host-side tests for the scene controller: spawning, reset, viewport,
// panel parameters and environment delivery.

use glam::Vec3;
use scene_core::constants::{SPHERE_RADIUS, SPHERE_SIZE_MAX, SPHERE_SIZE_MIN};
use scene_core::gpu::{sphere_instances, wall_instances};
use scene_core::{
    CameraPose, DragSession, EnvironmentEvent, EnvironmentLight, LightingMode, Occluder,
    OccluderField, PointerButton, SceneConfig, SceneController, SceneError, SceneVariant, Viewport,
    WALL_REVEAL_OPACITY,
};

const W: f32 = 800.0;
const H: f32 = 600.0;

fn slab(z: f32) -> Occluder {
    Occluder::new(Vec3::new(0.0, 0.0, z), 0.0, Vec3::new(20.0, 20.0, 1.0))
}

/// Camera on +Z looking down -Z at slabs, so the viewport centre ray hits
/// the nearest front face head on.
fn scene_with(slabs: Vec<Occluder>, variant: SceneVariant) -> SceneController {
    let config = SceneConfig {
        variant,
        initial_pose: CameraPose {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
        },
        seed: Some(1),
        ..SceneConfig::default()
    };
    SceneController::with_occluders(
        config,
        Viewport::new(W, H, 1.0),
        OccluderField::from_occluders(slabs),
    )
}

fn plain_scene() -> SceneController {
    scene_with(vec![slab(0.0)], SceneVariant::Plain)
}

#[test]
fn default_scene_has_twenty_five_walls_and_only_the_centre_sphere() {
    let scene = SceneController::new(SceneConfig::default(), Viewport::default());
    assert_eq!(scene.occluders().len(), 25);
    assert_eq!(scene.marker_count(), 0);
    assert_eq!(scene.spheres().count(), 1);
    assert_eq!(scene.lighting(), LightingMode::DefaultLit);
    assert_eq!(scene.camera().pose(), CameraPose::initial());
}

#[test]
fn primary_drag_spawns_on_every_hit() {
    let mut scene = plain_scene();
    assert!(scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0));
    assert_eq!(scene.drag_session(), DragSession::Dragging);

    let m = scene.pointer_move(W / 2.0, H / 2.0).unwrap();
    assert!((m.position.z - 0.5).abs() < 1e-3);
    assert!((m.scale - 0.05 * 9.5).abs() < 1e-3);

    scene.pointer_move(W / 2.0 + 5.0, H / 2.0);
    scene.pointer_move(W / 2.0 + 10.0, H / 2.0 - 5.0);
    assert_eq!(scene.marker_count(), 3);
}

#[test]
fn nearest_wall_receives_the_marker() {
    let mut scene = scene_with(vec![slab(-4.0), slab(3.0), slab(0.0)], SceneVariant::Plain);
    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    let m = scene.pointer_move(W / 2.0, H / 2.0).unwrap();
    assert!((m.position.z - 3.5).abs() < 1e-3);
}

#[test]
fn motion_without_drag_does_not_spawn() {
    let mut scene = plain_scene();
    assert!(scene.pointer_move(W / 2.0, H / 2.0).is_none());
    assert_eq!(scene.marker_count(), 0);
}

#[test]
fn miss_leaves_marker_count_unchanged() {
    // camera looks away from the only wall
    let mut scene = scene_with(vec![slab(20.0)], SceneVariant::Plain);
    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    assert!(scene.pointer_move(W / 2.0, H / 2.0).is_none());
    assert_eq!(scene.marker_count(), 0);
    assert_eq!(scene.drag_session(), DragSession::Dragging);
}

#[test]
fn secondary_and_middle_never_spawn() {
    let mut scene = plain_scene();
    for button in [PointerButton::Secondary, PointerButton::Middle] {
        scene.pointer_down(button, W / 2.0, H / 2.0);
        assert_eq!(scene.drag_session(), DragSession::Idle);
        scene.pointer_move(W / 2.0 + 20.0, H / 2.0);
        scene.pointer_up(button);
    }
    assert_eq!(scene.marker_count(), 0);
}

#[test]
fn secondary_drag_orbits_but_primary_does_not() {
    let mut scene = plain_scene();
    let start = scene.camera().pose();

    scene.pointer_down(PointerButton::Primary, 100.0, 100.0);
    scene.pointer_move(200.0, 100.0);
    scene.pointer_up(PointerButton::Primary);
    assert_eq!(scene.camera().pose(), start);

    scene.pointer_down(PointerButton::Secondary, 100.0, 100.0);
    scene.pointer_move(200.0, 100.0);
    scene.pointer_up(PointerButton::Secondary);
    assert_ne!(scene.camera().pose().eye, start.eye);
    assert_eq!(scene.camera().pose().target, start.target);
}

#[test]
fn release_ends_the_drag() {
    let mut scene = plain_scene();
    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    scene.pointer_up(PointerButton::Primary);
    assert_eq!(scene.drag_session(), DragSession::Idle);
    assert!(scene.pointer_move(W / 2.0, H / 2.0).is_none());
}

#[test]
fn farther_hits_give_larger_markers() {
    let mut near = scene_with(vec![slab(4.0)], SceneVariant::Plain);
    let mut far = scene_with(vec![slab(-4.0)], SceneVariant::Plain);
    near.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    far.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    let a = near.pointer_move(W / 2.0, H / 2.0).unwrap();
    let b = far.pointer_move(W / 2.0, H / 2.0).unwrap();
    assert!(b.scale > a.scale);
    // 5.5 vs 13.5 units away
    assert!((b.scale / a.scale - 13.5 / 5.5).abs() < 1e-3);
}

#[test]
fn one_drag_across_two_depths_scales_by_distance() {
    // left wall 9.5 deep, right wall 13.5 deep, no overlap in x
    let left = Occluder::new(Vec3::new(-6.0, 0.0, 0.0), 0.0, Vec3::new(10.0, 20.0, 1.0));
    let right = Occluder::new(Vec3::new(6.0, 0.0, -4.0), 0.0, Vec3::new(10.0, 20.0, 1.0));
    let mut scene = scene_with(vec![left, right], SceneVariant::Plain);
    let eye = scene.camera().eye;

    scene.pointer_down(PointerButton::Primary, W * 0.25, H / 2.0);
    let near = scene.pointer_move(W * 0.25, H / 2.0).unwrap();
    let far = scene.pointer_move(W * 0.75, H / 2.0).unwrap();
    scene.pointer_up(PointerButton::Primary);

    assert_eq!(scene.marker_count(), 2);
    assert!((near.position.z - 0.5).abs() < 1e-3);
    assert!((far.position.z + 3.5).abs() < 1e-3);

    let d1 = (near.position - eye).length();
    let d2 = (far.position - eye).length();
    assert!(d1 < d2);
    assert!(near.scale < far.scale);
    assert!((far.scale / near.scale - d2 / d1).abs() < 1e-4);
    assert!((near.scale - 0.05 * d1).abs() < 1e-4);
}

#[test]
fn damped_orbit_keeps_moving_after_release_until_it_settles() {
    let config = SceneConfig {
        orbit_damping: Some(0.25),
        seed: Some(3),
        ..SceneConfig::default()
    };
    let mut scene = SceneController::new(config, Viewport::new(W, H, 1.0));
    let start = scene.camera().pose();

    scene.pointer_down(PointerButton::Secondary, 100.0, 100.0);
    scene.pointer_move(200.0, 100.0);
    scene.pointer_up(PointerButton::Secondary);
    assert_ne!(scene.camera().pose(), start);
    assert!(scene.controls().is_settling());

    let released = scene.camera().pose();
    assert!(scene.tick());
    assert_ne!(scene.camera().pose(), released);

    for _ in 0..200 {
        scene.tick();
    }
    assert!(!scene.controls().is_settling());
    assert!(!scene.tick());
}

#[test]
fn reset_drops_orbit_inertia() {
    let config = SceneConfig {
        orbit_damping: Some(0.1),
        seed: Some(3),
        ..SceneConfig::default()
    };
    let mut scene = SceneController::new(config, Viewport::new(W, H, 1.0));
    scene.pointer_down(PointerButton::Secondary, 100.0, 100.0);
    scene.pointer_move(300.0, 150.0);
    scene.pointer_up(PointerButton::Secondary);
    scene.reset();
    assert!(!scene.controls().is_settling());
    assert!(!scene.tick());
    assert_eq!(scene.camera().pose(), CameraPose::initial());
}

#[test]
fn reset_clears_markers_and_restores_the_pose() {
    let mut scene = plain_scene();
    let start = scene.camera().pose();

    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    for i in 0..7 {
        scene.pointer_move(W / 2.0 + i as f32, H / 2.0);
    }
    scene.pointer_up(PointerButton::Primary);
    assert_eq!(scene.marker_count(), 7);

    scene.pointer_down(PointerButton::Middle, 10.0, 10.0);
    scene.pointer_move(60.0, 40.0);
    scene.pointer_up(PointerButton::Middle);
    scene.wheel(-1.0);
    assert_ne!(scene.camera().pose(), start);

    scene.reset();
    assert_eq!(scene.marker_count(), 0);
    assert_eq!(scene.spheres().count(), 1);
    assert_eq!(scene.camera().pose(), start);
    assert!(!scene.controls().is_settling());

    scene.reset();
    assert_eq!(scene.marker_count(), 0);
    assert_eq!(scene.camera().pose(), start);
}

#[test]
fn reset_mid_drag_ends_the_session() {
    let mut scene = plain_scene();
    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    scene.pointer_move(W / 2.0, H / 2.0);
    scene.reset();
    assert_eq!(scene.drag_session(), DragSession::Idle);
    assert!(scene.pointer_move(W / 2.0, H / 2.0).is_none());
}

#[test]
fn resize_updates_aspect_and_requests_a_new_target() {
    let mut scene = plain_scene();
    assert_eq!(scene.take_resize(), Some((800, 600)));
    assert_eq!(scene.take_resize(), None);

    scene.resize(Viewport::new(1000.0, 500.0, 2.0));
    assert!((scene.camera().aspect - 2.0).abs() < 1e-6);
    assert_eq!(scene.take_resize(), Some((2000, 1000)));
    assert_eq!(scene.take_resize(), None);
}

#[test]
fn spawning_uses_the_current_viewport() {
    let mut scene = plain_scene();
    scene.resize(Viewport::new(400.0, 400.0, 1.0));
    scene.pointer_down(PointerButton::Primary, 200.0, 200.0);
    let m = scene.pointer_move(200.0, 200.0).unwrap();
    assert!(m.position.x.abs() < 1e-3 && m.position.y.abs() < 1e-3);
}

#[test]
fn sphere_size_is_clamped_and_scales_every_instance() {
    let mut scene = plain_scene();
    assert_eq!(scene.params().sphere_size, SPHERE_RADIUS);
    assert_eq!(scene.set_sphere_size(5.0), SPHERE_SIZE_MAX);
    assert_eq!(scene.set_sphere_size(0.0), SPHERE_SIZE_MIN);
    assert_eq!(scene.set_sphere_size(1.5), 1.5);

    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    let m = scene.pointer_move(W / 2.0, H / 2.0).unwrap();
    let instances = sphere_instances(&scene);
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].radius, 1.5);
    assert!((instances[1].radius - 1.5 * m.scale).abs() < 1e-6);
}

#[test]
fn colour_change_applies_to_the_shared_material() {
    let mut scene = plain_scene();
    scene.set_sphere_color(0xff8800);
    assert_eq!(scene.params().sphere_color, 0xff8800);
    assert_eq!(scene.material().color, 0xff8800);
}

#[test]
fn wall_toggle_reveals_then_hides_and_reset_hides() {
    let mut scene = scene_with(vec![slab(0.0), slab(-3.0)], SceneVariant::Plain);
    assert!(wall_instances(&scene).is_empty());

    assert!(scene.toggle_walls());
    let walls = wall_instances(&scene);
    assert_eq!(walls.len(), 2);
    assert_eq!(walls[0].color[3], WALL_REVEAL_OPACITY);

    assert!(!scene.toggle_walls());
    assert!(wall_instances(&scene).is_empty());

    scene.toggle_walls();
    scene.reset();
    assert!(!scene.occluders().any_visible());
}

fn uniform_env(value: f32) -> EnvironmentLight {
    let pixels = vec![value; 4 * 2 * 3];
    EnvironmentLight::from_rgb32f(4, 2, &pixels).unwrap()
}

#[test]
fn environment_variant_waits_then_lights() {
    let mut scene = scene_with(
        vec![slab(0.0)],
        SceneVariant::EnvironmentMapped {
            source: "studio.hdr".into(),
        },
    );
    assert_eq!(scene.environment_source(), Some("studio.hdr"));
    assert_eq!(scene.lighting(), LightingMode::AwaitingEnvironment);
    assert_eq!(scene.clear_color(), [0.0; 3]);

    // spawning is not gated on the load
    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    assert!(scene.pointer_move(W / 2.0, H / 2.0).is_some());

    scene.handle_environment(EnvironmentEvent::Loaded(uniform_env(1.0)));
    assert_eq!(scene.lighting(), LightingMode::EnvironmentLit);
    assert!(scene.material().environment.is_some());
    let bg = scene.clear_color();
    assert!((bg[0] - 0.5).abs() < 1e-5);
}

#[test]
fn environment_failure_falls_back_and_keeps_working() {
    let mut scene = scene_with(
        vec![slab(0.0)],
        SceneVariant::EnvironmentMapped {
            source: "missing.hdr".into(),
        },
    );
    let failed: Result<EnvironmentLight, SceneError> = Err(SceneError::EmptyEnvironment);
    scene.handle_environment(failed.into());
    assert_eq!(scene.lighting(), LightingMode::Fallback);
    assert!(scene.material().environment.is_none());
    assert_eq!(scene.clear_color(), [0.0; 3]);

    scene.pointer_down(PointerButton::Primary, W / 2.0, H / 2.0);
    assert!(scene.pointer_move(W / 2.0, H / 2.0).is_some());
}

#[test]
fn plain_variant_has_no_environment_source() {
    let scene = plain_scene();
    assert_eq!(scene.environment_source(), None);
}
