// Host-side tests for the occluder field: layout bounds and ray hits.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::constants::{OCCLUDER_COUNT, OCCLUDER_HALF_EXTENT};
use scene_core::{Occluder, OccluderField, Ray};

fn slab(z: f32) -> Occluder {
    // 20 wide, 20 tall, 1 thick, facing +Z
    Occluder::new(Vec3::new(0.0, 0.0, z), 0.0, Vec3::new(20.0, 20.0, 1.0))
}

#[test]
fn default_field_has_twenty_five_transparent_walls() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = OccluderField::generate_default(&mut rng);
    assert_eq!(field.len(), OCCLUDER_COUNT);
    assert!(field.iter().all(|o| o.opacity == 0.0));
    assert!(!field.any_visible());
}

#[test]
fn layout_stays_within_bounds_across_seeds() {
    for seed in 0..64u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = OccluderField::generate_default(&mut rng);
        for o in field.iter() {
            assert!(o.position.x >= -OCCLUDER_HALF_EXTENT && o.position.x < OCCLUDER_HALF_EXTENT);
            assert!(o.position.z >= -OCCLUDER_HALF_EXTENT && o.position.z < OCCLUDER_HALF_EXTENT);
            assert_eq!(o.position.y, 0.0);
            assert!(o.yaw >= 0.0 && o.yaw < std::f32::consts::TAU);
            assert_eq!(o.scale, Vec3::new(1200.0, 5.0, 1.0));
        }
    }
}

#[test]
fn same_seed_gives_same_layout() {
    let a = OccluderField::generate_default(&mut StdRng::seed_from_u64(99));
    let b = OccluderField::generate_default(&mut StdRng::seed_from_u64(99));
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn nearest_of_several_hits_wins() {
    // front faces at z = 5.5, 2.5 and 8.5 from a ray travelling -Z from z = 20
    let field = OccluderField::from_occluders(vec![slab(5.0), slab(2.0), slab(8.0)]);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z);

    let hits = field.intersect(&ray);
    assert_eq!(hits.len(), 3);
    assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));

    let nearest = field.nearest(&ray).unwrap();
    assert_eq!(nearest.index, 2);
    assert!((nearest.distance - 11.5).abs() < 1e-4);
    assert!((nearest.point.z - 8.5).abs() < 1e-4);
}

#[test]
fn hits_do_not_depend_on_opacity() {
    let mut field = OccluderField::from_occluders(vec![slab(0.0)]);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
    let hidden = field.nearest(&ray).unwrap();
    field.set_opacity(0.25);
    let shown = field.nearest(&ray).unwrap();
    assert_eq!(hidden, shown);
}

#[test]
fn ray_pointing_away_misses() {
    let field = OccluderField::from_occluders(vec![slab(0.0)]);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
    assert!(field.nearest(&ray).is_none());
    assert!(field.intersect(&ray).is_empty());
}

#[test]
fn rotated_wall_is_hit_along_its_long_axis() {
    // a quarter turn swings the long axis from X onto Z
    let wall = Occluder::new(Vec3::ZERO, std::f32::consts::FRAC_PI_2, Vec3::new(1200.0, 5.0, 1.0));
    let field = OccluderField::from_occluders(vec![wall]);
    let ray = Ray::new(Vec3::new(10.0, 0.0, 300.0), Vec3::NEG_X);
    let hit = field.nearest(&ray).unwrap();
    assert!((hit.distance - 9.5).abs() < 1e-3);
}

#[test]
fn empty_field_never_hits() {
    let field = OccluderField::default();
    assert!(field.is_empty());
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
    assert!(field.nearest(&ray).is_none());
}
