// Host-side tests for pointer tracking and parallax.

use glam::Vec3;
use heart_core::*;
use proptest::prelude::*;

#[test]
fn pointer_maps_viewport_corners_to_ndc() {
    let vp = Viewport::new(800.0, 600.0);
    let mut p = PointerState::default();
    p.on_move(0.0, 0.0, vp);
    assert_eq!((p.x, p.y), (-1.0, 1.0));
    p.on_move(800.0, 600.0, vp);
    assert_eq!((p.x, p.y), (1.0, -1.0));
    p.on_move(400.0, 300.0, vp);
    assert_eq!((p.x, p.y), (0.0, 0.0));
}

#[test]
fn degenerate_viewport_keeps_last_pointer() {
    let mut p = PointerState::default();
    p.on_move(200.0, 150.0, Viewport::new(800.0, 600.0));
    let before = p;
    p.on_move(10.0, 10.0, Viewport::new(0.0, 600.0));
    p.on_move(10.0, 10.0, Viewport::new(800.0, 0.0));
    assert_eq!(p, before);
}

#[test]
fn deeper_clouds_follow_the_pointer_less() {
    let s = Strength::clouds();
    let mut prev = f32::INFINITY;
    for depth in [1.0, 2.0, 3.0] {
        let v = s.at_depth(depth);
        assert!(v > 0.0 && v < prev, "depth {depth} strength {v}");
        prev = v;
    }
}

#[test]
fn heart_parallax_approaches_goal_smoothly() {
    let base = vec3(HEART_POSITION);
    let mut t = ParallaxTarget::heart(base);
    let pointer = PointerState { x: 1.0, y: 0.0 };
    let goal = t.goal(&pointer);
    assert!((goal.x - HEART_PARALLAX_STRENGTH).abs() < 1e-6);

    let first = t.update(&pointer);
    assert!(first.x > 0.0 && first.x < goal.x);
    for _ in 0..600 {
        t.update(&pointer);
    }
    assert!(t.current_position.distance(goal) < 1e-3);
}

#[test]
fn cloud_vertical_offset_is_halved() {
    let t = ParallaxTarget::cloud(Vec3::ZERO, 1.0);
    let g = t.goal(&PointerState { x: 1.0, y: 1.0 });
    assert!((g.y - g.x * CLOUD_VERTICAL_RATIO).abs() < 1e-6);
}

#[test]
fn ray_hits_sphere_in_front_only() {
    let hit = ray_sphere(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::ZERO, 1.0);
    assert!((hit.unwrap() - 4.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::ZERO, 1.0).is_none());
    assert!(ray_sphere(Vec3::new(3.0, 0.0, 5.0), -Vec3::Z, Vec3::ZERO, 1.0).is_none());
}

proptest! {
    #[test]
    fn parallax_stays_between_base_and_extreme(
        moves in prop::collection::vec((-1.0f32..=1.0, -1.0f32..=1.0), 1..100),
        depth in 0.5f32..4.0,
        smoothing in 0.01f32..=1.0,
    ) {
        let base = Vec3::new(1.0, -2.0, -8.0);
        let mut t = ParallaxTarget::new(base, depth, Strength::clouds(), smoothing);
        let reach = t.strength();
        for (x, y) in moves {
            let p = t.update(&PointerState { x, y });
            prop_assert!((p.x - base.x).abs() <= reach + 1e-4);
            prop_assert!((p.y - base.y).abs() <= reach + 1e-4);
            prop_assert_eq!(p.z, base.z);
        }
    }
}
