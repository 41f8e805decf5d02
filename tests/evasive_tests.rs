// Host-side tests for the evasive rejecting control.

use heart_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn radius_grows_each_move_and_hides_on_sixth() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut c = EvasiveControl::default();
    assert_eq!(c.offset(), None);

    let mut prev_radius = 0.0;
    for n in 1..=EVASIVE_MAX_MOVES {
        let p = c.activate(&mut rng).expect("still visible");
        assert_eq!(p.moves, n);
        assert!(p.radius > prev_radius);
        assert!((p.radius - (EVASIVE_BASE_RADIUS + n as f32 * EVASIVE_RADIUS_STEP)).abs() < 1e-4);
        assert!((p.offset.length() - p.radius).abs() < 1e-2);
        assert_eq!(p.hidden, n == EVASIVE_MAX_MOVES);
        prev_radius = p.radius;
    }
    assert!(c.is_hidden());
}

#[test]
fn hidden_control_ignores_further_activations() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut c = EvasiveControl::new(10.0, 5.0, 2);
    c.activate(&mut rng);
    c.activate(&mut rng);
    assert!(c.is_hidden());
    let offset = c.offset();
    for _ in 0..5 {
        assert_eq!(c.activate(&mut rng), None);
    }
    assert_eq!(c.moves(), 2);
    assert_eq!(c.offset(), offset);
}
