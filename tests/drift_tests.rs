// Host-side tests for ambient cloud drift.

use heart_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn same_seed_gives_same_drift() {
    let a = DriftParams::sample(&mut StdRng::seed_from_u64(7));
    let b = DriftParams::sample(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_eq!(a.offset(12.5), b.offset(12.5));
}

#[test]
fn sampled_parameters_fall_in_ranges() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let d = DriftParams::sample(&mut rng);
        for speed in [d.speed_x, d.speed_y] {
            assert!(speed >= DRIFT_SPEED_RANGE.0 && speed < DRIFT_SPEED_RANGE.1);
        }
        assert!(d.amp_x >= DRIFT_AMP_X_RANGE.0 && d.amp_x < DRIFT_AMP_X_RANGE.1);
        assert!(d.amp_y >= DRIFT_AMP_Y_RANGE.0 && d.amp_y < DRIFT_AMP_Y_RANGE.1);
    }
}

#[test]
fn offset_is_bounded_by_amplitude() {
    let d = DriftParams::sample(&mut StdRng::seed_from_u64(99));
    for i in 0..2000 {
        let o = d.offset(i as f32 * 0.05);
        assert!(o.x.abs() <= d.amp_x + 1e-6);
        assert!(o.y.abs() <= d.amp_y + 1e-6);
    }
}
