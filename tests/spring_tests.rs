// Host-side tests for the heart pulse spring.

use heart_core::*;
use proptest::prelude::*;

#[test]
fn default_spring_rests_at_one() {
    let mut s = Spring::default();
    for _ in 0..100 {
        s.step();
    }
    assert!((s.value - SPRING_REST).abs() < 1e-6);
    assert!(s.is_settled(1e-6));
}

#[test]
fn pulse_rises_within_a_quarter_second_then_settles_back() {
    let mut s = Spring::new(0.015, 0.12);
    s.pulse(1.12, 0.008);

    // 15 frames at 60 Hz is ~250 ms
    let mut v = 0.0;
    for _ in 0..15 {
        v = s.step();
    }
    assert!(v > 1.0, "spring did not rise: {v}");
    assert!(v < 1.12, "spring overshot early: {v}");

    // Slight overshoot past the peak is expected while the target is still raised
    for _ in 0..3 {
        v = s.step();
    }
    assert!(v < 1.15, "overshoot too large: {v}");

    s.set_target(1.0);
    for _ in 0..120 {
        s.step();
    }
    assert!((s.value - 1.0).abs() < 0.01, "value {}", s.value);
}

#[test]
fn nudge_adds_to_velocity() {
    let mut s = Spring::default();
    s.pulse(PULSE_PEAK, PULSE_NUDGE);
    assert_eq!(s.target, PULSE_PEAK);
    assert!((s.velocity - PULSE_NUDGE).abs() < 1e-7);
}

#[test]
fn breathing_stays_within_amplitude() {
    for i in 0..600 {
        let b = breathing(i as f32 / 60.0);
        assert!((b - 1.0).abs() <= BREATH_AMPLITUDE + 1e-6);
    }
}

proptest! {
    #[test]
    fn spring_converges_without_growing(
        stiffness in 0.005f32..0.03,
        damping in 0.05f32..0.3,
        target in 0.5f32..1.5,
    ) {
        let mut s = Spring::new(stiffness, damping);
        s.set_target(target);
        let delta = (target - 1.0).abs();
        for _ in 0..500 {
            let v = s.step();
            prop_assert!(v.is_finite());
            prop_assert!((v - 1.0).abs() <= 2.0 * delta + 1e-5);
        }
        prop_assert!((s.value - target).abs() <= 0.01 * delta + 1e-4);
    }
}
