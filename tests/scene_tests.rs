// Host-side tests for scene interactions: heart taps, accept/reject, and
// disposal.

use heart_core::*;

const DT: f32 = 1.0 / 60.0;

fn step(s: &mut Scene, secs: f32) {
    for _ in 0..(secs / DT).round() as usize {
        s.update(DT);
    }
}

/// A scene with the content already on screen.
fn revealed_scene() -> Scene {
    let mut s = Scene::new(SceneConfig::default(), 7).unwrap();
    s.on_assets_ready();
    step(&mut s, 0.4);
    assert!(s.on_enter(&mut Vec::new()));
    step(&mut s, 4.5);
    assert!(s.reveal().content_revealed);
    s
}

fn cues(sounds: &[SoundRequest]) -> Vec<Cue> {
    sounds.iter().map(|r| r.cue).collect()
}

#[test]
fn interactions_are_ignored_before_content_is_shown() {
    let mut s = Scene::new(SceneConfig::default(), 1).unwrap();
    let mut sounds = Vec::new();
    assert!(!s.tap_heart(&mut sounds));
    assert!(!s.on_accept(&mut sounds));
    assert_eq!(s.on_reject(&mut sounds), None);
    assert!(!s.on_pointer_down(0.0, 0.0, 1.5, &mut sounds));
    assert!(sounds.is_empty());
    assert!(!s.celebration().modal_open());
}

#[test]
fn tap_pulses_then_releases_after_timers() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    assert!(s.tap_heart(&mut sounds));
    assert_eq!(cues(&sounds), vec![Cue::Tap]);
    assert!(s.heart().glow());
    assert_eq!(s.heart().spring.target, PULSE_PEAK);

    step(&mut s, 0.25);
    assert!(s.heart().spring.value > 1.0);
    assert_eq!(s.heart().spring.target, PULSE_PEAK);

    step(&mut s, 0.1);
    assert_eq!(s.heart().spring.target, SPRING_REST);
    assert!(s.heart().glow(), "glow released with the pulse");

    step(&mut s, 0.3);
    assert!(!s.heart().glow());

    step(&mut s, 3.0);
    assert!((s.heart().spring.value - SPRING_REST).abs() < 1e-3);
}

#[test]
fn repeated_tap_restarts_the_release_timer() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    s.tap_heart(&mut sounds);
    step(&mut s, 0.2);
    s.tap_heart(&mut sounds);
    step(&mut s, 0.15);
    // 0.35 s after the first tap, but only 0.15 s after the second
    assert_eq!(s.heart().spring.target, PULSE_PEAK);
    step(&mut s, 0.2);
    assert_eq!(s.heart().spring.target, SPRING_REST);
    assert_eq!(cues(&sounds), vec![Cue::Tap, Cue::Tap]);
}

#[test]
fn pointer_down_on_heart_taps_it() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    assert!(!s.on_pointer_down(0.95, 0.95, 16.0 / 9.0, &mut sounds));
    assert!(!s.heart().glow());
    assert!(s.on_pointer_down(0.0, 0.0, 16.0 / 9.0, &mut sounds));
    assert!(s.heart().glow());
    assert_eq!(cues(&sounds), vec![Cue::Tap]);
}

#[test]
fn accept_shows_confetti_for_five_seconds() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    assert!(s.on_accept(&mut sounds));
    assert_eq!(cues(&sounds), vec![Cue::Accept]);
    assert!(s.celebration().confetti_visible());
    assert!(s.celebration().modal_open());
    assert_eq!(s.celebration().confetti().len(), CONFETTI_COUNT);

    step(&mut s, 4.9);
    assert!(s.celebration().confetti_visible());
    step(&mut s, 0.2);
    assert!(!s.celebration().confetti_visible());
    assert!(s.celebration().modal_open(), "modal stays until closed");

    s.close_modal();
    assert!(!s.celebration().modal_open());
}

#[test]
fn accepting_again_extends_confetti() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    s.on_accept(&mut sounds);
    step(&mut s, 3.0);
    s.on_accept(&mut sounds);
    step(&mut s, 3.0);
    assert!(s.celebration().confetti_visible());
    step(&mut s, 2.1);
    assert!(!s.celebration().confetti_visible());
}

#[test]
fn reject_runs_away_six_times_then_stops() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    let mut radii = Vec::new();
    for _ in 0..EVASIVE_MAX_MOVES {
        let p = s.on_reject(&mut sounds).expect("control still visible");
        radii.push(p.radius);
    }
    assert!(radii.windows(2).all(|w| w[1] > w[0]));
    assert!(s.evasive().is_hidden());
    assert_eq!(s.on_reject(&mut sounds), None);
    assert_eq!(sounds.len(), EVASIVE_MAX_MOVES as usize);
    assert!(sounds.iter().all(|r| r.cue == Cue::Reject));
}

#[test]
fn dispose_stops_timers_and_updates() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    s.tap_heart(&mut sounds);
    s.on_accept(&mut sounds);
    s.dispose();
    let clock = s.clock();
    step(&mut s, 6.0);
    assert_eq!(s.clock(), clock);
    assert!(s.heart().glow(), "release timer fired after dispose");
    assert_eq!(s.heart().spring.target, PULSE_PEAK);
    assert!(s.celebration().confetti_visible());

    sounds.clear();
    assert!(!s.tap_heart(&mut sounds));
    assert!(!s.on_accept(&mut sounds));
    assert!(sounds.is_empty());
}

#[test]
fn page_kept_for_back_navigation_keeps_running() {
    let mut s = revealed_scene();
    let mut sounds = Vec::new();
    s.tap_heart(&mut sounds);
    s.on_page_hide(true);
    assert!(!s.is_disposed());
    let clock = s.clock();
    step(&mut s, 1.0);
    assert!(s.clock() > clock);
    assert!(!s.heart().glow(), "glow timer should still fire");
    assert!(s.tap_heart(&mut sounds));

    s.on_page_hide(false);
    assert!(s.is_disposed());
    let clock = s.clock();
    step(&mut s, 1.0);
    assert_eq!(s.clock(), clock);
}

#[test]
fn bad_dt_does_not_advance_the_clock() {
    let mut s = Scene::new(SceneConfig::default(), 2).unwrap();
    s.update(f32::NAN);
    s.update(-0.5);
    s.update(f32::INFINITY);
    assert_eq!(s.clock(), 0.0);
    s.update(0.5);
    assert!((s.clock() - 0.5).abs() < 1e-9);
}

#[test]
fn clouds_follow_pointer_and_heart_scale_includes_spring() {
    let mut s = revealed_scene();
    let before: Vec<f32> = s
        .background_clouds()
        .iter()
        .map(|c| c.parallax.current_position.x)
        .collect();
    s.on_pointer_move(1000.0, 300.0, Viewport::new(1000.0, 600.0));
    step(&mut s, 0.1);
    for (c, x0) in s.background_clouds().iter().zip(before) {
        assert!(c.parallax.current_position.x > x0);
    }
    let h = s.heart();
    let scale = h.transform().scale;
    assert!((scale / h.base_scale - 1.0).abs() <= BREATH_AMPLITUDE + 0.01);
}

#[test]
fn narrow_viewport_uses_small_layout() {
    let cfg = SceneConfig::for_viewport(Viewport::new(375.0, 812.0));
    assert_eq!(cfg.layout.heart_scale, HEART_SCALE_SMALL);
    assert_eq!(cfg.layout.camera_start, vec3(CAMERA_START_SMALL));
    let s = Scene::new(cfg, 5).unwrap();
    assert_eq!(s.camera().eye, vec3(CAMERA_START_SMALL));
    assert_eq!(s.heart().base_scale, HEART_SCALE_SMALL);

    let wide = SceneConfig::for_viewport(Viewport::new(1440.0, 900.0));
    assert_eq!(wide.layout, Layout::default());
}

#[test]
fn invalid_flight_duration_is_reported() {
    let cfg = SceneConfig {
        flight_duration: 0.0,
        ..SceneConfig::default()
    };
    assert!(matches!(
        Scene::new(cfg, 0),
        Err(SceneError::InvalidDuration(_))
    ));
}

#[test]
fn same_seed_same_scene() {
    let a = Scene::new(SceneConfig::default(), 11).unwrap();
    let b = Scene::new(SceneConfig::default(), 11).unwrap();
    for (x, y) in a.background_clouds().iter().zip(b.background_clouds()) {
        assert_eq!(x.drift, y.drift);
    }
    assert_eq!(a.celebration().confetti(), b.celebration().confetti());
}
