// Host-side tests for tuning constants and their relationships.

use heart_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_stable() {
    assert!(SPRING_STIFFNESS > 0.0 && SPRING_STIFFNESS < 1.0);
    assert!(SPRING_DAMPING > 0.0 && SPRING_DAMPING < 1.0);
    assert!(PULSE_PEAK > SPRING_REST);
    assert!(GLOW_RESET_SEC > PULSE_RESET_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_flies_towards_the_heart() {
    for start in [CAMERA_START, CAMERA_START_SMALL] {
        assert!(start[2] > CAMERA_END[2]);
    }
    assert!(CAMERA_END[2] > HEART_POSITION[2]);
    assert!(FLIGHT_DURATION_SEC > 0.0);
}

#[test]
fn background_clouds_sit_behind_the_heart() {
    for &(_, _, z, scale, opacity, depth, image) in BACKGROUND_CLOUDS.iter() {
        assert!(z < HEART_POSITION[2]);
        assert!(scale > 0.0);
        assert!(opacity > 0.0 && opacity <= 1.0);
        assert!(depth >= 1.0);
        assert!(image < CONFETTI_IMAGE_COUNT);
    }
}

#[test]
fn opening_clouds_sit_between_camera_and_heart() {
    let mut left = 0;
    let mut right = 0;
    for &(side, _, z, _) in OPENING_CLOUDS.iter() {
        assert!(z > HEART_POSITION[2] && z < CAMERA_END[2]);
        if side < 0.0 {
            left += 1;
        } else {
            right += 1;
        }
    }
    assert_eq!(left, right);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opening_thresholds_are_ordered() {
    assert!(OPENING_CLEARANCE_PROGRESS > 0.0);
    assert!(OPENING_CLEARANCE_PROGRESS < OPENING_HIDE_PROGRESS);
    assert!(OPENING_HIDE_PROGRESS <= 1.0);
    assert!(OPENING_END_X > OPENING_COVER_X);
}

#[test]
fn sound_requests_carry_cue_volume() {
    assert_eq!(SoundRequest::new(Cue::Music).volume, MUSIC_VOLUME);
    for cue in [Cue::Enter, Cue::Accept, Cue::Reject, Cue::Tap] {
        let r = SoundRequest::new(cue);
        assert_eq!(r.cue, cue);
        assert_eq!(r.volume, CUE_VOLUME);
    }
}

#[test]
fn camera_ray_through_centre_points_at_target() {
    let pose = CameraPose {
        eye: vec3(CAMERA_END),
        target: vec3(HEART_POSITION),
    };
    let cam = Camera::from_pose(pose, 16.0 / 9.0);
    let (origin, dir) = cam.ray_through_ndc(0.0, 0.0);
    let expected = (pose.target - pose.eye).normalize();
    assert_eq!(origin, pose.eye);
    assert!(dir.dot(expected) > 0.9999);
}
