use glam::Vec3;

// Shared scene/animation tuning constants used by the core and the web frontend.

// Heart
pub const HEART_POSITION: [f32; 3] = [0.0, 0.3, -5.0];
pub const HEART_SCALE: f32 = 3.0;
pub const HEART_SCALE_SMALL: f32 = 2.2; // narrow viewports
pub const HEART_PARALLAX_STRENGTH: f32 = 0.4;
pub const HEART_PARALLAX_SMOOTHING: f32 = 0.05; // per update, in (0, 1]
pub const HEART_PICK_RADIUS: f32 = 1.2; // world units around the heart centre

// Heart pulse spring (tuned for ~60 updates/sec)
pub const SPRING_STIFFNESS: f32 = 0.015;
pub const SPRING_DAMPING: f32 = 0.12;
pub const SPRING_REST: f32 = 1.0;
pub const PULSE_PEAK: f32 = 1.12;
pub const PULSE_NUDGE: f32 = 0.008;
pub const PULSE_RESET_SEC: f64 = 0.3;
pub const GLOW_RESET_SEC: f64 = 0.6;

// Idle breathing applied on top of the spring value
pub const BREATH_RATE: f32 = 1.8; // radians per second
pub const BREATH_AMPLITUDE: f32 = 0.02;

// Background cloud parallax: strength = K / (depth * C1 + C2)
pub const CLOUD_PARALLAX_K: f32 = 1.0;
pub const CLOUD_PARALLAX_C1: f32 = 0.7;
pub const CLOUD_PARALLAX_C2: f32 = 0.05;
pub const CLOUD_VERTICAL_RATIO: f32 = 0.5;

// Ambient drift ranges (uniform)
pub const DRIFT_SPEED_RANGE: (f32, f32) = (0.05, 0.25);
pub const DRIFT_AMP_X_RANGE: (f32, f32) = (0.1, 0.4);
pub const DRIFT_AMP_Y_RANGE: (f32, f32) = (0.05, 0.2);

// Camera flight
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_START: [f32; 3] = [0.0, 1.5, 14.0];
pub const CAMERA_START_SMALL: [f32; 3] = [0.0, 2.0, 18.0];
pub const CAMERA_END: [f32; 3] = [0.0, 0.0, 5.0];
pub const FLIGHT_DURATION_SEC: f32 = 3.5;
pub const FLIGHT_WOBBLE_LATERAL: f32 = 0.6;
pub const FLIGHT_WOBBLE_VERTICAL: f32 = 0.4;

// Opening clouds (cover the centre, then part)
pub const OPENING_COVER_X: f32 = 1.0;
pub const OPENING_END_X: f32 = 16.0;
pub const OPENING_SCALE: f32 = 5.0;
pub const OPENING_DURATION_SEC: f32 = 2.0;
pub const OPENING_HIDE_PROGRESS: f32 = 0.95;
pub const OPENING_CLEARANCE_PROGRESS: f32 = 0.4; // hero is visible past this

// Reveal timeline
pub const SPLASH_MIN_SEC: f64 = 0.3;
pub const ENTER_FADE_SEC: f64 = 0.6;
pub const REVEAL_REFRESH_FRAMES: u8 = 2;
pub const CONFETTI_VISIBLE_SEC: f64 = 5.0;

// Evasive "No" control (CSS pixels from the centre)
pub const EVASIVE_BASE_RADIUS: f32 = 80.0;
pub const EVASIVE_RADIUS_STEP: f32 = 30.0;
pub const EVASIVE_MAX_MOVES: u32 = 6;

// Confetti
pub const CONFETTI_COUNT: usize = 120;
pub const CONFETTI_IMAGE_COUNT: usize = 6;

// Layout
pub const SMALL_VIEWPORT_MAX_WIDTH: f32 = 768.0;

// Audio volumes
pub const MUSIC_VOLUME: f32 = 0.4;
pub const CUE_VOLUME: f32 = 0.6;

/// Background clouds: `(x, y, z, scale, opacity, depth, image)`.
pub const BACKGROUND_CLOUDS: [(f32, f32, f32, f32, f32, f32, usize); 14] = [
    // near (depth 1)
    (-5.0, 2.0, -7.0, 2.5, 0.7, 1.0, 1),
    (5.5, -1.5, -7.5, 2.8, 0.65, 1.0, 2),
    (-3.0, -3.0, -7.2, 2.2, 0.6, 1.0, 3),
    (6.0, 3.0, -7.8, 2.6, 0.65, 1.0, 4),
    (-7.0, 0.0, -7.4, 2.4, 0.6, 1.0, 0),
    // mid (depth 2)
    (-7.0, 1.0, -10.0, 3.2, 0.5, 2.0, 1),
    (4.0, 3.5, -10.5, 3.0, 0.45, 2.0, 3),
    (-4.0, -3.5, -11.0, 2.8, 0.4, 2.0, 2),
    (8.0, -1.0, -10.8, 3.4, 0.45, 2.0, 4),
    (-8.0, 3.5, -11.2, 3.0, 0.4, 2.0, 0),
    // far (depth 3)
    (-3.0, 2.0, -15.0, 4.0, 0.35, 3.0, 1),
    (6.0, -2.0, -14.0, 3.8, 0.3, 3.0, 0),
    (-9.0, -1.0, -14.5, 4.2, 0.35, 3.0, 3),
    (3.0, 4.0, -16.0, 3.5, 0.28, 3.0, 2),
];

/// Opening clouds: `(side, y, z, image)` where side is -1 (left) or +1 (right).
pub const OPENING_CLOUDS: [(f32, f32, f32, usize); 6] = [
    (-1.0, 0.8, -3.0, 1),
    (1.0, -0.3, -3.0, 3),
    (-1.0, -0.5, -3.5, 2),
    (1.0, 0.5, -3.5, 4),
    (-1.0, 1.5, -2.5, 1),
    (1.0, -1.2, -2.5, 2),
];

pub const OPENING_CLOUD_OPACITY: f32 = 0.85;

#[inline]
pub fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::from_array(a)
}
