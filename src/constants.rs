// DOM hooks and presentation assets used by the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_TEXT_ID: &str = "loading-text";
pub const ENTER_BUTTON_ID: &str = "enter-button";
pub const QUESTION_ID: &str = "valentine-question";
pub const BUTTONS_ID: &str = "valentine-buttons";
pub const YES_BUTTON_ID: &str = "yes-button";
pub const NO_BUTTON_ID: &str = "no-button";
pub const CONFETTI_ID: &str = "confetti";
pub const MODAL_OVERLAY_ID: &str = "yes-modal-overlay";
pub const MODAL_CLOSE_ID: &str = "yes-modal-close";
pub const FALLBACK_ID: &str = "fallback-message";

// CSS classes toggled by the overlay sync
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_FADE_OUT: &str = "loading-fade-out";
pub const CLASS_REVEALED: &str = "revealed";
pub const CLASS_CONFETTI_HEART: &str = "confetti-heart";

pub const FALLBACK_TEXT: &str =
    "Your browser does not support WebGPU. Please try a different browser.";

// Audio
pub const MUSIC_PATH: &str = "/audio/Cosmic Candy Music.ogg";

// Confetti images, indexed by `ConfettiPiece::image`
pub const HEART_IMAGES: [&str; 6] = [
    "/images/hearts/Hand Drawn Pink Heart Doodle.png",
    "/images/hearts/Cute Love Heart Doodle.avif",
    "/images/hearts/Colored Heart Doodle.webp",
    "/images/hearts/Doodle Love Heart PNG.webp",
    "/images/hearts/Heart Doodle PNG.webp",
    "/images/hearts/Heart Monochrome Doodle.webp",
];

// Sprite colours (linear RGB)
pub const HEART_COLOR: [f32; 3] = [0.92, 0.12, 0.26];
pub const CLOUD_COLOR: [f32; 3] = [1.0, 0.97, 0.98];
pub const CLEAR_COLOR: [f64; 3] = [0.53, 0.81, 0.92]; // sky

// Chime notes per cue: (frequency Hz, start offset sec, length sec)
pub const CHIME_ENTER: &[(f32, f64, f64)] = &[(523.25, 0.0, 0.25), (783.99, 0.12, 0.35)];
pub const CHIME_ACCEPT: &[(f32, f64, f64)] = &[
    (523.25, 0.0, 0.3),
    (659.25, 0.1, 0.3),
    (783.99, 0.2, 0.3),
    (1046.5, 0.3, 0.5),
];
pub const CHIME_REJECT: &[(f32, f64, f64)] = &[(311.13, 0.0, 0.18), (233.08, 0.1, 0.25)];
pub const CHIME_TAP: &[(f32, f64, f64)] = &[(880.0, 0.0, 0.12)];

pub const SPRITE_CAPACITY: usize = 32;
