use crate::constants::{CONFETTI_COUNT, CONFETTI_IMAGE_COUNT};
use rand::Rng;

/// One falling heart; laid out once and then only toggled on or off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub size_px: f32,
    pub left_percent: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub sway_px: f32,
    pub rotation_deg: f32,
    pub image: usize,
}

impl ConfettiPiece {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(20.0..50.0),
            left_percent: rng.gen_range(0.0..100.0),
            delay_sec: rng.gen_range(0.0..3.0),
            duration_sec: rng.gen_range(1.8..3.3),
            sway_px: rng.gen_range(-30.0..30.0),
            rotation_deg: rng.gen_range(-20.0..20.0),
            image: rng.gen_range(0..CONFETTI_IMAGE_COUNT),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Celebration {
    confetti: Vec<ConfettiPiece>,
    confetti_visible: bool,
    modal_open: bool,
}

impl Celebration {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            confetti: (0..CONFETTI_COUNT)
                .map(|_| ConfettiPiece::sample(rng))
                .collect(),
            confetti_visible: false,
            modal_open: false,
        }
    }

    pub fn celebrate(&mut self) {
        self.confetti_visible = true;
        self.modal_open = true;
    }

    pub fn hide_confetti(&mut self) {
        self.confetti_visible = false;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn confetti(&self) -> &[ConfettiPiece] {
        &self.confetti
    }

    pub fn confetti_visible(&self) -> bool {
        self.confetti_visible
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }
}
