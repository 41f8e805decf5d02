use crate::constants::{DRIFT_AMP_X_RANGE, DRIFT_AMP_Y_RANGE, DRIFT_SPEED_RANGE};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Fixed per-object drift parameters, sampled once at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftParams {
    pub speed_x: f32,
    pub speed_y: f32,
    pub amp_x: f32,
    pub amp_y: f32,
    pub phase_x: f32,
    pub phase_y: f32,
}

impl DriftParams {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            speed_x: rng.gen_range(DRIFT_SPEED_RANGE.0..DRIFT_SPEED_RANGE.1),
            speed_y: rng.gen_range(DRIFT_SPEED_RANGE.0..DRIFT_SPEED_RANGE.1),
            amp_x: rng.gen_range(DRIFT_AMP_X_RANGE.0..DRIFT_AMP_X_RANGE.1),
            amp_y: rng.gen_range(DRIFT_AMP_Y_RANGE.0..DRIFT_AMP_Y_RANGE.1),
            phase_x: rng.gen_range(0.0..TAU),
            phase_y: rng.gen_range(0.0..TAU),
        }
    }

    /// Offset at `elapsed_sec`; a pure function of time.
    #[inline]
    pub fn offset(&self, elapsed_sec: f32) -> Vec2 {
        Vec2::new(
            (elapsed_sec * self.speed_x + self.phase_x).sin() * self.amp_x,
            (elapsed_sec * self.speed_y + self.phase_y).sin() * self.amp_y,
        )
    }
}
