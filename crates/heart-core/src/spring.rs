use crate::constants::{
    BREATH_AMPLITUDE, BREATH_RATE, SPRING_DAMPING, SPRING_REST, SPRING_STIFFNESS,
};

/// Frame-stepped scalar spring used for the heart's pulse.
///
/// One step per rendered frame, with `stiffness` and `damping` expressed per
/// step. With `damping` in (0, 1) the velocity loses a fixed fraction every
/// step, so the motion settles instead of ringing up.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            value: SPRING_REST,
            velocity: 0.0,
            target: SPRING_REST,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Default::default()
        }
    }

    pub fn step(&mut self) -> f32 {
        let force = (self.target - self.value) * self.stiffness;
        self.velocity = (self.velocity + force) * (1.0 - self.damping);
        self.value += self.velocity;
        self.value
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Kick the spring towards `peak`. Resetting the target is up to the caller.
    pub fn pulse(&mut self, peak: f32, nudge: f32) {
        self.target = peak;
        self.velocity += nudge;
    }

    pub fn is_settled(&self, tolerance: f32) -> bool {
        (self.target - self.value).abs() < tolerance && self.velocity.abs() < tolerance
    }
}

/// Cosmetic idle breathing, multiplied onto the spring value.
#[inline]
pub fn breathing(elapsed_sec: f32) -> f32 {
    1.0 + (elapsed_sec * BREATH_RATE).sin() * BREATH_AMPLITUDE
}
