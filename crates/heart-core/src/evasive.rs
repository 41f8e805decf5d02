use crate::constants::{EVASIVE_BASE_RADIUS, EVASIVE_MAX_MOVES, EVASIVE_RADIUS_STEP};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Where the control moved to after one activation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub moves: u32,
    pub radius: f32,
    /// Offset from the viewport centre in CSS pixels.
    pub offset: Vec2,
    pub hidden: bool,
}

/// The rejecting control that runs away a bit further each time and then
/// disappears. Placement depends only on the activation count and a random
/// angle; no path history is kept.
#[derive(Clone, Debug)]
pub struct EvasiveControl {
    base_radius: f32,
    step: f32,
    max_moves: u32,
    moves: u32,
    offset: Vec2,
    hidden: bool,
}

impl Default for EvasiveControl {
    fn default() -> Self {
        Self::new(EVASIVE_BASE_RADIUS, EVASIVE_RADIUS_STEP, EVASIVE_MAX_MOVES)
    }
}

impl EvasiveControl {
    pub fn new(base_radius: f32, step: f32, max_moves: u32) -> Self {
        Self {
            base_radius,
            step,
            max_moves,
            moves: 0,
            offset: Vec2::ZERO,
            hidden: false,
        }
    }

    #[inline]
    pub fn radius_for(&self, moves: u32) -> f32 {
        self.base_radius + moves as f32 * self.step
    }

    /// Returns `None` once the control is hidden.
    pub fn activate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Placement> {
        if self.hidden {
            return None;
        }
        self.moves += 1;
        let radius = self.radius_for(self.moves);
        let angle = rng.gen_range(0.0..TAU);
        self.offset = Vec2::new(angle.cos(), angle.sin()) * radius;
        if self.moves >= self.max_moves {
            self.hidden = true;
            log::info!("[evasive] hidden after {} moves", self.moves);
        }
        Some(Placement {
            moves: self.moves,
            radius,
            offset: self.offset,
            hidden: self.hidden,
        })
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current offset; only meaningful once the control has moved.
    pub fn offset(&self) -> Option<Vec2> {
        (self.moves > 0).then_some(self.offset)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
