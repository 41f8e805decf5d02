//! Scripted camera flight from the start position to the viewing position.

use crate::error::SceneError;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

// Relative slack for deltas that were rounded to f32 before reaching us.
const ARRIVAL_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    Idle,
    Flying,
    Arrived,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightEvent {
    Arrived,
}

/// Decorative path deviation, zero at both ends of the flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wobble {
    pub lateral: f32,
    pub vertical: f32,
}

impl Wobble {
    pub const NONE: Wobble = Wobble {
        lateral: 0.0,
        vertical: 0.0,
    };
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Debug)]
pub struct CameraFlight {
    start: Vec3,
    end: Vec3,
    duration: f32,
    wobble: Wobble,
    // Accumulated in f64 so long runs of tiny deltas still reach the duration.
    elapsed: f64,
    progress: f32,
    phase: FlightPhase,
    position: Vec3,
}

impl CameraFlight {
    pub fn new(start: Vec3, end: Vec3, duration: f32, wobble: Wobble) -> Result<Self, SceneError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(SceneError::InvalidDuration(duration));
        }
        Ok(Self {
            start,
            end,
            duration,
            wobble,
            elapsed: 0.0,
            progress: 0.0,
            phase: FlightPhase::Idle,
            position: start,
        })
    }

    pub fn start(&mut self) -> Result<(), SceneError> {
        if self.phase != FlightPhase::Idle {
            return Err(SceneError::FlightAlreadyStarted);
        }
        self.phase = FlightPhase::Flying;
        self.elapsed = 0.0;
        self.progress = 0.0;
        self.position = self.start;
        log::info!("[flight] start -> {:?} over {:.2}s", self.end, self.duration);
        Ok(())
    }

    /// Advance the flight; returns `Some(Arrived)` on the update that lands.
    pub fn update(&mut self, dt: f32) -> Option<FlightEvent> {
        match self.phase {
            FlightPhase::Idle => None,
            FlightPhase::Arrived => {
                self.position = self.end;
                None
            }
            FlightPhase::Flying => {
                if dt.is_finite() && dt > 0.0 {
                    self.elapsed += dt as f64;
                }
                let duration = self.duration as f64;
                self.progress = (self.elapsed / duration).min(1.0) as f32;
                if self.elapsed >= duration * (1.0 - ARRIVAL_TOLERANCE) {
                    self.progress = 1.0;
                    self.phase = FlightPhase::Arrived;
                    self.position = self.end;
                    log::info!("[flight] arrived");
                    return Some(FlightEvent::Arrived);
                }
                self.position = self.position_at(self.progress);
                None
            }
        }
    }

    pub fn position_at(&self, progress: f32) -> Vec3 {
        let eased = ease_out_cubic(progress);
        let fade = 1.0 - eased;
        let wobble = Vec3::new(
            (progress * TAU).sin() * self.wobble.lateral,
            (progress * PI).sin() * self.wobble.vertical,
            0.0,
        ) * fade;
        self.start.lerp(self.end, eased) + wobble
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn end_position(&self) -> Vec3 {
        self.end
    }

    /// Move the camera off the scripted path, e.g. a responsive layout nudge.
    /// Updates re-assert the scripted position afterwards.
    pub fn perturb(&mut self, position: Vec3) {
        self.position = position;
    }
}
