//! Pointer-driven parallax for scene objects.
//!
//! Each object keeps its own [`ParallaxTarget`]; the scene steps every target
//! once per frame with the shared [`PointerState`].

use crate::constants::*;
use crate::pointer::PointerState;
use glam::Vec3;

/// Maps an object's depth to how far it follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strength {
    /// Hero object: constant strength regardless of depth.
    Fixed(f32),
    /// Background layer: `k / (depth * c1 + c2)`, so deeper layers move less.
    Layered { k: f32, c1: f32, c2: f32 },
}

impl Strength {
    pub fn clouds() -> Self {
        Strength::Layered {
            k: CLOUD_PARALLAX_K,
            c1: CLOUD_PARALLAX_C1,
            c2: CLOUD_PARALLAX_C2,
        }
    }

    #[inline]
    pub fn at_depth(&self, depth: f32) -> f32 {
        match *self {
            Strength::Fixed(s) => s,
            Strength::Layered { k, c1, c2 } => k / (depth * c1 + c2),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParallaxTarget {
    pub base_position: Vec3,
    pub depth: f32,
    pub strength: Strength,
    /// Scales the vertical offset relative to the horizontal one.
    pub vertical_ratio: f32,
    /// Fraction of the remaining distance covered per update, in (0, 1].
    pub smoothing: f32,
    pub current_position: Vec3,
}

impl ParallaxTarget {
    pub fn new(base_position: Vec3, depth: f32, strength: Strength, smoothing: f32) -> Self {
        Self {
            base_position,
            depth,
            strength,
            vertical_ratio: 1.0,
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
            current_position: base_position,
        }
    }

    pub fn heart(base_position: Vec3) -> Self {
        Self::new(
            base_position,
            0.0,
            Strength::Fixed(HEART_PARALLAX_STRENGTH),
            HEART_PARALLAX_SMOOTHING,
        )
    }

    pub fn cloud(base_position: Vec3, depth: f32) -> Self {
        Self {
            vertical_ratio: CLOUD_VERTICAL_RATIO,
            ..Self::new(base_position, depth, Strength::clouds(), 1.0)
        }
    }

    #[inline]
    pub fn strength(&self) -> f32 {
        self.strength.at_depth(self.depth)
    }

    /// Where the object settles for the given pointer.
    pub fn goal(&self, pointer: &PointerState) -> Vec3 {
        let s = self.strength();
        self.base_position + Vec3::new(pointer.x * s, pointer.y * s * self.vertical_ratio, 0.0)
    }

    pub fn update(&mut self, pointer: &PointerState) -> Vec3 {
        let goal = self.goal(pointer);
        self.current_position += (goal - self.current_position) * self.smoothing;
        self.current_position
    }
}
