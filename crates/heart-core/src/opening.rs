//! Clouds that cover the centre of the view and part to reveal the heart.

use crate::constants::*;
use crate::scene::Transform;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Debug)]
pub struct OpeningCloud {
    pub side: Side,
    pub y: f32,
    pub z: f32,
    pub image: usize,
    progress: f32,
    transform: Transform,
    visible: bool,
}

impl OpeningCloud {
    pub fn new(side: Side, y: f32, z: f32, image: usize) -> Self {
        let mut cloud = Self {
            side,
            y,
            z,
            image,
            progress: 0.0,
            transform: Transform::default(),
            visible: true,
        };
        cloud.hold();
        cloud
    }

    pub fn defaults() -> Vec<OpeningCloud> {
        OPENING_CLOUDS
            .iter()
            .map(|&(side, y, z, image)| {
                let side = if side < 0.0 { Side::Left } else { Side::Right };
                OpeningCloud::new(side, y, z, image)
            })
            .collect()
    }

    /// Keep covering the centre until the reveal starts.
    fn hold(&mut self) {
        self.transform = Transform {
            position: Vec3::new(self.side.sign() * OPENING_COVER_X, self.y, self.z),
            scale: OPENING_SCALE,
        };
        self.visible = true;
    }

    pub fn update(&mut self, dt: f32, active: bool) {
        if !active {
            self.hold();
            return;
        }
        if dt.is_finite() && dt > 0.0 {
            self.progress = (self.progress + dt / OPENING_DURATION_SEC).min(1.0);
        }
        let eased = smoothstep(0.0, 1.0, self.progress);
        let sign = self.side.sign();
        let x = sign * OPENING_COVER_X + (sign * OPENING_END_X - sign * OPENING_COVER_X) * eased;
        self.transform = Transform {
            position: Vec3::new(x, self.y, self.z),
            scale: OPENING_SCALE,
        };
        self.visible = self.progress < OPENING_HIDE_PROGRESS;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
