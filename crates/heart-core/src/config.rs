//! Scene tuning gathered in one place, with viewport-responsive substitutions.

use crate::constants::*;
use crate::flight::Wobble;
use crate::pointer::Viewport;
use crate::reveal::RevealMode;
use glam::Vec3;

/// Values that change with the viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub camera_start: Vec3,
    pub heart_scale: f32,
}

impl Layout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.width < SMALL_VIEWPORT_MAX_WIDTH {
            Self {
                camera_start: vec3(CAMERA_START_SMALL),
                heart_scale: HEART_SCALE_SMALL,
            }
        } else {
            Self::default()
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            camera_start: vec3(CAMERA_START),
            heart_scale: HEART_SCALE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub mode: RevealMode,
    pub layout: Layout,
    pub camera_end: Vec3,
    pub flight_duration: f32,
    pub wobble: Wobble,
    pub heart_position: Vec3,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub pulse_peak: f32,
    pub pulse_nudge: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mode: RevealMode::default(),
            layout: Layout::default(),
            camera_end: vec3(CAMERA_END),
            flight_duration: FLIGHT_DURATION_SEC,
            wobble: Wobble {
                lateral: FLIGHT_WOBBLE_LATERAL,
                vertical: FLIGHT_WOBBLE_VERTICAL,
            },
            heart_position: vec3(HEART_POSITION),
            spring_stiffness: SPRING_STIFFNESS,
            spring_damping: SPRING_DAMPING,
            pulse_peak: PULSE_PEAK,
            pulse_nudge: PULSE_NUDGE,
        }
    }
}

impl SceneConfig {
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            layout: Layout::for_viewport(viewport),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }
}
