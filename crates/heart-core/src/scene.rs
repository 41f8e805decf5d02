//! The per-frame update function and the interaction entry points.
//!
//! [`Scene`] owns every animated object. A host calls [`Scene::update`] once
//! per rendered frame and forwards pointer/button events to the `on_*`
//! methods; it then reads transforms back for drawing. Nothing here blocks or
//! touches platform APIs.

use crate::audio::{Cue, SoundRequest};
use crate::camera::{Camera, CameraPose};
use crate::celebration::Celebration;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::drift::DriftParams;
use crate::error::SceneError;
use crate::evasive::{EvasiveControl, Placement};
use crate::flight::{CameraFlight, FlightPhase};
use crate::opening::OpeningCloud;
use crate::parallax::ParallaxTarget;
use crate::pointer::{ray_sphere, PointerState, Viewport};
use crate::reveal::{RevealMode, RevealSequencer, RevealState};
use crate::spring::{breathing, Spring};
use crate::timeline::{Timeline, TimerId};
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Position and uniform scale read by the renderer every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Heart {
    pub parallax: ParallaxTarget,
    pub spring: Spring,
    pub base_scale: f32,
    glow: bool,
    transform: Transform,
}

impl Heart {
    fn new(config: &SceneConfig) -> Self {
        let parallax = ParallaxTarget::heart(config.heart_position);
        Self {
            transform: Transform {
                position: parallax.current_position,
                scale: config.layout.heart_scale,
            },
            parallax,
            spring: Spring::new(config.spring_stiffness, config.spring_damping),
            base_scale: config.layout.heart_scale,
            glow: false,
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn glow(&self) -> bool {
        self.glow
    }
}

#[derive(Clone, Debug)]
pub struct BackgroundCloud {
    pub parallax: ParallaxTarget,
    pub drift: DriftParams,
    pub base_scale: f32,
    pub opacity: f32,
    pub image: usize,
    transform: Transform,
}

impl BackgroundCloud {
    pub fn transform(&self) -> Transform {
        self.transform
    }

    fn update(&mut self, pointer: &PointerState, elapsed_sec: f32) {
        let p = self.parallax.update(pointer);
        let d: Vec2 = self.drift.offset(elapsed_sec);
        self.transform = Transform {
            position: p + d.extend(0.0),
            scale: self.base_scale,
        };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SceneTimer {
    PulseRelease,
    GlowRelease,
    HideConfetti,
}

pub struct Scene {
    config: SceneConfig,
    clock: f64,
    pointer: PointerState,
    heart: Heart,
    clouds: Vec<BackgroundCloud>,
    sequencer: RevealSequencer,
    evasive: EvasiveControl,
    celebration: Celebration,
    rng: StdRng,
    timeline: Timeline<SceneTimer>,
    fired: Vec<SceneTimer>,
    pulse_timer: Option<TimerId>,
    glow_timer: Option<TimerId>,
    confetti_timer: Option<TimerId>,
    disposed: bool,
}

impl Scene {
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, SceneError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let flight_start = match config.mode {
            RevealMode::Flight => config.layout.camera_start,
            RevealMode::CloudParting => config.camera_end,
        };
        let flight = CameraFlight::new(
            flight_start,
            config.camera_end,
            config.flight_duration,
            config.wobble,
        )?;
        let clouds = BACKGROUND_CLOUDS
            .iter()
            .map(|&(x, y, z, scale, opacity, depth, image)| {
                let base = Vec3::new(x, y, z);
                BackgroundCloud {
                    parallax: ParallaxTarget::cloud(base, depth),
                    drift: DriftParams::sample(&mut rng),
                    base_scale: scale,
                    opacity,
                    image,
                    transform: Transform {
                        position: base,
                        scale,
                    },
                }
            })
            .collect::<Vec<_>>();
        let celebration = Celebration::new(&mut rng);
        let sequencer = RevealSequencer::new(config.mode, flight, OpeningCloud::defaults(), 0.0);
        log::info!(
            "[scene] mode={:?} clouds={} seed={}",
            config.mode,
            clouds.len(),
            seed
        );
        Ok(Self {
            heart: Heart::new(&config),
            config,
            clock: 0.0,
            pointer: PointerState::default(),
            clouds,
            sequencer,
            evasive: EvasiveControl::default(),
            celebration,
            rng,
            timeline: Timeline::new(),
            fired: Vec::new(),
            pulse_timer: None,
            glow_timer: None,
            confetti_timer: None,
            disposed: false,
        })
    }

    /// Advance everything by `dt` seconds. Call once per rendered frame.
    pub fn update(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.clock += dt as f64;

        self.sequencer.on_display_refresh();
        self.sequencer.poll(self.clock);
        self.poll_timers();
        self.sequencer.update(dt);

        let elapsed = self.clock as f32;
        let pos = self.heart.parallax.update(&self.pointer);
        let pulse = self.heart.spring.step();
        self.heart.transform = Transform {
            position: pos,
            scale: self.heart.base_scale * pulse * breathing(elapsed),
        };
        for cloud in &mut self.clouds {
            cloud.update(&self.pointer, elapsed);
        }
    }

    fn poll_timers(&mut self) {
        let mut fired = std::mem::take(&mut self.fired);
        self.timeline.poll(self.clock, &mut fired);
        for timer in fired.drain(..) {
            match timer {
                SceneTimer::PulseRelease => {
                    self.pulse_timer = None;
                    self.heart.spring.set_target(SPRING_REST);
                }
                SceneTimer::GlowRelease => {
                    self.glow_timer = None;
                    self.heart.glow = false;
                }
                SceneTimer::HideConfetti => {
                    self.confetti_timer = None;
                    self.celebration.hide_confetti();
                }
            }
        }
        self.fired = fired;
    }

    fn reschedule(&mut self, slot: Option<TimerId>, delay: f64, timer: SceneTimer) -> Option<TimerId> {
        if let Some(id) = slot {
            self.timeline.cancel(id);
        }
        self.timeline.schedule(self.clock, delay, timer)
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, viewport: Viewport) {
        self.pointer.on_move(client_x, client_y, viewport);
    }

    pub fn on_assets_ready(&mut self) {
        self.sequencer.on_assets_ready();
    }

    pub fn on_enter(&mut self, sounds: &mut Vec<SoundRequest>) -> bool {
        if self.disposed || !self.sequencer.on_enter(self.clock) {
            return false;
        }
        sounds.push(SoundRequest::new(Cue::Music));
        sounds.push(SoundRequest::new(Cue::Enter));
        true
    }

    pub fn on_accept(&mut self, sounds: &mut Vec<SoundRequest>) -> bool {
        if !self.interactive() {
            return false;
        }
        self.celebration.celebrate();
        self.confetti_timer = self.reschedule(
            self.confetti_timer,
            CONFETTI_VISIBLE_SEC,
            SceneTimer::HideConfetti,
        );
        sounds.push(SoundRequest::new(Cue::Accept));
        log::info!("[scene] accepted");
        true
    }

    pub fn on_reject(&mut self, sounds: &mut Vec<SoundRequest>) -> Option<Placement> {
        if !self.interactive() {
            return None;
        }
        let placement = self.evasive.activate(&mut self.rng)?;
        sounds.push(SoundRequest::new(Cue::Reject));
        Some(placement)
    }

    pub fn close_modal(&mut self) {
        self.celebration.close_modal();
    }

    /// Pulse the heart. Ignored until the heart is on screen.
    pub fn tap_heart(&mut self, sounds: &mut Vec<SoundRequest>) -> bool {
        if !self.interactive() {
            return false;
        }
        self.heart
            .spring
            .pulse(self.config.pulse_peak, self.config.pulse_nudge);
        self.heart.glow = true;
        self.pulse_timer = self.reschedule(self.pulse_timer, PULSE_RESET_SEC, SceneTimer::PulseRelease);
        self.glow_timer = self.reschedule(self.glow_timer, GLOW_RESET_SEC, SceneTimer::GlowRelease);
        sounds.push(SoundRequest::new(Cue::Tap));
        true
    }

    /// Pointer-down at normalized device coordinates; taps the heart on a hit.
    pub fn on_pointer_down(
        &mut self,
        ndc_x: f32,
        ndc_y: f32,
        aspect: f32,
        sounds: &mut Vec<SoundRequest>,
    ) -> bool {
        if !self.interactive() {
            return false;
        }
        let camera = Camera::from_pose(self.camera(), aspect);
        let (ro, rd) = camera.ray_through_ndc(ndc_x, ndc_y);
        let radius = HEART_PICK_RADIUS * self.heart.base_scale / HEART_SCALE;
        match ray_sphere(ro, rd, self.heart.transform.position, radius) {
            Some(_) => self.tap_heart(sounds),
            None => false,
        }
    }

    /// Cancel pending timers; the scene ignores everything afterwards.
    pub fn dispose(&mut self) {
        self.timeline.dispose();
        self.sequencer.dispose();
        self.pulse_timer = None;
        self.glow_timer = None;
        self.confetti_timer = None;
        self.disposed = true;
        log::info!("[scene] disposed");
    }

    /// Page hidden by the host. A page kept for back/forward navigation
    /// resumes later, so only a real unload disposes.
    pub fn on_page_hide(&mut self, persisted: bool) {
        if persisted {
            log::debug!("[scene] page hidden but kept, not disposing");
            return;
        }
        self.dispose();
    }

    fn interactive(&self) -> bool {
        !self.disposed && self.sequencer.state().content_shown
    }

    pub fn camera(&self) -> CameraPose {
        CameraPose {
            eye: self.sequencer.flight().position(),
            target: self.config.heart_position,
        }
    }

    pub fn flight_phase(&self) -> FlightPhase {
        self.sequencer.flight_phase()
    }

    pub fn heart(&self) -> &Heart {
        &self.heart
    }

    pub fn heart_visible(&self) -> bool {
        self.sequencer.state().content_shown
    }

    pub fn background_clouds(&self) -> &[BackgroundCloud] {
        &self.clouds
    }

    pub fn opening_clouds(&self) -> &[OpeningCloud] {
        self.sequencer.opening_clouds()
    }

    pub fn reveal(&self) -> RevealState {
        self.sequencer.state()
    }

    pub fn evasive(&self) -> &EvasiveControl {
        &self.evasive
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
