//! Orders disclosure of the hero content relative to the reveal animation.
//!
//! The sequencer owns the camera flight and the opening clouds so that the
//! content can only be shown once the obstructing animation has cleared it.

use crate::constants::{
    ENTER_FADE_SEC, OPENING_CLEARANCE_PROGRESS, REVEAL_REFRESH_FRAMES, SPLASH_MIN_SEC,
};
use crate::flight::{CameraFlight, FlightEvent, FlightPhase};
use crate::opening::OpeningCloud;
use crate::timeline::Timeline;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Camera flies in through the clouds; content shows on arrival.
    #[default]
    Flight,
    /// Camera stays put; content shows once the opening clouds have parted.
    CloudParting,
}

/// Disclosure milestones. Flags only ever go from false to true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub ready: bool,
    pub fading: bool,
    pub entered: bool,
    pub flying: bool,
    pub content_shown: bool,
    pub content_revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealTimer {
    SplashElapsed,
    BeginReveal,
}

pub struct RevealSequencer {
    mode: RevealMode,
    state: RevealState,
    flight: CameraFlight,
    opening: Vec<OpeningCloud>,
    opening_active: bool,
    assets_ready: bool,
    splash_elapsed: bool,
    refresh_countdown: Option<u8>,
    timeline: Timeline<RevealTimer>,
    fired: Vec<RevealTimer>,
}

impl RevealSequencer {
    pub fn new(mode: RevealMode, flight: CameraFlight, opening: Vec<OpeningCloud>, now: f64) -> Self {
        let mut timeline = Timeline::new();
        timeline.schedule(now, SPLASH_MIN_SEC, RevealTimer::SplashElapsed);
        Self {
            mode,
            state: RevealState::default(),
            flight,
            opening,
            opening_active: false,
            assets_ready: false,
            splash_elapsed: false,
            refresh_countdown: None,
            timeline,
            fired: Vec::new(),
        }
    }

    /// One-shot signal from the asset collaborator.
    pub fn on_assets_ready(&mut self) {
        self.assets_ready = true;
        self.refresh_ready();
    }

    /// Returns true if the enter action was accepted.
    pub fn on_enter(&mut self, now: f64) -> bool {
        if !self.state.ready || self.state.entered || self.timeline.is_disposed() {
            return false;
        }
        self.state.entered = true;
        self.state.fading = true;
        self.timeline
            .schedule(now, ENTER_FADE_SEC, RevealTimer::BeginReveal);
        log::info!("[reveal] entered ({:?})", self.mode);
        true
    }

    /// Fire timers that are due at `now`.
    pub fn poll(&mut self, now: f64) {
        let mut fired = std::mem::take(&mut self.fired);
        self.timeline.poll(now, &mut fired);
        for timer in fired.drain(..) {
            match timer {
                RevealTimer::SplashElapsed => {
                    self.splash_elapsed = true;
                    self.refresh_ready();
                }
                RevealTimer::BeginReveal => self.begin_reveal(),
            }
        }
        self.fired = fired;
    }

    /// Per-frame animation step for the flight and the opening clouds.
    pub fn update(&mut self, dt: f32) {
        let arrived = self.flight.update(dt) == Some(FlightEvent::Arrived);
        for cloud in &mut self.opening {
            cloud.update(dt, self.opening_active);
        }
        match self.mode {
            RevealMode::Flight if arrived => self.on_arrived(),
            RevealMode::CloudParting if self.opening_active && self.clouds_cleared() => {
                self.on_arrived()
            }
            _ => {}
        }
    }

    /// Called once per display refresh, before [`Self::update`].
    pub fn on_display_refresh(&mut self) {
        if let Some(n) = self.refresh_countdown {
            let n = n.saturating_sub(1);
            if n == 0 {
                self.refresh_countdown = None;
                self.state.content_revealed = true;
                log::debug!("[reveal] content revealed");
            } else {
                self.refresh_countdown = Some(n);
            }
        }
    }

    pub fn dispose(&mut self) {
        self.timeline.dispose();
        self.refresh_countdown = None;
    }

    fn refresh_ready(&mut self) {
        if !self.state.ready && self.assets_ready && self.splash_elapsed {
            self.state.ready = true;
            log::info!("[reveal] ready to enter");
        }
    }

    fn begin_reveal(&mut self) {
        self.opening_active = true;
        self.state.flying = true;
        if self.mode == RevealMode::Flight {
            if let Err(e) = self.flight.start() {
                log::warn!("[reveal] {e}");
            }
        }
    }

    fn clouds_cleared(&self) -> bool {
        self.opening
            .iter()
            .all(|c| c.progress() > OPENING_CLEARANCE_PROGRESS)
    }

    fn on_arrived(&mut self) {
        if self.state.content_shown {
            return;
        }
        self.state.content_shown = true;
        self.refresh_countdown = Some(REVEAL_REFRESH_FRAMES);
        log::info!("[reveal] content shown");
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn flight(&self) -> &CameraFlight {
        &self.flight
    }

    pub fn flight_phase(&self) -> FlightPhase {
        self.flight.phase()
    }

    pub fn opening_clouds(&self) -> &[OpeningCloud] {
        &self.opening
    }
}
