use crate::constants::{CHIME_ACCEPT, CHIME_ENTER, CHIME_REJECT, CHIME_TAP, MUSIC_PATH};
use heart_core::{Cue, SoundRequest};
use web_sys as web;

/// Fire-and-forget playback. Every failure is logged at debug level and
/// otherwise ignored; nothing here feeds back into the scene.
pub struct AudioBus {
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
    music: Option<web::HtmlAudioElement>,
    music_started: std::cell::Cell<bool>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Option<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Some(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            None
        }
    }
}

impl AudioBus {
    pub fn new() -> Self {
        let ctx = web::AudioContext::new()
            .map_err(|e| log::warn!("AudioContext error: {:?}", e))
            .ok();
        let master = ctx.as_ref().and_then(|c| {
            let g = create_gain(c, 1.0, "Master")?;
            _ = g.connect_with_audio_node(&c.destination());
            Some(g)
        });
        let music = web::HtmlAudioElement::new_with_src(MUSIC_PATH)
            .map_err(|e| log::warn!("music element error: {:?}", e))
            .ok();
        if let Some(m) = &music {
            m.set_loop(true);
        }
        Self {
            ctx,
            master,
            music,
            music_started: std::cell::Cell::new(false),
        }
    }

    pub fn play_all(&self, requests: &mut Vec<SoundRequest>) {
        for req in requests.drain(..) {
            self.play(req);
        }
    }

    pub fn play(&self, req: SoundRequest) {
        match req.cue {
            Cue::Music => self.start_music(req.volume),
            Cue::Enter => self.chime(CHIME_ENTER, req.volume, web::OscillatorType::Sine),
            Cue::Accept => self.chime(CHIME_ACCEPT, req.volume, web::OscillatorType::Triangle),
            Cue::Reject => self.chime(CHIME_REJECT, req.volume, web::OscillatorType::Sawtooth),
            Cue::Tap => self.chime(CHIME_TAP, req.volume, web::OscillatorType::Sine),
        }
    }

    fn start_music(&self, volume: f32) {
        if self.music_started.replace(true) {
            return;
        }
        if let Some(m) = &self.music {
            m.set_volume(volume as f64);
            // Autoplay policy may reject the promise; that is fine.
            if let Err(e) = m.play() {
                log::debug!("music play rejected: {:?}", e);
            }
        }
    }

    // A few short enveloped oscillator notes
    fn chime(&self, notes: &[(f32, f64, f64)], volume: f32, wave: web::OscillatorType) {
        let (Some(audio_ctx), Some(master)) = (&self.ctx, &self.master) else {
            return;
        };
        _ = audio_ctx.resume();
        let now = audio_ctx.current_time();
        for &(freq, offset, len) in notes {
            let Ok(src) = web::OscillatorNode::new(audio_ctx) else {
                continue;
            };
            src.set_type(wave);
            src.frequency().set_value(freq);
            let Some(g) = create_gain(audio_ctx, 0.0, "chime") else {
                continue;
            };
            let t0 = now + 0.005 + offset;
            _ = g.gain().linear_ramp_to_value_at_time(volume * 0.3, t0 + 0.02);
            _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + len);
            _ = src.connect_with_audio_node(&g);
            _ = g.connect_with_audio_node(master);
            _ = src.start_with_when(t0);
            _ = src.stop_with_when(t0 + len + 0.05);
        }
    }
}
