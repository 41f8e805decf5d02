use crate::constants::{CUE_VOLUME, MUSIC_VOLUME};

/// Sounds the scene asks the host to play. Playback is fire-and-forget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Looping background track, started on enter.
    Music,
    Enter,
    Accept,
    Reject,
    Tap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundRequest {
    pub cue: Cue,
    pub volume: f32,
}

impl SoundRequest {
    pub fn new(cue: Cue) -> Self {
        let volume = match cue {
            Cue::Music => MUSIC_VOLUME,
            _ => CUE_VOLUME,
        };
        Self { cue, volume }
    }
}
