use thiserror::Error;

/// Caller-contract violations. The per-frame path never produces these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("flight duration must be positive and finite, got {0}")]
    InvalidDuration(f32),
    #[error("camera flight already started")]
    FlightAlreadyStarted,
}
