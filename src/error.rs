//! Error types
//!
//! The puzzle core is total; errors only come from wiring mistakes and from
//! loading configuration or actions from text.

use std::fmt;

#[derive(Debug)]
pub enum GameError {
    /// Session state was accessed while no session was active
    NoActiveSession,
    /// A session was started while another one was still active
    SessionAlreadyActive,
    /// Tuning or action JSON could not be parsed
    Json(serde_json::Error),
    /// Tuning parsed but holds an unusable value
    InvalidTuning { field: &'static str, value: f32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoActiveSession => {
                write!(f, "game state accessed outside of an active session")
            }
            GameError::SessionAlreadyActive => write!(f, "a game session is already active"),
            GameError::Json(err) => write!(f, "invalid JSON: {err}"),
            GameError::InvalidTuning { field, value } => {
                write!(f, "tuning field `{field}` has invalid value {value}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Json(err)
    }
}
