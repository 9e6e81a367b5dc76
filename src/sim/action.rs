//! Discrete actions accepted by the store
//!
//! The JSON form mirrors what the page script sends:
//! `{ "type": "ROTATE_PUZZLE", "puzzleId": "crystal-box-1", "rotation": [0, 1.2, 0] }`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Set a unit's rotation to an absolute value
    RotatePuzzle {
        #[serde(rename = "puzzleId")]
        id: String,
        rotation: Vec3,
    },
    /// Mark a unit solved and award the reward
    SolvePuzzle {
        #[serde(rename = "puzzleId")]
        id: String,
    },
    /// Begin dragging a unit (clears every other unit's interaction)
    StartInteraction {
        #[serde(rename = "puzzleId")]
        id: String,
    },
    EndInteraction {
        #[serde(rename = "puzzleId")]
        id: String,
    },
    /// Replay the chamber with every unit unsolved
    NextLevel,
    /// Absolute elapsed seconds
    UpdateTime {
        #[serde(rename = "time")]
        seconds: u64,
    },
    ToggleHints,
    ToggleSound,
    ResetGame,
    /// Any action kind this build does not know about
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn rotate(id: impl Into<String>, rotation: Vec3) -> Self {
        Action::RotatePuzzle {
            id: id.into(),
            rotation,
        }
    }

    pub fn solve(id: impl Into<String>) -> Self {
        Action::SolvePuzzle { id: id.into() }
    }

    pub fn start_interaction(id: impl Into<String>) -> Self {
        Action::StartInteraction { id: id.into() }
    }

    pub fn end_interaction(id: impl Into<String>) -> Self {
        Action::EndInteraction { id: id.into() }
    }

    /// Decode an action sent from script
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unit this action targets, if any
    pub fn puzzle_id(&self) -> Option<&str> {
        match self {
            Action::RotatePuzzle { id, .. }
            | Action::SolvePuzzle { id }
            | Action::StartInteraction { id }
            | Action::EndInteraction { id } => Some(id),
            _ => None,
        }
    }

    /// Actions that rebuild every unit from the reference layout
    pub fn rebuilds_puzzles(&self) -> bool {
        matches!(self, Action::NextLevel | Action::ResetGame)
    }
}
