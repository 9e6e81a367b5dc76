//! Game state and puzzle unit types
//!
//! Everything the presentation layer needs to draw a frame lives here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// One rotatable crystal cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleUnit {
    pub id: String,
    /// Set once per level, never cleared until the unit is rebuilt
    pub solved: bool,
    /// World placement
    pub position: Vec3,
    /// Current orientation (radians per axis, not wrapped)
    pub rotation: Vec3,
    /// Orientation that counts as solved
    pub target_rotation: Vec3,
    /// True while a pointer drag is manipulating this unit
    pub is_interacting: bool,
}

impl PuzzleUnit {
    pub fn new(id: impl Into<String>, position: Vec3, target_rotation: Vec3) -> Self {
        Self {
            id: id.into(),
            solved: false,
            position,
            rotation: Vec3::ZERO,
            target_rotation,
            is_interacting: false,
        }
    }
}

/// Reference chamber layout: (id, position, target rotation)
pub const CHAMBER_LAYOUT: [(&str, [f32; 3], [f32; 3]); 3] = [
    ("crystal-box-1", [0.0, 1.0, 0.0], [FRAC_PI_2, FRAC_PI_4, 0.0]),
    ("crystal-box-2", [-2.0, 1.0, 2.0], [0.0, PI, FRAC_PI_2]),
    ("crystal-box-3", [2.0, 1.0, -2.0], [FRAC_PI_4, FRAC_PI_2, FRAC_PI_4]),
];

/// Build the puzzle set for a fresh level
pub fn initial_puzzles() -> Vec<PuzzleUnit> {
    CHAMBER_LAYOUT
        .iter()
        .map(|&(id, position, target)| {
            PuzzleUnit::new(id, Vec3::from_array(position), Vec3::from_array(target))
        })
        .collect()
}

/// Complete session snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// 1-based level counter
    pub current_level: u32,
    pub score: u64,
    /// Seconds since the session started
    pub time_elapsed: u64,
    /// Display order
    pub puzzles: Vec<PuzzleUnit>,
    /// Derived: every puzzle solved
    pub is_game_complete: bool,
    pub show_hints: bool,
    pub sound_enabled: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The documented initial configuration
    pub fn new() -> Self {
        Self {
            current_level: 1,
            score: 0,
            time_elapsed: 0,
            puzzles: initial_puzzles(),
            is_game_complete: false,
            show_hints: false,
            sound_enabled: true,
        }
    }

    pub fn puzzle(&self, id: &str) -> Option<&PuzzleUnit> {
        self.puzzles.iter().find(|p| p.id == id)
    }

    /// The unit currently being dragged, if any
    pub fn interacting(&self) -> Option<&PuzzleUnit> {
        self.puzzles.iter().find(|p| p.is_interacting)
    }

    pub fn solved_count(&self) -> usize {
        self.puzzles.iter().filter(|p| p.solved).count()
    }

    pub fn all_solved(&self) -> bool {
        self.puzzles.iter().all(|p| p.solved)
    }

    /// Serialize for the presentation layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_configuration() {
        let state = GameState::new();
        assert_eq!(state.current_level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_elapsed, 0);
        assert!(!state.show_hints);
        assert!(state.sound_enabled);
        assert!(!state.is_game_complete);

        let ids: Vec<&str> = state.puzzles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["crystal-box-1", "crystal-box-2", "crystal-box-3"]);
        assert!(state.puzzles.iter().all(|p| !p.solved && !p.is_interacting));
        assert!(state.puzzles.iter().all(|p| p.rotation == Vec3::ZERO));
    }

    #[test]
    fn test_reference_targets() {
        let state = GameState::new();
        let second = state.puzzle("crystal-box-2").unwrap();
        assert_eq!(second.position, Vec3::new(-2.0, 1.0, 2.0));
        assert_eq!(second.target_rotation, Vec3::new(0.0, PI, FRAC_PI_2));
        assert!(state.puzzle("crystal-box-9").is_none());
    }

    #[test]
    fn test_snapshot_json_uses_camel_case() {
        let json = GameState::new().to_json().unwrap();
        assert!(json.contains("\"currentLevel\":1"));
        assert!(json.contains("\"targetRotation\""));
        assert!(json.contains("\"isInteracting\":false"));
    }
}
