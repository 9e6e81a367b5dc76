//! Heads-up display values derived from a snapshot
//!
//! Nothing here mutates state; the shell reads these after every update.

use crate::sim::{GameState, PuzzleUnit};

/// Hint panel contents, shown while `show_hints` is on
pub static HINT_LINES: [&str; 4] = [
    "Click a crystal to start rotating it",
    "Drag to turn the crystal toward its hidden angle",
    "A crystal glows green once it is unlocked",
    "Unlock every crystal to open the next chamber",
];

/// Elapsed seconds as `MM:SS` (minutes keep counting past 99)
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// (solved, total)
pub fn progress(state: &GameState) -> (usize, usize) {
    (state.solved_count(), state.puzzles.len())
}

/// Per-crystal dot in the progress panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitIndicator {
    Solved,
    Interacting,
    Idle,
}

impl UnitIndicator {
    pub fn of(unit: &PuzzleUnit) -> Self {
        if unit.solved {
            UnitIndicator::Solved
        } else if unit.is_interacting {
            UnitIndicator::Interacting
        } else {
            UnitIndicator::Idle
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            UnitIndicator::Solved => "indicator solved",
            UnitIndicator::Interacting => "indicator interacting",
            UnitIndicator::Idle => "indicator",
        }
    }
}

pub fn indicators(state: &GameState) -> Vec<UnitIndicator> {
    state.puzzles.iter().map(UnitIndicator::of).collect()
}

/// Completion overlay contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSummary {
    pub time: String,
    pub score: u64,
    pub level: u32,
}

/// Present only while the chamber is unlocked
pub fn completion(state: &GameState) -> Option<CompletionSummary> {
    state.is_game_complete.then(|| CompletionSummary {
        time: format_time(state.time_elapsed),
        score: state.score,
        level: state.current_level,
    })
}

/// Top-bar view model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudModel {
    pub time: String,
    pub score: u64,
    pub level: u32,
    pub solved: usize,
    pub total: usize,
    pub indicators: Vec<UnitIndicator>,
    pub hints: Option<&'static [&'static str]>,
    pub sound_enabled: bool,
    pub completion: Option<CompletionSummary>,
}

impl HudModel {
    pub fn from_state(state: &GameState) -> Self {
        let (solved, total) = progress(state);
        Self {
            time: format_time(state.time_elapsed),
            score: state.score,
            level: state.current_level,
            solved,
            total,
            indicators: indicators(state),
            hints: state.show_hints.then_some(&HINT_LINES[..]),
            sound_enabled: state.sound_enabled,
            completion: completion(state),
        }
    }
}
