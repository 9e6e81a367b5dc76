//! Game state store
//!
//! `apply` is the only way game state changes. It never touches its input:
//! every transition yields a fresh snapshot.

use super::action::Action;
use super::events::{GameEvent, events_for};
use super::state::{GameState, initial_puzzles};
use crate::consts::SOLVE_REWARD;

/// Apply one action to a snapshot, producing the next snapshot
pub fn apply(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();

    match action {
        Action::RotatePuzzle { id, rotation } => {
            if let Some(unit) = next.puzzles.iter_mut().find(|p| p.id == *id) {
                unit.rotation = *rotation;
            }
        }
        Action::SolvePuzzle { id } => {
            // Solving is once per unit per level; repeats never re-award
            let Some(unit) = next.puzzles.iter_mut().find(|p| p.id == *id) else {
                return next;
            };
            if unit.solved {
                return next;
            }
            unit.solved = true;
            unit.is_interacting = false;
            next.score += SOLVE_REWARD;
            next.is_game_complete = next.all_solved();
        }
        Action::StartInteraction { id } => {
            for unit in &mut next.puzzles {
                unit.is_interacting = unit.id == *id;
            }
        }
        Action::EndInteraction { id } => {
            if let Some(unit) = next.puzzles.iter_mut().find(|p| p.id == *id) {
                unit.is_interacting = false;
            }
        }
        Action::NextLevel => {
            next.current_level += 1;
            next.puzzles = initial_puzzles();
            next.is_game_complete = false;
        }
        Action::UpdateTime { seconds } => {
            next.time_elapsed = *seconds;
        }
        Action::ToggleHints => {
            next.show_hints = !next.show_hints;
        }
        Action::ToggleSound => {
            next.sound_enabled = !next.sound_enabled;
        }
        Action::ResetGame => {
            next = GameState::new();
        }
        Action::Unknown => {}
    }

    next
}

/// Owner of the canonical snapshot for one session
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: GameState,
    /// Number of actions applied so far
    revision: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }

    /// Start from an arbitrary snapshot (tests, replays)
    pub fn with_state(state: GameState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an action, replace the snapshot and report what happened
    pub fn dispatch(&mut self, action: &Action) -> Vec<GameEvent> {
        let next = apply(&self.state, action);
        let events = events_for(action, &self.state, &next);

        match action {
            Action::UpdateTime { .. } | Action::RotatePuzzle { .. } => {
                log::trace!("{:?}", action);
            }
            Action::Unknown => log::warn!("Ignoring unknown action"),
            _ => log::debug!(
                "{:?} -> level {}, score {}, solved {}/{}",
                action,
                next.current_level,
                next.score,
                next.solved_count(),
                next.puzzles.len()
            ),
        }

        self.state = next;
        self.revision += 1;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const FIRST: &str = "crystal-box-1";

    fn solve_all(state: &GameState) -> GameState {
        let ids: Vec<String> = state.puzzles.iter().map(|p| p.id.clone()).collect();
        ids.iter()
            .fold(state.clone(), |s, id| apply(&s, &Action::solve(id.as_str())))
    }

    #[test]
    fn test_rotate_sets_rotation() {
        let state = GameState::new();
        let rot = Vec3::new(FRAC_PI_2 - 0.05, FRAC_PI_4 + 0.05, 0.0);
        let next = apply(&state, &Action::rotate(FIRST, rot));
        assert_eq!(next.puzzle(FIRST).unwrap().rotation, rot);
        // input untouched
        assert_eq!(state.puzzle(FIRST).unwrap().rotation, Vec3::ZERO);
    }

    #[test]
    fn test_rotate_unknown_id_changes_nothing() {
        let state = GameState::new();
        let next = apply(&state, &Action::rotate("crystal-box-7", Vec3::ONE));
        assert_eq!(next, state);
    }

    #[test]
    fn test_solve_awards_once() {
        let state = GameState::new();
        let once = apply(&state, &Action::solve(FIRST));
        assert_eq!(once.score, 100);
        assert!(once.puzzle(FIRST).unwrap().solved);
        assert!(!once.is_game_complete);

        let twice = apply(&once, &Action::solve(FIRST));
        assert_eq!(twice.score, 100);
    }

    #[test]
    fn test_solve_clears_interaction() {
        let state = apply(&GameState::new(), &Action::start_interaction(FIRST));
        let next = apply(&state, &Action::solve(FIRST));
        assert!(!next.puzzle(FIRST).unwrap().is_interacting);
    }

    #[test]
    fn test_solve_all_completes_chamber() {
        let done = solve_all(&GameState::new());
        assert_eq!(done.score, 300);
        assert!(done.is_game_complete);
    }

    #[test]
    fn test_start_interaction_is_exclusive() {
        let state = apply(&GameState::new(), &Action::start_interaction(FIRST));
        let state = apply(&state, &Action::start_interaction("crystal-box-3"));
        let interacting: Vec<&str> = state
            .puzzles
            .iter()
            .filter(|p| p.is_interacting)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(interacting, ["crystal-box-3"]);
    }

    #[test]
    fn test_end_interaction_only_touches_named_unit() {
        let state = apply(&GameState::new(), &Action::start_interaction(FIRST));
        let next = apply(&state, &Action::end_interaction("crystal-box-2"));
        assert!(next.puzzle(FIRST).unwrap().is_interacting);
        let next = apply(&next, &Action::end_interaction(FIRST));
        assert!(next.interacting().is_none());
    }

    #[test]
    fn test_next_level_keeps_score_and_time() {
        let state = apply(&GameState::new(), &Action::UpdateTime { seconds: 75 });
        let state = apply(&state, &Action::rotate(FIRST, Vec3::splat(1.0)));
        let done = solve_all(&state);
        let next = apply(&done, &Action::NextLevel);
        assert_eq!(next.current_level, 2);
        assert_eq!(next.score, 300);
        assert_eq!(next.time_elapsed, 75);
        assert!(!next.is_game_complete);
        assert!(next.puzzles.iter().all(|p| !p.solved));
        assert_eq!(next.puzzles, initial_puzzles());
    }

    #[test]
    fn test_update_time_is_absolute() {
        let state = apply(&GameState::new(), &Action::UpdateTime { seconds: 10 });
        let state = apply(&state, &Action::UpdateTime { seconds: 11 });
        assert_eq!(state.time_elapsed, 11);
    }

    #[test]
    fn test_toggles() {
        let state = apply(&GameState::new(), &Action::ToggleHints);
        assert!(state.show_hints);
        let state = apply(&state, &Action::ToggleSound);
        assert!(!state.sound_enabled);
        let state = apply(&state, &Action::ToggleHints);
        assert!(!state.show_hints);
    }

    #[test]
    fn test_reset_restores_initial() {
        let state = solve_all(&GameState::new());
        let state = apply(&state, &Action::NextLevel);
        let state = apply(&state, &Action::ToggleSound);
        assert_eq!(apply(&state, &Action::ResetGame), GameState::new());
    }

    #[test]
    fn test_unknown_action_is_identity() {
        let state = apply(&GameState::new(), &Action::ToggleHints);
        assert_eq!(apply(&state, &Action::Unknown), state);
    }

    #[test]
    fn test_store_dispatch_counts_revisions() {
        let mut store = Store::new();
        store.dispatch(&Action::ToggleHints);
        store.dispatch(&Action::Unknown);
        assert_eq!(store.revision(), 2);
        assert!(store.state().show_hints);
    }
}
