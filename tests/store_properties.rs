//! Reducer invariants over random action sequences

use crystal_chambers::sim::{Action, GameState, apply, initial_puzzles};
use glam::Vec3;
use proptest::prelude::*;

fn puzzle_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("crystal-box-1".to_string()),
        Just("crystal-box-2".to_string()),
        Just("crystal-box-3".to_string()),
        Just("crystal-box-404".to_string()),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (puzzle_id(), -20.0f32..20.0, -20.0f32..20.0, -20.0f32..20.0)
            .prop_map(|(id, x, y, z)| Action::rotate(id, Vec3::new(x, y, z))),
        puzzle_id().prop_map(|id| Action::solve(id)),
        puzzle_id().prop_map(|id| Action::start_interaction(id)),
        puzzle_id().prop_map(|id| Action::end_interaction(id)),
        Just(Action::NextLevel),
        (0u64..100_000).prop_map(|seconds| Action::UpdateTime { seconds }),
        Just(Action::ToggleHints),
        Just(Action::ToggleSound),
        Just(Action::ResetGame),
        Just(Action::Unknown),
    ]
}

fn reachable_state() -> impl Strategy<Value = GameState> {
    prop::collection::vec(action(), 0..40).prop_map(|actions| {
        actions
            .iter()
            .fold(GameState::new(), |state, action| apply(&state, action))
    })
}

proptest! {
    #[test]
    fn apply_leaves_input_untouched(state in reachable_state(), action in action()) {
        let before = state.clone();
        let _ = apply(&state, &action);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn completion_tracks_all_solved(state in reachable_state(), action in action()) {
        let next = apply(&state, &action);
        prop_assert_eq!(next.is_game_complete, next.puzzles.iter().all(|p| p.solved));
    }

    #[test]
    fn at_most_one_unit_interacting(state in reachable_state(), action in action()) {
        let next = apply(&state, &action);
        prop_assert!(next.puzzles.iter().filter(|p| p.is_interacting).count() <= 1);
    }

    #[test]
    fn start_interaction_selects_named_unit(state in reachable_state(), idx in 0usize..3) {
        let id = state.puzzles[idx].id.clone();
        let next = apply(&state, &Action::start_interaction(id.as_str()));
        let interacting: Vec<&str> = next
            .puzzles
            .iter()
            .filter(|p| p.is_interacting)
            .map(|p| p.id.as_str())
            .collect();
        prop_assert_eq!(interacting, vec![id.as_str()]);
    }

    #[test]
    fn score_counts_solved_units_once(state in reachable_state(), action in action()) {
        let next = apply(&state, &action);
        prop_assert!(next.score >= state.score || matches!(action, Action::ResetGame));
        prop_assert_eq!(next.score % 100, 0);
        let newly_solved = next.solved_count().saturating_sub(state.solved_count()) as u64;
        if let Action::SolvePuzzle { .. } = action {
            prop_assert_eq!(next.score - state.score, newly_solved * 100);
        }
    }

    #[test]
    fn reset_yields_initial_configuration(state in reachable_state()) {
        prop_assert_eq!(apply(&state, &Action::ResetGame), GameState::new());
    }

    #[test]
    fn next_level_preserves_progress(state in reachable_state()) {
        let next = apply(&state, &Action::NextLevel);
        prop_assert_eq!(next.current_level, state.current_level + 1);
        prop_assert_eq!(next.score, state.score);
        prop_assert_eq!(next.time_elapsed, state.time_elapsed);
        prop_assert!(next.puzzles.iter().all(|p| !p.solved));
        prop_assert_eq!(next.puzzles, initial_puzzles());
    }

    #[test]
    fn geometry_never_changes(state in reachable_state()) {
        for (unit, reference) in state.puzzles.iter().zip(initial_puzzles()) {
            prop_assert_eq!(&unit.id, &reference.id);
            prop_assert_eq!(unit.position, reference.position);
            prop_assert_eq!(unit.target_rotation, reference.target_rotation);
        }
    }
}
