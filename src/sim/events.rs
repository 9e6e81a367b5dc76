//! Notable transitions, derived from an action and the snapshots around it
//!
//! The shell uses these for sound cues and logging; the core never reads them.

use super::action::Action;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A unit was picked up for dragging
    InteractionStarted { id: String },
    /// A unit became solved
    PuzzleSolved { id: String, score: u64 },
    /// The last unit of the level became solved
    ChamberUnlocked {
        level: u32,
        score: u64,
        time_elapsed: u64,
    },
    LevelAdvanced { level: u32 },
    GameReset,
    HintsToggled { shown: bool },
    SoundToggled { enabled: bool },
}

/// Events produced by applying `action` to `prev`, yielding `next`
pub fn events_for(action: &Action, prev: &GameState, next: &GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match action {
        Action::StartInteraction { id } => {
            let was = prev.puzzle(id).is_some_and(|p| p.is_interacting);
            let now = next.puzzle(id).is_some_and(|p| p.is_interacting);
            if now && !was {
                events.push(GameEvent::InteractionStarted { id: id.clone() });
            }
        }
        Action::SolvePuzzle { id } => {
            let was = prev.puzzle(id).is_some_and(|p| p.solved);
            let now = next.puzzle(id).is_some_and(|p| p.solved);
            if now && !was {
                events.push(GameEvent::PuzzleSolved {
                    id: id.clone(),
                    score: next.score,
                });
            }
            if next.is_game_complete && !prev.is_game_complete {
                events.push(GameEvent::ChamberUnlocked {
                    level: next.current_level,
                    score: next.score,
                    time_elapsed: next.time_elapsed,
                });
            }
        }
        Action::NextLevel => events.push(GameEvent::LevelAdvanced {
            level: next.current_level,
        }),
        Action::ResetGame => events.push(GameEvent::GameReset),
        Action::ToggleHints => events.push(GameEvent::HintsToggled {
            shown: next.show_hints,
        }),
        Action::ToggleSound => events.push(GameEvent::SoundToggled {
            enabled: next.sound_enabled,
        }),
        Action::RotatePuzzle { .. }
        | Action::EndInteraction { .. }
        | Action::UpdateTime { .. }
        | Action::Unknown => {}
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::store::apply;

    fn run(state: &GameState, action: Action) -> (GameState, Vec<GameEvent>) {
        let next = apply(state, &action);
        let events = events_for(&action, state, &next);
        (next, events)
    }

    #[test]
    fn test_solve_emits_once() {
        let (state, events) = run(&GameState::new(), Action::solve("crystal-box-1"));
        assert_eq!(
            events,
            [GameEvent::PuzzleSolved {
                id: "crystal-box-1".into(),
                score: 100
            }]
        );
        let (_, events) = run(&state, Action::solve("crystal-box-1"));
        assert!(events.is_empty());
    }

    #[test]
    fn test_last_solve_unlocks_chamber() {
        let (s, _) = run(&GameState::new(), Action::solve("crystal-box-1"));
        let (s, _) = run(&s, Action::solve("crystal-box-2"));
        let (_, events) = run(&s, Action::solve("crystal-box-3"));
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            GameEvent::ChamberUnlocked {
                level: 1,
                score: 300,
                ..
            }
        ));
    }

    #[test]
    fn test_repeated_start_interaction_is_silent() {
        let (s, events) = run(&GameState::new(), Action::start_interaction("crystal-box-2"));
        assert_eq!(events.len(), 1);
        let (_, events) = run(&s, Action::start_interaction("crystal-box-2"));
        assert!(events.is_empty());
    }

    #[test]
    fn test_level_and_reset_events() {
        let (s, events) = run(&GameState::new(), Action::NextLevel);
        assert_eq!(events, [GameEvent::LevelAdvanced { level: 2 }]);
        let (_, events) = run(&s, Action::ResetGame);
        assert_eq!(events, [GameEvent::GameReset]);
    }
}
