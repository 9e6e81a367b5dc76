//! One game session: the store, a drag controller per crystal, and the clock
//!
//! The shell owns a `SessionScope` and hands it to every event handler.
//! Reaching for the session while none is active is a wiring bug, so it
//! surfaces as an error instead of a silent default.

use crate::error::GameError;
use crate::sim::{
    Action, DragPhase, GameEvent, GameState, InteractionController, PointerInput, Store,
};
use crate::tuning::Tuning;

/// A running game
#[derive(Debug, Clone)]
pub struct Session {
    store: Store,
    controllers: Vec<InteractionController>,
    tuning: Tuning,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        let store = Store::new();
        let controllers = Self::build_controllers(store.state(), &tuning);
        Self {
            store,
            controllers,
            tuning,
        }
    }

    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Drag phase for a unit, if it exists
    pub fn drag_phase(&self, id: &str) -> Option<DragPhase> {
        self.controllers
            .iter()
            .find(|c| c.puzzle_id() == id)
            .map(InteractionController::phase)
    }

    /// Apply an action from outside the pointer path (buttons, script, clock).
    ///
    /// Every controller re-checks alignment afterwards, so a rotation written
    /// here solves its unit just like a drag would.
    pub fn dispatch(&mut self, action: Action) -> Vec<GameEvent> {
        let mut events = self.store.dispatch(&action);

        if action.rebuilds_puzzles() {
            self.controllers = Self::build_controllers(self.store.state(), &self.tuning);
        } else if let Action::StartInteraction { id } = &action {
            self.release_others(id);
        }

        for controller in &mut self.controllers {
            events.extend(controller.observe(&mut self.store));
        }
        self.log_events(&events);
        events
    }

    /// Grab a crystal. Other drags are dropped only once this one starts;
    /// a press on a solved crystal leaves the current drag alone.
    pub fn pointer_down(&mut self, id: &str, x: f32, y: f32) -> Vec<GameEvent> {
        let events = self.pointer(id, PointerInput::Down { x, y });
        if matches!(self.drag_phase(id), Some(DragPhase::Dragging { .. })) {
            self.release_others(id);
        }
        events
    }

    pub fn pointer_move(&mut self, id: &str, x: f32, y: f32) -> Vec<GameEvent> {
        self.pointer(id, PointerInput::Move { x, y })
    }

    pub fn pointer_up(&mut self, id: &str) -> Vec<GameEvent> {
        self.pointer(id, PointerInput::Up)
    }

    /// Pointer left the crystal mid-drag
    pub fn pointer_cancel(&mut self, id: &str) -> Vec<GameEvent> {
        self.pointer(id, PointerInput::Cancel)
    }

    /// One clock period elapsed
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let seconds = self.state().time_elapsed + 1;
        self.dispatch(Action::UpdateTime { seconds })
    }

    pub fn toggle_hints(&mut self) -> Vec<GameEvent> {
        self.dispatch(Action::ToggleHints)
    }

    pub fn toggle_sound(&mut self) -> Vec<GameEvent> {
        self.dispatch(Action::ToggleSound)
    }

    pub fn next_level(&mut self) -> Vec<GameEvent> {
        self.dispatch(Action::NextLevel)
    }

    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.dispatch(Action::ResetGame)
    }

    fn pointer(&mut self, id: &str, input: PointerInput) -> Vec<GameEvent> {
        let Some(controller) = self.controllers.iter_mut().find(|c| c.puzzle_id() == id) else {
            log::debug!("Pointer input for unknown crystal '{}'", id);
            return Vec::new();
        };
        let events = controller.handle(&mut self.store, input);
        self.log_events(&events);
        events
    }

    /// Only one crystal may be held at a time
    fn release_others(&mut self, id: &str) {
        for controller in &mut self.controllers {
            if controller.puzzle_id() != id {
                controller.release();
            }
        }
    }

    fn build_controllers(state: &GameState, tuning: &Tuning) -> Vec<InteractionController> {
        state
            .puzzles
            .iter()
            .map(|unit| InteractionController::new(unit.id.as_str(), tuning))
            .collect()
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ChamberUnlocked {
                    level,
                    score,
                    time_elapsed,
                } => log::info!(
                    "Chamber {} unlocked in {}s (score {})",
                    level,
                    time_elapsed,
                    score
                ),
                GameEvent::LevelAdvanced { level } => log::info!("Entering level {}", level),
                GameEvent::GameReset => log::info!("Game reset"),
                other => log::debug!("{:?}", other),
            }
        }
    }
}

/// Slot holding the active session, if any
#[derive(Debug, Default)]
pub struct SessionScope {
    active: Option<Session>,
}

impl SessionScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a session. Fails if one is already running.
    pub fn begin(&mut self, tuning: Tuning) -> Result<&mut Session, GameError> {
        if self.active.is_some() {
            log::error!("Tried to begin a session while one is active");
            return Err(GameError::SessionAlreadyActive);
        }
        log::info!("Session started");
        Ok(self.active.insert(Session::new(tuning)))
    }

    /// End the active session, handing it back
    pub fn end(&mut self) -> Option<Session> {
        let ended = self.active.take();
        if ended.is_some() {
            log::info!("Session ended");
        }
        ended
    }

    pub fn session(&self) -> Result<&Session, GameError> {
        self.active.as_ref().ok_or_else(Self::no_session)
    }

    pub fn session_mut(&mut self) -> Result<&mut Session, GameError> {
        self.active.as_mut().ok_or_else(Self::no_session)
    }

    fn no_session() -> GameError {
        log::error!("Game state accessed outside of an active session");
        GameError::NoActiveSession
    }
}
