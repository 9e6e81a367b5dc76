//! Pointer-drag interaction for a single crystal
//!
//! ```text
//! Idle --down--> Dragging --move--> Dragging --up/cancel--> Idle
//!   any --rotation aligned with target--> Solved (input ignored)
//! ```
//!
//! The controller dispatches straight into the store it is handed, and runs
//! the alignment check right after every rotation it writes.

use glam::{Vec2, Vec3};

use super::action::Action;
use super::convergence::is_near_target;
use super::events::GameEvent;
use super::state::PuzzleUnit;
use super::store::Store;
use crate::normalize_angle;
use crate::tuning::Tuning;

/// Pointer input addressed to one unit, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// Pointer left the element or the browser cancelled the gesture
    Cancel,
}

/// Drag lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    /// Holding the unit; `last` is the baseline for the next delta
    Dragging { last: Vec2 },
    /// Terminal for this level
    Solved,
}

/// Drag state machine for one unit
#[derive(Debug, Clone)]
pub struct InteractionController {
    puzzle_id: String,
    phase: DragPhase,
    sensitivity: f32,
    tolerance: f32,
    normalize: bool,
}

impl InteractionController {
    pub fn new(puzzle_id: impl Into<String>, tuning: &Tuning) -> Self {
        Self {
            puzzle_id: puzzle_id.into(),
            phase: DragPhase::Idle,
            sensitivity: tuning.drag_sensitivity,
            tolerance: tuning.solve_tolerance,
            normalize: tuning.normalize_rotation,
        }
    }

    pub fn puzzle_id(&self) -> &str {
        &self.puzzle_id
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Drop an in-progress drag without dispatching anything.
    ///
    /// Used when another unit grabbed the pointer; the store already
    /// cleared this unit's interaction flag.
    pub fn release(&mut self) {
        if self.is_dragging() {
            self.phase = DragPhase::Idle;
        }
    }

    /// Feed one pointer event, dispatching the resulting actions
    pub fn handle(&mut self, store: &mut Store, input: PointerInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let Some(unit) = self.unit(store).cloned() else {
            log::debug!("No unit '{}' in store, ignoring input", self.puzzle_id);
            return events;
        };
        if unit.solved {
            self.phase = DragPhase::Solved;
            return events;
        }

        match (self.phase, input) {
            (DragPhase::Solved, _) => {}
            (DragPhase::Idle, PointerInput::Down { x, y }) => {
                self.phase = DragPhase::Dragging {
                    last: Vec2::new(x, y),
                };
                events.extend(store.dispatch(&Action::start_interaction(&self.puzzle_id)));
            }
            (DragPhase::Dragging { .. }, PointerInput::Down { x, y }) => {
                // Re-anchor; the unit is already marked interacting
                self.phase = DragPhase::Dragging {
                    last: Vec2::new(x, y),
                };
            }
            (DragPhase::Dragging { last }, PointerInput::Move { x, y }) => {
                let pointer = Vec2::new(x, y);
                let rotation = self.drag_rotation(unit.rotation, pointer - last);
                self.phase = DragPhase::Dragging { last: pointer };
                events.extend(store.dispatch(&Action::rotate(&self.puzzle_id, rotation)));
                events.extend(self.observe(store));
            }
            (DragPhase::Dragging { .. }, PointerInput::Up | PointerInput::Cancel) => {
                self.phase = DragPhase::Idle;
                events.extend(store.dispatch(&Action::end_interaction(&self.puzzle_id)));
            }
            (DragPhase::Idle, PointerInput::Move { .. } | PointerInput::Up | PointerInput::Cancel) => {}
        }

        events
    }

    /// Run the alignment check against the store's current snapshot.
    ///
    /// Dispatches `SolvePuzzle` the first time the unit lines up; later
    /// calls on a solved unit do nothing.
    pub fn observe(&mut self, store: &mut Store) -> Vec<GameEvent> {
        let Some(unit) = self.unit(store) else {
            return Vec::new();
        };
        if unit.solved {
            self.phase = DragPhase::Solved;
            return Vec::new();
        }
        if !is_near_target(unit.rotation, unit.target_rotation, self.tolerance) {
            return Vec::new();
        }

        log::info!(
            "Crystal '{}' aligned at {:?} (target {:?})",
            unit.id,
            unit.rotation,
            unit.target_rotation
        );
        self.phase = DragPhase::Solved;
        store.dispatch(&Action::solve(&self.puzzle_id))
    }

    /// Current rotation plus a pointer delta: vertical travel turns about X,
    /// horizontal travel about Y, Z is never driven.
    fn drag_rotation(&self, current: Vec3, delta: Vec2) -> Vec3 {
        let rotation = current + Vec3::new(delta.y, delta.x, 0.0) * self.sensitivity;
        if self.normalize {
            Vec3::new(
                normalize_angle(rotation.x),
                normalize_angle(rotation.y),
                normalize_angle(rotation.z),
            )
        } else {
            rotation
        }
    }

    fn unit<'a>(&self, store: &'a Store) -> Option<&'a PuzzleUnit> {
        store.state().puzzle(&self.puzzle_id)
    }
}
