//! Puzzle core
//!
//! All gameplay logic lives here. This module must stay pure and synchronous:
//! - State changes only through `store::apply`
//! - No rendering, timer or platform dependencies
//! - Stable unit order (display order from the chamber layout)

pub mod action;
pub mod controller;
pub mod convergence;
pub mod events;
pub mod state;
pub mod store;

pub use action::Action;
pub use controller::{DragPhase, InteractionController, PointerInput};
pub use convergence::is_near_target;
pub use events::{GameEvent, events_for};
pub use state::{CHAMBER_LAYOUT, GameState, PuzzleUnit, initial_puzzles};
pub use store::{Store, apply};
