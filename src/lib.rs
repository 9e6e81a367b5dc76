//! Crystal Chambers - rotate every crystal into place to unlock the chamber
//!
//! Core modules:
//! - `sim`: Pure puzzle core (state, reducer, drag controller, convergence)
//! - `session`: One game session wiring the store to pointer input and the clock
//! - `tuning`: Data-driven game balance
//! - `hud` / `view`: Values the presentation layer derives from a snapshot
//! - `audio`: Procedural sound effects (web only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod hud;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod view;

pub use error::GameError;
pub use session::{Session, SessionScope};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Score awarded each time a crystal becomes solved
    pub const SOLVE_REWARD: u64 = 100;
    /// Radians of rotation per pixel of pointer travel
    pub const DRAG_SENSITIVITY: f32 = 0.01;
    /// Per-axis tolerance (radians) for a crystal to count as aligned
    pub const SOLVE_TOLERANCE: f32 = 0.2;
    /// Clock tick period for the elapsed-time counter
    pub const TICK_INTERVAL_MS: u32 = 1000;
    /// World units to CSS pixels
    pub const WORLD_TO_PX: f32 = 100.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return angle;
    }
    // rem_euclid may round up to TAU itself
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped >= PI { -PI } else { wrapped }
}

/// Radians to degrees (CSS rotate functions take degrees)
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}
