//! Data-driven game balance
//!
//! Defaults match the reference puzzle. A partial JSON document overrides
//! only the fields it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    /// Radians per pixel of pointer travel
    pub drag_sensitivity: f32,
    /// Per-axis alignment tolerance (radians)
    pub solve_tolerance: f32,
    /// Wrap each axis into [-π, π) after every drag step
    pub normalize_rotation: bool,
    /// Clock period in milliseconds
    pub tick_interval_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            drag_sensitivity: DRAG_SENSITIVITY,
            solve_tolerance: SOLVE_TOLERANCE,
            normalize_rotation: true,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make the puzzle unplayable
    pub fn validate(&self) -> Result<(), GameError> {
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(GameError::InvalidTuning {
                field: "dragSensitivity",
                value: self.drag_sensitivity,
            });
        }
        if !self.solve_tolerance.is_finite() || self.solve_tolerance <= 0.0 {
            return Err(GameError::InvalidTuning {
                field: "solveTolerance",
                value: self.solve_tolerance,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidTuning {
                field: "tickIntervalMs",
                value: 0.0,
            });
        }
        Ok(())
    }
}
