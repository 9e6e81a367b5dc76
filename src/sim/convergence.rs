//! Alignment check between a unit's rotation and its target

use glam::Vec3;
use std::f32::consts::TAU;

/// True when every axis is within `tolerance` of the target.
///
/// An axis also passes when it sits one full turn away from the target
/// (`|diff - 2π| < tolerance`). Offsets of two or more turns do not pass;
/// callers that let rotation grow unbounded should wrap it first.
pub fn is_near_target(current: Vec3, target: Vec3, tolerance: f32) -> bool {
    current
        .to_array()
        .iter()
        .zip(target.to_array())
        .all(|(&value, goal)| axis_aligned(value, goal, tolerance))
}

#[inline]
fn axis_aligned(value: f32, goal: f32, tolerance: f32) -> bool {
    let diff = (value - goal).abs();
    diff < tolerance || (diff - TAU).abs() < tolerance
}
