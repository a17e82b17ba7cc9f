// src/test_utils.rs

//! This module contains utilities for testing.

use crate::HeadingCommand;

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f32 = 1e-5;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_close(target: f32, value: f32) -> bool {
    (target - value).abs() < TEST_TOLERANCE
}

/// Checks if two heading commands are close enough to be considered equal:
/// rotations within tolerance and forward flags identical.
///
/// # Arguments
/// * `target` - The target command.
/// * `value` - The command to compare against the target.
///
/// # Returns
/// `true` if the rotation components are close as per `value_close` and the
/// `go_forward` flags match, otherwise `false`.
pub fn command_close(target: HeadingCommand<f32>, value: HeadingCommand<f32>) -> bool {
    value_close(target.rotation, value.rotation) && target.go_forward == value.go_forward
}
