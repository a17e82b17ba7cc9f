// src/pid/yaw.rs

//! # Yaw PID Control Module
//!
//! This module provides the compute function and control data structure
//! for the heading-hold yaw PID calculation.

use crate::Number;
use piddiy::PidController;

/// Control data for the yaw PID stabilization callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YawControlData<T> {
    /// Normalized heading error produced by the angular error resolver.
    pub error: T,
    /// The measured yaw rate, used directly as the derivative term.
    pub rate: T,
    /// Optional clamp on the integral accumulator, used to prevent integral
    /// windup. `None` leaves the accumulator unbounded.
    pub integral_limit: Option<T>,
}

/// Yaw PID stabilization compute callback.
///
/// The loop runs once per telemetry sample, so the accumulator sums the raw
/// error per cycle with no time scaling. The derivative is taken from the
/// measured yaw rate rather than from error history; the previous error is
/// still stored by the controller for extensibility.
pub fn compute_yaw<T: Number>(
    pid: &mut PidController<T, YawControlData<T>>,
    data: YawControlData<T>,
) -> (T, T, T) {
    let error = data.error;
    let integral = match data.integral_limit {
        Some(limit) => Number::clamp(pid.integral + error, -limit, limit),
        None => pid.integral + error,
    };
    let derivative = data.rate;

    (error, integral, derivative)
}
