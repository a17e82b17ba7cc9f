// src/stabilizer/heading_hold.rs

//! # Heading-Hold PID Stabilization Controller
//!
//! This module provides the owned, single-axis heading-hold controller.
//! Each control cycle resolves the wrap-aware angular error against the
//! stored target heading, runs the yaw PID update, and clamps the result to
//! the configured output limit. The controller holds the only mutable
//! control state in the system: the integral accumulator and the previous
//! error, both owned by the instance and mutated exclusively through
//! [`HeadingStabilizer::control`].
//!
//! The controller is single-threaded and synchronous. A host that runs
//! several control axes must give each axis its own instance; a
//! multi-threaded host must synchronize access externally.

use crate::heading::resolve;
use crate::pid::{compute_yaw, YawControlData};
use crate::{ConfigError, HeadingCommand, HeadingHoldConfig, HeadingStabilizer, Number};
use piddiy::PidController;

/// Struct representing the heading-hold PID stabilization controller.
pub struct HeadingHold<T: Number> {
    pid: PidController<T, YawControlData<T>>,
    output_limit: T,
    integral_limit: Option<T>,
}

impl<T: Number> HeadingHold<T> {
    /// Creates a new controller with neutral default settings.
    pub fn new() -> Self {
        Self::from_config(HeadingHoldConfig::new())
    }

    /// Creates a new controller using the provided configuration.
    ///
    /// Non-finite gains or target heading, and non-finite or negative
    /// limits, are rejected here so the control math never sees them.
    pub fn with_config(config: HeadingHoldConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: HeadingHoldConfig<T>) -> Self {
        let mut pid = PidController::new();
        pid.compute_fn(compute_yaw)
            .set_point(config.target_heading)
            .kp(config.kp)
            .ki(config.ki)
            .kd(config.kd);

        HeadingHold {
            pid,
            output_limit: config.output_limit,
            integral_limit: config.integral_limit,
        }
    }

    /// The target heading this controller steers toward, in radians.
    pub fn target_heading(&self) -> T {
        self.pid.set_point
    }
}

impl<T: Number> HeadingStabilizer<T> for HeadingHold<T> {
    fn control(&mut self, heading: T, heading_rate: T) -> HeadingCommand<T> {
        // Resolve the wrap-aware error against the stored target.
        let error = resolve(self.pid.set_point, heading);

        // Run the PID update on the normalized error and measured rate.
        let data = YawControlData {
            error: error.normalized,
            rate: heading_rate,
            integral_limit: self.integral_limit,
        };
        let output = self.pid.compute(data);

        // Saturate the rotation command to the actuator range.
        let rotation = Number::clamp(output, -self.output_limit, self.output_limit);

        HeadingCommand {
            rotation,
            go_forward: error.go_forward,
        }
    }
}
