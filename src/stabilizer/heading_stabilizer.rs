// src/stabilizer/heading_stabilizer.rs

//! A module specifying the shared interface for PID-based heading
//! stabilizers. This module is designed for embedded systems in no_std
//! environments and targets single-axis yaw control of remotely operated
//! vehicles. It includes a configuration structure for PID gains and
//! limits, the command type emitted each cycle, and a trait defining the
//! stabilization functionality.

use num_traits::{Float, FloatConst, NumCast};
use piddiy::Number as PiddiyNumber;

/// Custom trait to encapsulate base number requirements.
///
/// The angular error resolver needs trigonometry and the π/τ constants, so
/// the base `piddiy` requirements are widened with `Float` and `FloatConst`.
pub trait Number: PiddiyNumber + Float + FloatConst {
    /// Clamps generic PartialOrd values within a given range.
    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if max < self {
            max
        } else {
            self
        }
    }

    /// Builds a value from an `f64` configuration constant, falling back to
    /// zero when the target type cannot represent it.
    fn from_f64(value: f64) -> Self {
        NumCast::from(value).unwrap_or_else(Self::zero)
    }
}

impl<T: PiddiyNumber + Float + FloatConst> Number for T {}

/// Rejects configurations carrying values the control math cannot digest.
///
/// NaN and infinity are screened out here, at the construction boundary,
/// so the pure numeric core stays total and unvalidated.
#[derive(thiserror_no_std::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A PID gain was NaN or infinite. Negative and zero gains are valid.
    #[error("PID gain is not finite")]
    NonFiniteGain,
    /// The target heading was NaN or infinite.
    #[error("target heading is not finite")]
    NonFiniteTargetHeading,
    /// The output limit was NaN, infinite, or negative.
    #[error("output limit must be finite and non-negative")]
    InvalidOutputLimit,
    /// The configured integral limit was NaN, infinite, or negative.
    #[error("integral limit must be finite and non-negative")]
    InvalidIntegralLimit,
}

/// Configuration for PID gains and other settings.
#[derive(Clone, Copy)]
pub struct HeadingHoldConfig<T: Number> {
    /// Proportional gain for yaw control.
    pub kp: T,
    /// Integral gain for yaw control.
    pub ki: T,
    /// Derivative gain for yaw control.
    pub kd: T,
    /// The operator-specified target heading, in radians. Supplied once at
    /// construction; the controller does not re-read it per cycle.
    pub target_heading: T,
    /// Symmetric bound on the rotation command; output is clamped to
    /// `[-output_limit, output_limit]`.
    pub output_limit: T,
    /// Optional upper limit for the integral term to prevent integral
    /// windup. `None` reproduces the unbounded accumulator of the reference
    /// tuning.
    pub integral_limit: Option<T>,
}

impl<T: Number> HeadingHoldConfig<T> {
    /// Creates a new configuration with neutral default values. These
    /// should be replaced with values tuned for the vehicle.
    ///
    /// Example Usage
    /// ```
    /// use heading_hold::HeadingHoldConfig;
    ///
    /// let mut config = HeadingHoldConfig::<f32>::new();
    ///
    /// // Set the PID gains for yaw.
    /// config.kp = 35.0;
    /// config.ki = 0.05;
    /// config.kd = -10.0;
    ///
    /// // Set the operator-specified target heading, in radians.
    /// config.target_heading = 0.0;
    ///
    /// // Bound the rotation command to the actuator range.
    /// config.output_limit = 100.0;
    ///
    /// // Leave the integral accumulator unbounded, as tuned.
    /// config.integral_limit = None;
    ///
    /// // The configuration is ready to use.
    /// use heading_hold::HeadingHold;
    ///
    /// let stabilizer = HeadingHold::with_config(config).expect("valid configuration");
    /// ```
    pub fn new() -> Self {
        Self {
            kp: T::one(),
            ki: T::zero(),
            kd: T::zero(),
            target_heading: T::zero(),
            output_limit: T::one(),
            integral_limit: None,
        }
    }

    /// Checks the configuration for values the control math cannot digest.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.kp.is_finite() && self.ki.is_finite() && self.kd.is_finite()) {
            return Err(ConfigError::NonFiniteGain);
        }
        if !self.target_heading.is_finite() {
            return Err(ConfigError::NonFiniteTargetHeading);
        }
        if !self.output_limit.is_finite() || self.output_limit < T::zero() {
            return Err(ConfigError::InvalidOutputLimit);
        }
        if let Some(limit) = self.integral_limit {
            if !limit.is_finite() || limit < T::zero() {
                return Err(ConfigError::InvalidIntegralLimit);
            }
        }
        Ok(())
    }
}

/// The actuation pair emitted once per control cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeadingCommand<T> {
    /// Rotation command, clamped to `[-output_limit, output_limit]`.
    pub rotation: T,
    /// Whether forward thrust may be asserted this cycle.
    pub go_forward: bool,
}

/// A trait for PID-based heading stabilizers that turn heading and yaw-rate
/// measurements into a bounded actuation command.
pub trait HeadingStabilizer<T: Number> {
    /// Takes the current attitude measurements, then computes the actuation
    /// command for this cycle.
    ///
    /// - `heading`: the vehicle's current heading, in radians.
    /// - `heading_rate`: the measured yaw rate, in radians per second.
    ///
    /// Returns the bounded rotation command paired with the forward-thrust
    /// flag. Every call mutates controller state, even if the caller
    /// discards the command; there is no dry-run variant.
    fn control(&mut self, heading: T, heading_rate: T) -> HeadingCommand<T>;
}
