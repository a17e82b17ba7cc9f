// src/control_loop.rs

//! # Control Loop Module
//!
//! The driving loop around the heading-hold controller, with the two
//! collaborator seams kept outside the crate: a telemetry source producing
//! one attitude sample per cycle, and a command sink accepting the
//! actuation pair. The loop exclusively owns its controller; one
//! [`run_cycle`](ControlLoop::run_cycle) call performs exactly one strictly
//! sequential read → resolve → update → send pass.
//!
//! Non-finite telemetry is rejected here, before it can reach the pure
//! control math. A rejected cycle leaves the controller state untouched;
//! whether and when to run another cycle after any failure is the host's
//! decision.

use crate::stabilizer::HeadingHold;
use crate::{HeadingCommand, HeadingStabilizer, Number};

/// One attitude sample from the vehicle's telemetry stream.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttitudeSample<T> {
    /// The vehicle's current heading, in radians.
    pub heading: T,
    /// The vehicle's current yaw rate, in radians per second.
    pub heading_rate: T,
}

/// A blocking source of attitude samples.
///
/// Implementations wrap the vehicle-communication library's "read next
/// attitude" call; `next_sample` blocks until a sample arrives or the
/// transport fails.
pub trait AttitudeSource<T: Number> {
    /// Transport-specific failure type.
    type Error;

    /// Blocks until the next attitude sample is available.
    fn next_sample(&mut self) -> Result<AttitudeSample<T>, Self::Error>;
}

/// A sink for the per-cycle actuation command.
///
/// Implementations map the bounded rotation command and forward-thrust flag
/// onto the vehicle's channels; the [`rc`](crate::rc) module provides the
/// pulse-width arithmetic for RC-override transports.
pub trait CommandSink<T: Number> {
    /// Transport-specific failure type.
    type Error;

    /// Transmits one actuation command.
    fn send(&mut self, command: HeadingCommand<T>) -> Result<(), Self::Error>;
}

/// A control cycle failure.
///
/// Collaborator errors are passed through unchanged; the loop adds only the
/// non-finite sample rejection of its own boundary check.
#[derive(Debug)]
pub enum CycleError<S, K> {
    /// The telemetry source failed to produce a sample.
    Telemetry(S),
    /// The command sink failed to transmit the command.
    Actuation(K),
    /// The sample carried a NaN or infinite heading or rate and was
    /// rejected before touching controller state.
    NonFiniteSample,
}

/// The driving loop: one controller, one source, one sink.
pub struct ControlLoop<T: Number, S, K> {
    stabilizer: HeadingHold<T>,
    source: S,
    sink: K,
}

impl<T, S, K> ControlLoop<T, S, K>
where
    T: Number,
    S: AttitudeSource<T>,
    K: CommandSink<T>,
{
    /// Creates a loop that takes exclusive ownership of the controller and
    /// both collaborators.
    pub fn new(stabilizer: HeadingHold<T>, source: S, sink: K) -> Self {
        ControlLoop {
            stabilizer,
            source,
            sink,
        }
    }

    /// The owned heading-hold controller.
    pub fn stabilizer(&self) -> &HeadingHold<T> {
        &self.stabilizer
    }

    /// Runs one control cycle: read a sample, resolve and update, send the
    /// command. Returns the command that was sent.
    ///
    /// Cycles are independent; after an error the host may simply call
    /// `run_cycle` again and the controller resumes from its prior state.
    pub fn run_cycle(&mut self) -> Result<HeadingCommand<T>, CycleError<S::Error, K::Error>> {
        let sample = self.source.next_sample().map_err(CycleError::Telemetry)?;
        if !sample.heading.is_finite() || !sample.heading_rate.is_finite() {
            return Err(CycleError::NonFiniteSample);
        }

        let command = self
            .stabilizer
            .control(sample.heading, sample.heading_rate);
        self.sink.send(command).map_err(CycleError::Actuation)?;

        Ok(command)
    }
}
