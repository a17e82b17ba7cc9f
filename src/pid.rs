// src/pid.rs

//! # PID Control Module
//!
//! This module provides the compute function and control data structure
//! used to perform the yaw PID (Proportional-Integral-Derivative) control
//! calculation.

pub mod yaw;
pub use yaw::*;
