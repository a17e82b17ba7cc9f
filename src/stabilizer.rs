// src/stabilizer.rs

//! # Heading Stabilization Module
//!
//! This module provides the shared stabilizer interface, configuration,
//! and the heading-hold controller built on it.

pub mod heading_stabilizer;
pub use heading_stabilizer::*;
pub mod heading_hold;
pub use heading_hold::*;
