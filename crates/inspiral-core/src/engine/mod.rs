//! # Simulation Engine Module
//!
//! This module contains the machinery that drives a binary black hole
//! simulation: configuration, numerical integration, merger handling,
//! progress reporting, result assembly, and export.
//!
//! ## Key Components
//!
//! - `config`: Validated simulation parameters and a fluent builder.
//! - `error`: The top-level `EngineError` returned by workflows.
//! - `export`: JSON and CSV writers for finished simulation results.
//! - `integrator`: The RK4 stepper and adaptive timestep control.
//! - `merger`: Merger detection and remnant construction.
//! - `progress`: Callback-based progress reporting for long runs.
//! - `state`: Frame, phase, and result types recorded during a run.
//!
//! The physics formulas these components orchestrate live in
//! [`crate::core`]; the end-to-end pipeline lives in [`crate::workflows`].

pub mod config;
pub mod error;
pub mod export;
pub mod integrator;
pub mod merger;
pub mod progress;
pub mod state;
