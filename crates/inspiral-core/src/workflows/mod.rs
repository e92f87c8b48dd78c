//! # Simulation Workflows Module
//!
//! This module provides the high-level entry points that tie the physics
//! and engine layers together into complete, end-to-end pipelines.
//!
//! ## Key Components
//!
//! - `simulate`: The inspiral-merger-ringdown pipeline, from a validated
//!   configuration to a [`crate::engine::state::SimulationResult`].
//!
//! ## Usage
//!
//! ```ignore
//! use inspiral::engine::config::SimulationConfigBuilder;
//! use inspiral::engine::progress::ProgressReporter;
//! use inspiral::workflows::simulate;
//!
//! let config = SimulationConfigBuilder::new()
//!     .masses(36.0, 29.0)
//!     .initial_separation(15.0)
//!     .build()?;
//! let result = simulate::run(&config, &ProgressReporter::new())?;
//! ```

pub mod simulate;
