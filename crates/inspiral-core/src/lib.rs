//! # Inspiral Core Library
//!
//! A post-Newtonian engine for simulating the inspiral, merger, and ringdown
//! of binary black holes in geometrized units, with numerical-relativity
//! calibrated remnant properties and quadrupole waveform extraction.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`BlackHole`, unit conversions) and the pure physics formulas: the
//!   post-Newtonian accelerations, orbital diagnostics, remnant fits, and
//!   strain polarizations.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the
//!   numerical integration. It includes the RK4 stepper with adaptive
//!   timestep control, merger detection, validated configuration, progress
//!   reporting, and the exporters for finished results.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level,
//!   user-facing layer. It ties the `engine` and `core` together to execute
//!   the complete inspiral-merger-ringdown pipeline from a single entry
//!   point.

pub mod core;
pub mod engine;
pub mod workflows;
