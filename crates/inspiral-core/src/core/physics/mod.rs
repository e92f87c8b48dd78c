//! # Physics Module
//!
//! This module provides the relativistic two-body physics underlying the
//! simulation: post-Newtonian equations of motion, orbital diagnostics,
//! gravitational wave emission, and numerical relativity remnant fits.
//!
//! ## Overview
//!
//! Every function in this module is pure and stateless. The equations are
//! written for the relative coordinate of a two-body system in geometrized
//! units (G = c = 1), and cover:
//!
//! - **Post-Newtonian dynamics** through 2.5PN order, including the dissipative radiation reaction
//! - **Orbital diagnostics** such as frequency, binding energy, and chirp mass
//! - **Gravitational wave strain** from the quadrupole formula and the ringdown quasinormal mode
//! - **Merger remnants** via numerical relativity fitting formulas for mass, spin, and recoil
//!
//! ## Key Components
//!
//! - [`acceleration`] - Post-Newtonian relative acceleration split by order
//! - [`orbit`] - Orbital parameters and analytic inspiral estimates
//! - [`waveform`] - Inspiral and ringdown strain toward a distant observer
//! - [`remnant`] - Remnant mass, spin, recoil kick, and quasinormal mode fits
//!
//! ## Usage
//!
//! ```ignore
//! use inspiral::core::physics::{acceleration, orbit};
//!
//! let acc = acceleration::relative_acceleration(&r, &v, 0.5, 0.5, &toggles);
//! let params = orbit::orbital_params(&bh1, &bh2);
//! ```

pub mod acceleration;
pub mod orbit;
pub mod remnant;
pub mod waveform;
