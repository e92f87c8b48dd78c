//! # Core Module
//!
//! This module provides the fundamental building blocks for binary black
//! hole simulations, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the stateless foundations every higher layer
//! builds on: the physical models of the compact objects and the pure
//! relativistic two-body physics. Nothing in this layer owns simulation
//! state or performs I/O.
//!
//! ## Architecture
//!
//! - **Physical Models** ([`models`]) - Black hole state and unit conversions
//! - **Two-Body Physics** ([`physics`]) - Post-Newtonian dynamics, waveforms, and remnant fits
//!
//! ## Scientific Foundation
//!
//! The implemented formulas follow the standard compact-binary literature:
//!
//! - **Post-Newtonian equations of motion** in the ADM-TT gauge through 2.5PN order
//! - **Quadrupole-formula waveforms** for the inspiral phase
//! - **Numerical relativity fitting formulas** for remnant mass, spin, recoil, and ringdown

pub mod models;
pub mod physics;
