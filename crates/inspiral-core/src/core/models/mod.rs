//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent a
//! binary black hole system, providing the foundation for all dynamical and
//! radiative calculations.
//!
//! ## Overview
//!
//! The models module defines the physical objects the simulation evolves.
//! These models are designed to:
//!
//! - **Represent compact objects** - Masses, spins, and kinematic state in geometrized units
//! - **Stay copyable and immutable-friendly** - Small value types suited to functional state updates
//! - **Bridge unit systems** - Conversion factors between geometrized and SI units
//!
//! ## Key Components
//!
//! - [`black_hole`] - Individual black hole state with characteristic radii
//! - [`units`] - Conversion from geometrized units to SI for a given system mass
//!
//! ## Usage
//!
//! ```ignore
//! use inspiral::core::models::black_hole::BlackHole;
//!
//! let bh = BlackHole::new(0.5, 0.7);
//! let r_isco = bh.isco_radius();
//! ```

pub mod black_hole;
pub mod units;
