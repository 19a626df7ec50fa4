//! # Core Module
//!
//! Stateless building blocks for lattice polymer simulations.
//!
//! ## Architecture
//!
//! - **Lattice Representation** ([`models`]) - Lattice points, unit-step directions and the
//!   immutable self-avoiding [`models::walk::Walk`]
//! - **Numerics** ([`utils`]) - Conformational observables (centroid, radius of gyration,
//!   end-to-end distance) and sample statistics (mean, Bessel-corrected standard deviation)
//!
//! Nothing in this module draws random numbers or keeps state between calls; the
//! stochastic growth lives in [`crate::engine`].

pub mod models;
pub mod utils;
