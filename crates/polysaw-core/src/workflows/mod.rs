//! # Workflows Module
//!
//! Top-level entry points that turn a seed and a parameter grid into results.
//!
//! - **Ensemble Workflow** ([`ensemble`]) - Sweeps chain lengths, grows `n_chains` walks for
//!   each from one shared random source, and reduces them to [`ensemble::EnsembleRecord`]s
//!   of radius of gyration and end-to-end distance.
//! - **Sample Workflow** ([`sample`]) - A single reproducible walk, typically exported for
//!   3D visualization.

pub mod ensemble;
pub mod sample;
