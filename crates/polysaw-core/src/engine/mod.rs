//! # Engine Module
//!
//! The stochastic layer of POLYSAW: growth of individual self-avoiding walks and the
//! support types the workflows build on.
//!
//! ## Architecture
//!
//! - **Walk Growth** ([`growth`]) - Greedy, restart-based self-avoiding walk construction
//!   with a bounded attempt budget
//! - **Random Source** ([`rng`]) - The seeded, platform-stable generator threaded through a run
//! - **Configuration** ([`config`]) - Validated simulation parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine error types
//!
//! All randomness is passed explicitly as `&mut impl Rng`; nothing in the engine owns or
//! reseeds a generator on its own.

pub mod config;
pub mod error;
pub mod growth;
pub mod progress;
pub mod rng;
