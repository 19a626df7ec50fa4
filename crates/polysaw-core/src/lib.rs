//! # POLYSAW Core Library
//!
//! Self-avoiding random walks on the simple cubic lattice, the classic excluded-volume
//! model of a flexible polymer, together with the ensemble statistics used to study how
//! chain size scales with length.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless lattice types (`LatticePoint`, `Walk`) and pure
//!   numerics (radius of gyration, end-to-end distance, sample statistics).
//!
//! - **[`engine`]: The Stochastic Core.** Greedy restart-based growth of individual walks,
//!   the seeded random source, configuration, progress reporting and errors.
//!
//! - **[`workflows`]: The Public API.** Chain-length sweeps producing `EnsembleRecord`s and
//!   single sample walks for visualization.
//!
//! ## Reproducibility
//!
//! Every run is driven by a single `u64` seed. The random source is passed explicitly through
//! every call, so identical parameters always produce bit-identical records.
//!
//! ```no_run
//! use polysaw::workflows::ensemble;
//!
//! let records = ensemble::run_simulation(&[10, 20, 40], 200, 0, 2000)?;
//! for record in &records {
//!     println!("N={} Rg={:.3}", record.chain_length, record.rg_mean);
//! }
//! # Ok::<(), polysaw::engine::error::EngineError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
