//! Lattice data model: points and unit steps of the simple cubic lattice, and the
//! immutable [`walk::Walk`] produced by the growth engine.

pub mod lattice;
pub mod walk;
