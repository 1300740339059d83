//! **mazegrid-core** — Grid-based maze engine (core types).
//!
//! This crate provides the foundational types used across the *mazegrid*
//! ecosystem: the [`Cell`] grid coordinate, the boolean obstacle [`Grid`],
//! and the [`GridError`] boundary-violation error.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Cell;
pub use grid::Grid;
