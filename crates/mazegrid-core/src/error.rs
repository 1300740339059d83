//! Boundary-violation errors.
//!
//! Absence of a path is never an error: searches report it as a normal
//! `false` / `None` result. The variants here cover caller mistakes only,
//! and are reported synchronously, before any state is touched.

use std::fmt;

use crate::geom::Cell;

/// Errors reported by the maze engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid was requested with a non-positive width or height.
    InvalidDimension { width: i32, height: i32 },
    /// A supplied cell lies outside the grid extent.
    OutOfBounds {
        cell: Cell,
        width: i32,
        height: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::OutOfBounds {
                cell,
                width,
                height,
            } => {
                write!(f, "cell {cell} is outside the {width}x{height} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
