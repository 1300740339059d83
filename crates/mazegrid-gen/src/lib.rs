//! **mazegrid-gen** — randomized maze generation.
//!
//! [`MazeGen`] scatters walls over a fresh grid with a per-cell probability
//! and picks two distinguished endpoints, both forced open. The random
//! source is injected rather than global, so a seeded generator reproduces
//! a maze exactly.
//!
//! Generation makes no connectivity promise: the endpoints may be walled
//! off from each other. Callers that care check with the search crate.

use mazegrid_core::{Cell, Grid, GridError};
use rand::{Rng, RngExt};

/// A generated maze: the obstacle grid plus its two distinguished endpoints.
///
/// `start` and `end` are always open cells inside the grid. They are drawn
/// independently and may coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
}

/// Maze generator holding an injected random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width × height` maze.
    ///
    /// Every cell independently becomes a wall with probability
    /// `wall_chance` percent; values of 100 or more make every draw a wall.
    /// The endpoints are then chosen uniformly over all cells and forced
    /// open regardless of their wall draw.
    ///
    /// Fails with [`GridError::InvalidDimension`] on non-positive
    /// dimensions, consuming no entropy.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        wall_chance: u8,
    ) -> Result<Maze, GridError> {
        let mut grid = Grid::new(width, height)?;
        let chance = u32::from(wall_chance);
        grid.fill_fn(|_| self.rng.random_range(0..100u32) < chance);

        let start = Cell::new(
            self.rng.random_range(0..width),
            self.rng.random_range(0..height),
        );
        let end = Cell::new(
            self.rng.random_range(0..width),
            self.rng.random_range(0..height),
        );

        // Hard postcondition, not a probabilistic outcome.
        grid.set_open(start);
        grid.set_open(end);

        Ok(Maze { grid, start, end })
    }
}
