//! The cache-owning search coordinator.

use std::collections::VecDeque;

use mazegrid_core::{Cell, Grid};

/// Sentinel for "no predecessor" in the parent map.
pub(crate) const NO_PRED: usize = usize::MAX;

/// Central coordinator for maze searches.
///
/// Owns the visited set, predecessor map, and frontier storage so that
/// repeated queries reuse the same allocations. The caches grow to the
/// largest grid seen and are reset (not reallocated) per query; they are
/// never part of a result.
pub struct MazePaths {
    pub(crate) width: usize,
    pub(crate) visited: Vec<bool>,
    pub(crate) pred: Vec<usize>,
    pub(crate) stack: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
}

impl Default for MazePaths {
    fn default() -> Self {
        Self::new()
    }
}

impl MazePaths {
    /// Create a searcher with empty caches; they size themselves to the
    /// first grid queried.
    pub fn new() -> Self {
        Self {
            width: 0,
            visited: Vec::new(),
            pred: Vec::new(),
            stack: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Reset the caches for a query over `grid`, growing them if the grid
    /// area exceeds anything seen before.
    pub(crate) fn reset(&mut self, grid: &Grid) {
        let len = grid.len();
        self.width = grid.width() as usize;
        if self.visited.len() < len {
            self.visited.resize(len, false);
            self.pred.resize(len, NO_PRED);
        }
        self.visited[..len].fill(false);
        self.pred[..len].fill(NO_PRED);
        self.stack.clear();
        self.queue.clear();
    }

    /// Flat index of an in-bounds cell.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> usize {
        c.y as usize * self.width + c.x as usize
    }

    /// Cell coordinate of a flat index.
    #[inline]
    pub(crate) fn cell(&self, i: usize) -> Cell {
        Cell::new((i % self.width) as i32, (i / self.width) as i32)
    }
}
