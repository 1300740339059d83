//! The obstacle grid: a `width × height` boolean map where `true` marks an
//! impassable cell ("wall") and `false` a passable one ("open").
//!
//! `Grid` is a plain owned value. Searches borrow it immutably; the legacy
//! trace-marking probe takes it by `&mut`. Snapshots intended for a worker
//! thread are shared as `Arc<Grid>` and replaced, never mutated in place.

use std::fmt;

use crate::error::GridError;
use crate::geom::Cell;

/// A 2D boolean obstacle grid in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Grid {
    /// Create a fully open grid.
    ///
    /// Fails with [`GridError::InvalidDimension`] if either dimension is
    /// non-positive; no partial grid is produced.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            walls: vec![false; (width * height) as usize],
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Always `false`: a grid has at least one cell by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Whether `c` is inside the grid extent.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Fail with [`GridError::OutOfBounds`] unless `c` is inside the grid.
    pub fn check(&self, c: Cell) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell: c,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    fn index(&self, c: Cell) -> usize {
        (c.y * self.width + c.x) as usize
    }

    /// Whether the cell at `c` is a wall, or `None` if out of bounds.
    #[inline]
    pub fn is_wall(&self, c: Cell) -> Option<bool> {
        if !self.contains(c) {
            return None;
        }
        Some(self.walls[self.index(c)])
    }

    /// Whether `c` is inside the grid and passable.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.is_wall(c) == Some(false)
    }

    /// Mark the cell at `c` as a wall. Does nothing if out of bounds.
    pub fn set_wall(&mut self, c: Cell) {
        if self.contains(c) {
            let i = self.index(c);
            self.walls[i] = true;
        }
    }

    /// Mark the cell at `c` as open. Does nothing if out of bounds.
    pub fn set_open(&mut self, c: Cell) {
        if self.contains(c) {
            let i = self.index(c);
            self.walls[i] = false;
        }
    }

    /// Fill the entire grid with the given wall value.
    pub fn fill(&mut self, wall: bool) {
        self.walls.fill(wall);
    }

    /// Fill the grid using a function of each cell, in row-major order.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Cell) -> bool) {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = (y * self.width + x) as usize;
                self.walls[i] = f(Cell::new(x, y));
            }
        }
    }

    /// Number of wall cells.
    pub fn count_walls(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Row-major iterator over every cell coordinate.
    #[inline]
    pub fn cells(&self) -> Cells {
        Cells {
            width: self.width,
            height: self.height,
            cur: Cell::ZERO,
        }
    }
}

/// Renders the grid as ASCII art, one row per line: `#` for walls, `.` for
/// open cells. Intended for debugging and test output.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if self.walls[(y * self.width + x) as usize] {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Cells iterator
// ---------------------------------------------------------------------------

/// Row-major iterator over the cell coordinates of a [`Grid`].
#[derive(Clone, Debug)]
pub struct Cells {
    width: i32,
    height: i32,
    cur: Cell,
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.y >= self.height {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.y >= self.height {
            return (0, Some(0));
        }
        let remaining_in_row = (self.width - self.cur.x) as usize;
        let remaining_rows = (self.height - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * self.width as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for Cells {}
