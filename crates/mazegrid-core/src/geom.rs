//! Geometry primitives: the [`Cell`] grid coordinate.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate. X grows right, Y grows down (screen
/// coordinates). Equality and hashing are by coordinate pair, so `Cell`
/// works as a map or set key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a cell shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours, in the engine's fixed traversal order:
    /// up, down, left, right. Searches rely on this order for deterministic
    /// tie-breaking, so it must not change.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 4);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(b - a, Cell::new(2, 2));
        assert_eq!(a.shift(-1, 1), Cell::new(0, 3));
    }

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let c = Cell::new(5, 5);
        assert_eq!(
            c.neighbors_4(),
            [
                Cell::new(5, 4),
                Cell::new(5, 6),
                Cell::new(4, 5),
                Cell::new(6, 5),
            ]
        );
    }

    #[test]
    fn cell_as_set_key() {
        let mut set = HashSet::new();
        set.insert(Cell::new(2, 3));
        assert!(set.contains(&Cell::new(2, 3)));
        assert!(!set.contains(&Cell::new(3, 2)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(7, -1).to_string(), "(7, -1)");
    }
}
