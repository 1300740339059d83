//! Shortest-path queries by breadth-first search.

use mazegrid_core::{Cell, Grid, GridError};

use crate::MazePaths;

impl MazePaths {
    /// Compute the minimum-length 4-connected path from `start` to `end`.
    ///
    /// Returns the full cell sequence including both endpoints, or `None`
    /// when the endpoints are disconnected. `start == end` yields the
    /// single-cell path `[start]`. Among equally short paths the
    /// first-discovered one under the fixed neighbour order is returned,
    /// so repeated queries give identical results.
    ///
    /// Never mutates the grid; runs in O(width · height) time and space.
    pub fn shortest_path(
        &mut self,
        grid: &Grid,
        start: Cell,
        end: Cell,
    ) -> Result<Option<Vec<Cell>>, GridError> {
        grid.check(start)?;
        grid.check(end)?;
        self.reset(grid);

        let si = self.idx(start);
        let ei = self.idx(end);
        if si == ei {
            return Ok(Some(vec![start]));
        }

        self.visited[si] = true;
        self.queue.push_back(si);

        let mut found = false;
        while let Some(ci) = self.queue.pop_front() {
            if ci == ei {
                found = true;
                break;
            }
            for n in self.cell(ci).neighbors_4() {
                if !grid.is_open(n) {
                    continue;
                }
                let ni = self.idx(n);
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.pred[ni] = ci;
                self.queue.push_back(ni);
            }
        }

        if !found {
            return Ok(None);
        }

        // Walk predecessors back to the start, then reverse.
        let mut path = Vec::new();
        let mut ci = ei;
        loop {
            path.push(self.cell(ci));
            if ci == si {
                break;
            }
            ci = self.pred[ci];
        }
        path.reverse();
        Ok(Some(path))
    }
}
