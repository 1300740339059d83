//! Connectivity probing by iterative depth-first search.

use mazegrid_core::{Cell, Grid, GridError};

use crate::MazePaths;

impl MazePaths {
    /// Whether any 4-connected open path joins `start` to `end`.
    ///
    /// `true` immediately when `start == end`. Absence of a path is the
    /// normal `false` result, not an error; only out-of-bounds endpoints
    /// fail.
    pub fn path_exists(
        &mut self,
        grid: &Grid,
        start: Cell,
        end: Cell,
    ) -> Result<bool, GridError> {
        grid.check(start)?;
        grid.check(end)?;
        Ok(self.dfs(grid, start, end))
    }

    /// Probe connectivity and return the discovered trace: the DFS-tree
    /// path from `start` to `end`, **excluding `start`**, in walk order.
    ///
    /// The trace is exactly the cell set the legacy engine painted into the
    /// grid after a successful probe; returning it explicitly leaves the
    /// grid untouched. `start == end` yields an empty trace.
    pub fn probe(
        &mut self,
        grid: &Grid,
        start: Cell,
        end: Cell,
    ) -> Result<Option<Vec<Cell>>, GridError> {
        grid.check(start)?;
        grid.check(end)?;
        if !self.dfs(grid, start, end) {
            return Ok(None);
        }

        let si = self.idx(start);
        let mut trace = Vec::new();
        let mut ci = self.idx(end);
        while ci != si {
            trace.push(self.cell(ci));
            ci = self.pred[ci];
        }
        trace.reverse();
        Ok(Some(trace))
    }

    /// Legacy-compatible probe: on success, every trace cell (the
    /// discovered path excluding `start`) is marked as a wall in `grid`.
    ///
    /// This preserves the legacy post-hoc trace painting. Callers
    /// that need the grid unmodified use [`probe`](Self::probe) or operate
    /// on a copy.
    pub fn probe_mark(
        &mut self,
        grid: &mut Grid,
        start: Cell,
        end: Cell,
    ) -> Result<bool, GridError> {
        let Some(trace) = self.probe(grid, start, end)? else {
            return Ok(false);
        };
        for c in trace {
            grid.set_wall(c);
        }
        Ok(true)
    }

    /// Explicit-stack DFS from `start`, filling the predecessor map.
    /// Returns whether `end` was reached.
    ///
    /// Walls filter expansion but the start cell itself is expanded
    /// unconditionally, matching the legacy probe.
    fn dfs(&mut self, grid: &Grid, start: Cell, end: Cell) -> bool {
        self.reset(grid);
        let si = self.idx(start);
        let ei = self.idx(end);
        if si == ei {
            return true;
        }

        self.visited[si] = true;
        self.stack.push(si);

        while let Some(ci) = self.stack.pop() {
            let neighbors = self.cell(ci).neighbors_4();
            // Reversed push so exploration follows up, down, left, right,
            // like the recursive formulation.
            for &n in neighbors.iter().rev() {
                if !grid.is_open(n) {
                    continue;
                }
                let ni = self.idx(n);
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.pred[ni] = ci;
                if ni == ei {
                    return true;
                }
                self.stack.push(ni);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(art: &str) -> Grid {
        let rows: Vec<&str> = art.lines().collect();
        let mut g = Grid::new(rows[0].len() as i32, rows.len() as i32).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    g.set_wall(Cell::new(x as i32, y as i32));
                }
            }
        }
        g
    }

    #[test]
    fn open_grid_is_connected() {
        let g = Grid::new(4, 4).unwrap();
        let mut mp = MazePaths::new();
        assert!(
            mp.path_exists(&g, Cell::ZERO, Cell::new(3, 3)).unwrap()
        );
    }

    #[test]
    fn blocked_corridor_is_disconnected() {
        let g = grid_from(".#.");
        let mut mp = MazePaths::new();
        assert!(!mp.path_exists(&g, Cell::ZERO, Cell::new(2, 0)).unwrap());
    }

    #[test]
    fn same_cell_is_trivially_connected() {
        let mut g = Grid::new(3, 3).unwrap();
        g.fill(true);
        g.set_open(Cell::new(1, 1));
        let mut mp = MazePaths::new();
        assert!(
            mp.path_exists(&g, Cell::new(1, 1), Cell::new(1, 1)).unwrap()
        );
        let trace = mp.probe(&g, Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        assert_eq!(trace, Some(Vec::new()));
    }

    #[test]
    fn out_of_bounds_endpoint_fails() {
        let g = Grid::new(3, 3).unwrap();
        let mut mp = MazePaths::new();
        let err = mp.path_exists(&g, Cell::ZERO, Cell::new(0, 3)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                cell: Cell::new(0, 3),
                width: 3,
                height: 3
            }
        );
    }

    #[test]
    fn walled_end_is_unreachable() {
        let g = grid_from("..#");
        let mut mp = MazePaths::new();
        assert!(!mp.path_exists(&g, Cell::ZERO, Cell::new(2, 0)).unwrap());
    }

    #[test]
    fn trace_spans_a_corridor() {
        let g = grid_from("....");
        let mut mp = MazePaths::new();
        let trace = mp
            .probe(&g, Cell::ZERO, Cell::new(3, 0))
            .unwrap()
            .unwrap();
        // Excludes start, ends at end, walk order.
        assert_eq!(
            trace,
            vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0)]
        );
    }

    #[test]
    fn probe_does_not_mutate_the_grid() {
        let g = grid_from("...\n.#.\n...");
        let before = g.clone();
        let mut mp = MazePaths::new();
        mp.probe(&g, Cell::ZERO, Cell::new(2, 2)).unwrap().unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn probe_mark_paints_exactly_the_trace() {
        let mut g = grid_from("....");
        let mut mp = MazePaths::new();
        let trace = mp
            .probe(&g, Cell::ZERO, Cell::new(3, 0))
            .unwrap()
            .unwrap();
        assert!(mp.probe_mark(&mut g, Cell::ZERO, Cell::new(3, 0)).unwrap());

        // Start stays open; every trace cell is now a wall.
        assert!(g.is_open(Cell::ZERO));
        for c in &trace {
            assert_eq!(g.is_wall(*c), Some(true));
        }
        assert_eq!(g.count_walls(), trace.len());
    }

    #[test]
    fn probe_mark_reports_missing_path_without_marking() {
        let mut g = grid_from(".#.");
        let mut mp = MazePaths::new();
        assert!(!mp.probe_mark(&mut g, Cell::ZERO, Cell::new(2, 0)).unwrap());
        assert_eq!(g.count_walls(), 1);
    }

    #[test]
    fn deterministic_trace_on_repeat_probes() {
        let g = grid_from("...\n...\n...");
        let mut mp = MazePaths::new();
        let a = mp.probe(&g, Cell::ZERO, Cell::new(2, 2)).unwrap();
        let b = mp.probe(&g, Cell::ZERO, Cell::new(2, 2)).unwrap();
        assert_eq!(a, b);
    }
}
