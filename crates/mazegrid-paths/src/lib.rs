//! **mazegrid-paths** — search algorithms for the mazegrid engine.
//!
//! Two queries over an obstacle [`Grid`](mazegrid_core::Grid), both running
//! through [`MazePaths`], which owns and reuses its internal caches so that
//! repeated queries incur no allocations after warm-up:
//!
//! - **Connectivity**: depth-first existence check
//!   ([`MazePaths::path_exists`], [`MazePaths::probe`]), with a
//!   legacy-compatible variant that paints the discovered trace into the
//!   grid ([`MazePaths::probe_mark`]).
//! - **Shortest path**: breadth-first search returning the minimum-length
//!   cell sequence ([`MazePaths::shortest_path`]).
//!
//! Both traverse the four cardinal neighbours in the fixed order up, down,
//! left, right, so equally short results tie-break deterministically.

mod bfs;
mod dfs;
mod distance;
mod search;

pub use distance::manhattan;
pub use search::MazePaths;
