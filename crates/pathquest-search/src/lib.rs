//! **pathquest-search** — grid search algorithms with step instrumentation.
//!
//! Three traversals over an immutable [`SearchGrid`] snapshot:
//!
//! - **BFS** ([`bfs::bfs`]) — level-order, shortest path by edge count
//! - **DFS** ([`dfs::dfs`]) — depth-first, first path found
//! - **A\*** ([`astar::astar`]) — best-first on `f = g + h` with unit step
//!   cost and a Euclidean heuristic
//!
//! Every search records its visitation order, reconstructs the path by
//! threading the path-so-far through the frontier, and reports aggregate
//! metrics as a [`SearchResult`]. Progress is streamed through a
//! [`StepObserver`], one callback per node expansion, with a cancellation
//! poll on every iteration. [`compare`] runs all three back to back and
//! ranks them by time, path length and nodes visited.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod distance;
pub mod observer;
pub mod result;
pub mod traits;

pub use distance::{chebyshev, euclidean};
pub use observer::{SilentObserver, StepEvent, StepObserver};
pub use result::{Algorithm, ComparisonReport, SearchOutcome, SearchResult, compare, run};
pub use traits::SearchGrid;
