//! Best-first route search over the obstacle grid.

mod astar;
mod heuristic;
mod route;

pub use astar::{find_path, Metrics};
pub use heuristic::manhattan;
pub use route::{Cells, Route};
