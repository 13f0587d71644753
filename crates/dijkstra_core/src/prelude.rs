//! Re-exports of the most commonly used items in `dijkstra_core`.
pub use crate::constants::{Weight, UNREACHED};
pub use crate::error::{Error, Result};
pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::search::dijkstra::{Dijkstra, TraceEvent};
pub use crate::search::frontier::{Frontier, LinearScan, MinHeap};
pub use crate::search::path_result::PathResult;
