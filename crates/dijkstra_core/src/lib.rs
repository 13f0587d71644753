//! Single-source shortest paths on weighted undirected graphs.
//!
//! Dijkstra's algorithm with a linear-scan frontier by default: the
//! unvisited set is scanned in full on every selection, O(V² + E) for a
//! whole solve. That is the simplest correct form of the algorithm and
//! is plenty for small-to-medium graphs; a binary-heap frontier can be
//! swapped in through [`search::frontier::Frontier`] without touching
//! the relaxation loop.
//!
//! The graph is read-only during solving. Each solve keeps its distance
//! and predecessor tables to itself, so solvers can share one `&Graph`
//! across threads.
//!
//! # Basic usage
//! ```
//! use dijkstra_core::graph::{node_index, Graph};
//! use dijkstra_core::search::dijkstra::Dijkstra;
//!
//! // (a, b, weight) triples, flattened
//! let graph = Graph::from_flat(
//!     6,
//!     &[
//!         0, 1, 7, 0, 5, 14, 0, 2, 9, 1, 2, 10, 1, 3, 15, //
//!         2, 3, 11, 2, 5, 2, 3, 4, 6, 4, 5, 9,
//!     ],
//! )
//! .unwrap();
//!
//! let mut solver = Dijkstra::new(&graph);
//! let result = solver.solve(node_index(0), node_index(4)).unwrap();
//!
//! let path: Vec<_> = result.path.iter().map(|n| n.index()).collect();
//! assert_eq!(path, vec![0, 2, 5, 4]);
//! assert_eq!(result.weight, 20.0);
//! ```
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
