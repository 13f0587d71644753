//! Shared graph fixtures.

use crate::graph::Graph;

/// The classic six-node worked example: edges (0,1,7) (0,5,14) (0,2,9)
/// (1,2,10) (1,3,15) (2,3,11) (2,5,2) (3,4,6) (4,5,9).
///
/// Shortest path 0 -> 4 is `[0, 2, 5, 4]` with weight 20, and the
/// shortest-path tree from 0 is unique, so tests on it are free of
/// tie-break ambiguity.
pub fn classic_graph() -> Graph {
    Graph::from_flat(
        6,
        &[
            0, 1, 7, //
            0, 5, 14, //
            0, 2, 9, //
            1, 2, 10, //
            1, 3, 15, //
            2, 3, 11, //
            2, 5, 2, //
            3, 4, 6, //
            4, 5, 9, //
        ],
    )
    .expect("classic graph triples are well formed")
}

/// Two components with no connection between them.
///
/// ```text
/// 0 -- 1 -- 2     3 -- 4 -- 5
/// ```
pub fn disconnected_graph() -> Graph {
    Graph::from_flat(
        6,
        &[
            0, 1, 1, //
            1, 2, 1, //
            3, 4, 3, //
            4, 5, 1, //
        ],
    )
    .expect("disconnected graph triples are well formed")
}
