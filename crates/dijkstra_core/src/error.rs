//! Error types for `dijkstra_core`.

use std::time::Duration;

use thiserror::Error;

use crate::graph::NodeIndex;

/// Everything that can go wrong while building a graph or solving on it.
///
/// All variants are recoverable at the call site; none should be treated
/// as process-fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An edge was queried with a node that is neither of its endpoints.
    #[error("node {node} is not an endpoint of the edge {a} -- {b}")]
    InvalidEndpoint {
        node: NodeIndex,
        a: NodeIndex,
        b: NodeIndex,
    },

    /// A node index outside `[0, size)` was used during construction or lookup.
    #[error("node index {index} out of range for a graph of {size} nodes")]
    IndexOutOfRange { index: usize, size: usize },

    /// The flat triple list passed to bulk construction has an invalid length.
    #[error("flat triple list has length {len}, expected a multiple of 3")]
    MalformedInput { len: usize },

    /// Path reconstruction hit a node with no predecessor before reaching
    /// the source.
    #[error("node {0} is unreachable from the source")]
    Unreachable(NodeIndex),

    /// A solve ran past its configured deadline.
    #[error("solve exceeded its deadline of {0:?}")]
    DeadlineExceeded(Duration),
}

/// Result type alias for graph and solver operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    #[test]
    fn invalid_endpoint_display() {
        let err = Error::InvalidEndpoint {
            node: node_index(7),
            a: node_index(0),
            b: node_index(1),
        };
        assert_eq!(err.to_string(), "node 7 is not an endpoint of the edge 0 -- 1");
    }

    #[test]
    fn index_out_of_range_display() {
        let err = Error::IndexOutOfRange { index: 6, size: 6 };
        assert_eq!(
            err.to_string(),
            "node index 6 out of range for a graph of 6 nodes"
        );
    }

    #[test]
    fn malformed_input_display() {
        let err = Error::MalformedInput { len: 4 };
        assert_eq!(
            err.to_string(),
            "flat triple list has length 4, expected a multiple of 3"
        );
    }
}
