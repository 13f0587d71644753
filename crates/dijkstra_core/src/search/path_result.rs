use crate::constants::Weight;
use crate::graph::NodeIndex;

/// Outcome of a successful solve: the reconstructed source-to-target
/// path plus the distances to every node, as a side effect of the
/// full-graph traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Node sequence from source to target, inclusive.
    pub path: Vec<NodeIndex>,
    /// Total weight of `path`.
    pub weight: Weight,
    /// Minimum distance from the source, indexed by node index.
    /// [`UNREACHED`](crate::constants::UNREACHED) for nodes the source
    /// never reaches.
    pub distances: Vec<Weight>,
}

impl PathResult {
    pub fn new(path: Vec<NodeIndex>, weight: Weight, distances: Vec<Weight>) -> Self {
        PathResult {
            path,
            weight,
            distances,
        }
    }

    /// Distance from the source to `node`, if the index is in range.
    pub fn distance(&self, node: NodeIndex) -> Option<Weight> {
        self.distances.get(node.index()).copied()
    }
}
