//! Undirected weighted graph with insertion-ordered incidence lists.
//!
//! The graph is structurally immutable once solving begins: the solver
//! borrows it read-only and keeps all per-run state (distances,
//! predecessors) in its own tables, so concurrent solves over a shared
//! `&Graph` are safe.

use std::fmt;

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::error::{Error, Result};

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EdgeIndex {
    fn from(ix: u32) -> Self {
        EdgeIndex(ix)
    }
}

/// A graph vertex. Carries only its stable identity; for eagerly built
/// graphs the name equals the node's index.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    pub name: usize,
}

impl Node {
    pub fn new(name: usize) -> Self {
        Node { name }
    }
}

/// An undirected weighted connection between two nodes. Immutable after
/// creation. The weight's sign is unchecked; negative weights invalidate
/// solver correctness but are not rejected here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub a: NodeIndex,
    pub b: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: NodeIndex, b: NodeIndex, weight: Weight) -> Self {
        Edge { a, b, weight }
    }

    /// Returns the endpoint that is not `node`.
    ///
    /// The sole runtime-checked contract in the data model: fails with
    /// [`Error::InvalidEndpoint`] if `node` is neither endpoint.
    pub fn other_endpoint(&self, node: NodeIndex) -> Result<NodeIndex> {
        if node == self.a {
            Ok(self.b)
        } else if node == self.b {
            Ok(self.a)
        } else {
            Err(Error::InvalidEndpoint {
                node,
                a: self.a,
                b: self.b,
            })
        }
    }

    pub fn endpoints(&self) -> (NodeIndex, NodeIndex) {
        (self.a, self.b)
    }
}

/// Owns all nodes and edges. Node count is fixed at construction; edges
/// are added incrementally.
///
/// Invariant: every edge in `edges` appears in both endpoints'
/// incidence lists (once, for a self-loop).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeIndex>>,
}

impl Graph {
    /// Creates a graph with `size` nodes indexed `0..size`, named by
    /// their index, and no edges.
    pub fn with_size(size: usize) -> Self {
        Self {
            nodes: (0..size).map(Node::new).collect(),
            edges: Vec::new(),
            incidence: vec![Vec::new(); size],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Connects the nodes at `a` and `b` with an undirected edge of the
    /// given weight and records it in both incidence lists.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if either index is outside
    /// `[0, size)`. Self-loops and duplicate edges are accepted; see the
    /// solver docs for how they behave.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: Weight) -> Result<EdgeIndex> {
        let a = self.node_at(a)?;
        let b = self.node_at(b)?;

        let edge_idx = EdgeIndex::new(self.edges.len());
        self.incidence[a.index()].push(edge_idx);
        if a != b {
            self.incidence[b.index()].push(edge_idx);
        }
        self.edges.push(Edge::new(a, b, weight));

        Ok(edge_idx)
    }

    /// Resolves a raw index to a [`NodeIndex`], failing with
    /// [`Error::IndexOutOfRange`] if it is invalid.
    pub fn node_at(&self, index: usize) -> Result<NodeIndex> {
        if index < self.nodes.len() {
            Ok(NodeIndex::new(index))
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.nodes.len(),
            })
        }
    }

    pub fn node(&self, node_idx: NodeIndex) -> Result<&Node> {
        self.nodes
            .get(node_idx.index())
            .ok_or(Error::IndexOutOfRange {
                index: node_idx.index(),
                size: self.nodes.len(),
            })
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges touching `node_idx`, in insertion order.
    pub fn incident_edges(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
        self.incidence[node_idx.index()]
            .iter()
            .map(move |edge_idx| (*edge_idx, &self.edges[edge_idx.index()]))
    }

    /// Distinct neighboring nodes of `node_idx`, derived from its
    /// incidence list. A self-loop makes a node its own neighbor.
    pub fn neighbors(&self, node_idx: NodeIndex) -> Result<FxHashSet<NodeIndex>> {
        let mut neighbors = FxHashSet::default();
        for (_, edge) in self.incident_edges(node_idx) {
            neighbors.insert(edge.other_endpoint(node_idx)?);
        }
        Ok(neighbors)
    }

    /// Builds a graph of `size` nodes from a flat sequence of
    /// `(a, b, weight)` triples.
    ///
    /// Fails with [`Error::MalformedInput`] if the sequence length is
    /// not a multiple of 3, rather than silently truncating.
    pub fn from_flat(size: usize, flat: &[u32]) -> Result<Self> {
        if flat.len() % 3 != 0 {
            return Err(Error::MalformedInput { len: flat.len() });
        }

        let mut graph = Graph::with_size(size);
        for triple in flat.chunks_exact(3) {
            graph.add_edge(triple[0] as usize, triple[1] as usize, Weight::from(triple[2]))?;
        }

        debug!(
            "built graph with {} nodes and {} edges",
            graph.num_nodes(),
            graph.num_edges()
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eager_node_creation() {
        let g = Graph::with_size(4);

        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 0);
        for (i, node) in g.nodes().enumerate() {
            assert_eq!(node.name, i);
        }
    }

    #[test]
    fn add_edge_populates_both_incidence_lists() {
        let mut g = Graph::with_size(3);
        let e = g.add_edge(0, 2, 4.0).unwrap();

        let incident_a: Vec<_> = g.incident_edges(node_index(0)).map(|(i, _)| i).collect();
        let incident_b: Vec<_> = g.incident_edges(node_index(2)).map(|(i, _)| i).collect();
        assert_eq!(incident_a, vec![e]);
        assert_eq!(incident_b, vec![e]);
        assert!(g.incident_edges(node_index(1)).next().is_none());
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut g = Graph::with_size(3);

        assert_eq!(
            g.add_edge(0, 3, 1.0),
            Err(Error::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(
            g.add_edge(5, 0, 1.0),
            Err(Error::IndexOutOfRange { index: 5, size: 3 })
        );
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn node_lookup() {
        let g = Graph::with_size(2);

        assert_eq!(g.node_at(1), Ok(node_index(1)));
        assert_eq!(
            g.node_at(2),
            Err(Error::IndexOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(g.node(node_index(0)).unwrap().name, 0);
        assert!(g.node(node_index(9)).is_err());
    }

    #[test]
    fn other_endpoint() {
        let edge = Edge::new(node_index(1), node_index(4), 2.0);

        assert_eq!(edge.other_endpoint(node_index(1)), Ok(node_index(4)));
        assert_eq!(edge.other_endpoint(node_index(4)), Ok(node_index(1)));
        assert_eq!(
            edge.other_endpoint(node_index(2)),
            Err(Error::InvalidEndpoint {
                node: node_index(2),
                a: node_index(1),
                b: node_index(4),
            })
        );
    }

    #[test]
    fn neighbors_are_distinct() {
        let mut g = Graph::with_size(3);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 1, 2.0).unwrap(); // duplicate edge, same neighbor
        g.add_edge(0, 2, 3.0).unwrap();

        let neighbors = g.neighbors(node_index(0)).unwrap();
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&node_index(1)));
        assert!(neighbors.contains(&node_index(2)));
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut g = Graph::with_size(2);
        g.add_edge(0, 1, 2.0).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();

        // Both survive; relaxation keeps the minimum during a solve.
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn self_loop_recorded_once() {
        let mut g = Graph::with_size(1);
        g.add_edge(0, 0, 1.0).unwrap();

        assert_eq!(g.incident_edges(node_index(0)).count(), 1);
        let neighbors = g.neighbors(node_index(0)).unwrap();
        assert!(neighbors.contains(&node_index(0)));
    }

    #[test]
    fn from_flat_builds_full_graph() {
        let g = Graph::from_flat(4, &[0, 1, 5, 1, 2, 3, 2, 3, 1]).unwrap();

        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.edges[1].weight, 3.0);
    }

    #[test]
    fn from_flat_rejects_bad_length() {
        let err = Graph::from_flat(3, &[0, 1, 5, 2]).unwrap_err();
        assert_eq!(err, Error::MalformedInput { len: 4 });
    }

    #[test]
    fn serde_round_trip() {
        let g = Graph::from_flat(3, &[0, 1, 7, 1, 2, 2]).unwrap();

        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();

        assert_eq!(back.num_nodes(), 3);
        assert_eq!(back.edges, g.edges);
        let incident: Vec<_> = back.incident_edges(node_index(1)).map(|(i, _)| i).collect();
        assert_eq!(incident, vec![EdgeIndex::new(0), EdgeIndex::new(1)]);
    }
}
