//! Frontier-selection strategies for the solver.
//!
//! The relaxation loop only talks to the [`Frontier`] trait, so the
//! linear-scan default and the heap-backed variant are interchangeable
//! without touching it.

use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

/// The unvisited set plus the policy for picking the next node to settle.
pub trait Frontier {
    fn seed(num_nodes: usize, source: NodeIndex) -> Self;

    /// Notifies the frontier that a relaxation lowered `node`'s distance.
    fn decrease(&mut self, node: NodeIndex, weight: Weight);

    /// Removes and returns the next node to settle, or `None` when the
    /// frontier is exhausted. May return already-settled nodes; the
    /// caller skips those.
    fn select_next(&mut self, dist: &[Weight]) -> Option<NodeIndex>;
}

/// Insertion-ordered unvisited list, scanned in full on every selection.
///
/// O(V) per selection, O(V² + E) for a whole solve. Ties break towards
/// the earlier-inserted node, which makes selection deterministic. Every
/// node is eventually settled, including ones the source never reaches.
pub struct LinearScan {
    remaining: Vec<NodeIndex>,
}

impl Frontier for LinearScan {
    fn seed(num_nodes: usize, _source: NodeIndex) -> Self {
        Self {
            remaining: (0..num_nodes).map(NodeIndex::new).collect(),
        }
    }

    fn decrease(&mut self, _node: NodeIndex, _weight: Weight) {}

    fn select_next(&mut self, dist: &[Weight]) -> Option<NodeIndex> {
        if self.remaining.is_empty() {
            return None;
        }

        let mut best = 0;
        for (pos, node) in self.remaining.iter().enumerate().skip(1) {
            // strict comparison keeps the first-inserted node on ties
            if dist[node.index()] < dist[self.remaining[best].index()] {
                best = pos;
            }
        }
        Some(self.remaining.remove(best))
    }
}

#[derive(Debug)]
struct Candidate {
    node: NodeIndex,
    weight: Weight,
}

impl Candidate {
    fn new(node: NodeIndex, weight: Weight) -> Self {
        Self { node, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.weight.partial_cmp(&self.weight)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Lazy-insertion binary heap. Settles only reachable nodes; distances
/// and path weights match [`LinearScan`] for every reachable node.
pub struct MinHeap {
    queue: BinaryHeap<Candidate>,
}

impl Frontier for MinHeap {
    fn seed(_num_nodes: usize, source: NodeIndex) -> Self {
        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));
        Self { queue }
    }

    fn decrease(&mut self, node: NodeIndex, weight: Weight) {
        self.queue.push(Candidate::new(node, weight));
    }

    fn select_next(&mut self, dist: &[Weight]) -> Option<NodeIndex> {
        while let Some(Candidate { node, weight }) = self.queue.pop() {
            // entries superseded by a later decrease are stale
            if weight <= dist[node.index()] {
                return Some(node);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::UNREACHED;
    use crate::graph::node_index;

    #[test]
    fn linear_scan_breaks_ties_by_insertion_order() {
        let mut frontier = LinearScan::seed(3, node_index(0));
        let dist = [1.0, 1.0, 1.0];

        assert_eq!(frontier.select_next(&dist), Some(node_index(0)));
        assert_eq!(frontier.select_next(&dist), Some(node_index(1)));
        assert_eq!(frontier.select_next(&dist), Some(node_index(2)));
        assert_eq!(frontier.select_next(&dist), None);
    }

    #[test]
    fn linear_scan_yields_unreached_nodes_last() {
        let mut frontier = LinearScan::seed(3, node_index(0));
        let dist = [UNREACHED, 2.0, UNREACHED];

        assert_eq!(frontier.select_next(&dist), Some(node_index(1)));
        // remaining nodes are all unreached; insertion order decides
        assert_eq!(frontier.select_next(&dist), Some(node_index(0)));
        assert_eq!(frontier.select_next(&dist), Some(node_index(2)));
    }

    #[test]
    fn min_heap_skips_stale_entries() {
        let mut frontier = MinHeap::seed(3, node_index(0));
        let mut dist = [0.0, UNREACHED, UNREACHED];

        assert_eq!(frontier.select_next(&dist), Some(node_index(0)));

        dist[1] = 5.0;
        frontier.decrease(node_index(1), 5.0);
        dist[1] = 2.0;
        frontier.decrease(node_index(1), 2.0);

        assert_eq!(frontier.select_next(&dist), Some(node_index(1)));
        // the 5.0 entry is now stale and must be dropped
        assert_eq!(frontier.select_next(&dist), None);
    }
}
