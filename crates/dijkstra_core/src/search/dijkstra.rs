use std::time::{Duration, Instant};

use log::{debug, info};

use crate::constants::{Weight, UNREACHED};
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeIndex};
use crate::search::frontier::{Frontier, LinearScan};
use crate::search::path_result::PathResult;
use crate::search::reconstruct_path;
use crate::statistics::SearchStats;

/// One incident-edge examination, handed to the trace callback. Replaces
/// console logging as the observability seam: the solver emits these but
/// never depends on what the callback does.
#[derive(Debug)]
pub struct TraceEvent<'a> {
    /// 1-based outer-loop iteration that examined the edge.
    pub iteration: usize,
    pub current: NodeIndex,
    pub neighbor: NodeIndex,
    pub edge: &'a Edge,
}

/// Single-source shortest-path solver over a borrowed, read-only graph.
///
/// All per-run state lives in tables owned by the running solve, so any
/// number of solvers may share one `&Graph` concurrently. Distances are
/// monotonically non-increasing within a run; each solve performs a
/// full-graph traversal (no early exit at the target), so the result
/// carries minimum distances to every reachable node.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    deadline: Option<Duration>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
            deadline: None,
        }
    }

    /// Aborts any later solve with [`Error::DeadlineExceeded`] once it
    /// has run for `deadline`. Checked once per outer-loop iteration.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Solves with the default linear-scan frontier.
    pub fn solve(&mut self, source: NodeIndex, target: NodeIndex) -> Result<PathResult> {
        self.run::<LinearScan>(source, target, |_| {})
    }

    /// Like [`solve`](Self::solve), invoking `on_visit` for every
    /// incident-edge examination.
    pub fn solve_traced(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        on_visit: impl FnMut(&TraceEvent),
    ) -> Result<PathResult> {
        self.run::<LinearScan>(source, target, on_visit)
    }

    /// Solves with an explicitly chosen frontier strategy.
    pub fn solve_with<F: Frontier>(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<PathResult> {
        self.run::<F>(source, target, |_| {})
    }

    /// Minimum distances from `source` to every node, without a target.
    /// Unreached nodes keep [`UNREACHED`].
    pub fn distances_from(&mut self, source: NodeIndex) -> Result<Vec<Weight>> {
        let (dist, _) = self.traverse::<LinearScan>(source, |_| {})?;
        Ok(dist)
    }

    fn run<F: Frontier>(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        on_visit: impl FnMut(&TraceEvent),
    ) -> Result<PathResult> {
        self.g.node(target)?;

        let (dist, predecessor) = self.traverse::<F>(source, on_visit)?;

        match reconstruct_path(target, source, &predecessor) {
            Ok(path) => {
                let weight = dist[target.index()];
                info!("path {} -> {} found with weight {}, {}", source, target, weight, self.stats);
                Ok(PathResult::new(path, weight, dist))
            }
            Err(err) => {
                info!("no path {} -> {}, {}", source, target, self.stats);
                Err(err)
            }
        }
    }

    fn traverse<F: Frontier>(
        &mut self,
        source: NodeIndex,
        mut on_visit: impl FnMut(&TraceEvent),
    ) -> Result<(Vec<Weight>, Vec<Option<NodeIndex>>)> {
        self.g.node(source)?;

        self.stats.init();
        let started = Instant::now();

        let num_nodes = self.g.num_nodes();
        let mut dist = vec![UNREACHED; num_nodes];
        let mut predecessor: Vec<Option<NodeIndex>> = vec![None; num_nodes];
        let mut visited = vec![false; num_nodes];
        dist[source.index()] = 0.0;

        let mut frontier = F::seed(num_nodes, source);
        let mut iteration = 0;

        while let Some(current) = frontier.select_next(&dist) {
            if let Some(deadline) = self.deadline {
                if started.elapsed() >= deadline {
                    return Err(Error::DeadlineExceeded(deadline));
                }
            }
            if visited[current.index()] {
                continue; // stale frontier entry, already settled
            }

            iteration += 1;
            debug!("iteration {}: settling node {}", iteration, current);

            for (_, edge) in self.g.incident_edges(current) {
                let neighbor = edge.other_endpoint(current)?;
                on_visit(&TraceEvent {
                    iteration,
                    current,
                    neighbor,
                    edge,
                });

                let candidate = dist[current.index()] + edge.weight;
                if candidate < dist[neighbor.index()] {
                    dist[neighbor.index()] = candidate;
                    predecessor[neighbor.index()] = Some(current);
                    frontier.decrease(neighbor, candidate);
                    self.stats.edges_relaxed += 1;
                }
            }

            visited[current.index()] = true;
            self.stats.nodes_settled += 1;
        }
        self.stats.finish();

        Ok((dist, predecessor))
    }
}
