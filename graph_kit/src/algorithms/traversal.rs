//! Dijkstra shortest paths and Prim minimum spanning tree.
//!
//! Both algorithms share the same skeleton: seed a distance table with an
//! infinity sentinel, queue every vertex in an indexed min-heap, then pop
//! the nearest vertex and relax its outgoing edges until the heap drains.
//! They differ only in the relaxation rule.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Graph, GraphError, Result, VertexHeap};

/// Sentinel distance for vertices unreachable from the source.
pub const INFINITY: u64 = u64::MAX;

/// Sentinel for Prim's per-vertex attachment cost.
const UNSEEN: i64 = i64::MAX;

/// Shortest-path distances from a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// Distance per vertex id; [`INFINITY`] for unreachable vertices.
    pub distances: Vec<u64>,
    /// Previous hop on the shortest path, `None` for the source and for
    /// unreachable vertices.
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Whether a path from the source reaches `vertex`.
    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances
            .get(vertex)
            .is_some_and(|&dist| dist != INFINITY)
    }

    /// Distance to `vertex`, `None` when unreachable or out of range.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|&dist| dist != INFINITY)
    }

    /// Reconstructs the source-to-`vertex` path by walking predecessors.
    #[must_use]
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Spanning tree rooted at a source vertex: for every vertex the tree
/// reaches, the edge that attached it (predecessor) and that edge's
/// weight. Vertices in other components appear in neither map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub predecessors: HashMap<usize, usize>,
    pub distances: HashMap<usize, i64>,
}

impl SpanningTree {
    /// Sum of the tree's edge weights.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        self.distances.values().sum()
    }

    /// Number of edges in the tree.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.predecessors.len()
    }
}

impl Graph {
    /// Single-source shortest paths over non-negative edge weights.
    ///
    /// Edges without a recorded weight count as zero. Vertices the source
    /// cannot reach keep the [`INFINITY`] sentinel; that is a valid
    /// terminal state, not an error. The sentinel is checked before every
    /// accumulation and the addition itself is overflow-checked, so a
    /// saturated distance can never wrap into a finite-looking value.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] when `source` (or an edge
    /// destination) lies outside the adjacency range;
    /// [`GraphError::NegativeWeight`] on the first negative edge weight.
    #[instrument(skip(self))]
    pub fn dijkstra_shortest_path(&self, source: usize) -> Result<ShortestPaths> {
        let count = self.vertex_count();
        if source >= count {
            return Err(GraphError::VertexNotFound(source));
        }

        let mut distances = vec![INFINITY; count];
        let mut predecessors = vec![None; count];
        distances[source] = 0;

        let mut unvisited = VertexHeap::min();
        for vertex in 0..count {
            unvisited.push(vertex, distances[vertex]);
        }

        while let Some((vertex, _)) = unvisited.pop() {
            // Everything still queued is unreachable; no relaxation can
            // start from an infinite distance.
            if distances[vertex] == INFINITY {
                continue;
            }
            for edge in self.outgoing(vertex) {
                if edge.dst >= count {
                    return Err(GraphError::VertexNotFound(edge.dst));
                }
                let weight = self.weight(edge.id).unwrap_or(0);
                if weight < 0 {
                    return Err(GraphError::NegativeWeight {
                        edge_id: edge.id,
                        weight,
                    });
                }
                let Some(candidate) = distances[vertex].checked_add(weight as u64) else {
                    continue;
                };
                if candidate < distances[edge.dst] {
                    distances[edge.dst] = candidate;
                    unvisited.maybe_update(edge.dst, candidate);
                    predecessors[edge.dst] = Some(vertex);
                }
            }
        }

        Ok(ShortestPaths {
            distances,
            predecessors,
        })
    }

    /// Minimum spanning tree of the component containing `source`,
    /// grown greedily by cheapest attachment edge (Prim's algorithm).
    ///
    /// The graph is expected to be undirected, i.e. every edge inserted
    /// in both directions with equal weight.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] when `source` or an edge
    /// destination lies outside the adjacency range.
    #[instrument(skip(self))]
    pub fn prim_minimum_spanning_tree(&self, source: usize) -> Result<SpanningTree> {
        let count = self.vertex_count();
        if source >= count {
            return Err(GraphError::VertexNotFound(source));
        }

        let mut distances = vec![UNSEEN; count];
        distances[source] = 0;

        let mut unvisited = VertexHeap::min();
        for vertex in 0..count {
            unvisited.push(vertex, distances[vertex]);
        }

        let mut tree = SpanningTree::default();
        while let Some((vertex, _)) = unvisited.pop() {
            // Remaining vertices belong to other components.
            if distances[vertex] == UNSEEN {
                continue;
            }
            for edge in self.outgoing(vertex) {
                if edge.dst >= count {
                    return Err(GraphError::VertexNotFound(edge.dst));
                }
                let weight = self.weight(edge.id).unwrap_or(0);
                // maybe_update doubles as the still-unvisited gate: a
                // vertex already attached to the tree is no longer queued.
                if weight < distances[edge.dst] && unvisited.maybe_update(edge.dst, weight) {
                    distances[edge.dst] = weight;
                    tree.predecessors.insert(edge.dst, vertex);
                    tree.distances.insert(edge.dst, weight);
                }
            }
        }

        Ok(tree)
    }
}
