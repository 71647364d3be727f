// Pedantic lint configuration for graph_kit
#![allow(clippy::cast_sign_loss)] // weights are validated non-negative before casting
#![allow(clippy::cast_possible_truncation)] // vertex ids fit usize on supported targets
#![allow(clippy::module_name_repetitions)] // MinCutConfig et al. read better qualified

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub mod algorithms;
mod disjoint_set;
mod error;
mod heap;


pub use algorithms::{
    max_spacing_clusters, Clustering, ClusteringSummary, MinCutConfig, MinCutResult, SccResult,
    ShortestPaths, SpanningTree, WeightedEdgeView, INFINITY,
};
pub use disjoint_set::DisjointSet;
pub use error::{GraphError, Result};
pub use heap::{HeapOrder, MedianHeap, VertexHeap};

/// Directed edge. `id` is a stable identifier assigned at insertion,
/// used to look up the weight side table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub id: usize,
}

/// Undirected weighted edge, the deduplicated view consumed by clustering.
/// Canonical form: `src <= dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub src: usize,
    pub dst: usize,
    pub weight: i64,
}

/// Adjacency-list graph with directed edges, optional per-edge weights,
/// and vertex-existence tracking.
///
/// Vertex ids are dense `usize` values, not necessarily starting at zero;
/// the live range is `[min_vertex, max_vertex]`. Undirected graphs are
/// represented as symmetric pairs of directed edges.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    vertices: HashSet<usize>,
    weights: HashMap<usize, i64>,
    min_vertex: usize,
    max_vertex: usize,
    next_edge_id: usize,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            vertices: HashSet::new(),
            weights: HashMap::new(),
            min_vertex: usize::MAX,
            max_vertex: 0,
            next_edge_id: 0,
        }
    }

    /// Appends directed edges from `src` to each listed destination,
    /// growing the adjacency list to accommodate `src` and widening the
    /// vertex range to include it.
    pub fn connect(&mut self, src: usize, dsts: &[usize]) {
        self.widen_range(src);
        self.grow_to(src);
        self.vertices.insert(src);
        for &dst in dsts {
            self.vertices.insert(dst);
            self.push_edge(src, dst);
        }
    }

    /// Appends weighted directed edges from `src`. Each edge gets a fresh
    /// id and a weight-table entry. Unlike [`connect`](Self::connect), the
    /// adjacency list and vertex range grow to cover the destinations as
    /// well, so traversal outputs have a slot for every listed vertex.
    pub fn connect_weighted(&mut self, src: usize, pairs: &[(usize, i64)]) {
        self.widen_range(src);
        self.grow_to(src);
        self.vertices.insert(src);
        for &(dst, weight) in pairs {
            self.widen_range(dst);
            self.grow_to(dst);
            self.vertices.insert(dst);
            let id = self.push_edge(src, dst);
            self.weights.insert(id, weight);
        }
    }

    fn push_edge(&mut self, src: usize, dst: usize) -> usize {
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        self.adjacency[src].push(Edge { src, dst, id });
        id
    }

    fn grow_to(&mut self, src: usize) {
        if src >= self.adjacency.len() {
            self.adjacency.resize_with(src + 1, Vec::new);
        }
    }

    fn widen_range(&mut self, vertex: usize) {
        if vertex <= self.min_vertex {
            self.min_vertex = vertex;
        }
        if vertex >= self.max_vertex {
            self.max_vertex = vertex;
        }
    }

    /// Length of the adjacency list. This counts every slot up to the
    /// highest connected source vertex, including slots with no outgoing
    /// edges, not the number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges inserted so far.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.next_edge_id
    }

    /// Whether `vertex` was ever named in a connect call, as source or
    /// destination.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Smallest vertex id in the live range. An empty graph reports an
    /// inverted range (`min_vertex() > max_vertex()`).
    #[must_use]
    pub const fn min_vertex(&self) -> usize {
        self.min_vertex
    }

    /// Largest vertex id in the live range.
    #[must_use]
    pub const fn max_vertex(&self) -> usize {
        self.max_vertex
    }

    /// Weight recorded for the edge id, if any.
    #[must_use]
    pub fn weight(&self, edge_id: usize) -> Option<i64> {
        self.weights.get(&edge_id).copied()
    }

    /// Outgoing edges of `vertex`. Empty for in-range slots with no edges.
    #[must_use]
    pub fn outgoing(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Collapses symmetric directed pairs into the undirected weighted
    /// edge list, one entry per pair.
    ///
    /// Every undirected edge must have been inserted exactly twice, once
    /// per direction, with equal weight. Unweighted edges are not part of
    /// this view.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnpairedEdge`] when a direction has no partner,
    /// [`GraphError::WeightMismatch`] when the two directions disagree on
    /// the weight.
    pub fn weighted_edges(&self) -> Result<Vec<WeightedEdge>> {
        let mut occurrences: BTreeMap<(usize, usize), Vec<i64>> = BTreeMap::new();
        for list in &self.adjacency {
            for edge in list {
                if let Some(&weight) = self.weights.get(&edge.id) {
                    let key = (edge.src.min(edge.dst), edge.src.max(edge.dst));
                    occurrences.entry(key).or_default().push(weight);
                }
            }
        }

        let mut edges = Vec::new();
        for ((src, dst), mut weights) in occurrences {
            if weights.len() % 2 != 0 {
                return Err(GraphError::UnpairedEdge { src, dst });
            }
            weights.sort_unstable();
            for pair in weights.chunks_exact(2) {
                if pair[0] != pair[1] {
                    return Err(GraphError::WeightMismatch {
                        src,
                        dst,
                        forward: pair[0],
                        reverse: pair[1],
                    });
                }
                edges.push(WeightedEdge {
                    src,
                    dst,
                    weight: pair[0],
                });
            }
        }
        Ok(edges)
    }

    /// Undirected edge multiset for contraction: canonicalize each
    /// directed edge to `(min, max)` and emit each canonical pair
    /// `count / 2` times. An edge inserted in only one direction is
    /// silently dropped here; the weighted view is the validated path.
    pub(crate) fn collect_undirected_edges(&self) -> Vec<(usize, usize)> {
        let mut unique: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for list in &self.adjacency {
            for edge in list {
                let key = (edge.src.min(edge.dst), edge.src.max(edge.dst));
                *unique.entry(key).or_insert(0) += 1;
            }
        }

        let mut edges = Vec::new();
        for (pair, count) in unique {
            for _ in 0..count / 2 {
                edges.push(pair);
            }
        }
        edges
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
