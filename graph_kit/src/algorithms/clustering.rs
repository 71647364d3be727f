//! Max-spacing clustering by Kruskal-style merging.
//!
//! Merging along edges in ascending weight order until `k` sets remain
//! maximizes the minimum weight of any edge left between two clusters
//! (the spacing).

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{DisjointSet, Graph, GraphError, Result, WeightedEdge};

/// The minimal capability clustering needs from a graph: its undirected
/// weighted edges and the vertex id range they span. Any type providing
/// these three operations can be clustered, live [`Graph`] or synthetic
/// edge list alike.
pub trait WeightedEdgeView {
    /// Undirected weighted edges, one entry per edge.
    ///
    /// # Errors
    ///
    /// Implementations backed by directed storage may fail validation;
    /// see [`Graph::weighted_edges`].
    fn weighted_edges(&self) -> Result<Vec<WeightedEdge>>;

    /// Smallest vertex id. An empty view reports an inverted range.
    fn min_vertex(&self) -> usize;

    /// Largest vertex id.
    fn max_vertex(&self) -> usize;
}

impl WeightedEdgeView for Graph {
    fn weighted_edges(&self) -> Result<Vec<WeightedEdge>> {
        Graph::weighted_edges(self)
    }

    fn min_vertex(&self) -> usize {
        Graph::min_vertex(self)
    }

    fn max_vertex(&self) -> usize {
        Graph::max_vertex(self)
    }
}

/// Result of max-spacing clustering: the final partition and the full
/// edge list sorted ascending by weight.
#[derive(Debug, Clone)]
pub struct Clustering {
    pub clusters: DisjointSet,
    pub edges: Vec<WeightedEdge>,
}

/// Serializable snapshot of a clustering outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusteringSummary {
    pub cluster_count: usize,
    pub spacing: Option<i64>,
}

impl Clustering {
    /// Number of final clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.count()
    }

    /// The spacing: smallest edge weight between two different final
    /// clusters, `None` when every edge lies inside a cluster.
    pub fn spacing(&mut self) -> Option<i64> {
        let Self { clusters, edges } = self;
        edges
            .iter()
            .find(|edge| !clusters.are_union(edge.src, edge.dst))
            .map(|edge| edge.weight)
    }

    /// Snapshot for serialization or reporting.
    pub fn summary(&mut self) -> ClusteringSummary {
        ClusteringSummary {
            cluster_count: self.cluster_count(),
            spacing: self.spacing(),
        }
    }
}

/// Merges the view's vertices along ascending-weight edges until `k`
/// clusters remain.
///
/// Vertices inside the range that no edge touches stay singleton
/// clusters; if the edges run out first, more than `k` clusters survive.
///
/// # Errors
///
/// [`GraphError::InvalidClusterCount`] when `k` is zero, exceeds the
/// vertex range, or the view is empty; edge-collection errors propagate
/// from [`WeightedEdgeView::weighted_edges`].
pub fn max_spacing_clusters<V: WeightedEdgeView>(view: &V, k: usize) -> Result<Clustering> {
    let begin = view.min_vertex();
    let end = view.max_vertex();
    if begin > end {
        return Err(GraphError::InvalidClusterCount {
            requested: k,
            vertices: 0,
        });
    }
    let vertices = end - begin + 1;
    if k == 0 || k > vertices {
        return Err(GraphError::InvalidClusterCount {
            requested: k,
            vertices,
        });
    }

    let mut edges = view.weighted_edges()?;
    edges.sort_by_key(|edge| edge.weight);

    let mut clusters = DisjointSet::new(begin, end);
    for edge in &edges {
        if clusters.count() <= k {
            break;
        }
        clusters.unite(edge.src, edge.dst);
    }

    Ok(Clustering { clusters, edges })
}

impl Graph {
    /// Max-spacing clustering of this graph's weighted edges.
    ///
    /// # Errors
    ///
    /// See [`max_spacing_clusters`].
    #[instrument(skip(self))]
    pub fn max_spacing_clusters(&self, k: usize) -> Result<Clustering> {
        max_spacing_clusters(self, k)
    }
}
