//! Graph algorithms module.
//!
//! This module provides the algorithms built on the core structures:
//! - Dijkstra shortest paths and Prim minimum spanning tree (shared
//!   indexed-heap relaxation)
//! - Strongly Connected Components (Tarjan's algorithm, iterative)
//! - Randomized minimum cut (Karger's algorithm, parallel trials)
//! - Max-spacing clustering (Kruskal-style merging)

mod clustering;
mod mincut;
mod scc;
mod traversal;

pub use clustering::{max_spacing_clusters, Clustering, ClusteringSummary, WeightedEdgeView};
pub use mincut::{MinCutConfig, MinCutResult};
pub use scc::SccResult;
pub use traversal::{ShortestPaths, SpanningTree, INFINITY};
