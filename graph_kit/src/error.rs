//! Error types for the graph toolkit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphError {
    /// Vertex id is outside the graph's adjacency range.
    VertexNotFound(usize),
    /// Negative weight found during shortest-path search.
    NegativeWeight { edge_id: usize, weight: i64 },
    /// Undirected weighted edge present in only one direction.
    UnpairedEdge { src: usize, dst: usize },
    /// The two directions of an undirected edge carry different weights.
    WeightMismatch {
        src: usize,
        dst: usize,
        forward: i64,
        reverse: i64,
    },
    /// Requested cluster count cannot be produced by merging.
    InvalidClusterCount { requested: usize, vertices: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound(id) => write!(f, "Vertex not found: {id}"),
            Self::NegativeWeight { edge_id, weight } => {
                write!(f, "Edge {edge_id} has negative weight: {weight}")
            },
            Self::UnpairedEdge { src, dst } => {
                write!(f, "Undirected edge {src}-{dst} appears in only one direction")
            },
            Self::WeightMismatch {
                src,
                dst,
                forward,
                reverse,
            } => {
                write!(
                    f,
                    "Undirected edge {src}-{dst} has mismatched weights: {forward} vs {reverse}"
                )
            },
            Self::InvalidClusterCount {
                requested,
                vertices,
            } => {
                write!(
                    f,
                    "Cannot form {requested} clusters from {vertices} vertices"
                )
            },
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GraphError::VertexNotFound(7).to_string(),
            "Vertex not found: 7"
        );
        assert_eq!(
            GraphError::NegativeWeight {
                edge_id: 3,
                weight: -5
            }
            .to_string(),
            "Edge 3 has negative weight: -5"
        );
        assert_eq!(
            GraphError::UnpairedEdge { src: 1, dst: 2 }.to_string(),
            "Undirected edge 1-2 appears in only one direction"
        );
    }

    #[test]
    fn serde_round_trip() {
        let err = GraphError::WeightMismatch {
            src: 0,
            dst: 4,
            forward: 2,
            reverse: 9,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: GraphError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
