//! Strongly Connected Components using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that
//! there is a path from every vertex to every other vertex in the set.
//! The depth-first search runs on an explicit frame stack rather than the
//! call stack, so deep graphs (long chains, large cycles) cannot exhaust
//! the thread stack.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Graph, GraphError, Result};

/// Result of SCC computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SccResult {
    /// The components, each an unordered group of vertex ids. Together
    /// the groups contain every vertex id in `[0, vertex_count)` exactly
    /// once.
    pub groups: Vec<Vec<usize>>,
}

impl SccResult {
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.groups.len() == 1
    }

    #[must_use]
    pub fn largest_component(&self) -> Option<&[usize]> {
        self.groups
            .iter()
            .max_by_key(|group| group.len())
            .map(Vec::as_slice)
    }
}

/// Per-vertex traversal state. `index == 0` means unvisited; the preorder
/// counter starts at 1.
#[derive(Debug, Clone, Copy, Default)]
struct VertexState {
    index: usize,
    low_index: usize,
    on_stack: bool,
}

/// One simulated recursion frame: the vertex and how far through its
/// outgoing edges the visit has advanced.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    edge_pos: usize,
}

impl Graph {
    /// Computes the strongly connected components.
    ///
    /// Time complexity: O(V + E).
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] when an edge points outside the
    /// adjacency range.
    #[instrument(skip(self))]
    pub fn strongly_connected_components(&self) -> Result<SccResult> {
        let count = self.vertex_count();
        let mut states = vec![VertexState::default(); count];
        let mut next_index = 0;
        let mut visit_stack: Vec<usize> = Vec::new();
        let mut frames: Vec<Frame> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for root in 0..count {
            if states[root].index != 0 {
                continue;
            }
            begin_visit(root, &mut states, &mut next_index, &mut visit_stack);
            frames.push(Frame {
                vertex: root,
                edge_pos: 0,
            });

            while let Some(top) = frames.len().checked_sub(1) {
                let Frame { vertex, edge_pos } = frames[top];
                let edges = self.outgoing(vertex);
                if edge_pos < edges.len() {
                    frames[top].edge_pos += 1;
                    let next = edges[edge_pos].dst;
                    if next >= count {
                        return Err(GraphError::VertexNotFound(next));
                    }
                    if states[next].index == 0 {
                        begin_visit(next, &mut states, &mut next_index, &mut visit_stack);
                        frames.push(Frame {
                            vertex: next,
                            edge_pos: 0,
                        });
                    } else if states[next].on_stack {
                        // Back edge into the current component.
                        states[vertex].low_index =
                            states[vertex].low_index.min(states[next].index);
                    }
                } else {
                    frames.pop();
                    if states[vertex].index == states[vertex].low_index {
                        groups.push(pop_group(vertex, &mut states, &mut visit_stack));
                    }
                    // Fold the finished child's low-link into its parent,
                    // exactly where the recursive form would.
                    if let Some(parent) = frames.last() {
                        states[parent.vertex].low_index = states[parent.vertex]
                            .low_index
                            .min(states[vertex].low_index);
                    }
                }
            }
        }

        Ok(SccResult { groups })
    }
}

fn begin_visit(
    vertex: usize,
    states: &mut [VertexState],
    next_index: &mut usize,
    visit_stack: &mut Vec<usize>,
) {
    *next_index += 1;
    states[vertex].index = *next_index;
    states[vertex].low_index = *next_index;
    states[vertex].on_stack = true;
    visit_stack.push(vertex);
}

fn pop_group(root: usize, states: &mut [VertexState], visit_stack: &mut Vec<usize>) -> Vec<usize> {
    let mut group = Vec::new();
    loop {
        let member = visit_stack
            .pop()
            .expect("visit stack holds the root until its group is collected");
        states[member].on_stack = false;
        group.push(member);
        if member == root {
            break;
        }
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_groups(result: &SccResult) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = result
            .groups
            .iter()
            .map(|group| {
                let mut group = group.clone();
                group.sort_unstable();
                group
            })
            .collect();
        groups.sort();
        groups
    }

    #[test]
    fn two_cycles_with_bridge() {
        let mut graph = Graph::new();
        graph.connect(0, &[1]);
        graph.connect(1, &[2, 5]);
        graph.connect(2, &[0]);
        graph.connect(3, &[4]);
        graph.connect(4, &[5]);
        graph.connect(5, &[3]);

        let result = graph.strongly_connected_components().unwrap();
        assert_eq!(result.component_count(), 2);
        assert_eq!(
            sorted_groups(&result),
            vec![vec![0, 1, 2], vec![3, 4, 5]]
        );
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = Graph::new();
        let result = graph.strongly_connected_components().unwrap();
        assert!(result.groups.is_empty());
        assert!(!result.is_strongly_connected());
        assert_eq!(result.largest_component(), None);
    }

    #[test]
    fn self_loop_is_its_own_component() {
        let mut graph = Graph::new();
        graph.connect(0, &[0]);

        let result = graph.strongly_connected_components().unwrap();
        assert_eq!(result.component_count(), 1);
        assert!(result.is_strongly_connected());
    }

    #[test]
    fn chain_splits_into_singletons() {
        let mut graph = Graph::new();
        graph.connect(0, &[1]);
        graph.connect(1, &[2]);
        graph.connect(2, &[]);

        let result = graph.strongly_connected_components().unwrap();
        assert_eq!(result.component_count(), 3);
        assert_eq!(sorted_groups(&result), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn groups_partition_all_vertices() {
        let mut graph = Graph::new();
        graph.connect(0, &[1]);
        graph.connect(1, &[0, 2]);
        graph.connect(2, &[3]);
        graph.connect(3, &[2]);
        graph.connect(4, &[]);

        let result = graph.strongly_connected_components().unwrap();
        let mut all: Vec<usize> = result.groups.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..graph.vertex_count()).collect::<Vec<_>>());
        let largest = result.largest_component().unwrap().len();
        assert_eq!(largest, 2);
    }

    #[test]
    fn deep_cycle_does_not_exhaust_the_stack() {
        const N: usize = 50_000;
        let mut graph = Graph::new();
        for vertex in 0..N {
            graph.connect(vertex, &[(vertex + 1) % N]);
        }

        let result = graph.strongly_connected_components().unwrap();
        assert_eq!(result.component_count(), 1);
        assert_eq!(result.groups[0].len(), N);
    }

    #[test]
    fn deep_chain_does_not_exhaust_the_stack() {
        const N: usize = 50_000;
        let mut graph = Graph::new();
        for vertex in 0..N - 1 {
            graph.connect(vertex, &[vertex + 1]);
        }
        graph.connect(N - 1, &[]);

        let result = graph.strongly_connected_components().unwrap();
        assert_eq!(result.component_count(), N);
    }

    #[test]
    fn edge_outside_range_fails_fast() {
        let mut graph = Graph::new();
        graph.connect(0, &[9]);
        assert_eq!(
            graph.strongly_connected_components(),
            Err(GraphError::VertexNotFound(9))
        );
    }
}
