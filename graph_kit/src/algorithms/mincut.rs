//! Randomized minimum cut using Karger's contraction algorithm.
//!
//! A single contraction trial finds the true minimum cut only with
//! polynomially small probability, so many independent trials run and the
//! smallest cut seen wins. Trials are dispatched in concurrent batches;
//! each trial owns a private copy of the edge list and a private RNG
//! seeded from the configured base, so runs are reproducible and share no
//! mutable state.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{DisjointSet, Graph, GraphError, Result};

/// Configuration for min-cut computation.
#[derive(Debug, Clone)]
pub struct MinCutConfig {
    /// Number of independent contraction trials.
    pub trials: usize,
    /// Trials dispatched concurrently per batch.
    pub parallel_jobs: usize,
    /// Base RNG seed; trial `i` uses `seed + i`. `None` draws a fresh
    /// base from thread-local entropy per call.
    pub seed: Option<u64>,
}

impl Default for MinCutConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            parallel_jobs: 10,
            seed: None,
        }
    }
}

impl MinCutConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    #[must_use]
    pub const fn parallel_jobs(mut self, jobs: usize) -> Self {
        self.parallel_jobs = jobs;
        self
    }

    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of min-cut computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCutResult {
    /// The smallest cut found: canonical `(src, dst)` pairs, one entry
    /// per crossing edge (parallel edges appear once each).
    pub cut: Vec<(usize, usize)>,
    /// Number of trials that ran.
    pub trials: usize,
}

impl MinCutResult {
    #[must_use]
    pub fn cut_size(&self) -> usize {
        self.cut.len()
    }
}

impl Graph {
    /// Approximates the minimum cut of the undirected graph by repeated
    /// randomized contraction.
    ///
    /// The graph is read as an undirected multiset: symmetric directed
    /// pairs collapse to one undirected edge each; an edge inserted in
    /// only one direction is dropped (see
    /// [`weighted_edges`](Graph::weighted_edges) for the validated view).
    /// The returned cut is the best across all trials — probabilistically,
    /// not provably, minimal; more trials sharpen the guarantee.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] when an edge endpoint lies outside
    /// `[min_vertex, max_vertex]`.
    #[instrument(skip(self, config), fields(trials = config.trials))]
    pub fn min_cut(&self, config: &MinCutConfig) -> Result<MinCutResult> {
        if self.is_empty() {
            return Ok(MinCutResult {
                cut: Vec::new(),
                trials: 0,
            });
        }

        let edges = self.collect_undirected_edges();
        let begin = self.min_vertex();
        let end = self.max_vertex();
        for &(src, dst) in &edges {
            if src < begin || src > end {
                return Err(GraphError::VertexNotFound(src));
            }
            if dst < begin || dst > end {
                return Err(GraphError::VertexNotFound(dst));
            }
        }

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let jobs = config.parallel_jobs.max(1);

        let mut best: Option<Vec<(usize, usize)>> = None;
        let mut completed = 0;
        while completed < config.trials {
            let batch = jobs.min(config.trials - completed);
            // Fan out one batch; collect() is the fan-in barrier, so no
            // trial result is read before every job in the batch is done.
            let cuts: Vec<Vec<(usize, usize)>> = (0..batch)
                .into_par_iter()
                .map(|job| {
                    let seed = base_seed.wrapping_add((completed + job) as u64);
                    contraction_trial(&edges, begin, end, seed)
                })
                .collect();
            for cut in cuts {
                if best.as_ref().map_or(true, |b| cut.len() < b.len()) {
                    best = Some(cut);
                }
            }
            completed += batch;
            debug!(
                completed,
                best_size = best.as_ref().map(Vec::len),
                "min-cut batch finished"
            );
        }

        Ok(MinCutResult {
            cut: best.unwrap_or_default(),
            trials: config.trials,
        })
    }
}

/// One contraction trial: shuffle a private copy of the edges, unite
/// endpoints until two super-vertices remain, and return the edges whose
/// endpoints ended up in different components.
fn contraction_trial(
    edges: &[(usize, usize)],
    begin: usize,
    end: usize,
    seed: u64,
) -> Vec<(usize, usize)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut working = edges.to_vec();
    working.shuffle(&mut rng);

    let mut hyper_graph = DisjointSet::new(begin, end);
    while hyper_graph.count() > 2 {
        // Ids absent from the edge list (range holes) leave extra sets;
        // running out of edges just ends the contraction early.
        let Some((src, dst)) = working.pop() else {
            break;
        };
        hyper_graph.unite(src, dst);
    }

    working.retain(|&(src, dst)| !hyper_graph.are_union(src, dst));
    working
}
