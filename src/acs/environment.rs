//! Problem state: nodes, distances, pheromones and the root random source.

use super::config::AcsConfig;
use super::types::Node;
use crate::error::{AcsError, AcsResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Distances below this are clamped when computing attractiveness, so
/// duplicate coordinates yield a large finite value instead of infinity.
pub const MIN_DISTANCE: f64 = 1e-10;

/// Distance and pheromone model for one instance.
///
/// Built once per run with [`Environment::load`]. [`Environment::initialize`]
/// derives the matrices and must run before solving; calling it again
/// restores the initial pheromone state and reseeds the random source, so
/// two strategies can start from identical conditions.
///
/// Both matrices are stored row-major as `n * n` and kept symmetric: every
/// write goes to `(i, j)` and `(j, i)`.
#[derive(Debug, Clone)]
pub struct Environment {
    nodes: Vec<Node>,
    config: AcsConfig,
    distances: Vec<f64>,
    pheromones: Vec<f64>,
    q: f64,
    rng: StdRng,
    initialized: bool,
}

impl Environment {
    /// Builds an environment from points, assigning ids in input order.
    pub fn load(points: &[(f64, f64)], config: AcsConfig) -> AcsResult<Self> {
        if points.is_empty() {
            return Err(AcsError::EmptyInstance);
        }
        let nodes = points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Node { id, x, y })
            .collect();
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            nodes,
            config,
            distances: Vec::new(),
            pheromones: Vec::new(),
            q: 0.0,
            rng,
            initialized: false,
        })
    }

    /// Computes all pairwise distances, sets every edge's pheromone to
    /// `1/n`, sets `Q` to the minimum pairwise distance and reseeds the
    /// random source.
    pub fn initialize(&mut self) {
        let n = self.nodes.len();
        self.distances = compute_distances(&self.nodes, self.config.parallel_distances);

        let initial = 1.0 / n as f64;
        self.pheromones = vec![initial; n * n];
        for i in 0..n {
            self.pheromones[i * n + i] = 0.0;
        }

        self.q = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| self.distances[i * n + j])
            .fold(f64::INFINITY, f64::min);
        if !self.q.is_finite() {
            // single node: no edges
            self.q = 0.0;
        }

        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.initialized = true;
    }

    /// Whether [`Environment::initialize`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Nodes in input order; `nodes()[i].id == i`.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: loading rejects empty instances.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parameters the environment was loaded with.
    pub fn config(&self) -> &AcsConfig {
        &self.config
    }

    /// Reinforcement constant: the minimum pairwise distance.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Euclidean distance between nodes `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.nodes.len() + j]
    }

    /// Current pheromone on the edge `(i, j)`.
    pub fn pheromone(&self, i: usize, j: usize) -> f64 {
        self.pheromones[i * self.nodes.len() + j]
    }

    /// `pheromone(i,j)^alpha * (1/distance(i,j))^beta`, with the distance
    /// clamped to [`MIN_DISTANCE`].
    ///
    /// The result is capped at `f64::MAX / n`, so the sum over any set of
    /// candidates stays finite even for large `beta`.
    pub fn attractiveness(&self, i: usize, j: usize) -> f64 {
        let cap = f64::MAX / self.nodes.len() as f64;
        let tau = self.pheromone(i, j);
        let eta = 1.0 / self.distance(i, j).max(MIN_DISTANCE);
        let weight = eta.powf(self.config.beta).min(cap);
        (tau.powf(self.config.alpha) * weight).min(cap)
    }

    /// Overwrites the edge `(i, j)` in both directions.
    pub fn set_pheromone(&mut self, i: usize, j: usize, value: f64) {
        let n = self.nodes.len();
        self.pheromones[i * n + j] = value;
        self.pheromones[j * n + i] = value;
    }

    /// Adds `delta` to the edge `(i, j)`.
    pub fn reinforce(&mut self, i: usize, j: usize, delta: f64) {
        let value = self.pheromone(i, j) + delta;
        self.set_pheromone(i, j, value);
    }

    /// Scales every edge by `1 - rho`.
    pub fn evaporate(&mut self) {
        let keep = 1.0 - self.config.rho;
        for tau in &mut self.pheromones {
            *tau *= keep;
        }
    }

    /// Length of the closed tour through `tour`, including the edge from
    /// the last node back to the first.
    pub fn tour_length(&self, tour: &[usize]) -> AcsResult<f64> {
        let (&first, _) = tour.split_first().ok_or(AcsError::EmptyTour)?;
        let open: f64 = tour.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        let last = tour[tour.len() - 1];
        Ok(open + self.distance(last, first))
    }

    /// Uniform draw in `[0, 1)` from the root source.
    pub(crate) fn draw_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform node index from the root source.
    pub(crate) fn draw_node(&mut self) -> usize {
        self.rng.random_range(0..self.nodes.len())
    }

    /// Sub-seed for an independent per-ant source.
    pub(crate) fn draw_seed(&mut self) -> u64 {
        self.rng.random::<u64>()
    }
}

fn compute_distances(nodes: &[Node], parallel: bool) -> Vec<f64> {
    let n = nodes.len();
    let mut distances = vec![0.0; n * n];
    let fill_row = |(i, row): (usize, &mut [f64])| {
        for (j, d) in row.iter_mut().enumerate() {
            *d = nodes[i].distance(&nodes[j]);
        }
    };

    #[cfg(feature = "parallel")]
    if parallel {
        distances.par_chunks_mut(n).enumerate().for_each(&fill_row);
        return distances;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    distances.chunks_mut(n).enumerate().for_each(&fill_row);
    distances
}
