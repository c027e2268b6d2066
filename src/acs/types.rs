//! Core types shared by both colonies.

use super::environment::Environment;
use super::runner::{ConcurrentSolver, SequentialSolver};
use crate::error::AcsResult;

/// A city with a stable index into the distance and pheromone matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Position in input order, `0..n`.
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Node) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Result of a colony run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcsSolution {
    /// Length of the shortest closed tour seen during the run.
    pub best_length: f64,

    /// The tour itself, starting at the node the ant started from.
    pub best_tour: Vec<Node>,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Global best length after each iteration (non-increasing).
    pub length_history: Vec<f64>,
}

/// A strategy for running the colony over an initialized [`Environment`].
///
/// Both implementations mutate only the pheromone matrix (and, for the
/// sequential colony, the environment's random source).
pub trait Solver: Send + Sync {
    /// Runs every configured iteration and returns the global best tour.
    fn solve(&self, env: &mut Environment) -> AcsResult<AcsSolution>;

    /// Short human-readable name.
    fn name(&self) -> &'static str;
}

/// Selects one of the two colony implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Lock-step construction on one thread.
    Sequential,
    /// One thread per ant, joined by a rendezvous channel.
    Concurrent,
}

impl Strategy {
    /// Returns the solver implementing this strategy.
    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            Strategy::Sequential => Box::new(SequentialSolver),
            Strategy::Concurrent => Box::new(ConcurrentSolver),
        }
    }
}

/// Global best tour, tracked by node index.
#[derive(Debug, Clone)]
pub(crate) struct BestTour {
    pub(crate) length: f64,
    pub(crate) tour: Vec<usize>,
}

impl BestTour {
    pub(crate) fn new() -> Self {
        Self {
            length: f64::INFINITY,
            tour: Vec::new(),
        }
    }

    /// Replaces the incumbent if `length` is strictly shorter.
    pub(crate) fn offer(&mut self, length: f64, tour: &[usize]) -> bool {
        if length < self.length {
            self.length = length;
            self.tour.clear();
            self.tour.extend_from_slice(tour);
            true
        } else {
            false
        }
    }

    pub(crate) fn into_solution(
        self,
        env: &Environment,
        iterations: usize,
        length_history: Vec<f64>,
    ) -> AcsSolution {
        AcsSolution {
            best_length: self.length,
            best_tour: self.tour.iter().map(|&i| env.nodes()[i]).collect(),
            iterations,
            length_history,
        }
    }
}
