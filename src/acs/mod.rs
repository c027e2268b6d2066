//! Ant Colony System (ACS) for the symmetric Euclidean TSP.
//!
//! A population of ants builds closed tours node by node, choosing each
//! next node with probability proportional to
//! `pheromone^alpha * (1/distance)^beta`. After every iteration each ant
//! deposits `Q / length` on the edges of its tour, then all edges evaporate
//! by `1 - rho`. Short tours therefore accumulate pheromone and bias later
//! construction toward themselves.
//!
//! Two colonies are provided: [`SequentialSolver`] steps all ants in lock
//! step on one thread; [`ConcurrentSolver`] builds each ant's tour on its
//! own thread and synchronizes before every pheromone update.
//!
//! # References
//!
//! - Dorigo, M. & Gambardella, L. M. (1997). "Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem", *IEEE Transactions
//!   on Evolutionary Computation* 1(1), 53-66.

mod ant;
mod config;
mod environment;
mod runner;
mod types;

pub use ant::{Ant, AntState};
pub use config::AcsConfig;
pub use environment::{Environment, MIN_DISTANCE};
pub use runner::{ConcurrentSolver, SequentialSolver};
pub use types::{AcsSolution, Node, Solver, Strategy};
