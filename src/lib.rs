//! Ant Colony System solver for the symmetric Euclidean Traveling
//! Salesman Problem.
//!
//! - **Environment**: node coordinates, the distance matrix, the mutable
//!   pheromone matrix and the root random source.
//! - **Ant**: builds one closed tour by roulette-wheel selection over
//!   pheromone- and distance-weighted attractiveness.
//! - **Sequential colony**: all ants advance in lock step on one thread.
//! - **Concurrent colony**: one thread per ant during construction,
//!   synchronized through a rendezvous channel before pheromone updates.
//!
//! # Example
//!
//! ```
//! use u_acs::acs::{AcsConfig, Environment, SequentialSolver, Solver};
//!
//! let points = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
//! let config = AcsConfig::default().with_iterations(50).with_seed(1);
//! let mut env = Environment::load(&points, config)?;
//! env.initialize();
//!
//! let solution = SequentialSolver.solve(&mut env)?;
//! assert!((solution.best_length - 4.0).abs() < 1e-9);
//! # Ok::<(), u_acs::AcsError>(())
//! ```

pub mod acs;
pub mod error;
pub mod instance;

pub use error::{AcsError, AcsResult};
