//! Error types for the ant colony solver.

use thiserror::Error;

/// Result type alias for colony operations.
pub type AcsResult<T> = Result<T, AcsError>;

/// Errors raised by instance loading, configuration checks and the solvers.
///
/// Precondition violations inside the core are fatal for the current run;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum AcsError {
    /// An environment was loaded from an empty point list.
    #[error("instance has no nodes")]
    EmptyInstance,

    /// A tour length was requested for an empty node sequence.
    #[error("cannot measure an empty tour")]
    EmptyTour,

    /// A solver ran before `Environment::initialize`.
    #[error("environment must be initialized before solving")]
    NotInitialized,

    /// The roulette-wheel denominator collapsed to zero.
    #[error("attractiveness sum from node {node} is {sum}, no candidate can be selected")]
    ZeroAttractiveness {
        /// Node the ant was leaving.
        node: usize,
        /// The offending sum.
        sum: f64,
    },

    /// The roulette-wheel denominator is NaN or infinite.
    #[error("attractiveness sum from node {node} is not finite ({sum})")]
    NonFiniteAttractiveness {
        /// Node the ant was leaving.
        node: usize,
        /// The offending sum.
        sum: f64,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A row of an instance file could not be parsed.
    #[error("line {line}: {cause}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        cause: String,
    },

    /// Reading an instance file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendezvous channel closed before every ant reported.
    #[error("an ant worker exited without reporting its tour")]
    WorkerDisconnected,
}
