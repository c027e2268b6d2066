//! ACS configuration.

use crate::error::{AcsError, AcsResult};

/// Parameters of an Ant Colony System run.
///
/// The solvers take these values as given. Callers that accept parameters
/// from users should run [`AcsConfig::validate`] first.
///
/// # Examples
///
/// ```
/// use u_acs::acs::AcsConfig;
///
/// let config = AcsConfig::default()
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_rho(0.1)
///     .with_ant_count(10)
///     .with_iterations(50)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.ant_count, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcsConfig {
    /// Pheromone weight in the attractiveness term.
    pub alpha: f64,

    /// Inverse-distance weight in the attractiveness term.
    pub beta: f64,

    /// Evaporation rate in `[0, 1]`. Every edge is scaled by `1 - rho`
    /// once per iteration.
    pub rho: f64,

    /// Number of ants constructing a tour each iteration.
    pub ant_count: usize,

    /// Number of iterations to run. There is no early stop.
    pub iterations: usize,

    /// Root seed. The sequential colony draws from it directly; the
    /// concurrent colony derives one sub-seed per ant from it.
    pub seed: u64,

    /// Compute distance matrix rows in parallel (requires the `parallel`
    /// feature, ignored otherwise).
    pub parallel_distances: bool,
}

impl Default for AcsConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
            rho: 0.1,
            ant_count: 10,
            iterations: 100,
            seed: 1,
            parallel_distances: false,
        }
    }
}

impl AcsConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel_distances(mut self, parallel: bool) -> Self {
        self.parallel_distances = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AcsResult<()> {
        if !self.alpha.is_finite() {
            return Err(AcsError::InvalidConfig(format!(
                "alpha must be finite, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() {
            return Err(AcsError::InvalidConfig(format!(
                "beta must be finite, got {}",
                self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(AcsError::InvalidConfig(format!(
                "rho must be in [0, 1], got {}",
                self.rho
            )));
        }
        if self.ant_count == 0 {
            return Err(AcsError::InvalidConfig("ant_count must be positive".into()));
        }
        if self.iterations == 0 {
            return Err(AcsError::InvalidConfig("iterations must be positive".into()));
        }
        Ok(())
    }
}
