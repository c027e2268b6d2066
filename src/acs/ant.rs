//! Tour construction by a single ant.

use super::environment::Environment;
use crate::error::{AcsError, AcsResult};
use rand::Rng;

/// Lifecycle of an [`Ant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntState {
    /// Never reset.
    Fresh,
    /// Placed on a start node, unvisited nodes remain.
    Constructing,
    /// Every node visited; `length` is valid.
    Complete,
}

/// Builds one closed tour by roulette-wheel selection over the
/// attractiveness of unvisited nodes.
///
/// At every point `tour ∪ unvisited` covers all nodes exactly once and the
/// current position is the last element of `tour`. `unvisited` keeps a
/// stable order so a fixed seed reproduces the same tour.
#[derive(Debug, Clone)]
pub struct Ant {
    id: usize,
    state: AntState,
    tour: Vec<usize>,
    unvisited: Vec<usize>,
    length: f64,
}

impl Ant {
    /// Creates a fresh ant; call [`Ant::reset`] before stepping.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            state: AntState::Fresh,
            tour: Vec::new(),
            unvisited: Vec::new(),
            length: 0.0,
        }
    }

    /// Position of the ant in its colony.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AntState {
        self.state
    }

    /// Whether every node has been visited.
    pub fn is_complete(&self) -> bool {
        self.state == AntState::Complete
    }

    /// Visited nodes in order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Nodes not yet visited, in selection order.
    pub fn unvisited(&self) -> &[usize] {
        &self.unvisited
    }

    /// Node the ant currently stands on.
    pub fn current(&self) -> Option<usize> {
        self.tour.last().copied()
    }

    /// Closed tour length; `None` until complete.
    pub fn length(&self) -> Option<f64> {
        self.is_complete().then_some(self.length)
    }

    /// Restarts construction from a uniformly random node.
    pub fn reset<R: Rng>(&mut self, env: &Environment, rng: &mut R) -> AcsResult<()> {
        let start = rng.random_range(0..env.len());
        self.reset_at(env, start)
    }

    /// Restarts construction from `start`.
    ///
    /// A single-node instance completes immediately with length 0.
    pub fn reset_at(&mut self, env: &Environment, start: usize) -> AcsResult<()> {
        self.tour.clear();
        self.tour.push(start);
        self.unvisited.clear();
        self.unvisited.extend((0..env.len()).filter(|&u| u != start));
        self.length = 0.0;
        self.state = AntState::Constructing;
        self.finish_if_done(env)?;
        Ok(())
    }

    /// Draws from `rng` and moves to the next node.
    ///
    /// Returns `true` when this call completed the tour. A complete ant
    /// ignores the call and draws nothing.
    pub fn step<R: Rng>(&mut self, env: &Environment, rng: &mut R) -> AcsResult<bool> {
        if self.state != AntState::Constructing {
            return Ok(false);
        }
        let r = rng.random::<f64>();
        self.advance(env, r)
    }

    /// Moves to the next node using the uniform draw `r` in `[0, 1)`.
    ///
    /// The first unvisited node (in container order) at which the
    /// cumulative normalized attractiveness reaches `r` is chosen. If
    /// rounding keeps the sum below `r`, the last candidate is taken.
    pub fn advance(&mut self, env: &Environment, r: f64) -> AcsResult<bool> {
        if self.state != AntState::Constructing {
            return Ok(false);
        }
        let Some(current) = self.current() else {
            return Ok(false);
        };

        let z: f64 = self
            .unvisited
            .iter()
            .map(|&u| env.attractiveness(current, u))
            .sum();
        if !z.is_finite() {
            return Err(AcsError::NonFiniteAttractiveness { node: current, sum: z });
        }
        if z <= 0.0 {
            return Err(AcsError::ZeroAttractiveness { node: current, sum: z });
        }

        let mut cumulative = 0.0;
        let mut chosen = self.unvisited.len() - 1;
        for (idx, &u) in self.unvisited.iter().enumerate() {
            cumulative += env.attractiveness(current, u) / z;
            if cumulative >= r {
                chosen = idx;
                break;
            }
        }

        let next = self.unvisited.remove(chosen);
        self.tour.push(next);
        self.finish_if_done(env)
    }

    /// Steps until the tour is complete and returns its length.
    pub fn construct<R: Rng>(&mut self, env: &Environment, rng: &mut R) -> AcsResult<f64> {
        while self.state == AntState::Constructing {
            self.step(env, rng)?;
        }
        Ok(self.length)
    }

    /// Adds `Q / length` to every edge of the closed tour.
    ///
    /// Does nothing before completion or for a zero-length tour.
    pub fn deposit(&self, env: &mut Environment) {
        if !self.is_complete() || self.length <= 0.0 {
            return;
        }
        let delta = env.q() / self.length;
        let closing = [self.tour[self.tour.len() - 1], self.tour[0]];
        for edge in self.tour.windows(2).chain(std::iter::once(&closing[..])) {
            env.reinforce(edge[0], edge[1], delta);
        }
    }

    fn finish_if_done(&mut self, env: &Environment) -> AcsResult<bool> {
        if !self.unvisited.is_empty() {
            return Ok(false);
        }
        self.length = env.tour_length(&self.tour)?;
        self.state = AntState::Complete;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acs::AcsConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn env_from(points: &[(f64, f64)], config: AcsConfig) -> Environment {
        let mut env = Environment::load(points, config).unwrap();
        env.initialize();
        env
    }

    fn pentagon() -> Environment {
        let points: Vec<(f64, f64)> = (0..5)
            .map(|k| {
                let a = k as f64 * std::f64::consts::TAU / 5.0;
                (a.cos(), a.sin())
            })
            .collect();
        env_from(&points, AcsConfig::default())
    }

    fn assert_partition(ant: &Ant, n: usize) {
        let mut seen = vec![false; n];
        for &v in ant.tour().iter().chain(ant.unvisited()) {
            assert!(!seen[v], "node {v} appears twice");
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_new_ant_is_fresh() {
        let ant = Ant::new(7);
        assert_eq!(ant.id(), 7);
        assert_eq!(ant.state(), AntState::Fresh);
        assert_eq!(ant.length(), None);
        assert_eq!(ant.current(), None);
    }

    #[test]
    fn test_reset_places_ant() {
        let env = pentagon();
        let mut ant = Ant::new(0);
        ant.reset_at(&env, 2).unwrap();
        assert_eq!(ant.state(), AntState::Constructing);
        assert_eq!(ant.tour(), &[2]);
        assert_eq!(ant.unvisited(), &[0, 1, 3, 4]);
        assert_eq!(ant.current(), Some(2));
    }

    #[test]
    fn test_partition_holds_each_step() {
        let env = pentagon();
        let mut rng = StdRng::seed_from_u64(9);
        let mut ant = Ant::new(0);
        ant.reset(&env, &mut rng).unwrap();
        assert_partition(&ant, 5);
        let mut completions = 0;
        while !ant.is_complete() {
            if ant.step(&env, &mut rng).unwrap() {
                completions += 1;
            }
            assert_partition(&ant, 5);
            assert_eq!(ant.current(), ant.tour().last().copied());
        }
        assert_eq!(completions, 1);
        assert_eq!(ant.tour().len(), 5);
    }

    #[test]
    fn test_step_after_complete_is_noop() {
        let env = pentagon();
        let mut rng = StdRng::seed_from_u64(3);
        let mut ant = Ant::new(0);
        ant.reset(&env, &mut rng).unwrap();
        let length = ant.construct(&env, &mut rng).unwrap();
        let tour = ant.tour().to_vec();

        let mut probe = rng.clone();
        assert!(!ant.step(&env, &mut rng).unwrap());
        assert_eq!(ant.tour(), tour.as_slice());
        assert_eq!(ant.length(), Some(length));
        // no draw was consumed
        assert_eq!(rng.random::<u64>(), probe.random::<u64>());
    }

    #[test]
    fn test_advance_roulette_first_crossing() {
        // From node 0 of the unit square: attractiveness to 1 and 3 is 0.25,
        // to 2 is 0.125; normalized 0.4, 0.2, 0.4 in order [1, 2, 3].
        let env = env_from(
            &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
            AcsConfig::default(),
        );
        let mut ant = Ant::new(0);

        ant.reset_at(&env, 0).unwrap();
        ant.advance(&env, 0.0).unwrap();
        assert_eq!(ant.current(), Some(1));

        ant.reset_at(&env, 0).unwrap();
        ant.advance(&env, 0.5).unwrap();
        assert_eq!(ant.current(), Some(2));

        ant.reset_at(&env, 0).unwrap();
        ant.advance(&env, 0.61).unwrap();
        assert_eq!(ant.current(), Some(3));
    }

    #[test]
    fn test_advance_fallback_takes_last_candidate() {
        let env = pentagon();
        let mut ant = Ant::new(0);
        ant.reset_at(&env, 0).unwrap();
        ant.advance(&env, 1.5).unwrap();
        assert_eq!(ant.current(), Some(4));
    }

    #[test]
    fn test_zero_attractiveness_is_error() {
        let mut env = env_from(
            &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)],
            AcsConfig::default().with_rho(1.0),
        );
        env.evaporate();
        let mut ant = Ant::new(0);
        ant.reset_at(&env, 0).unwrap();
        let err = ant.advance(&env, 0.3).unwrap_err();
        assert!(matches!(err, AcsError::ZeroAttractiveness { node: 0, .. }));
    }

    #[test]
    fn test_single_node_completes_on_reset() {
        let env = env_from(&[(4.0, 4.0)], AcsConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        let mut ant = Ant::new(0);
        ant.reset(&env, &mut rng).unwrap();
        assert!(ant.is_complete());
        assert_eq!(ant.length(), Some(0.0));
        assert_eq!(ant.tour(), &[0]);
    }

    #[test]
    fn test_two_nodes_there_and_back() {
        let mut env = env_from(&[(0.0, 0.0), (3.0, 4.0)], AcsConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        let mut ant = Ant::new(0);
        ant.reset(&env, &mut rng).unwrap();
        let length = ant.construct(&env, &mut rng).unwrap();
        assert!((length - 10.0).abs() < 1e-12);

        // Q = 5, delta = 0.5, applied on the outbound and closing edge
        ant.deposit(&mut env);
        assert!((env.pheromone(0, 1) - 1.5).abs() < 1e-12);
        assert!((env.pheromone(1, 0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_deposit_covers_closing_edge() {
        let mut env = env_from(
            &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
            AcsConfig::default(),
        );
        let mut ant = Ant::new(0);
        ant.reset_at(&env, 0).unwrap();
        for _ in 0..3 {
            ant.advance(&env, 0.0).unwrap();
        }
        assert_eq!(ant.tour(), &[0, 1, 2, 3]);
        assert_eq!(ant.length(), Some(4.0));

        ant.deposit(&mut env);
        // Q = 1, length = 4
        for (i, j) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            assert!((env.pheromone(i, j) - 0.5).abs() < 1e-12);
        }
        assert!((env.pheromone(0, 2) - 0.25).abs() < 1e-12);
        assert!((env.pheromone(1, 3) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_deposit_before_complete_is_noop() {
        let mut env = pentagon();
        let mut ant = Ant::new(0);
        ant.reset_at(&env, 0).unwrap();
        let before = env.pheromone(0, 1);
        ant.deposit(&mut env);
        assert_eq!(env.pheromone(0, 1), before);
    }

    #[test]
    fn test_same_seed_same_tour() {
        let env = pentagon();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ant = Ant::new(0);
            ant.reset(&env, &mut rng).unwrap();
            ant.construct(&env, &mut rng).unwrap();
            ant.tour().to_vec()
        };
        assert_eq!(run(11), run(11));
    }
}
