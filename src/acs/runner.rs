//! Colony execution loops.
//!
//! Both colonies run the same iteration:
//!
//! 1. Reset every ant onto a random start node
//! 2. Construct a full tour per ant
//! 3. Each ant deposits `Q / length` along its own tour
//! 4. Evaporate every edge by `1 - rho`
//! 5. Fold the ants' tours into the global best
//!
//! They differ only in step 2. [`SequentialSolver`] advances all ants one
//! node at a time on the calling thread, drawing from the environment's
//! random source. [`ConcurrentSolver`] gives each ant its own thread and
//! random source, and the controller blocks on a rendezvous channel until
//! every ant has reported before touching the pheromone matrix.

use super::ant::Ant;
use super::environment::Environment;
use super::types::{AcsSolution, BestTour, Solver};
use crate::error::{AcsError, AcsResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info, instrument, trace};

/// Lock-step colony on a single thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSolver;

impl Solver for SequentialSolver {
    #[instrument(skip_all, fields(strategy = "sequential", nodes = env.len()))]
    fn solve(&self, env: &mut Environment) -> AcsResult<AcsSolution> {
        if !env.is_initialized() {
            return Err(AcsError::NotInitialized);
        }
        let iterations = env.config().iterations;
        let mut ants: Vec<Ant> = (0..env.config().ant_count).map(Ant::new).collect();
        let mut best = BestTour::new();
        let mut length_history = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            for ant in &mut ants {
                let start = env.draw_node();
                ant.reset_at(env, start)?;
            }

            // Every round moves each unfinished ant by one node, so all ants
            // finish in the same round.
            let mut completed = ants.iter().filter(|a| a.is_complete()).count();
            while completed < ants.len() {
                for ant in &mut ants {
                    if ant.is_complete() {
                        continue;
                    }
                    let r = env.draw_unit();
                    if ant.advance(env, r)? {
                        completed += 1;
                    }
                }
            }

            update_pheromones(env, &ants);

            let mut iteration_best = f64::INFINITY;
            for ant in &ants {
                if let Some(length) = ant.length() {
                    iteration_best = iteration_best.min(length);
                    best.offer(length, ant.tour());
                }
            }
            length_history.push(best.length);
            debug!(iteration, iteration_best, best = best.length, "iteration done");
        }

        info!(best = best.length, iterations, "sequential colony finished");
        Ok(best.into_solution(env, iterations, length_history))
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// One ant per thread, joined through a rendezvous channel each iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrentSolver;

/// An ant paired with the random source only it draws from.
struct Worker {
    ant: Ant,
    rng: StdRng,
}

impl Worker {
    fn build_tour(&mut self, env: &Environment) -> AcsResult<Completion> {
        self.ant.reset(env, &mut self.rng)?;
        let length = self.ant.construct(env, &mut self.rng)?;
        Ok(Completion {
            ant: self.ant.id(),
            length,
            tour: self.ant.tour().to_vec(),
        })
    }
}

/// What a worker reports once its tour is complete.
struct Completion {
    ant: usize,
    length: f64,
    tour: Vec<usize>,
}

impl Solver for ConcurrentSolver {
    #[instrument(skip_all, fields(strategy = "concurrent", nodes = env.len()))]
    fn solve(&self, env: &mut Environment) -> AcsResult<AcsSolution> {
        if !env.is_initialized() {
            return Err(AcsError::NotInitialized);
        }
        let iterations = env.config().iterations;
        // Sub-seeds are drawn in ant order from the root source before any
        // thread starts.
        let mut workers: Vec<Worker> = (0..env.config().ant_count)
            .map(|id| Worker {
                ant: Ant::new(id),
                rng: StdRng::seed_from_u64(env.draw_seed()),
            })
            .collect();
        let mut best = BestTour::new();
        let mut length_history = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            let iteration_best = construct_concurrently(env, &mut workers, &mut best)?;

            update_pheromones(env, workers.iter().map(|w| &w.ant));

            length_history.push(best.length);
            debug!(iteration, iteration_best, best = best.length, "iteration done");
        }

        info!(best = best.length, iterations, "concurrent colony finished");
        Ok(best.into_solution(env, iterations, length_history))
    }

    fn name(&self) -> &'static str {
        "concurrent"
    }
}

/// Runs one construction phase: every worker builds its tour on its own
/// thread while the controller drains exactly one message per worker.
///
/// The environment is only read during this phase. Returns the shortest
/// tour of the iteration.
fn construct_concurrently(
    env: &Environment,
    workers: &mut [Worker],
    best: &mut BestTour,
) -> AcsResult<f64> {
    let expected = workers.len();
    let (tx, rx) = mpsc::sync_channel::<AcsResult<Completion>>(expected);

    thread::scope(|scope| {
        for worker in workers.iter_mut() {
            let tx = tx.clone();
            scope.spawn(move || {
                // The controller only hangs up after receiving from everyone.
                let _ = tx.send(worker.build_tour(env));
            });
        }
        drop(tx);

        let mut iteration_best = f64::INFINITY;
        let mut failure = None;
        for _ in 0..expected {
            match rx.recv() {
                Ok(Ok(done)) => {
                    trace!(ant = done.ant, length = done.length, "ant reported");
                    iteration_best = iteration_best.min(done.length);
                    best.offer(done.length, &done.tour);
                }
                Ok(Err(e)) => {
                    if failure.is_none() {
                        failure = Some(e);
                    }
                }
                Err(_) => return Err(AcsError::WorkerDisconnected),
            }
        }
        match failure {
            Some(e) => Err(e),
            None => Ok(iteration_best),
        }
    })
}

/// Applies every ant's deposit, then evaporation.
///
/// Evaporation must see the post-deposit values.
fn update_pheromones<'a>(env: &mut Environment, ants: impl IntoIterator<Item = &'a Ant>) {
    for ant in ants {
        ant.deposit(env);
    }
    env.evaporate();
}
