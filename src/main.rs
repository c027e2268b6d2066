//! u-acs CLI: solve a point-list TSP instance with the Ant Colony System.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_acs::acs::{AcsConfig, AcsSolution, Environment, Strategy};
use u_acs::instance::read_points;
use u_acs::AcsResult;

#[derive(Parser)]
#[command(name = "u-acs")]
#[command(about = "Approximate a TSP tour with the Ant Colony System")]
#[command(version)]
struct Cli {
    /// Instance file: a header line, then one `x y` pair per line
    file: PathBuf,

    /// Random seed
    seed: u64,

    /// Pheromone weight (alpha)
    alpha: f64,

    /// Distance weight (beta)
    beta: f64,

    /// Evaporation rate (rho), in [0, 1]
    rho: f64,

    /// Number of ants
    ant_count: usize,

    /// Number of iterations
    iterations: usize,

    /// Which colony to run
    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// Compute the distance matrix in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel_distances: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Both,
    Sequential,
    Concurrent,
}

impl StrategyArg {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyArg::Both => &[Strategy::Sequential, Strategy::Concurrent],
            StrategyArg::Sequential => &[Strategy::Sequential],
            StrategyArg::Concurrent => &[Strategy::Concurrent],
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AcsResult<()> {
    let config = AcsConfig::default()
        .with_seed(cli.seed)
        .with_alpha(cli.alpha)
        .with_beta(cli.beta)
        .with_rho(cli.rho)
        .with_ant_count(cli.ant_count)
        .with_iterations(cli.iterations)
        .with_parallel_distances(cli.parallel_distances);
    config.validate()?;

    let points = load(&cli.file)?;
    let mut env = Environment::load(&points, config)?;

    for &strategy in cli.strategy.strategies() {
        let solver = strategy.solver();
        info!(strategy = solver.name(), "solving");

        let started = Instant::now();
        env.initialize();
        let solution = solver.solve(&mut env)?;
        let elapsed = started.elapsed();

        report(solver.name(), &solution);
        println!("{} execution time: {elapsed:?}", solver.name());
    }

    Ok(())
}

fn load(path: &Path) -> AcsResult<Vec<(f64, f64)>> {
    info!(file = %path.display(), "reading instance");
    let points = read_points(path)?;
    info!(nodes = points.len(), "instance loaded");
    Ok(points)
}

fn report(name: &str, solution: &AcsSolution) {
    let tour: Vec<String> = solution.best_tour.iter().map(|n| n.id.to_string()).collect();
    println!("{name} result: {}", solution.best_length);
    println!("{name} tour: {}", tour.join(" "));
}
