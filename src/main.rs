//! u-tsp: command-line batch driver.
//!
//! Reads one or more distance matrix files, solves each with the
//! multi-start optimizer, and writes a result file per input. A failing
//! input is reported and skipped; the remaining files still run.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use u_tsp::io::{read_distance_matrix, write_outcome};
use u_tsp::solver::{MultiStartRunner, SolverConfig, StartPolicy};
use u_tsp::Error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Nearest-neighbor starts cycling through all cities.
    Cyclic,
    /// Nearest-neighbor starts from the first `bound` cities.
    Bounded,
    /// Random shuffled starts instead of nearest-neighbor.
    Shuffled,
}

#[derive(Parser, Debug)]
#[command(name = "u-tsp", version, about = "Approximate TSP solver over explicit distance matrices")]
struct Cli {
    /// Distance matrix files to solve.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of restart attempts per instance.
    #[arg(long, default_value_t = 100)]
    restarts: usize,

    /// Start-condition selection policy.
    #[arg(long, value_enum, default_value_t = PolicyArg::Cyclic)]
    policy: PolicyArg,

    /// Start-city cap for the bounded policy.
    #[arg(long, default_value_t = 10)]
    bound: usize,

    /// Random seed for the shuffled policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for result files (defaults to each input's directory).
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let policy = match self.policy {
            PolicyArg::Cyclic => StartPolicy::Cyclic,
            PolicyArg::Bounded => StartPolicy::Bounded(self.bound),
            PolicyArg::Shuffled => StartPolicy::Shuffled,
        };
        let mut config = SolverConfig::default()
            .with_restarts(self.restarts)
            .with_start_policy(policy);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

/// Result file path for an input: `out_<name>` next to the input, or in
/// the chosen output directory.
fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let name = match input.file_name() {
        Some(name) => format!("out_{}", name.to_string_lossy()),
        None => "out".to_string(),
    };
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn solve_file(
    input: &Path,
    config: &SolverConfig,
    output_dir: Option<&Path>,
) -> Result<PathBuf, Error> {
    let distances = read_distance_matrix(input)?;
    if !distances.is_symmetric() {
        log::warn!(
            "{}: matrix is asymmetric; solving with directed costs",
            input.display()
        );
    }

    let outcome = MultiStartRunner::run(&distances, config)?;
    let output = output_path(input, output_dir);
    write_outcome(&output, &outcome)?;

    log::info!(
        "{}: cost {} in {} ms -> {}",
        input.display(),
        outcome.cost(),
        outcome.elapsed_millis(),
        output.display()
    );
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.solver_config();

    let mut failures = 0;
    for input in &cli.inputs {
        if let Err(err) = solve_file(input, &config, cli.output_dir.as_deref()) {
            log::error!("{}: {err}", input.display());
            failures += 1;
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
