//! Multi-start optimization runner.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constructive::{nearest_neighbor, shuffled_tour};
use crate::distance::DistanceMatrix;
use crate::error::Error;
use crate::local_search::two_opt_improve;
use crate::models::{OptimizationOutcome, TourResult};

use super::config::{SolverConfig, StartPolicy};

/// Best-so-far holder threaded through the restart loop.
///
/// Replaces ambient global state with an explicit accumulator: the only
/// way to update it is `record_if_better`, which keeps the incumbent on
/// ties so the first-found best among equal-cost results wins.
#[derive(Debug)]
struct Incumbent {
    best: Option<TourResult>,
}

impl Incumbent {
    fn new() -> Self {
        Self { best: None }
    }

    /// Records the candidate if it is strictly cheaper than the incumbent.
    ///
    /// Returns `true` if the candidate was recorded.
    fn record_if_better(&mut self, candidate: TourResult) -> bool {
        match &self.best {
            Some(best) if candidate.cost() >= best.cost() => false,
            _ => {
                self.best = Some(candidate);
                true
            }
        }
    }

    fn into_best(self) -> Option<TourResult> {
        self.best
    }
}

/// Multi-start optimizer: repeated construction and 2-opt improvement
/// from varied starting conditions, keeping the global best tour.
///
/// Runs single-threaded and synchronously; each attempt owns its working
/// tour exclusively until it is discarded or recorded as the incumbent.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::solver::{MultiStartRunner, SolverConfig};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 5, 5],
///     vec![5, 0, 5],
///     vec![5, 5, 0],
/// ]).unwrap();
///
/// let outcome = MultiStartRunner::run(&dm, &SolverConfig::default()).unwrap();
/// assert_eq!(outcome.cost(), 15);
/// ```
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Runs the configured number of restart attempts and returns the
    /// best result with the measured wall-clock duration.
    ///
    /// Fails with [`Error::NoFeasibleTour`] if the matrix has dimension
    /// zero. At least one attempt always runs, so every feasible matrix
    /// yields an outcome.
    pub fn run(
        distances: &DistanceMatrix,
        config: &SolverConfig,
    ) -> Result<OptimizationOutcome, Error> {
        let n = distances.size();
        if n == 0 {
            return Err(Error::NoFeasibleTour);
        }

        let started = Instant::now();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let attempts = match config.start_policy {
            StartPolicy::Bounded(k) => config.restarts.min(n).min(k),
            StartPolicy::Cyclic | StartPolicy::Shuffled => config.restarts,
        }
        .max(1);

        let mut incumbent = Incumbent::new();
        for attempt in 0..attempts {
            let initial = match config.start_policy {
                StartPolicy::Cyclic => nearest_neighbor(distances, attempt % n)?,
                StartPolicy::Bounded(_) => nearest_neighbor(distances, attempt)?,
                StartPolicy::Shuffled => shuffled_tour(n, &mut rng),
            };

            let (tour, cost) = two_opt_improve(&initial, distances)?;
            incumbent.record_if_better(TourResult::new(tour, cost));
        }

        let best = incumbent.into_best().ok_or(Error::NoFeasibleTour)?;
        let elapsed_millis = started.elapsed().as_millis() as u64;
        Ok(OptimizationOutcome::new(best, elapsed_millis))
    }
}
