//! Scored-tour and optimization outcome types.

use serde::Serialize;

use super::Tour;

/// A tour paired with its total cyclic cost.
///
/// Produced by scoring a tour against a distance matrix; never mutated
/// after creation.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Tour, TourResult};
///
/// let result = TourResult::new(Tour::identity(3), 15);
/// assert_eq!(result.cost(), 15);
/// assert_eq!(result.tour().cities(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TourResult {
    tour: Tour,
    cost: i64,
}

impl TourResult {
    /// Creates a new scored tour.
    pub fn new(tour: Tour, cost: i64) -> Self {
        Self { tour, cost }
    }

    /// Returns the tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Returns the total cyclic cost.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Consumes the result, returning the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}

/// The best result discovered across all restart attempts, plus the
/// wall-clock duration of the whole solve.
///
/// This is the sole long-lived artifact of an optimization run; the
/// output writer consumes it to produce the result file.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationOutcome {
    best: TourResult,
    elapsed_millis: u64,
}

impl OptimizationOutcome {
    /// Creates a new outcome.
    pub fn new(best: TourResult, elapsed_millis: u64) -> Self {
        Self {
            best,
            elapsed_millis,
        }
    }

    /// Returns the best scored tour.
    pub fn best(&self) -> &TourResult {
        &self.best
    }

    /// Returns the best tour.
    pub fn tour(&self) -> &Tour {
        self.best.tour()
    }

    /// Returns the best tour's total cost.
    pub fn cost(&self) -> i64 {
        self.best.cost()
    }

    /// Returns the elapsed wall-clock time in milliseconds.
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }
}
