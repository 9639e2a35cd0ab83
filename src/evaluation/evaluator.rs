//! Tour cost evaluation.

use crate::distance::DistanceMatrix;
use crate::error::Error;
use crate::models::Tour;

/// Computes the total cyclic cost of a tour against a distance matrix.
///
/// The cost is the sum over consecutive city pairs plus the closing edge
/// from the last city back to the first. Evaluation is deterministic,
/// side-effect free, and O(n) per call; it is the dominant cost driver of
/// the whole solver, since local search evaluates one candidate tour per
/// examined move.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 2, 1],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![1, 2, 1, 0],
/// ]).unwrap();
///
/// let evaluator = TourEvaluator::new(&dm);
/// let cost = evaluator.cost(&Tour::identity(4)).unwrap();
/// assert_eq!(cost, 4);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator over the given distance matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Returns the total cyclic cost of the tour.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the tour's length does
    /// not match the matrix dimension.
    pub fn cost(&self, tour: &Tour) -> Result<i64, Error> {
        if tour.len() != self.distances.size() {
            return Err(Error::DimensionMismatch {
                tour_len: tour.len(),
                matrix_size: self.distances.size(),
            });
        }
        Ok(self.cyclic_cost(tour.cities()))
    }

    /// Cost of a city sequence whose length is known to match the matrix.
    pub(crate) fn cyclic_cost(&self, cities: &[usize]) -> i64 {
        if cities.is_empty() {
            return 0;
        }
        let mut total = 0;
        for pair in cities.windows(2) {
            total += self.distances.get(pair[0], pair[1]);
        }
        total + self.distances.get(cities[cities.len() - 1], cities[0])
    }
}
