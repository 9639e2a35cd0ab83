//! 2-opt tour improvement.
//!
//! # Algorithm
//!
//! A 2-opt move reverses the sub-sequence `tour[i..=j]`, which removes the
//! edges entering `tour[i]` and leaving `tour[j]` and replaces them with
//! two new edges, leaving all other edges unchanged.
//!
//! Each pass scans all pairs `(i, j)` with `0 ≤ i < n-1`, `i < j < n` in
//! index order. For every pair the candidate tour is materialized and its
//! full cyclic cost recomputed; a strictly cheaper candidate immediately
//! replaces the current tour, and the scan continues against the updated
//! baseline (eager first-improvement acceptance, not best-of-pass).
//! A pass that accepts no move terminates the search: the tour is then a
//! local optimum under the 2-opt neighborhood.
//!
//! # Complexity
//!
//! O(n) cost evaluation for each of the O(n²) candidates gives O(n³) per
//! pass. Pass count is bounded only by termination: the cost is a
//! non-negative integer that strictly decreases on every accepted move,
//! so at most `initial cost` moves can be accepted in total.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::error::Error;
use crate::evaluation::TourEvaluator;
use crate::models::Tour;

/// Improves a tour to a local optimum under the 2-opt neighborhood.
///
/// Returns the improved tour and its total cost. The input tour is left
/// untouched; the returned tour equals the input when no improving move
/// exists (tours of fewer than four cities in particular admit none on
/// symmetric inputs).
///
/// Fails with [`Error::DimensionMismatch`] if the tour's length does not
/// match the matrix dimension.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 2, 1],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![1, 2, 1, 0],
/// ]).unwrap();
///
/// // 0→2 and 1→3 are the expensive diagonals; 2-opt untangles them.
/// let crossed = Tour::new(vec![0, 2, 1, 3]).unwrap();
/// let (improved, cost) = two_opt_improve(&crossed, &dm).unwrap();
/// assert_eq!(cost, 4);
/// assert_eq!(improved.len(), 4);
/// ```
pub fn two_opt_improve(tour: &Tour, distances: &DistanceMatrix) -> Result<(Tour, i64), Error> {
    let evaluator = TourEvaluator::new(distances);
    let mut current_cost = evaluator.cost(tour)?;

    let n = tour.len();
    if n < 2 {
        return Ok((tour.clone(), current_cost));
    }

    let mut current = tour.cities().to_vec();
    let mut improved = true;

    while improved {
        improved = false;

        for i in 0..n - 1 {
            for j in i + 1..n {
                let mut candidate = current.clone();
                candidate[i..=j].reverse();
                let candidate_cost = evaluator.cyclic_cost(&candidate);

                if candidate_cost < current_cost {
                    current = candidate;
                    current_cost = candidate_cost;
                    improved = true;
                }
            }
        }
    }

    Ok((Tour::from_permutation(current), current_cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0, 1, 2, 1],
            vec![1, 0, 1, 2],
            vec![2, 1, 0, 1],
            vec![1, 2, 1, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = square();
        let (improved, cost) = two_opt_improve(&Tour::identity(4), &dm).expect("matched");
        assert_eq!(improved.cities(), &[0, 1, 2, 3]);
        assert_eq!(cost, 4);
    }

    #[test]
    fn test_2opt_uncrosses_diagonals() {
        let dm = square();
        let crossed = Tour::new(vec![0, 2, 1, 3]).expect("valid");
        let (improved, cost) = two_opt_improve(&crossed, &dm).expect("matched");
        assert_eq!(cost, 4);
        // Still a permutation after reversals.
        let mut sorted = improved.cities().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_2opt_is_fixed_point() {
        let dm = square();
        let crossed = Tour::new(vec![0, 2, 1, 3]).expect("valid");
        let (once, once_cost) = two_opt_improve(&crossed, &dm).expect("matched");
        let (twice, twice_cost) = two_opt_improve(&once, &dm).expect("matched");
        assert_eq!(once, twice);
        assert_eq!(once_cost, twice_cost);
    }

    #[test]
    fn test_2opt_single_city() {
        let dm = DistanceMatrix::from_data(1, vec![0]).expect("valid");
        let (improved, cost) = two_opt_improve(&Tour::identity(1), &dm).expect("matched");
        assert_eq!(improved.cities(), &[0]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn test_2opt_three_cities_unchanged() {
        // All 3-city tours of a symmetric matrix have equal cost; no move
        // is strictly improving.
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, 5, 5],
            vec![5, 0, 5],
            vec![5, 5, 0],
        ])
        .expect("valid");
        let (improved, cost) = two_opt_improve(&Tour::identity(3), &dm).expect("matched");
        assert_eq!(improved.cities(), &[0, 1, 2]);
        assert_eq!(cost, 15);
    }

    #[test]
    fn test_2opt_dimension_mismatch() {
        let dm = square();
        let err = two_opt_improve(&Tour::identity(3), &dm).expect_err("mismatch");
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_2opt_line_instance() {
        // Cities on a line at 0, 1, 2, 3; visiting them in order is
        // optimal (cost 6), any interleaving is worse.
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 1, 2],
            vec![2, 1, 0, 1],
            vec![3, 2, 1, 0],
        ])
        .expect("valid");
        let scrambled = Tour::new(vec![0, 2, 1, 3]).expect("valid");
        let (_, cost) = two_opt_improve(&scrambled, &dm).expect("matched");
        assert_eq!(cost, 6);
    }

    proptest! {
        #[test]
        fn test_2opt_never_worsens(
            (n, data) in (1usize..8)
                .prop_flat_map(|n| (Just(n), prop::collection::vec(0i64..100, n * n)))
        ) {
            let dm = DistanceMatrix::from_data(n, data).expect("sized");
            let evaluator = TourEvaluator::new(&dm);
            let initial = Tour::identity(n);
            let initial_cost = evaluator.cost(&initial).expect("matched");
            let (improved, cost) = two_opt_improve(&initial, &dm).expect("matched");
            prop_assert!(cost <= initial_cost);
            prop_assert_eq!(cost, evaluator.cost(&improved).expect("matched"));
        }

        #[test]
        fn test_2opt_result_is_local_optimum(
            (n, data) in (2usize..7)
                .prop_flat_map(|n| (Just(n), prop::collection::vec(0i64..50, n * n)))
        ) {
            let dm = DistanceMatrix::from_data(n, data).expect("sized");
            let evaluator = TourEvaluator::new(&dm);
            let (improved, cost) = two_opt_improve(&Tour::identity(n), &dm).expect("matched");

            // No single reversal may reduce the cost any further.
            let cities = improved.cities();
            for i in 0..n - 1 {
                for j in i + 1..n {
                    let mut candidate = cities.to_vec();
                    candidate[i..=j].reverse();
                    prop_assert!(evaluator.cyclic_cost(&candidate) >= cost);
                }
            }
        }
    }
}
