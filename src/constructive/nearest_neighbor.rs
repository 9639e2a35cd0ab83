//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given city, always visit the
//! nearest unvisited city next.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem",
//! *SIAM Journal on Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;
use crate::error::Error;
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Places `start_city` first, then repeatedly appends the unvisited city
/// closest to the current one. Candidates are scanned in ascending index
/// order with a strict comparison, so distance ties break toward the
/// lowest city index. The result is deterministic for a given matrix and
/// start city, and is a valid permutation by construction.
///
/// Fails with [`Error::InvalidStartCity`] if `start_city` is outside
/// `[0, n)`, before any work is done.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::nearest_neighbor;
/// use u_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 2, 1],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![1, 2, 1, 0],
/// ]).unwrap();
///
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 2, 3]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start_city: usize) -> Result<Tour, Error> {
    let n = distances.size();
    if start_city >= n {
        return Err(Error::InvalidStartCity {
            start: start_city,
            num_cities: n,
        });
    }

    let mut visited = vec![false; n];
    let mut cities = Vec::with_capacity(n);
    visited[start_city] = true;
    cities.push(start_city);
    let mut current = start_city;

    for _ in 1..n {
        let mut best: Option<(usize, i64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let d = distances.get(current, candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((candidate, d)),
            }
        }

        // One unvisited city remains per iteration, so the scan always
        // finds a successor.
        if let Some((next, _)) = best {
            visited[next] = true;
            cities.push(next);
            current = next;
        }
    }

    Ok(Tour::from_permutation(cities))
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
    fn test_nn_from_zero() {
        let tour = nearest_neighbor(&square(), 0).expect("valid start");
        assert_eq!(tour.cities(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_from_each_start() {
        let dm = square();
        for start in 0..4 {
            let tour = nearest_neighbor(&dm, start).expect("valid start");
            assert_eq!(tour.cities()[0], start);
            assert_eq!(tour.len(), 4);
        }
    }

    #[test]
    fn test_nn_tie_breaks_to_lowest_index() {
        // From city 0, cities 1 and 3 are both at distance 1.
        let tour = nearest_neighbor(&square(), 0).expect("valid start");
        assert_eq!(tour.cities()[1], 1);
    }

    #[test]
    fn test_nn_start_out_of_range() {
        let err = nearest_neighbor(&square(), 4).expect_err("out of range");
        assert!(matches!(
            err,
            Error::InvalidStartCity {
                start: 4,
                num_cities: 4,
            }
        ));
    }

    #[test]
    fn test_nn_empty_matrix_rejects_any_start() {
        let dm = DistanceMatrix::from_data(0, vec![]).expect("valid");
        assert!(nearest_neighbor(&dm, 0).is_err());
    }

    #[test]
    fn test_nn_single_city() {
        let dm = DistanceMatrix::from_data(1, vec![0]).expect("valid");
        let tour = nearest_neighbor(&dm, 0).expect("valid start");
        assert_eq!(tour.cities(), &[0]);
    }

    #[test]
    fn test_nn_follows_asymmetric_row() {
        // Outgoing distances differ from incoming; the scan must use
        // distance[current][candidate].
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, 9, 1],
            vec![1, 0, 9],
            vec![9, 1, 0],
        ])
        .expect("valid");
        let tour = nearest_neighbor(&dm, 0).expect("valid start");
        assert_eq!(tour.cities(), &[0, 2, 1]);
    }

    proptest! {
        #[test]
        fn test_nn_always_permutation(
            (n, data, start) in (1usize..10).prop_flat_map(|n| {
                (Just(n), prop::collection::vec(0i64..100, n * n), 0..n)
            })
        ) {
            let dm = DistanceMatrix::from_data(n, data).expect("sized");
            let tour = nearest_neighbor(&dm, start).expect("valid start");
            let mut sorted = tour.cities().to_vec();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }
    }
}
