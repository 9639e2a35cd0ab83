//! Random permutation construction.

use rand::Rng;

use crate::models::Tour;

/// Constructs a uniformly shuffled tour over `num_cities` cities.
///
/// This is the construction path for shuffled restarts: instead of a
/// greedy tour, local search starts from a random permutation. The
/// generator is injected so callers control seeding and reproducibility.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::constructive::shuffled_tour;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = shuffled_tour(5, &mut rng);
/// assert_eq!(tour.len(), 5);
/// ```
pub fn shuffled_tour<R: Rng>(num_cities: usize, rng: &mut R) -> Tour {
    let mut cities: Vec<usize> = (0..num_cities).collect();

    // Fisher-Yates shuffle
    for i in (1..cities.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        cities.swap(i, j);
    }

    Tour::from_permutation(cities)
}
