//! Domain model types for TSP solving.
//!
//! Provides the core values: tours as validated permutations of the city
//! indices, scored tours, and the outcome of a whole optimization run.

mod outcome;
mod tour;

pub use outcome::{OptimizationOutcome, TourResult};
pub use tour::Tour;
