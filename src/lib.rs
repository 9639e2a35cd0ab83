//! # u-tsp
//!
//! Approximate solver for the symmetric Traveling Salesman Problem over
//! an explicit integer distance matrix: nearest-neighbor construction,
//! 2-opt local search, and multi-start optimization.
//!
//! ## Modules
//!
//! - [`models`] — Domain values (Tour, TourResult, OptimizationOutcome)
//! - [`distance`] — Dense integer distance matrix
//! - [`evaluation`] — Cyclic tour cost evaluation
//! - [`constructive`] — Initial tours (nearest neighbor, shuffled)
//! - [`local_search`] — 2-opt improvement to a local optimum
//! - [`solver`] — Multi-start orchestration
//! - [`io`] — Matrix file reading and result file writing
//!
//! ## Example
//!
//! ```
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::solver::{MultiStartRunner, SolverConfig};
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0, 1, 2, 1],
//!     vec![1, 0, 1, 2],
//!     vec![2, 1, 0, 1],
//!     vec![1, 2, 1, 0],
//! ]).unwrap();
//!
//! let outcome = MultiStartRunner::run(&dm, &SolverConfig::default()).unwrap();
//! assert_eq!(outcome.cost(), 4);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::Error;
