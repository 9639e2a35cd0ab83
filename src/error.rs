//! Error types for TSP solving.

use std::fmt;
use std::io;

/// Main error type for u-tsp operations.
///
/// Solver errors are unrecoverable for the operation that raised them and
/// propagate directly to the caller; no partial result is produced.
#[derive(Debug)]
pub enum Error {
    /// A tour's length does not match the distance matrix dimension.
    DimensionMismatch {
        /// Number of cities in the offending tour.
        tour_len: usize,
        /// Dimension of the distance matrix.
        matrix_size: usize,
    },

    /// Construction start city outside `[0, n)`.
    InvalidStartCity {
        /// The requested start city.
        start: usize,
        /// Number of cities in the matrix.
        num_cities: usize,
    },

    /// The distance matrix has dimension zero; there is nothing to optimize.
    NoFeasibleTour,

    /// Malformed distance matrix text (missing or non-integer tokens).
    InvalidInput(String),

    /// File I/O error.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch {
                tour_len,
                matrix_size,
            } => {
                write!(
                    f,
                    "Tour has {tour_len} cities but the distance matrix has dimension {matrix_size}"
                )
            }
            Error::InvalidStartCity { start, num_cities } => {
                write!(
                    f,
                    "Start city {start} is out of range for {num_cities} cities"
                )
            }
            Error::NoFeasibleTour => {
                write!(f, "Distance matrix has no cities; no tour is feasible")
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {msg}")
            }
            Error::Io(err) => {
                write!(f, "I/O error: {err}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
