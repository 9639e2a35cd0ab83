//! Distance matrix file reader.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::distance::DistanceMatrix;
use crate::error::Error;

/// Reads a distance matrix from a text file.
///
/// The file holds whitespace-delimited integers: the city count `n`
/// followed by `n × n` matrix entries in row-major order. Line breaks are
/// not significant; a row may span several lines and several rows may
/// share one.
///
/// Malformed input (missing or non-integer tokens) fails with
/// [`Error::InvalidInput`]; filesystem failures with [`Error::Io`].
pub fn read_distance_matrix<P: AsRef<Path>>(path: P) -> Result<DistanceMatrix, Error> {
    let text = fs::read_to_string(path)?;
    parse_distance_matrix(&text)
}

/// Parses a distance matrix from already-loaded text.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_distance_matrix;
///
/// let dm = parse_distance_matrix("3\n0 5 5\n5 0 5\n5 5 0\n").unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), 5);
/// ```
pub fn parse_distance_matrix(text: &str) -> Result<DistanceMatrix, Error> {
    let mut tokens = text.split_whitespace();

    let size: usize = parse_token(tokens.next(), "matrix dimension")?;
    let mut data = Vec::with_capacity(size * size);
    for _ in 0..size * size {
        data.push(parse_token(tokens.next(), "matrix entry")?);
    }

    DistanceMatrix::from_data(size, data)
        .ok_or_else(|| Error::InvalidInput("matrix entry count mismatch".to_string()))
}

fn parse_token<T: FromStr>(token: Option<&str>, what: &str) -> Result<T, Error> {
    let token = token
        .ok_or_else(|| Error::InvalidInput(format!("unexpected end of input reading {what}")))?;
    token
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid {what} '{token}'")))
}
