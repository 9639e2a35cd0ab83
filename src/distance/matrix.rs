//! Dense distance matrix.

/// A dense n×n integer distance matrix stored in row-major order.
///
/// The matrix is immutable once constructed; every solver component reads
/// it, none mutates it. Asymmetric entries are permitted by the data
/// model, although real inputs are symmetric.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 2, 1],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![1, 2, 1, 0],
/// ]).unwrap();
/// assert_eq!(dm.size(), 4);
/// assert_eq!(dm.get(0, 3), 1);
/// assert!(dm.is_symmetric());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit n×n grid in row-major
    /// order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<i64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` if any row's length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Option<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return None;
            }
            data.extend(row);
        }
        Some(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}
