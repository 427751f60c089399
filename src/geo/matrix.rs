//! Dense symmetric distance matrix.

use super::distance::DistanceMetric;
use super::point::GeoPoint;
use crate::error::{InvalidInput, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per session and read-only afterwards. Matrices produced by
/// [`build_distance_matrix`] are symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use u_tour::geo::{build_distance_matrix, DistanceMetric, GeoPoint};
///
/// let points = vec![
///     GeoPoint::new(0.0, 0.0),
///     GeoPoint::new(0.0, 1.0),
///     GeoPoint::new(1.0, 1.0),
/// ];
/// let dm = build_distance_matrix(&points, DistanceMetric::default()).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert_eq!(dm.get(0, 2), dm.get(2, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Computes pairwise great-circle distances between `points`.
///
/// Each unordered pair is evaluated once and written to both cells, so the
/// result is symmetric by construction.
///
/// # Errors
///
/// [`InvalidInput::NonFiniteCoordinate`] for the first point whose latitude
/// or longitude is NaN or infinite.
pub fn build_distance_matrix(
    points: &[GeoPoint],
    metric: DistanceMetric,
) -> Result<DistanceMatrix> {
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(InvalidInput::NonFiniteCoordinate {
            index,
            latitude: p.latitude,
            longitude: p.longitude,
        }
        .into());
    }

    let n = points.len();
    let mut dm = DistanceMatrix::zeros(n);

    #[cfg(feature = "parallel")]
    {
        let upper: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| metric.distance(&points[i], &points[j]))
                    .collect()
            })
            .collect();
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, d) in row.into_iter().enumerate() {
                dm.set_pair(i, i + 1 + offset, d);
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    for i in 0..n {
        for j in (i + 1)..n {
            dm.set_pair(i, j, metric.distance(&points[i], &points[j]));
        }
    }

    tracing::debug!(
        points = n,
        formula = ?metric.formula,
        unit = ?metric.unit,
        "distance matrix built"
    );
    Ok(dm)
}

impl DistanceMatrix {
    fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    fn set_pair(&mut self, i: usize, j: usize, distance: f64) {
        self.data[i * self.size + j] = distance;
        self.data[j * self.size + i] = distance;
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// Useful for tests and for callers with road-network distances. The
    /// grid is taken as-is; symmetry is not enforced.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::MatrixShape`] if `data.len() != size * size`;
    /// [`InvalidInput::InvalidDistance`] for a negative or non-finite cell.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(InvalidInput::MatrixShape {
                expected: size * size,
                actual: data.len(),
            }
            .into());
        }
        if let Some(cell) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(InvalidInput::InvalidDistance {
                cell,
                value: data[cell],
            }
            .into());
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.size && to < self.size, "index out of bounds");
        self.data[from * self.size + to]
    }

    /// Distances from `from` to every point, in index order.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Sum of consecutive leg distances along `path`.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
