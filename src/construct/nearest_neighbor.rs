//! Nearest-neighbor constructive heuristic.
//!
//! Starting from the anchor, always travel to the closest point not yet
//! visited, then return to the anchor.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::error::{InvalidInput, Result};
use crate::geo::DistanceMatrix;
use crate::tour::Tour;

/// Builds a closed tour greedily and returns it with its cost.
///
/// Ties are broken by index: among equally near unvisited points the one
/// with the lowest index wins. A single point yields `[start, start]` with
/// cost `0`.
///
/// # Errors
///
/// - [`InvalidInput::EmptyPointSet`] if the matrix has no points.
/// - [`InvalidInput::StartOutOfRange`] if `start >= distances.size()`.
///
/// # Examples
///
/// ```
/// use u_tour::construct::greedy_construct;
/// use u_tour::geo::DistanceMatrix;
///
/// // Points on a line at 0, 1, 3: 0 → 1 → 2 → 0.
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 3.0,
///     1.0, 0.0, 2.0,
///     3.0, 2.0, 0.0,
/// ]).unwrap();
/// let (tour, cost) = greedy_construct(&dm, 0).unwrap();
/// assert_eq!(tour.as_slice(), &[0, 1, 2, 0]);
/// assert!((cost - 6.0).abs() < 1e-12);
/// ```
pub fn greedy_construct(distances: &DistanceMatrix, start: usize) -> Result<(Tour, f64)> {
    let n = distances.size();
    if n == 0 {
        return Err(InvalidInput::EmptyPointSet.into());
    }
    if start >= n {
        return Err(InvalidInput::StartOutOfRange { start, len: n }.into());
    }

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n + 1);
    order.push(start);

    let mut current = start;
    let mut cost = 0.0;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (next, &d) in distances.row(current).iter().enumerate() {
            if visited[next] {
                continue;
            }
            // Strict `<` keeps the lowest index on ties.
            let closer = match best {
                None => true,
                Some((_, best_d)) => d < best_d,
            };
            if closer {
                best = Some((next, d));
            }
        }

        let (next, d) = best.expect("an unvisited point remains while fewer than n are placed");
        visited[next] = true;
        order.push(next);
        cost += d;
        current = next;
    }

    cost += distances.get(current, start);
    order.push(start);

    tracing::debug!(points = n, start, cost, "greedy tour constructed");
    Ok((Tour::from_order_unchecked(order), cost))
}
