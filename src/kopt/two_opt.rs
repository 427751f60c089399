//! 2-opt pass.
//!
//! For each pair of interior positions `i < j`, reversing `order[i..=j]`
//! replaces edges `(order[i-1], order[i])` and `(order[j], order[j+1])` with
//! `(order[i-1], order[j])` and `(order[i], order[j+1])`:
//!
//! ```text
//! delta = d(a, c) + d(b, e) - d(a, b) - d(c, e)
//!   where a = order[i-1], b = order[i], c = order[j], e = order[j+1]
//! ```
//!
//! Candidates with `delta < 0` are built and their full cost recomputed;
//! the first one beating the current cost by more than `min_improvement`
//! becomes the current tour, and the scan continues from the next pair.
//!
//! # Complexity
//!
//! O(n²) delta evaluations per pass, plus O(n) per verified candidate.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::config::KOptConfig;
use super::types::{MoveKind, PassOutcome};
use crate::geo::DistanceMatrix;
use crate::tour::Tour;

/// Runs one 2-opt pass over `tour`.
///
/// # Examples
///
/// ```
/// use u_tour::geo::DistanceMatrix;
/// use u_tour::kopt::{two_opt_pass, KOptConfig};
/// use u_tour::Tour;
///
/// // Unit square 0-1-2-3; the tour 0 → 2 → 1 → 3 crosses itself.
/// let s = std::f64::consts::SQRT_2;
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, s, 1.0,
///     1.0, 0.0, 1.0, s,
///     s, 1.0, 0.0, 1.0,
///     1.0, s, 1.0, 0.0,
/// ]).unwrap();
/// let tour = Tour::new(vec![0, 2, 1, 3, 0], 0).unwrap();
/// let cost = tour.cost(&dm);
///
/// let outcome = two_opt_pass(&dm, tour, cost, &KOptConfig::default());
/// assert!(outcome.improved());
/// assert!((outcome.cost - 4.0).abs() < 1e-12);
/// ```
pub fn two_opt_pass(
    distances: &DistanceMatrix,
    tour: Tour,
    cost: f64,
    config: &KOptConfig,
) -> PassOutcome {
    if tour.point_count() < MoveKind::TwoOpt.min_points() {
        return PassOutcome::unchanged(tour, cost);
    }

    let mut order = tour.into_vec();
    let mut cost = cost;
    let mut moves = 0;
    let mut verified = 0;
    let last = order.len() - 2;

    for i in 1..last {
        for j in (i + 1)..=last {
            let (a, b, c, e) = (order[i - 1], order[i], order[j], order[j + 1]);
            let delta = distances.get(a, c) + distances.get(b, e)
                - distances.get(a, b)
                - distances.get(c, e);
            if delta >= 0.0 {
                continue;
            }

            let mut candidate = order.clone();
            candidate[i..=j].reverse();
            let candidate_cost = distances.path_length(&candidate);
            verified += 1;

            if candidate_cost < cost - config.min_improvement {
                tracing::trace!(i, j, cost = candidate_cost, "2-opt move");
                order = candidate;
                cost = candidate_cost;
                moves += 1;
            }
        }
    }

    PassOutcome {
        tour: Tour::from_order_unchecked(order),
        cost,
        moves,
        verified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        let s = std::f64::consts::SQRT_2;
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, s, 1.0, //
                1.0, 0.0, 1.0, s, //
                s, 1.0, 0.0, 1.0, //
                1.0, s, 1.0, 0.0,
            ],
        )
        .unwrap()
    }

    fn line(n: usize) -> DistanceMatrix {
        let data = (0..n * n)
            .map(|c| ((c / n) as f64 - (c % n) as f64).abs())
            .collect();
        DistanceMatrix::from_data(n, data).unwrap()
    }

    #[test]
    fn test_uncrosses_square() {
        let dm = square();
        let tour = Tour::new(vec![0, 2, 1, 3, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = two_opt_pass(&dm, tour, cost, &KOptConfig::default());
        assert!(outcome.improved());
        assert!(outcome.tour.is_valid());
        assert!((outcome.cost - 4.0).abs() < 1e-12);
        assert_eq!(outcome.cost, outcome.tour.cost(&dm));
    }

    #[test]
    fn test_optimal_tour_unchanged() {
        let dm = square();
        let tour = Tour::new(vec![0, 1, 2, 3, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = two_opt_pass(&dm, tour.clone(), cost, &KOptConfig::default());
        assert!(!outcome.improved());
        assert_eq!(outcome.tour, tour);
        assert_eq!(outcome.cost, cost);
    }

    #[test]
    fn test_small_tours_are_noop() {
        let dm = line(3);
        let tour = Tour::new(vec![0, 2, 1, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = two_opt_pass(&dm, tour.clone(), cost, &KOptConfig::default());
        assert!(!outcome.improved());
        assert_eq!(outcome.verified, 0);
        assert_eq!(outcome.tour, tour);
    }

    #[test]
    fn test_anchor_stays_fixed() {
        let dm = line(6);
        let tour = Tour::new(vec![3, 0, 5, 1, 4, 2, 3], 3).unwrap();
        let cost = tour.cost(&dm);
        let outcome = two_opt_pass(&dm, tour, cost, &KOptConfig::default());
        assert!(outcome.improved());
        assert_eq!(outcome.tour.start(), 3);
        assert!(outcome.tour.is_valid());
        assert!(outcome.cost < cost);
    }

    #[test]
    fn test_large_threshold_blocks_moves() {
        let dm = square();
        let tour = Tour::new(vec![0, 2, 1, 3, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let config = KOptConfig::default().with_min_improvement(10.0);
        let outcome = two_opt_pass(&dm, tour.clone(), cost, &config);
        assert!(!outcome.improved());
        assert!(outcome.verified > 0);
        assert_eq!(outcome.tour, tour);
    }
}
