//! 3-opt pass.
//!
//! # Algorithm
//!
//! Cut positions `1 <= i < j < k <= n` split the closed order into
//!
//! ```text
//! A = order[..i]   B = order[i..j]   C = order[j..k]   D = order[k..]
//! ```
//!
//! `A` and `D` hold the anchor and never move. For each triple the seven
//! non-identity layouts of `B C` are scored by the three boundary edges they
//! change. The layout with the most negative estimate (if any) is built, its
//! full cost recomputed, and it replaces the current tour only if that exact
//! cost beats the current cost by more than `min_improvement`. Only one
//! candidate per triple is built, so the O(n) rebuild is paid for at most
//! one layout out of seven.
//!
//! # Complexity
//!
//! O(n³) triples per pass.
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//! *Bell System Technical Journal* 44(10), 2245-2269.

use super::config::KOptConfig;
use super::reconnection::{Reconnection, THREE_OPT_RECONNECTIONS, TWO_SEGMENT_IDENTITY};
use super::types::{MoveKind, PassOutcome};
use crate::geo::DistanceMatrix;
use crate::tour::Tour;

/// Runs one 3-opt pass over `tour`.
pub fn three_opt_pass(
    distances: &DistanceMatrix,
    tour: Tour,
    cost: f64,
    config: &KOptConfig,
) -> PassOutcome {
    if tour.point_count() < MoveKind::ThreeOpt.min_points() {
        return PassOutcome::unchanged(tour, cost);
    }

    let mut order = tour.into_vec();
    let mut cost = cost;
    let mut moves = 0;
    let mut verified = 0;
    let end = order.len() - 1;

    for i in 1..=end - 2 {
        for j in (i + 1)..=end - 1 {
            for k in (j + 1)..=end {
                let cuts = [i, j, k];
                let Some((pattern, estimate)) = best_reconnection(distances, &order, &cuts) else {
                    continue;
                };

                let candidate = pattern.apply(&order, &cuts);
                let candidate_cost = distances.path_length(&candidate);
                verified += 1;

                if candidate_cost < cost - config.min_improvement {
                    tracing::trace!(i, j, k, estimate, cost = candidate_cost, "3-opt move");
                    order = candidate;
                    cost = candidate_cost;
                    moves += 1;
                }
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

/// Layout with the most negative estimated delta, if any is negative.
fn best_reconnection(
    distances: &DistanceMatrix,
    order: &[usize],
    cuts: &[usize],
) -> Option<(Reconnection, f64)> {
    let base = TWO_SEGMENT_IDENTITY.boundary_cost(distances, order, cuts);
    let mut best: Option<(Reconnection, f64)> = None;
    for pattern in THREE_OPT_RECONNECTIONS {
        let delta = pattern.boundary_cost(distances, order, cuts) - base;
        let better = match best {
            None => delta < 0.0,
            Some((_, best_delta)) => delta < best_delta,
        };
        if better {
            best = Some((pattern, delta));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(xs: &[f64]) -> DistanceMatrix {
        let n = xs.len();
        let data = (0..n * n)
            .map(|c| (xs[c / n] - xs[c % n]).abs())
            .collect();
        DistanceMatrix::from_data(n, data).unwrap()
    }

    #[test]
    fn test_segment_swap() {
        // Points on a line at their index, with the blocks [1, 2] and [3, 4]
        // visited in the wrong order.
        let dm = line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let tour = Tour::new(vec![0, 3, 4, 1, 2, 5, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = three_opt_pass(&dm, tour, cost, &KOptConfig::default());
        assert!(outcome.improved());
        assert!(outcome.tour.is_valid());
        assert!((outcome.cost - 10.0).abs() < 1e-12, "got {}", outcome.cost);
        assert_eq!(outcome.cost, outcome.tour.cost(&dm));
    }

    #[test]
    fn test_four_points_is_noop() {
        let dm = line(&[0.0, 1.0, 2.0, 3.0]);
        let tour = Tour::new(vec![0, 2, 1, 3, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = three_opt_pass(&dm, tour.clone(), cost, &KOptConfig::default());
        assert!(!outcome.improved());
        assert_eq!(outcome.tour, tour);
    }

    #[test]
    fn test_optimal_line_unchanged() {
        let dm = line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let tour = Tour::new(vec![0, 1, 2, 3, 4, 5, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = three_opt_pass(&dm, tour.clone(), cost, &KOptConfig::default());
        assert!(!outcome.improved());
        assert_eq!(outcome.verified, 0);
        assert_eq!(outcome.tour, tour);
    }

    #[test]
    fn test_best_reconnection_none_when_no_gain() {
        let dm = line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let order = [0, 1, 2, 3, 4, 5, 0];
        assert!(best_reconnection(&dm, &order, &[1, 3, 5]).is_none());
    }

    #[test]
    fn test_cost_never_increases() {
        let dm = line(&[0.0, 7.0, 2.0, 9.0, 4.0, 1.0, 8.0, 3.0]);
        let tour = Tour::new(vec![0, 1, 2, 3, 4, 5, 6, 7, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = three_opt_pass(&dm, tour, cost, &KOptConfig::default());
        assert!(outcome.cost <= cost);
        assert!(outcome.tour.is_valid());
        assert!((outcome.cost - outcome.tour.cost(&dm)).abs() < 1e-12);
    }
}
