//! 4-opt pass.
//!
//! Cut positions `1 <= a < b < c < d <= n` split the closed order into five
//! pieces, the outer two fixed:
//!
//! ```text
//! order[..a] | B = order[a..b] | C = order[b..c] | D = order[c..d] | order[d..]
//! ```
//!
//! Each of `B`, `C`, `D` may be reversed independently, giving seven
//! non-identity layouts. Layouts with a negative boundary estimate are built
//! and verified in turn; the first whose exact cost beats the current cost
//! by more than `min_improvement` is applied and the scan moves on to the
//! next cut set.
//!
//! Which cut sets are visited depends on [`FourOptSweep`]:
//!
//! - `Bisection`: for each `a`, `b` starts right after `a` and `d` at the end
//!   of the tour. After each evaluation either `b` steps forward or `d` steps
//!   back, alternating, and `c` is the midpoint of `b` and `d`. The sweep
//!   runs while `b < c && c < d`.
//! - `Exhaustive`: every `a < b < c < d`.

use super::config::{FourOptSweep, KOptConfig};
use super::reconnection::{FOUR_OPT_RECONNECTIONS, THREE_SEGMENT_IDENTITY};
use super::types::{MoveKind, PassOutcome};
use crate::geo::DistanceMatrix;
use crate::tour::Tour;

/// Mutable state threaded through one pass.
struct Sweep<'a> {
    distances: &'a DistanceMatrix,
    min_improvement: f64,
    order: Vec<usize>,
    cost: f64,
    moves: usize,
    verified: usize,
}

impl Sweep<'_> {
    fn try_cuts(&mut self, cuts: [usize; 4]) {
        let base = THREE_SEGMENT_IDENTITY.boundary_cost(self.distances, &self.order, &cuts);
        for pattern in FOUR_OPT_RECONNECTIONS {
            let estimate = pattern.boundary_cost(self.distances, &self.order, &cuts) - base;
            if estimate >= 0.0 {
                continue;
            }

            let candidate = pattern.apply(&self.order, &cuts);
            let candidate_cost = self.distances.path_length(&candidate);
            self.verified += 1;

            if candidate_cost < self.cost - self.min_improvement {
                tracing::trace!(?cuts, estimate, cost = candidate_cost, "4-opt move");
                self.order = candidate;
                self.cost = candidate_cost;
                self.moves += 1;
                return;
            }
        }
    }
}

/// Runs one 4-opt pass over `tour`.
pub fn four_opt_pass(
    distances: &DistanceMatrix,
    tour: Tour,
    cost: f64,
    config: &KOptConfig,
) -> PassOutcome {
    if tour.point_count() < MoveKind::FourOpt.min_points() {
        return PassOutcome::unchanged(tour, cost);
    }

    let end = tour.as_slice().len() - 1;
    let mut sweep = Sweep {
        distances,
        min_improvement: config.min_improvement,
        order: tour.into_vec(),
        cost,
        moves: 0,
        verified: 0,
    };

    for a in 1..=end - 3 {
        match config.four_opt_sweep {
            FourOptSweep::Bisection => {
                let (mut b, mut d) = (a + 1, end);
                let mut advance_b = true;
                loop {
                    let c = (b + d) / 2;
                    if !(b < c && c < d) {
                        break;
                    }
                    sweep.try_cuts([a, b, c, d]);
                    if advance_b {
                        b += 1;
                    } else {
                        d -= 1;
                    }
                    advance_b = !advance_b;
                }
            }
            FourOptSweep::Exhaustive => {
                for b in (a + 1)..=end - 2 {
                    for c in (b + 1)..=end - 1 {
                        for d in (c + 1)..=end {
                            sweep.try_cuts([a, b, c, d]);
                        }
                    }
                }
            }
        }
    }

    PassOutcome {
        tour: Tour::from_order_unchecked(sweep.order),
        cost: sweep.cost,
        moves: sweep.moves,
        verified: sweep.verified,
    }
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

    fn shuffled_line() -> (DistanceMatrix, Tour) {
        let dm = line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let tour = Tour::new(vec![0, 2, 1, 4, 3, 6, 5, 7, 0], 0).unwrap();
        (dm, tour)
    }

    #[test]
    fn test_five_points_is_noop() {
        let dm = line(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let tour = Tour::new(vec![0, 3, 1, 4, 2, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        let outcome = four_opt_pass(&dm, tour.clone(), cost, &KOptConfig::default());
        assert!(!outcome.improved());
        assert_eq!(outcome.tour, tour);
    }

    #[test]
    fn test_bisection_improves() {
        let (dm, tour) = shuffled_line();
        let cost = tour.cost(&dm);
        let outcome = four_opt_pass(&dm, tour, cost, &KOptConfig::default());
        assert!(outcome.improved());
        assert!(outcome.tour.is_valid());
        assert!(outcome.cost < cost);
        assert_eq!(outcome.cost, outcome.tour.cost(&dm));
    }

    #[test]
    fn test_exhaustive_reaches_optimum() {
        let (dm, tour) = shuffled_line();
        let cost = tour.cost(&dm);
        let config = KOptConfig::default().with_four_opt_sweep(FourOptSweep::Exhaustive);
        let outcome = four_opt_pass(&dm, tour, cost, &config);
        assert!(outcome.improved());
        assert!((outcome.cost - 14.0).abs() < 1e-12, "got {}", outcome.cost);
    }

    #[test]
    fn test_optimal_tour_unchanged() {
        let dm = line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let tour = Tour::new(vec![0, 1, 2, 3, 4, 5, 6, 0], 0).unwrap();
        let cost = tour.cost(&dm);
        for sweep in [FourOptSweep::Bisection, FourOptSweep::Exhaustive] {
            let config = KOptConfig::default().with_four_opt_sweep(sweep);
            let outcome = four_opt_pass(&dm, tour.clone(), cost, &config);
            assert!(!outcome.improved(), "{sweep:?}");
            assert_eq!(outcome.tour, tour);
        }
    }
}
