//! End-to-end tour session.
//!
//! points → [`build_distance_matrix`] → [`greedy_construct`] →
//! [`KOptRunner::run`] → [`TourSolution`].

use std::time::Instant;

use tracing::info;

use super::config::SolverConfig;
use crate::construct::greedy_construct;
use crate::error::Result;
use crate::geo::{build_distance_matrix, DistanceMatrix, DistanceUnit, GeoPoint};
use crate::kopt::{KOptRunner, PhaseStats};
use crate::tour::Tour;

/// Result of a solver session.
#[derive(Debug, Clone)]
pub struct TourSolution {
    /// Final tour.
    pub tour: Tour,
    /// Exact cost of `tour`.
    pub cost: f64,
    /// Cost of the nearest-neighbor tour the search started from.
    pub greedy_cost: f64,
    /// Unit of `cost` and `greedy_cost`.
    pub unit: DistanceUnit,
    /// Local search rounds executed.
    pub rounds: usize,
    /// Local search phase statistics.
    pub phases: Vec<PhaseStats>,
    /// The matrix the session worked on.
    pub distances: DistanceMatrix,
}

impl TourSolution {
    /// Relative saving of the local search over the greedy tour, in `[0, 1]`.
    pub fn improvement(&self) -> f64 {
        if self.greedy_cost > 0.0 {
            (self.greedy_cost - self.cost) / self.greedy_cost
        } else {
            0.0
        }
    }
}

/// Runs a complete session.
pub struct TourSolver;

impl TourSolver {
    /// Builds the distance matrix, constructs a greedy tour from
    /// `config.start` and improves it with k-opt local search.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`](crate::Error::Config) for an invalid configuration.
    /// - [`Error::InvalidInput`](crate::Error::InvalidInput) for non-finite
    ///   coordinates, an empty point set or an out-of-range start.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::geo::GeoPoint;
    /// use u_tour::solver::{SolverConfig, TourSolver};
    ///
    /// let points = vec![
    ///     GeoPoint::new(0.0, 0.0),
    ///     GeoPoint::new(1.0, 1.0),
    ///     GeoPoint::new(0.0, 1.0),
    ///     GeoPoint::new(1.0, 0.0),
    /// ];
    /// let solution = TourSolver::solve(&points, &SolverConfig::default()).unwrap();
    /// assert_eq!(solution.tour.start(), 0);
    /// assert!(solution.cost <= solution.greedy_cost);
    /// ```
    pub fn solve(points: &[GeoPoint], config: &SolverConfig) -> Result<TourSolution> {
        config.validate()?;
        let started = Instant::now();

        let distances = build_distance_matrix(points, config.metric)?;
        let (tour, greedy_cost) = greedy_construct(&distances, config.start)?;
        info!(
            event = "phase_end",
            phase = "nearest_neighbor",
            points = points.len(),
            cost = greedy_cost,
        );

        let result = KOptRunner::run(&distances, tour, greedy_cost, &config.kopt);

        info!(
            event = "solve_end",
            points = points.len(),
            greedy_cost,
            cost = result.cost,
            moves = result.total_moves(),
            rounds = result.rounds,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(TourSolution {
            tour: result.tour,
            cost: result.cost,
            greedy_cost,
            unit: config.metric.unit,
            rounds: result.rounds,
            phases: result.phases,
            distances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InvalidInput};

    fn orange_county() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(33.6405, -117.8443),
            GeoPoint::new(33.8121, -117.9190),
            GeoPoint::new(33.6846, -117.8265),
            GeoPoint::new(33.7455, -117.8677),
            GeoPoint::new(33.6189, -117.9298),
            GeoPoint::new(33.8366, -117.9143),
            GeoPoint::new(33.6595, -117.9988),
            GeoPoint::new(33.7879, -117.8531),
        ]
    }

    #[test]
    fn test_solve_improves_on_greedy() {
        let points = orange_county();
        let solution = TourSolver::solve(&points, &SolverConfig::default()).unwrap();
        assert!(solution.tour.is_valid());
        assert_eq!(solution.tour.point_count(), points.len());
        assert!(solution.cost <= solution.greedy_cost);
        assert!((solution.cost - solution.tour.cost(&solution.distances)).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&solution.improvement()));
    }

    #[test]
    fn test_start_is_respected() {
        let config = SolverConfig::default().with_start(5);
        let solution = TourSolver::solve(&orange_county(), &config).unwrap();
        assert_eq!(solution.tour.start(), 5);
        assert_eq!(*solution.tour.as_slice().last().unwrap(), 5);
    }

    #[test]
    fn test_out_of_range_start() {
        let config = SolverConfig::default().with_start(8);
        let err = TourSolver::solve(&orange_county(), &config).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInput::StartOutOfRange { start: 8, len: 8 })
        ));
    }

    #[test]
    fn test_empty_points() {
        let err = TourSolver::solve(&[], &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InvalidInput::EmptyPointSet)));
    }

    #[test]
    fn test_single_point() {
        let solution =
            TourSolver::solve(&[GeoPoint::new(10.0, 20.0)], &SolverConfig::default()).unwrap();
        assert_eq!(solution.tour.as_slice(), &[0, 0]);
        assert_eq!(solution.cost, 0.0);
        assert_eq!(solution.improvement(), 0.0);
    }
}
