//! Local search execution engine.
//!
//! # Algorithm
//!
//! 1. Recompute the cost of the incoming tour
//! 2. For each phase of the configured [`Strategy`](super::Strategy), in order:
//!    a. Run a pass of the phase's move type
//!    b. If the phase converges, repeat (a) until a pass applies no move
//! 3. If `repeat_until_stable` and any phase applied a move, go to 2
//! 4. Return the final tour and its exact cost
//!
//! Every accepted move lowers the cost by more than `min_improvement`, and
//! cost is bounded below by zero, so the loop terminates.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::config::{KOptConfig, PhaseMode};
use super::four_opt::four_opt_pass;
use super::three_opt::three_opt_pass;
use super::two_opt::two_opt_pass;
use super::types::{MoveKind, PassOutcome, PhaseStats};
use crate::geo::DistanceMatrix;
use crate::tour::Tour;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct KOptResult {
    /// Final tour.
    pub tour: Tour,
    /// Exact cost of `tour`.
    pub cost: f64,
    /// Recomputed cost of the incoming tour.
    pub initial_cost: f64,
    /// Number of rounds executed.
    pub rounds: usize,
    /// One entry per phase execution, in order.
    pub phases: Vec<PhaseStats>,
    /// Cost after every pass, starting with `initial_cost`.
    pub cost_history: Vec<f64>,
}

impl KOptResult {
    /// Total moves applied across all phases.
    pub fn total_moves(&self) -> usize {
        self.phases.iter().map(|p| p.moves).sum()
    }
}

/// Local search runner.
pub struct KOptRunner;

impl KOptRunner {
    /// Improves `tour` until the configured strategy converges.
    ///
    /// `cost` is the caller's cost for `tour`. It is checked against a full
    /// recomputation; on disagreement a warning is logged and the recomputed
    /// value is used.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`KOptConfig::validate`]
    /// first to get a descriptive error) or if `tour` does not visit exactly
    /// the points of `distances`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::geo::DistanceMatrix;
    /// use u_tour::kopt::{KOptConfig, KOptRunner};
    /// use u_tour::Tour;
    ///
    /// let dm = DistanceMatrix::from_data(5, (0..25)
    ///     .map(|c| ((c / 5) as f64 - (c % 5) as f64).abs())
    ///     .collect()).unwrap();
    /// let tour = Tour::new(vec![0, 3, 1, 4, 2, 0], 0).unwrap();
    /// let cost = tour.cost(&dm);
    ///
    /// let result = KOptRunner::run(&dm, tour, cost, &KOptConfig::default());
    /// assert!((result.cost - 8.0).abs() < 1e-12);
    /// ```
    pub fn run(
        distances: &DistanceMatrix,
        tour: Tour,
        cost: f64,
        config: &KOptConfig,
    ) -> KOptResult {
        config.validate().expect("invalid KOptConfig");
        assert_eq!(
            tour.point_count(),
            distances.size(),
            "tour visits {} points but the matrix holds {}",
            tour.point_count(),
            distances.size()
        );

        let initial_cost = tour.cost(distances);
        if (initial_cost - cost).abs() > 1e-9 * initial_cost.max(1.0) {
            warn!(
                given = cost,
                recomputed = initial_cost,
                "tour cost disagrees with its edges; using recomputed cost"
            );
        }

        let mut current = tour;
        let mut current_cost = initial_cost;
        let mut phases = Vec::new();
        let mut cost_history = vec![initial_cost];
        let mut rounds = 0;

        loop {
            rounds += 1;
            let mut round_moves = 0;

            for &(kind, mode) in config.strategy.phases() {
                let (tour, cost, stats) = run_phase(
                    distances,
                    current,
                    current_cost,
                    kind,
                    mode,
                    rounds,
                    config,
                    &mut cost_history,
                );
                current = tour;
                current_cost = cost;
                round_moves += stats.moves;
                phases.push(stats);
            }

            debug!(round = rounds, moves = round_moves, cost = current_cost, "round finished");
            if !config.repeat_until_stable || round_moves == 0 {
                break;
            }
        }

        KOptResult {
            tour: current,
            cost: current_cost,
            initial_cost,
            rounds,
            phases,
            cost_history,
        }
    }
}

/// Improves `(tour, cost)` and returns the converged pair.
///
/// Shorthand for [`KOptRunner::run`] that drops the statistics.
pub fn optimize(
    distances: &DistanceMatrix,
    tour: Tour,
    cost: f64,
    config: &KOptConfig,
) -> (Tour, f64) {
    let result = KOptRunner::run(distances, tour, cost, config);
    (result.tour, result.cost)
}

/// Runs one pass of the given move type.
pub fn run_pass(
    distances: &DistanceMatrix,
    kind: MoveKind,
    tour: Tour,
    cost: f64,
    config: &KOptConfig,
) -> PassOutcome {
    match kind {
        MoveKind::TwoOpt => two_opt_pass(distances, tour, cost, config),
        MoveKind::ThreeOpt => three_opt_pass(distances, tour, cost, config),
        MoveKind::FourOpt => four_opt_pass(distances, tour, cost, config),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_phase(
    distances: &DistanceMatrix,
    tour: Tour,
    cost: f64,
    kind: MoveKind,
    mode: PhaseMode,
    round: usize,
    config: &KOptConfig,
    cost_history: &mut Vec<f64>,
) -> (Tour, f64, PhaseStats) {
    let started = Instant::now();
    info!(event = "phase_start", phase = %kind, round, cost);

    let cost_before = cost;
    let mut current = tour;
    let mut current_cost = cost;
    let mut passes = 0;
    let mut moves = 0;

    loop {
        let outcome = run_pass(distances, kind, current, current_cost, config);
        let improved = outcome.improved();
        let PassOutcome {
            tour,
            cost,
            moves: pass_moves,
            verified,
        } = outcome;
        passes += 1;
        debug_assert!(cost <= current_cost, "{kind} pass increased cost");

        current = tour;
        current_cost = cost;
        moves += pass_moves;
        cost_history.push(current_cost);

        if improved {
            debug!(
                phase = %kind,
                pass = passes,
                moves = pass_moves,
                verified,
                cost = current_cost,
                "improving pass"
            );
        }

        let capped = config.max_passes_per_phase > 0 && passes >= config.max_passes_per_phase;
        if !improved || mode == PhaseMode::SinglePass || capped {
            break;
        }
    }

    info!(
        event = "phase_end",
        phase = %kind,
        round,
        passes,
        moves,
        cost_before,
        cost_after = current_cost,
        duration_ms = started.elapsed().as_millis() as u64,
    );

    let stats = PhaseStats {
        kind,
        round,
        passes,
        moves,
        cost_before,
        cost_after: current_cost,
    };
    (current, current_cost, stats)
}
