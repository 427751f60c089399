//! Local search configuration.

use super::types::MoveKind;

/// Order in which move types are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// One exhaustive 3-opt pass, then 2-opt repeated until it stops improving.
    #[default]
    ThreeOptThenTwoOpt,

    /// 2-opt, then 3-opt, then 4-opt, each repeated until it stops improving.
    Sequential,
}

/// How a phase is driven within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseMode {
    /// Exactly one pass over the neighborhood.
    SinglePass,
    /// Passes repeat until one applies no move.
    Converge,
}

impl Strategy {
    /// Phases of one round, in execution order.
    pub fn phases(self) -> &'static [(MoveKind, PhaseMode)] {
        match self {
            Strategy::ThreeOptThenTwoOpt => &[
                (MoveKind::ThreeOpt, PhaseMode::SinglePass),
                (MoveKind::TwoOpt, PhaseMode::Converge),
            ],
            Strategy::Sequential => &[
                (MoveKind::TwoOpt, PhaseMode::Converge),
                (MoveKind::ThreeOpt, PhaseMode::Converge),
                (MoveKind::FourOpt, PhaseMode::Converge),
            ],
        }
    }
}

/// Which cut positions the 4-opt pass visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FourOptSweep {
    /// For each first cut, the second cut walks forward from it while the
    /// fourth walks back from the end of the tour, alternating one step at a
    /// time; the third cut is the midpoint between them. O(n²) cut sets.
    #[default]
    Bisection,

    /// Every cut quadruple. O(n⁴) cut sets.
    Exhaustive,
}

/// Configuration for the k-opt local search.
///
/// # Examples
///
/// ```
/// use u_tour::kopt::{FourOptSweep, KOptConfig, Strategy};
///
/// let config = KOptConfig::default()
///     .with_strategy(Strategy::Sequential)
///     .with_four_opt_sweep(FourOptSweep::Exhaustive)
///     .with_min_improvement(1e-6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KOptConfig {
    /// Move types and their order.
    pub strategy: Strategy,

    /// Cut enumeration for 4-opt.
    pub four_opt_sweep: FourOptSweep,

    /// A candidate replaces the current tour only if
    /// `candidate_cost < current_cost - min_improvement`.
    pub min_improvement: f64,

    /// Cap on passes per phase. 0 = no cap.
    pub max_passes_per_phase: usize,

    /// Repeat whole rounds until a round applies no move.
    ///
    /// With `false` exactly one round runs, and a later move type may leave
    /// the tour improvable by an earlier one.
    pub repeat_until_stable: bool,
}

impl Default for KOptConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            four_opt_sweep: FourOptSweep::default(),
            min_improvement: 1e-9,
            max_passes_per_phase: 0,
            repeat_until_stable: true,
        }
    }
}

impl KOptConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_four_opt_sweep(mut self, sweep: FourOptSweep) -> Self {
        self.four_opt_sweep = sweep;
        self
    }

    pub fn with_min_improvement(mut self, epsilon: f64) -> Self {
        self.min_improvement = epsilon;
        self
    }

    pub fn with_max_passes_per_phase(mut self, n: usize) -> Self {
        self.max_passes_per_phase = n;
        self
    }

    pub fn with_repeat_until_stable(mut self, repeat: bool) -> Self {
        self.repeat_until_stable = repeat;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_improvement.is_finite() || self.min_improvement < 0.0 {
            return Err(format!(
                "min_improvement must be finite and non-negative, got {}",
                self.min_improvement
            ));
        }
        Ok(())
    }
}
