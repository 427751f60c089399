//! Move kinds and pass results.

use std::fmt;

use crate::tour::Tour;

/// A k-opt neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveKind {
    TwoOpt,
    ThreeOpt,
    FourOpt,
}

impl MoveKind {
    /// Smallest point count for which the neighborhood is searched.
    ///
    /// Smaller tours make the pass a no-op.
    pub fn min_points(self) -> usize {
        match self {
            MoveKind::TwoOpt => 4,
            MoveKind::ThreeOpt => 5,
            MoveKind::FourOpt => 6,
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveKind::TwoOpt => "2-opt",
            MoveKind::ThreeOpt => "3-opt",
            MoveKind::FourOpt => "4-opt",
        })
    }
}

/// Result of one pass over a neighborhood.
#[derive(Debug, Clone)]
pub struct PassOutcome {
    /// Tour after the pass (the input tour if nothing was applied).
    pub tour: Tour,
    /// Exact cost of `tour`.
    pub cost: f64,
    /// Number of moves applied.
    pub moves: usize,
    /// Number of candidates whose full cost was recomputed.
    pub verified: usize,
}

impl PassOutcome {
    pub(crate) fn unchanged(tour: Tour, cost: f64) -> Self {
        Self {
            tour,
            cost,
            moves: 0,
            verified: 0,
        }
    }

    /// Whether any improving move was applied.
    pub fn improved(&self) -> bool {
        self.moves > 0
    }
}

/// Per-phase statistics of a local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhaseStats {
    pub kind: MoveKind,
    /// 1-based round in which the phase ran.
    pub round: usize,
    pub passes: usize,
    pub moves: usize,
    pub cost_before: f64,
    pub cost_after: f64,
}
