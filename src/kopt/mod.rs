//! k-opt local search.
//!
//! Improves a closed tour with 2-opt, 3-opt and 4-opt moves, accepting only
//! strictly improving moves, until no move of any configured type helps.
//!
//! Every pass is a pure function from `(Tour, cost)` to a [`PassOutcome`]:
//! the current tour is never edited in place, only replaced by a verified
//! shorter candidate. Candidates are screened by the change in the edges
//! that a move touches and then verified by recomputing the full tour cost,
//! so the cost carried along always equals the cost of the tour it belongs
//! to.
//!
//! Two strategies are available (see [`Strategy`]):
//!
//! - `ThreeOptThenTwoOpt` (default): one 3-opt pass, then 2-opt to
//!   convergence.
//! - `Sequential`: 2-opt, 3-opt and 4-opt, each to convergence.
//!
//! # References
//!
//! - Croes, G.A. (1958). "A method for solving traveling salesman problems",
//!   *Operations Research* 6(6), 791-812.
//! - Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//!   *Bell System Technical Journal* 44(10), 2245-2269.

mod config;
mod four_opt;
mod reconnection;
mod runner;
mod three_opt;
mod two_opt;
mod types;

pub use config::{FourOptSweep, KOptConfig, PhaseMode, Strategy};
pub use four_opt::four_opt_pass;
pub use runner::{optimize, run_pass, KOptResult, KOptRunner};
pub use three_opt::three_opt_pass;
pub use two_opt::two_opt_pass;
pub use types::{MoveKind, PassOutcome, PhaseStats};
