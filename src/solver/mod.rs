//! Full optimization session: points in, closed tour out.

mod config;
mod runner;

pub use config::SolverConfig;
pub use runner::{TourSolution, TourSolver};
