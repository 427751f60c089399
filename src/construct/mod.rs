//! Constructive heuristics that produce an initial tour.
//!
//! Construction is the first phase of every session: the local search only
//! ever improves a tour, so the quality of this starting point bounds how
//! much work the k-opt phases have to do.

mod nearest_neighbor;

pub use nearest_neighbor::greedy_construct;
