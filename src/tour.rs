//! Closed tour representation.

use crate::error::{InvalidInput, Result};
use crate::geo::DistanceMatrix;

/// A closed visiting order anchored at a start point.
///
/// Stored as `n + 1` point indices: positions `0..n` are a permutation of
/// `0..n` with `order[0] == start`, and `order[n] == start` closes the cycle.
/// A single point yields `[start, start]`.
///
/// Tours are values. The local search never edits a tour in place; it builds
/// a candidate and replaces the current tour only when the candidate is
/// strictly shorter.
///
/// # Examples
///
/// ```
/// use u_tour::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1, 2], 2).unwrap();
/// assert_eq!(tour.point_count(), 3);
/// assert_eq!(tour.start(), 2);
/// assert!(Tour::new(vec![0, 1, 1, 0], 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Validates and wraps a closed visiting order.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::MalformedTour`] if the order is not closed at
    /// `start`, or positions `0..n` are not a permutation of `0..n`.
    pub fn new(order: Vec<usize>, start: usize) -> Result<Self> {
        validate(&order, start)?;
        Ok(Self { order })
    }

    /// Wraps an order produced by this crate's own constructors and moves.
    pub(crate) fn from_order_unchecked(order: Vec<usize>) -> Self {
        debug_assert!(
            order.first().is_some_and(|&s| validate(&order, s).is_ok()),
            "internal tour is malformed: {order:?}"
        );
        Self { order }
    }

    /// The anchor point (first and last element).
    pub fn start(&self) -> usize {
        self.order[0]
    }

    /// Number of distinct points visited.
    pub fn point_count(&self) -> usize {
        self.order.len() - 1
    }

    /// Full closed order, `point_count() + 1` entries.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    /// Sum of consecutive leg distances, recomputed from scratch.
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        distances.path_length(&self.order)
    }

    /// Maps each visited index through `labels`.
    ///
    /// # Panics
    ///
    /// Panics if `labels` is shorter than [`point_count`](Self::point_count).
    pub fn labels<'a, T>(&self, labels: &'a [T]) -> Vec<&'a T> {
        self.order.iter().map(|&i| &labels[i]).collect()
    }

    /// Returns `true` if positions `0..n` form a permutation of `0..n` and the
    /// order closes at its start.
    pub fn is_valid(&self) -> bool {
        validate(&self.order, self.start()).is_ok()
    }
}

fn validate(order: &[usize], start: usize) -> Result<()> {
    let malformed = |msg: String| -> Result<()> { Err(InvalidInput::MalformedTour(msg).into()) };

    if order.len() < 2 {
        return malformed(format!("need at least 2 entries, got {}", order.len()));
    }
    let n = order.len() - 1;
    if order[0] != start || order[n] != start {
        return malformed(format!(
            "must start and end at {start}, got {} .. {}",
            order[0], order[n]
        ));
    }
    let mut seen = vec![false; n];
    for &p in &order[..n] {
        if p >= n {
            return malformed(format!("index {p} out of range for {n} points"));
        }
        if seen[p] {
            return malformed(format!("index {p} visited twice"));
        }
        seen[p] = true;
    }
    Ok(())
}
