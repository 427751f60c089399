//! Reconnection patterns for segment moves.
//!
//! Cutting a closed tour at positions `cuts[0] < cuts[1] < ... < cuts[len]`
//! leaves a fixed prefix `order[..cuts[0]]`, `len` interior segments
//! `order[cuts[s]..cuts[s + 1]]` and a fixed suffix `order[cuts[len]..]`.
//! A pattern says in which order the interior segments are laid back down
//! and which of them are reversed. The prefix and suffix never move, so the
//! anchor at both ends of the tour stays put.

use crate::geo::DistanceMatrix;

/// How to lay interior segments back down.
///
/// `segment_order[pos]` is the segment placed at position `pos`; bit `s` of
/// `reverse_mask` reverses segment `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reconnection {
    segment_order: [u8; 3],
    reverse_mask: u8,
    len: u8,
}

impl Reconnection {
    pub(crate) const fn new(segment_order: [u8; 3], reverse_mask: u8, len: u8) -> Self {
        Self {
            segment_order,
            reverse_mask,
            len,
        }
    }

    #[inline]
    fn segment_at(&self, pos: usize) -> usize {
        self.segment_order[pos] as usize
    }

    #[inline]
    fn reverses(&self, segment: usize) -> bool {
        self.reverse_mask & (1 << segment) != 0
    }

    fn segment_count(&self) -> usize {
        self.len as usize
    }

    /// Sum of the edges joining prefix, reconnected segments and suffix.
    ///
    /// Interior edges of a segment are unchanged by reversal on a symmetric
    /// matrix, so the difference between two patterns' boundary costs is the
    /// difference between their tour costs.
    pub(crate) fn boundary_cost(
        &self,
        distances: &DistanceMatrix,
        order: &[usize],
        cuts: &[usize],
    ) -> f64 {
        debug_assert_eq!(cuts.len(), self.segment_count() + 1);
        let mut prev = order[cuts[0] - 1];
        let mut total = 0.0;
        for pos in 0..self.segment_count() {
            let s = self.segment_at(pos);
            let (first, last) = (order[cuts[s]], order[cuts[s + 1] - 1]);
            let (first, last) = if self.reverses(s) {
                (last, first)
            } else {
                (first, last)
            };
            total += distances.get(prev, first);
            prev = last;
        }
        total + distances.get(prev, order[cuts[self.segment_count()]])
    }

    /// Builds the reconnected order as a new vector.
    pub(crate) fn apply(&self, order: &[usize], cuts: &[usize]) -> Vec<usize> {
        debug_assert_eq!(cuts.len(), self.segment_count() + 1);
        let mut out = Vec::with_capacity(order.len());
        out.extend_from_slice(&order[..cuts[0]]);
        for pos in 0..self.segment_count() {
            let s = self.segment_at(pos);
            let segment = &order[cuts[s]..cuts[s + 1]];
            if self.reverses(s) {
                out.extend(segment.iter().rev());
            } else {
                out.extend_from_slice(segment);
            }
        }
        out.extend_from_slice(&order[cuts[self.segment_count()]..]);
        out
    }
}

/// Current layout of two segments `B C`.
pub(crate) const TWO_SEGMENT_IDENTITY: Reconnection = Reconnection::new([0, 1, 0], 0b00, 2);

/// The seven non-identity layouts of two segments `B C`.
pub(crate) const THREE_OPT_RECONNECTIONS: [Reconnection; 7] = [
    Reconnection::new([0, 1, 0], 0b10, 2), // B  C'
    Reconnection::new([0, 1, 0], 0b01, 2), // B' C
    Reconnection::new([0, 1, 0], 0b11, 2), // B' C'
    Reconnection::new([1, 0, 0], 0b00, 2), // C  B
    Reconnection::new([1, 0, 0], 0b01, 2), // C  B'
    Reconnection::new([1, 0, 0], 0b10, 2), // C' B
    Reconnection::new([1, 0, 0], 0b11, 2), // C' B'
];

/// Current layout of three segments `B C D`.
pub(crate) const THREE_SEGMENT_IDENTITY: Reconnection = Reconnection::new([0, 1, 2], 0b000, 3);

/// Every non-empty subset of `B C D` reversed in place.
pub(crate) const FOUR_OPT_RECONNECTIONS: [Reconnection; 7] = [
    Reconnection::new([0, 1, 2], 0b001, 3),
    Reconnection::new([0, 1, 2], 0b010, 3),
    Reconnection::new([0, 1, 2], 0b011, 3),
    Reconnection::new([0, 1, 2], 0b100, 3),
    Reconnection::new([0, 1, 2], 0b101, 3),
    Reconnection::new([0, 1, 2], 0b110, 3),
    Reconnection::new([0, 1, 2], 0b111, 3),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> DistanceMatrix {
        // Points on a line at their own index.
        let data = (0..n * n)
            .map(|c| ((c / n) as f64 - (c % n) as f64).abs())
            .collect();
        DistanceMatrix::from_data(n, data).unwrap()
    }

    #[test]
    fn test_identity_apply_is_noop() {
        let order = vec![0, 1, 2, 3, 4, 5, 0];
        assert_eq!(TWO_SEGMENT_IDENTITY.apply(&order, &[1, 3, 5]), order);
        assert_eq!(THREE_SEGMENT_IDENTITY.apply(&order, &[1, 2, 4, 6]), order);
    }

    #[test]
    fn test_swap_and_reverse() {
        let order = vec![0, 1, 2, 3, 4, 5, 0];
        // B = [1, 2], C = [3, 4]; C' B' = [4, 3, 2, 1]
        let out = THREE_OPT_RECONNECTIONS[6].apply(&order, &[1, 3, 5]);
        assert_eq!(out, vec![0, 4, 3, 2, 1, 5, 0]);
        // C B = [3, 4, 1, 2]
        let out = THREE_OPT_RECONNECTIONS[3].apply(&order, &[1, 3, 5]);
        assert_eq!(out, vec![0, 3, 4, 1, 2, 5, 0]);
    }

    #[test]
    fn test_reverse_each_segment() {
        let order = vec![0, 1, 2, 3, 4, 5, 6, 0];
        // B = [1, 2], C = [3], D = [4, 5]; reverse B and D.
        let out = FOUR_OPT_RECONNECTIONS[4].apply(&order, &[1, 3, 4, 6]);
        assert_eq!(out, vec![0, 2, 1, 3, 5, 4, 6, 0]);
    }

    #[test]
    fn test_boundary_delta_matches_full_cost() {
        let dm = grid(7);
        let order = vec![0, 3, 1, 5, 2, 6, 4, 0];
        let cuts = [2, 4, 6];
        let base = TWO_SEGMENT_IDENTITY.boundary_cost(&dm, &order, &cuts);
        let full = dm.path_length(&order);
        for pattern in THREE_OPT_RECONNECTIONS {
            let candidate = pattern.apply(&order, &cuts);
            let estimated = pattern.boundary_cost(&dm, &order, &cuts) - base;
            let exact = dm.path_length(&candidate) - full;
            assert!(
                (estimated - exact).abs() < 1e-9,
                "{pattern:?}: estimated {estimated}, exact {exact}"
            );
        }
    }

    #[test]
    fn test_all_patterns_are_permutations() {
        let order = vec![0, 1, 2, 3, 4, 5, 6, 0];
        for pattern in FOUR_OPT_RECONNECTIONS {
            let mut out = pattern.apply(&order, &[1, 3, 4, 6]);
            assert_eq!(out.len(), order.len());
            assert_eq!(out[0], 0);
            assert_eq!(out[7], 0);
            out.pop();
            out.sort_unstable();
            assert_eq!(out, vec![0, 1, 2, 3, 4, 5, 6]);
        }
    }
}
