//! Autocorrelation of a subset: the multiset of its pairwise differences.
//!
//! For `D ⊆ G` the autocorrelation maps each `g ∈ G` to the number of
//! ordered pairs `(s1, s2) ∈ D × D` with `s1 - s2 = g`. Pairs with
//! `s1 = s2` are included, so the identity is counted once per element.

use std::collections::HashMap;

use crate::group::{AbelianGroup, Element};

/// Difference multiplicities of a candidate set.
///
/// Only differences that actually occur are stored. Space is bounded by
/// `min(k², v)` entries.
#[derive(Debug, Clone)]
pub struct Autocorrelation {
    counts: HashMap<Element, usize>,
    total: usize,
}

impl Autocorrelation {
    /// Computes the autocorrelation of `set` over all `k²` ordered pairs.
    ///
    /// Elements of `set` must belong to `group`.
    #[must_use]
    pub fn of(group: &AbelianGroup, set: &[Element]) -> Self {
        let mut counts: HashMap<Element, usize> = HashMap::new();
        for s1 in set {
            for s2 in set {
                *counts.entry(group.sub(s1, s2)).or_insert(0) += 1;
            }
        }
        Self {
            counts,
            total: set.len() * set.len(),
        }
    }

    /// Multiplicity of `g` as a difference (0 if it never occurs).
    #[must_use]
    pub fn count(&self, g: &Element) -> usize {
        self.counts.get(g).copied().unwrap_or(0)
    }

    /// Multiplicity of the identity. Equals `k` when the set has no repeats.
    #[must_use]
    pub fn identity_count(&self) -> usize {
        self.counts
            .iter()
            .find(|(g, _)| g.is_zero())
            .map_or(0, |(_, &c)| c)
    }

    /// Sum of all multiplicities (`k²`).
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct differences, identity included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True for the autocorrelation of the empty set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Non-identity differences with their multiplicities, in ascending order.
    #[must_use]
    pub fn nonzero(&self) -> Vec<(&Element, usize)> {
        let mut out: Vec<_> = self
            .counts
            .iter()
            .filter(|(g, _)| !g.is_zero())
            .map(|(g, &c)| (g, c))
            .collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_all_ordered_pairs() {
        let g = AbelianGroup::cyclic(7).unwrap();
        let d = g.elements([[0i64], [1], [3]]).unwrap();
        let ac = Autocorrelation::of(&g, &d);
        assert_eq!(ac.total(), 9);
        assert_eq!(ac.identity_count(), 3);
        // {0,1,3} is perfect: all six non-zero residues once
        assert_eq!(ac.len(), 7);
        for (_, c) in ac.nonzero() {
            assert_eq!(c, 1);
        }
    }

    #[test]
    fn repeated_element_inflates_identity() {
        let g = AbelianGroup::cyclic(5).unwrap();
        let d = g.elements([[2i64], [2]]).unwrap();
        let ac = Autocorrelation::of(&g, &d);
        assert_eq!(ac.identity_count(), 4);
        assert!(ac.nonzero().is_empty());
    }

    #[test]
    fn empty_set() {
        let g = AbelianGroup::cyclic(5).unwrap();
        let ac = Autocorrelation::of(&g, &[]);
        assert!(ac.is_empty());
        assert_eq!(ac.total(), 0);
        assert_eq!(ac.identity_count(), 0);
    }

    #[test]
    fn nonzero_is_sorted() {
        let g = AbelianGroup::cyclic(7).unwrap();
        let d = g.elements([[0i64], [1], [2]]).unwrap();
        let ac = Autocorrelation::of(&g, &d);
        let keys: Vec<_> = ac.nonzero().iter().map(|(e, _)| e.to_string()).collect();
        assert_eq!(keys, ["1", "2", "5", "6"]);
        assert_eq!(ac.count(&g.element(&[1]).unwrap()), 2);
        assert_eq!(ac.count(&g.element(&[3]).unwrap()), 0);
    }
}
