//! Sorted-vector backend: binary-search membership, merge-based bulk ops.

use super::{is_excluded, merge_intersect, merge_union, MembershipSet};

/// Members kept in a strictly ascending `Vec`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedSet {
    items: Vec<usize>,
}

impl SortedSet {
    pub fn as_slice(&self) -> &[usize] {
        &self.items
    }
}

impl MembershipSet for SortedSet {
    fn with_universe(_universe: usize) -> Self {
        Self::default()
    }

    fn insert(&mut self, v: usize) {
        if let Err(pos) = self.items.binary_search(&v) {
            self.items.insert(pos, v);
        }
    }

    #[inline]
    fn contains(&self, v: usize) -> bool {
        self.items.binary_search(&v).is_ok()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn extend_sorted(&self, out: &mut Vec<usize>) {
        out.extend_from_slice(&self.items);
    }

    fn assign(&mut self, items: &[usize]) {
        self.items.clear();
        self.items.extend_from_slice(items);
        if !self.items.windows(2).all(|w| w[0] < w[1]) {
            self.items.sort_unstable();
            self.items.dedup();
        }
    }

    fn intersect(&self, seq: &[usize], exclude: Option<&Self>, out: &mut Vec<usize>) {
        merge_intersect(&self.items, seq, |v| is_excluded(exclude, v), out);
    }

    fn union(&self, seq: &[usize], exclude: Option<&Self>, out: &mut Vec<usize>) {
        merge_union(&self.items, seq, |v| is_excluded(exclude, v), out);
    }
}
