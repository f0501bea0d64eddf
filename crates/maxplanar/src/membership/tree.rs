//! Ordered-tree backend.
//!
//! Every query is logarithmic; bulk operations test each candidate against the
//! tree instead of merging.

use std::collections::BTreeSet;

use super::{is_excluded, MembershipSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeSet {
    inner: BTreeSet<usize>,
}

impl MembershipSet for TreeSet {
    fn with_universe(_universe: usize) -> Self {
        Self::default()
    }

    fn insert(&mut self, v: usize) {
        self.inner.insert(v);
    }

    #[inline]
    fn contains(&self, v: usize) -> bool {
        self.inner.contains(&v)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn extend_sorted(&self, out: &mut Vec<usize>) {
        out.extend(self.inner.iter().copied());
    }

    fn union(&self, seq: &[usize], exclude: Option<&Self>, out: &mut Vec<usize>) {
        out.clear();
        out.extend(
            self.inner
                .iter()
                .copied()
                .filter(|&v| !is_excluded(exclude, v)),
        );
        let own = out.len();
        out.extend(
            seq.iter()
                .copied()
                .filter(|&v| !self.contains(v) && !is_excluded(exclude, v)),
        );
        if out.len() > own {
            out.sort_unstable();
        }
    }
}
