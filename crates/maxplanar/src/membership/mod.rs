//! Pluggable membership sets over vertex ids.
//!
//! Purpose
//! - One contract (`MembershipSet`) for the small dynamic vertex sets used by
//!   the ordering builder and the embedding replay: the live frontier, the
//!   removed set, and the placed prefix.
//! - Three backends with identical logical results and different costs:
//!   `SortedSet` (merge-based set algebra), `TreeSet` (ordered tree, log-time
//!   queries), `BitSet` (word array, O(1) insert/contains).
//!
//! Bulk operations take ascending input and produce ascending output, so the
//! algorithms never depend on a backend's internal iteration order.

mod bits;
mod sorted;
mod tree;

use std::fmt;

pub use bits::BitSet;
pub use sorted::SortedSet;
pub use tree::TreeSet;

/// Dynamic set of vertex ids in `0..universe`.
pub trait MembershipSet: Sized {
    /// Empty set sized for ids in `0..universe`.
    fn with_universe(universe: usize) -> Self;

    fn insert(&mut self, v: usize);

    fn contains(&self, v: usize) -> bool;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append all members to `out` in ascending order.
    fn extend_sorted(&self, out: &mut Vec<usize>);

    /// Replace the contents with `items`.
    fn assign(&mut self, items: &[usize]) {
        self.clear();
        for &v in items {
            self.insert(v);
        }
    }

    /// `out = (self ∩ seq) \ exclude`, ascending. `seq` must be strictly ascending.
    fn intersect(&self, seq: &[usize], exclude: Option<&Self>, out: &mut Vec<usize>) {
        out.clear();
        out.extend(
            seq.iter()
                .copied()
                .filter(|&v| self.contains(v) && !is_excluded(exclude, v)),
        );
    }

    /// `out = (self ∪ seq) \ exclude`, ascending. `seq` must be strictly ascending.
    fn union(&self, seq: &[usize], exclude: Option<&Self>, out: &mut Vec<usize>) {
        let mut mine = Vec::with_capacity(self.len());
        self.extend_sorted(&mut mine);
        merge_union(&mine, seq, |v| is_excluded(exclude, v), out);
    }
}

#[inline]
pub(crate) fn is_excluded<S: MembershipSet>(exclude: Option<&S>, v: usize) -> bool {
    exclude.is_some_and(|r| r.contains(v))
}

/// Linear merge of two strictly ascending slices, dropping `skip` hits.
pub(crate) fn merge_union(
    a: &[usize],
    b: &[usize],
    skip: impl Fn(usize) -> bool,
    out: &mut Vec<usize>,
) {
    out.clear();
    out.reserve(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let v = match (a.get(i), b.get(j)) {
            (Some(&x), Some(&y)) if x == y => {
                i += 1;
                j += 1;
                x
            }
            (Some(&x), Some(&y)) if x < y => {
                i += 1;
                x
            }
            (Some(_), Some(&y)) => {
                j += 1;
                y
            }
            (Some(&x), None) => {
                i += 1;
                x
            }
            (None, Some(&y)) => {
                j += 1;
                y
            }
            (None, None) => break,
        };
        if !skip(v) {
            out.push(v);
        }
    }
}

/// Linear merge keeping elements present in both strictly ascending slices.
pub(crate) fn merge_intersect(
    a: &[usize],
    b: &[usize],
    skip: impl Fn(usize) -> bool,
    out: &mut Vec<usize>,
) {
    out.clear();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                if !skip(a[i]) {
                    out.push(a[i]);
                }
                i += 1;
                j += 1;
            }
        }
    }
}

/// Runtime backend selector for callers that pick the set type from config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    #[default]
    Sorted,
    Tree,
    Bits,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Sorted, Backend::Tree, Backend::Bits];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Sorted => "sorted",
            Backend::Tree => "tree",
            Backend::Bits => "bits",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
