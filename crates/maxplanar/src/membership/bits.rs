//! Bit-vector backend.
//!
//! Each 64-bit word stores 62 ids; the two top bits stay clear. `clear` costs
//! one pass over the words, so the set is cheap to reuse between seed attempts.

use super::MembershipSet;

const BITS_PER_WORD: usize = 62;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    len: usize,
}

impl BitSet {
    #[inline]
    fn slot(v: usize) -> (usize, u64) {
        (v / BITS_PER_WORD, 1u64 << (v % BITS_PER_WORD))
    }

    /// Number of backing words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl MembershipSet for BitSet {
    fn with_universe(universe: usize) -> Self {
        Self {
            words: vec![0; universe.div_ceil(BITS_PER_WORD)],
            len: 0,
        }
    }

    fn insert(&mut self, v: usize) {
        let (w, mask) = Self::slot(v);
        if w >= self.words.len() {
            self.words.resize(w + 1, 0);
        }
        if self.words[w] & mask == 0 {
            self.words[w] |= mask;
            self.len += 1;
        }
    }

    #[inline]
    fn contains(&self, v: usize) -> bool {
        let (w, mask) = Self::slot(v);
        self.words.get(w).is_some_and(|&word| word & mask != 0)
    }

    fn clear(&mut self) {
        self.words.fill(0);
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn extend_sorted(&self, out: &mut Vec<usize>) {
        for (w, &word) in self.words.iter().enumerate() {
            let mut bits = word;
            while bits != 0 {
                out.push(w * BITS_PER_WORD + bits.trailing_zeros() as usize);
                bits &= bits - 1;
            }
        }
    }
}
