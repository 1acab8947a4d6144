//! Marking arrays for the sieve
//!
//! A marking array holds one flag per integer `0..=n`. A set flag means the
//! index is still a candidate prime; the sieve only ever clears flags.

#[cfg(any(feature = "alloc", test))]
use alloc::boxed::Box;
#[cfg(any(feature = "alloc", test))]
use alloc::vec;

/// Index-addressable candidate flags
pub trait MarkingArray {
    /// Number of indices covered (bound + 1)
    fn len(&self) -> usize;

    /// Check whether `index` has not yet been proven composite
    fn is_candidate(&self, index: usize) -> bool;

    /// Record `index` as composite
    fn mark_composite(&mut self, index: usize);

    /// Set every index back to candidate
    fn reset(&mut self);
}

impl MarkingArray for [bool] {
    fn len(&self) -> usize {
        <[bool]>::len(self)
    }

    fn is_candidate(&self, index: usize) -> bool {
        self[index]
    }

    fn mark_composite(&mut self, index: usize) {
        self[index] = false;
    }

    fn reset(&mut self) {
        self.fill(true);
    }
}

/// Packed marking array, one bit per index
///
/// Uses an eighth of the memory of a `[bool]`. Bits past `len` in the last
/// word are always clear.
#[cfg(any(feature = "alloc", test))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    words: Box<[u64]>,
    len: usize,
}

#[cfg(any(feature = "alloc", test))]
impl BitArray {
    /// Create an array of `len` indices, all marked candidate
    pub fn with_candidates(len: usize) -> Self {
        let word_count = len.div_ceil(64);
        let mut array = Self {
            words: vec![0u64; word_count].into_boxed_slice(),
            len,
        };
        array.reset();
        array
    }

    fn clear_padding(&mut self) {
        let tail = self.len % 64;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << tail) - 1;
            }
        }
    }
}

#[cfg(any(feature = "alloc", test))]
impl MarkingArray for BitArray {
    fn len(&self) -> usize {
        self.len
    }

    fn is_candidate(&self, index: usize) -> bool {
        assert!(index < self.len, "index {index} out of range for {}", self.len);
        let word_index = index / 64;
        let bit_offset = index % 64;
        (self.words[word_index] & (1u64 << bit_offset)) != 0
    }

    fn mark_composite(&mut self, index: usize) {
        assert!(index < self.len, "index {index} out of range for {}", self.len);
        let word_index = index / 64;
        let bit_offset = index % 64;
        self.words[word_index] &= !(1u64 << bit_offset);
    }

    fn reset(&mut self) {
        self.words.fill(u64::MAX);
        self.clear_padding();
    }
}

#[cfg(test)]
impl BitArray {
    fn count_candidates(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn as_words(&self) -> &[u64] {
        &self.words
    }
}
