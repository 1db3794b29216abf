use std::{fmt::Debug, hash::Hash};

use crate::error::HasherErr;

/// O(1) forward and reverse hashes of closed ranges `[l, r]` of a fixed sequence.
///
/// Every implementation uses the same index convention: ranges are 0-indexed and
/// inclusive on both ends, `get_hash(l, r)` reads `seq[l..=r]` front to back and
/// `rev_hash(l, r)` reads the same symbols back to front. A range is palindromic exactly
/// when (up to collisions) the two agree.
///
/// Hashes from different hashers are only comparable when both were built over the same
/// context.
pub trait RangeHash {
    type Hash: Copy + Eq + Hash + Debug;

    /**
     * Need to Implement
     */

    fn len(&self) -> usize;

    fn get_hash(&self, l: usize, r: usize) -> Result<Self::Hash, HasherErr>;

    fn rev_hash(&self, l: usize, r: usize) -> Result<Self::Hash, HasherErr>;

    /**
     * Override
     */

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_palindrome(&self, l: usize, r: usize) -> Result<bool, HasherErr> {
        Ok(self.get_hash(l, r)? == self.rev_hash(l, r)?)
    }

    /// Whether `seq[a.0..=a.1]` and `seq[b.0..=b.1]` hold the same symbols.
    fn ranges_equal(&self, a: (usize, usize), b: (usize, usize)) -> Result<bool, HasherErr> {
        let first = self.get_hash(a.0, a.1)?;
        let second = self.get_hash(b.0, b.1)?;
        Ok(a.1 - a.0 == b.1 - b.0 && first == second)
    }

    /// Whether `seq[a.0..=a.1]` equals `seq[b.0..=b.1]` read backward.
    fn is_mirror(&self, a: (usize, usize), b: (usize, usize)) -> Result<bool, HasherErr> {
        let forward = self.get_hash(a.0, a.1)?;
        let backward = self.rev_hash(b.0, b.1)?;
        Ok(a.1 - a.0 == b.1 - b.0 && forward == backward)
    }

    /// Length of the longest common prefix of the suffixes starting at `a` and `b`.
    ///
    /// `a` and `b` may equal `len()`, in which case the answer is 0. A start past the end
    /// is reported as the one-point range `[start, start]`.
    fn common_prefix_len(&self, a: usize, b: usize) -> Result<usize, HasherErr> {
        let len = self.len();
        for start in [a, b] {
            if start > len {
                return Err(HasherErr::IndexOutOfRange {
                    l: start,
                    r: start,
                    len,
                });
            }
        }

        // a prefix of length lo always matches
        let mut lo = 0;
        let mut hi = len - a.max(b);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if self.get_hash(a, a + mid - 1)? == self.get_hash(b, b + mid - 1)? {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        Ok(lo)
    }

    /// Hash of every window of `window_size` symbols, paired with the window's start.
    ///
    /// Empty when `window_size` is 0 or longer than the sequence.
    fn window_hashes(&self, window_size: usize) -> impl Iterator<Item = (Self::Hash, usize)> + '_ {
        let num_windows = if window_size == 0 {
            0
        } else {
            (self.len() + 1).saturating_sub(window_size)
        };
        (0..num_windows).filter_map(move |start| {
            // start + window_size <= len, so every window is a valid range
            let hash = self.get_hash(start, start + window_size - 1);
            debug_assert!(hash.is_ok());
            hash.ok().map(|hash| (hash, start))
        })
    }
}

pub(crate) fn check_range(l: usize, r: usize, len: usize) -> Result<(), HasherErr> {
    if l > r || r >= len {
        return Err(HasherErr::IndexOutOfRange { l, r, len });
    }
    Ok(())
}
