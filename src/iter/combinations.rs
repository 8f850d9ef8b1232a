//! k-combinations of an n-set.
//!
//! For n = 4, k = 2 the cursor visits
//!
//! ```text
//! (0,1) (0,2) (0,3)
//!       (1,2) (1,3)
//!             (2,3)
//! ```
//!
//! Advancing bumps the rightmost index that still has room
//! (`indices[l] < n - k + l`) and resets everything to its right to the
//! smallest increasing continuation.

use crate::utils::binomial;

/// Cursor over the strictly increasing k-tuples of `{0, ..., n-1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    ended: bool,
}

impl Combinations {
    /// Cursor positioned on `(0, 1, ..., k-1)`.
    ///
    /// With `k > n` there is no combination and the cursor starts ended;
    /// with `k == 0` there is exactly one, the empty tuple.
    pub fn new(n: usize, k: usize) -> Self {
        let mut it = Self {
            n,
            k,
            indices: Vec::with_capacity(k),
            ended: false,
        };
        it.reset();
        it
    }

    /// Cursor that is already past its last combination.
    pub fn exhausted(n: usize, k: usize) -> Self {
        let mut it = Self::new(n, k);
        it.reset_to_end();
        it
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Total number of combinations, `C(n, k)`, or `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        binomial(self.n, self.k)
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Index chosen at `position` in the current combination.
    ///
    /// # Panics
    /// Panics if `position >= k`.
    #[inline]
    pub fn get(&self, position: usize) -> usize {
        assert!(
            position < self.k,
            "position {position} out of range for a {}-combination",
            self.k
        );
        self.indices[position]
    }

    /// The current combination, or `None` once ended.
    pub fn current(&self) -> Option<&[usize]> {
        (!self.ended).then_some(self.indices.as_slice())
    }

    /// Move to the next combination. No-op once ended.
    pub fn advance(&mut self) {
        if self.ended {
            return;
        }
        let (n, k) = (self.n, self.k);
        match (0..k).rev().find(|&l| self.indices[l] < n - k + l) {
            Some(l) => {
                self.indices[l] += 1;
                for i in l + 1..k {
                    self.indices[i] = self.indices[i - 1] + 1;
                }
            }
            None => self.ended = true,
        }
    }

    /// Restart at the first combination.
    pub fn reset(&mut self) {
        self.indices.clear();
        self.indices.extend(0..self.k);
        self.ended = self.k > self.n;
    }

    /// Move to the ended state without visiting anything.
    pub fn reset_to_end(&mut self) {
        self.reset();
        self.ended = true;
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?.to_vec();
        self.advance();
        Some(item)
    }
}
