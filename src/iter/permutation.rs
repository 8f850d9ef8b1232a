//! Random permutation of `{0, ..., n-1}`.
//!
//! The generator is owned by the cursor and supplied by the caller, so a
//! seeded generator gives a reproducible sequence of permutations.

use rand::seq::SliceRandom;
use rand::Rng;

/// Cursor over a uniformly shuffled permutation of `{0, ..., n-1}`.
///
/// ```
/// use algokit::iter::RandomPermutation;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut perm: Vec<usize> = RandomPermutation::new(5, StdRng::seed_from_u64(7)).collect();
/// perm.sort_unstable();
/// assert_eq!(perm, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct RandomPermutation<R> {
    values: Vec<usize>,
    position: usize,
    rng: R,
}

impl<R: Rng> RandomPermutation<R> {
    /// Draw a permutation of `n` elements from `rng`.
    pub fn new(n: usize, mut rng: R) -> Self {
        let mut values: Vec<usize> = (0..n).collect();
        values.shuffle(&mut rng);
        Self {
            values,
            position: 0,
            rng,
        }
    }

    /// Number of elements `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once all `n` elements have been visited.
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.position >= self.values.len()
    }

    /// The current element, or `None` once ended.
    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.values.get(self.position).copied()
    }

    /// Move to the next element. No-op once ended.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_ended() {
            self.position += 1;
        }
    }

    /// Draw a fresh permutation and restart at its first element.
    pub fn reset(&mut self) {
        self.values.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> Iterator for RandomPermutation<R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let item = self.current()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RandomPermutation<R> {}

#[cfg(test)]
mod tests {
    use super::RandomPermutation;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn visits_every_value_once() {
        let mut it = RandomPermutation::new(5, StdRng::seed_from_u64(1));
        let mut total = 0;
        let mut seen = [false; 5];
        while !it.is_ended() {
            let v = it.current().unwrap();
            assert!(!seen[v]);
            seen[v] = true;
            total += v;
            it.advance();
        }
        assert_eq!(total, 10);
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_permutation() {
        let a: Vec<_> = RandomPermutation::new(32, StdRng::seed_from_u64(9)).collect();
        let b: Vec<_> = RandomPermutation::new(32, StdRng::seed_from_u64(9)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn reset_restarts_with_full_length() {
        let mut it = RandomPermutation::new(6, StdRng::seed_from_u64(3));
        it.by_ref().take(4).for_each(drop);
        assert_eq!(it.len(), 6);
        it.reset();
        assert!(!it.is_ended());
        let mut values: Vec<_> = it.collect();
        values.sort_unstable();
        assert_eq!(values, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn empty_permutation_is_ended() {
        let mut it = RandomPermutation::new(0, StdRng::seed_from_u64(0));
        assert!(it.is_ended());
        assert!(it.is_empty());
        assert_eq!(it.current(), None);
        assert_eq!(it.next(), None);
    }
}
