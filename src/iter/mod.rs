//! Restartable cursors over combinatorial sets.
//!
//! Each cursor holds only its current position, never the whole sequence:
//! - [`combinations`] : strictly increasing k-tuples of `{0..n}` in
//!   lexicographic order.
//! - [`hypercube`]    : points of `{0..k}^n` in odometer order.
//! - [`permutation`]  : a shuffled permutation of `{0..n}` drawn from an
//!   injected random generator.
//!
//! The cursor API is `is_ended` / `advance` / `reset` plus accessors for the
//! current item. All three also implement [`Iterator`], yielding the current
//! item and then advancing, so
//!
//! ```
//! use algokit::iter::Combinations;
//!
//! let pairs: Vec<Vec<usize>> = Combinations::new(3, 2).collect();
//! assert_eq!(pairs, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
//! ```

pub mod combinations;
pub mod hypercube;
pub mod permutation;

pub use combinations::Combinations;
pub use hypercube::Hypercube;
pub use permutation::RandomPermutation;
