//! Small, independent algorithmic building blocks.
//!
//! The crate bundles textbook components that share no runtime state:
//!
//! - [`Grid2D`]: a dense, row-major 2D array with row/column insertion,
//!   erasure, swapping and data-preserving resize.
//! - [`knapsack`]: the 0/1 knapsack solved by bottom-up dynamic programming,
//!   returning the optimal value and one optimal selection.
//! - [`iter`]: restartable cursors over k-combinations, hypercube grid points
//!   and random permutations.
//! - [`sort`]: in-place quick sort with a first-element Lomuto partition.
//! - [`timing`]: wall-clock and CPU time queries.
//!
//! ## Quick start
//! ```
//! use algokit::{knapsack::knapsack, Grid2D};
//!
//! let solution = knapsack(50, &[20, 10, 30, 20], &[-12.7f64, 31.5, 40.8, 15.7], 4).unwrap();
//! assert!((solution.value - 72.3).abs() < 1e-9);
//! assert_eq!(solution.selection, vec![false, true, true, false]);
//!
//! let mut grid: Grid2D<u32> = Grid2D::new(2, 2);
//! grid.push_back_row(vec![7, 8]).unwrap();
//! assert_eq!(grid.shape(), (3, 2));
//! ```
//!
//! ## Errors
//! Invalid arguments (shape mismatches, out-of-range indices, negative
//! knapsack weights) are reported through [`GridError`] and
//! [`KnapsackError`]. Operations that are meaningless for an element type,
//! such as a dot product of non-numeric cells, do not compile.
//!
//! ## Features
//! - `tracing`: spans around knapsack solves and sorts.
//! - `parallel`: fill wide knapsack DP rows with rayon. Knapsack values must
//!   then also be `Send + Sync` ([`traits::ThreadSafety`]), so enabling it
//!   can reject value types that compile without it.

pub mod builder;
pub mod error;
pub mod grid;
pub mod iter;
pub mod knapsack;
pub mod sort;
pub mod timing;
pub mod traits;
pub mod utils;

pub use crate::builder::KnapsackSolverBuilder;
pub use crate::error::{GridError, KnapsackError};
pub use crate::grid::Grid2D;
pub use crate::knapsack::{KnapsackProblem, KnapsackSolution, KnapsackSolver};
pub use crate::traits::{KnapsackValue, Scalar, ThreadSafety};
