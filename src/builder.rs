use num_traits::PrimInt;

use crate::error::KnapsackError;
use crate::knapsack::{KnapsackProblem, KnapsackSolver};
use crate::traits::KnapsackValue;

/// Step-by-step configuration of a [`KnapsackSolver`].
///
/// ```
/// use algokit::KnapsackSolverBuilder;
///
/// let mut solver = KnapsackSolverBuilder::new(50)
///     .with_items(&[20, 20, 30, 10], &[100, 60, 120, 70])
///     .record_selection(false)
///     .build()
///     .unwrap();
/// assert_eq!(*solver.solve(), 230);
/// assert_eq!(solver.selection(), None);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackSolverBuilder<W, T> {
    capacity: W,
    weights: Vec<W>,
    values: Vec<T>,
    item_limit: Option<usize>,
    record_selection: bool,
}

impl<W: PrimInt, T: KnapsackValue> KnapsackSolverBuilder<W, T> {
    pub fn new(capacity: W) -> Self {
        Self {
            capacity,
            weights: Vec::new(),
            values: Vec::new(),
            item_limit: None,
            record_selection: true,
        }
    }

    /// Append one item.
    pub fn with_item(mut self, weight: W, value: T) -> Self {
        self.weights.push(weight);
        self.values.push(value);
        self
    }

    /// Append parallel weight/value sequences.
    ///
    /// Unequal lengths are not an error: the solver keeps the shorter prefix.
    pub fn with_items(mut self, weights: &[W], values: &[T]) -> Self {
        self.weights.extend_from_slice(weights);
        self.values.extend_from_slice(values);
        self
    }

    /// Keep only the first `limit` items.
    pub fn with_item_limit(mut self, limit: usize) -> Self {
        self.item_limit = Some(limit);
        self
    }

    /// When `false`, solves skip the table and the selection (O(W) space).
    pub fn record_selection(mut self, record: bool) -> Self {
        self.record_selection = record;
        self
    }

    pub fn build(self) -> Result<KnapsackSolver<T>, KnapsackError> {
        let problem = KnapsackProblem::with_item_limit(
            self.capacity,
            &self.weights,
            &self.values,
            self.item_limit.unwrap_or(usize::MAX),
        )?;
        Ok(KnapsackSolver::from_problem(problem, self.record_selection))
    }
}
