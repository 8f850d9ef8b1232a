//! 0/1 knapsack by bottom-up dynamic programming.
//!
//! The table `K[i][w]` holds the best value reachable with the first `i`
//! items under capacity `w`:
//! - `K[0][w] = K[i][0] = 0`,
//! - `K[i][w] = max(K[i-1][w], val[i-1] + K[i-1][w - wt[i-1]])` when item
//!   `i` fits, `K[i-1][w]` otherwise.
//!
//! The optimum is `K[N][W]`. One optimal selection is recovered by walking
//! the table back from `(N, W)`:
//! 1. lower `w` while `K[N][w] == K[N][w-1]`, i.e. move to the smallest
//!    capacity that still reaches the optimum;
//! 2. while `w > 0`, skip items with `K[i][w] == K[i-1][w]`, mark the first
//!    item that changes the value as selected and subtract its weight.
//!
//! When several selections are optimal, step 1 decides which one is
//! reported. Starting from the smallest sufficient capacity can yield a
//! different (equally optimal) selection than a walk started at `(N, W)`.
//!
//! Time and space are O(N·W) for [`KnapsackProblem::solve`];
//! [`KnapsackProblem::optimal_value`] keeps a single row and runs in O(W)
//! space.

use num_traits::PrimInt;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::KnapsackError;
use crate::traits::KnapsackValue;

/// Rows at least this wide are filled with rayon under the `parallel` feature.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_WIDTH: usize = 4096;

/// A validated knapsack instance.
///
/// Weights and values are parallel sequences; the instance keeps
/// `min(weights.len(), values.len())` items (further capped by an explicit
/// item limit, see [`KnapsackProblem::with_item_limit`]).
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackProblem<T> {
    capacity: usize,
    weights: Vec<usize>,
    values: Vec<T>,
}

/// Optimal value together with one optimal selection.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution<T> {
    pub value: T,
    /// `selection[i]` is true when item `i` is packed.
    pub selection: Vec<bool>,
}

impl<T> KnapsackSolution<T> {
    /// Indices of the packed items, ascending.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selection
            .iter()
            .enumerate()
            .filter_map(|(i, &packed)| packed.then_some(i))
    }

    /// Total weight of the packed items.
    ///
    /// # Panics
    /// Panics if `weights` is shorter than the selection.
    pub fn total_weight<W: PrimInt>(&self, weights: &[W]) -> W {
        self.selected_indices()
            .fold(W::zero(), |acc, i| acc + weights[i])
    }
}

impl<T: KnapsackValue> KnapsackProblem<T> {
    /// Validate an instance with every item of the shorter input sequence.
    pub fn new<W: PrimInt>(capacity: W, weights: &[W], values: &[T]) -> Result<Self, KnapsackError> {
        Self::with_item_limit(capacity, weights, values, usize::MAX)
    }

    /// Validate an instance restricted to the first `limit` items.
    ///
    /// Only the kept items are validated.
    pub fn with_item_limit<W: PrimInt>(
        capacity: W,
        weights: &[W],
        values: &[T],
        limit: usize,
    ) -> Result<Self, KnapsackError> {
        let items = weights.len().min(values.len()).min(limit);

        let capacity = to_usize(capacity).map_err(|negative| match negative {
            Some(capacity) => KnapsackError::NegativeCapacity { capacity },
            None => KnapsackError::CapacityOverflow,
        })?;
        let weights = weights[..items]
            .iter()
            .enumerate()
            .map(|(index, &weight)| {
                to_usize(weight).map_err(|negative| match negative {
                    Some(weight) => KnapsackError::NegativeWeight { index, weight },
                    None => KnapsackError::WeightOverflow { index },
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let too_large = KnapsackError::TableTooLarge { items, capacity };
        let width = capacity.checked_add(1).ok_or_else(|| too_large.clone())?;
        (items + 1).checked_mul(width).ok_or(too_large)?;

        Ok(Self {
            capacity,
            weights,
            values: values[..items].to_vec(),
        })
    }

    /// The instance with no items and zero capacity.
    pub fn empty() -> Self {
        Self {
            capacity: 0,
            weights: Vec::new(),
            values: Vec::new(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Build the full DP table and reconstruct one optimal selection.
    pub fn solve(&self) -> KnapsackSolution<T> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("knapsack_solve", items = self.len(), capacity = self.capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_table");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.fill_table()
        };
        let selection = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("backtrack");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.backtrack(&table)
        };

        KnapsackSolution {
            value: table.get(self.len(), self.capacity).clone(),
            selection,
        }
    }

    /// Optimal value only, computed over one rolling row.
    pub fn optimal_value(&self) -> T {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("knapsack_value", items = self.len(), capacity = self.capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let width = self.capacity + 1;
        let mut prev = vec![T::zero(); width];
        let mut next = vec![T::zero(); width];
        for (weight, value) in self.weights.iter().zip(&self.values) {
            fill_row(&prev, &mut next, *weight, value);
            std::mem::swap(&mut prev, &mut next);
        }
        prev.swap_remove(self.capacity)
    }

    fn fill_table(&self) -> DpTable<T> {
        let width = self.capacity + 1;
        let height = self.len() + 1;
        let mut cells = vec![T::zero(); width * height];
        for (i, (weight, value)) in self.weights.iter().zip(&self.values).enumerate() {
            let (done, rest) = cells.split_at_mut((i + 1) * width);
            fill_row(&done[i * width..], &mut rest[..width], *weight, value);
        }
        DpTable { width, cells }
    }

    fn backtrack(&self, table: &DpTable<T>) -> Vec<bool> {
        let mut selection = vec![false; self.len()];
        let mut i = self.len();
        let mut w = self.capacity;

        while w > 0 && table.get(i, w) == table.get(i, w - 1) {
            w -= 1;
        }
        while w > 0 {
            while i > 0 && table.get(i, w) == table.get(i - 1, w) {
                i -= 1;
            }
            if i == 0 {
                break;
            }
            selection[i - 1] = true;
            w = w.saturating_sub(self.weights[i - 1]);
            i -= 1;
        }
        selection
    }
}

impl<T: KnapsackValue> Default for KnapsackProblem<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Dense (N+1)×(W+1) table, row-major.
struct DpTable<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T> DpTable<T> {
    #[inline]
    fn get(&self, item: usize, capacity: usize) -> &T {
        &self.cells[item * self.width + capacity]
    }
}

/// `K[i][w]` from row `K[i-1]` for an item of the given weight and value.
#[inline]
fn transition<T: KnapsackValue>(prev: &[T], w: usize, weight: usize, value: &T) -> T {
    if w == 0 {
        return T::zero();
    }
    let skip = &prev[w];
    if weight > w {
        return skip.clone();
    }
    let take = value.clone() + prev[w - weight].clone();
    if take < *skip {
        skip.clone()
    } else {
        take
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_row<T: KnapsackValue>(prev: &[T], next: &mut [T], weight: usize, value: &T) {
    for (w, cell) in next.iter_mut().enumerate() {
        *cell = transition(prev, w, weight, value);
    }
}

#[cfg(feature = "parallel")]
fn fill_row<T: KnapsackValue>(prev: &[T], next: &mut [T], weight: usize, value: &T) {
    if next.len() < PARALLEL_MIN_WIDTH {
        for (w, cell) in next.iter_mut().enumerate() {
            *cell = transition(prev, w, weight, value);
        }
        return;
    }
    next.par_iter_mut()
        .enumerate()
        .for_each(|(w, cell)| *cell = transition(prev, w, weight, value));
}

/// Convert to `usize`. `Err(Some(v))` for a negative input, `Err(None)` for
/// one too large to address.
fn to_usize<W: PrimInt>(value: W) -> Result<usize, Option<i128>> {
    if value < W::zero() {
        return Err(Some(value.to_i128().unwrap_or(i128::MIN)));
    }
    value.to_usize().ok_or(None)
}

/// Solve a knapsack over the first `min(weights.len(), values.len(), n)` items.
///
/// ```
/// use algokit::knapsack::knapsack;
///
/// let solution = knapsack(50, &[20, 20, 30, 10], &[100, 60, 120, 50], 4).unwrap();
/// assert_eq!(solution.value, 220);
/// assert_eq!(solution.selection, vec![true, false, true, false]);
/// ```
pub fn knapsack<W, T>(
    capacity: W,
    weights: &[W],
    values: &[T],
    n: usize,
) -> Result<KnapsackSolution<T>, KnapsackError>
where
    W: PrimInt,
    T: KnapsackValue,
{
    Ok(KnapsackProblem::with_item_limit(capacity, weights, values, n)?.solve())
}

/// Optimal knapsack value without reconstructing a selection.
pub fn knapsack_value<W, T>(capacity: W, weights: &[W], values: &[T], n: usize) -> Result<T, KnapsackError>
where
    W: PrimInt,
    T: KnapsackValue,
{
    Ok(KnapsackProblem::with_item_limit(capacity, weights, values, n)?.optimal_value())
}

/// Reusable solver holding the current instance and its last solution.
///
/// Every solve replaces the stored solution as a whole; a failed
/// [`KnapsackSolver::solve_with`] clears it and keeps the previous instance.
#[derive(Debug, Clone)]
pub struct KnapsackSolver<T> {
    problem: KnapsackProblem<T>,
    record_selection: bool,
    value: Option<T>,
    selection: Option<Vec<bool>>,
}

impl<T: KnapsackValue> KnapsackSolver<T> {
    /// Solver over the empty instance.
    pub fn new() -> Self {
        Self::from_problem(KnapsackProblem::empty(), true)
    }

    pub fn with_instance<W: PrimInt>(capacity: W, weights: &[W], values: &[T]) -> Result<Self, KnapsackError> {
        Ok(Self::from_problem(
            KnapsackProblem::new(capacity, weights, values)?,
            true,
        ))
    }

    pub(crate) fn from_problem(problem: KnapsackProblem<T>, record_selection: bool) -> Self {
        Self {
            problem,
            record_selection,
            value: None,
            selection: None,
        }
    }

    pub fn problem(&self) -> &KnapsackProblem<T> {
        &self.problem
    }

    /// Whether solves reconstruct a selection (full table) or only the value.
    pub fn records_selection(&self) -> bool {
        self.record_selection
    }

    /// Solve the stored instance and return the optimal value.
    pub fn solve(&mut self) -> &T {
        self.value = None;
        self.selection = None;
        if self.record_selection {
            let KnapsackSolution { value, selection } = self.problem.solve();
            self.selection = Some(selection);
            self.value.insert(value)
        } else {
            self.value.insert(self.problem.optimal_value())
        }
    }

    /// Replace the instance and solve it.
    pub fn solve_with<W: PrimInt>(&mut self, capacity: W, weights: &[W], values: &[T]) -> Result<T, KnapsackError> {
        self.value = None;
        self.selection = None;
        self.problem = KnapsackProblem::new(capacity, weights, values)?;
        Ok(self.solve().clone())
    }

    /// Value found by the last solve, if any.
    pub fn optimal_value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Selection found by the last solve; `None` before the first solve and
    /// when selections are not recorded.
    pub fn selection(&self) -> Option<&[bool]> {
        self.selection.as_deref()
    }

    /// Last value and selection as a [`KnapsackSolution`].
    pub fn solution(&self) -> Option<KnapsackSolution<T>> {
        Some(KnapsackSolution {
            value: self.value.clone()?,
            selection: self.selection.clone()?,
        })
    }
}

impl<T: KnapsackValue> Default for KnapsackSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}
