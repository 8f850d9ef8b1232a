//! Error types for grid mutation and knapsack validation.
//!
//! Every variant carries the values needed to diagnose the failed call.
//! A failed operation never leaves partially modified state behind.

use thiserror::Error;

/// Errors raised by [`Grid2D`](crate::grid::Grid2D) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {column}) out of bounds for a {rows}x{columns} grid")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("row index {index} out of bounds (rows: {rows})")]
    RowOutOfBounds { index: usize, rows: usize },
    #[error("column index {index} out of bounds (columns: {columns})")]
    ColumnOutOfBounds { index: usize, columns: usize },
    /// `begin..end` is not a valid sub-range of `0..extent`.
    #[error("invalid range {begin}..{end} for extent {extent}")]
    InvalidRange {
        begin: usize,
        end: usize,
        extent: usize,
    },
    /// An inserted row does not have one element per column.
    #[error("row has {actual} elements, expected {expected}")]
    RowLengthMismatch { expected: usize, actual: usize },
    /// An inserted column does not have one element per row.
    #[error("column has {actual} elements, expected {expected}")]
    ColumnLengthMismatch { expected: usize, actual: usize },
    #[error("shape mismatch: {left_rows}x{left_columns} vs {right_rows}x{right_columns}")]
    ShapeMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },
    #[error("{actual} elements cannot form a {rows}x{columns} grid")]
    DataLengthMismatch {
        rows: usize,
        columns: usize,
        actual: usize,
    },
}

/// Errors raised while validating a knapsack instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    #[error("knapsack capacity must be non-negative, got {capacity}")]
    NegativeCapacity { capacity: i128 },
    #[error("weight of item {index} must be non-negative, got {weight}")]
    NegativeWeight { index: usize, weight: i128 },
    #[error("knapsack capacity does not fit in usize")]
    CapacityOverflow,
    #[error("weight of item {index} does not fit in usize")]
    WeightOverflow { index: usize },
    /// `(items + 1) * (capacity + 1)` cells do not fit in memory addressing.
    #[error("DP table for {items} items and capacity {capacity} is too large")]
    TableTooLarge { items: usize, capacity: usize },
}
