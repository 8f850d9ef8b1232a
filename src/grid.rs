//! Dense two-dimensional array with shape-preserving mutation.
//!
//! [`Grid2D`] stores `rows * columns` cells contiguously in row-major order,
//! so every row has exactly `columns` elements by construction.
//!
//! Access comes in two flavours:
//! - checked: [`Grid2D::get`], [`Grid2D::get_mut`] return `Option`,
//!   [`Grid2D::set`] returns `Result`;
//! - contract: `grid[(row, col)]` panics on an out-of-range cell, like slice
//!   indexing.
//!
//! Structural mutations (insert, erase, push, swap) validate their arguments
//! and return a [`GridError`] without touching the grid when they are invalid.
//!
//! A grid with zero rows also has zero columns. Pushing or inserting the
//! first row into such a grid therefore accepts any row length, and pushing
//! the first column into a grid with no cells establishes the row count.

use std::ops::{Index, IndexMut};

use crate::error::GridError;
use crate::traits::Scalar;

/// Rectangular `rows x columns` matrix of `T`, stored row-major.
///
/// ```
/// use algokit::Grid2D;
///
/// let mut grid: Grid2D<i32> = Grid2D::new(2, 3);
/// grid.insert_column(1, vec![5, 5]).unwrap();
/// grid[(0, 2)] = 4;
/// grid.resize(3, 3, 1);
///
/// assert_eq!(grid.row(0), Some(&[0, 5, 4][..]));
/// assert_eq!(grid.row(1), Some(&[0, 5, 0][..]));
/// assert_eq!(grid.row(2), Some(&[1, 1, 1][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid2D<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T> Grid2D<T> {
    /// Create a `rows x columns` grid with every cell set to `T::default()`.
    ///
    /// # Panics
    /// Panics if `rows * columns` overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(rows, columns, T::default())
    }

    /// Create a `rows x columns` grid with every cell set to `value`.
    ///
    /// # Panics
    /// Panics if `rows * columns` overflows `usize`.
    pub fn filled(rows: usize, columns: usize, value: T) -> Self
    where
        T: Clone,
    {
        let columns = if rows == 0 { 0 } else { columns };
        Self {
            rows,
            columns,
            data: vec![value; cell_count(rows, columns)],
        }
    }

    /// Build a grid from row-major `data`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self, GridError> {
        let columns = if rows == 0 { 0 } else { columns };
        if rows.checked_mul(columns) != Some(data.len()) {
            return Err(GridError::DataLengthMismatch {
                rows,
                columns,
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Build a grid from a list of rows, all of which must have equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let mut grid = Self {
            rows: 0,
            columns: 0,
            data: Vec::new(),
        };
        for row in rows {
            grid.push_back_row(row)?;
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// True when the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.offset(row, column).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.offset(row, column).map(move |i| &mut self.data[i])
    }

    /// Overwrite one cell.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), GridError> {
        let (rows, columns) = self.shape();
        let cell = self.get_mut(row, column).ok_or(GridError::CellOutOfBounds {
            row,
            column,
            rows,
            columns,
        })?;
        *cell = value;
        Ok(())
    }

    pub fn row(&self, index: usize) -> Option<&[T]> {
        (index < self.rows).then(|| &self.data[index * self.columns..(index + 1) * self.columns])
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut [T]> {
        let columns = self.columns;
        (index < self.rows).then(move || &mut self.data[index * columns..(index + 1) * columns])
    }

    /// Iterate over the cells of one column, top to bottom.
    pub fn column(&self, index: usize) -> Option<impl Iterator<Item = &T> + '_> {
        (index < self.columns).then(|| self.data.iter().skip(index).step_by(self.columns))
    }

    /// Iterate over rows as slices.
    ///
    /// Yields exactly `rows()` slices, including for a grid with zero columns.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| &self.data[r * self.columns..(r + 1) * self.columns])
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Insert `values` as a new row before row `index`.
    ///
    /// `index == rows()` appends. The row must have `columns()` elements,
    /// unless the grid has no rows yet.
    pub fn insert_row(&mut self, index: usize, values: Vec<T>) -> Result<(), GridError> {
        if index > self.rows {
            return Err(GridError::RowOutOfBounds {
                index,
                rows: self.rows,
            });
        }
        if self.rows == 0 {
            self.columns = values.len();
        } else if values.len() != self.columns {
            return Err(GridError::RowLengthMismatch {
                expected: self.columns,
                actual: values.len(),
            });
        }
        let at = index * self.columns;
        self.data.splice(at..at, values);
        self.rows += 1;
        Ok(())
    }

    /// Insert `values` as a new column before column `index`.
    ///
    /// `index == columns()` appends. The column must have `rows()` elements,
    /// unless the grid holds no cells and no rows, in which case the column
    /// length becomes the row count.
    pub fn insert_column(&mut self, index: usize, values: Vec<T>) -> Result<(), GridError> {
        if index > self.columns {
            return Err(GridError::ColumnOutOfBounds {
                index,
                columns: self.columns,
            });
        }
        if self.rows == 0 {
            self.rows = values.len();
        } else if values.len() != self.rows {
            return Err(GridError::ColumnLengthMismatch {
                expected: self.rows,
                actual: values.len(),
            });
        }
        if self.rows == 0 {
            return Ok(());
        }

        let old_columns = self.columns;
        let mut old = std::mem::take(&mut self.data).into_iter();
        let mut data = Vec::with_capacity(self.rows * (old_columns + 1));
        for value in values {
            data.extend(old.by_ref().take(index));
            data.push(value);
            data.extend(old.by_ref().take(old_columns - index));
        }
        self.data = data;
        self.columns = old_columns + 1;
        Ok(())
    }

    /// Append a row. Same length rule as [`Grid2D::insert_row`].
    pub fn push_back_row(&mut self, values: Vec<T>) -> Result<(), GridError> {
        self.insert_row(self.rows, values)
    }

    /// Append a column. Same length rule as [`Grid2D::insert_column`].
    pub fn push_back_column(&mut self, values: Vec<T>) -> Result<(), GridError> {
        self.insert_column(self.columns, values)
    }

    pub fn erase_row(&mut self, index: usize) -> Result<(), GridError> {
        if index >= self.rows {
            return Err(GridError::RowOutOfBounds {
                index,
                rows: self.rows,
            });
        }
        self.erase_rows(index, index + 1)
    }

    /// Remove rows `begin..end` (`end` exclusive).
    pub fn erase_rows(&mut self, begin: usize, end: usize) -> Result<(), GridError> {
        if begin > end || end > self.rows {
            return Err(GridError::InvalidRange {
                begin,
                end,
                extent: self.rows,
            });
        }
        self.data.drain(begin * self.columns..end * self.columns);
        self.rows -= end - begin;
        if self.rows == 0 {
            self.columns = 0;
        }
        Ok(())
    }

    pub fn erase_column(&mut self, index: usize) -> Result<(), GridError> {
        if index >= self.columns {
            return Err(GridError::ColumnOutOfBounds {
                index,
                columns: self.columns,
            });
        }
        self.erase_columns(index, index + 1)
    }

    /// Remove columns `begin..end` (`end` exclusive) from every row.
    pub fn erase_columns(&mut self, begin: usize, end: usize) -> Result<(), GridError> {
        if begin > end || end > self.columns {
            return Err(GridError::InvalidRange {
                begin,
                end,
                extent: self.columns,
            });
        }
        let columns = self.columns;
        let mut position = 0usize;
        self.data.retain(|_| {
            let column = position % columns;
            position += 1;
            column < begin || column >= end
        });
        self.columns -= end - begin;
        Ok(())
    }

    /// Exchange rows `i` and `j`. No-op when `i == j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), GridError> {
        for index in [i, j] {
            if index >= self.rows {
                return Err(GridError::RowOutOfBounds {
                    index,
                    rows: self.rows,
                });
            }
        }
        if i == j {
            return Ok(());
        }
        let (lo, hi) = (i.min(j), i.max(j));
        let columns = self.columns;
        let (head, tail) = self.data.split_at_mut(hi * columns);
        head[lo * columns..(lo + 1) * columns].swap_with_slice(&mut tail[..columns]);
        Ok(())
    }

    /// Exchange columns `i` and `j` in every row. No-op when `i == j`.
    pub fn swap_columns(&mut self, i: usize, j: usize) -> Result<(), GridError> {
        for index in [i, j] {
            if index >= self.columns {
                return Err(GridError::ColumnOutOfBounds {
                    index,
                    columns: self.columns,
                });
            }
        }
        if i == j {
            return Ok(());
        }
        for row in self.data.chunks_exact_mut(self.columns) {
            row.swap(i, j);
        }
        Ok(())
    }

    /// Change the shape to `rows x columns`.
    ///
    /// Cells inside both the old and the new extent keep their values; new
    /// cells are set to `value`; cells outside the new extent are dropped.
    ///
    /// # Panics
    /// Panics if `rows * columns` overflows `usize`. The grid is left
    /// unchanged in that case.
    pub fn resize(&mut self, rows: usize, columns: usize, value: T)
    where
        T: Clone,
    {
        let columns = if rows == 0 { 0 } else { columns };
        let cells = cell_count(rows, columns);
        if columns == self.columns {
            self.data.resize(cells, value);
            self.rows = rows;
            return;
        }

        let keep = columns.min(self.columns);
        let old_columns = self.columns;
        let mut old = std::mem::take(&mut self.data).into_iter();
        let mut data = Vec::with_capacity(cells);
        for r in 0..rows {
            if r < self.rows {
                data.extend(old.by_ref().take(keep));
                old.by_ref().take(old_columns - keep).for_each(drop);
            }
            let filled = data.len() - r * columns;
            data.extend(std::iter::repeat(value.clone()).take(columns - filled));
        }
        self.data = data;
        self.rows = rows;
        self.columns = columns;
    }

    /// [`Grid2D::resize`] with new cells set to `T::default()`.
    pub fn resize_default(&mut self, rows: usize, columns: usize)
    where
        T: Default + Clone,
    {
        self.resize(rows, columns, T::default());
    }

    /// Sum over all cells of `self[(i, j)] * other[(i, j)]`.
    ///
    /// Both grids must have the same shape. The dot product of empty grids
    /// is zero.
    pub fn dot_product(&self, other: &Self) -> Result<T, GridError>
    where
        T: Scalar,
    {
        if self.shape() != other.shape() {
            return Err(GridError::ShapeMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: other.rows,
                right_columns: other.columns,
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

/// Number of cells of a `rows x columns` grid.
fn cell_count(rows: usize, columns: usize) -> usize {
    match rows.checked_mul(columns) {
        Some(cells) => cells,
        None => panic!("grid of {rows} x {columns} cells overflows usize"),
    }
}

impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    /// # Panics
    /// Panics if the cell lies outside the grid.
    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.offset(row, column) {
            Some(i) => &self.data[i],
            None => panic!(
                "cell ({row}, {column}) out of bounds for a {}x{} grid",
                self.rows, self.columns
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2D<T> {
    /// # Panics
    /// Panics if the cell lies outside the grid.
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.offset(row, column) {
            Some(i) => &mut self.data[i],
            None => panic!(
                "cell ({row}, {column}) out of bounds for a {}x{} grid",
                self.rows, self.columns
            ),
        }
    }
}
