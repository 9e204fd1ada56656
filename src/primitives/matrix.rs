//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{LexfeatError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of floating-point values (row-major storage).
///
/// # Examples
///
/// ```
/// use lexfeat::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(LexfeatError::DimensionMismatch {
                expected: format!("{rows}x{cols}={}", rows * cols),
                actual: format!("{}", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        Vector::from_slice(self.row_slice(row_idx))
    }

    /// Borrows a row without copying.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row_slice(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Copies `values` into the start of row `row_idx`, leaving the tail of
    /// the row untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LexfeatError::DimensionMismatch`] if `values` is wider than
    /// the matrix, or an invalid-input error if the row does not exist.
    pub fn copy_into_row(&mut self, row_idx: usize, values: &[T]) -> Result<()> {
        if row_idx >= self.rows {
            return Err(LexfeatError::InvalidInput {
                message: format!("row {row_idx} out of bounds (rows={})", self.rows),
            });
        }
        if values.len() > self.cols {
            return Err(LexfeatError::dimension_mismatch(
                "vec_len",
                self.cols,
                values.len(),
            ));
        }
        let start = row_idx * self.cols;
        self.data[start..start + values.len()].copy_from_slice(values);
        Ok(())
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f32> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Stacks ragged rows into a `rows.len() x cols` matrix, right-padding
    /// each row with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`LexfeatError::DimensionMismatch`] if any row is longer than
    /// `cols`.
    pub fn from_padded_rows<R: AsRef<[f32]>>(rows: &[R], cols: usize) -> Result<Self> {
        let mut out = Self::zeros(rows.len(), cols);
        for (idx, row) in rows.iter().enumerate() {
            out.copy_into_row(idx, row.as_ref())?;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
