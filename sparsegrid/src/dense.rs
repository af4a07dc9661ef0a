// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Dense rectangular grids of integers.

use crate::error::Error;
use crate::error::ErrorKind;

/// A complete rectangular table of `i64` cells, stored row-major.
///
/// A `DenseGrid` always has at least one row and one column, and every row has the same
/// length. Both properties are checked once, when the grid is built from nested rows.
///
/// # Examples
///
/// ```
/// use sparsegrid::DenseGrid;
///
/// let grid = DenseGrid::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.col_count(), 3);
/// assert_eq!(grid.get(1, 0), Some(4));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseGrid {
    row_count: usize,
    col_count: usize,
    cells: Vec<i64>,
}

impl DenseGrid {
    /// Builds a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidShape`] if there are no rows, if the first row is empty,
    /// or if any row's length differs from the first row's length.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, Error> {
        let Some(first) = rows.first() else {
            return Err(Error::new(ErrorKind::InvalidShape, "grid has no rows"));
        };

        let col_count = first.as_ref().len();
        if col_count == 0 {
            return Err(Error::new(ErrorKind::InvalidShape, "grid has no columns")
                .with_context("rows", rows.len()));
        }

        let mut cells = Vec::with_capacity(rows.len() * col_count);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != col_count {
                return Err(Error::new(
                    ErrorKind::InvalidShape,
                    "row length differs from the first row",
                )
                .with_context("row", row)
                .with_context("expected", col_count)
                .with_context("actual", values.len()));
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            row_count: rows.len(),
            col_count,
            cells,
        })
    }

    /// Creates a `row_count` x `col_count` grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is 0.
    pub fn filled(row_count: usize, col_count: usize, value: i64) -> Self {
        assert!(
            row_count > 0 && col_count > 0,
            "grid dimensions must be positive"
        );
        Self {
            row_count,
            col_count,
            cells: vec![value; row_count * col_count],
        }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the value at (`row`, `col`), or `None` if the coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.row_count || col >= self.col_count {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Overwrites the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        assert!(
            row < self.row_count && col < self.col_count,
            "cell ({row}, {col}) is out of bounds for a {}x{} grid",
            self.row_count,
            self.col_count
        );
        let index = self.index(row, col);
        self.cells[index] = value;
    }

    /// Returns row `row` as a slice, or `None` if it is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[i64]> {
        self.rows().nth(row)
    }

    /// Iterates over the rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        self.cells.chunks_exact(self.col_count)
    }

    /// Iterates over `(row, col, value)` for every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        let col_count = self.col_count;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &value)| (index / col_count, index % col_count, value))
    }

    /// Returns all cells as one row-major slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.col_count + col
    }
}

impl TryFrom<Vec<Vec<i64>>> for DenseGrid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl<const R: usize, const C: usize> TryFrom<[[i64; C]; R]> for DenseGrid {
    type Error = Error;

    fn try_from(rows: [[i64; C]; R]) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}
