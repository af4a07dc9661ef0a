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

use std::slice::Iter;

use crate::dense::DenseGrid;
use crate::error::Error;
use crate::sparse::builder::SparseGridBuilder;

/// One non-default cell of a [`SparseGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellEntry {
    pub(super) value: i64,
    pub(super) row: usize,
    pub(super) col: usize,
}

impl CellEntry {
    /// Returns the cell value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the zero-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the zero-based column index.
    pub fn col(&self) -> usize {
        self.col
    }
}

/// Sparse form of a [`DenseGrid`]: its shape, its majority value, and the cells that
/// differ from it.
///
/// A `SparseGrid` can only be obtained by converting a dense grid and is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SparseGrid {
    pub(super) row_count: usize,
    pub(super) col_count: usize,
    pub(super) default_value: i64,
    pub(super) entries: Vec<CellEntry>,
}

impl SparseGrid {
    /// Returns a builder for configuring the conversion.
    pub fn builder() -> SparseGridBuilder {
        SparseGridBuilder::default()
    }

    /// Converts `grid` using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvariantViolation`](crate::error::ErrorKind::InvariantViolation)
    /// if the round-trip self-check fails.
    pub fn from_dense(grid: &DenseGrid) -> Result<Self, Error> {
        Self::builder().build(grid)
    }

    /// Validates nested rows and converts them using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidShape`](crate::error::ErrorKind::InvalidShape) if the
    /// rows are empty or ragged.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, Error> {
        Self::builder().build_from_rows(rows)
    }

    /// Returns the number of rows of the dense grid.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns of the dense grid.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Returns the majority value every unstored cell holds.
    pub fn default_value(&self) -> i64 {
        self.default_value
    }

    /// Returns the stored entries in row-major order.
    pub fn entries(&self) -> &[CellEntry] {
        &self.entries
    }

    /// Returns the number of stored entries.
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if every cell holds the default value.
    pub fn is_uniform(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored entries in row-major order.
    pub fn iter(&self) -> Iter<'_, CellEntry> {
        self.entries.iter()
    }

    /// Returns the value at (`row`, `col`), or `None` if the coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.row_count || col >= self.col_count {
            return None;
        }
        let value = match self
            .entries
            .binary_search_by_key(&(row, col), |e| (e.row, e.col))
        {
            Ok(index) => self.entries[index].value,
            Err(_) => self.default_value,
        };
        Some(value)
    }

    /// Rebuilds the dense grid.
    ///
    /// Every call allocates a new grid: it starts out filled with the default value and
    /// each entry then overwrites its cell.
    pub fn to_dense(&self) -> DenseGrid {
        let mut grid = DenseGrid::filled(self.row_count, self.col_count, self.default_value);
        for entry in &self.entries {
            grid.set(entry.row, entry.col, entry.value);
        }
        grid
    }
}

impl<'a> IntoIterator for &'a SparseGrid {
    type Item = &'a CellEntry;
    type IntoIter = Iter<'a, CellEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
