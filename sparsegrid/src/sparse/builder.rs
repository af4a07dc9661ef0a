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

use crate::dense::DenseGrid;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::majority::TieBreak;
use crate::majority::majority_value;
use crate::sparse::grid::CellEntry;
use crate::sparse::grid::SparseGrid;

/// Whether construction verifies the round trip back to the dense grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verification {
    /// Rebuild the dense grid after conversion and compare it with the input cell by cell.
    #[default]
    Strict,
    /// Skip the self-check.
    Trusted,
}

/// Builder for converting dense grids into [`SparseGrid`]s.
///
/// # Examples
///
/// ```
/// use sparsegrid::DenseGrid;
/// use sparsegrid::SparseGrid;
/// use sparsegrid::majority::TieBreak;
///
/// let grid = DenseGrid::from_rows(&[vec![9, 9, 4], vec![4, 1, 2]]).unwrap();
/// let sparse = SparseGrid::builder()
///     .tie_break(TieBreak::Largest)
///     .build(&grid)
///     .unwrap();
///
/// assert_eq!(sparse.default_value(), 9);
/// assert_eq!(sparse.to_dense(), grid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SparseGridBuilder {
    tie_break: TieBreak,
    verification: Verification,
}

impl SparseGridBuilder {
    /// Sets how ties for the majority value are resolved.
    ///
    /// Defaults to [`TieBreak::FirstSeen`].
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets whether the conversion is verified by a round trip.
    ///
    /// Defaults to [`Verification::Strict`].
    pub fn verification(mut self, verification: Verification) -> Self {
        self.verification = verification;
        self
    }

    /// Converts `grid` into its sparse form.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvariantViolation`] if verification is strict and the rebuilt
    /// grid differs from `grid`.
    pub fn build(self, grid: &DenseGrid) -> Result<SparseGrid, Error> {
        let default_value = majority_value(grid, self.tie_break);
        let entries = grid
            .cells()
            .filter(|&(_, _, value)| value != default_value)
            .map(|(row, col, value)| CellEntry { value, row, col })
            .collect();

        let sparse = SparseGrid {
            row_count: grid.row_count(),
            col_count: grid.col_count(),
            default_value,
            entries,
        };

        if self.verification == Verification::Strict {
            verify_round_trip(&sparse, grid)?;
        }

        tracing::debug!(
            rows = sparse.row_count,
            cols = sparse.col_count,
            default_value,
            entries = sparse.entries.len(),
            "built sparse grid"
        );
        Ok(sparse)
    }

    /// Validates nested rows into a [`DenseGrid`] and converts it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidShape`] if the rows are empty or ragged, and otherwise
    /// fails like [`build`](Self::build).
    pub fn build_from_rows<R: AsRef<[i64]>>(self, rows: &[R]) -> Result<SparseGrid, Error> {
        let grid = DenseGrid::from_rows(rows)?;
        self.build(&grid)
    }
}

fn verify_round_trip(sparse: &SparseGrid, expected: &DenseGrid) -> Result<(), Error> {
    let actual = sparse.to_dense();
    tracing::trace!(cells = actual.len(), "verifying sparse grid round trip");

    if actual.row_count() != expected.row_count() || actual.col_count() != expected.col_count()
    {
        tracing::warn!("sparse grid round trip changed the grid shape");
        return Err(Error::new(
            ErrorKind::InvariantViolation,
            "reconstructed grid has a different shape",
        )
        .with_context("expected", format!("{}x{}", expected.row_count(), expected.col_count()))
        .with_context("actual", format!("{}x{}", actual.row_count(), actual.col_count())));
    }

    let mismatch = expected
        .cells()
        .zip(actual.as_slice())
        .find(|&((_, _, want), &got)| want != got);
    if let Some(((row, col, want), &got)) = mismatch {
        tracing::warn!(row, col, "sparse grid round trip changed a cell");
        return Err(Error::new(
            ErrorKind::InvariantViolation,
            "reconstructed grid differs from the input",
        )
        .with_context("row", row)
        .with_context("col", col)
        .with_context("expected", want)
        .with_context("actual", got));
    }

    Ok(())
}
