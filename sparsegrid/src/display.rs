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

//! Human-readable text for grids.

use std::fmt;

use crate::dense::DenseGrid;
use crate::sparse::CellEntry;
use crate::sparse::SparseGrid;

/// Describes a sparse grid: its shape, its default value, and one line per entry in
/// stored order.
///
/// ```rust
/// # use sparsegrid::SparseGrid;
/// # use sparsegrid::display::describe;
/// let sparse = SparseGrid::from_rows(&[vec![0, 4], vec![0, 0]]).unwrap();
/// assert_eq!(
///     describe(&sparse),
///     "Row count: 2\nColumn count: 2\nDefault value: 0\nNon-default values:\n4\tat [0, 1]\n"
/// );
/// ```
pub fn describe(grid: &SparseGrid) -> String {
    grid.to_string()
}

/// Renders a dense grid with one line per row and tab-separated cells.
///
/// ```rust
/// # use sparsegrid::DenseGrid;
/// # use sparsegrid::display::render;
/// let grid = DenseGrid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// assert_eq!(render(&grid), "1\t2\n3\t4\n");
/// ```
pub fn render(grid: &DenseGrid) -> String {
    grid.to_string()
}

impl fmt::Display for CellEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\tat [{}, {}]", self.value(), self.row(), self.col())
    }
}

impl fmt::Display for SparseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Row count: {}", self.row_count())?;
        writeln!(f, "Column count: {}", self.col_count())?;
        writeln!(f, "Default value: {}", self.default_value())?;
        writeln!(f, "Non-default values:")?;
        for entry in self {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DenseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(f, "{first}")?;
            }
            for value in cells {
                write!(f, "\t{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
