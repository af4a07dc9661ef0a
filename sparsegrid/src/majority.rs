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

//! Majority-value detection.
//!
//! The majority value of a grid is the value that occurs most often across all of its
//! cells. It becomes the default value of a [`SparseGrid`](crate::SparseGrid), so only
//! the cells that differ from it need to be stored.
//!
//! When several values share the highest count, a [`TieBreak`] policy picks one of them.
//! The result never depends on hash map iteration order.
//!
//! # Usage
//!
//! ```rust
//! # use sparsegrid::DenseGrid;
//! # use sparsegrid::majority::{majority_value, TieBreak};
//! let grid = DenseGrid::from_rows(&[vec![3, 1], vec![1, 3]]).unwrap();
//! assert_eq!(majority_value(&grid, TieBreak::FirstSeen), 3);
//! assert_eq!(majority_value(&grid, TieBreak::Smallest), 1);
//! assert_eq!(majority_value(&grid, TieBreak::Largest), 3);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::dense::DenseGrid;

/// Policy for choosing among values tied for the highest count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// The tied value whose first occurrence comes earliest in row-major order.
    #[default]
    FirstSeen,
    /// The numerically smallest tied value.
    Smallest,
    /// The numerically largest tied value.
    Largest,
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first_seen: usize,
}

fn tally(grid: &DenseGrid) -> HashMap<i64, Tally> {
    let mut tallies: HashMap<i64, Tally> = HashMap::new();
    for (index, &value) in grid.as_slice().iter().enumerate() {
        tallies
            .entry(value)
            .and_modify(|t| t.count += 1)
            .or_insert(Tally {
                count: 1,
                first_seen: index,
            });
    }
    tallies
}

/// Orders candidates so that the preferred one compares greatest.
fn preference(tie_break: TieBreak, a: (i64, Tally), b: (i64, Tally)) -> Ordering {
    a.1.count.cmp(&b.1.count).then_with(|| match tie_break {
        // earlier first occurrence wins
        TieBreak::FirstSeen => b.1.first_seen.cmp(&a.1.first_seen),
        TieBreak::Smallest => b.0.cmp(&a.0),
        TieBreak::Largest => a.0.cmp(&b.0),
    })
}

/// Returns the most frequent value in `grid`, resolving ties with `tie_break`.
///
/// Runs in O(rows * cols) time and O(distinct values) extra space.
pub fn majority_value(grid: &DenseGrid, tie_break: TieBreak) -> i64 {
    tally(grid)
        .into_iter()
        .max_by(|&a, &b| preference(tie_break, a, b))
        // a DenseGrid always has at least one cell
        .map_or(0, |(value, _)| value)
}

/// Returns `(value, count)` for every distinct value in `grid`.
///
/// The list is sorted by descending count; values with equal counts appear in the order
/// of their first occurrence in row-major order.
///
/// ```rust
/// # use sparsegrid::DenseGrid;
/// # use sparsegrid::majority::value_counts;
/// let grid = DenseGrid::from_rows(&[vec![7, 0, 0], vec![9, 7, 0]]).unwrap();
/// assert_eq!(value_counts(&grid), vec![(0, 3), (7, 2), (9, 1)]);
/// ```
pub fn value_counts(grid: &DenseGrid) -> Vec<(i64, usize)> {
    let mut tallies: Vec<(i64, Tally)> = tally(grid).into_iter().collect();
    tallies.sort_by(|&a, &b| preference(TieBreak::FirstSeen, b, a));
    tallies.into_iter().map(|(value, t)| (value, t.count)).collect()
}
