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

//! Majority-default sparse grids.
//!
//! A [`SparseGrid`] stores the shape of a dense grid, its majority value as the default,
//! and one [`CellEntry`] for every cell that differs from the default. Entries are kept in
//! row-major order.
//!
//! # Usage
//!
//! ```rust
//! use sparsegrid::SparseGrid;
//!
//! let sparse = SparseGrid::from_rows(&[
//!     vec![5, 0, 0, 0],
//!     vec![0, 8, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 6, 0, 0],
//! ])
//! .unwrap();
//!
//! assert_eq!(sparse.default_value(), 0);
//! assert_eq!(sparse.num_entries(), 3);
//! assert_eq!(sparse.get(1, 1), Some(8));
//! assert_eq!(sparse.get(2, 2), Some(0));
//! assert_eq!(sparse.to_dense().row(3), Some(&[0, 6, 0, 0][..]));
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use sparsegrid::SparseGrid;
//! use sparsegrid::majority::TieBreak;
//! use sparsegrid::sparse::Verification;
//!
//! let sparse = SparseGrid::builder()
//!     .tie_break(TieBreak::Smallest)
//!     .verification(Verification::Trusted)
//!     .build_from_rows(&[vec![2, 1], vec![1, 2]])
//!     .unwrap();
//! assert_eq!(sparse.default_value(), 1);
//! ```

mod builder;
mod grid;

pub use self::builder::SparseGridBuilder;
pub use self::builder::Verification;
pub use self::grid::CellEntry;
pub use self::grid::SparseGrid;
