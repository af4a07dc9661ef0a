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

//! # sparsegrid
//!
//! Converts dense rectangular grids of integers into a compact sparse form and back.
//!
//! The sparse form keeps the grid's shape, picks the grid's most frequent value as the
//! default, and stores only the cells that differ from it. Converting back always
//! reproduces the original grid; by default every conversion checks this itself.
//!
//! ```rust
//! use sparsegrid::DenseGrid;
//! use sparsegrid::SparseGrid;
//!
//! let dense = DenseGrid::from_rows(&[vec![8, 8, 9], vec![8, 0, 8]]).unwrap();
//! let sparse = SparseGrid::from_dense(&dense).unwrap();
//!
//! assert_eq!(sparse.default_value(), 8);
//! assert_eq!(sparse.num_entries(), 2);
//! assert_eq!(sparse.to_dense(), dense);
//! ```
//!
//! Modules:
//!
//! - [`dense`]: the rectangular [`DenseGrid`] type
//! - [`majority`]: majority-value detection and tie-break policies
//! - [`sparse`]: [`SparseGrid`] and its builder
//! - [`display`]: text rendering of both forms

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod dense;
pub mod display;
pub mod error;
pub mod majority;
pub mod sparse;

pub use self::dense::DenseGrid;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::sparse::CellEntry;
pub use self::sparse::SparseGrid;
