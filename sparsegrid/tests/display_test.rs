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

mod common;

use common::sparse_four_by_four;
use googletest::assert_that;
use googletest::prelude::contains_substring;
use sparsegrid::DenseGrid;
use sparsegrid::SparseGrid;
use sparsegrid::display::describe;
use sparsegrid::display::render;

#[test]
fn test_describe() {
    let sparse = SparseGrid::from_dense(&sparse_four_by_four()).unwrap();
    assert_eq!(
        describe(&sparse),
        "Row count: 4\n\
         Column count: 4\n\
         Default value: 0\n\
         Non-default values:\n\
         5\tat [0, 0]\n\
         8\tat [1, 1]\n\
         6\tat [3, 1]\n"
    );
    assert_eq!(sparse.to_string(), describe(&sparse));
}

#[test]
fn test_describe_uniform() {
    let sparse = SparseGrid::from_rows(&[[1, 1]]).unwrap();
    assert_eq!(
        describe(&sparse),
        "Row count: 1\nColumn count: 2\nDefault value: 1\nNon-default values:\n"
    );
}

#[test]
fn test_render() {
    let dense = sparse_four_by_four();
    assert_eq!(
        render(&dense),
        "5\t0\t0\t0\n0\t8\t0\t0\n0\t0\t0\t0\n0\t6\t0\t0\n"
    );
    assert_eq!(dense.to_string(), render(&dense));
}

#[test]
fn test_render_negative_values() {
    let dense = DenseGrid::from_rows(&[[-1], [12]]).unwrap();
    assert_eq!(render(&dense), "-1\n12\n");
}

#[test]
fn test_cell_entry_display() {
    let sparse = SparseGrid::from_rows(&[[0, 0, 0], [0, 0, -7]]).unwrap();
    let entry = sparse.entries()[0];
    assert_that!(entry.to_string(), contains_substring("-7"));
    assert_eq!(entry.to_string(), "-7\tat [1, 2]");
}
