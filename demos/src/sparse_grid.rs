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

use std::io;

use sparsegrid::DenseGrid;
use sparsegrid::SparseGrid;
use sparsegrid::display::describe;
use sparsegrid::display::render;
use sparsegrid::majority::value_counts;

fn four_by_four() -> Vec<Vec<i64>> {
    vec![
        vec![5, 0, 0, 0],
        vec![0, 8, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 6, 0, 0],
    ]
}

fn ten_by_ten() -> Vec<Vec<i64>> {
    let mut rows = vec![vec![8; 10]; 10];
    for (row, col, value) in [(0, 9, 9), (2, 0, 0), (3, 7, 7), (5, 4, 2), (8, 2, 1)] {
        rows[row][col] = value;
    }
    rows
}

fn twenty_by_twenty() -> Vec<Vec<i64>> {
    let mut rows = vec![vec![0; 20]; 20];
    let cells = [
        (0, 6, 2),
        (0, 19, 99),
        (4, 13, 876),
        (5, 3, 53),
        (10, 13, 90),
        (12, 3, 8),
        (13, 12, 43),
        (15, 5, 873),
        (19, 0, 21),
        (19, 16, 213),
    ];
    for (row, col, value) in cells {
        rows[row][col] = value;
    }
    rows
}

fn run(name: &str, rows: &[Vec<i64>]) -> Result<(), sparsegrid::Error> {
    println!("=============== {name} ===============");

    let dense = DenseGrid::from_rows(rows)?;
    if let Some(&(value, count)) = value_counts(&dense).first() {
        tracing::info!(value, count, cells = dense.len(), "majority value");
    }

    let sparse = SparseGrid::from_dense(&dense)?;
    println!("{}", describe(&sparse));

    let rebuilt = sparse.to_dense();
    println!("{}", render(&rebuilt));
    println!("Round trip equal: {}\n", rebuilt == dense);
    Ok(())
}

fn main() {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let grids = [
        ("TEST 1", four_by_four()),
        ("TEST 2", ten_by_ten()),
        ("TEST 3", twenty_by_twenty()),
        ("RAGGED", vec![vec![1, 2, 3], vec![4, 5]]),
    ];
    for (name, rows) in &grids {
        if let Err(err) = run(name, rows) {
            tracing::error!(grid = *name, "conversion failed: {err}");
        }
    }
}
