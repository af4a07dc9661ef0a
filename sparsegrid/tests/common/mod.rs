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

#![allow(dead_code)]

use sparsegrid::DenseGrid;

/// Xorshift generator for reproducible test grids.
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn seeded(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns a value in `0..bound`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

pub fn sparse_four_by_four() -> DenseGrid {
    DenseGrid::from_rows(&[[5, 0, 0, 0], [0, 8, 0, 0], [0, 0, 0, 0], [0, 6, 0, 0]]).unwrap()
}

pub fn scattered_eights() -> DenseGrid {
    let mut grid = DenseGrid::filled(10, 10, 8);
    for (row, col, value) in [(0, 9, 9), (2, 0, 0), (3, 7, 7), (5, 4, 2), (8, 2, 1)] {
        grid.set(row, col, value);
    }
    grid
}

pub fn twenty_by_twenty() -> DenseGrid {
    let mut grid = DenseGrid::filled(20, 20, 0);
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
        grid.set(row, col, value);
    }
    grid
}
