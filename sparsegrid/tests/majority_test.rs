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

use sparsegrid::DenseGrid;
use sparsegrid::majority::TieBreak;
use sparsegrid::majority::majority_value;
use sparsegrid::majority::value_counts;

fn grid(rows: &[Vec<i64>]) -> DenseGrid {
    DenseGrid::from_rows(rows).unwrap()
}

#[test]
fn test_majority_unique_mode() {
    let g = grid(&[vec![1, 2, 2], vec![3, 2, 1]]);
    assert_eq!(majority_value(&g, TieBreak::FirstSeen), 2);
    assert_eq!(majority_value(&g, TieBreak::Smallest), 2);
    assert_eq!(majority_value(&g, TieBreak::Largest), 2);
}

#[test]
fn test_first_seen_tie_break() {
    // 9 and -4 both occur three times; 9 appears first
    let g = grid(&[vec![0, 9, -4], vec![-4, 9, 9], vec![-4, 1, 2]]);
    assert_eq!(majority_value(&g, TieBreak::FirstSeen), 9);

    let g = grid(&[vec![0, -4, 9], vec![-4, 9, 9], vec![-4, 1, 2]]);
    assert_eq!(majority_value(&g, TieBreak::FirstSeen), -4);
}

#[test]
fn test_numeric_tie_breaks() {
    let g = grid(&[vec![0, 9, -4], vec![-4, 9, 9], vec![-4, 1, 2]]);
    assert_eq!(majority_value(&g, TieBreak::Smallest), -4);
    assert_eq!(majority_value(&g, TieBreak::Largest), 9);
}

#[test]
fn test_all_distinct_values() {
    // every value is tied at one occurrence
    let g = grid(&[vec![5, 3], vec![8, 1]]);
    assert_eq!(majority_value(&g, TieBreak::FirstSeen), 5);
    assert_eq!(majority_value(&g, TieBreak::Smallest), 1);
    assert_eq!(majority_value(&g, TieBreak::Largest), 8);
}

#[test]
fn test_tie_break_is_stable() {
    let g = grid(&[vec![4, 6, 4, 6], vec![6, 4, 6, 4]]);
    for _ in 0..32 {
        assert_eq!(majority_value(&g, TieBreak::FirstSeen), 4);
        assert_eq!(majority_value(&g, TieBreak::Smallest), 4);
        assert_eq!(majority_value(&g, TieBreak::Largest), 6);
    }
}

#[test]
fn test_default_tie_break_is_first_seen() {
    assert_eq!(TieBreak::default(), TieBreak::FirstSeen);
}

#[test]
fn test_value_counts() {
    let g = grid(&[vec![3, 1, 1], vec![2, 3, 1], vec![2, 9, 3]]);
    assert_eq!(value_counts(&g), vec![(3, 3), (1, 3), (2, 2), (9, 1)]);

    let total: usize = value_counts(&g).iter().map(|&(_, count)| count).sum();
    assert_eq!(total, g.len());
}
