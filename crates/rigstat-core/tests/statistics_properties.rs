// rigstat - Regression Run Statistics
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Property-based tests for series statistics and history rows.

use proptest::prelude::*;
use rigstat_core::{History, MetricType, SampleVector, ScalarSeries, UNMEASURED};

/// A measurement or a gap.
fn cell() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![
        3 => (0_i64..1_000_000).prop_map(Some),
        1 => Just(None),
    ]
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: statistics of non-negative values are exact.
    #[test]
    fn prop_statistics_of_measured_values(values in prop::collection::vec(0_i64..1_000_000, 1..64)) {
        let mut series: ScalarSeries = values.iter().copied().collect();
        let stats = *series.statistics();

        let count = values.len();
        let sum: f64 = values.iter().map(|&v| v as f64).sum();
        let mean = sum / count as f64;

        prop_assert_eq!(stats.count, count);
        prop_assert_eq!(stats.min, *values.iter().min().unwrap());
        prop_assert_eq!(stats.max, *values.iter().max().unwrap());
        prop_assert!(relative_eq(stats.mean, mean));

        if count == 1 {
            prop_assert_eq!(stats.std_dev, 0.0);
        } else {
            let sq: f64 = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
            prop_assert!(relative_eq(stats.std_dev, (sq / (count - 1) as f64).sqrt()));
        }
    }

    /// Property: unmeasured entries never change any statistic.
    #[test]
    fn prop_gaps_do_not_affect_statistics(cells in prop::collection::vec(cell(), 0..64)) {
        let mut with_gaps: ScalarSeries =
            cells.iter().map(|c| c.unwrap_or(UNMEASURED)).collect();
        let mut without_gaps: ScalarSeries = cells.iter().flatten().copied().collect();

        prop_assert_eq!(*with_gaps.statistics(), *without_gaps.statistics());
    }

    /// Property: a combined series is as long as its first operand.
    #[test]
    fn prop_combine_length_and_rules(
        left in prop::collection::vec(cell(), 0..32),
        right in prop::collection::vec(cell(), 0..32),
    ) {
        let a: ScalarSeries = left.iter().map(|c| c.unwrap_or(UNMEASURED)).collect();
        let b: ScalarSeries = right.iter().map(|c| c.unwrap_or(UNMEASURED)).collect();
        let total = a.combine(&b);

        prop_assert_eq!(total.len(), a.len());
        for (i, expected) in left.iter().enumerate() {
            let other = right.get(i).copied().flatten();
            let want = match (expected, other) {
                (Some(x), Some(y)) => x + y,
                (Some(x), None) => *x,
                (None, Some(y)) => y,
                (None, None) => UNMEASURED,
            };
            prop_assert_eq!(total.get(i), want);
        }
    }

    /// Property: serialized rows load back to the same samples.
    #[test]
    fn prop_history_rows_round_trip(
        runs in prop::collection::vec(prop::collection::vec(cell(), MetricType::COUNT), 1..16)
    ) {
        let mut original = History::new();
        for run in &runs {
            let mut sample = SampleVector::new();
            for (metric, value) in MetricType::ALL.iter().zip(run) {
                sample.set(*metric, value.unwrap_or(UNMEASURED));
            }
            original.append(sample);
        }

        let mut restored = History::new();
        for row in original.serialize_rows("doc") {
            let rest = row.strip_prefix("\"doc\",\"").unwrap();
            let (label, values) = rest.split_once("\",").unwrap();
            prop_assert!(restored.load_row(label, values));
        }

        prop_assert_eq!(restored.samples(), original.samples());
    }
}
