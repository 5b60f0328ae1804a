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

//! Property-based tests for table persistence.

use proptest::prelude::*;
use rigstat_core::{MetricType, SampleVector};
use rigstat_csv::Table;

fn sample() -> impl Strategy<Value = SampleVector> {
    prop::collection::vec(prop::option::weighted(0.75, 0_i64..100_000), MetricType::COUNT).prop_map(
        |cells| {
            let values: Vec<i64> = cells.into_iter().map(rigstat_test::cell).collect();
            rigstat_test::sample_of(&values)
        },
    )
}

fn document_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./ ,-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a saved table loads back to the same samples.
    #[test]
    fn prop_save_load_preserves_samples(
        documents in prop::collection::btree_map(document_name(), prop::collection::vec(sample(), 1..8), 0..6)
    ) {
        let mut table = Table::new();
        for (name, samples) in &documents {
            for s in samples {
                table.append_sample(name, *s);
            }
        }

        let text = table.to_csv_string();
        let mut reloaded = Table::new();
        let report = reloaded.load_from(text.as_bytes()).unwrap();

        prop_assert_eq!(report.rows, documents.len() * MetricType::COUNT);
        prop_assert_eq!(report.dropped, 0);
        for (name, samples) in &documents {
            let history = reloaded.get(name).unwrap();
            prop_assert_eq!(history.samples(), &samples[..]);
        }
        prop_assert_eq!(reloaded.to_csv_string(), text);
    }

    /// Property: loading arbitrary text never panics and never fails.
    #[test]
    fn prop_load_accepts_any_text(text in "(\"[a-z]{0,3}\",\"t[0-9][a-zA-Z]{0,12}\",[0-9,. x-]{0,20}\n|[^\n]{0,20}\n){0,10}") {
        let mut table = Table::new();
        prop_assert!(table.load_from(text.as_bytes()).is_ok());
    }
}
