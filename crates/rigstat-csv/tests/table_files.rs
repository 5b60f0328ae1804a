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

//! File-level load and save behaviour of the metrics table.

use rigstat_core::{MetricType, StatsState, UNMEASURED};
use rigstat_csv::{Table, HEADER};
use rigstat_test::fixtures::builders::{HistoryBuilder, SampleBuilder};
use rigstat_test::{assert_close, fixtures};
use std::fs;
use tempfile::TempDir;

fn load_text(text: &str) -> Table {
    let mut table = Table::new();
    table.load_from(text.as_bytes()).unwrap();
    table
}

#[test]
fn test_header_matches_fixture() {
    assert_eq!(HEADER, fixtures::HEADER);
}

#[test]
fn test_end_to_end_example() {
    let mut table = load_text(&fixtures::single_document());
    let history = table.get_mut("doc1.txt").unwrap();

    assert_eq!(history.len(), 4);
    assert_eq!(
        history.series(MetricType::LexerTime).values(),
        &[12, UNMEASURED, 15, 20]
    );

    let stats = history.statistics(MetricType::LexerTime);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.min, 12);
    assert_eq!(stats.max, 20);
    assert_close(stats.mean, 47.0 / 3.0);
    assert_close(stats.std_dev, rigstat_test::sample_std_dev_of(&[12, 15, 20]));

    let parser = history.statistics(MetricType::ParserTime);
    assert!(parser.is_empty());
    assert_eq!(parser.min, i64::MAX);
    assert_eq!(parser.max, i64::MIN);
}

#[test]
fn test_canonical_fixtures_round_trip_exactly() {
    for (name, generate) in fixtures::canonical() {
        let text = generate();
        let mut table = load_text(&text);
        assert_eq!(table.to_csv_string(), text, "fixture {} changed on save", name);
    }
}

#[test]
fn test_every_fixture_is_stable_after_one_save() {
    for (name, generate) in fixtures::all() {
        let first = load_text(&generate()).to_csv_string();
        let second = load_text(&first).to_csv_string();
        assert_eq!(first, second, "fixture {} is not stable", name);
    }
}

#[test]
fn test_messy_table() {
    let table = load_text(&fixtures::messy_table());
    assert_eq!(table.documents().collect::<Vec<_>>(), vec!["doc"]);

    let history = table.get("doc").unwrap();
    assert_eq!(history.series(MetricType::LexerTime).values(), &[3, 4]);
    assert_eq!(
        history.series(MetricType::ParserTime).values(),
        &[7, UNMEASURED]
    );
}

#[test]
fn test_unknown_labels() {
    let mut table = Table::new();
    let report = table.load_from(fixtures::unknown_labels().as_bytes()).unwrap();

    assert_eq!(report.dropped, 2);
    assert_eq!(report.rows, 1);
    assert!(table.get("ghost").unwrap().is_empty());
    assert_eq!(
        table.get("known").unwrap().series(MetricType::LexerTime).values(),
        &[5]
    );
}

#[test]
fn test_bad_cells() {
    let table = load_text(&fixtures::bad_cells());
    assert_eq!(
        table.get("doc").unwrap().series(MetricType::LexerTime).values(),
        &[UNMEASURED, 12, UNMEASURED, 8, 3]
    );
}

#[test]
fn test_legacy_table_gains_new_metric_rows() {
    let mut table = load_text(&fixtures::legacy_seven_metrics());
    let saved = table.to_csv_string();
    assert_eq!(saved.lines().count(), 1 + MetricType::COUNT);
    assert!(saved.contains("\"old.txt\",\"t9ParseTreeNodes\",9223372036854775807,0.0,0.0,-9223372036854775808,\n"));
}

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("metrics.csv");

    let mut table = Table::new();
    table.append_sample("b.txt", SampleBuilder::new().lexer_time(10).parser_time(20).build());
    table.append_sample("a.txt", SampleBuilder::new().all(1).build());
    table.append_sample("a.txt", SampleBuilder::new().lexer_time(3).build());
    table.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(HEADER));
    let first_a = text.find("\"a.txt\"").unwrap();
    let first_b = text.find("\"b.txt\"").unwrap();
    assert!(first_a < first_b);

    let mut reloaded = Table::new();
    let report = reloaded.load(&path).unwrap();
    assert_eq!(report.rows, 2 * MetricType::COUNT);
    assert_eq!(reloaded.len(), 2);

    let a = reloaded.get("a.txt").unwrap();
    assert_eq!(a.samples(), table.get("a.txt").unwrap().samples());
    assert_eq!(a.get(1).get(MetricType::ParserTime), UNMEASURED);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("metrics.csv");
    fs::write(&path, "stale content that is much longer than the new table\n".repeat(100)).unwrap();

    let mut table = Table::new();
    table.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{HEADER}\n"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let mut table = Table::new();
    let err = table.load(&path).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), Some(path.as_path()));
    assert!(table.is_empty());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("metrics.csv");

    let err = Table::new().save(&path).unwrap_err();
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn test_load_marks_statistics_stale() {
    let mut table = Table::new();
    table.append_sample("doc", SampleBuilder::new().lexer_time(1).build());
    table.to_csv_string();
    assert_eq!(table.get("doc").unwrap().stats_state(), StatsState::Computed);

    let extra = format!("{HEADER}\n\"doc\",\"t0LexerTimes\",,,,,1,9\n");
    table.load_from(extra.as_bytes()).unwrap();
    assert_eq!(table.get("doc").unwrap().stats_state(), StatsState::Dirty);

    let stats = table.get_mut("doc").unwrap().statistics(MetricType::LexerTime);
    assert_eq!(stats.max, 9);
}

#[test]
fn test_built_history_saves_gaps_as_empty_fields() {
    let mut table = Table::new();
    *table.ensure_document("doc") = HistoryBuilder::new()
        .series(MetricType::ParserTime, &[40, -1, 44])
        .run(SampleBuilder::new().parser_time(48).build())
        .build();

    let text = table.to_csv_string();
    assert!(text.contains("\"doc\",\"t1ParserTimes\",40,44.0,4.0,48,40,,44,48\n"));

    let reloaded = load_text(&text);
    assert_eq!(
        reloaded.get("doc").unwrap().series(MetricType::ParserTime).values(),
        &[40, UNMEASURED, 44, 48]
    );
}
