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

//! Run history of a single test document.
//!
//! A [`History`] is the list of [`SampleVector`]s recorded for one document,
//! oldest first, together with per-metric statistics across that list. It
//! also knows how to read and write its own rows of the table file:
//!
//! ```text
//! "docName","t0LexerTimes",min,mean,stdDev,max,v0,v1,...,vn
//! ```
//!
//! The four statistics columns are always recomputed, never read back.

use crate::metric::MetricType;
use crate::sample::{is_measured, SampleVector, UNMEASURED};
use crate::series::ScalarSeries;
use crate::stats::{bessel_std_dev, Statistics, StatsState};
use std::fmt::Write as _;
use std::io;

/// Number of leading statistics columns in a persisted value list.
pub const STATISTICS_COLUMNS: usize = 4;

/// Ordered per-run samples of one document with cached statistics.
#[derive(Debug, Clone, Default)]
pub struct History {
    samples: Vec<SampleVector>,
    stats: [Statistics; MetricType::COUNT],
    state: StatsState,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the sample of the next run. Statistics are not recomputed.
    pub fn append(&mut self, sample: SampleVector) {
        self.samples.push(sample);
        self.state.invalidate();
    }

    /// Sample of run `index`, or an all-unmeasured sample when out of range.
    pub fn get(&self, index: usize) -> SampleVector {
        self.samples.get(index).copied().unwrap_or_default()
    }

    /// All samples, oldest first.
    pub fn samples(&self) -> &[SampleVector] {
        &self.samples
    }

    /// Number of recorded runs.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no run was recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Merges one persisted row into this history.
    ///
    /// `label` is matched case-insensitively against the metric-type labels;
    /// an unknown label drops the row and returns `false`. `values` is the
    /// comma-separated tail of the row: the four statistics columns followed
    /// by one column per run. Column `i` after the statistics is stored into
    /// run `i`, growing the history with all-unmeasured samples as needed.
    /// Cells that are empty or do not parse load as unmeasured.
    ///
    /// # Examples
    ///
    /// ```
    /// use rigstat_core::{History, MetricType, UNMEASURED};
    ///
    /// let mut history = History::new();
    /// assert!(history.load_row("t0LexerTimes", ",,,,12,,15"));
    ///
    /// assert_eq!(history.len(), 3);
    /// assert_eq!(history.get(0).get(MetricType::LexerTime), 12);
    /// assert_eq!(history.get(1).get(MetricType::LexerTime), UNMEASURED);
    /// assert_eq!(history.get(2).get(MetricType::LexerTime), 15);
    /// ```
    pub fn load_row(&mut self, label: &str, values: &str) -> bool {
        let Some(metric) = MetricType::from_label(label) else {
            return false;
        };

        for (index, field) in values.split(',').skip(STATISTICS_COLUMNS).enumerate() {
            if self.samples.len() <= index {
                self.samples.push(SampleVector::new());
            }
            self.samples[index].set(metric, parse_cell(field));
        }
        self.state.invalidate();
        true
    }

    /// Computes per-metric statistics unless they are current.
    ///
    /// One pass gathers count, sum, min and max of the measured values of
    /// every metric; a second pass sums the squared deviations from the mean.
    pub fn compute_statistics(&mut self) {
        if !self.state.needs_compute() {
            return;
        }

        let mut min = SampleVector::filled_max();
        let mut max = SampleVector::filled_min();
        let mut count = [0usize; MetricType::COUNT];
        let mut sum = [0.0f64; MetricType::COUNT];

        for sample in &self.samples {
            for (metric, value) in sample.iter() {
                if !is_measured(value) {
                    continue;
                }
                let i = metric.index();
                count[i] += 1;
                sum[i] += value as f64;
                if value < min.get(metric) {
                    min.set(metric, value);
                }
                if max.get(metric) < value {
                    max.set(metric, value);
                }
            }
        }

        let mut mean = [0.0f64; MetricType::COUNT];
        for ((slot, &total), &n) in mean.iter_mut().zip(&sum).zip(&count) {
            if n > 0 {
                *slot = total / n as f64;
            }
        }

        let mut sum_sq_dev = [0.0f64; MetricType::COUNT];
        for sample in &self.samples {
            for (metric, value) in sample.iter() {
                if is_measured(value) {
                    let dev = value as f64 - mean[metric.index()];
                    sum_sq_dev[metric.index()] += dev * dev;
                }
            }
        }

        for metric in MetricType::ALL {
            let i = metric.index();
            self.stats[i] = Statistics {
                count: count[i],
                min: min.get(metric),
                mean: mean[i],
                std_dev: bessel_std_dev(sum_sq_dev[i], count[i]),
                max: max.get(metric),
            };
        }
        self.state = StatsState::Computed;
    }

    /// Drops cached statistics so the next computation starts over.
    pub fn reset_statistics(&mut self) {
        self.stats = [Statistics::EMPTY; MetricType::COUNT];
        self.state = StatsState::NotComputed;
    }

    /// State of the statistics cache.
    pub fn stats_state(&self) -> StatsState {
        self.state
    }

    /// Statistics of `metric`, computing them first if needed.
    pub fn statistics(&mut self, metric: MetricType) -> Statistics {
        self.compute_statistics();
        self.stats[metric.index()]
    }

    /// Statistics of every metric in enumeration order, computing them first if needed.
    pub fn all_statistics(&mut self) -> &[Statistics; MetricType::COUNT] {
        self.compute_statistics();
        &self.stats
    }

    /// The column of `metric` as a standalone series.
    pub fn series(&self, metric: MetricType) -> ScalarSeries {
        self.samples.iter().map(|sample| sample.get(metric)).collect()
    }

    /// Lexer time plus parser time, run by run.
    pub fn total_times(&self) -> ScalarSeries {
        self.series(MetricType::LexerTime)
            .combine(&self.series(MetricType::ParserTime))
    }

    /// Renders this history as table rows, one per metric type.
    ///
    /// Statistics are computed first. Rows carry no line terminator.
    pub fn serialize_rows(&mut self, document_name: &str) -> Vec<String> {
        self.compute_statistics();
        MetricType::ALL
            .iter()
            .map(|&metric| self.render_row(document_name, metric))
            .collect()
    }

    /// Writes the rows of [`serialize_rows`](Self::serialize_rows), each
    /// terminated by `\n`.
    pub fn write_rows<W: io::Write>(&mut self, document_name: &str, out: &mut W) -> io::Result<()> {
        self.compute_statistics();
        for metric in MetricType::ALL {
            writeln!(out, "{}", self.render_row(document_name, metric))?;
        }
        Ok(())
    }

    fn render_row(&self, document_name: &str, metric: MetricType) -> String {
        let stats = &self.stats[metric.index()];
        let mut row = String::with_capacity(48 + document_name.len() + self.samples.len() * 4);
        // writing into a String cannot fail
        let _ = write!(
            row,
            "\"{}\",\"{}\",{},{},{},{}",
            document_name,
            metric.label(),
            stats.min,
            format_float(stats.mean),
            format_float(stats.std_dev),
            stats.max
        );
        for sample in &self.samples {
            row.push(',');
            let value = sample.get(metric);
            if is_measured(value) {
                let _ = write!(row, "{}", value);
            }
        }
        row
    }
}

/// Parses one value cell of a persisted row.
///
/// Empty or malformed cells are unmeasured. A cell containing `.` is read
/// as a float and truncated toward zero; anything else must be an integer.
///
/// # Examples
///
/// ```
/// use rigstat_core::{parse_cell, UNMEASURED};
///
/// assert_eq!(parse_cell("17"), 17);
/// assert_eq!(parse_cell("17.9"), 17);
/// assert_eq!(parse_cell(""), UNMEASURED);
/// assert_eq!(parse_cell("n/a"), UNMEASURED);
/// ```
pub fn parse_cell(field: &str) -> i64 {
    let field = field.trim();
    if field.is_empty() {
        return UNMEASURED;
    }
    let parsed = if field.contains('.') {
        field
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    } else {
        field.parse::<i64>().ok()
    };
    match parsed {
        Some(value) if is_measured(value) => value,
        _ => UNMEASURED,
    }
}

/// Formats a float with at least one fractional digit (`12.0`, `0.5`).
fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lexer: i64, parser: i64) -> SampleVector {
        SampleVector::from_pairs([
            (MetricType::LexerTime, lexer),
            (MetricType::ParserTime, parser),
        ])
    }

    // ==================== load_row ====================

    #[test]
    fn test_load_row_skips_statistics_columns() {
        let mut history = History::new();
        assert!(history.load_row("t1ParserTimes", "3,4.5,1.2,6,3,6"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).get(MetricType::ParserTime), 3);
        assert_eq!(history.get(1).get(MetricType::ParserTime), 6);
        assert_eq!(history.get(0).get(MetricType::LexerTime), UNMEASURED);
    }

    #[test]
    fn test_load_row_unknown_label_is_dropped() {
        let mut history = History::new();
        assert!(!history.load_row("t2Totals", "1,1.0,0.0,1,1"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_row_label_case_insensitive() {
        let mut history = History::new();
        assert!(history.load_row("T4AMBIGUITIES", ",,,,2"));
        assert_eq!(history.get(0).get(MetricType::Ambiguities), 2);
    }

    #[test]
    fn test_load_row_merges_positionally() {
        let mut history = History::new();
        history.load_row("t0LexerTimes", ",,,,10,11");
        history.load_row("t1ParserTimes", ",,,,20,21,22");

        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0), sample(10, 20));
        assert_eq!(history.get(1), sample(11, 21));
        assert_eq!(history.get(2), sample(UNMEASURED, 22));
    }

    #[test]
    fn test_load_row_keeps_trailing_unmeasured_positions() {
        let mut history = History::new();
        history.load_row("t0LexerTimes", ",,,,5,,");
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(2).get(MetricType::LexerTime), UNMEASURED);
    }

    #[test]
    fn test_load_row_without_values() {
        let mut history = History::new();
        assert!(history.load_row("t0LexerTimes", "1,1.0,0.0,1"));
        assert!(history.load_row("t0LexerTimes", ""));
        assert!(history.is_empty());
    }

    #[test]
    fn test_parse_cell_tolerance() {
        assert_eq!(parse_cell(" 8 "), 8);
        assert_eq!(parse_cell("0"), 0);
        assert_eq!(parse_cell("3.99"), 3);
        assert_eq!(parse_cell("-4"), UNMEASURED);
        assert_eq!(parse_cell("-4.5"), UNMEASURED);
        assert_eq!(parse_cell("1e3"), UNMEASURED);
        assert_eq!(parse_cell("1.2.3"), UNMEASURED);
        assert_eq!(parse_cell("NaN."), UNMEASURED);
        assert_eq!(parse_cell("99999999999999999999"), UNMEASURED);
    }

    // ==================== statistics ====================

    #[test]
    fn test_statistics_ignore_unmeasured() {
        let mut history = History::new();
        for (lexer, parser) in [(5, 1), (-1, 2), (7, -1), (-1, 3), (9, -1)] {
            history.append(sample(lexer, parser));
        }

        let lexer = history.statistics(MetricType::LexerTime);
        assert_eq!(lexer, Statistics::from_values(&[5, 7, 9]));
        assert_eq!(lexer.std_dev, 2.0);

        let parser = history.statistics(MetricType::ParserTime);
        assert_eq!(parser.count, 3);
        assert_eq!(parser.mean, 2.0);

        let errors = history.statistics(MetricType::LexerErrors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_statistics_match_series_statistics() {
        let mut history = History::new();
        for (lexer, parser) in [(12, 30), (-1, 31), (15, -1), (20, 40)] {
            history.append(sample(lexer, parser));
        }
        for metric in MetricType::ALL {
            let mut series = history.series(metric);
            assert_eq!(history.statistics(metric), *series.statistics(), "{metric}");
        }
    }

    #[test]
    fn test_compute_is_idempotent_and_append_marks_dirty() {
        let mut history = History::new();
        history.append(sample(4, 4));
        history.compute_statistics();
        let first = *history.all_statistics();
        history.compute_statistics();
        assert_eq!(*history.all_statistics(), first);

        history.append(sample(8, -1));
        assert_eq!(history.stats_state(), StatsState::Dirty);
        assert_eq!(history.statistics(MetricType::LexerTime).mean, 6.0);
        assert_eq!(history.statistics(MetricType::ParserTime).mean, 4.0);
    }

    #[test]
    fn test_reset_statistics() {
        let mut history = History::new();
        history.append(sample(1, 1));
        history.compute_statistics();
        history.reset_statistics();
        assert_eq!(history.stats_state(), StatsState::NotComputed);
        assert_eq!(history.statistics(MetricType::LexerTime).count, 1);
    }

    // ==================== series ====================

    #[test]
    fn test_total_times() {
        let mut history = History::new();
        history.append(sample(10, 1));
        history.append(sample(20, -1));
        history.append(sample(-1, 5));
        history.append(sample(-1, -1));

        assert_eq!(
            history.total_times().values(),
            &[11, 20, 5, UNMEASURED]
        );
    }

    #[test]
    fn test_get_out_of_range_is_unmeasured() {
        let history = History::new();
        assert!(history.get(3).is_unmeasured());
    }

    // ==================== serialization ====================

    #[test]
    fn test_serialize_rows_layout() {
        let mut history = History::new();
        history.append(sample(12, 3));
        history.append(sample(-1, 3));
        history.append(sample(15, -1));

        let rows = history.serialize_rows("doc1");
        assert_eq!(rows.len(), MetricType::COUNT);
        assert_eq!(
            rows[0],
            format!(
                "\"doc1\",\"t0LexerTimes\",12,13.5,{:?},15,12,,15",
                4.5_f64.sqrt()
            )
        );
        assert_eq!(rows[1], "\"doc1\",\"t1ParserTimes\",3,3.0,0.0,3,3,3,");
        assert_eq!(
            rows[2],
            format!(
                "\"doc1\",\"t2LexerErrors\",{},0.0,0.0,{},,,",
                i64::MAX,
                i64::MIN
            )
        );
    }

    #[test]
    fn test_serialize_rows_of_empty_history() {
        let mut history = History::new();
        let rows = history.serialize_rows("empty");
        assert_eq!(
            rows[9],
            format!(
                "\"empty\",\"t9ParseTreeNodes\",{},0.0,0.0,{}",
                i64::MAX,
                i64::MIN
            )
        );
    }

    #[test]
    fn test_write_rows_then_load_rows() {
        let mut original = History::new();
        original.append(sample(12, 3));
        original.append(SampleVector::new());
        original.append(sample(15, -1));

        let mut buffer = Vec::new();
        original.write_rows("doc", &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), MetricType::COUNT);

        let mut restored = History::new();
        for line in text.lines() {
            // "doc","<label>",<values>
            let rest = &line["\"doc\",\"".len()..];
            let (label, values) = rest.split_once("\",").unwrap();
            assert!(restored.load_row(label, values));
        }
        assert_eq!(restored.samples(), original.samples());
    }

    #[test]
    fn test_total_times_of_loaded_extremes() {
        let mut history = History::new();
        assert!(history.load_row("t0LexerTimes", ",,,,9223372036854775807"));
        assert!(history.load_row("t1ParserTimes", ",,,,1"));

        let mut totals = history.total_times();
        assert_eq!(totals.values(), &[i64::MAX]);
        assert_eq!(totals.statistics().count, 1);
    }
}
