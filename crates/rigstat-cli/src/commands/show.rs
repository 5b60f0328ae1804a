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

//! Show command - per-document statistics of a metrics table

use super::load_table;
use crate::error::CliError;
use rigstat::{History, MetricType, Statistics, Table};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Label used for the combined lexer and parser time.
const TOTAL_LABEL: &str = "totalTimes";

/// Statistics of one metric; absent fields mean nothing was measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Metric-type label as written in the table.
    pub metric: String,
    /// Number of measured runs.
    pub count: usize,
    /// Smallest measurement.
    pub min: Option<i64>,
    /// Mean of the measurements.
    pub mean: Option<f64>,
    /// Sample standard deviation of the measurements.
    pub std_dev: Option<f64>,
    /// Largest measurement.
    pub max: Option<i64>,
}

impl MetricSummary {
    fn new(metric: &str, stats: &Statistics) -> Self {
        let measured = !stats.is_empty();
        Self {
            metric: metric.to_string(),
            count: stats.count,
            min: stats.min_value(),
            mean: measured.then_some(stats.mean),
            std_dev: measured.then_some(stats.std_dev),
            max: stats.max_value(),
        }
    }
}

/// Statistics of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    /// Document key.
    pub document: String,
    /// Number of recorded runs.
    pub runs: usize,
    /// One entry per metric type, in table order.
    pub metrics: Vec<MetricSummary>,
    /// Lexer time plus parser time per run.
    pub total_times: MetricSummary,
}

impl DocumentSummary {
    fn new(document: &str, history: &mut History) -> Self {
        let metrics = MetricType::ALL
            .iter()
            .map(|&metric| MetricSummary::new(metric.label(), &history.statistics(metric)))
            .collect();
        let mut totals = history.total_times();
        Self {
            document: document.to_string(),
            runs: history.len(),
            metrics,
            total_times: MetricSummary::new(TOTAL_LABEL, totals.statistics()),
        }
    }
}

/// Summarizes every document of `table`, or only `document` if given.
///
/// # Errors
///
/// Returns [`CliError::DocumentNotFound`] if `document` has no entry.
pub fn summarize(
    table: &mut Table,
    document: Option<&str>,
) -> Result<Vec<DocumentSummary>, CliError> {
    match document {
        Some(name) => {
            let history = table
                .get_mut(name)
                .ok_or_else(|| CliError::DocumentNotFound(name.to_string()))?;
            Ok(vec![DocumentSummary::new(name, history)])
        }
        None => Ok(table
            .iter_mut()
            .map(|(name, history)| DocumentSummary::new(name, history))
            .collect()),
    }
}

/// Renders summaries as aligned text blocks, one per document.
pub fn render_text(summaries: &[DocumentSummary]) -> String {
    let mut out = String::new();
    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({} runs)", summary.document, summary.runs);
        let _ = writeln!(
            out,
            "  {:<18} {:>6} {:>10} {:>12} {:>12} {:>10}",
            "metric", "count", "min", "mean", "stddev", "max"
        );
        for metric in summary.metrics.iter().chain([&summary.total_times]) {
            let _ = writeln!(
                out,
                "  {:<18} {:>6} {:>10} {:>12} {:>12} {:>10}",
                metric.metric,
                metric.count,
                cell(metric.min),
                cell(metric.mean.map(|v| format!("{:.3}", v))),
                cell(metric.std_dev.map(|v| format!("{:.3}", v))),
                cell(metric.max),
            );
        }
    }
    out
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Print statistics of a metrics table.
///
/// # Arguments
///
/// * `path` - Metrics table file
/// * `document` - Restrict output to this document key
/// * `json` - Print a JSON array of [`DocumentSummary`] instead of text
///
/// # Errors
///
/// Returns `Err` if the table cannot be read, the document is unknown, or
/// JSON serialization fails.
pub fn show(path: &Path, document: Option<&str>, json: bool) -> Result<(), CliError> {
    let mut table = load_table(path)?;
    let summaries = summarize(&mut table, document)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if summaries.is_empty() {
        println!("{}: no documents", path.display());
    } else {
        print!("{}", render_text(&summaries));
    }
    Ok(())
}
