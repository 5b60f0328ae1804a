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

//! Record command - append a manually measured run

use crate::error::CliError;
use rigstat::{MetricType, RegressionRun, RunConfig, SampleVector};
use std::convert::Infallible;
use std::path::{Path, PathBuf};

/// Parses a `LABEL=VALUE` metric argument.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] if the `=` is missing, the label
/// names no metric type, or the value is not a non-negative integer.
///
/// # Examples
///
/// ```
/// use rigstat::MetricType;
/// use rigstat_cli::commands::parse_metric_arg;
///
/// assert_eq!(
///     parse_metric_arg("t1parsertimes=40").unwrap(),
///     (MetricType::ParserTime, 40)
/// );
/// assert!(parse_metric_arg("t1ParserTimes").is_err());
/// ```
pub fn parse_metric_arg(arg: &str) -> Result<(MetricType, i64), CliError> {
    let (label, value) = arg.split_once('=').ok_or_else(|| {
        CliError::invalid_argument(format!("expected LABEL=VALUE, got '{}'", arg))
    })?;

    let metric = label
        .parse::<MetricType>()
        .map_err(|e| CliError::invalid_argument(e.to_string()))?;

    let value = value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| {
            CliError::invalid_argument(format!(
                "value for {} must be a non-negative integer, got '{}'",
                metric, value
            ))
        })?;

    Ok((metric, value))
}

/// Append one run of `document` to the table at `table`.
///
/// The table is created if it does not exist and is saved atomically.
///
/// # Arguments
///
/// * `table` - Metrics table file
/// * `document` - Test document path
/// * `metrics` - `LABEL=VALUE` arguments; at least one is required
/// * `source_dir` - Directory prefix stripped from `document` to form its key
///
/// # Errors
///
/// Returns `Err` if an argument is invalid or the table cannot be saved.
pub fn record(
    table: &Path,
    document: &Path,
    metrics: &[String],
    source_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    if metrics.is_empty() {
        return Err(CliError::invalid_argument(
            "at least one --metric LABEL=VALUE is required",
        ));
    }

    let pairs = metrics
        .iter()
        .map(|arg| parse_metric_arg(arg))
        .collect::<Result<Vec<_>, _>>()?;
    let sample = SampleVector::from_pairs(pairs);

    let mut config = RunConfig::new()
        .with_table_path(table)
        .with_atomic_save(true);
    if let Some(dir) = source_dir {
        config = config.with_source_dir(dir);
    }

    let source = move |_: &Path| -> Result<SampleVector, Infallible> { Ok(sample) };
    let mut run = RegressionRun::new(config, source);
    let summary = run.run([document]);

    if let Some(e) = summary.save_error {
        return Err(e.into());
    }
    for key in &summary.processed {
        let runs = run.table().get(key).map_or(0, |history| history.len());
        println!("Recorded run {} for {}", runs, key);
    }
    Ok(())
}
