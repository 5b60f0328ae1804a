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

//! # rigstat - Regression Run Statistics
//!
//! rigstat keeps a per-document history of lexer and parser measurements
//! across regression runs of a grammar test rig, and summarizes each metric
//! with min, mean, sample standard deviation and max so that performance
//! and ambiguity regressions show up between runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use rigstat::{MetricType, RegressionRun, RunConfig, SampleVector};
//! use std::convert::Infallible;
//! use std::path::Path;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = RunConfig::new()
//!     .with_table_path(dir.path().join("metrics.csv"))
//!     .with_source_dir("grammars");
//!
//! // The rig measures one document per call.
//! let rig = |_: &Path| -> Result<SampleVector, Infallible> {
//!     Ok(SampleVector::from_pairs([(MetricType::LexerTime, 12)]))
//! };
//!
//! let mut run = RegressionRun::new(config, rig);
//! let summary = run.run(["work/grammars/expr/input1.txt"]);
//! assert!(summary.is_success());
//!
//! let history = run.table().get("expr/input1.txt").unwrap();
//! assert_eq!(history.len(), 1);
//! ```
//!
//! ## Crates
//!
//! - [`rigstat_core`]: metric types, samples, series, histories and statistics
//! - [`rigstat_csv`]: the metrics table and its CSV persistence
//! - this crate: the run driver and its configuration

// Re-export the measurement model
pub use rigstat_core::{
    is_measured, parse_cell, History, MetricType, SampleVector, ScalarSeries, Statistics,
    StatsState, UnknownMetricType, STATISTICS_COLUMNS, UNMEASURED,
};

// Re-export table persistence
pub use rigstat_csv::{parse_row, LoadReport, ParsedRow, Table, TableError, HEADER};

mod config;
mod run;

pub use config::RunConfig;
pub use run::{DocumentFailure, RegressionRun, RunSummary, SampleSource};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
