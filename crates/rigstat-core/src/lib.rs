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

//! Measurement model for lexer/parser regression runs.
//!
//! This crate holds the in-memory side of a regression metrics table:
//!
//! - [`MetricType`]: the fixed, ordered set of measured quantities
//! - [`SampleVector`]: the measurements of one run, one slot per metric
//! - [`ScalarSeries`]: one metric across runs, with a totals combinator
//! - [`History`]: all runs of one test document plus per-metric statistics
//! - [`Statistics`]: min / mean / sample standard deviation / max
//!
//! # Missing data
//!
//! A run that could not measure a quantity stores [`UNMEASURED`] (`-1`) in
//! that slot. Every negative value is treated as unmeasured and excluded from
//! all statistics, so a history with gaps still summarizes correctly:
//!
//! ```
//! use rigstat_core::{History, MetricType, SampleVector};
//!
//! let mut history = History::new();
//! for lexer_ms in [5, -1, 7, -1, 9] {
//!     history.append(SampleVector::from_pairs([(MetricType::LexerTime, lexer_ms)]));
//! }
//!
//! let stats = history.statistics(MetricType::LexerTime);
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.mean, 7.0);
//! assert_eq!(stats.min_value(), Some(5));
//! ```
//!
//! # Statistics caching
//!
//! Statistics are computed on demand and cached. A [`StatsState`] flag
//! tracks whether the cache is current; appending or loading marks it stale
//! and [`History::reset_statistics`] clears it outright.

mod error;
mod history;
mod metric;
mod sample;
mod series;
mod stats;

pub use error::UnknownMetricType;
pub use history::{parse_cell, History, STATISTICS_COLUMNS};
pub use metric::MetricType;
pub use sample::{is_measured, SampleVector, UNMEASURED};
pub use series::ScalarSeries;
pub use stats::{Statistics, StatsState};
