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

//! Metrics table persistence in the regression CSV dialect.
//!
//! A [`Table`] maps test document names to their [`History`] of runs and
//! reads and writes the table file that accumulates across regression runs.
//!
//! # File layout
//!
//! ```text
//! "testDocName","metricType","min","mean","stdDev","max","values"
//! "doc1.txt","t0LexerTimes",12,15.666666666666666,4.041451884327381,20,12,,15,20
//! ```
//!
//! One row per document and metric type. Document name and label are always
//! quoted, numbers never are, and an unmeasured value is an empty field.
//! Rows are written in ascending document order and metric-type order.
//!
//! # Tolerant loading
//!
//! Loading never fails on content. The header is skipped by position, lines
//! that do not start with `"` are ignored, rows with an unknown metric type
//! are dropped, and cells that do not parse load as unmeasured. The
//! [`LoadReport`] returned by [`Table::load`] counts what was kept.
//!
//! # Examples
//!
//! ```
//! use rigstat_core::MetricType;
//! use rigstat_csv::Table;
//!
//! let text = "\"testDocName\",\"metricType\",\"min\",\"mean\",\"stdDev\",\"max\",\"values\"\n\
//!             \"doc1.txt\",\"t0LexerTimes\",,,,,12,,15,20\n";
//!
//! let mut table = Table::new();
//! let report = table.load_from(text.as_bytes()).unwrap();
//! assert_eq!(report.rows, 1);
//!
//! let history = table.get_mut("doc1.txt").unwrap();
//! let stats = history.statistics(MetricType::LexerTime);
//! assert_eq!(stats.count, 3);
//! assert_eq!((stats.min, stats.max), (12, 20));
//! ```
//!
//! [`History`]: rigstat_core::History

#![deny(missing_docs)]

mod error;
mod row;
mod table;

pub use error::{Result, TableError};
pub use row::{parse_row, ParsedRow};
pub use table::{LoadReport, Table, HEADER};
