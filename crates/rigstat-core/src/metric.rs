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

//! The fixed enumeration of measured quantities.
//!
//! The declaration order of [`MetricType`] is load-bearing: it fixes the
//! slot layout of a [`SampleVector`](crate::SampleVector) and the order in
//! which a document's rows are written to the table file. Every label starts
//! with `t` and a single ordinal digit, so sorting the label column
//! alphabetically in a spreadsheet gives back the same order.

use crate::error::UnknownMetricType;
use std::fmt;
use std::str::FromStr;

/// One measured quantity of a lexer/parser run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricType {
    /// Wall-clock milliseconds spent tokenizing.
    LexerTime,
    /// Wall-clock milliseconds spent building the parse tree.
    ParserTime,
    /// Syntax errors reported by the lexer.
    LexerErrors,
    /// Syntax errors reported by the parser.
    ParserErrors,
    /// Ambiguity reports.
    Ambiguities,
    /// Weak (SLL) context-sensitivity reports.
    WeakContexts,
    /// Strong (full LL) context-sensitivity reports.
    StrongContexts,
    /// Tokens produced by the lexer.
    LexerTokens,
    /// Depth of the parse tree.
    ParseTreeDepth,
    /// Node count of the parse tree.
    ParseTreeNodes,
}

impl MetricType {
    /// Number of metric types.
    pub const COUNT: usize = 10;

    /// All metric types in persisted order.
    pub const ALL: [MetricType; Self::COUNT] = [
        MetricType::LexerTime,
        MetricType::ParserTime,
        MetricType::LexerErrors,
        MetricType::ParserErrors,
        MetricType::Ambiguities,
        MetricType::WeakContexts,
        MetricType::StrongContexts,
        MetricType::LexerTokens,
        MetricType::ParseTreeDepth,
        MetricType::ParseTreeNodes,
    ];

    /// Slot index of this metric type inside a sample vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Metric type stored at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label written to the `metricType` column.
    pub const fn label(self) -> &'static str {
        match self {
            MetricType::LexerTime => "t0LexerTimes",
            MetricType::ParserTime => "t1ParserTimes",
            MetricType::LexerErrors => "t2LexerErrors",
            MetricType::ParserErrors => "t3ParserErrors",
            MetricType::Ambiguities => "t4Ambiguities",
            MetricType::WeakContexts => "t5WeakContexts",
            MetricType::StrongContexts => "t6StrongContexts",
            MetricType::LexerTokens => "t7LexerTokens",
            MetricType::ParseTreeDepth => "t8ParseTreeDepth",
            MetricType::ParseTreeNodes => "t9ParseTreeNodes",
        }
    }

    /// Resolves a persisted label, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rigstat_core::MetricType;
    ///
    /// assert_eq!(MetricType::from_label("t1parsertimes"), Some(MetricType::ParserTime));
    /// assert_eq!(MetricType::from_label("t2Totals"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|metric| metric.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MetricType {
    type Err = UnknownMetricType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim()).ok_or_else(|| UnknownMetricType(s.to_string()))
    }
}
