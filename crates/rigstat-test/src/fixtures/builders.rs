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

//! Builder pattern for creating customizable samples and histories.

use rigstat_core::{History, MetricType, SampleVector};

/// Builder for one run's [`SampleVector`].
///
/// Metrics that are never set stay unmeasured.
///
/// # Examples
///
/// ```
/// use rigstat_test::fixtures::builders::SampleBuilder;
/// use rigstat_core::{MetricType, UNMEASURED};
///
/// let sample = SampleBuilder::new()
///     .lexer_time(4)
///     .metric(MetricType::Ambiguities, 2)
///     .build();
///
/// assert_eq!(sample.get(MetricType::LexerTime), 4);
/// assert_eq!(sample.get(MetricType::Ambiguities), 2);
/// assert_eq!(sample.get(MetricType::ParserTime), UNMEASURED);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleBuilder {
    sample: SampleVector,
}

impl SampleBuilder {
    /// Creates a builder with every metric unmeasured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets any metric.
    pub fn metric(mut self, metric: MetricType, value: i64) -> Self {
        self.sample.set(metric, value);
        self
    }

    /// Sets the lexer time.
    pub fn lexer_time(self, value: i64) -> Self {
        self.metric(MetricType::LexerTime, value)
    }

    /// Sets the parser time.
    pub fn parser_time(self, value: i64) -> Self {
        self.metric(MetricType::ParserTime, value)
    }

    /// Sets lexer and parser error counts.
    pub fn errors(self, lexer: i64, parser: i64) -> Self {
        self.metric(MetricType::LexerErrors, lexer)
            .metric(MetricType::ParserErrors, parser)
    }

    /// Sets every metric to `value`.
    pub fn all(mut self, value: i64) -> Self {
        for metric in MetricType::ALL {
            self.sample.set(metric, value);
        }
        self
    }

    /// Builds the sample.
    pub fn build(self) -> SampleVector {
        self.sample
    }
}

/// Builder for a [`History`] of several runs.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuilder {
    samples: Vec<SampleVector>,
}

impl HistoryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one run.
    pub fn run(mut self, sample: SampleVector) -> Self {
        self.samples.push(sample);
        self
    }

    /// Appends one run per value, measuring only `metric`.
    pub fn series(mut self, metric: MetricType, values: &[i64]) -> Self {
        self.samples.extend(
            values
                .iter()
                .map(|&value| SampleVector::from_pairs([(metric, value)])),
        );
        self
    }

    /// Builds the history.
    pub fn build(self) -> History {
        let mut history = History::new();
        for sample in self.samples {
            history.append(sample);
        }
        history
    }
}
