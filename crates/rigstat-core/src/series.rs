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

//! Ordered measurements of one metric for one document.

use crate::sample::{is_measured, UNMEASURED};
use crate::stats::{Statistics, StatsState};

/// Append-only sequence of measurements with cached statistics.
///
/// Position `i` is the measurement of run `i`; unmeasured runs hold
/// [`UNMEASURED`] so positions stay aligned with other series of the same
/// document.
///
/// # Examples
///
/// ```
/// use rigstat_core::ScalarSeries;
///
/// let lexer: ScalarSeries = [10, 20, -1].into_iter().collect();
/// let parser: ScalarSeries = [1, -1, 5].into_iter().collect();
///
/// let total = lexer.combine(&parser);
/// assert_eq!(total.values(), &[11, 20, 5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScalarSeries {
    values: Vec<i64>,
    stats: Statistics,
    state: StatsState,
}

impl ScalarSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one measurement; any negative value is stored as [`UNMEASURED`].
    pub fn append(&mut self, value: i64) {
        self.values
            .push(if is_measured(value) { value } else { UNMEASURED });
        self.state.invalidate();
    }

    /// Value of run `index`, or [`UNMEASURED`] when out of range.
    pub fn get(&self, index: usize) -> i64 {
        self.values.get(index).copied().unwrap_or(UNMEASURED)
    }

    /// All stored values, unmeasured runs included.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of runs, unmeasured runs included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no run was appended.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element-wise sum with `other`, sized like `self`.
    ///
    /// Where both sides are measured the values are added; where only one is,
    /// that value is kept; where neither is, the result is unmeasured. Runs
    /// past the end of `other` are taken from `self` unchanged, and runs past
    /// the end of `self` are dropped: `self` is the authoritative operand.
    /// Sums saturate at `i64::MAX` so an oversized total stays measured.
    pub fn combine(&self, other: &ScalarSeries) -> ScalarSeries {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let other_value = other.get(i);
                match (is_measured(value), is_measured(other_value)) {
                    (true, true) => value.saturating_add(other_value),
                    (true, false) => value,
                    (false, true) => other_value,
                    (false, false) => UNMEASURED,
                }
            })
            .collect()
    }

    /// Computes the cached statistics unless they are current.
    pub fn compute_statistics(&mut self) {
        if !self.state.needs_compute() {
            return;
        }
        self.stats = Statistics::from_values(&self.values);
        self.state = StatsState::Computed;
    }

    /// Drops cached statistics so the next computation starts over.
    pub fn reset_statistics(&mut self) {
        self.stats = Statistics::EMPTY;
        self.state = StatsState::NotComputed;
    }

    /// Current statistics, computing them first if needed.
    pub fn statistics(&mut self) -> &Statistics {
        self.compute_statistics();
        &self.stats
    }

    /// Cached statistics without recomputing; `None` unless current.
    pub fn cached_statistics(&self) -> Option<&Statistics> {
        (!self.state.needs_compute()).then_some(&self.stats)
    }

    /// State of the statistics cache.
    pub fn stats_state(&self) -> StatsState {
        self.state
    }
}

impl FromIterator<i64> for ScalarSeries {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut series = ScalarSeries::new();
        for value in iter {
            series.append(value);
        }
        series
    }
}

impl PartialEq for ScalarSeries {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}
