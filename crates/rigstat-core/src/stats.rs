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

//! Descriptive statistics over measured values.
//!
//! Unmeasured entries (any negative value) never contribute to a statistic.
//! The standard deviation is the sample standard deviation (Bessel's
//! correction, `n - 1` in the denominator).

use crate::sample::is_measured;

/// Summary of the measured entries of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Number of measured entries.
    pub count: usize,
    /// Smallest measured value; `i64::MAX` when `count == 0`.
    pub min: i64,
    /// Arithmetic mean; `0.0` when `count == 0`.
    pub mean: f64,
    /// Sample standard deviation; `0.0` when `count <= 1`.
    pub std_dev: f64,
    /// Largest measured value; `i64::MIN` when `count == 0`.
    pub max: i64,
}

impl Statistics {
    /// Statistics of a series without any measurement.
    ///
    /// `min` and `max` sit at their unset extremes and must not be read as
    /// data; use [`min_value`](Self::min_value) / [`max_value`](Self::max_value).
    pub const EMPTY: Statistics = Statistics {
        count: 0,
        min: i64::MAX,
        mean: 0.0,
        std_dev: 0.0,
        max: i64::MIN,
    };

    /// Computes statistics over the measured entries of `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rigstat_core::Statistics;
    ///
    /// let stats = Statistics::from_values(&[5, -1, 7, -1, 9]);
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.mean, 7.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// assert_eq!((stats.min, stats.max), (5, 9));
    /// ```
    pub fn from_values(values: &[i64]) -> Self {
        let mut stats = Self::EMPTY;
        let mut sum = 0.0;
        for &value in values.iter().filter(|&&v| is_measured(v)) {
            stats.count += 1;
            stats.min = stats.min.min(value);
            stats.max = stats.max.max(value);
            sum += value as f64;
        }
        if stats.count == 0 {
            return stats;
        }
        stats.mean = sum / stats.count as f64;

        let sum_sq_dev: f64 = values
            .iter()
            .filter(|&&v| is_measured(v))
            .map(|&v| {
                let dev = v as f64 - stats.mean;
                dev * dev
            })
            .sum();
        stats.std_dev = bessel_std_dev(sum_sq_dev, stats.count);
        stats
    }

    /// `min`, or `None` if nothing was measured.
    pub fn min_value(&self) -> Option<i64> {
        (self.count > 0).then_some(self.min)
    }

    /// `max`, or `None` if nothing was measured.
    pub fn max_value(&self) -> Option<i64> {
        (self.count > 0).then_some(self.max)
    }

    /// Whether nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// `sqrt(sum_sq_dev / (count - 1))`, or `0.0` when `count <= 1`.
pub(crate) fn bessel_std_dev(sum_sq_dev: f64, count: usize) -> f64 {
    if count > 1 {
        (sum_sq_dev / (count - 1) as f64).sqrt()
    } else {
        0.0
    }
}

/// Whether cached statistics reflect the current data.
///
/// Kept apart from the data itself so that no measured value can be
/// mistaken for "not computed yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsState {
    /// Never computed, or explicitly reset.
    #[default]
    NotComputed,
    /// Cached values match the data.
    Computed,
    /// Data changed after the last computation.
    Dirty,
}

impl StatsState {
    /// Whether a computation is required before the cache can be read.
    pub fn needs_compute(self) -> bool {
        self != StatsState::Computed
    }

    /// Marks cached values stale after a mutation.
    pub fn invalidate(&mut self) {
        if *self == StatsState::Computed {
            *self = StatsState::Dirty;
        }
    }
}
