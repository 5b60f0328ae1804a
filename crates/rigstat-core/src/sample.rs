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

//! Per-run measurement vector.

use crate::metric::MetricType;

/// Sentinel stored for "no measurement was taken in this run".
///
/// Measurements are non-negative, so any negative value means unmeasured;
/// this is the one negative value the crate ever stores.
pub const UNMEASURED: i64 = -1;

/// Returns `true` if `value` is a real measurement.
#[inline]
pub fn is_measured(value: i64) -> bool {
    value >= 0
}

/// The measurements of one run, one slot per [`MetricType`].
///
/// A fresh vector is all-unmeasured. Typed access goes through
/// [`get`](Self::get) / [`set`](Self::set); the index-addressed variants
/// are lenient and treat an out-of-range slot as unmeasured on read and as a
/// no-op on write.
///
/// # Examples
///
/// ```
/// use rigstat_core::{MetricType, SampleVector, UNMEASURED};
///
/// let mut sample = SampleVector::new();
/// sample.set(MetricType::LexerTime, 12);
///
/// assert_eq!(sample.get(MetricType::LexerTime), 12);
/// assert_eq!(sample.get(MetricType::ParserTime), UNMEASURED);
/// assert_eq!(sample.get_index(99), UNMEASURED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleVector {
    values: [i64; MetricType::COUNT],
}

impl SampleVector {
    /// Creates an all-unmeasured vector.
    pub const fn new() -> Self {
        Self {
            values: [UNMEASURED; MetricType::COUNT],
        }
    }

    /// Every slot seeded with `i64::MAX`, the start value of a running minimum.
    pub const fn filled_max() -> Self {
        Self {
            values: [i64::MAX; MetricType::COUNT],
        }
    }

    /// Every slot seeded with `i64::MIN`, the start value of a running maximum.
    pub const fn filled_min() -> Self {
        Self {
            values: [i64::MIN; MetricType::COUNT],
        }
    }

    /// Builds a vector from `(metric, value)` pairs; unlisted metrics stay unmeasured.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MetricType, i64)>,
    {
        let mut sample = Self::new();
        for (metric, value) in pairs {
            sample.set(metric, value);
        }
        sample
    }

    /// Value stored for `metric`.
    #[inline]
    pub fn get(&self, metric: MetricType) -> i64 {
        self.values[metric.index()]
    }

    /// Stores `value` for `metric`. Negative values are stored as [`UNMEASURED`].
    #[inline]
    pub fn set(&mut self, metric: MetricType, value: i64) {
        self.values[metric.index()] = normalize(value);
    }

    /// Value at slot `index`, or [`UNMEASURED`] when `index` is out of range.
    pub fn get_index(&self, index: usize) -> i64 {
        self.values.get(index).copied().unwrap_or(UNMEASURED)
    }

    /// Stores `value` at slot `index`; an out-of-range `index` is ignored.
    pub fn set_index(&mut self, index: usize, value: i64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = normalize(value);
        }
    }

    /// Whether `metric` holds a real measurement.
    pub fn is_measured(&self, metric: MetricType) -> bool {
        is_measured(self.get(metric))
    }

    /// Whether no slot holds a measurement.
    pub fn is_unmeasured(&self) -> bool {
        self.values.iter().all(|&value| !is_measured(value))
    }

    /// Iterates `(metric, value)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricType, i64)> + '_ {
        MetricType::ALL
            .iter()
            .map(move |&metric| (metric, self.get(metric)))
    }

    /// Raw slot values in enumeration order.
    pub fn as_array(&self) -> &[i64; MetricType::COUNT] {
        &self.values
    }
}

impl Default for SampleVector {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn normalize(value: i64) -> i64 {
    if is_measured(value) {
        value
    } else {
        UNMEASURED
    }
}
