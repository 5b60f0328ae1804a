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

//! Float comparison helpers.
//!
//! Means and deviations are computed in floating point, so tests compare
//! them against a reference within a relative tolerance.

/// Relative tolerance used by [`assert_close`].
pub const TOLERANCE: f64 = 1e-9;

/// Asserts that `actual` is within [`TOLERANCE`] of `expected`, relative to
/// the larger magnitude (or absolutely, near zero).
///
/// # Panics
///
/// Panics with both values when they differ by more than the tolerance.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let scale = actual.abs().max(expected.abs()).max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {} to be close to {}",
        actual,
        expected
    );
}

/// Arithmetic mean of `values`, or `0.0` when empty.
pub fn mean_of(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Bessel-corrected standard deviation of `values`, or `0.0` for fewer than
/// two values.
pub fn sample_std_dev_of(values: &[i64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean_of(values);
    let sum_sq: f64 = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
