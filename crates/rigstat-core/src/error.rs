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

//! Error types for the metrics model.
//!
//! Almost nothing in this crate can fail: malformed cells degrade to the
//! unmeasured sentinel and out-of-range slots are ignored. The only
//! fallible entry point is parsing a metric-type label through `FromStr`.

use thiserror::Error;

/// A label that does not name any [`MetricType`](crate::MetricType).
///
/// # Examples
///
/// ```
/// use rigstat_core::MetricType;
///
/// let err = "t2Totals".parse::<MetricType>().unwrap_err();
/// assert_eq!(err.to_string(), "Unknown metric type: t2Totals");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown metric type: {0}")]
pub struct UnknownMetricType(pub String);
