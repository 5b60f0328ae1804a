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

//! Canonical metrics table files.
//!
//! - **tables**: well-formed tables as written by a save
//! - **malformed**: hand-edited or damaged tables the loader must tolerate
//! - **builders**: fluent construction of samples and histories

pub mod builders;
mod malformed;
mod tables;

pub use malformed::*;
pub use tables::*;

use crate::FixtureList;

/// Header row of every table file.
pub const HEADER: &str = r#""testDocName","metricType","min","mean","stdDev","max","values""#;

/// Returns all fixture functions for iteration.
///
/// Useful for running the same test across all fixtures.
pub fn all() -> FixtureList {
    vec![
        ("empty_table", empty_table),
        ("single_document", single_document),
        ("multi_document", multi_document),
        ("legacy_seven_metrics", legacy_seven_metrics),
        ("messy_table", messy_table),
        ("unknown_labels", unknown_labels),
        ("bad_cells", bad_cells),
    ]
}

/// Returns only fixtures that a save reproduces byte for byte.
pub fn canonical() -> FixtureList {
    vec![
        ("empty_table", empty_table),
        ("multi_document", multi_document),
    ]
}
