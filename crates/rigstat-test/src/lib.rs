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

//! Shared test fixtures and utilities for rigstat metrics tables.
//!
//! This crate provides canonical table files, sample builders and float
//! assertions so that the table, driver and CLI tests exercise the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use rigstat_test::fixtures;
//! use rigstat_test::fixtures::builders::SampleBuilder;
//! use rigstat_core::MetricType;
//!
//! // Pre-built table files
//! let text = fixtures::single_document();
//! assert!(text.starts_with(fixtures::HEADER));
//!
//! // Custom samples
//! let sample = SampleBuilder::new().lexer_time(5).parser_time(9).build();
//! assert_eq!(sample.get(MetricType::ParserTime), 9);
//! ```

use rigstat_core::{SampleVector, UNMEASURED};

/// Type alias for a list of table fixtures (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> String)>;

/// Canonical table files and builders.
pub mod fixtures;

/// Float comparison helpers.
pub mod assertions;

pub use assertions::{assert_close, mean_of, sample_std_dev_of};
pub use fixtures::*;

/// Writes every fixture to `dir` as `<name>.csv`.
pub fn write_fixtures_to_dir(dir: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for (name, generate) in fixtures::all() {
        std::fs::write(dir.join(format!("{}.csv", name)), generate())?;
    }
    Ok(())
}

/// Builds a sample whose slots are taken from `values` in metric order.
///
/// Missing trailing slots stay unmeasured.
pub fn sample_of(values: &[i64]) -> SampleVector {
    let mut sample = SampleVector::new();
    for (index, &value) in values.iter().enumerate() {
        sample.set_index(index, value);
    }
    sample
}

/// Maps `None` to the unmeasured sentinel.
pub fn cell(value: Option<i64>) -> i64 {
    value.unwrap_or(UNMEASURED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigstat_core::MetricType;

    #[test]
    fn test_all_fixtures_start_with_header() {
        for (name, generate) in fixtures::all() {
            let text = generate();
            assert!(
                text.starts_with(fixtures::HEADER),
                "Fixture {} should start with the header row",
                name
            );
        }
    }

    #[test]
    fn test_sample_of() {
        let sample = sample_of(&[1, -1, 3]);
        assert_eq!(sample.get(MetricType::LexerTime), 1);
        assert_eq!(sample.get(MetricType::ParserTime), UNMEASURED);
        assert_eq!(sample.get(MetricType::LexerErrors), 3);
        assert_eq!(sample.get(MetricType::ParseTreeNodes), UNMEASURED);
    }

    #[test]
    fn test_write_fixtures_to_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("fixtures");
        write_fixtures_to_dir(&target).unwrap();
        for (name, _) in fixtures::all() {
            assert!(target.join(format!("{}.csv", name)).is_file());
        }
    }

    #[test]
    fn test_cell() {
        assert_eq!(cell(Some(4)), 4);
        assert_eq!(cell(None), UNMEASURED);
    }
}
