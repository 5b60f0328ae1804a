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

//! Normalize command - rewrite a table with fresh statistics

use crate::error::CliError;
use rigstat::{Table, TableError};
use std::fs;
use std::path::Path;

/// Rewrite the table at `path` in normalized form.
///
/// Every statistics column is recomputed from the values and documents are
/// written in name order; lines and rows the loader ignores are dropped.
///
/// # Arguments
///
/// * `path` - Metrics table file
/// * `output` - Write here instead of replacing `path`
/// * `check` - Only compare; fail if the file would change
///
/// # Errors
///
/// Returns `Err` if the table cannot be read or written, or with
/// [`CliError::NotNormalized`] when `check` finds a difference.
pub fn normalize(path: &Path, output: Option<&Path>, check: bool) -> Result<(), CliError> {
    let original = fs::read(path).map_err(|e| TableError::io(path, e))?;

    let mut table = Table::new();
    let report = table
        .load_from(original.as_slice())
        .map_err(|e| e.with_path(path))?;
    let normalized = table.to_csv_string();

    if check {
        if normalized.as_bytes() != original.as_slice() {
            return Err(CliError::NotNormalized(path.to_path_buf()));
        }
        println!("{} is normalized", path.display());
        return Ok(());
    }

    let target = output.unwrap_or(path);
    table.save(target)?;
    println!(
        "Normalized {} documents into {} ({} rows dropped, {} lines skipped)",
        table.len(),
        target.display(),
        report.dropped,
        report.skipped
    );
    Ok(())
}
