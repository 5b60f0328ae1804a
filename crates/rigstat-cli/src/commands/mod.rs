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

//! CLI command implementations

mod normalize;
mod record;
mod show;

pub use normalize::normalize;
pub use record::{parse_metric_arg, record};
pub use show::{render_text, show, summarize, DocumentSummary, MetricSummary};

use crate::error::CliError;
use rigstat::Table;
use std::path::Path;

/// Loads the table at `path`, which must exist.
pub(crate) fn load_table(path: &Path) -> Result<Table, CliError> {
    let mut table = Table::new();
    let report = table.load(path)?;
    tracing::debug!(
        rows = report.rows,
        dropped = report.dropped,
        skipped = report.skipped,
        "read table"
    );
    Ok(table)
}
