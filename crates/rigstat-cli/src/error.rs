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

//! Structured error types for the rigstat CLI.

use rigstat::TableError;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Loading or saving the metrics table failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested document has no entry in the table.
    #[error("Document '{0}' not found in table")]
    DocumentNotFound(String),

    /// The table file differs from its normalized form.
    ///
    /// Returned by `normalize --check`.
    #[error("Table '{}' is not normalized", .0.display())]
    NotNormalized(PathBuf),

    /// JSON serialization failed.
    #[error("JSON format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::InvalidArgument(message.into())
    }
}
