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

//! Error types for table load and save operations.
//!
//! Only structural failures are errors: the table file cannot be opened,
//! read or written. Malformed content never surfaces here; a bad cell loads
//! as unmeasured and an unparseable row is skipped.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Table persistence error.
///
/// # Examples
///
/// ```
/// use rigstat_csv::TableError;
/// use std::io;
///
/// let err = TableError::io("metrics.csv", io::Error::new(io::ErrorKind::NotFound, "gone"));
/// assert!(err.is_not_found());
/// assert_eq!(err.to_string(), "I/O error for 'metrics.csv': gone");
/// ```
#[derive(Debug, Error)]
pub enum TableError {
    /// Opening, reading or writing the table file failed.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        /// The table file.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to a caller-supplied stream failed.
    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),
}

/// Convenience type alias for `Result` with `TableError`.
pub type Result<T> = std::result::Result<T, TableError>;

impl TableError {
    /// Wraps an I/O failure on the table file at `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TableError::Io {
            path: path.into(),
            source,
        }
    }

    /// Attaches `path` to a stream error; file errors are returned unchanged.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            TableError::Stream(source) => TableError::io(path, source),
            other => other,
        }
    }

    /// The table file involved, if known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TableError::Io { path, .. } => Some(path),
            TableError::Stream(_) => None,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            TableError::Io { source, .. } | TableError::Stream(source) => source.kind(),
        }
    }

    /// Whether the table file does not exist, which callers usually treat as
    /// "start with an empty table".
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }
}
