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

//! Configuration of a regression run.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Settings for a [`RegressionRun`](crate::RegressionRun).
///
/// Fields are public so that struct-update syntax works; the `with_*`
/// builders are shorthands.
///
/// # Examples
///
/// ```
/// # use rigstat::RunConfig;
/// let config = RunConfig {
///     atomic_save: true,
///     ..RunConfig::new().with_table_path("metrics.csv")
/// };
/// assert!(config.table_path.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Table file loaded at run start and saved at run end (default: none).
    ///
    /// Without a path the run only accumulates samples in memory.
    pub table_path: Option<PathBuf>,

    /// Source directory whose prefix is removed from input paths (default: none).
    ///
    /// Everything up to and including the last occurrence of
    /// `<source_dir>/` in an input path is dropped to form the document key,
    /// so tables stay valid when the checkout moves. Inputs that do not
    /// contain the directory keep their full path as key.
    pub source_dir: Option<PathBuf>,

    /// Save through a temporary file renamed over the table (default: `false`).
    ///
    /// An interrupted save then leaves the previous table intact.
    pub atomic_save: bool,
}

impl RunConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table file.
    pub fn with_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_path = Some(path.into());
        self
    }

    /// Sets the source directory stripped from document keys.
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Enables or disables atomic saves.
    pub fn with_atomic_save(mut self, atomic: bool) -> Self {
        self.atomic_save = atomic;
        self
    }

    /// The table key under which the samples of `input` are stored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rigstat::RunConfig;
    /// # use std::path::Path;
    /// let config = RunConfig::new().with_source_dir("tests/inputs");
    /// assert_eq!(config.document_key(Path::new("/ci/tests/inputs/a/b.txt")), "a/b.txt");
    /// assert_eq!(config.document_key(Path::new("other/c.txt")), "other/c.txt");
    /// ```
    pub fn document_key(&self, input: &Path) -> String {
        let text = input.to_string_lossy();
        let Some(dir) = &self.source_dir else {
            return text.into_owned();
        };

        let mut prefix = dir.to_string_lossy();
        if !prefix.ends_with('/') {
            prefix = Cow::Owned(format!("{}/", prefix));
        }
        match text.rfind(&*prefix) {
            Some(start) => text[start + prefix.len()..].to_owned(),
            None => text.into_owned(),
        }
    }
}
