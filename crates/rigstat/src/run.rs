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

//! The regression run driver.
//!
//! A run loads the metrics table, measures each input document through a
//! [`SampleSource`], appends the sample under the document's key and saves
//! the table once at the end. Failures are contained: an unreadable table
//! starts the run empty, a failed measurement skips that document, and a
//! failed save is reported in the [`RunSummary`] after all documents ran.

use crate::config::RunConfig;
use rigstat_core::SampleVector;
use rigstat_csv::{LoadReport, Table, TableError};
use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

/// Measures one test document.
///
/// Implemented for every `FnMut(&Path) -> Result<SampleVector, E>`, so a
/// closure can stand in for a full test rig.
pub trait SampleSource {
    /// Failure reported for a document that could not be measured.
    type Error: fmt::Display;

    /// Runs the lexer and parser over `document` and returns what was measured.
    ///
    /// Quantities the rig did not measure stay unmeasured in the sample.
    fn run_one_test(&mut self, document: &Path) -> Result<SampleVector, Self::Error>;
}

impl<F, E> SampleSource for F
where
    F: FnMut(&Path) -> Result<SampleVector, E>,
    E: fmt::Display,
{
    type Error = E;

    fn run_one_test(&mut self, document: &Path) -> Result<SampleVector, E> {
        self(document)
    }
}

/// A document whose measurement failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    /// Table key of the document.
    pub document: String,
    /// Rendered error of the sample source.
    pub message: String,
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.document, self.message)
    }
}

/// Outcome of [`RegressionRun::run`].
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Counters of the table load, if a table file was read.
    pub load: Option<LoadReport>,
    /// Keys of the documents whose sample was recorded, in input order.
    pub processed: Vec<String>,
    /// Documents that could not be measured.
    pub failures: Vec<DocumentFailure>,
    /// Why the table could not be saved, if it could not.
    pub save_error: Option<TableError>,
}

impl RunSummary {
    /// Whether every document was measured and the table was saved.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.save_error.is_none()
    }
}

/// Drives one regression run over a set of input documents.
///
/// # Examples
///
/// ```
/// use rigstat::{MetricType, RegressionRun, RunConfig, SampleVector};
/// use std::path::Path;
///
/// let rig = |doc: &Path| -> Result<SampleVector, String> {
///     if doc.ends_with("broken.txt") {
///         return Err("lexer crashed".to_string());
///     }
///     Ok(SampleVector::from_pairs([(MetricType::ParserTime, 8)]))
/// };
///
/// let mut run = RegressionRun::new(RunConfig::new(), rig);
/// let summary = run.run(["a.txt", "broken.txt"]);
///
/// assert_eq!(summary.processed, vec!["a.txt"]);
/// assert_eq!(summary.failures[0].message, "lexer crashed");
/// assert!(!run.table().contains("broken.txt"));
/// ```
#[derive(Debug)]
pub struct RegressionRun<S> {
    config: RunConfig,
    source: S,
    table: Table,
}

impl<S: SampleSource> RegressionRun<S> {
    /// Creates a run with an empty table.
    pub fn new(config: RunConfig, source: S) -> Self {
        Self {
            config,
            source,
            table: Table::new(),
        }
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The in-memory table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Mutable access to the in-memory table.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Consumes the run and returns its table.
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Loads all `inputs`, measures each one, then saves the table.
    pub fn run<I, P>(&mut self, inputs: I) -> RunSummary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = RunSummary {
            load: self.load_table(),
            ..RunSummary::default()
        };

        for input in inputs {
            match self.run_document(input.as_ref()) {
                Ok(key) => summary.processed.push(key),
                Err(failure) => summary.failures.push(failure),
            }
        }

        summary.save_error = self.save_table().err();
        info!(
            processed = summary.processed.len(),
            failed = summary.failures.len(),
            saved = summary.save_error.is_none(),
            "regression run finished"
        );
        summary
    }

    /// Replaces the in-memory table with the configured table file.
    ///
    /// Returns `None` when no table path is configured or the file could
    /// not be read; the table is then empty. A missing file is the normal
    /// first-run case and is not warned about.
    pub fn load_table(&mut self) -> Option<LoadReport> {
        let path = self.config.table_path.as_deref()?;
        self.table.clear();

        match self.table.load(path) {
            Ok(report) => {
                info!(
                    path = %path.display(),
                    documents = self.table.len(),
                    dropped = report.dropped,
                    "loaded metrics table"
                );
                Some(report)
            }
            Err(e) if e.is_not_found() => {
                info!(path = %path.display(), "no metrics table yet, starting empty");
                None
            }
            Err(e) => {
                warn!(error = %e, "could not load metrics table, starting empty");
                self.table.clear();
                None
            }
        }
    }

    /// Measures `input` and appends the sample under its document key.
    ///
    /// Returns the key on success. On failure nothing is appended.
    pub fn run_document(&mut self, input: &Path) -> Result<String, DocumentFailure> {
        let key = self.config.document_key(input);
        debug!(input = %input.display(), document = %key, "running test");

        match self.source.run_one_test(input) {
            Ok(sample) => {
                self.table.append_sample(&key, sample);
                info!(document = %key, "recorded sample");
                Ok(key)
            }
            Err(e) => {
                let failure = DocumentFailure {
                    document: key,
                    message: e.to_string(),
                };
                warn!(document = %failure.document, error = %failure.message, "test run failed");
                Err(failure)
            }
        }
    }

    /// Writes the table to the configured table file, if any.
    pub fn save_table(&mut self) -> Result<(), TableError> {
        let Some(path) = self.config.table_path.as_deref() else {
            return Ok(());
        };

        let result = if self.config.atomic_save {
            save_atomic(&mut self.table, path)
        } else {
            self.table.save(path)
        };
        if let Err(e) = &result {
            error!(error = %e, "could not save metrics table");
        }
        result
    }
}

/// Writes `table` to a temporary file next to `path` and renames it over
/// `path`.
fn save_atomic(table: &mut Table, path: &Path) -> Result<(), TableError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| TableError::io(path, e))?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        table.save_to(&mut writer).map_err(|e| e.with_path(path))?;
        writer.flush().map_err(|e| TableError::io(path, e))?;
    }
    file.persist(path).map_err(|e| TableError::io(path, e.error))?;
    debug!(path = %path.display(), "saved metrics table atomically");
    Ok(())
}
