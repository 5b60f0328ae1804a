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

//! The metrics table and its CSV persistence.

use crate::error::{Result, TableError};
use crate::row::parse_row;
use rigstat_core::{History, SampleVector};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Header row written at the top of every table file.
pub const HEADER: &str = r#""testDocName","metricType","min","mean","stdDev","max","values""#;

/// Counters gathered while loading a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines read, header included.
    pub lines: usize,
    /// Rows merged into a history.
    pub rows: usize,
    /// Rows whose metric-type label was not recognized.
    pub dropped: usize,
    /// Lines after the header that are not data rows.
    pub skipped: usize,
}

/// Run histories of all test documents, keyed by document name.
///
/// Documents are kept in ascending name order, which is also the order in
/// which they are saved, so that successive saves of the same data are
/// byte-identical and diff cleanly.
///
/// # Examples
///
/// ```
/// use rigstat_core::{MetricType, SampleVector};
/// use rigstat_csv::Table;
///
/// let mut table = Table::new();
/// table.append_sample("b.txt", SampleVector::from_pairs([(MetricType::LexerTime, 3)]));
/// table.append_sample("a.txt", SampleVector::from_pairs([(MetricType::LexerTime, 5)]));
///
/// let mut out = Vec::new();
/// table.save_to(&mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
///
/// let first_row = text.lines().nth(1).unwrap();
/// assert!(first_row.starts_with(r#""a.txt","t0LexerTimes",5,5.0,0.0,5,5"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    documents: BTreeMap<String, History>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the history of `name`, creating an empty one on first use.
    pub fn ensure_document(&mut self, name: &str) -> &mut History {
        self.documents.entry(name.to_owned()).or_default()
    }

    /// Appends the sample of one run of document `name`.
    pub fn append_sample(&mut self, name: &str, sample: SampleVector) {
        self.ensure_document(name).append(sample);
    }

    /// History of `name`, if the document is known.
    pub fn get(&self, name: &str) -> Option<&History> {
        self.documents.get(name)
    }

    /// Mutable history of `name`, if the document is known.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut History> {
        self.documents.get_mut(name)
    }

    /// Whether `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Document names in ascending order.
    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// `(name, history)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &History)> {
        self.documents.iter().map(|(name, history)| (name.as_str(), history))
    }

    /// Mutable `(name, history)` pairs in ascending name order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut History)> {
        self.documents
            .iter_mut()
            .map(|(name, history)| (name.as_str(), history))
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the table holds no document.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Removes every document.
    pub fn clear(&mut self) {
        self.documents.clear();
    }

    /// Merges the table file at `path` into this table.
    ///
    /// See [`load_from`](Self::load_from) for the accepted content.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] if the file cannot be opened or read.
    /// [`TableError::is_not_found`] distinguishes a missing file.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TableError::io(path, e))?;
        let report = self
            .load_from(BufReader::new(file))
            .map_err(|e| e.with_path(path))?;
        debug!(
            path = %path.display(),
            documents = self.len(),
            rows = report.rows,
            "loaded metrics table"
        );
        Ok(report)
    }

    /// Merges table rows read from `reader` into this table.
    ///
    /// The first line is always treated as the header and ignored. Each
    /// following line that starts with `"` is split into document name,
    /// metric-type label and values; the document entry is created if
    /// needed and the values are merged into its history. Lines that do not
    /// start with a quote are skipped, rows with an unknown label are
    /// dropped, and malformed cells load as unmeasured. Invalid UTF-8 is
    /// replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Stream`] only if reading from `reader` fails.
    pub fn load_from<R: BufRead>(&mut self, mut reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            report.lines += 1;
            if report.lines == 1 {
                continue;
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(&['\n', '\r'][..]);
            let Some(row) = parse_row(line) else {
                report.skipped += 1;
                if !line.trim().is_empty() {
                    debug!(line = report.lines, "skipping non-row line");
                }
                continue;
            };

            let history = self.ensure_document(row.document);
            if history.load_row(row.label, row.values) {
                report.rows += 1;
            } else {
                report.dropped += 1;
                debug!(
                    line = report.lines,
                    document = row.document,
                    label = row.label,
                    "dropping row with unknown metric type"
                );
            }
        }
        Ok(report)
    }

    /// Writes the whole table to `path`, replacing any existing file.
    ///
    /// The file is written in place; an interrupted save can leave it
    /// truncated.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] if the file cannot be created or written.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| TableError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.save_to(&mut writer).map_err(|e| e.with_path(path))?;
        writer.flush().map_err(|e| TableError::io(path, e))?;
        debug!(path = %path.display(), documents = self.len(), "saved metrics table");
        Ok(())
    }

    /// Writes the header row and every document's rows to `writer`.
    ///
    /// Documents are written in ascending name order; each document's
    /// statistics are brought up to date first and its rows follow
    /// metric-type order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Stream`] if writing fails.
    pub fn save_to<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", HEADER)?;
        for (name, history) in &mut self.documents {
            history.write_rows(name, writer)?;
        }
        Ok(())
    }

    /// The table as it would be saved.
    pub fn to_csv_string(&mut self) -> String {
        let mut buffer = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.save_to(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
