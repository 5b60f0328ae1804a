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

//! Splitting one table line into its quoted keys and value tail.

/// The three parts of a data row, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRow<'a> {
    /// Text between the first and second `"`.
    pub document: &'a str,
    /// Text of the next quoted field.
    pub label: &'a str,
    /// Everything after the label's closing quote and its comma:
    /// `min,mean,stdDev,max,v0,...`.
    pub values: &'a str,
}

/// Parses a data row of the form `"doc","label",values...`.
///
/// Returns `None` when the line does not start with `"` or a quoted field is
/// not closed. Quotes inside names are not escaped in this dialect, so a
/// name ends at the first `"` after its opening quote.
///
/// # Examples
///
/// ```
/// use rigstat_csv::parse_row;
///
/// let row = parse_row(r#""doc1","t0LexerTimes",,,,,12,,15"#).unwrap();
/// assert_eq!(row.document, "doc1");
/// assert_eq!(row.label, "t0LexerTimes");
/// assert_eq!(row.values, ",,,,12,,15");
///
/// assert!(parse_row("# comment").is_none());
/// ```
pub fn parse_row(line: &str) -> Option<ParsedRow<'_>> {
    let rest = line.strip_prefix('"')?;
    let (document, rest) = rest.split_once('"')?;

    let label_start = rest.find('"')?;
    let (label, rest) = rest[label_start + 1..].split_once('"')?;

    let values = rest.strip_prefix(',').unwrap_or(rest);
    Some(ParsedRow {
        document,
        label,
        values,
    })
}
