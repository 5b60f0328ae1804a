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

//! Well-formed tables.
//!
//! Every fixture here is in canonical form: all metric rows present, in
//! metric order, with statistics columns matching the values.

use super::HEADER;

/// Header only.
pub fn empty_table() -> String {
    format!("{}\n", HEADER)
}

/// One document whose lexer times are `12, unmeasured, 15, 20`.
///
/// The lexer row summarizes to min 12, mean 47/3 and max 20 over three
/// samples; the other metrics were never measured.
pub fn single_document() -> String {
    let mut text = empty_table();
    text.push_str(&lexer_row(
        "doc1.txt",
        "12,15.666666666666666,4.041451884327381,20,12,,15,20",
    ));
    for label in &LABELS[1..] {
        text.push_str(&format!(
            "\"doc1.txt\",\"{}\",9223372036854775807,0.0,0.0,-9223372036854775808,,,,\n",
            label
        ));
    }
    text
}

/// Two documents with two runs each, every metric measured.
pub fn multi_document() -> String {
    let mut text = empty_table();
    for document in ["grammars/a.g4", "grammars/b.g4"] {
        for label in LABELS {
            text.push_str(&format!(
                "\"{}\",\"{}\",2,3.0,1.4142135623730951,4,2,4\n",
                document, label
            ));
        }
    }
    text
}

/// Table written before the tree metrics existed: seven rows per document.
pub fn legacy_seven_metrics() -> String {
    let mut text = empty_table();
    for label in &LABELS[..7] {
        text.push_str(&format!("\"old.txt\",\"{}\",1,1.0,0.0,1,1\n", label));
    }
    text
}

/// Metric-type labels in enumeration order.
pub const LABELS: [&str; 10] = [
    "t0LexerTimes",
    "t1ParserTimes",
    "t2LexerErrors",
    "t3ParserErrors",
    "t4Ambiguities",
    "t5WeakContexts",
    "t6StrongContexts",
    "t7LexerTokens",
    "t8ParseTreeDepth",
    "t9ParseTreeNodes",
];

fn lexer_row(document: &str, tail: &str) -> String {
    format!("\"{}\",\"{}\",{}\n", document, LABELS[0], tail)
}
