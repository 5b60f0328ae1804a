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

//! Tables a loader must accept without failing.

use super::HEADER;

/// CRLF endings, blank lines, comments, unquoted rows, lowercase labels and
/// no final newline.
///
/// Loads as document `doc` with lexer times `[3, 4]` and parser times
/// `[7, unmeasured]`.
pub fn messy_table() -> String {
    [
        HEADER,
        "",
        "# copied from the nightly run",
        "doc,t0LexerTimes,1,1.0,0.0,1,1",
        "\"doc\",\"t0lexertimes\",3,3.5,0.7071067811865476,4,3,4",
        "   ",
        "\"doc\",\"T1PARSERTIMES\",,,,,7",
    ]
    .join("\r\n")
}

/// Rows whose label names no metric.
///
/// Loads as documents `known` (lexer times `[5]`) and `ghost` (no runs).
pub fn unknown_labels() -> String {
    format!(
        "{}\n\"ghost\",\"t10Totals\",1,1.0,0.0,1,1\n\"known\",\"t0LexerTimes\",5,5.0,0.0,5,5\n\"known\",\"lexerTimes\",,,,,9\n",
        HEADER
    )
}

/// Cells that do not parse as integers.
///
/// Lexer times load as `[-1, 12, -1, 8, 3]`: text and negative cells become
/// unmeasured, `12.9` truncates and surrounding spaces are ignored.
pub fn bad_cells() -> String {
    format!("{}\n\"doc\",\"t0LexerTimes\",x,y,z,w,abc,12.9,-4, 8 ,3\n", HEADER)
}
