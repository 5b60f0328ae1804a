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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use rigstat_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a metrics table
    ///
    /// Prints min, mean, standard deviation and max of every metric for each
    /// document, plus the combined lexer and parser time.
    Show {
        /// Metrics table file
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Only show this document
        #[arg(short, long, value_name = "NAME")]
        document: Option<String>,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Append one manually measured run
    ///
    /// Values are given as LABEL=VALUE pairs using the metric-type labels of
    /// the table file, for example `-m t0LexerTimes=12`. Labels are matched
    /// case-insensitively; metrics not given stay unmeasured.
    Record {
        /// Metrics table file, created if missing
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Test document path
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,

        /// Measured value as LABEL=VALUE
        #[arg(short, long = "metric", value_name = "LABEL=VALUE")]
        metrics: Vec<String>,

        /// Source directory stripped from the document path to form its key
        #[arg(short, long, value_name = "DIR")]
        source_dir: Option<PathBuf>,
    },

    /// Rewrite a table in normalized form
    ///
    /// Recomputes every statistics column, writes documents in name order and
    /// metric rows in metric order, and drops rows the loader ignores.
    Normalize {
        /// Metrics table file
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Output file path (defaults to rewriting TABLE)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Check only (exit 1 if not normalized)
        #[arg(short, long)]
        check: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the table cannot be read or written, an argument is
    /// invalid, or a check fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Show {
                table,
                document,
                json,
            } => commands::show(&table, document.as_deref(), json),
            Commands::Record {
                table,
                document,
                metrics,
                source_dir,
            } => commands::record(&table, &document, &metrics, source_dir),
            Commands::Normalize {
                table,
                output,
                check,
            } => commands::normalize(&table, output.as_deref(), check),
        }
    }
}
