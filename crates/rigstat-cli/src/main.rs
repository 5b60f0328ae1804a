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

//! rigstat Command Line Interface

use clap::Parser;
use rigstat_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// rigstat - regression run statistics
///
/// Inspects and maintains the metrics tables written by lexer/parser
/// regression test rigs.
///
/// # Examples
///
/// ```bash
/// # Summarize every document
/// rigstat show metrics.csv
///
/// # Append a run measured by hand
/// rigstat record metrics.csv grammars/expr.txt -m t0LexerTimes=12 -m t1ParserTimes=40
///
/// # Recompute statistics after editing the file
/// rigstat normalize metrics.csv
/// ```
#[derive(Parser)]
#[command(name = "rigstat")]
#[command(author, version, about = "rigstat - regression run statistics", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rigstat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rigstat=info"))
    };

    // stdout carries command output only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
