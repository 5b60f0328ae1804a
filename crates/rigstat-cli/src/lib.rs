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

//! rigstat CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **show**: summarize a metrics table as text or JSON
//! - **record**: append one manually measured run to a table
//! - **normalize**: rewrite a table with fresh statistics in canonical order
//!
//! # Examples
//!
//! ```no_run
//! use rigstat_cli::commands::{normalize, show};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), rigstat_cli::error::CliError> {
//! show(Path::new("metrics.csv"), None, false)?;
//! normalize(Path::new("metrics.csv"), None, false)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
