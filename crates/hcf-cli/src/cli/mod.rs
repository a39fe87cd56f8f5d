// Dweve HCF - Header Config Format
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

//! Command-line definitions.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Merge HCF files and print the result
    ///
    /// Files are read in order; a section in a later file replaces the
    /// same-named section of an earlier one. Missing files and malformed
    /// lines are reported on stderr and skipped.
    Print {
        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit JSON instead of the text layout
        #[arg(long)]
        json: bool,
    },

    /// Check HCF files for malformed lines
    ///
    /// Parses every file on its own and prints a summary per file. Exits
    /// with failure if any file is missing or has malformed lines.
    Check {
        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a single value from the merged files
    Get {
        /// Section name
        section: String,

        /// Key within the section
        key: String,

        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Value to print when the key is absent
        #[arg(short, long)]
        default: Option<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails; see each command for details.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Print {
                files,
                output,
                json,
            } => commands::print(&files, output.as_deref(), json),
            Commands::Check { files } => commands::check(&files),
            Commands::Get {
                section,
                key,
                files,
                default,
            } => commands::get(&section, &key, &files, default.as_deref()),
        }
    }
}
