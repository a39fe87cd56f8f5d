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

//! Check command - per-file parse report

use crate::error::CliError;
use colored::Colorize;
use hcf_core::{
    load_file, CollectingReporter, HcfError, Issue, Reporter, SourceOptions, TracingReporter,
};
use std::path::PathBuf;

/// Parse each file on its own and print a summary line per file.
///
/// Every issue is logged as it happens. A file fails the check when it
/// cannot be loaded or holds at least one malformed line.
///
/// # Output
///
/// ```text
/// ✓ app.hcf
///   Sections: 3
///   Entries: 12
/// ✗ broken.hcf (2 malformed lines)
/// ```
///
/// # Errors
///
/// Returns [`CliError::CheckFailed`] when any file fails.
pub fn check(files: &[PathBuf]) -> Result<(), CliError> {
    let options = SourceOptions::from_env();
    let mut failed = 0;

    for file in files {
        let mut collected = CollectingReporter::new();

        match load_file(file, &options, (TracingReporter, &mut collected)) {
            Ok(doc) => {
                let malformed = collected.malformed_count();
                if malformed == 0 {
                    println!("{} {}", "✓".green().bold(), file.display());
                    println!("  Sections: {}", doc.len());
                    println!("  Entries: {}", doc.entry_count());
                } else {
                    failed += 1;
                    println!(
                        "{} {} ({} malformed line{})",
                        "✗".red().bold(),
                        file.display(),
                        malformed,
                        if malformed == 1 { "" } else { "s" }
                    );
                }
            }
            Err(err) => {
                failed += 1;
                if let HcfError::SourceNotFound { path } = &err {
                    TracingReporter.report(&Issue::SourceNotFound { path: path.clone() });
                }
                println!("{} {} ({})", "✗".red().bold(), file.display(), err);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed { failed });
    }
    Ok(())
}
