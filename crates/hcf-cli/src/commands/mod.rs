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

//! CLI command implementations

mod check;
mod get;
mod print;

pub use check::check;
pub use get::get;
pub use print::print;

use crate::error::CliError;
use hcf_core::{load_all, Merged, SourceOptions, TracingReporter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Load and overlay every file, logging issues as they occur.
///
/// Fails only when not a single file could be loaded.
pub fn load_merged(files: &[PathBuf]) -> Result<Merged, CliError> {
    let options = SourceOptions::from_env();
    let merged = load_all(files, &options, TracingReporter);
    if !merged.any_loaded() {
        return Err(CliError::NoSources);
    }
    tracing::debug!(
        loaded = merged.loaded.len(),
        failed = merged.failed.len(),
        "sources merged"
    );
    Ok(merged)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("-", e)),
    }
}
