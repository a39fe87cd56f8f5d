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

//! Print command - merge sources and render them

use super::{load_merged, write_output};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Merge every file and write the rendered document.
///
/// Later files replace same-named sections of earlier ones. Missing files
/// and malformed lines are logged and skipped.
///
/// # Errors
///
/// Returns `Err` if no file could be loaded, or if writing the output fails.
pub fn print(files: &[PathBuf], output: Option<&Path>, json: bool) -> Result<(), CliError> {
    let merged = load_merged(files)?;

    let content = if json {
        let mut text = serde_json::to_string_pretty(&merged.document)?;
        text.push('\n');
        text
    } else {
        hcf_core::render(&merged.document)
    };

    write_output(&content, output)
}
