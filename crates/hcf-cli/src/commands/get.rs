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

//! Get command - look up a single value

use super::load_merged;
use crate::error::CliError;
use std::path::PathBuf;

/// Print the value of `key` in `section` of the merged files.
///
/// # Errors
///
/// Returns `Err` if no file could be loaded, or if the key is absent and no
/// `default` was supplied.
pub fn get(
    section: &str,
    key: &str,
    files: &[PathBuf],
    default: Option<&str>,
) -> Result<(), CliError> {
    let merged = load_merged(files)?;

    let value = match (merged.document.get(section, key), default) {
        (Some(value), _) => value,
        (None, Some(default)) => default,
        (None, None) => return Err(CliError::missing_key(section, key)),
    };

    println!("{}", value);
    Ok(())
}
