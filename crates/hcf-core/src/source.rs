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

//! Source acquisition: resolving paths to parsed documents.
//!
//! # Size limit
//!
//! Sources larger than [`SourceOptions::max_file_size`] are rejected before
//! any byte is read. The default is [`DEFAULT_MAX_FILE_SIZE`] and can be
//! overridden with the `HCF_MAX_FILE_SIZE` environment variable (bytes).

use crate::document::Document;
use crate::error::{HcfError, HcfResult};
use crate::parser::parse_reader;
use crate::report::{Issue, Reporter};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Default maximum source size (100 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "HCF_MAX_FILE_SIZE";

/// Options for loading sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOptions {
    /// Maximum accepted source size in bytes.
    pub max_file_size: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl SourceOptions {
    /// Read options from the environment, falling back to defaults for
    /// unset or unparsable values.
    pub fn from_env() -> Self {
        let max_file_size = std::env::var(MAX_FILE_SIZE_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE);
        Self { max_file_size }
    }

    /// Override the maximum accepted source size.
    ///
    /// # Examples
    ///
    /// ```
    /// use hcf_core::source::SourceOptions;
    ///
    /// let options = SourceOptions::default().with_max_file_size(1024);
    /// assert_eq!(options.max_file_size, 1024);
    /// ```
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// Open and parse one file.
///
/// A missing file is [`HcfError::SourceNotFound`]; an existing empty file
/// parses to a document holding only the empty default section. The file
/// handle is dropped before this function returns on every path.
pub fn load_file<R: Reporter>(
    path: impl AsRef<Path>,
    options: &SourceOptions,
    reporter: R,
) -> HcfResult<Document> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| HcfError::from_io(path, e))?;

    let size = file
        .metadata()
        .map_err(|e| HcfError::from_io(path, e))?
        .len();
    if size > options.max_file_size {
        return Err(HcfError::SourceTooLarge {
            path: path.to_path_buf(),
            actual: size,
            max: options.max_file_size,
        });
    }

    tracing::debug!(path = %path.display(), bytes = size, "parsing source");
    let name = path.display().to_string();
    parse_reader(BufReader::new(file), &name, reporter)
}

/// The outcome of loading several sources.
#[derive(Debug, Clone)]
pub struct Merged {
    /// All loaded documents overlaid in argument order.
    pub document: Document,
    /// Paths that were loaded.
    pub loaded: Vec<PathBuf>,
    /// Paths that failed to load, with the reason.
    pub failed: Vec<HcfError>,
}

impl Merged {
    /// Whether at least one source was found and parsed.
    pub fn any_loaded(&self) -> bool {
        !self.loaded.is_empty()
    }
}

/// Load every path in order and overlay the results.
///
/// A later source replaces same-named sections of earlier ones entirely.
/// Missing sources are reported as [`Issue::SourceNotFound`] and skipped;
/// other failures are logged and skipped. Nothing here aborts the run.
pub fn load_all<I, P, R>(paths: I, options: &SourceOptions, mut reporter: R) -> Merged
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    R: Reporter,
{
    let mut merged = Merged {
        document: Document::empty(),
        loaded: Vec::new(),
        failed: Vec::new(),
    };

    for path in paths {
        let path = path.as_ref();
        match load_file(path, options, &mut reporter) {
            Ok(doc) => {
                merged.document.overlay(doc);
                merged.loaded.push(path.to_path_buf());
            }
            Err(err) => {
                if err.is_not_found() {
                    reporter.report(&Issue::SourceNotFound {
                        path: path.to_path_buf(),
                    });
                } else {
                    tracing::warn!(
                        path = %err.path().display(),
                        error = %err,
                        "skipping source"
                    );
                }
                merged.failed.push(err);
            }
        }
    }

    merged
}
