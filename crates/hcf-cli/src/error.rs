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

//! Structured error types for the HCF CLI.
//!
//! All command handlers return `Result<(), CliError>`; `main` prints the
//! error and turns it into a failing exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for HCF CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// None of the requested sources could be loaded.
    #[error("no input file could be loaded")]
    NoSources,

    /// `get` found no value and no default was given.
    #[error("key '{key}' not found in section '{section}'")]
    MissingKey {
        /// Section that was searched.
        section: String,
        /// Key that was looked up.
        key: String,
    },

    /// `check` found missing files or malformed lines.
    #[error("{failed} file(s) failed the check")]
    CheckFailed {
        /// Number of failing files.
        failed: usize,
    },

    /// Writing output failed.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The output path, or `-` for stdout.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message.
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Build a [`CliError::MissingKey`].
    pub fn missing_key(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            section: section.into(),
            key: key.into(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
