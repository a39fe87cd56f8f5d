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

//! Error types for HCF source loading and line parsing.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a non-header, non-blank line could not be read as a key/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line held a single token (a key with no value).
    TooFewTokens {
        /// Number of whitespace-separated tokens found.
        found: usize,
    },
    /// The line held more than one run of whitespace.
    TooManyTokens {
        /// Number of whitespace-separated tokens found.
        found: usize,
    },
}

impl MalformedReason {
    /// Classify a token count that is not exactly two.
    ///
    /// Returns `None` when `found == 2`, since that is a well-formed entry.
    pub fn from_token_count(found: usize) -> Option<Self> {
        match found {
            2 => None,
            0 | 1 => Some(Self::TooFewTokens { found }),
            _ => Some(Self::TooManyTokens { found }),
        }
    }

    /// Number of tokens the line split into.
    pub fn found(&self) -> usize {
        match *self {
            Self::TooFewTokens { found } | Self::TooManyTokens { found } => found,
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewTokens { found } => {
                write!(f, "not enough values (expected 2 tokens, got {})", found)
            }
            Self::TooManyTokens { found } => {
                write!(f, "too many values (expected 2 tokens, got {})", found)
            }
        }
    }
}

/// An error raised while acquiring an input source.
///
/// Malformed lines are never errors; they travel through a
/// [`Reporter`](crate::Reporter) instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HcfError {
    /// The named source does not exist.
    #[error("file {} doesn't exist", path.display())]
    SourceNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The source exceeds the configured size limit.
    #[error("file '{}' is too large ({actual} bytes, maximum {max} bytes)", path.display())]
    SourceTooLarge {
        /// Path of the oversized source.
        path: PathBuf,
        /// Actual size in bytes.
        actual: u64,
        /// Configured maximum in bytes.
        max: u64,
    },

    /// Any other I/O failure while opening or reading the source.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// Path of the failing source.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },
}

impl HcfError {
    /// Map an I/O error to the matching variant, keeping "not found"
    /// distinct from every other failure.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::SourceNotFound { path },
            _ => Self::Io {
                path,
                message: source.to_string(),
            },
        }
    }

    /// Path of the source this error concerns.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceNotFound { path }
            | Self::SourceTooLarge { path, .. }
            | Self::Io { path, .. } => path,
        }
    }

    /// Whether the source was missing, as opposed to unreadable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}

/// Result type for HCF operations.
pub type HcfResult<T> = Result<T, HcfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_from_token_count() {
        assert_eq!(MalformedReason::from_token_count(2), None);
        assert_eq!(
            MalformedReason::from_token_count(1),
            Some(MalformedReason::TooFewTokens { found: 1 })
        );
        assert_eq!(
            MalformedReason::from_token_count(0),
            Some(MalformedReason::TooFewTokens { found: 0 })
        );
        assert_eq!(
            MalformedReason::from_token_count(3),
            Some(MalformedReason::TooManyTokens { found: 3 })
        );
    }

    #[test]
    fn test_reason_display() {
        let reason = MalformedReason::TooManyTokens { found: 3 };
        assert_eq!(
            reason.to_string(),
            "too many values (expected 2 tokens, got 3)"
        );
        assert_eq!(reason.found(), 3);
    }

    #[test]
    fn test_not_found_is_distinct() {
        let err = HcfError::from_io(
            "missing.hcf",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "file missing.hcf doesn't exist");

        let err = HcfError::from_io(
            "locked.hcf",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("locked.hcf"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_too_large_display() {
        let err = HcfError::SourceTooLarge {
            path: PathBuf::from("big.hcf"),
            actual: 2048,
            max: 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("big.hcf"));
        assert!(msg.contains("2048 bytes"));
        assert_eq!(err.path(), std::path::Path::new("big.hcf"));
    }
}
