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

//! Reporting sink for non-fatal parse and load events.
//!
//! Nothing reported here changes the parsed [`Document`](crate::Document);
//! the sink only decides how the event is surfaced.

use crate::error::MalformedReason;
use std::fmt;
use std::path::PathBuf;

/// A non-fatal event raised while loading or parsing a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A non-blank, non-header line that is not exactly `key value`.
    MalformedLine {
        /// Source the line came from, when known.
        source: Option<PathBuf>,
        /// Line number (1-based).
        line: usize,
        /// The normalized line.
        content: String,
        /// Why the line was rejected.
        reason: MalformedReason,
    },
    /// A named source could not be found.
    SourceNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
}

impl Issue {
    /// Whether this is a [`Issue::MalformedLine`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedLine { .. })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine {
                source,
                line,
                content,
                reason,
            } => {
                if let Some(path) = source {
                    write!(f, "{}:", path.display())?;
                }
                write!(
                    f,
                    "{}: ignored malformed line \"{}\": {}",
                    line, content, reason
                )
            }
            Self::SourceNotFound { path } => write!(f, "file {} doesn't exist", path.display()),
        }
    }
}

/// Receives issues as soon as they occur.
pub trait Reporter {
    /// Handle one issue.
    fn report(&mut self, issue: &Issue);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, issue: &Issue) {
        (**self).report(issue);
    }
}

/// Fans each issue out to both reporters, first `A` then `B`.
impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn report(&mut self, issue: &Issue) {
        self.0.report(issue);
        self.1.report(issue);
    }
}

/// Emits every issue as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, issue: &Issue) {
        match issue {
            Issue::MalformedLine {
                source,
                line,
                content,
                reason,
            } => {
                let source = source
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                tracing::warn!(
                    source = %source,
                    line = *line,
                    content = %content,
                    reason = %reason,
                    "ignored malformed line"
                );
            }
            Issue::SourceNotFound { path } => {
                tracing::warn!(path = %path.display(), "file doesn't exist");
            }
        }
    }
}

/// Keeps every issue in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    issues: Vec<Issue>,
}

impl CollectingReporter {
    /// Create a reporter with no issues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues received so far.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consume the reporter, returning its issues.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Number of [`Issue::MalformedLine`] issues received.
    pub fn malformed_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_malformed()).count()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, issue: &Issue) {
        self.issues.push(issue.clone());
    }
}
