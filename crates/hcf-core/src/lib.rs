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

//! Core parser, data model and renderer for the HCF header config format.
//!
//! HCF is a line-oriented format of section headers and whitespace-separated
//! key/value pairs:
//!
//! ```text
//! // entries before the first header land in "default"
//! verbose yes
//!
//! network:
//! host    localhost   // comments run to end of line
//! port    8080
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use hcf_core::{parse, render};
//!
//! let parsed = parse("network:\nhost localhost\nport 8080\n");
//! assert!(parsed.issues.is_empty());
//! assert_eq!(parsed.document.get("network", "port"), Some("8080"));
//!
//! let text = render(&parsed.document);
//! assert!(text.starts_with("default:\nnetwork:\nhost       localhost\n"));
//! ```
//!
//! # Reporting
//!
//! Malformed lines and missing sources are never fatal. They are delivered
//! to a [`Reporter`] as they happen: [`TracingReporter`] logs them,
//! [`CollectingReporter`] keeps them for inspection.

mod document;
mod error;
pub mod normalize;
mod parser;
mod render;
mod report;
pub mod source;

pub use document::{Document, Section, DEFAULT_SECTION};
pub use error::{HcfError, HcfResult, MalformedReason};
pub use normalize::normalize_line;
pub use parser::{classify, parse, parse_lines, parse_reader, parse_str, LineKind, Parsed, Parser};
pub use render::{render, render_lines, KEY_WIDTH};
pub use report::{CollectingReporter, Issue, Reporter, TracingReporter};
pub use source::{load_all, load_file, Merged, SourceOptions};
