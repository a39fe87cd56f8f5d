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

//! Text rendering of a [`Document`].
//!
//! Rendering is one-way: output is meant for reading, and keys wider than
//! the column are not truncated, so it does not always parse back to the
//! same document.

use crate::document::Document;
use std::fmt;

/// Minimum width the key column is padded to.
pub const KEY_WIDTH: usize = 10;

/// Render a document as lines: `name:` per section, then one
/// `key value` line per entry with the key left-justified to [`KEY_WIDTH`].
pub fn render_lines(doc: &Document) -> Vec<String> {
    let mut lines = Vec::with_capacity(doc.len() + doc.entry_count());
    for (name, section) in doc.sections() {
        lines.push(format!("{}:", name));
        for (key, value) in section.iter() {
            lines.push(format!("{:<width$} {}", key, value, width = KEY_WIDTH));
        }
    }
    lines
}

/// Render a document to a string, each line terminated by `\n`.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for line in render_lines(doc) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render_lines(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_single_entry() {
        let mut doc = Document::empty();
        doc.insert("s", "x", "1");
        assert_eq!(render_lines(&doc), vec!["s:", "x          1"]);
    }

    #[test]
    fn test_empty_document_renders_default_header() {
        assert_eq!(render(&Document::new()), "default:\n");
    }

    #[test]
    fn test_long_key_is_not_truncated() {
        let mut doc = Document::empty();
        doc.insert("s", "averyverylongkey", "v");
        assert_eq!(render_lines(&doc)[1], "averyverylongkey v");
    }

    #[test]
    fn test_key_of_exact_width() {
        let mut doc = Document::empty();
        doc.insert("s", "abcdefghij", "v");
        assert_eq!(render_lines(&doc)[1], "abcdefghij v");
    }

    #[test]
    fn test_order_follows_input() {
        let parsed = parse("z 1\nbeta:\nb 2\na 3\nalpha:\nc 4\n");
        assert_eq!(
            render(&parsed.document),
            "default:\n\
             z          1\n\
             beta:\n\
             b          2\n\
             a          3\n\
             alpha:\n\
             c          4\n"
        );
    }

    #[test]
    fn test_display_matches_render() {
        let parsed = parse("net:\nport 8080\n");
        assert_eq!(parsed.document.to_string(), render(&parsed.document));
    }
}
