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

//! Line-oriented section parser.
//!
//! The parser is a fold over normalized lines. It carries the [`Document`]
//! being built and the name of the current section, and classifies each
//! line as one of [`LineKind`]:
//!
//! 1. a header (`name:`) opens a new, empty section and makes it current
//! 2. a blank line is skipped
//! 3. anything else must be exactly `key value`; other token counts are
//!    reported as [`Issue::MalformedLine`] and skipped
//!
//! Malformed lines never abort parsing.

use crate::document::{Document, DEFAULT_SECTION};
use crate::error::{HcfError, HcfResult, MalformedReason};
use crate::normalize::normalize_line;
use crate::report::{CollectingReporter, Issue, Reporter};
use std::borrow::Cow;
use std::io::BufRead;
use std::path::PathBuf;

/// Classification of one normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `name:`; carries the text before the first colon.
    Header(&'a str),
    /// Nothing left after normalization.
    Blank,
    /// A well-formed `key value` pair.
    Entry(&'a str, &'a str),
    /// Neither blank, header, nor a two-token entry.
    Malformed(MalformedReason),
}

/// Classify an already-normalized line.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.ends_with(':') {
        let name = line.split(':').next().unwrap_or_default();
        return LineKind::Header(name);
    }

    if line.is_empty() {
        return LineKind::Blank;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match MalformedReason::from_token_count(tokens.len()) {
        None => LineKind::Entry(tokens[0], tokens[1]),
        Some(reason) => LineKind::Malformed(reason),
    }
}

/// Incremental parser state for a single source.
#[derive(Debug)]
pub struct Parser<R> {
    document: Document,
    current: String,
    line_num: usize,
    source: Option<PathBuf>,
    reporter: R,
}

impl<R: Reporter> Parser<R> {
    /// Start a parse with a fresh document whose current section is `default`.
    pub fn new(reporter: R) -> Self {
        Self {
            document: Document::new(),
            current: DEFAULT_SECTION.to_string(),
            line_num: 0,
            source: None,
            reporter,
        }
    }

    /// Tag every reported issue with the source it came from.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Feed one raw line.
    pub fn feed(&mut self, raw: &str) {
        self.line_num += 1;
        let line = normalize_line(raw);

        match classify(&line) {
            LineKind::Header(name) => {
                tracing::trace!(line = self.line_num, section = name, "open section");
                self.document.open_section(name);
                self.current = name.to_string();
            }
            LineKind::Blank => {}
            LineKind::Entry(key, value) => {
                self.document.insert(self.current.as_str(), key, value);
            }
            LineKind::Malformed(reason) => {
                self.reporter.report(&Issue::MalformedLine {
                    source: self.source.clone(),
                    line: self.line_num,
                    content: line.clone(),
                    reason,
                });
            }
        }
    }

    /// Name of the section entries currently go to.
    pub fn current_section(&self) -> &str {
        &self.current
    }

    /// Finish the parse and hand back the document.
    pub fn finish(self) -> Document {
        self.document
    }
}

/// Parse an ordered sequence of lines, reporting malformed ones to `reporter`.
pub fn parse_lines<I, S, R>(lines: I, reporter: R) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Reporter,
{
    let mut parser = Parser::new(reporter);
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

/// Parse a whole text buffer.
pub fn parse_str<R: Reporter>(text: &str, reporter: R) -> Document {
    parse_lines(text.lines(), reporter)
}

/// Parse lines read from `reader`.
///
/// `name` labels reported issues and I/O errors. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD and the line is parsed as usual, so only a
/// failing read aborts the source.
pub fn parse_reader<B, R>(mut reader: B, name: &str, reporter: R) -> HcfResult<Document>
where
    B: BufRead,
    R: Reporter,
{
    let mut parser = Parser::new(reporter).with_source(name);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| HcfError::from_io(name, e))?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::debug!(
                source = name,
                line = parser.line_num + 1,
                "replaced invalid UTF-8"
            );
        }
        parser.feed(&line);
    }
    Ok(parser.finish())
}

/// The result of [`parse`]: the document plus every issue raised on the way.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub document: Document,
    pub issues: Vec<Issue>,
}

/// Parse text and collect issues in memory.
pub fn parse(text: &str) -> Parsed {
    let mut reporter = CollectingReporter::new();
    let document = parse_str(text, &mut reporter);
    Parsed {
        document,
        issues: reporter.into_issues(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Section;

    fn entries(section: &Section) -> Vec<(&str, &str)> {
        section.iter().collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("sec:"), LineKind::Header("sec"));
        assert_eq!(classify("a:b:"), LineKind::Header("a"));
        assert_eq!(classify(":"), LineKind::Header(""));
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("k v"), LineKind::Entry("k", "v"));
        assert_eq!(classify("k\tv"), LineKind::Entry("k", "v"));
        assert_eq!(
            classify("k"),
            LineKind::Malformed(MalformedReason::TooFewTokens { found: 1 })
        );
        assert_eq!(
            classify("k v w"),
            LineKind::Malformed(MalformedReason::TooManyTokens { found: 3 })
        );
    }

    #[test]
    fn test_empty_input_has_default() {
        let parsed = parse("");
        assert_eq!(parsed.document.len(), 1);
        assert!(parsed.document.default_section().is_some_and(Section::is_empty));
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn test_entries_before_header_go_to_default() {
        let parsed = parse("a 1\nsec:\nb 2\n");
        assert_eq!(parsed.document.get("default", "a"), Some("1"));
        assert_eq!(parsed.document.get("sec", "b"), Some("2"));
        assert_eq!(parsed.document.get("default", "b"), None);
    }

    #[test]
    fn test_reopened_section_is_emptied() {
        let doc = parse_lines(["sec:", "a 1", "sec:", "b 2"], CollectingReporter::new());
        let sec = doc.section("sec").expect("section exists");
        assert_eq!(entries(sec), vec![("b", "2")]);
    }

    #[test]
    fn test_malformed_line_is_reported_and_skipped() {
        let mut reporter = CollectingReporter::new();
        let doc = parse_lines(["sec:", "a 1 2", "b 3"], &mut reporter);

        assert_eq!(reporter.issues().len(), 1);
        assert_eq!(
            reporter.issues()[0],
            Issue::MalformedLine {
                source: None,
                line: 2,
                content: "a 1 2".to_string(),
                reason: MalformedReason::TooManyTokens { found: 3 },
            }
        );
        let sec = doc.section("sec").expect("section exists");
        assert_eq!(entries(sec), vec![("b", "3")]);
    }

    #[test]
    fn test_malformed_does_not_move_cursor() {
        let parsed = parse("sec:\nlonely\nk v\n");
        assert_eq!(parsed.document.get("sec", "k"), Some("v"));
        assert_eq!(parsed.issues.len(), 1);
    }

    #[test]
    fn test_comment_before_colon_is_not_header() {
        let parsed = parse("foo // bar:\n");
        assert!(!parsed.document.contains_section("foo"));
        assert_eq!(parsed.issues.len(), 1);
        match &parsed.issues[0] {
            Issue::MalformedLine { content, reason, .. } => {
                assert_eq!(content, "foo");
                assert_eq!(*reason, MalformedReason::TooFewTokens { found: 1 });
            }
            other => panic!("unexpected issue: {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_collapse_in_entries() {
        let parsed = parse("key    value\n");
        assert_eq!(parsed.document.get("default", "key"), Some("value"));
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let parsed = parse("s:\nk 1\nk 2\n");
        assert_eq!(parsed.document.get("s", "k"), Some("2"));
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn test_colon_only_header() {
        let parsed = parse(":\nk v\n");
        assert_eq!(parsed.document.get("", "k"), Some("v"));
    }

    #[test]
    fn test_header_with_spaces_in_name() {
        let parsed = parse("my  section:\nk v\n");
        assert_eq!(parsed.document.get("my section", "k"), Some("v"));
    }

    #[test]
    fn test_default_header_resets_default() {
        let parsed = parse("a 1\ndefault:\nb 2\n");
        assert_eq!(parsed.document.get("default", "a"), None);
        assert_eq!(parsed.document.get("default", "b"), Some("2"));
    }

    #[test]
    fn test_url_value_is_cut_by_comment() {
        let parsed = parse("url http://example.com\n");
        // `//` truncates: the value is cut to "http:", which makes the line a header
        assert!(parsed.document.contains_section("url http"));
    }

    #[test]
    fn test_parser_tracks_current_section() {
        let mut parser = Parser::new(CollectingReporter::new());
        assert_eq!(parser.current_section(), "default");
        parser.feed("net:");
        assert_eq!(parser.current_section(), "net");
        parser.feed("   ");
        assert_eq!(parser.current_section(), "net");
    }

    #[test]
    fn test_parse_reader() {
        let input = "s:\nk v\n".as_bytes();
        let mut reporter = CollectingReporter::new();
        let doc = parse_reader(input, "inline", &mut reporter).expect("in-memory read cannot fail");
        assert_eq!(doc.get("s", "k"), Some("v"));
        assert!(reporter.issues().is_empty());
    }

    #[test]
    fn test_parse_reader_tags_source() {
        let input = "k\n".as_bytes();
        let mut reporter = CollectingReporter::new();
        parse_reader(input, "inline.hcf", &mut reporter).expect("in-memory read cannot fail");
        assert!(reporter.issues()[0].to_string().starts_with("inline.hcf:1:"));
    }

    #[test]
    fn test_parse_reader_invalid_utf8_skips_only_that_line() {
        let input: &[u8] = b"sec:\nk v\nbad \xff\xfe x\nz 1\n";
        let mut reporter = CollectingReporter::new();
        let doc = parse_reader(input, "inline", &mut reporter).expect("in-memory read cannot fail");

        assert_eq!(doc.get("sec", "k"), Some("v"));
        assert_eq!(doc.get("sec", "z"), Some("1"));
        assert_eq!(reporter.issues().len(), 1);
        match &reporter.issues()[0] {
            Issue::MalformedLine { line, reason, .. } => {
                assert_eq!(*line, 3);
                assert_eq!(*reason, MalformedReason::TooManyTokens { found: 3 });
            }
            other => panic!("unexpected issue: {:?}", other),
        }
    }

    #[test]
    fn test_parse_reader_crlf_and_missing_final_newline() {
        let input = "s:\r\nk v\r\nlast 1".as_bytes();
        let mut reporter = CollectingReporter::new();
        let doc = parse_reader(input, "inline", &mut reporter).expect("in-memory read cannot fail");
        assert_eq!(doc.get("s", "k"), Some("v"));
        assert_eq!(doc.get("s", "last"), Some("1"));
        assert!(reporter.issues().is_empty());
    }

    #[test]
    fn test_independent_parses() {
        let a = parse("k v\n").document;
        let b = parse("").document;
        assert_eq!(a.get("default", "k"), Some("v"));
        assert_eq!(b.get("default", "k"), None);
    }
}
