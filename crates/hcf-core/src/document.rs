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

//! Document structure for parsed HCF.

use indexmap::IndexMap;

/// Name of the implicit section that collects entries before the first header.
pub const DEFAULT_SECTION: &str = "default";

/// An ordered set of key/value entries.
///
/// Keys are unique. Re-inserting a key replaces its value but keeps the
/// position of the first insertion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the section holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A parsed HCF document: section name to [`Section`], in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only the empty default section.
    ///
    /// Every call builds a fresh instance; documents never share sections.
    pub fn new() -> Self {
        let mut sections = IndexMap::with_capacity(8);
        sections.insert(DEFAULT_SECTION.to_string(), Section::new());
        Self { sections }
    }

    /// Create a document with no sections at all.
    ///
    /// Used as the accumulator when overlaying several sources.
    pub fn empty() -> Self {
        Self {
            sections: IndexMap::new(),
        }
    }

    /// Replace (or create) `name` with a new empty section and return it.
    ///
    /// An existing section of the same name loses all its entries but keeps
    /// its position in iteration order.
    pub fn open_section(&mut self, name: impl Into<String>) -> &mut Section {
        let name = name.into();
        match self.sections.entry(name) {
            indexmap::map::Entry::Occupied(mut slot) => {
                slot.insert(Section::new());
                slot.into_mut()
            }
            indexmap::map::Entry::Vacant(slot) => slot.insert(Section::new()),
        }
    }

    /// Get a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// The implicit default section, if it has not been dropped by an overlay.
    pub fn default_section(&self) -> Option<&Section> {
        self.section(DEFAULT_SECTION)
    }

    /// Whether a section called `name` exists.
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Get the value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Get the value of `key` in `section`, or `default` when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use hcf_core::parse;
    ///
    /// let doc = parse("net:\nport 8080\n").document;
    /// assert_eq!(doc.get_or("net", "port", "80"), "8080");
    /// assert_eq!(doc.get_or("net", "host", "localhost"), "localhost");
    /// ```
    pub fn get_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(default)
    }

    /// Insert a value, creating the section if it does not exist yet.
    ///
    /// Unlike [`Document::open_section`], an existing section keeps its entries.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key, value)
    }

    /// Overlay `other` onto `self`.
    ///
    /// Each section of `other` replaces the same-named section of `self`
    /// entirely; sections are not merged key by key.
    pub fn overlay(&mut self, other: Document) {
        for (name, section) in other.sections {
            self.sections.insert(name, section);
        }
    }

    /// Iterate sections in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections (only possible for
    /// [`Document::empty`] accumulators).
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_default() {
        let doc = Document::new();
        assert_eq!(doc.len(), 1);
        assert!(doc.default_section().is_some_and(Section::is_empty));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Document::new();
        let b = Document::new();
        a.insert(DEFAULT_SECTION, "k", "v");
        assert_eq!(a.get(DEFAULT_SECTION, "k"), Some("v"));
        assert_eq!(b.get(DEFAULT_SECTION, "k"), None);
    }

    #[test]
    fn test_open_section_replaces_and_keeps_position() {
        let mut doc = Document::new();
        doc.open_section("a").insert("x", "1");
        doc.open_section("b");
        doc.open_section("a").insert("y", "2");

        let names: Vec<&str> = doc.sections().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["default", "a", "b"]);
        assert_eq!(doc.get("a", "x"), None);
        assert_eq!(doc.get("a", "y"), Some("2"));
    }

    #[test]
    fn test_section_overwrite_keeps_first_position() {
        let mut section = Section::new();
        section.insert("a", "1");
        section.insert("b", "2");
        assert_eq!(section.insert("a", "3"), Some("1".to_string()));
        let entries: Vec<_> = section.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_get_or() {
        let mut doc = Document::new();
        doc.insert("net", "port", "8080");
        assert_eq!(doc.get_or("net", "port", "80"), "8080");
        assert_eq!(doc.get_or("net", "host", "localhost"), "localhost");
        assert_eq!(doc.get_or("missing", "port", "80"), "80");
    }

    #[test]
    fn test_insert_keeps_existing_entries() {
        let mut doc = Document::new();
        doc.insert("s", "a", "1");
        doc.insert("s", "b", "2");
        assert_eq!(doc.section("s").map(Section::len), Some(2));
        assert_eq!(doc.entry_count(), 2);
    }

    #[test]
    fn test_overlay_replaces_whole_sections() {
        let mut base = Document::new();
        base.insert("s", "a", "1");
        base.insert("t", "keep", "yes");

        let mut top = Document::new();
        top.insert("s", "b", "2");

        base.overlay(top);
        assert_eq!(base.get("s", "a"), None);
        assert_eq!(base.get("s", "b"), Some("2"));
        assert_eq!(base.get("t", "keep"), Some("yes"));
    }

    #[test]
    fn test_empty_accumulator() {
        let mut acc = Document::empty();
        assert!(acc.is_empty());
        acc.overlay(Document::new());
        assert!(acc.contains_section(DEFAULT_SECTION));
    }

    #[test]
    fn test_section_from_iter() {
        let section: Section = [("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(section.get("y"), Some("2"));
        assert!(section.contains_key("x"));
    }
}
