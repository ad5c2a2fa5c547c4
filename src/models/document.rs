//! Ordered in-memory INI document
//!
//! Entries are keyed by `(section, key)`. Sections keep the order in which
//! their first entry was inserted, and keys keep their insertion order within
//! a section, so that serialization is deterministic.

use std::fmt;

use linked_hash_map::LinkedHashMap;

use crate::generator::ini::{write_document, LineEnding};
use crate::parser::ini_parser::{parse_str, ParseError};

/// Key/value pairs of one section, in stored order
pub type SectionEntries = LinkedHashMap<String, String>;

/// Collection of `(section, key) -> value` entries with stable ordering.
///
/// Section names are used verbatim. Keys and values are trimmed of
/// surrounding whitespace; lookups trim the key the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: LinkedHashMap<String, SectionEntries>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Document {
            sections: LinkedHashMap::new(),
        }
    }

    /// Parse INI text into a new document
    pub fn parse_str(content: &str) -> Result<Self, ParseError> {
        parse_str(content)
    }

    /// Get the value stored for `key` in `section`
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key.trim()))
            .map(String::as_str)
    }

    /// Check if an entry exists
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Insert or replace a value.
    ///
    /// A replaced entry keeps its position; a new entry is appended to its
    /// section, and a new section is appended to the document.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let key = key.trim();
        let value = value.trim();

        if let Some(entries) = self.sections.get_mut(section) {
            // `LinkedHashMap::insert` would move an existing key to the back
            if let Some(existing) = entries.get_mut(key) {
                *existing = value.to_string();
            } else {
                entries.insert(key.to_string(), value.to_string());
            }
            return;
        }

        let mut entries = SectionEntries::new();
        entries.insert(key.to_string(), value.to_string());
        self.sections.insert(section.to_string(), entries);
    }

    /// Insert a value only if the entry does not exist yet.
    ///
    /// Returns `false` and leaves the document unchanged when the key is
    /// already present.
    pub fn insert_new(&mut self, section: &str, key: &str, value: &str) -> bool {
        if self.contains(section, key) {
            return false;
        }
        self.set(section, key, value);
        true
    }

    /// Remove an entry, returning whether it was present.
    ///
    /// A section whose last entry is removed disappears from the document.
    pub fn delete(&mut self, section: &str, key: &str) -> bool {
        let Some(entries) = self.sections.get_mut(section) else {
            return false;
        };
        if entries.remove(key.trim()).is_none() {
            return false;
        }
        if entries.is_empty() {
            self.sections.remove(section);
        }
        true
    }

    /// Get a copy of all entries of a section.
    ///
    /// Unknown sections yield an empty map.
    pub fn section_entries(&self, section: &str) -> SectionEntries {
        self.sections.get(section).cloned().unwrap_or_default()
    }

    /// Check if a section holds at least one entry
    pub fn section_exists(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Section names in document order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Sections with their entries, in document order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionEntries)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    /// All entries as `(section, key, value)`, in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections.iter().flat_map(|(section, entries)| {
            entries
                .iter()
                .map(move |(key, value)| (section.as_str(), key.as_str(), value.as_str()))
        })
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.sections.values().map(LinkedHashMap::len).sum()
    }

    /// Check if the document holds no entries
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_document(self, LineEnding::Lf))
    }
}
