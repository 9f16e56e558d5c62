//! Knowledge Base
//!
//! Static mapping from canonical category key to its educational content record,
//! plus the quiz question bank. Loaded once at first use and never mutated.
//!
//! Keys are the `&'static str` keys of the literal table in [`records`]. A resolved
//! [`CategoryKey`] is a closed tagged union so callers can tell catalogued keys,
//! verbatim passthrough labels, and the generic bucket apart without string tests.

pub mod quiz_bank;
pub mod records;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Key of the generic bucket record
pub const OBJECT_KEY: &str = "Object";

// ============================================================================
// Category Key
// ============================================================================

/// The one canonical category produced per classification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    /// A key from the static tables (knowledge base entry or a generator-backed target)
    Static(&'static str),
    /// Unmapped high-confidence label, passed through verbatim
    Passthrough(String),
    /// Generic bucket
    Object,
}

impl CategoryKey {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryKey::Static(key) => key,
            CategoryKey::Passthrough(label) => label,
            CategoryKey::Object => OBJECT_KEY,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, CategoryKey::Object)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Category Record
// ============================================================================

/// Knowledge base entry for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecord {
    pub emoji: &'static str,
    /// First-person introduction sentence
    pub introduction: &'static str,
    /// Benefit message
    pub message: &'static str,
    /// Deeper educational fact
    pub explanation: &'static str,
    /// Impact if lost (nature categories only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequences: Option<&'static str>,
    /// Call to action
    pub plea: &'static str,
    /// Exact-match alternative labels
    pub keywords: &'static [&'static str],
}

/// One row of the literal table
#[derive(Debug)]
pub struct CategoryEntry {
    pub key: &'static str,
    pub record: CategoryRecord,
}

// ============================================================================
// Knowledge Base
// ============================================================================

static KNOWLEDGE_BASE: Lazy<KnowledgeBase> =
    Lazy::new(|| KnowledgeBase::from_entries(records::CATEGORY_ENTRIES));

/// Read-only lookup over the category table
pub struct KnowledgeBase {
    entries: &'static [CategoryEntry],
    by_key: HashMap<&'static str, usize>,
    /// keyword → key of the first record (table order) listing it
    by_keyword: HashMap<&'static str, &'static str>,
}

impl KnowledgeBase {
    /// Process-wide instance over the built-in table
    pub fn global() -> &'static KnowledgeBase {
        &KNOWLEDGE_BASE
    }

    pub fn from_entries(entries: &'static [CategoryEntry]) -> Self {
        let mut by_key = HashMap::with_capacity(entries.len());
        let mut by_keyword = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if by_key.insert(entry.key, index).is_some() {
                tracing::warn!("Duplicate knowledge base key '{}', later entry wins", entry.key);
            }
            for keyword in entry.record.keywords {
                by_keyword.entry(*keyword).or_insert(entry.key);
            }
        }

        Self {
            entries,
            by_key,
            by_keyword,
        }
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Record for a raw key string
    pub fn get(&self, key: &str) -> Option<&'static CategoryRecord> {
        let entries = self.entries;
        self.by_key.get(key).map(|&index| &entries[index].record)
    }

    /// Record for a resolved category
    pub fn record(&self, key: &CategoryKey) -> Option<&'static CategoryRecord> {
        self.get(key.as_str())
    }

    /// The table's own `&'static str` for `term`, if `term` is a key
    pub fn canonical_key(&self, term: &str) -> Option<&'static str> {
        let entries = self.entries;
        self.by_key.get(term).map(|&index| entries[index].key)
    }

    /// Key of the first record (table order) whose keyword list contains `term` exactly
    pub fn key_for_keyword(&self, term: &str) -> Option<&'static str> {
        self.by_keyword.get(term).copied()
    }

    /// Catalogued keys in table order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.key)
    }

    /// Turn a caller-supplied key string into a [`CategoryKey`]
    pub fn parse_key(&self, raw: &str) -> CategoryKey {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(OBJECT_KEY) {
            return CategoryKey::Object;
        }
        match self
            .canonical_key(trimmed)
            .or_else(|| self.canonical_key(&trimmed.to_lowercase()))
        {
            Some(key) => CategoryKey::Static(key),
            None => CategoryKey::Passthrough(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_global_table_loads() {
        let kb = KnowledgeBase::global();
        assert!(kb.len() > 80, "expected a large table, got {}", kb.len());
        assert!(kb.contains("oak"));
        assert!(kb.contains("red-bellied-black-snake"));
        assert!(kb.contains("plastic"));
        assert!(kb.contains(OBJECT_KEY));
    }

    #[test]
    fn test_keys_are_unique_and_canonical() {
        let kb = KnowledgeBase::global();
        let mut seen = HashSet::new();
        for key in kb.keys() {
            assert!(seen.insert(key), "duplicate key {}", key);
            if key != OBJECT_KEY {
                assert_eq!(key, key.to_lowercase(), "key {} must be lowercase", key);
            }
        }
    }

    #[test]
    fn test_keywords_are_unique_and_not_keys() {
        let kb = KnowledgeBase::global();
        let mut seen = HashSet::new();
        for entry in records::CATEGORY_ENTRIES {
            for keyword in entry.record.keywords {
                assert!(seen.insert(*keyword), "keyword '{}' listed twice", keyword);
                assert!(!kb.contains(keyword), "keyword '{}' shadows a key", keyword);
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_records_have_content() {
        for entry in records::CATEGORY_ENTRIES {
            let r = &entry.record;
            assert!(!r.emoji.is_empty(), "{} emoji", entry.key);
            assert!(!r.introduction.is_empty(), "{} introduction", entry.key);
            assert!(!r.message.is_empty(), "{} message", entry.key);
            assert!(!r.explanation.is_empty(), "{} explanation", entry.key);
            assert!(!r.plea.is_empty(), "{} plea", entry.key);
        }
    }

    #[test]
    fn test_keyword_lookup() {
        let kb = KnowledgeBase::global();
        assert_eq!(kb.key_for_keyword("golden retriever"), Some("dog"));
        assert_eq!(kb.key_for_keyword("acorn"), Some("oak"));
        assert_eq!(kb.key_for_keyword("golden"), None);
    }

    #[test]
    fn test_parse_key() {
        let kb = KnowledgeBase::global();
        assert_eq!(kb.parse_key("object"), CategoryKey::Object);
        assert_eq!(kb.parse_key("Oak"), CategoryKey::Static("oak"));
        assert_eq!(
            kb.parse_key("xyz123"),
            CategoryKey::Passthrough("xyz123".to_string())
        );
    }

    #[test]
    fn test_category_key_serializes_as_string() {
        let json = serde_json::to_string(&CategoryKey::Static("oak")).unwrap();
        assert_eq!(json, "\"oak\"");
        let json = serde_json::to_string(&CategoryKey::Object).unwrap();
        assert_eq!(json, "\"Object\"");
    }
}
