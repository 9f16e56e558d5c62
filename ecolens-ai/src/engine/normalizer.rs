// Term Normalizer
//
// Concept: Expand a raw detection into the de-duplicated term set the resolver
// matches against. Compound labels are split on commas and on whitespace so a
// label like "oak tree, forest" also contributes "oak", "tree" and "forest".
//
// Invariant: every member of a TermSet is non-empty, lowercase, longer than two
// characters, and clear of the negative/placeholder/misleading term lists.

use crate::types::DetectionResult;
use std::collections::{BTreeSet, HashSet};

/// Substrings marking a negative or placeholder label ("no person", "unknown", ...)
const NEGATIVE_SUBSTRINGS: &[&str] = &[
    "no person",
    "no people",
    "no human",
    "no one",
    "nobody",
    "nothing",
    "unknown",
    "unidentified",
    "unclear",
    "no object",
    "no detection",
];

/// Labels that are misleading on their own (the photographer, not the subject)
const MISLEADING_TERMS: &[&str] = &["person", "people", "human", "man", "woman", "adult", "child"];

const STOPWORDS: &[&str] = &["the", "and", "or"];

const MIN_TERM_CHARS: usize = 3;

/// Order-irrelevant set of normalized terms
///
/// Terms keep first-seen order (primary label first) so resolver tiers that
/// return "the first match" are deterministic. Equality is set equality.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    /// Primary label, verbatim (trimmed), when it survived filtering
    primary: Option<String>,
    terms: Vec<String>,
}

impl TermSet {
    /// Build a term set from already-expanded terms
    ///
    /// Terms are lowercased and filtered like [`normalize`] output, but not split.
    /// The first admissible term becomes the primary label.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = TermSet::default();
        for term in terms {
            let raw = term.as_ref().trim();
            let lowered = raw.to_lowercase();
            if is_admissible(&lowered) {
                if set.primary.is_none() {
                    set.primary = Some(raw.to_string());
                }
                set.push(lowered);
            }
        }
        set
    }

    fn push(&mut self, term: String) {
        if !self.terms.contains(&term) {
            self.terms.push(term);
        }
    }

    /// Primary label, verbatim, if it survived filtering
    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// True if any of `candidates` is a member
    pub fn contains_any(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|c| self.contains(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Order-independent view for comparisons and display
    pub fn as_set(&self) -> BTreeSet<&str> {
        self.iter().collect()
    }
}

impl PartialEq for TermSet {
    fn eq(&self, other: &Self) -> bool {
        self.as_set() == other.as_set()
    }
}

impl Eq for TermSet {}

/// Expand a detection into its normalized term set
///
/// Steps:
/// 1. Primary name and every secondary concept, lowercased
/// 2. Comma-separated pieces of every term
/// 3. Whitespace-separated words (> 2 chars) of every term
/// 4. De-duplicate
/// 5. Drop negative/placeholder/misleading terms, stopwords and short terms
pub fn normalize(detection: &DetectionResult) -> TermSet {
    let mut expanded: Vec<String> = std::iter::once(detection.name.as_str())
        .chain(detection.all_concepts.iter().map(String::as_str))
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    // Step 2: comma splits
    let comma_pieces: Vec<String> = expanded
        .iter()
        .filter(|t| t.contains(','))
        .flat_map(|t| t.split(','))
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect();
    expanded.extend(comma_pieces);

    // Step 3: words of every term (including comma pieces)
    let words: Vec<String> = expanded
        .iter()
        .flat_map(|t| t.split_whitespace())
        .map(|w| w.trim_matches(',').to_string())
        .filter(|w| w.chars().count() > 2)
        .collect();
    expanded.extend(words);

    // Steps 4-5
    let mut seen = HashSet::new();
    let mut set = TermSet::default();
    for term in expanded {
        if seen.insert(term.clone()) && is_admissible(&term) {
            set.push(term);
        }
    }

    let primary_lower = detection.name.trim().to_lowercase();
    if set.contains(&primary_lower) {
        set.primary = Some(detection.name.trim().to_string());
    }

    tracing::debug!(
        "Normalized '{}' (+{} concepts) into {} terms",
        detection.name,
        detection.all_concepts.len(),
        set.len()
    );

    set
}

/// Membership test for the TermSet invariant
fn is_admissible(term: &str) -> bool {
    if term.chars().count() < MIN_TERM_CHARS {
        return false;
    }
    if STOPWORDS.contains(&term) || MISLEADING_TERMS.contains(&term) {
        return false;
    }
    !NEGATIVE_SUBSTRINGS.iter().any(|neg| term.contains(neg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DetectionResult;

    fn detection(name: &str, concepts: &[&str]) -> DetectionResult {
        DetectionResult::host_supplied(name, 0.8, concepts.iter().copied())
    }

    #[test]
    fn test_splits_commas_and_words() {
        let terms = normalize(&detection("Oak tree, forest", &["green leaves"]));

        for expected in ["oak tree, forest", "oak tree", "forest", "oak", "tree", "green leaves", "green", "leaves"] {
            assert!(terms.contains(expected), "missing '{}'", expected);
        }
    }

    #[test]
    fn test_removes_negative_and_misleading_terms() {
        let terms = normalize(&detection("person", &["no person", "nobody around", "unknown", "dog", "man"]));

        assert!(!terms.contains("person"));
        assert!(!terms.contains("no person"));
        assert!(!terms.contains("nobody around"));
        assert!(!terms.contains("unknown"));
        assert!(!terms.contains("man"));
        assert!(terms.contains("dog"));
        // "around" survives as a word of the rejected compound label
        assert!(terms.contains("around"));
    }

    #[test]
    fn test_drops_short_terms_and_stopwords() {
        let terms = normalize(&detection("the ox and the sea", &["or"]));

        assert!(!terms.contains("the"));
        assert!(!terms.contains("and"));
        assert!(!terms.contains("ox"));
        assert!(!terms.contains("or"));
        assert!(terms.contains("sea"));
    }

    #[test]
    fn test_empty_detection_yields_empty_set() {
        let terms = normalize(&detection("", &[]));
        assert!(terms.is_empty());
        assert!(terms.primary().is_none());
    }

    #[test]
    fn test_primary_is_kept_verbatim() {
        let terms = normalize(&detection("  Golden retriever ", &["dog"]));
        assert_eq!(terms.primary(), Some("Golden retriever"));

        let filtered = normalize(&detection("person", &["dog"]));
        assert_eq!(filtered.primary(), None);
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = TermSet::from_terms(["river", "plastic"]);
        let b = TermSet::from_terms(["plastic", "river", "RIVER"]);
        assert_eq!(a, b);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_members_satisfy_invariant() {
        let terms = normalize(&detection("A Big, Red Rose", &["No Detection", "Woman", "in"]));
        for term in terms.iter() {
            assert!(term.chars().count() > 2);
            assert_eq!(term, term.to_lowercase());
            assert!(is_admissible(term));
        }
    }
}
