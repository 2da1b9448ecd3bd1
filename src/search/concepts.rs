//! Concept dictionary for query expansion
//!
//! Each keyword maps to the related keywords a query mentioning it should
//! also match. All entries are lowercase.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Built-in wellness vocabulary
pub const CONCEPTS: &[(&str, &[&str])] = &[
    // Stress & anxiety
    (
        "stress",
        &["pressure", "tension", "overwhelm", "burnout", "anxiety", "worry"],
    ),
    (
        "stressed",
        &["stress", "pressure", "tension", "overwhelm", "burnout"],
    ),
    (
        "anxiety",
        &["worry", "fear", "nervous", "panic", "anxious", "unease"],
    ),
    ("anxious", &["anxiety", "worry", "nervous", "fear", "panic"]),
    ("panic", &["anxiety", "fear", "breath", "calm", "grounding"]),
    ("worry", &["anxiety", "fear", "overthinking", "rumination", "concern"]),
    (
        "overwhelm",
        &["stress", "pressure", "burnout", "too much", "exhaustion"],
    ),
    // Work
    (
        "work",
        &["job", "career", "workplace", "boss", "colleague", "office", "deadline"],
    ),
    (
        "job",
        &["work", "career", "workplace", "employment", "interview"],
    ),
    (
        "boss",
        &["manager", "workplace", "work", "authority", "feedback"],
    ),
    ("career", &["job", "work", "promotion", "purpose", "growth"]),
    (
        "burnout",
        &["exhaustion", "stress", "fatigue", "overwork", "rest"],
    ),
    // Relationships
    (
        "relationship",
        &["partner", "family", "friend", "communication", "conflict", "love"],
    ),
    (
        "relationships",
        &["partner", "family", "friend", "communication", "conflict", "love"],
    ),
    (
        "partner",
        &["relationship", "spouse", "love", "marriage", "communication"],
    ),
    (
        "family",
        &["parent", "child", "sibling", "home", "relatives", "relationship"],
    ),
    ("friend", &["friendship", "relationship", "social", "trust", "support"]),
    (
        "conflict",
        &["argument", "disagreement", "tension", "communication", "anger"],
    ),
    // Mental health
    (
        "mental",
        &["health", "wellbeing", "mood", "emotional", "mind"],
    ),
    (
        "depression",
        &["sadness", "hopeless", "low", "empty", "mood", "motivation"],
    ),
    ("sad", &["sadness", "grief", "down", "depression", "low"]),
    (
        "lonely",
        &["loneliness", "isolation", "alone", "disconnected", "belonging"],
    ),
    (
        "loneliness",
        &["lonely", "isolation", "alone", "disconnected", "belonging"],
    ),
    (
        "grief",
        &["loss", "mourning", "death", "sadness", "bereavement"],
    ),
    (
        "anger",
        &["frustration", "irritation", "rage", "resentment", "temper"],
    ),
    (
        "angry",
        &["anger", "frustration", "irritation", "rage", "temper"],
    ),
    (
        "confidence",
        &["self-esteem", "doubt", "insecurity", "self-worth", "courage"],
    ),
    (
        "change",
        &["transition", "uncertainty", "adjustment", "moving", "new"],
    ),
    // Finance
    (
        "money",
        &["finance", "debt", "budget", "savings", "financial", "expenses"],
    ),
    ("finance", &["money", "debt", "budget", "savings", "income"]),
    ("financial", &["money", "debt", "budget", "savings", "income"]),
    ("debt", &["money", "loan", "finance", "budget", "repayment"]),
    // Physical health
    (
        "health",
        &["wellness", "fitness", "exercise", "nutrition", "body", "illness"],
    ),
    (
        "sleep",
        &["insomnia", "rest", "tired", "fatigue", "night", "bedtime"],
    ),
    ("tired", &["fatigue", "exhaustion", "sleep", "rest", "energy"]),
    ("pain", &["illness", "body", "chronic", "discomfort", "health"]),
];

/// Lowercase the text, split on whitespace and drop tokens of two
/// characters or fewer. Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(|token| token.to_string())
        .collect()
}

/// Keyword → related keywords lookup
#[derive(Debug, Clone)]
pub struct ConceptMap {
    related: HashMap<&'static str, &'static [&'static str]>,
}

impl ConceptMap {
    /// Build a concept map from keyword/related pairs
    pub fn from_entries(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self {
            related: entries.iter().copied().collect(),
        }
    }

    /// Shared instance of the built-in vocabulary
    pub fn builtin() -> &'static ConceptMap {
        static BUILTIN: OnceLock<ConceptMap> = OnceLock::new();
        BUILTIN.get_or_init(|| ConceptMap::from_entries(CONCEPTS))
    }

    /// Related keywords for an exact (lowercase) keyword
    pub fn related(&self, keyword: &str) -> Option<&'static [&'static str]> {
        self.related.get(keyword).copied()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.related.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.related.len()
    }

    pub fn is_empty(&self) -> bool {
        self.related.is_empty()
    }

    /// Expand a raw query into its tokens plus every related keyword of
    /// tokens found in the dictionary
    pub fn expand_query(&self, query: &str) -> HashSet<String> {
        let mut terms = HashSet::new();
        for token in tokenize(query) {
            if let Some(related) = self.related(&token) {
                terms.extend(related.iter().map(|term| term.to_string()));
            }
            terms.insert(token);
        }
        terms
    }
}

impl Default for ConceptMap {
    fn default() -> Self {
        Self::from_entries(CONCEPTS)
    }
}
