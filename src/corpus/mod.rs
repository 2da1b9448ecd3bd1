//! Corpus sources
//!
//! A corpus source supplies the full list of life situations in one call.
//! The search index loads it once and holds it for the process lifetime.

mod error;
mod file;

use std::collections::HashSet;

use crate::types::LifeSituation;

pub use error::{CorpusError, Result};
pub use file::FileCorpus;

/// Supplier of the complete candidate list
pub trait CorpusSource: Send + Sync {
    /// Load every record, in corpus order
    fn load(&self) -> Result<Vec<LifeSituation>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// In-memory corpus, mainly for fixtures and embedding callers
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    situations: Vec<LifeSituation>,
}

impl StaticCorpus {
    pub fn new(situations: Vec<LifeSituation>) -> Self {
        Self { situations }
    }
}

impl CorpusSource for StaticCorpus {
    fn load(&self) -> Result<Vec<LifeSituation>> {
        Ok(self.situations.clone())
    }

    fn describe(&self) -> String {
        format!("static corpus ({} records)", self.situations.len())
    }
}

/// Drop records with an empty id or title and later duplicates of an id.
/// Corpus order is kept.
pub(crate) fn sanitize(situations: Vec<LifeSituation>) -> Vec<LifeSituation> {
    let mut seen = HashSet::new();
    situations
        .into_iter()
        .filter(|s| !s.id.is_empty() && !s.title.is_empty())
        .filter(|s| {
            let fresh = seen.insert(s.id.clone());
            if !fresh {
                tracing::warn!(id = %s.id, "Skipping duplicate corpus record");
            }
            fresh
        })
        .map(|mut s| {
            s.relevance_score = None;
            s
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_corpus_load() {
        let corpus = StaticCorpus::new(vec![
            LifeSituation::new("a", "First"),
            LifeSituation::new("b", "Second"),
        ]);
        let loaded = corpus.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(corpus.describe().contains("2 records"));
    }

    #[test]
    fn test_sanitize_keeps_first_duplicate_and_order() {
        let input = vec![
            LifeSituation::new("a", "First"),
            LifeSituation::new("b", "Second"),
            LifeSituation::new("a", "Duplicate"),
            LifeSituation::new("", "No id"),
            LifeSituation::new("c", ""),
            LifeSituation::new("d", "Scored").scored(0.9),
        ];
        let cleaned = sanitize(input);
        let ids: Vec<&str> = cleaned.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "d"]);
        assert_eq!(cleaned[0].title, "First");
        assert!(cleaned[2].relevance_score.is_none());
    }
}
