//! Corpus status and search statistics

use serde::Serialize;

/// Load state of the search corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CorpusStatus {
    /// Corpus has not finished loading; empty results are not authoritative
    Loading,
    /// Corpus is installed and searchable
    Ready { count: usize },
    /// Corpus source failed; search stays empty
    Failed { reason: String },
}

impl CorpusStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CorpusStatus::Ready { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CorpusStatus::Loading)
    }
}

/// Result cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of cache entries
    pub entries: usize,
    /// Results summed across all entries
    pub cached_results: usize,
}

/// Search instrumentation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetrics {
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Full passes of the scorer over the corpus
    pub scoring_passes: u64,
}
