//! Search index over the life situations corpus
//!
//! Runs the full search flow: cache sweep and lookup, concept expansion,
//! scoring every record, filtering, ranking and caching the top results.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use parking_lot::{Mutex, RwLock};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::cache::{cache_key, CacheEntry, ResultCache};
use super::concepts::ConceptMap;
use super::scorer;
use crate::corpus::{self, CorpusError, CorpusSource};
use crate::types::{CacheStats, CorpusStatus, LifeSituation, SearchMetrics};
use crate::utils::time::{Clock, SystemClock};

/// Maximum number of results returned by a search
pub const MAX_RESULTS: usize = 10;

/// Corpus size above which scoring runs on the rayon pool
const PARALLEL_SCORING_THRESHOLD: usize = 1000;

/// Loaded records plus an id lookup table
#[derive(Debug, Default)]
struct Corpus {
    situations: Vec<LifeSituation>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    fn new(situations: Vec<LifeSituation>) -> Self {
        let by_id = situations
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.id.clone(), idx))
            .collect();
        Self { situations, by_id }
    }
}

/// Search engine for the Mindful Assistant.
///
/// One mutex guards the result cache and is held for the whole
/// sweep → lookup → score → insert sequence, so concurrent searches are
/// serialized. The corpus is installed once and then only read.
pub struct SearchIndex {
    concepts: ConceptMap,
    corpus: RwLock<Arc<Corpus>>,
    status: RwLock<CorpusStatus>,
    cache: Mutex<ResultCache>,
    clock: Arc<dyn Clock>,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    scoring_passes: AtomicU64,
}

impl SearchIndex {
    /// Create an empty index in the `Loading` state
    pub fn new() -> Self {
        Self {
            concepts: ConceptMap::builtin().clone(),
            corpus: RwLock::new(Arc::new(Corpus::default())),
            status: RwLock::new(CorpusStatus::Loading),
            cache: Mutex::new(ResultCache::new()),
            clock: Arc::new(SystemClock),
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            scoring_passes: AtomicU64::new(0),
        }
    }

    /// Create a ready index over an in-memory corpus
    pub fn from_situations(situations: Vec<LifeSituation>) -> Self {
        let index = Self::new();
        index.install(corpus::sanitize(situations));
        index
    }

    /// Use a different time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Use a different concept dictionary
    pub fn with_concepts(mut self, concepts: ConceptMap) -> Self {
        self.concepts = concepts;
        self
    }

    /// Load the corpus from `source`. Only the first successful load takes
    /// effect; later calls report the installed record count.
    pub fn load_from(&self, source: &dyn CorpusSource) -> Result<usize, CorpusError> {
        if let CorpusStatus::Ready { count } = *self.status.read() {
            debug!(count, "Corpus already loaded, ignoring reload");
            return Ok(count);
        }

        info!(source = %source.describe(), "Loading corpus");
        match source.load() {
            Ok(situations) => {
                let count = self.install(corpus::sanitize(situations));
                info!(count, "Corpus ready");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Corpus load failed");
                *self.status.write() = CorpusStatus::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Load the corpus on a background thread
    pub fn spawn_load(
        self: &Arc<Self>,
        source: Box<dyn CorpusSource>,
    ) -> thread::JoinHandle<Result<usize, CorpusError>> {
        let index = Arc::clone(self);
        thread::spawn(move || index.load_from(source.as_ref()))
    }

    /// Records are published before the status flips to `Ready`
    fn install(&self, situations: Vec<LifeSituation>) -> usize {
        let count = situations.len();
        *self.corpus.write() = Arc::new(Corpus::new(situations));
        *self.status.write() = CorpusStatus::Ready { count };
        count
    }

    pub fn status(&self) -> CorpusStatus {
        self.status.read().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.status.read().is_ready()
    }

    /// Search the corpus for situations relevant to `query`.
    ///
    /// Returns at most [`MAX_RESULTS`] scored records, best first. Empty
    /// queries, and any query while the corpus is not ready, return an empty
    /// list without touching the cache; use [`SearchIndex::status`] to tell
    /// the two apart.
    pub fn search(&self, query: &str) -> Vec<LifeSituation> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        if !self.is_ready() {
            debug!(query, "Search before corpus is ready");
            return Vec::new();
        }

        let now = self.clock.now();
        let mut cache = self.cache.lock();

        let swept = cache.sweep_expired(now);
        if swept > 0 {
            debug!(swept, "Swept expired cache entries");
        }

        let key = cache_key(query);
        if let Some(results) = cache.get(&key, now) {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            debug!(query, results = results.len(), "Cache hit");
            return results.to_vec();
        }

        self.cache_misses.fetch_add(1, Ordering::Relaxed);
        let results = self.rank(query);

        let entry = CacheEntry::new(query.to_string(), results.clone(), now);
        if let Some(evicted) = cache.insert(key, entry) {
            debug!(evicted = %evicted, "Evicted oldest cache entry");
        }

        results
    }

    /// Expand, score, filter, sort and truncate. Ties keep corpus order.
    fn rank(&self, query: &str) -> Vec<LifeSituation> {
        let terms = self.concepts.expand_query(query);
        let corpus = Arc::clone(&self.corpus.read());

        let score_one = |situation: &LifeSituation| {
            let score = scorer::score(situation, &terms);
            scorer::is_relevant(score).then(|| situation.scored(score))
        };

        let mut scored: Vec<LifeSituation> =
            if corpus.situations.len() > PARALLEL_SCORING_THRESHOLD {
                corpus.situations.par_iter().filter_map(score_one).collect()
            } else {
                corpus.situations.iter().filter_map(score_one).collect()
            };

        scored.sort_by(|a, b| {
            let a = a.relevance_score.unwrap_or(0.0);
            let b = b.relevance_score.unwrap_or(0.0);
            b.total_cmp(&a)
        });
        scored.truncate(MAX_RESULTS);

        self.scoring_passes.fetch_add(1, Ordering::Relaxed);
        debug!(
            query,
            terms = terms.len(),
            results = scored.len(),
            "Scored corpus"
        );

        scored
    }

    /// Drop every cached result
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
        info!("Search cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    pub fn metrics(&self) -> SearchMetrics {
        SearchMetrics {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            scoring_passes: self.scoring_passes.load(Ordering::Relaxed),
        }
    }

    /// Look up a corpus record by id
    pub fn get_situation(&self, id: &str) -> Option<LifeSituation> {
        let corpus = self.corpus.read();
        corpus
            .by_id
            .get(id)
            .and_then(|&idx| corpus.situations.get(idx))
            .cloned()
    }

    /// Distinct non-empty categories, sorted
    pub fn categories(&self) -> Vec<String> {
        let corpus = self.corpus.read();
        corpus
            .situations
            .iter()
            .filter(|s| !s.category.is_empty())
            .map(|s| s.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.corpus.read().situations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::StaticCorpus;
    use crate::utils::time::ManualClock;
    use chrono::{Duration, Utc};

    fn fixture() -> Vec<LifeSituation> {
        vec![
            LifeSituation::new("sleep", "Sleep issues")
                .with_category("Health")
                .with_tags(["sleep", "rest"]),
            LifeSituation::new("work-stress", "Dealing with workplace stress")
                .with_category("Work")
                .with_tags(["stress", "work"]),
            LifeSituation::new("money", "Handling debt").with_category("Finance"),
        ]
    }

    fn index_with_clock() -> (SearchIndex, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let index = SearchIndex::from_situations(fixture()).with_clock(clock.clone());
        (index, clock)
    }

    #[test]
    fn test_workplace_stress_example() {
        let index = SearchIndex::from_situations(fixture());
        let results = index.search("stress");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "work-stress");
        let score = results[0].relevance_score.unwrap();
        assert!((score - 2.4 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_query_skips_cache() {
        let index = SearchIndex::from_situations(fixture());
        assert!(index.search("").is_empty());
        assert!(index.search("   \t").is_empty());
        assert_eq!(index.cache_stats().entries, 0);
        assert_eq!(index.metrics(), SearchMetrics::default());
    }

    #[test]
    fn test_unmatched_query_is_empty_but_cached() {
        let index = SearchIndex::from_situations(fixture());
        assert!(index.search("xyz123").is_empty());
        assert_eq!(index.cache_stats().entries, 1);
        assert_eq!(index.cache_stats().cached_results, 0);
    }

    #[test]
    fn test_cache_hit_skips_scoring() {
        let index = SearchIndex::from_situations(fixture());
        let first = index.search("stress");
        let second = index.search("STRESS");

        assert_eq!(first, second);
        assert_eq!(first[0].relevance_score, second[0].relevance_score);
        let metrics = index.metrics();
        assert_eq!(metrics.scoring_passes, 1);
        assert_eq!(metrics.cache_hits, 1);
        assert_eq!(metrics.cache_misses, 1);
    }

    #[test]
    fn test_expired_entry_rescored() {
        let (index, clock) = index_with_clock();
        index.search("stress");

        clock.advance(Duration::minutes(29));
        index.search("stress");
        assert_eq!(index.metrics().scoring_passes, 1);

        clock.advance(Duration::minutes(1));
        index.search("stress");
        assert_eq!(index.metrics().scoring_passes, 2);
    }

    #[test]
    fn test_clear_cache_forces_recompute() {
        let (index, clock) = index_with_clock();
        index.search("stress");
        index.clear_cache();
        assert_eq!(index.cache_stats().entries, 0);

        clock.advance(Duration::minutes(1));
        index.search("stress");
        assert_eq!(index.metrics().scoring_passes, 2);
        assert_eq!(index.cache_stats().entries, 1);
    }

    #[test]
    fn test_results_sorted_and_truncated() {
        let situations: Vec<LifeSituation> = (0..15)
            .map(|i| {
                let s = LifeSituation::new(format!("s{}", i), format!("Sleep story {}", i));
                if i % 2 == 0 {
                    s.with_tags(["sleep"])
                } else {
                    s
                }
            })
            .collect();
        let index = SearchIndex::from_situations(situations);

        let results = index.search("sleep");
        assert_eq!(results.len(), MAX_RESULTS);
        let scores: Vec<f64> = results.iter().map(|r| r.relevance_score.unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        // tagged records first, each group in corpus order
        assert_eq!(results[0].id, "s0");
        assert_eq!(results[1].id, "s2");
        assert_eq!(results[8].id, "s1");
        assert_eq!(results[9].id, "s3");
    }

    #[test]
    fn test_search_while_loading() {
        let index = SearchIndex::new();
        assert!(index.status().is_loading());
        assert!(index.search("stress").is_empty());
        assert_eq!(index.cache_stats().entries, 0);

        index.load_from(&StaticCorpus::new(fixture())).unwrap();
        assert_eq!(index.status(), CorpusStatus::Ready { count: 3 });
        assert_eq!(index.search("stress").len(), 1);
    }

    #[test]
    fn test_load_only_once() {
        let index = SearchIndex::new();
        index.load_from(&StaticCorpus::new(fixture())).unwrap();
        let count = index
            .load_from(&StaticCorpus::new(vec![LifeSituation::new("x", "Other")]))
            .unwrap();
        assert_eq!(count, 3);
        assert!(index.get_situation("x").is_none());
    }

    #[test]
    fn test_failed_load_status() {
        let index = SearchIndex::new();
        let source = crate::corpus::FileCorpus::new("/no/such/corpus.jsonl");
        assert!(index.load_from(&source).is_err());
        assert!(matches!(index.status(), CorpusStatus::Failed { .. }));
        assert!(index.search("stress").is_empty());
    }

    #[test]
    fn test_spawn_load() {
        let index = Arc::new(SearchIndex::new());
        let handle = index.spawn_load(Box::new(StaticCorpus::new(fixture())));
        assert_eq!(handle.join().unwrap().unwrap(), 3);
        assert!(index.is_ready());
    }

    #[test]
    fn test_get_situation_and_categories() {
        let index = SearchIndex::from_situations(fixture());
        assert_eq!(index.get_situation("money").unwrap().title, "Handling debt");
        assert!(index.get_situation("nope").is_none());
        assert_eq!(index.categories(), vec!["Finance", "Health", "Work"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_custom_concepts() {
        const CUSTOM: &[(&str, &[&str])] = &[("rest", &["sleep", "nap", "pause", "break"])];
        let index = SearchIndex::from_situations(fixture())
            .with_concepts(ConceptMap::from_entries(CUSTOM));

        let results = index.search("rest");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "sleep");
        // no expansion for "stress", so the literal match is not diluted
        let results = index.search("stress");
        assert_eq!(results[0].relevance_score, Some(1.0));
    }

    #[test]
    fn test_parallel_scoring_matches_sequential_order() {
        let situations: Vec<LifeSituation> = (0..1500)
            .map(|i| LifeSituation::new(format!("s{}", i), "Sleep issues"))
            .collect();
        let index = SearchIndex::from_situations(situations);
        let results = index.search("sleep");
        let ids: Vec<String> = results.iter().map(|r| r.id.clone()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("s{}", i)).collect();
        assert_eq!(ids, expected);
    }
}
