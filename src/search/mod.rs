//! Semantic search with concept expansion, weighted scoring and result caching
//!
//! This module provides the Mindful Assistant search engine through:
//! - Concept expansion of free-text queries
//! - Weighted multi-field relevance scoring
//! - A bounded, time-expiring result cache

mod cache;
mod concepts;
mod index;
mod scorer;

pub use cache::{cache_key, cache_ttl, CacheEntry, ResultCache, CACHE_CAPACITY, CACHE_TTL_MINUTES};
pub use concepts::{tokenize, ConceptMap, CONCEPTS};
pub use index::{SearchIndex, MAX_RESULTS};
pub use scorer::{is_relevant, score, Field, FieldWeight, FIELD_WEIGHTS, MIN_RELEVANCE};
