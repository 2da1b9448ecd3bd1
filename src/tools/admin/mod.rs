//! Administrative tools - cache control and corpus status

mod clear_cache;
mod get_cache_stats;
mod get_corpus_status;

pub use clear_cache::ClearCacheTool;
pub use get_cache_stats::GetCacheStatsTool;
pub use get_corpus_status::GetCorpusStatusTool;
