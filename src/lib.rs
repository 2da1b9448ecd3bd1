//! Mindful Search
//!
//! Local semantic search engine behind the Mindful Assistant: a short
//! free-text query is broadened with a wellness concept dictionary, scored
//! against every life situation with a weighted multi-field scorer, and the
//! top results are kept in a bounded, time-expiring cache.
//!
//! # Modules
//!
//! - `types`: Core data structures (LifeSituation, CorpusStatus, stats)
//! - `search`: Concept expansion, relevance scoring, result cache, index
//! - `corpus`: Corpus sources (JSON Lines / JSON files, in-memory)
//! - `coaching`: Offline "talk to me" guidance built from search results
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `tools`: MCP tool implementations
//! - `server`: MCP stdio server
//! - `api`: REST API
//! - `config`: Environment configuration
//! - `utils`: Injectable clock
//!
//! # Example
//!
//! ```
//! use mindful_search::{LifeSituation, SearchIndex};
//!
//! let index = SearchIndex::from_situations(vec![
//!     LifeSituation::new("ls-1", "Dealing with workplace stress").with_tags(["stress", "work"]),
//!     LifeSituation::new("ls-2", "Sleep issues"),
//! ]);
//!
//! let results = index.search("stress");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].id, "ls-1");
//! ```

pub mod api;
pub mod coaching;
pub mod config;
pub mod corpus;
pub mod protocol;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use corpus::{CorpusError, CorpusSource, FileCorpus, StaticCorpus};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use search::{ConceptMap, SearchIndex};
pub use server::McpServer;
pub use types::{
    CacheStats, CoachingResponse, CorpusStatus, LifeSituation, McpResult, SearchMetrics,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
