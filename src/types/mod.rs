//! Data types for the Mindful Search server
//!
//! This module contains all the core data structures used throughout the application.

mod coaching;
mod situation;
mod status;

pub use coaching::{ActionStep, CoachingResponse, RetrievedScenario};
pub use situation::LifeSituation;
pub use status::{CacheStats, CorpusStatus, SearchMetrics};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
