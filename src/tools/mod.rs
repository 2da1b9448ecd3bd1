//! MCP Tools implementation
//!
//! This module contains the 6 MCP tools organized by category:
//! - Search tools (3): search, lookup by id, coaching
//! - Admin tools (3): cache control and corpus status

pub mod admin;
pub mod search;

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::search::SearchIndex;
use crate::server::McpServer;

pub use admin::{ClearCacheTool, GetCacheStatsTool, GetCorpusStatusTool};
pub use search::{GetSituationTool, SearchSituationsTool, TalkToMeTool};

/// Register all tools with the MCP server
pub fn register_all_tools<R: BufRead, W: Write>(
    server: &mut McpServer<R, W>,
    index: Arc<SearchIndex>,
) {
    // Search tools (3)
    server.register_tool(Box::new(SearchSituationsTool::new(index.clone())));
    server.register_tool(Box::new(GetSituationTool::new(index.clone())));
    server.register_tool(Box::new(TalkToMeTool::new(index.clone())));

    // Admin tools (3)
    server.register_tool(Box::new(ClearCacheTool::new(index.clone())));
    server.register_tool(Box::new(GetCacheStatsTool::new(index.clone())));
    server.register_tool(Box::new(GetCorpusStatusTool::new(index)));
}
