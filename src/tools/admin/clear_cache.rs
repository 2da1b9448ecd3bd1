//! Clear cache tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::SearchIndex;
use crate::server::text_response;
use crate::types::McpResult;

pub struct ClearCacheTool {
    index: Arc<SearchIndex>,
}

impl ClearCacheTool {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }
}

impl Tool for ClearCacheTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "clear_cache",
            "Drop all cached search results.",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        self.index.clear_cache();
        Ok(text_response("Search cache cleared".to_string()))
    }
}
