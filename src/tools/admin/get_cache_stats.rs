//! Cache statistics tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::SearchIndex;
use crate::server::json_response;
use crate::types::McpResult;

pub struct GetCacheStatsTool {
    index: Arc<SearchIndex>,
}

impl GetCacheStatsTool {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }
}

impl Tool for GetCacheStatsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_cache_stats",
            "Get the number of cached queries, total cached results and hit/miss counters.",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_response(&json!({
            "cache": self.index.cache_stats(),
            "metrics": self.index.metrics()
        }))
    }
}
