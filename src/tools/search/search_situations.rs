//! Search situations tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::SearchIndex;
use crate::server::{json_response, required_str};
use crate::types::McpResult;

/// Tool for searching life situations with concept expansion
pub struct SearchSituationsTool {
    index: Arc<SearchIndex>,
}

impl SearchSituationsTool {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }
}

impl Tool for SearchSituationsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "search_situations",
            "Search life situations relevant to a free-text query. Returns up to 10 situations ranked by relevance.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Plain text describing what the user is going through"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = required_str(&params, "query")?;
        let results = self.index.search(query);

        json_response(&json!({
            "status": self.index.status(),
            "count": results.len(),
            "results": results
        }))
    }
}
