//! Corpus status tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::SearchIndex;
use crate::server::json_response;
use crate::types::McpResult;

pub struct GetCorpusStatusTool {
    index: Arc<SearchIndex>,
}

impl GetCorpusStatusTool {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }
}

impl Tool for GetCorpusStatusTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_corpus_status",
            "Report whether the situations corpus is still loading, ready, or failed to load, plus its categories.",
            json!({ "type": "object", "properties": {} }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_response(&json!({
            "status": self.index.status(),
            "categories": self.index.categories()
        }))
    }
}
