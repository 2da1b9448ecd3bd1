//! Talk to me tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::coaching::coach;
use crate::protocol::{McpTool, Tool};
use crate::search::SearchIndex;
use crate::server::{json_response, required_str};
use crate::types::McpResult;

/// Tool producing offline coaching grounded in the best matching situations
pub struct TalkToMeTool {
    index: Arc<SearchIndex>,
}

impl TalkToMeTool {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }
}

impl Tool for TalkToMeTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "talk_to_me",
            "Get structured mindful guidance (perspective, practical steps, a short action plan) for a question, grounded in the top matching life situations.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The user's question in natural language"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = required_str(&params, "query")?;
        if query.trim().is_empty() {
            return Err("Query must not be empty".into());
        }
        if !self.index.is_ready() {
            return Err(format!("Corpus not ready: {:?}", self.index.status()).into());
        }

        let results = self.index.search(query);
        json_response(&coach(query, &results))
    }
}
