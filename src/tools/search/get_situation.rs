//! Get situation tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::SearchIndex;
use crate::server::{json_response, required_str};
use crate::types::McpResult;

/// Tool for fetching one life situation by id
pub struct GetSituationTool {
    index: Arc<SearchIndex>,
}

impl GetSituationTool {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }
}

impl Tool for GetSituationTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_situation",
            "Get the full details of a life situation by its id.",
            json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Situation id as returned by search_situations"
                    }
                },
                "required": ["id"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let id = required_str(&params, "id")?;
        let situation = self
            .index
            .get_situation(id)
            .ok_or_else(|| format!("Situation not found: {}", id))?;
        json_response(&situation)
    }
}
