//! Coaching response types for the "talk to me" flow

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One timed step of the short action plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStep {
    pub step: String,
    pub duration_minutes: u32,
}

impl ActionStep {
    pub fn new(step: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            step: step.into(),
            duration_minutes,
        }
    }
}

/// Brief reference to a situation used to ground a coaching response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievedScenario {
    pub id: String,
    pub title: String,
    pub relevance: f64,
}

/// Structured guidance built from the top search results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingResponse {
    pub query: String,
    pub empathy: String,
    pub mindful_perspective: String,
    pub practical_steps: Vec<String>,
    pub action_plan: Vec<ActionStep>,
    pub related_practices: Vec<String>,
    pub warnings: Vec<String>,
    pub retrieved_scenarios: Vec<RetrievedScenario>,
    pub generated_at: DateTime<Utc>,
}
