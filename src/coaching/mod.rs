//! Offline "talk to me" coaching
//!
//! Builds a structured guidance response from the top search results
//! without any text generation model. Also renders the retrieved situations
//! as a plain-text context block for callers that hand them to one.

use chrono::Utc;

use crate::types::{ActionStep, CoachingResponse, LifeSituation, RetrievedScenario};

/// Number of search results used to ground a response
pub const COACHING_TOP_K: usize = 3;

const MAX_PRACTICAL_STEPS: usize = 3;
const INSIGHTS_PER_SCENARIO: usize = 2;

const SAFETY_NOTE: &str = "This guidance is supportive, not professional medical advice";

/// Build a coaching response for `query` from ranked search results
pub fn coach(query: &str, results: &[LifeSituation]) -> CoachingResponse {
    let top = &results[..results.len().min(COACHING_TOP_K)];

    if top.is_empty() {
        return fallback(query);
    }

    let insights: Vec<&str> = top
        .iter()
        .flat_map(|s| s.key_insights.iter().take(INSIGHTS_PER_SCENARIO))
        .map(String::as_str)
        .collect();

    let perspective_source = insights
        .first()
        .copied()
        .or_else(|| {
            top.iter()
                .map(|s| s.mindful_approach.as_str())
                .find(|approach| !approach.is_empty())
        })
        .unwrap_or("self-compassion and patience");

    let mut practical_steps: Vec<String> = if insights.is_empty() {
        top.iter()
            .flat_map(|s| s.practical_steps.iter().cloned())
            .collect()
    } else {
        insights.iter().map(|s| s.to_string()).collect()
    };
    practical_steps.truncate(MAX_PRACTICAL_STEPS);
    if practical_steps.is_empty() {
        practical_steps = vec![
            "Reflect".to_string(),
            "Seek support".to_string(),
            "Practice daily".to_string(),
        ];
    }

    CoachingResponse {
        query: query.to_string(),
        empathy: format!(
            "I hear you about '{}'. That's a real challenge many people face.",
            query.trim().to_lowercase()
        ),
        mindful_perspective: format!(
            "Wisdom on this topic emphasizes: {}.",
            perspective_source.trim_end_matches('.')
        ),
        practical_steps,
        action_plan: vec![
            ActionStep::new("Pause and observe without judgment", 2),
            ActionStep::new("Practice grounding: notice 5 things you see", 3),
            ActionStep::new("Take one small action today", 5),
        ],
        related_practices: strings(&["breathing_box", "grounding_5_4_3_2_1", "self_compassion"]),
        warnings: strings(&[SAFETY_NOTE]),
        retrieved_scenarios: top.iter().map(retrieved).collect(),
        generated_at: Utc::now(),
    }
}

/// Generic response when nothing relevant was found
fn fallback(query: &str) -> CoachingResponse {
    CoachingResponse {
        query: query.to_string(),
        empathy: "I understand you're facing a challenge.".to_string(),
        mindful_perspective: "Remember that all challenges are opportunities for growth."
            .to_string(),
        practical_steps: strings(&[
            "Take 3 deep breaths",
            "Reflect on what you can control",
            "Reach out for support if needed",
        ]),
        action_plan: vec![
            ActionStep::new("Take slow, deep breaths", 2),
            ActionStep::new("Journal about the situation", 5),
            ActionStep::new("Reach out to a trusted person", 5),
        ],
        related_practices: strings(&["breathing_box", "meditation_5min", "grounding"]),
        warnings: strings(&["This is not professional advice. Seek help if needed."]),
        retrieved_scenarios: Vec::new(),
        generated_at: Utc::now(),
    }
}

fn retrieved(situation: &LifeSituation) -> RetrievedScenario {
    RetrievedScenario {
        id: situation.id.clone(),
        title: situation.title.clone(),
        relevance: situation.relevance_score.unwrap_or(0.0),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Render the top results as a plain-text context block
pub fn build_context(results: &[LifeSituation]) -> String {
    results
        .iter()
        .take(COACHING_TOP_K)
        .map(|s| {
            format!(
                "Scenario: {}\nCategory: {}\nDescription: {}\nKey Insights: {}\n",
                s.title,
                s.category,
                s.description,
                s.key_insights.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
