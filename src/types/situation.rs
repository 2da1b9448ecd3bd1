//! Life situation records - the candidates returned by search

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A guidance record from the life situations corpus.
///
/// `relevance_score` is only populated on search results. Equality and
/// hashing look at `id` alone, so a scored copy equals its corpus original.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeSituation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(rename = "mindfulApproach", default)]
    pub mindful_approach: String,
    #[serde(rename = "practicalSteps", default)]
    pub practical_steps: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "keyInsights", default, skip_serializing_if = "Vec::is_empty")]
    pub key_insights: Vec<String>,
    #[serde(
        rename = "relevanceScore",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub relevance_score: Option<f64>,
}

impl LifeSituation {
    /// Create a record with the required fields, everything else empty
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            difficulty: String::new(),
            mindful_approach: String::new(),
            practical_steps: Vec::new(),
            tags: Vec::new(),
            key_insights: Vec::new(),
            relevance_score: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_mindful_approach(mut self, approach: impl Into<String>) -> Self {
        self.mindful_approach = approach.into();
        self
    }

    pub fn with_practical_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.practical_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_key_insights<I, S>(mut self, insights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_insights = insights.into_iter().map(Into::into).collect();
        self
    }

    /// Copy of this record carrying a relevance score
    pub fn scored(&self, score: f64) -> Self {
        let mut copy = self.clone();
        copy.relevance_score = Some(score);
        copy
    }
}

impl PartialEq for LifeSituation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LifeSituation {}

impl Hash for LifeSituation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_score() {
        let base = LifeSituation::new("ls-1", "Dealing with workplace stress");
        let scored = base.scored(0.42);
        assert_eq!(base, scored);
        assert_eq!(scored.relevance_score, Some(0.42));
        assert_eq!(base.relevance_score, None);
    }

    #[test]
    fn test_equality_uses_id_only() {
        let a = LifeSituation::new("ls-1", "A");
        let b = LifeSituation::new("ls-1", "B");
        let c = LifeSituation::new("ls-2", "A");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "ls-7",
            "title": "Sleep issues",
            "category": "Health",
            "mindfulApproach": "Notice the breath",
            "practicalSteps": ["Dim the lights", "Put the phone away"],
            "tags": ["sleep"]
        }"#;
        let situation: LifeSituation = serde_json::from_str(json).unwrap();
        assert_eq!(situation.mindful_approach, "Notice the breath");
        assert_eq!(situation.practical_steps.len(), 2);
        assert!(situation.description.is_empty());
        assert!(situation.relevance_score.is_none());
    }

    #[test]
    fn test_serialize_skips_missing_score() {
        let json = serde_json::to_string(&LifeSituation::new("ls-1", "T")).unwrap();
        assert!(!json.contains("relevanceScore"));

        let json = serde_json::to_string(&LifeSituation::new("ls-1", "T").scored(0.5)).unwrap();
        assert!(json.contains("\"relevanceScore\":0.5"));
    }
}
