//! Weighted multi-field relevance scoring

use std::collections::HashSet;

use crate::types::LifeSituation;

/// Results must score strictly above this to be returned
pub const MIN_RELEVANCE: f64 = 0.1;

/// Searchable fields of a life situation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Category,
    Description,
    Tags,
    MindfulApproach,
    PracticalSteps,
}

/// Base score and weight applied per matching term
#[derive(Debug, Clone, Copy)]
pub struct FieldWeight {
    pub field: Field,
    pub base: f64,
    pub weight: f64,
}

impl FieldWeight {
    /// Contribution of one term hit in this field
    pub fn contribution(&self) -> f64 {
        self.base * self.weight
    }
}

pub const FIELD_WEIGHTS: [FieldWeight; 6] = [
    FieldWeight { field: Field::Title, base: 0.6, weight: 3.0 },
    FieldWeight { field: Field::Category, base: 0.5, weight: 2.0 },
    FieldWeight { field: Field::Description, base: 0.4, weight: 2.0 },
    FieldWeight { field: Field::Tags, base: 0.4, weight: 1.5 },
    FieldWeight { field: Field::MindfulApproach, base: 0.3, weight: 1.0 },
    FieldWeight { field: Field::PracticalSteps, base: 0.2, weight: 1.0 },
];

/// Lowercased field text of one record, prepared once per scoring call
struct FieldTexts {
    title: String,
    category: String,
    description: String,
    tags: String,
    mindful_approach: String,
    practical_steps: String,
}

impl FieldTexts {
    fn of(situation: &LifeSituation) -> Self {
        Self {
            title: situation.title.to_lowercase(),
            category: situation.category.to_lowercase(),
            description: situation.description.to_lowercase(),
            tags: situation.tags.join(" ").to_lowercase(),
            mindful_approach: situation.mindful_approach.to_lowercase(),
            practical_steps: situation.practical_steps.join(" ").to_lowercase(),
        }
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::Tags => &self.tags,
            Field::MindfulApproach => &self.mindful_approach,
            Field::PracticalSteps => &self.practical_steps,
        }
    }
}

/// Sum of field contributions for every term found (as a substring) in each
/// field, averaged over the term count and capped at 1.0.
///
/// An empty term set scores 0.
pub fn score(situation: &LifeSituation, terms: &HashSet<String>) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }

    let texts = FieldTexts::of(situation);
    let mut total = 0.0;

    for term in terms {
        for weight in &FIELD_WEIGHTS {
            if texts.get(weight.field).contains(term.as_str()) {
                total += weight.contribution();
            }
        }
    }

    (total / terms.len() as f64).min(1.0)
}

/// Whether a score clears the relevance threshold
pub fn is_relevant(score: f64) -> bool {
    score > MIN_RELEVANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn workplace_stress() -> LifeSituation {
        LifeSituation::new("ls-1", "Dealing with workplace stress").with_tags(["stress", "work"])
    }

    #[test]
    fn test_effective_contributions() {
        let expected = [1.8, 1.0, 0.8, 0.6, 0.3, 0.2];
        for (weight, want) in FIELD_WEIGHTS.iter().zip(expected) {
            assert!((weight.contribution() - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_title_and_tag_hit() {
        let s = score(&workplace_stress(), &terms(&["stress"]));
        // 1.8 + 0.6 capped at 1.0
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_normalized_by_term_count() {
        let t = terms(&[
            "stress", "pressure", "tension", "overwhelm", "burnout", "anxiety", "worry",
        ]);
        let s = score(&workplace_stress(), &t);
        assert!((s - 2.4 / 7.0).abs() < 1e-9);
        assert!(is_relevant(s));
    }

    #[test]
    fn test_substring_matching() {
        let situation = LifeSituation::new("ls-2", "Overworked and tired");
        // "work" is a substring of "overworked"
        let s = score(&situation, &terms(&["work"]));
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_case_insensitive_fields() {
        let situation = LifeSituation::new("ls-3", "x").with_category("STRESS");
        let s = score(&situation, &terms(&["stress"]));
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_term_matches_multiple_fields_additively() {
        let situation = LifeSituation::new("ls-4", "x")
            .with_mindful_approach("breathe slowly")
            .with_practical_steps(["count each breath"]);
        let s = score(&situation, &terms(&["breath"]));
        assert!((s - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_practical_steps_joined() {
        let situation = LifeSituation::new("ls-5", "x").with_practical_steps(["go for", "walk"]);
        let s = score(&situation, &terms(&["for walk"]));
        assert!((s - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let s = score(&workplace_stress(), &terms(&["xyz123"]));
        assert_eq!(s, 0.0);
        assert!(!is_relevant(s));
    }

    #[test]
    fn test_empty_terms_score_zero() {
        assert_eq!(score(&workplace_stress(), &HashSet::new()), 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_relevant(0.1));
        assert!(is_relevant(0.1000001));
    }

    #[test]
    fn test_score_bounded() {
        let situation = LifeSituation::new("ls-6", "stress stress")
            .with_category("stress")
            .with_description("stress")
            .with_tags(["stress"])
            .with_mindful_approach("stress")
            .with_practical_steps(["stress"]);
        for t in [terms(&["stress"]), terms(&["stress", "nothing", "else", "here"])] {
            let s = score(&situation, &t);
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_adding_title_term_is_monotonic() {
        let situation = LifeSituation::new("ls-7", "Sleep issues at night").with_tags(["sleep"]);
        let base = terms(&["insomnia", "rest", "tired", "fatigue"]);
        let mut with_title = base.clone();
        with_title.insert("sleep".to_string());
        assert!(score(&situation, &with_title) >= score(&situation, &base));
    }
}
