//! Feedback extraction: free-text AI feedback in, structured
//! recommendation set out.

use crate::models::RecommendationSet;

use super::rules::{RuleEffect, RuleSet};

/// Apply `rules` to `feedback` in table order. Never fails: text that
/// matches nothing yields an empty set carrying the default follow-up.
pub fn extract_with_rules(rules: &RuleSet, feedback: &str) -> RecommendationSet {
    let mut set = RecommendationSet::default();

    for rule in rules.rules() {
        if !rule.matches(feedback) {
            continue;
        }
        match &rule.effect {
            RuleEffect::Screening(s) => set.recommended_screenings.push(s.clone()),
            RuleEffect::Lifestyle(advice) => set.lifestyle_recommendations.push(advice.clone()),
            RuleEffect::Consultation(c) => set.specialist_consultations.push(c.clone()),
        }
    }

    tracing::debug!(
        screenings = set.recommended_screenings.len(),
        lifestyle = set.lifestyle_recommendations.len(),
        consultations = set.specialist_consultations.len(),
        "extracted recommendations from feedback"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Urgency, DEFAULT_FOLLOW_UP};
    use crate::plan::rules::TriggerRule;

    fn extract(feedback: &str) -> RecommendationSet {
        extract_with_rules(&RuleSet::seed(), feedback)
    }

    #[test]
    fn unmatched_text_yields_empty_set() {
        let set = extract("Everything looks fine.");
        assert!(set.is_empty());
        assert_eq!(set.follow_up, DEFAULT_FOLLOW_UP);
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "PSA Testing advised. Consult an Oncologist. Limit alcohol.";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn each_seed_rule_fires_alone() {
        let cases: &[(&str, usize, usize, usize)] = &[
            ("PSA Testing", 1, 0, 0),
            ("MRI/Endoscopic Ultrasound", 1, 0, 0),
            ("Clinical Breast Exam", 1, 0, 0),
            ("exercise", 0, 1, 0),
            ("limit alcohol", 0, 1, 0),
            ("Consult an Oncologist", 0, 0, 1),
            ("Consult a Genetic Counselor", 0, 0, 1),
        ];
        for (text, screenings, lifestyle, consultations) in cases {
            let set = extract(text);
            assert_eq!(
                set.recommended_screenings.len(),
                *screenings,
                "screenings for {text:?}"
            );
            assert_eq!(
                set.lifestyle_recommendations.len(),
                *lifestyle,
                "lifestyle for {text:?}"
            );
            assert_eq!(
                set.specialist_consultations.len(),
                *consultations,
                "consultations for {text:?}"
            );
        }
    }

    #[test]
    fn repeated_pattern_fires_once() {
        let set = extract("PSA Testing now. PSA Testing again. PSA Testing forever.");
        assert_eq!(set.recommended_screenings.len(), 1);
    }

    #[test]
    fn screening_payload_matches_rule() {
        let set = extract("PSA Testing");
        let screening = &set.recommended_screenings[0];
        assert_eq!(screening.condition, "Prostate Cancer");
        assert_eq!(screening.test, "PSA Test");
        assert_eq!(screening.starting_age, 40);
        assert_eq!(screening.frequency, "Annually");
    }

    #[test]
    fn consultation_urgencies() {
        let set = extract("Consult an Oncologist and Consult a Genetic Counselor.");
        assert_eq!(set.specialist_consultations.len(), 2);
        assert_eq!(set.specialist_consultations[0].urgency, Urgency::Moderate);
        assert_eq!(set.specialist_consultations[1].urgency, Urgency::High);
    }

    #[test]
    fn output_follows_table_order_not_text_order() {
        // Breast exam appears first in the text but third in the table.
        let set = extract("Clinical Breast Exam, then PSA Testing.");
        assert_eq!(set.recommended_screenings[0].condition, "Prostate Cancer");
        assert_eq!(set.recommended_screenings[1].condition, "Male Breast Cancer");
    }

    #[test]
    fn case_sensitivity_is_per_rule() {
        // Lowercased trigger must not fire the case-sensitive PSA rule,
        // while the case-insensitive exercise rule still fires.
        let set = extract("psa testing and EXERCISE");
        assert!(set.recommended_screenings.is_empty());
        assert_eq!(set.lifestyle_recommendations.len(), 1);
    }

    #[test]
    fn custom_rule_table_is_honored() {
        let rules = RuleSet::new(vec![TriggerRule {
            pattern: "hydration".into(),
            case_sensitive: false,
            effect: super::RuleEffect::Lifestyle("Drink more water".into()),
        }]);
        let set = extract_with_rules(&rules, "Hydration matters.");
        assert_eq!(set.lifestyle_recommendations, vec!["Drink more water"]);
    }
}
