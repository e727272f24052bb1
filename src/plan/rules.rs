//! Declarative keyword triggers mapping AI feedback text to recommendations.
//!
//! The seed table holds the backend's built-in triggers. Rules are plain
//! data: deployments can load an extended table from JSON without touching
//! the extraction loop.

use serde::{Deserialize, Serialize};

use crate::models::{Consultation, Screening, Urgency};

use super::types::PlanError;

/// What a matched trigger appends to the recommendation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleEffect {
    Screening(Screening),
    Lifestyle(String),
    Consultation(Consultation),
}

/// One keyword trigger. A rule fires at most once per feedback text,
/// however many times its pattern occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerRule {
    /// Substring looked up in the feedback text.
    pub pattern: String,
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    pub effect: RuleEffect,
}

fn default_case_sensitive() -> bool {
    true
}

impl TriggerRule {
    /// Whether this rule fires against `text`.
    pub fn matches(&self, text: &str) -> bool {
        if self.case_sensitive {
            text.contains(&self.pattern)
        } else {
            text.to_lowercase().contains(&self.pattern.to_lowercase())
        }
    }
}

/// An ordered trigger table. Order is part of the contract: extracted
/// recommendations follow table order, not the position of matches in
/// the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<TriggerRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<TriggerRule>) -> Self {
        Self { rules }
    }

    /// Parse a trigger table from JSON (an array of rules).
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The built-in trigger table.
    pub fn seed() -> Self {
        Self::new(vec![
            TriggerRule {
                pattern: "PSA Testing".into(),
                case_sensitive: true,
                effect: RuleEffect::Screening(Screening {
                    condition: "Prostate Cancer".into(),
                    test: "PSA Test".into(),
                    starting_age: 40,
                    frequency: "Annually".into(),
                }),
            },
            TriggerRule {
                pattern: "MRI/Endoscopic Ultrasound".into(),
                case_sensitive: true,
                effect: RuleEffect::Screening(Screening {
                    condition: "Pancreatic Cancer".into(),
                    test: "MRI/Endoscopic Ultrasound".into(),
                    starting_age: 50,
                    frequency: "Annually".into(),
                }),
            },
            TriggerRule {
                pattern: "Clinical Breast Exam".into(),
                case_sensitive: true,
                effect: RuleEffect::Screening(Screening {
                    condition: "Male Breast Cancer".into(),
                    test: "Clinical Breast Exam".into(),
                    starting_age: 35,
                    frequency: "Annually".into(),
                }),
            },
            TriggerRule {
                pattern: "exercise".into(),
                case_sensitive: false,
                effect: RuleEffect::Lifestyle(
                    "Engage in regular physical activity (150 min/week)".into(),
                ),
            },
            TriggerRule {
                pattern: "limit alcohol".into(),
                case_sensitive: false,
                effect: RuleEffect::Lifestyle("Limit alcohol consumption".into()),
            },
            TriggerRule {
                pattern: "Consult an Oncologist".into(),
                case_sensitive: true,
                effect: RuleEffect::Consultation(Consultation {
                    speciality: "Oncologist".into(),
                    urgency: Urgency::Moderate,
                }),
            },
            TriggerRule {
                pattern: "Consult a Genetic Counselor".into(),
                case_sensitive: true,
                effect: RuleEffect::Consultation(Consultation {
                    speciality: "Genetic Counselor".into(),
                    urgency: Urgency::High,
                }),
            },
        ])
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::seed()
    }
}
