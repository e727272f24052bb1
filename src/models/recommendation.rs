use serde::{Deserialize, Serialize};

/// Follow-up guidance attached to every extracted recommendation set.
pub const DEFAULT_FOLLOW_UP: &str = "Annual check-ups recommended";

/// How soon a specialist consultation should happen. Informational only;
/// scheduling does not derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Moderate,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// A recommended recurring screening for one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    pub condition: String,
    /// Test label; matched against product names by the generator.
    pub test: String,
    pub starting_age: u32,
    /// Cadence label ("Annually"). Carried through informationally; the
    /// expansion horizon is a policy constant, not derived from it.
    pub frequency: String,
}

/// A recommended specialist consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub speciality: String,
    pub urgency: Urgency,
}

/// Structured recommendations extracted from free-text AI feedback. Field
/// names match the backend's stored `structured_plan` documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommended_screenings: Vec<Screening>,
    pub lifestyle_recommendations: Vec<String>,
    pub specialist_consultations: Vec<Consultation>,
    pub follow_up: String,
}

impl Default for RecommendationSet {
    fn default() -> Self {
        Self {
            recommended_screenings: Vec::new(),
            lifestyle_recommendations: Vec::new(),
            specialist_consultations: Vec::new(),
            follow_up: DEFAULT_FOLLOW_UP.into(),
        }
    }
}

impl RecommendationSet {
    /// True when no rule fired: no screenings, lifestyle advice, or
    /// consultations (the default follow-up is always present).
    pub fn is_empty(&self) -> bool {
        self.recommended_screenings.is_empty()
            && self.lifestyle_recommendations.is_empty()
            && self.specialist_consultations.is_empty()
    }
}
