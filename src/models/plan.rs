use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recommendation::RecommendationSet;

/// One dated entry of a generated plan. Serialized with the store's tagged
/// shape: `{"type": "test", ...}` or `{"type": "consultation", ...}`, with
/// the catalog ids in the store's camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlanEntry {
    Test {
        test: String,
        age: i32,
        year: i32,
        #[serde(rename = "productID")]
        product_id: String,
        #[serde(rename = "productName")]
        product_name: String,
    },
    Consultation {
        speciality: String,
        age: i32,
        year: i32,
        /// None when no professional on the roster matched the speciality;
        /// the consultation is still scheduled.
        #[serde(rename = "professionalID", default)]
        professional_id: Option<String>,
        #[serde(rename = "professionalName", default)]
        professional_name: Option<String>,
    },
}

impl PlanEntry {
    /// Age the entry is scheduled at; the plan-wide sort key.
    pub fn age(&self) -> i32 {
        match self {
            Self::Test { age, .. } | Self::Consultation { age, .. } => *age,
        }
    }

    /// Calendar year the entry falls in (`birth_year + age`).
    pub fn year(&self) -> i32 {
        match self {
            Self::Test { year, .. } | Self::Consultation { year, .. } => *year,
        }
    }
}

/// The persisted plan artifact: one generated plan keyed by the user and
/// the lab test whose feedback produced it. The engine only shapes this
/// document; storing it is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "testID")]
    pub test_id: String,
    pub structured_plan: RecommendationSet,
    pub plan: Vec<PlanEntry>,
    pub created_at: DateTime<Utc>,
}

impl PlanDocument {
    pub fn new(
        user_id: impl Into<String>,
        test_id: impl Into<String>,
        structured_plan: RecommendationSet,
        plan: Vec<PlanEntry>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            test_id: test_id.into(),
            structured_plan,
            plan,
            created_at: Utc::now(),
        }
    }
}
