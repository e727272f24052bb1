//! The health-plan engine.
//!
//! Two stages, consumed in sequence by the request-handler layer:
//! extraction turns free-text AI feedback into a structured
//! [`RecommendationSet`](crate::models::RecommendationSet) via a declarative
//! trigger table, and generation expands that set into an age-ordered,
//! catalog-matched sequence of [`PlanEntry`](crate::models::PlanEntry)
//! records. Both stages are pure with respect to their inputs, with no I/O
//! and no shared state, so any number of request handlers can run them
//! concurrently without coordination.

pub mod extract;
pub mod generate;
pub mod rules;
pub mod types;

use chrono::{Local, NaiveDate};

use crate::models::{PlanEntry, Product, Professional, RecommendationSet, UserProfile};

use rules::RuleSet;
use types::PlanError;

// ─── Policy ──────────────────────────────────────────────────────────────────

/// Scheduling knobs. The defaults reproduce the backend's long-standing
/// behavior; both are fixed policy, not derived from the extracted
/// `frequency` or `urgency` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPolicy {
    /// Yearly occurrences emitted per matched screening, starting at the
    /// user's current age.
    pub screening_occurrences: usize,
    /// Age every consultation is scheduled at.
    pub consultation_age: i32,
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            screening_occurrences: 10,
            consultation_age: 50,
        }
    }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Trigger table and policy bundled for repeated use. A handler layer
/// serving many requests builds one engine at startup and shares it freely.
#[derive(Debug, Clone, Default)]
pub struct PlanEngine {
    rules: RuleSet,
    policy: PlanPolicy,
}

impl PlanEngine {
    pub fn new(rules: RuleSet, policy: PlanPolicy) -> Self {
        Self { rules, policy }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn policy(&self) -> &PlanPolicy {
        &self.policy
    }

    /// Extract structured recommendations from feedback text. Never fails;
    /// text matching no rule yields an empty, well-formed set.
    pub fn extract(&self, feedback: &str) -> RecommendationSet {
        extract::extract_with_rules(&self.rules, feedback)
    }

    /// Generate the full plan for `user` as of today.
    pub fn generate(
        &self,
        feedback: &str,
        user: &UserProfile,
        products: &[Product],
        professionals: &[Professional],
    ) -> Result<Vec<PlanEntry>, PlanError> {
        self.generate_at(
            feedback,
            user,
            products,
            professionals,
            Local::now().naive_local().date(),
        )
    }

    /// Like [`generate`](Self::generate) with an explicit "today", so age
    /// arithmetic is reproducible under test.
    pub fn generate_at(
        &self,
        feedback: &str,
        user: &UserProfile,
        products: &[Product],
        professionals: &[Professional],
        today: NaiveDate,
    ) -> Result<Vec<PlanEntry>, PlanError> {
        let recommendations = self.extract(feedback);
        generate::expand_plan(
            &recommendations,
            user,
            products,
            professionals,
            &self.policy,
            today,
        )
    }
}

// ─── Contract entry points ───────────────────────────────────────────────────

/// Extract recommendations with the built-in trigger table.
pub fn extract_health_plan(feedback: &str) -> RecommendationSet {
    extract::extract_with_rules(&RuleSet::seed(), feedback)
}

/// Generate a plan with the built-in trigger table and default policy.
pub fn generate_user_plan(
    feedback: &str,
    user: &UserProfile,
    products: &[Product],
    professionals: &[Professional],
) -> Result<Vec<PlanEntry>, PlanError> {
    PlanEngine::default().generate(feedback, user, products, professionals)
}
