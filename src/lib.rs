//! vitalplan — the plan-generation core of a health-tracking backend.
//!
//! The request-handler layer hands this crate the free text of an AI
//! feedback completion together with the user's profile and the product
//! and professional catalogs. The crate extracts structured screening and
//! consultation recommendations from the text, then expands them into a
//! chronologically ordered, age-annotated plan ready to persist as a plan
//! document. Routing, authentication, persistence, and the AI call itself
//! all live outside this crate.
//!
//! Everything here is synchronous and pure with respect to its inputs;
//! concurrent invocations need no coordination. The crate installs no
//! tracing subscriber; the host binary owns that.

pub mod models;
pub mod plan;

pub use models::{
    Consultation, PlanDocument, PlanEntry, Product, Professional, RecommendationSet, Screening,
    Urgency, UserProfile,
};
pub use plan::rules::{RuleEffect, RuleSet, TriggerRule};
pub use plan::types::PlanError;
pub use plan::{extract_health_plan, generate_user_plan, PlanEngine, PlanPolicy};
