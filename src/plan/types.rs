use thiserror::Error;

/// Errors the plan engine can surface. Missing catalog matches are policy,
/// not errors: screenings drop, consultations are emitted with a null
/// professional identity.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The user record carried a date of birth the engine cannot parse.
    /// Callers should reject the request instead of storing a plan built
    /// from meaningless ages.
    #[error("invalid date of birth {value:?}: {reason}")]
    InvalidDateOfBirth { value: String, reason: String },

    /// An externally supplied rule table failed to parse. This is a
    /// deployment configuration defect, not a per-request condition.
    #[error("rule table parse failed: {0}")]
    RuleTableParse(#[from] serde_json::Error),
}
