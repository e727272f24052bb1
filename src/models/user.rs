use serde::{Deserialize, Serialize};

/// A user account as stored by the user service. Only `dob` matters to the
/// plan engine; the remaining fields ride along for callers that already
/// hold the full document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Date of birth as persisted by the user store: a plain ISO date
    /// ("1980-06-15") or a full RFC 3339 timestamp. The generator parses
    /// it and rejects values it cannot read.
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}
