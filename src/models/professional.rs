use serde::{Deserialize, Serialize};

/// A professional from the roster service. `speciality` holds one or more
/// specialty labels ("Oncology", "Medical Genetics", ...); the store's
/// documents use the lowercase `firstname`/`lastname` field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    #[serde(default)]
    pub speciality: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Professional {
    /// Display name as written into plan entries.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_space() {
        let pro = Professional {
            id: "pr1".into(),
            first_name: "Ada".into(),
            last_name: "Okafor".into(),
            speciality: vec!["Oncology".into()],
            hourly_rate: None,
            description: None,
        };
        assert_eq!(pro.full_name(), "Ada Okafor");
    }

    #[test]
    fn deserializes_store_field_names() {
        let json = r#"{
            "id": "pr2",
            "firstname": "Lena",
            "lastname": "Vogel",
            "speciality": ["Medical Genetics", "Oncology"]
        }"#;
        let pro: Professional = serde_json::from_str(json).unwrap();
        assert_eq!(pro.first_name, "Lena");
        assert_eq!(pro.speciality.len(), 2);
        assert!(pro.hourly_rate.is_none());
    }
}
