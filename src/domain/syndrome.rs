use serde::{Deserialize, Serialize};

/// Maximum number of ischemic syndromes in one result.
pub const MAX_ISCHEMIC: usize = 4;

/// Maximum number of hemorrhagic syndromes in one result.
pub const MAX_HEMORRHAGIC: usize = 2;

/// A single candidate syndrome produced by the classifier.
///
/// `suggested_image`, when present, must name a file from the image
/// inventory; the response validator drops references that do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syndrome {
    pub name: String,
    pub artery: String,
    pub location: String,
    pub reasoning: String,
    #[serde(default)]
    pub suggested_image: Option<String>,
}

/// The categorized inference result returned to callers.
///
/// Wire field names match the public API contract: `ischemic_syndromes`
/// and `hemorrhagic_syndromes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResult {
    #[serde(rename = "ischemic_syndromes")]
    pub ischemic: Vec<Syndrome>,
    #[serde(rename = "hemorrhagic_syndromes")]
    pub hemorrhagic: Vec<Syndrome>,
}

impl InferenceResult {
    pub fn is_empty(&self) -> bool {
        self.ischemic.is_empty() && self.hemorrhagic.is_empty()
    }

    /// All syndromes in result order: ischemic first, then hemorrhagic.
    pub fn syndromes(&self) -> impl Iterator<Item = &Syndrome> {
        self.ischemic.iter().chain(self.hemorrhagic.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syndrome(name: &str) -> Syndrome {
        Syndrome {
            name: name.to_string(),
            artery: "PCA".to_string(),
            location: "Midbrain".to_string(),
            reasoning: "Test reasoning".to_string(),
            suggested_image: None,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let result = InferenceResult {
            ischemic: vec![syndrome("Weber syndrome")],
            hemorrhagic: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"ischemic_syndromes\""));
        assert!(json.contains("\"hemorrhagic_syndromes\""));
        assert!(json.contains("\"suggested_image\":null"));
    }

    #[test]
    fn test_missing_suggested_image_deserializes_as_none() {
        let json = r#"{
            "ischemic_syndromes": [{
                "name": "Wallenberg syndrome",
                "artery": "PICA",
                "location": "Lateral medulla",
                "reasoning": "Crossed sensory findings"
            }],
            "hemorrhagic_syndromes": []
        }"#;

        let result: InferenceResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ischemic.len(), 1);
        assert_eq!(result.ischemic[0].suggested_image, None);
    }

    #[test]
    fn test_syndromes_iterates_ischemic_before_hemorrhagic() {
        let result = InferenceResult {
            ischemic: vec![syndrome("a"), syndrome("b")],
            hemorrhagic: vec![syndrome("c")],
        };

        let names: Vec<&str> = result.syndromes().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
