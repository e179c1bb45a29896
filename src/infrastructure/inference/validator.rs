use std::collections::HashSet;

use tracing::{error, warn};

use crate::domain::{InferenceResult, MAX_HEMORRHAGIC, MAX_ISCHEMIC};

/// Parse the classifier's raw output into a guaranteed-well-formed result.
///
/// Malformed or truncated JSON never surfaces as an error: the classifier
/// is a probabilistic external system, and a best-effort empty answer is
/// preferable to failing the whole request. The raw text is logged for
/// diagnostics.
///
/// Parsed results are then repaired so the structural invariants hold
/// regardless of model compliance: category lists are truncated to their
/// maxima, image references outside the inventory are dropped, and
/// duplicate image references keep only the first occurrence.
pub fn validate_response(raw: &str, image_inventory: &[String]) -> InferenceResult {
    let parsed: InferenceResult = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(error = %e, raw, "Failed to decode classifier response");
            return InferenceResult::default();
        }
    };

    repair(parsed, image_inventory)
}

fn repair(mut result: InferenceResult, image_inventory: &[String]) -> InferenceResult {
    if result.ischemic.len() > MAX_ISCHEMIC {
        warn!(
            count = result.ischemic.len(),
            "Classifier exceeded the ischemic syndrome limit; truncating"
        );
        result.ischemic.truncate(MAX_ISCHEMIC);
    }

    if result.hemorrhagic.len() > MAX_HEMORRHAGIC {
        warn!(
            count = result.hemorrhagic.len(),
            "Classifier exceeded the hemorrhagic syndrome limit; truncating"
        );
        result.hemorrhagic.truncate(MAX_HEMORRHAGIC);
    }

    let inventory: HashSet<&str> = image_inventory.iter().map(String::as_str).collect();
    let mut used = HashSet::new();

    for syndrome in result
        .ischemic
        .iter_mut()
        .chain(result.hemorrhagic.iter_mut())
    {
        if let Some(image) = syndrome.suggested_image.take() {
            if !inventory.contains(image.as_str()) {
                warn!(image = %image, "Dropping image reference not present in the inventory");
            } else if !used.insert(image.clone()) {
                warn!(image = %image, "Dropping duplicate image reference");
            } else {
                syndrome.suggested_image = Some(image);
            }
        }
    }

    result
}
