//! Prompt construction for the two generation calls.
//!
//! The classifier prompt carries the grounding and cardinality rules as
//! instructions; the response validator enforces them structurally
//! afterwards.

pub const CLASSIFICATION_SYSTEM_PROMPT: &str = "Act as a neurology expert.";

/// Prompt for the keyword extraction call: clinical findings only, no
/// laterality, translated to English, comma-separated.
pub fn keyword_extraction_prompt(query: &str) -> String {
    format!(
        r#"From the following clinical description, which may be in any language, please identify all key neurological signs and symptoms.
Focus on the core clinical findings and ignore laterality (e.g., 'right', 'left', 'direita', 'esquerda').
Provide the **English translation** for these findings.
Return them as a comma-separated list. Be comprehensive.
Description: "{query}"
English Keywords:
"#
    )
}

/// Prompt for the classification call: justification restricted to the
/// supplied snippets, up to four ischemic and two hemorrhagic syndromes,
/// at most one image per syndrome from the exact inventory, no image
/// reuse, strict two-key JSON output.
pub fn classification_prompt(query: &str, context_snippets: &str, image_list: &[String]) -> String {
    let image_list_str = image_list.join("\n");
    format!(
        r#"Analyze the clinical presentation: "{query}".

Base your analysis ONLY on the following snippets extracted from neurological literature:
Context Snippets: --- {context_snippets} ---

From the list of available images, select the most relevant one for each identified syndrome.
Available Image Files: --- {image_list_str} ---

Your main goal is to identify the most likely neurological syndromes.
Populate two distinct lists:
1.  `ischemic_syndromes`: A list of up to **four (4)** of the most probable clinically distinct ISCHEMIC syndromes. If you are very confident in one, you can provide fewer.
2.  `hemorrhagic_syndromes`: A list of up to **two (2)** of the most probable HEMORRHAGIC syndromes.

For each syndrome in both lists:
- Provide a concise justification (`reasoning`) based ONLY on the provided context snippets.
- Select **exactly one** illustrative image filename from the provided list. The filename must be an EXACT match.
- **Do not use the same image filename for more than one syndrome.**

If no relevant syndromes are found based on the context, return empty lists.

Respond **in English**, with this strict JSON format:
{{
  "ischemic_syndromes": [
    {{
      "name": "Ischemic Syndrome 1",
      "artery": "Artery involved",
      "location": "Anatomical location",
      "reasoning": "A concise justification for this specific ischemic syndrome.",
      "suggested_image": "exact_filename_from_list.png"
    }}
  ],
  "hemorrhagic_syndromes": [
    {{
      "name": "Hemorrhagic Syndrome 1",
      "artery": "Artery/Vessel involved",
      "location": "Anatomical location",
      "reasoning": "A concise justification for this specific hemorrhagic syndrome.",
      "suggested_image": "exact_filename_from_list.png"
    }}
  ]
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_contains_query_and_rules() {
        let prompt = keyword_extraction_prompt("paciente com ptose à direita");

        assert!(prompt.contains("paciente com ptose à direita"));
        assert!(prompt.contains("ignore laterality"));
        assert!(prompt.contains("English translation"));
        assert!(prompt.contains("comma-separated list"));
    }

    #[test]
    fn test_classification_prompt_enforces_grounding_and_cardinality() {
        let images = vec!["mca_infarct.png".to_string(), "pons_bleed.png".to_string()];
        let prompt = classification_prompt("sudden hemiparesis", "--- some snippets ---", &images);

        assert!(prompt.contains("sudden hemiparesis"));
        assert!(prompt.contains("ONLY on the following snippets"));
        assert!(prompt.contains("up to **four (4)**"));
        assert!(prompt.contains("up to **two (2)**"));
        assert!(prompt.contains("Do not use the same image filename"));
        assert!(prompt.contains("mca_infarct.png\npons_bleed.png"));
        assert!(prompt.contains("return empty lists"));
    }

    #[test]
    fn test_classification_prompt_includes_context_block() {
        let prompt = classification_prompt("query", "--- Snippet from ch01 ---\nptosis\n", &[]);
        assert!(prompt.contains("--- Snippet from ch01 ---\nptosis\n"));
    }
}
