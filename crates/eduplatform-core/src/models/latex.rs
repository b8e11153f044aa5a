//! LaTeX formatting, solving, explanation and compilation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatexAction {
    Format,
    Solve,
    Explain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatexProcessRequest {
    pub content: String,
    pub action: LatexAction,
}

impl LatexProcessRequest {
    pub fn new(content: impl Into<String>, action: LatexAction) -> Self {
        Self {
            content: content.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLatexRequest {
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileLatexRequest {
    pub latex_code: String,
}

/// Output of format/solve/explain. Only the fields for the requested
/// action are populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatexResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub formatted_code: Option<String>,
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub changes_made: Vec<String>,
    #[serde(default)]
    pub validation_errors: Option<Vec<String>>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub alternative_approaches: Option<Vec<String>>,
    #[serde(default)]
    pub components: Option<Value>,
    #[serde(default)]
    pub related_concepts: Vec<String>,
}

impl LatexResult {
    /// The main text of the result, whichever action produced it.
    pub fn primary_output(&self) -> Option<&str> {
        self.formatted_code
            .as_deref()
            .or(self.solution.as_deref())
            .or(self.explanation.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedLatex {
    #[serde(default)]
    pub latex_code: String,
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub pdf_preview_url: Option<String>,
    #[serde(default)]
    pub compilation_log: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatexHistoryEntry {
    pub id: String,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub input_data: Option<String>,
    #[serde(default)]
    pub output_data: Option<String>,
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatexHistory {
    #[serde(default)]
    pub history: Vec<LatexHistoryEntry>,
    #[serde(default)]
    pub total: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompiledLatex {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_wire_format() {
        let req = LatexProcessRequest::new(r"\frac{1}{2}", LatexAction::Solve);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["action"], "solve");
        assert_eq!(value["content"], r"\frac{1}{2}");
    }

    #[test]
    fn test_generate_request_renames_type() {
        let req = GenerateLatexRequest {
            description: "Quadratic formula".into(),
            doc_type: Some("equation".into()),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["type"], "equation");
        assert!(value.get("doc_type").is_none());
    }

    #[test]
    fn test_primary_output_prefers_formatted_code() {
        let json = r#"{"solution":"x = 2","explanation":"Divide both sides"}"#;
        let result: LatexResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.primary_output(), Some("x = 2"));
        assert_eq!(LatexResult::default().primary_output(), None);
    }
}
