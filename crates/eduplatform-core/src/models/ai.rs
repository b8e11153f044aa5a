//! Requests for the AI agent endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCompleteCourseRequest {
    pub title: String,
    pub description: String,
    pub topics: Vec<String>,
    pub duration_weeks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAssignmentRubricRequest {
    pub assignment_id: String,
    pub criteria: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligentGradeRequest {
    pub submission_id: String,
    pub use_rubric: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceContentRequest {
    pub content: String,
    pub enhancement_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiStudyPlanRequest {
    pub student_id: String,
    pub goals: Vec<String>,
    pub timeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAssistRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsInsightsRequest {
    pub data_type: String,
    pub data_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, alias = "reply", alias = "message")]
    pub response: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeSuggestion {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub rubric_scores: Option<Value>,
    #[serde(default)]
    pub confidence: Option<f64>,
}
