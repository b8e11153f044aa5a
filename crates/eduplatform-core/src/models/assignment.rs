//! Assignments, submissions and grading.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateAssignmentRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_to_materials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub due_date: String,
    pub max_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAssignmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishAssignmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSubmissionRequest {
    pub score: f64,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric_scores: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Draft,
    Published,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub status: Option<AssignmentStatus>,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub questions: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Assignment {
    pub fn is_published(&self) -> bool {
        self.status == Some(AssignmentStatus::Published)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentList {
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub total: Option<usize>,
}

/// Wrapper for endpoints answering `{ message, assignment, preview }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub assignment: Option<Assignment>,
    #[serde(default)]
    pub preview: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(default)]
    pub assignment_id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub graded_at: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub ai_feedback: Option<String>,
    #[serde(default)]
    pub is_graded: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub submission: Option<Submission>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionList {
    #[serde(default)]
    pub assignment: Option<Assignment>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub total_submissions: Option<usize>,
    #[serde(default)]
    pub graded_count: Option<usize>,
}

impl SubmissionList {
    pub fn ungraded(&self) -> impl Iterator<Item = &Submission> {
        self.submissions.iter().filter(|s| !s.is_graded)
    }
}
