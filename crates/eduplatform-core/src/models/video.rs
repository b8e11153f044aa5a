//! Video understanding: YouTube/upload analysis and follow-up questions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoAnalysisType {
    Summarize,
    Transcribe,
    Explain,
}

impl VideoAnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoAnalysisType::Summarize => "summarize",
            VideoAnalysisType::Transcribe => "transcribe",
            VideoAnalysisType::Explain => "explain",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessYoutubeRequest {
    pub url: String,
    pub analysis_type: VideoAnalysisType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainVideoRequest {
    pub analysis_id: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysis {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub analysis_type: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_points: Option<Vec<Value>>,
    /// Seconds
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoAnalysisList {
    #[serde(default)]
    pub analyses: Vec<VideoAnalysis>,
    #[serde(default)]
    pub total: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoExplanation {
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub relevant_segments: Option<Vec<Value>>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyPoints {
    #[serde(default)]
    pub key_points: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoSummary {
    #[serde(default)]
    pub summary: String,
}
