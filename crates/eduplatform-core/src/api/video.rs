//! Video understanding endpoints.

use reqwest::multipart::Form;

use crate::models::{
    ExplainVideoRequest, KeyPoints, MessageResponse, ProcessYoutubeRequest, VideoAnalysis,
    VideoAnalysisList, VideoExplanation, VideoSummary,
};

use super::{ApiClient, Result};

pub struct VideoApi<'a> {
    client: &'a ApiClient,
}

impl<'a> VideoApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn process_youtube(&self, data: &ProcessYoutubeRequest) -> Result<VideoAnalysis> {
        self.client.post("/api/v1/video/youtube/process", data).await
    }

    /// Upload a video file (form field `file`, plus `title`/`analysis_type`).
    pub async fn upload_and_process(&self, form: Form) -> Result<VideoAnalysis> {
        self.client
            .post_multipart("/api/v1/video/upload/process", form)
            .await
    }

    pub async fn explain(&self, data: &ExplainVideoRequest) -> Result<VideoExplanation> {
        self.client.post("/api/v1/video/explain", data).await
    }

    pub async fn analyses(&self) -> Result<VideoAnalysisList> {
        self.client.get("/api/v1/video/analyses").await
    }

    pub async fn analysis(&self, analysis_id: &str) -> Result<VideoAnalysis> {
        self.client
            .get(&format!("/api/v1/video/analyses/{}", analysis_id))
            .await
    }

    pub async fn delete_analysis(&self, analysis_id: &str) -> Result<MessageResponse> {
        self.client
            .delete(&format!("/api/v1/video/analyses/{}", analysis_id))
            .await
    }

    pub async fn extract_key_points(&self, analysis_id: &str) -> Result<KeyPoints> {
        self.client
            .post_empty(&format!("/api/v1/video/analyses/{}/extract-key-points", analysis_id))
            .await
    }

    pub async fn generate_summary(&self, analysis_id: &str) -> Result<VideoSummary> {
        self.client
            .post_empty(&format!("/api/v1/video/analyses/{}/generate-summary", analysis_id))
            .await
    }
}
