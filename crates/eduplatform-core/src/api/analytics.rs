//! Analytics endpoints. Report shapes are owned by the server and
//! returned as raw JSON.

use crate::models::{ExportRequest, JsonValue};

use super::{ApiClient, Result};

pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn course_performance(&self, course_id: &str) -> Result<JsonValue> {
        self.client
            .get(&format!("/api/v1/analytics/courses/{}/performance", course_id))
            .await
    }

    pub async fn student_progress(&self, student_id: &str) -> Result<JsonValue> {
        self.client
            .get(&format!("/api/v1/analytics/students/{}/progress", student_id))
            .await
    }

    pub async fn platform_overview(&self) -> Result<JsonValue> {
        self.client.get("/api/v1/analytics/platform/overview").await
    }

    pub async fn course_engagement(&self, course_id: &str) -> Result<JsonValue> {
        self.client
            .get(&format!("/api/v1/analytics/courses/{}/engagement", course_id))
            .await
    }

    pub async fn student_activity(&self, student_id: &str) -> Result<JsonValue> {
        self.client
            .get(&format!("/api/v1/analytics/students/{}/activity", student_id))
            .await
    }

    pub async fn assignment_insights(&self, assignment_id: &str) -> Result<JsonValue> {
        self.client
            .get(&format!("/api/v1/analytics/assignments/{}/insights", assignment_id))
            .await
    }

    pub async fn export_course_data(&self, course_id: &str, format: &str) -> Result<JsonValue> {
        let path = format!("/api/v1/analytics/courses/{}/export", course_id);
        let body = ExportRequest {
            format: format.to_string(),
        };
        self.client.post(&path, &body).await
    }

    pub async fn ai_usage(&self) -> Result<JsonValue> {
        self.client.get("/api/v1/analytics/ai-usage").await
    }
}
