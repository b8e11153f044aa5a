//! AI agent endpoints.

use crate::models::{
    AiStudyPlanRequest, AnalyticsInsightsRequest, ChatAssistRequest, ChatReply,
    EnhanceContentRequest, GenerateAssignmentRubricRequest, GenerateCompleteCourseRequest,
    GradeSuggestion, IntelligentGradeRequest, JsonValue,
};

use super::{ApiClient, Result};

pub struct AiApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AiApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn generate_complete_course(
        &self,
        data: &GenerateCompleteCourseRequest,
    ) -> Result<JsonValue> {
        self.client.post("/api/v1/ai/courses/generate-complete", data).await
    }

    pub async fn generate_assignment_with_rubric(
        &self,
        data: &GenerateAssignmentRubricRequest,
    ) -> Result<JsonValue> {
        self.client
            .post("/api/v1/ai/assignments/generate-with-rubric", data)
            .await
    }

    pub async fn intelligent_grade(
        &self,
        data: &IntelligentGradeRequest,
    ) -> Result<GradeSuggestion> {
        self.client.post("/api/v1/ai/grading/intelligent-grade", data).await
    }

    pub async fn enhance_content(&self, data: &EnhanceContentRequest) -> Result<JsonValue> {
        self.client.post("/api/v1/ai/content/enhance", data).await
    }

    pub async fn create_study_plan(&self, data: &AiStudyPlanRequest) -> Result<JsonValue> {
        self.client.post("/api/v1/ai/study/plan", data).await
    }

    pub async fn chat_assist(&self, data: &ChatAssistRequest) -> Result<ChatReply> {
        self.client.post("/api/v1/ai/chat/assist", data).await
    }

    pub async fn analytics_insights(&self, data: &AnalyticsInsightsRequest) -> Result<JsonValue> {
        self.client.post("/api/v1/ai/analytics/insights", data).await
    }
}
