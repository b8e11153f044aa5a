//! Flashcard endpoints.

use crate::models::{
    FlashcardHistory, FlashcardProgress, FlashcardSet, FlashcardsFromMaterialRequest,
    FlashcardsFromVideoRequest, GenerateFlashcardsRequest, MessageResponse, ReviewRequest,
    StudyPlan, StudyPlanRequest,
};

use super::{ApiClient, Result};

pub struct FlashcardsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FlashcardsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn generate(&self, data: &GenerateFlashcardsRequest) -> Result<FlashcardSet> {
        self.client.post("/api/v1/flashcards/generate", data).await
    }

    pub async fn create_study_plan(&self, data: &StudyPlanRequest) -> Result<StudyPlan> {
        self.client.post("/api/v1/flashcards/study-plan", data).await
    }

    pub async fn history(&self) -> Result<FlashcardHistory> {
        self.client.get("/api/v1/flashcards/history").await
    }

    pub async fn review(
        &self,
        flashcard_set_id: &str,
        data: &ReviewRequest,
    ) -> Result<MessageResponse> {
        let path = format!("/api/v1/flashcards/{}/review", flashcard_set_id);
        self.client.post(&path, data).await
    }

    pub async fn progress(&self, flashcard_set_id: &str) -> Result<FlashcardProgress> {
        self.client
            .get(&format!("/api/v1/flashcards/{}/progress", flashcard_set_id))
            .await
    }

    pub async fn from_material(
        &self,
        data: &FlashcardsFromMaterialRequest,
    ) -> Result<FlashcardSet> {
        self.client.post("/api/v1/flashcards/from-material", data).await
    }

    pub async fn from_video(&self, data: &FlashcardsFromVideoRequest) -> Result<FlashcardSet> {
        self.client.post("/api/v1/flashcards/from-video", data).await
    }
}
