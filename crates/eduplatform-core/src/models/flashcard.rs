//! Flashcard generation, study plans and spaced review.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateFlashcardsRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanRequest {
    pub topics: Vec<String>,
    pub duration_days: u32,
    pub daily_time_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub card_id: String,
    pub difficulty: ReviewDifficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsFromMaterialRequest {
    pub material_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsFromVideoRequest {
    pub analysis_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub id: Option<String>,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashcardSet {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub study_plan: Option<Value>,
    /// Minutes
    #[serde(default)]
    pub estimated_study_time: Option<u32>,
    #[serde(default)]
    pub difficulty_distribution: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyPlan {
    #[serde(default)]
    pub plan: Option<Value>,
    #[serde(default)]
    pub schedule: Vec<Value>,
    #[serde(default)]
    pub total_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashcardHistory {
    #[serde(default)]
    pub sets: Vec<FlashcardSet>,
    #[serde(default)]
    pub total: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashcardProgress {
    #[serde(default)]
    pub total_cards: u32,
    #[serde(default)]
    pub reviewed_cards: u32,
    #[serde(default)]
    pub mastered_cards: u32,
    #[serde(default)]
    pub next_review_at: Option<String>,
}

impl FlashcardProgress {
    /// Share of cards mastered, 0-100.
    pub fn mastery_percent(&self) -> u32 {
        if self.total_cards == 0 {
            0
        } else {
            self.mastered_cards.min(self.total_cards) * 100 / self.total_cards
        }
    }
}
