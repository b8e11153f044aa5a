//! Backup, import and report export endpoints.

use reqwest::multipart::Form;

use crate::models::JsonValue;

use super::{ApiClient, Result};

pub struct ExportApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ExportApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn backup_course(&self, course_id: &str) -> Result<JsonValue> {
        self.client
            .post_empty(&format!("/api/v1/export/courses/{}/backup", course_id))
            .await
    }

    pub async fn import_course(&self, form: Form) -> Result<JsonValue> {
        self.client.post_multipart("/api/v1/import/courses", form).await
    }

    pub async fn student_progress_report(&self, student_id: &str) -> Result<JsonValue> {
        self.client
            .post_empty(&format!("/api/v1/export/student/{}/progress-report", student_id))
            .await
    }

    pub async fn gradebook(&self, course_id: &str) -> Result<JsonValue> {
        self.client
            .post_empty(&format!("/api/v1/export/courses/{}/gradebook", course_id))
            .await
    }
}
