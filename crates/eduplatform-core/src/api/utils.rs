//! Generic upload, conversion and search endpoints.

use reqwest::multipart::Form;

use crate::models::{ConvertRequest, JsonValue, SearchResults, UploadedFile};

use super::{ApiClient, Result};

pub struct UtilsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UtilsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn upload(&self, form: Form) -> Result<UploadedFile> {
        self.client.post_multipart("/api/v1/utils/upload", form).await
    }

    pub async fn convert(&self, data: &ConvertRequest) -> Result<JsonValue> {
        self.client.post("/api/v1/utils/convert", data).await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        self.client
            .get_with_query("/api/v1/utils/search", &[("q", query.to_string())])
            .await
    }
}
