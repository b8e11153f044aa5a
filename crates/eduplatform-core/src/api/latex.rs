//! LaTeX processing endpoints.

use crate::models::{
    CompileLatexRequest, CompiledLatex, GenerateLatexRequest, GeneratedLatex, LatexHistory,
    LatexHistoryEntry, LatexProcessRequest, LatexResult,
};

use super::{ApiClient, Result};

pub struct LatexApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LatexApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn format(&self, data: &LatexProcessRequest) -> Result<LatexResult> {
        self.client.post("/api/v1/latex/format", data).await
    }

    pub async fn solve(&self, data: &LatexProcessRequest) -> Result<LatexResult> {
        self.client.post("/api/v1/latex/solve", data).await
    }

    pub async fn explain(&self, data: &LatexProcessRequest) -> Result<LatexResult> {
        self.client.post("/api/v1/latex/explain", data).await
    }

    pub async fn generate(&self, data: &GenerateLatexRequest) -> Result<GeneratedLatex> {
        self.client.post("/api/v1/latex/generate", data).await
    }

    pub async fn history(&self) -> Result<LatexHistory> {
        self.client.get("/api/v1/latex/history").await
    }

    pub async fn preview(&self, processing_id: &str) -> Result<LatexHistoryEntry> {
        self.client
            .get(&format!("/api/v1/latex/preview/{}", processing_id))
            .await
    }

    pub async fn compile(&self, data: &CompileLatexRequest) -> Result<CompiledLatex> {
        self.client.post("/api/v1/latex/compile", data).await
    }
}
