//! Multipart payloads for file-bearing endpoints.

use std::path::Path;

use anyhow::{Context, Result};
use mime_guess::Mime;
use reqwest::multipart::{Form, Part};

/// Content type for a file name, guessed from its extension. Unknown
/// types are sent as raw bytes and left for the server to sniff.
pub fn mime_for(file_name: &str) -> Mime {
    mime_guess::from_path(file_name).first_or_octet_stream()
}

/// Incrementally builds a `multipart/form-data` body.
#[derive(Debug)]
pub struct MultipartBuilder {
    form: Form,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self { form: Form::new() }
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.form = self.form.text(name.to_string(), value.into());
        self
    }

    /// Add an optional text field, skipping it when `None`.
    pub fn text_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    /// Attach in-memory file content.
    pub fn bytes(mut self, name: &str, file_name: &str, data: Vec<u8>) -> Result<Self> {
        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name).as_ref())
            .context("Invalid MIME type")?;
        self.form = self.form.part(name.to_string(), part);
        Ok(self)
    }

    /// Read a file from disk and attach it under its own file name.
    pub async fn file(self, name: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?
            .to_string();
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.bytes(name, &file_name, data)
    }

    pub fn build(self) -> Form {
        self.form
    }
}

impl Default for MultipartBuilder {
    fn default() -> Self {
        Self::new()
    }
}
