//! HTTP implementation of the canvas extraction collaborator.

use crate::client::BackendClient;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use vichar_core::collaborator::{ExtractedIdea, ExtractionCollaborator, ExtractionRequest};
use vichar_core::error::{Result, VicharError};

const EXTRACT_PATH: &str = "/brainstorm/extract";

/// Extraction collaborator talking to the backend over HTTP.
#[derive(Clone)]
pub struct HttpExtractionCollaborator {
    client: Arc<BackendClient>,
}

impl HttpExtractionCollaborator {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct ExtractionResponse {
    success: bool,
    #[serde(default)]
    ideas: Vec<ExtractedIdea>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl ExtractionCollaborator for HttpExtractionCollaborator {
    async fn extract(&self, request: ExtractionRequest) -> Result<Vec<ExtractedIdea>> {
        let response: ExtractionResponse = self.client.post_json(EXTRACT_PATH, &request).await?;

        if !response.success {
            return Err(VicharError::collaborator(
                response
                    .error
                    .unwrap_or_else(|| "Canvas extraction failed".to_string()),
            ));
        }

        Ok(response.ideas)
    }
}
