//! HTTP implementation of the critique collaborator.

use crate::client::BackendClient;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use vichar_core::collaborator::{CritiqueCollaborator, CritiqueRequest};
use vichar_core::error::{Result, VicharError};

const CRITIQUE_PATH: &str = "/brainstorm/critique";

/// Critique collaborator talking to the backend over HTTP.
#[derive(Clone)]
pub struct HttpCritiqueCollaborator {
    client: Arc<BackendClient>,
}

impl HttpCritiqueCollaborator {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct CritiqueResponse {
    success: bool,
    #[serde(default)]
    critique: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl CritiqueCollaborator for HttpCritiqueCollaborator {
    async fn critique(&self, request: CritiqueRequest) -> Result<String> {
        let response: CritiqueResponse = self.client.post_json(CRITIQUE_PATH, &request).await?;

        if !response.success {
            return Err(VicharError::collaborator(
                response
                    .error
                    .unwrap_or_else(|| "Critique generation failed".to_string()),
            ));
        }

        response.critique.ok_or_else(|| {
            VicharError::collaborator("Critique response reported success but carried no critique")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vichar_core::session::HistoryEntry;

    #[test]
    fn test_request_wire_shape() {
        let request = CritiqueRequest {
            ideas: vec!["Tiffin service for IT parks".to_string()],
            history: vec![HistoryEntry {
                role: "assistant".to_string(),
                content: "Tell me more.".to_string(),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ideas"][0], "Tiffin service for IT parks");
        assert_eq!(json["history"][0]["role"], "assistant");
    }

    #[test]
    fn test_response_shapes() {
        let ok: CritiqueResponse =
            serde_json::from_str(r#"{"success": true, "critique": "Margins are thin."}"#).unwrap();
        assert_eq!(ok.critique.as_deref(), Some("Margins are thin."));

        let failed: CritiqueResponse =
            serde_json::from_str(r#"{"success": false, "error": "quota exceeded"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("quota exceeded"));
    }
}
