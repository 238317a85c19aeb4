//! HTTP implementation of the conversational AI collaborator.
//!
//! Calls the backend's brainstorm chat endpoint, which wraps the actual
//! model call, persona prompting, and any grounding/search.

use crate::client::BackendClient;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use vichar_core::collaborator::{ChatCollaborator, ChatReply, ChatRequest};
use vichar_core::error::{Result, VicharError};
use vichar_core::session::SourceCitation;

const CHAT_PATH: &str = "/brainstorm/chat";

/// Chat collaborator talking to the backend over HTTP.
#[derive(Clone)]
pub struct HttpChatCollaborator {
    client: Arc<BackendClient>,
}

impl HttpChatCollaborator {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    success: bool,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    sources: Vec<SourceCitation>,
    #[serde(default)]
    visualization: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl ChatCollaborator for HttpChatCollaborator {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply> {
        let response: ChatResponse = self.client.post_json(CHAT_PATH, &request).await?;

        if !response.success {
            return Err(VicharError::collaborator(
                response
                    .error
                    .unwrap_or_else(|| "Chat generation failed".to_string()),
            ));
        }

        let content = response.content.ok_or_else(|| {
            VicharError::collaborator("Chat response reported success but carried no content")
        })?;

        Ok(ChatReply {
            content,
            sources: response.sources,
            visualization: response.visualization,
        })
    }
}
