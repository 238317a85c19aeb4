//! HTTP clients for the external AI collaborators.
//!
//! One module per collaborator endpoint, all sharing a `BackendClient`
//! configured from `~/.config/vichar/config.toml`.

mod chat;
mod client;
mod config;
mod critique;
mod dpr;
mod extraction;

pub use chat::HttpChatCollaborator;
pub use client::BackendClient;
pub use config::BackendConfig;
pub use critique::HttpCritiqueCollaborator;
pub use dpr::HttpDprCollaborator;
pub use extraction::HttpExtractionCollaborator;

use std::sync::Arc;
use vichar_core::error::Result;

/// The full set of collaborator clients for one backend.
#[derive(Clone)]
pub struct CollaboratorSet {
    pub chat: Arc<HttpChatCollaborator>,
    pub critique: Arc<HttpCritiqueCollaborator>,
    pub extraction: Arc<HttpExtractionCollaborator>,
    pub dpr: Arc<HttpDprCollaborator>,
}

impl CollaboratorSet {
    /// Builds all collaborator clients over one shared HTTP client.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Arc::new(BackendClient::new(config)?);
        Ok(Self {
            chat: Arc::new(HttpChatCollaborator::new(client.clone())),
            critique: Arc::new(HttpCritiqueCollaborator::new(client.clone())),
            extraction: Arc::new(HttpExtractionCollaborator::new(client.clone())),
            dpr: Arc::new(HttpDprCollaborator::new(client)),
        })
    }

    /// Builds the collaborator set from the default config location.
    pub fn default_location() -> Result<Self> {
        Self::new(&BackendConfig::default_location()?)
    }
}
