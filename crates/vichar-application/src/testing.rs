//! In-memory mock repositories and collaborators shared by the unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;
use vichar_core::canvas::{CanvasItem, CanvasRepository};
use vichar_core::collaborator::{
    ChatCollaborator, ChatReply, ChatRequest, CritiqueCollaborator, CritiqueRequest,
    DprCollaborator, DprContext, DprDocument, ExtractedIdea, ExtractionCollaborator,
    ExtractionRequest,
};
use vichar_core::error::{Result, VicharError};
use vichar_core::session::{Session, SessionRepository};
use vichar_core::state::{AppState, StateRepository};

// ============================================================================
// Repositories
// ============================================================================

pub struct MockSessionRepository {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Synchronous accessor for assertions.
    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(session_id).cloned()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(session_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        self.sessions.lock().unwrap().remove(session_id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        Ok(self.sessions.lock().unwrap().values().cloned().collect())
    }
}

/// Repository whose writes always fail, for exercising the optimistic
/// persistence path.
pub struct FailingSessionRepository;

#[async_trait]
impl SessionRepository for FailingSessionRepository {
    async fn find_by_id(&self, _session_id: &str) -> Result<Option<Session>> {
        Ok(None)
    }

    async fn save(&self, _session: &Session) -> Result<()> {
        Err(VicharError::data_access("disk full"))
    }

    async fn delete(&self, _session_id: &str) -> Result<()> {
        Err(VicharError::data_access("disk full"))
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        Ok(Vec::new())
    }
}

pub struct MockStateRepository {
    state: Mutex<AppState>,
}

impl MockStateRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(AppState::default()),
        }
    }
}

#[async_trait]
impl StateRepository for MockStateRepository {
    async fn get_active_session(&self) -> Option<String> {
        self.state.lock().unwrap().active_session_id.clone()
    }

    async fn set_active_session(&self, session_id: String) -> Result<()> {
        self.state.lock().unwrap().active_session_id = Some(session_id);
        Ok(())
    }

    async fn clear_active_session(&self) -> Result<()> {
        self.state.lock().unwrap().active_session_id = None;
        Ok(())
    }
}

pub struct MockCanvasRepository {
    boards: Mutex<HashMap<String, Vec<CanvasItem>>>,
}

impl MockCanvasRepository {
    pub fn new() -> Self {
        Self {
            boards: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CanvasRepository for MockCanvasRepository {
    async fn items_for_session(&self, session_id: &str) -> Result<Vec<CanvasItem>> {
        Ok(self
            .boards
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_batch(&self, session_id: &str, items: &[CanvasItem]) -> Result<()> {
        self.boards
            .lock()
            .unwrap()
            .entry(session_id.to_string())
            .or_default()
            .extend(items.to_vec());
        Ok(())
    }

    async fn delete_item(&self, session_id: &str, item_id: &str) -> Result<()> {
        let mut boards = self.boards.lock().unwrap();
        let board = boards
            .get_mut(session_id)
            .ok_or_else(|| VicharError::not_found("canvas item", item_id))?;
        let before = board.len();
        board.retain(|item| item.id != item_id);
        if board.len() == before {
            return Err(VicharError::not_found("canvas item", item_id));
        }
        Ok(())
    }
}

// ============================================================================
// Collaborators
// ============================================================================

pub struct MockChatCollaborator {
    reply: String,
    last_request: Mutex<Option<ChatRequest>>,
    calls: AtomicUsize,
}

impl MockChatCollaborator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            last_request: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatCollaborator for MockChatCollaborator {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        Ok(ChatReply {
            content: self.reply.clone(),
            sources: Vec::new(),
            visualization: None,
        })
    }
}

pub struct MockCritiqueCollaborator {
    critique: String,
    calls: AtomicUsize,
}

impl MockCritiqueCollaborator {
    pub fn new(critique: impl Into<String>) -> Self {
        Self {
            critique: critique.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CritiqueCollaborator for MockCritiqueCollaborator {
    async fn critique(&self, _request: CritiqueRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.critique.clone())
    }
}

pub struct MockExtractionCollaborator {
    ideas: Vec<ExtractedIdea>,
    failure: Option<String>,
    last_request: Mutex<Option<ExtractionRequest>>,
    calls: AtomicUsize,
}

impl MockExtractionCollaborator {
    pub fn new(ideas: Vec<ExtractedIdea>) -> Self {
        Self {
            ideas,
            failure: None,
            last_request: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            ideas: Vec::new(),
            failure: Some(message.into()),
            last_request: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn last_request(&self) -> Option<ExtractionRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }
}

#[async_trait]
impl ExtractionCollaborator for MockExtractionCollaborator {
    async fn extract(&self, request: ExtractionRequest) -> Result<Vec<ExtractedIdea>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        if let Some(message) = &self.failure {
            return Err(VicharError::collaborator(message.clone()));
        }
        Ok(self.ideas.clone())
    }
}

pub struct MockDprCollaborator {
    blocking: bool,
    started: Notify,
    release: Notify,
    last_context: Mutex<Option<DprContext>>,
    calls: AtomicUsize,
}

impl MockDprCollaborator {
    pub fn new() -> Self {
        Self {
            blocking: false,
            started: Notify::new(),
            release: Notify::new(),
            last_context: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// A collaborator that parks until `release()` is called, for
    /// exercising the in-flight busy flag.
    pub fn blocking() -> Self {
        Self {
            blocking: true,
            ..Self::new()
        }
    }

    pub async fn wait_until_started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn last_context(&self) -> Option<DprContext> {
        self.last_context.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DprCollaborator for MockDprCollaborator {
    async fn assemble(&self, _items: Vec<CanvasItem>, context: DprContext) -> Result<DprDocument> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_context.lock().unwrap() = Some(context);
        if self.blocking {
            self.started.notify_one();
            self.release.notified().await;
        }
        Ok(DprDocument::default())
    }
}
