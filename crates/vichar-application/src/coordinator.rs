//! The conversational workflow coordinator.
//!
//! One coordinator instance owns the in-memory state of one session and
//! sequences everything that happens to it: workflow phase transitions,
//! conversation appends, collaborator calls, canvas extraction, and DPR
//! assembly. Instances are session-scoped; they are created when a session
//! is opened and dropped when it is closed.
//!
//! # Persistence policy
//!
//! Conversation appends are optimistic: the in-memory log accepts the
//! message even if the durable write fails, which is logged as a warning
//! and otherwise swallowed. An unpersisted message is accepted as lost on
//! restart. Canvas writes are NOT optimistic; a failed batch write
//! propagates so the all-or-nothing extraction contract stays observable.

use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use vichar_core::Persona;
use vichar_core::canvas::{CanvasCategory, CanvasItem, CanvasRepository};
use vichar_core::collaborator::{
    ChatCollaborator, ChatRequest, CritiqueCollaborator, CritiqueRequest, DprCollaborator,
    DprContext, DprDocument, ExtractionCollaborator, ExtractionRequest,
};
use vichar_core::error::{Result, VicharError};
use vichar_core::session::{
    HistoryEntry, Message, Session, SessionRepository, SourceCitation, WorkflowMode,
};

/// Coordinates one session's Input→Refinery→Anchor workflow.
///
/// All state transitions, log appends, and collaborator calls for the
/// session are sequenced through this type. There is no shared mutable
/// state across sessions beyond the repositories, which are externally
/// synchronized.
pub struct WorkflowCoordinator {
    /// The owning session's ID, immutable for the coordinator's lifetime.
    session_id: String,
    /// In-memory authoritative session state.
    session: RwLock<Session>,
    /// Persistent storage for session data
    session_repository: Arc<dyn SessionRepository>,
    /// Persistent storage for canvas items
    canvas_repository: Arc<dyn CanvasRepository>,
    /// Conversational AI collaborator
    chat: Arc<dyn ChatCollaborator>,
    /// Critique collaborator
    critique: Arc<dyn CritiqueCollaborator>,
    /// Canvas extraction collaborator
    extraction: Arc<dyn ExtractionCollaborator>,
    /// DPR assembly collaborator
    dpr: Arc<dyn DprCollaborator>,
    /// Busy flag: at most one DPR assembly in flight per session.
    assembly_in_flight: AtomicBool,
}

/// Resets the assembly busy flag when the request completes or fails.
struct AssemblyGuard<'a>(&'a AtomicBool);

impl Drop for AssemblyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl WorkflowCoordinator {
    /// Creates a coordinator for a session with injected dependencies.
    pub fn new(
        session: Session,
        session_repository: Arc<dyn SessionRepository>,
        canvas_repository: Arc<dyn CanvasRepository>,
        chat: Arc<dyn ChatCollaborator>,
        critique: Arc<dyn CritiqueCollaborator>,
        extraction: Arc<dyn ExtractionCollaborator>,
        dpr: Arc<dyn DprCollaborator>,
    ) -> Self {
        Self {
            session_id: session.id.clone(),
            session: RwLock::new(session),
            session_repository,
            canvas_repository,
            chat,
            critique,
            extraction,
            dpr,
            assembly_in_flight: AtomicBool::new(false),
        }
    }

    /// The ID of the session this coordinator owns.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// A point-in-time copy of the session state, for UI rendering.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// The currently active persona.
    pub async fn persona(&self) -> Persona {
        self.session.read().await.persona
    }

    /// The currently active workflow mode.
    pub async fn workflow_mode(&self) -> WorkflowMode {
        self.session.read().await.workflow_mode
    }

    // ========================================================================
    // Conversation log
    // ========================================================================

    /// Appends a user message to the conversation log.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Validation` if the text is empty or
    /// whitespace-only; nothing is appended or persisted in that case.
    pub async fn append_user_message(&self, text: impl Into<String>) -> Result<Message> {
        let snapshot;
        let message;
        {
            let mut session = self.session.write().await;
            message = session.log.append_user(text)?.clone();
            session.touch();
            snapshot = session.clone();
        }
        self.persist_optimistic(&snapshot).await;
        Ok(message)
    }

    /// Appends an assistant message with its metadata.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Validation` if the text is empty or
    /// whitespace-only.
    pub async fn append_assistant_message(
        &self,
        text: impl Into<String>,
        persona: Persona,
        sources: Vec<SourceCitation>,
        critique: bool,
    ) -> Result<Message> {
        let snapshot;
        let message;
        {
            let mut session = self.session.write().await;
            message = session
                .log
                .append_assistant(text, persona, sources, critique)?
                .clone();
            session.touch();
            snapshot = session.clone();
        }
        self.persist_optimistic(&snapshot).await;
        Ok(message)
    }

    /// Sends a user message through the full conversational flow: append,
    /// persist, call the chat collaborator, append the reply.
    ///
    /// The user message's persistence is awaited before the collaborator
    /// call, so the history the backend sees always reflects prior appends.
    /// The collaborator receives the new text as `message` and the log
    /// prior to it as `history`.
    ///
    /// # Errors
    ///
    /// - `VicharError::Validation` for empty input (nothing appended)
    /// - `VicharError::Collaborator` if the backend call fails; the user
    ///   message remains in the log
    pub async fn send_message(
        &self,
        text: impl Into<String>,
        user_profile: Option<Value>,
        user_location: Option<String>,
    ) -> Result<Message> {
        let (request, snapshot) = {
            let mut session = self.session.write().await;
            let history: Vec<HistoryEntry> = session.log.history_for_collaborator().collect();
            let message = session.log.append_user(text)?.content.clone();
            session.touch();

            let request = ChatRequest {
                message,
                history,
                persona: session.persona,
                critique_mode: session.workflow_mode == WorkflowMode::Refinery,
                workflow_mode: session.workflow_mode,
                user_profile,
                user_location,
            };
            (request, session.clone())
        };
        self.persist_optimistic(&snapshot).await;

        let critique_mode = request.critique_mode;
        let persona = request.persona;
        let reply = self.chat.send(request).await?;

        let snapshot;
        let message;
        {
            let mut session = self.session.write().await;
            let assistant =
                Message::assistant(reply.content, persona, reply.sources, critique_mode)
                    .with_visualization(reply.visualization);
            message = session.log.append_message(assistant)?.clone();
            session.touch();
            snapshot = session.clone();
        }
        self.persist_optimistic(&snapshot).await;
        Ok(message)
    }

    /// Clears the conversation log. Canvas items survive this.
    pub async fn clear_conversation(&self) {
        let snapshot = {
            let mut session = self.session.write().await;
            session.log.clear();
            session.touch();
            session.clone()
        };
        self.persist_optimistic(&snapshot).await;
    }

    // ========================================================================
    // Workflow state
    // ========================================================================

    /// Transitions to a workflow phase. Any phase is reachable from any
    /// other; there is no terminal state.
    ///
    /// Side effects:
    /// - `Refinery` forces the persona to `Critical`
    /// - `Anchor` invokes canvas extraction on the current conversation;
    ///   the extraction request carries `Anchor` as its mode hint even
    ///   though the mode commits only after extraction succeeds
    ///
    /// # Errors
    ///
    /// For `Anchor`, extraction preconditions and failures propagate and
    /// the mode is left unchanged (side effects run before the mode
    /// commits, so a failed transition mutates nothing).
    pub async fn transition_to(&self, mode: WorkflowMode) -> Result<()> {
        if mode == WorkflowMode::Anchor {
            self.extract_with_mode(WorkflowMode::Anchor).await?;
        }

        let snapshot = {
            let mut session = self.session.write().await;
            session.workflow_mode = mode;
            if mode == WorkflowMode::Refinery {
                session.persona = Persona::Critical;
            }
            session.touch();
            session.clone()
        };
        self.persist_optimistic(&snapshot).await;
        Ok(())
    }

    /// Switches the active persona manually.
    pub async fn set_persona(&self, persona: Persona) {
        let snapshot = {
            let mut session = self.session.write().await;
            session.persona = persona;
            session.touch();
            session.clone()
        };
        self.persist_optimistic(&snapshot).await;
    }

    // ========================================================================
    // Canvas extraction
    // ========================================================================

    /// Turns the current conversation into a fresh batch of categorized
    /// canvas items.
    ///
    /// Deliberately NOT idempotent: each call appends a new batch, and the
    /// user curates duplicates by deleting items. The batch is
    /// all-or-nothing; a collaborator failure writes no items.
    ///
    /// # Errors
    ///
    /// - `VicharError::EmptyConversation` if the log is empty; the
    ///   collaborator is never called in that case
    /// - `VicharError::Collaborator` if extraction fails
    pub async fn extract_from_conversation(&self) -> Result<Vec<CanvasItem>> {
        let mode = self.session.read().await.workflow_mode;
        self.extract_with_mode(mode).await
    }

    async fn extract_with_mode(&self, mode: WorkflowMode) -> Result<Vec<CanvasItem>> {
        let request = {
            let session = self.session.read().await;
            if session.log.is_empty() {
                return Err(VicharError::EmptyConversation);
            }
            ExtractionRequest {
                history: session.log.history_for_collaborator().collect(),
                mode,
            }
        };

        let ideas = self.extraction.extract(request).await?;

        let items: Vec<CanvasItem> = ideas
            .into_iter()
            .map(|idea| {
                let category = CanvasCategory::parse_lenient(&idea.category);
                CanvasItem::new(&self.session_id, idea.title, idea.content, category)
            })
            .collect();

        self.canvas_repository
            .save_batch(&self.session_id, &items)
            .await?;

        tracing::debug!(
            session_id = %self.session_id,
            count = items.len(),
            "Extracted canvas items"
        );
        Ok(items)
    }

    /// Returns the session's canvas items in creation order.
    pub async fn canvas_items(&self) -> Result<Vec<CanvasItem>> {
        self.canvas_repository
            .items_for_session(&self.session_id)
            .await
    }

    /// Deletes a single canvas item.
    pub async fn delete_canvas_item(&self, item_id: &str) -> Result<()> {
        self.canvas_repository
            .delete_item(&self.session_id, item_id)
            .await
    }

    // ========================================================================
    // Critique
    // ========================================================================

    /// Requests a critique of the given ideas and appends it to the log as
    /// a critique-flagged assistant message from the Critical persona.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Validation` if `ideas` is empty; the
    /// collaborator is never called in that case.
    pub async fn request_critique(&self, ideas: Vec<String>) -> Result<Message> {
        if ideas.is_empty() {
            return Err(VicharError::validation(
                "At least one idea is required for a critique",
            ));
        }

        let request = {
            let session = self.session.read().await;
            CritiqueRequest {
                ideas,
                history: session.log.history_for_collaborator().collect(),
            }
        };

        let critique_text = self.critique.critique(request).await?;

        self.append_assistant_message(critique_text, Persona::Critical, Vec::new(), true)
            .await
    }

    // ========================================================================
    // DPR assembly
    // ========================================================================

    /// Requests assembly of a structured DPR document from the given
    /// canvas items.
    ///
    /// Only one assembly request may be in flight per session; a second
    /// invocation while one is pending is rejected.
    ///
    /// # Errors
    ///
    /// - `VicharError::EmptySelection` if `items` is empty; no
    ///   collaborator call is made
    /// - `VicharError::AssemblyInProgress` if a request is already pending
    /// - `VicharError::Collaborator` if assembly fails
    pub async fn generate_document(
        &self,
        items: Vec<CanvasItem>,
        user_id: impl Into<String>,
        user_data: Option<Value>,
        business_idea: Option<String>,
    ) -> Result<DprDocument> {
        if items.is_empty() {
            return Err(VicharError::EmptySelection);
        }

        if self.assembly_in_flight.swap(true, Ordering::SeqCst) {
            return Err(VicharError::AssemblyInProgress);
        }
        let _guard = AssemblyGuard(&self.assembly_in_flight);

        let context = {
            let session = self.session.read().await;
            DprContext {
                user_id: user_id.into(),
                persona: session.persona,
                mode: session.workflow_mode,
                session_title: session.title.clone(),
                user_data,
                business_idea,
            }
        };

        self.dpr.assemble(items, context).await
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Persists the session, logging and swallowing failures.
    ///
    /// The in-memory state is authoritative; a failed durable write leaves
    /// the operation successful from the user's perspective.
    async fn persist_optimistic(&self, session: &Session) {
        if let Err(e) = self.session_repository.save(session).await {
            tracing::warn!(
                session_id = %session.id,
                error = %e,
                "Failed to persist session; in-memory state retained"
            );
        }
    }
}
