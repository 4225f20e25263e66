//! Dispatcher - drives the per-conversation state machine.
//!
//! Each inbound message either opens a flow (trigger), answers the current
//! step, or cancels. Handling is serialized per conversation id so a message
//! arriving while a search is in flight waits for it; by then the state is
//! gone and the message is evaluated as a fresh trigger.

use std::collections::HashMap;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::domain::{
    parse_selection, replies, ConversationId, ConversationState, ConversationStep, SiteCatalog,
    SiteEntry, TransitionError,
};
use crate::ports::{
    ChatTransport, ConversationStore, ConversationStoreError, IncomingMessage, SearchGateway,
    SearchQuery, TransportError,
};

use super::trigger::TriggerDetector;

/// Flow tuning that is not part of any single port.
#[derive(Debug, Clone)]
pub struct DispatcherSettings {
    /// Mid-flow escape word, matched case-insensitively on the whole text.
    pub cancel_keyword: String,
    /// Trigger word, echoed in the cancellation notice.
    pub trigger_keyword: String,
    /// Result-count cap forwarded to the backend.
    pub max_results: u32,
}

/// Errors fatal to the processing of one message.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Store(#[from] ConversationStoreError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// The conversation state machine driver.
pub struct Dispatcher {
    catalog: SiteCatalog,
    trigger: TriggerDetector,
    settings: DispatcherSettings,
    cancel_keyword_lower: String,
    store: Arc<dyn ConversationStore>,
    gateway: Arc<dyn SearchGateway>,
    transport: Arc<dyn ChatTransport>,
    locks: Mutex<HashMap<ConversationId, Arc<Mutex<()>>>>,
}

impl Dispatcher {
    pub fn new(
        catalog: SiteCatalog,
        trigger: TriggerDetector,
        settings: DispatcherSettings,
        store: Arc<dyn ConversationStore>,
        gateway: Arc<dyn SearchGateway>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        let cancel_keyword_lower = settings.cancel_keyword.to_lowercase();
        Self {
            catalog,
            trigger,
            settings,
            cancel_keyword_lower,
            store,
            gateway,
            transport,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Consumes the transport's event feed until it ends.
    ///
    /// Events are handled one at a time in arrival order; failures are
    /// logged and do not stop the loop.
    pub async fn run(self: Arc<Self>, mut events: impl Stream<Item = IncomingMessage> + Unpin) {
        while let Some(message) = events.next().await {
            if let Err(err) = self.handle_message(message).await {
                error!(error = %err, "message handling failed");
            }
        }
    }

    /// Handles one inbound event.
    pub async fn handle_message(&self, message: IncomingMessage) -> Result<(), DispatchError> {
        if message.sender_is_self || message.text.trim().is_empty() {
            return Ok(());
        }

        let id = message.conversation_id.clone();
        let lock = self.lock_for(&id).await;
        let guard = lock.lock().await;
        let result = self.dispatch(&message).await;
        drop(guard);
        drop(lock);
        self.discard_idle_lock(&id).await;
        result
    }

    async fn dispatch(&self, message: &IncomingMessage) -> Result<(), DispatchError> {
        let id = &message.conversation_id;

        match self.store.load(id).await {
            Ok(state) => self.answer_step(state, message).await,
            Err(ConversationStoreError::NotFound(_)) => self.try_open_flow(message).await,
            Err(err) => Err(err.into()),
        }
    }

    /// No active flow: open one if the message is a trigger.
    async fn try_open_flow(&self, message: &IncomingMessage) -> Result<(), DispatchError> {
        let id = &message.conversation_id;

        if !self.trigger.should_trigger(message, false) {
            return Ok(());
        }

        debug!(conversation = %id, "opening guided search flow");
        let state = ConversationState::new(id.clone());
        self.store.save(&state).await?;
        self.transport
            .send_text(id, &replies::site_menu(&self.catalog))
            .await?;
        Ok(())
    }

    /// Active flow: cancel or treat the text as the current step's answer.
    async fn answer_step(
        &self,
        mut state: ConversationState,
        message: &IncomingMessage,
    ) -> Result<(), DispatchError> {
        let id = &message.conversation_id;
        let text = message.text.trim();

        if text.to_lowercase() == self.cancel_keyword_lower {
            debug!(conversation = %id, "flow cancelled by user");
            self.store.delete(id).await?;
            self.transport
                .send_text(id, &replies::cancelled_notice(&self.settings.trigger_keyword))
                .await?;
            return Ok(());
        }

        match state.step.clone() {
            ConversationStep::AwaitingSiteSelection => {
                match parse_selection(text, &self.catalog) {
                    Err(err) => {
                        debug!(conversation = %id, "selection not understood, re-prompting");
                        self.transport
                            .send_text(id, &replies::invalid_selection(err.max_option))
                            .await?;
                    }
                    Ok(selected) => {
                        let sources: Vec<SiteEntry> = selected.into_iter().cloned().collect();
                        let prompt = replies::job_title_prompt(&sources);

                        let next = match location_free_single(&sources) {
                            Some(location) => ConversationStep::AwaitingJobTitleDirect {
                                sources,
                                location,
                            },
                            None => ConversationStep::AwaitingJobTitle { sources },
                        };
                        state.advance(next)?;
                        self.store.save(&state).await?;
                        self.transport.send_text(id, &prompt).await?;
                    }
                }
                Ok(())
            }

            ConversationStep::AwaitingJobTitle { sources } => {
                state.advance(ConversationStep::AwaitingLocation {
                    sources,
                    job_title: text.to_string(),
                })?;
                self.store.save(&state).await?;
                self.transport
                    .send_text(id, &replies::location_prompt())
                    .await?;
                Ok(())
            }

            ConversationStep::AwaitingJobTitleDirect { sources, location } => {
                self.execute_search(id, text.to_string(), location, sources)
                    .await
            }

            ConversationStep::AwaitingLocation { sources, job_title } => {
                self.execute_search(id, job_title, text.to_string(), sources)
                    .await
            }
        }
    }

    /// Shared terminal path. The state is deleted whatever happens inside.
    async fn execute_search(
        &self,
        id: &ConversationId,
        job_title: String,
        location: String,
        sources: Vec<SiteEntry>,
    ) -> Result<(), DispatchError> {
        let result = self.search_and_report(id, &job_title, &location, sources).await;

        if let Err(err) = self.store.delete(id).await {
            warn!(conversation = %id, error = %err, "state cleanup failed");
        }
        result
    }

    async fn search_and_report(
        &self,
        id: &ConversationId,
        job_title: &str,
        location: &str,
        sources: Vec<SiteEntry>,
    ) -> Result<(), DispatchError> {
        self.transport
            .send_text(id, &replies::searching_notice())
            .await?;

        let query = SearchQuery::new(
            job_title,
            location,
            sources.iter().map(|e| e.source_id.clone()).collect(),
            self.settings.max_results,
        );

        debug!(conversation = %id, job_title, location, "querying search backend");
        let reply = match self.gateway.search(query).await {
            Ok(results) if results.is_empty() => replies::no_results_notice(),
            Ok(results) => replies::results_digest(job_title, &results),
            Err(err) => {
                error!(conversation = %id, error = %err, "search backend call failed");
                replies::internal_error_notice()
            }
        };
        self.transport.send_text(id, &reply).await?;
        Ok(())
    }

    async fn lock_for(&self, id: &ConversationId) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .await
            .entry(id.clone())
            .or_default()
            .clone()
    }

    /// Drops the per-conversation lock once nothing references it and no
    /// flow is active, so the registry does not grow with every user ever.
    async fn discard_idle_lock(&self, id: &ConversationId) {
        let mut locks = self.locks.lock().await;
        let idle = match locks.get(id) {
            Some(entry) => Arc::strong_count(entry) == 1,
            None => false,
        };
        if idle && matches!(self.store.exists(id).await, Ok(false)) {
            locks.remove(id);
        }
    }
}

/// The fixed location, when the pick is exactly one location-free site.
fn location_free_single(sources: &[SiteEntry]) -> Option<String> {
    match sources {
        [only] => only.fixed_location.clone(),
        _ => None,
    }
}
