//! Conversation state behind the "Ask AI" panel.
//!
//! A send is split in two so the UI can release its borrow while the request
//! is in flight: [`ChatWidget::begin_send`] records the user message and hands
//! back a [`PendingSend`] ticket, [`ChatWidget::finish_send`] consumes the
//! ticket together with the endpoint outcome. [`ChatWidget::send`] runs both
//! halves for callers that can hold `&mut self` across the await.
//!
//! Every reset bumps the conversation epoch. A ticket issued before the reset
//! still releases the pending flag when it finishes, but its reply and thread id
//! are dropped.

use crate::ai::{ChatEndpoint, ChatRequest, ChatResponse, ChatResult};
use crate::bridge::SessionStore;
use crate::types::{ChatMessage, KeyCode, Keystroke};

pub const UNCLEAR_REPLY: &str = "Sorry, I couldn't understand that.";
pub const FAILED_REPLY: &str = "Sorry, something went wrong. Please try again later.";

/// An in-flight exchange. Must be handed back to [`ChatWidget::finish_send`].
#[must_use = "a pending send keeps the widget busy until finished"]
#[derive(Debug)]
pub struct PendingSend {
    epoch: u64,
    request: ChatRequest,
}

impl PendingSend {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// What a key press asked the widget to do.
#[derive(Debug)]
pub enum KeyAction {
    Send(PendingSend),
    Closed,
    Ignored,
}

pub struct ChatWidget<S> {
    messages: Vec<ChatMessage>,
    input: String,
    pending: bool,
    open: bool,
    epoch: u64,
    store: S,
    thread_key: String,
}

impl<S: SessionStore> ChatWidget<S> {
    pub fn new(store: S, thread_key: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            pending: false,
            open: false,
            epoch: 0,
            store,
            thread_key: thread_key.into(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn thread_id(&self) -> Option<String> {
        self.store.get(&self.thread_key)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    pub fn toggle(&mut self) {
        let open = !self.open;
        self.set_open(open);
    }

    /// Closing the panel discards the conversation.
    pub fn set_open(&mut self, open: bool) {
        if self.open && !open {
            self.reset();
        }
        self.open = open;
    }

    /// Start an exchange from the current input.
    ///
    /// Returns `None` without touching any state when the input is blank or a
    /// request is already in flight.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if self.pending {
            return None;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();

        self.messages.push(ChatMessage::user(text.clone()));
        self.input.clear();
        self.pending = true;

        let request = ChatRequest::new(text, self.thread_id());
        tracing::debug!(
            epoch = self.epoch,
            has_thread = request.thread_id.is_some(),
            "sending assistant prompt"
        );
        Some(PendingSend {
            epoch: self.epoch,
            request,
        })
    }

    /// Apply the endpoint outcome for `ticket` and release the pending flag.
    pub fn finish_send(&mut self, ticket: PendingSend, outcome: ChatResult<ChatResponse>) {
        self.pending = false;

        if ticket.epoch != self.epoch {
            tracing::debug!(
                sent_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "dropping reply for a conversation that was reset"
            );
            return;
        }

        let reply = match outcome {
            Ok(response) => {
                if let Some(thread_id) = response.session() {
                    self.persist_thread(thread_id);
                }
                response.reply().unwrap_or(UNCLEAR_REPLY).to_string()
            }
            Err(err) => {
                tracing::error!(error = %err, "assistant request failed");
                FAILED_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(reply));
    }

    /// Run a complete exchange against `endpoint`. No-op when nothing can be sent.
    pub async fn send<E>(&mut self, endpoint: &E)
    where
        E: ChatEndpoint + ?Sized,
    {
        let Some(ticket) = self.begin_send() else {
            return;
        };
        let outcome = endpoint.complete(ticket.request()).await;
        self.finish_send(ticket, outcome);
    }

    pub fn handle_key(&mut self, key: Keystroke) -> KeyAction {
        if key.submits() {
            return match self.begin_send() {
                Some(ticket) => KeyAction::Send(ticket),
                None => KeyAction::Ignored,
            };
        }
        if key.key == KeyCode::Escape && self.open {
            self.set_open(false);
            return KeyAction::Closed;
        }
        KeyAction::Ignored
    }

    /// Clear the transcript and forget the thread id.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.epoch = self.epoch.wrapping_add(1);
        if let Err(err) = self.store.clear(&self.thread_key) {
            tracing::warn!(error = %err, "failed to clear stored thread id");
        }
    }

    fn persist_thread(&self, thread_id: &str) {
        if let Err(err) = self.store.set(&self.thread_key, thread_id) {
            tracing::warn!(error = %err, "failed to persist thread id");
        }
    }
}
