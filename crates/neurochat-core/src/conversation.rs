//! Conversation controller: message sequence, busy flag, submit lifecycle.
//!
//! The controller owns an append-only message sequence and a busy flag. Each
//! accepted submission produces exactly one outbound request and, on
//! completion, exactly one assistant message -- the reply text on success, a
//! fixed fallback line on failure. Submissions made while a request is in
//! flight are dropped, not queued; the busy flag is the sole backpressure.

use tracing::{debug, warn};
use uuid::Uuid;

use neurochat_types::error::BackendError;
use neurochat_types::history::HistoryTurn;
use neurochat_types::message::Message;

use crate::backend::ChatBackend;

/// Text of the synthetic welcome message every conversation starts with.
pub const WELCOME_TEXT: &str =
    "System initialized. Welcome to the Neural Interface. How can I assist you today?";

/// An accepted submission, ready to go out on the wire.
///
/// `history` carries the prior turns; `message` travels as a separate field
/// and is never duplicated inside `history`.
#[derive(Debug, Clone)]
pub struct OutboundChat {
    pub message: String,
    pub history: Vec<HistoryTurn>,
}

/// The client-side state of one chat session.
pub struct Conversation {
    messages: Vec<Message>,
    /// Id of the synthetic welcome message, excluded from history payloads.
    welcome_id: Uuid,
    busy: bool,
}

impl Conversation {
    /// Create a conversation seeded with the welcome message.
    pub fn new() -> Self {
        let welcome = Message::assistant(WELCOME_TEXT);
        let welcome_id = welcome.id;
        Self {
            messages: vec![welcome],
            welcome_id,
            busy: false,
        }
    }

    /// The full message sequence, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// First half of the submit lifecycle.
    ///
    /// Drops the submission (returns `None`, no state change) if the trimmed
    /// text is empty or a request is already in flight. Otherwise appends
    /// the user message immediately -- before any network activity -- raises
    /// the busy flag, and returns what should go on the wire.
    ///
    /// Every `Some` return must be paired with a [`Conversation::finish`]
    /// call; until then the conversation stays busy.
    pub fn begin(&mut self, text: &str) -> Option<OutboundChat> {
        if text.trim().is_empty() {
            return None;
        }
        if self.busy {
            debug!("submission dropped: request already in flight");
            return None;
        }

        self.messages.push(Message::user(text));
        self.busy = true;

        Some(OutboundChat {
            message: text.to_string(),
            history: self.history_payload(),
        })
    }

    /// Second half of the submit lifecycle.
    ///
    /// Appends exactly one assistant message -- the reply on success, the
    /// error's fixed fallback line on failure -- and lowers the busy flag.
    /// Both arms converge on the same append-then-clear tail, so the flag
    /// cannot stay raised regardless of outcome.
    pub fn finish(&mut self, result: Result<String, BackendError>) -> &Message {
        let reply = match result {
            Ok(text) => Message::assistant(text),
            Err(err) => {
                warn!(error = %err, "chat turn failed");
                Message::assistant(err.fallback_text())
            }
        };

        self.messages.push(reply);
        self.busy = false;

        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    /// Run one full turn against a backend: `begin`, one request, `finish`.
    ///
    /// Returns `None` if the submission was dropped, otherwise the appended
    /// assistant message.
    pub async fn submit<B: ChatBackend>(&mut self, backend: &B, text: &str) -> Option<&Message> {
        let outbound = self.begin(text)?;
        debug!(backend = backend.name(), turns = outbound.history.len(), "sending chat request");
        let result = backend.send(&outbound.message, &outbound.history).await;
        Some(self.finish(result))
    }

    /// History payload for the request currently being built: every message
    /// before the newest one, minus the welcome message and any message with
    /// empty text, in insertion order.
    fn history_payload(&self) -> Vec<HistoryTurn> {
        let before_newest = self.messages.len().saturating_sub(1);
        self.messages[..before_newest]
            .iter()
            .filter(|m| m.id != self.welcome_id && !m.text.is_empty())
            .map(HistoryTurn::from_message)
            .collect()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
