use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, warn};

use crate::client::ChatClient;
use crate::config::ChatConfig;
use crate::errors::ChatError;
use crate::models::{ChatRequest, ChatResponse, Message};

#[cfg(test)]
#[path = "chat_service_test.rs"]
mod chat_service_test;

/// Identifies one accepted submit until its reply settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submitted message waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub request: ChatRequest,
}

impl Submission {
    /// Sends the request through `client` once and wraps the outcome for [`Conversation::settle`].
    pub async fn dispatch<C: ChatClient>(self, client: &C) -> Settlement {
        debug!(id = %self.id, "sending chat request");
        let outcome = client.send(&self.request).await;
        Settlement { id: self.id, outcome }
    }
}

/// The outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub id: SubmissionId,
    pub outcome: Result<ChatResponse, ChatError>,
}

/// State of one chat window: the append-only log and the input buffer.
///
/// Requests are not serialized against each other. Replies are appended in
/// the order their submissions settle.
#[derive(Debug, Clone)]
pub struct Conversation {
    config: ChatConfig,
    messages: Vec<Message>,
    input: String,
    in_flight: BTreeSet<SubmissionId>,
    next_id: u64,
}

impl Conversation {
    /// A fresh conversation seeded with the configured greeting.
    pub fn new(config: ChatConfig) -> Self {
        let messages = vec![Message::bot(config.greeting.clone())];
        Self {
            config,
            messages,
            input: String::new(),
            in_flight: BTreeSet::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of submissions still awaiting a reply.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Replaces the input buffer verbatim.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Moves the input buffer into the log as a user message.
    ///
    /// Returns `None` and leaves everything untouched when the buffer is blank.
    /// The logged text and the request carry the buffer as typed, untrimmed.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::user(text.clone()));

        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.in_flight.insert(id);
        debug!(%id, pending = self.in_flight.len(), "message submitted");

        Some(Submission { id, request: ChatRequest { message: text } })
    }

    /// Appends the bot message for a settled submission.
    ///
    /// A settlement for an id that is not in flight appends nothing, so each
    /// submission yields exactly one bot message.
    pub fn settle(&mut self, settlement: Settlement) -> Option<&Message> {
        let Settlement { id, outcome } = settlement;
        if !self.in_flight.remove(&id) {
            debug!(%id, "ignoring settlement for a submission that is not in flight");
            return None;
        }

        let text = match outcome {
            Ok(response) => match response.reply_text() {
                Some(reply) => reply.to_string(),
                None => {
                    debug!(%id, "response carried no reply");
                    self.config.missing_reply.clone()
                }
            },
            Err(e) => {
                warn!(%id, error = %e, "chat request failed");
                self.config.fallback_reply.clone()
            }
        };

        self.messages.push(Message::bot(text));
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}
