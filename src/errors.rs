use thiserror::Error;

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

/// Why a chat request failed to produce a reply.
///
/// Every variant ends up as the same fallback message in the conversation;
/// the distinction only exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    // ── Server errors ────────────────────────────────────────────────────────
    #[error("Server error: {status}")]
    Server { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ChatError {
    pub fn network(message: impl Into<String>) -> Self {
        ChatError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ChatError::Parse(message.into())
    }

    /// The request never got a response from the endpoint.
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Network(_) | ChatError::Serialize(_))
    }

    /// The endpoint answered, but not with a usable reply.
    pub fn is_server(&self) -> bool {
        matches!(self, ChatError::Server { .. } | ChatError::Parse(_))
    }
}
