#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint the widget posts to when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8082/api/chat";

pub const DEFAULT_GREETING: &str = "Hi there! How can I help you today?";
pub const DEFAULT_FALLBACK_REPLY: &str = "⚠️ Sorry, I couldn't reach the server.";
pub const DEFAULT_MISSING_REPLY: &str = "…";

/// Settings for one chat window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Full URL of the chat endpoint.
    pub endpoint: String,
    /// Bot message the log is seeded with.
    pub greeting: String,
    /// Bot message appended when a request fails.
    pub fallback_reply: String,
    /// Bot message appended when a response carries no reply.
    pub missing_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
            missing_reply: DEFAULT_MISSING_REPLY.to_string(),
        }
    }
}

impl ChatConfig {
    /// Default settings with `endpoint` overridden. Blank values keep the default.
    pub fn with_endpoint(endpoint: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            config.endpoint = endpoint.to_string();
        }
        config
    }
}
