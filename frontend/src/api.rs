use gloo_net::http::Request;
use zus_chat::{ChatClient, ChatConfig, ChatError, ChatRequest, ChatResponse};

/// Chat endpoint fixed at build time, e.g. `ZUS_CHAT_ENDPOINT=https://host/api/chat trunk build`.
const ENDPOINT_OVERRIDE: Option<&str> = option_env!("ZUS_CHAT_ENDPOINT");

/// Settings for the chat window, using the build-time endpoint when one is set.
pub fn config() -> ChatConfig {
    ChatConfig::with_endpoint(ENDPOINT_OVERRIDE)
}

/// Posts chat requests to the backend with `fetch`.
#[derive(Clone, Debug)]
pub struct HttpChatClient {
    endpoint: String,
}

impl HttpChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ChatClient for HttpChatClient {
    /// Sends one chat message via the REST API (non-streaming).
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let resp = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| ChatError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::network(e.to_string()))?;

        if !resp.ok() {
            return Err(ChatError::Server { status: resp.status() });
        }

        resp.json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::parse(e.to_string()))
    }
}
