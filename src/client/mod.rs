use std::future::Future;

use crate::errors::ChatError;
use crate::models::{ChatRequest, ChatResponse};

/// Transport to the remote chat endpoint.
///
/// Implementations perform exactly one request per call and never retry.
/// Futures are not required to be `Send` so browser clients can implement it.
pub trait ChatClient {
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, ChatError>>;
}
