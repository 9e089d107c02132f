//! Core of the ZUsCoffee chat window: the conversation log, the input buffer
//! and the request/reply cycle against the chat endpoint, independent of any
//! UI toolkit or HTTP stack.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use client::ChatClient;
pub use config::ChatConfig;
pub use errors::ChatError;
pub use models::{ChatRequest, ChatResponse, Message, Sender};
pub use service::chat_service::{Conversation, Settlement, Submission, SubmissionId};
