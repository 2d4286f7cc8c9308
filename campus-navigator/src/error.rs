//! Typed error for the campus-navigator crate.

use ai_chat_service::AiChatError;
use thiserror::Error;

/// The one user-facing failure text for the chatbot.
///
/// Every failure mode (validation, transport/provider, contract violation)
/// renders to this message; technical detail stays in the logs.
pub const ANSWER_FAILURE_MESSAGE: &str =
    "Sorry, I am unable to answer at this moment. Please try again later.";

#[derive(Debug, Error)]
pub enum NavigatorError {
    /// The question was empty after trimming; no model call was made.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// A request is already in flight for this session.
    #[error("a request is already awaiting a response")]
    Busy,

    /// Transport or provider failure from the chat service.
    #[error("model call failed: {0}")]
    Model(#[from] AiChatError),

    /// The model output did not decode to the expected answer object.
    #[error("answer contract violated: {0}")]
    Contract(String),
}

impl NavigatorError {
    /// The message shown to end users, identical for every failure mode.
    pub fn user_message(&self) -> &'static str {
        ANSWER_FAILURE_MESSAGE
    }
}
