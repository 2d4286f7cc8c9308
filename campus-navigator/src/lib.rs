//! Campus Navigator: the chatbot question-answering service.
//!
//! Public API: [`ask`]. It validates the question, wraps it in the fixed
//! Campus Navigator prompt, calls the configured model through the
//! [`AnswerModel`] capability, and decodes the strict `{"answer": "..."}`
//! structured output. Every call is stateless: no conversation history is
//! sent upstream, and nothing is retried.
//!
//! The crate also owns the session-scoped [`transcript::Transcript`] and the
//! [`transcript::ChatSession`] driver that implements the optimistic
//! append / retract-on-failure flow of the chat widget.

mod answer;
mod error;
mod model;
mod prompt;

pub mod transcript;

pub use error::{ANSWER_FAILURE_MESSAGE, NavigatorError};
pub use model::AnswerModel;
pub use prompt::{NAVIGATOR_SYSTEM, build_user_prompt};

use tracing::{debug, error};

/// Ask the Campus Navigator one question and get the answer as plain text.
///
/// # Errors
/// - [`NavigatorError::EmptyQuestion`] if the question is empty after trimming
///   (rejected locally, before any model call)
/// - [`NavigatorError::Model`] for transport/provider failures
/// - [`NavigatorError::Contract`] if the model output does not decode to the
///   expected single-field answer object
///
/// Callers facing end users should render failures via
/// [`NavigatorError::user_message`], which collapses every failure mode to
/// one polite retry-later message.
///
/// # Example
/// ```no_run
/// # use campus_navigator::ask;
/// # use ai_chat_service::ChatService;
/// # #[tokio::main] async fn main() {
/// let model = ChatService::from_env().unwrap();
/// let answer = ask(&model, "What are the admission requirements?").await.unwrap();
/// println!("{answer}");
/// # }
/// ```
pub async fn ask(model: &dyn AnswerModel, question: &str) -> Result<String, NavigatorError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(NavigatorError::EmptyQuestion);
    }

    let user_prompt = prompt::build_user_prompt(question);
    debug!(question_len = question.len(), "asking navigator model");

    let raw = model
        .generate(&user_prompt, Some(prompt::NAVIGATOR_SYSTEM))
        .await
        .map_err(|e| {
            error!(error = %e, "navigator model call failed");
            NavigatorError::Model(e)
        })?;

    let answer = answer::extract_answer(&raw).inspect_err(|e| {
        error!(error = %e, "navigator answer violated the output contract");
    })?;

    Ok(answer)
}
