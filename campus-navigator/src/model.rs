//! Capability interface for the generative model dependency.

use ai_chat_service::{AiChatError, ChatService};
use async_trait::async_trait;

/// Abstract contract for the hosted model the navigator talks to.
///
/// Production uses [`ChatService`]; tests substitute deterministic fakes so
/// the ask flow can be exercised without any network.
#[async_trait]
pub trait AnswerModel: Send + Sync {
    /// One synchronous, non-streaming completion: prompt in, raw text out.
    async fn generate(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, AiChatError>;
}

#[async_trait]
impl AnswerModel for ChatService {
    async fn generate(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, AiChatError> {
        ChatService::generate(self, prompt, system).await
    }
}
