//! Single-profile chat façade over the provider clients.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Dispatches generation to the provider selected by the config.
//! - Exposes a resilient health probe for the `/health` route.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_chat_service::chat_service::ChatService;
//! use ai_chat_service::config::llm_model_config::LlmModelConfig;
//! use ai_chat_service::config::llm_provider::LlmProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = LlmModelConfig {
//!         provider: LlmProvider::Ollama,
//!         model: "qwen3:14b".into(),
//!         endpoint: "http://localhost:11434".into(),
//!         api_key: None,
//!         max_tokens: Some(512),
//!         temperature: Some(0.7),
//!         top_p: Some(0.9),
//!         timeout_secs: Some(30),
//!     };
//!
//!     let svc = Arc::new(ChatService::new(cfg)?);
//!     let txt = svc.generate("Hello world", None).await?;
//!     println!("{txt}");
//!     Ok(())
//! }
//! ```

use crate::config::default_config::chat_config_from_env;
use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::{ConfigError, Result};
use crate::health_service::{HealthService, HealthStatus};
use crate::services::ollama_service::OllamaService;
use crate::services::open_ai_service::OpenAiService;

/// Provider-specific client, resolved once at construction.
enum ChatBackend {
    Ollama(OllamaService),
    OpenAi(OpenAiService),
}

/// Shared chat service managing one logical **chat** profile.
///
/// The underlying HTTP client is created once and reused for every request.
pub struct ChatService {
    cfg: LlmModelConfig,
    backend: ChatBackend,
    health: HealthService,
}

impl ChatService {
    /// Creates the service for the given config.
    ///
    /// # Errors
    /// Returns [`AiChatError`] if the config is invalid for its provider or
    /// the HTTP client cannot be built.
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }

        let backend = match cfg.provider {
            LlmProvider::Ollama => ChatBackend::Ollama(OllamaService::new(cfg.clone())?),
            LlmProvider::OpenAI => ChatBackend::OpenAi(OpenAiService::new(cfg.clone())?),
        };

        Ok(Self {
            cfg,
            backend,
            health: HealthService::new(Some(10))?,
        })
    }

    /// Creates the service from environment variables (`LLM_KIND` et al.).
    ///
    /// # Errors
    /// Returns [`AiChatError::Config`] for missing/invalid variables.
    pub fn from_env() -> Result<Self> {
        Self::new(chat_config_from_env()?)
    }

    /// Generates text for `prompt` with an optional system instruction.
    ///
    /// For OpenAI the system text becomes a separate system message; for
    /// Ollama it is prepended to the prompt (the `/api/generate` endpoint
    /// takes a single prompt string).
    ///
    /// # Errors
    /// Returns [`AiChatError`] if generation fails.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        match &self.backend {
            ChatBackend::Ollama(cli) => match system {
                Some(system) => {
                    let combined = format!("{system}\n\n{prompt}");
                    cli.generate(&combined).await
                }
                None => cli.generate(prompt).await,
            },
            ChatBackend::OpenAi(cli) => cli.generate(prompt, system).await,
        }
    }

    /// Returns a health snapshot for the active profile.
    pub async fn health(&self) -> HealthStatus {
        self.health.check(&self.cfg).await
    }

    /// Returns the active config.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::AiChatError;

    #[test]
    fn rejects_empty_model() {
        let cfg = LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "  ".into(),
            endpoint: "http://localhost:11434".into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: None,
        };
        assert!(matches!(
            ChatService::new(cfg),
            Err(AiChatError::Config(ConfigError::EmptyModel))
        ));
    }
}
