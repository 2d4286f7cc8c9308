use crate::error_handler::{AiChatError, ConfigError};

/// Represents the provider (backend) used for large language model (LLM) inference.
///
/// This enum distinguishes between different backends such as local Ollama
/// or OpenAI's chat completions API.
///
/// Adding more providers in the future (e.g., Anthropic Claude, Mistral API)
/// can be done by extending this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Local Ollama runtime for on-device inference.
    Ollama,
    /// OpenAI's chat completions API.
    OpenAI,
}

impl LlmProvider {
    /// Parses a provider kind from the `LLM_KIND` environment value.
    ///
    /// Accepted values (case-insensitive): `ollama`, `openai`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedProvider`] for anything else.
    pub fn from_kind(kind: &str) -> Result<Self, AiChatError> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(LlmProvider::Ollama),
            "openai" => Ok(LlmProvider::OpenAI),
            other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
        }
    }
}
