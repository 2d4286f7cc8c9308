//! Default LLM configs loaded strictly from environment variables.
//!
//! This module provides convenience constructors for [`LlmModelConfig`],
//! grouped by provider. The portal uses a single **chat** role (one
//! question in, one answer out), so there is exactly one config per
//! provider.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND`       = provider kind (`ollama` or `openai`)
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = optional request timeout override (u32, seconds)
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (mandatory)
//! - `OLLAMA_MODEL`                = chat model (mandatory)
//!
//! OpenAI-specific:
//! - `OPENAI_API_KEY` = API key (mandatory)
//! - `OPENAI_MODEL`   = chat model (mandatory)
//! - `OPENAI_URL`     = API base (optional, defaults to `https://api.openai.com`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiChatError, ConfigError, env_opt_u32, must_env, validate_http_endpoint,
    },
};

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if both are missing
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
fn ollama_endpoint() -> Result<String, AiChatError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            validate_http_endpoint("OLLAMA_URL", url.trim())?;
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Err(AiChatError::Config(ConfigError::MissingVar(
        "OLLAMA_URL or OLLAMA_PORT",
    )))
}

/// Optional timeout override from `LLM_TIMEOUT_SECS`, with a provider default.
fn timeout_secs(default: u64) -> Result<u64, AiChatError> {
    Ok(env_opt_u32("LLM_TIMEOUT_SECS")?
        .map(u64::from)
        .unwrap_or(default))
}

/// Constructs the **chat** config for the Ollama backend.
///
/// # Env
/// - `OLLAMA_URL` or `OLLAMA_PORT` (required)
/// - `OLLAMA_MODEL` (required)
/// - `LLM_MAX_TOKENS` (optional)
/// - `LLM_TIMEOUT_SECS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.7)`
/// - `top_p = Some(0.9)`
/// - `timeout_secs = Some(60)`
pub fn config_ollama_chat() -> Result<LlmModelConfig, AiChatError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature: Some(0.7),
        top_p: Some(0.9),
        timeout_secs: Some(timeout_secs(60)?),
    })
}

/// Constructs the **chat** config for the OpenAI backend.
///
/// # Env
/// - `OPENAI_API_KEY` (required)
/// - `OPENAI_MODEL` (required)
/// - `OPENAI_URL` (optional, defaults to the public API base)
/// - `LLM_MAX_TOKENS` (optional)
/// - `LLM_TIMEOUT_SECS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.7)`
/// - `timeout_secs = Some(60)`
pub fn config_openai_chat() -> Result<LlmModelConfig, AiChatError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = must_env("OPENAI_MODEL")?;
    let endpoint = match std::env::var("OPENAI_URL") {
        Ok(url) if !url.trim().is_empty() => {
            validate_http_endpoint("OPENAI_URL", url.trim())?;
            url
        }
        _ => "https://api.openai.com".to_string(),
    };
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.7),
        top_p: None,
        timeout_secs: Some(timeout_secs(60)?),
    })
}

/// Builds the chat config for the provider selected by `LLM_KIND`.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for unknown kinds
/// - Whatever the provider-specific constructor reports
pub fn chat_config_from_env() -> Result<LlmModelConfig, AiChatError> {
    let kind = must_env("LLM_KIND")?;
    match LlmProvider::from_kind(&kind)? {
        LlmProvider::Ollama => config_ollama_chat(),
        LlmProvider::OpenAI => config_openai_chat(),
    }
}
