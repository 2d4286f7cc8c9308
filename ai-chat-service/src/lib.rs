//! Chat LLM service with pluggable providers.
//!
//! This crate wraps the hosted generative-model backends the portal talks to
//! (local Ollama or the OpenAI REST API) behind one façade, [`ChatService`].
//! It owns configuration loading and validation, the provider HTTP clients,
//! unified error types, health probes, and an opt-in `tracing` layer.
//!
//! Generation is strictly single-shot and non-streaming: one prompt in, one
//! text completion out.

pub mod chat_service;
pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use chat_service::ChatService;
pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{AiChatError, Result};
pub use health_service::{HealthService, HealthStatus};
