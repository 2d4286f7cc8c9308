//! Universal health service for LLM backends (Ollama, OpenAI).
//!
//! This module exposes lightweight health checks for supported providers:
//! - Ollama: `GET {endpoint}/api/tags` (best-effort model existence check)
//! - OpenAI: `GET {endpoint}/v1/models` with Bearer auth
//!
//! The returned [`HealthStatus`] is JSON-serializable and suitable for a
//! `/health` endpoint. [`HealthService::check`] is resilient and never fails
//! (errors mapped to `ok=false`).

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::{AiChatError, make_snippet};

/// A serializable health snapshot for a single provider/config.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Backend/provider (e.g., "Ollama", "OpenAI").
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Optional model identifier relevant to the probe (if any).
    pub model: Option<String>,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency in milliseconds for the main probe.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    #[inline]
    fn ok(
        provider: LlmProvider,
        endpoint: &str,
        model: Option<&str>,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: format!("{provider:?}"),
            endpoint: endpoint.to_string(),
            model: model.map(str::to_string),
            ok: true,
            latency_ms,
            message: message.into(),
        }
    }

    #[inline]
    fn fail(
        provider: LlmProvider,
        endpoint: &str,
        model: Option<&str>,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: format!("{provider:?}"),
            endpoint: endpoint.to_string(),
            model: model.map(str::to_string),
            ok: false,
            latency_ms,
            message: message.into(),
        }
    }
}

/// A universal health checker that reuses a single HTTP client.
///
/// The client is constructed with a default timeout. Individual probes use
/// that timeout regardless of the generation timeout in the config, so a
/// hung backend cannot stall the `/health` route.
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// Creates a new health service with an optional client timeout (seconds).
    ///
    /// The internal client is reused across all probes.
    ///
    /// # Errors
    /// Returns [`AiChatError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, AiChatError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!(
            default_timeout_secs = timeout.as_secs(),
            "HealthService initialized"
        );

        Ok(Self { client })
    }

    /// Checks health for a single LLM config, routing to the provider-specific probe.
    ///
    /// This method is **resilient**: it never returns an error. Any failure is
    /// converted to `HealthStatus { ok: false, message: ... }`, which is
    /// convenient for `/health`.
    pub async fn check(&self, cfg: &LlmModelConfig) -> HealthStatus {
        // Quick endpoint validation to avoid obvious issues.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            warn!(
                provider = ?cfg.provider,
                endpoint = %cfg.endpoint,
                "invalid endpoint (empty or missing http/https)"
            );
            return HealthStatus::fail(
                cfg.provider,
                endpoint,
                Some(&cfg.model),
                0,
                "invalid endpoint (expected http:// or https://)",
            );
        }

        match cfg.provider {
            LlmProvider::Ollama => self.check_ollama(cfg).await,
            LlmProvider::OpenAI => self.check_openai(cfg).await,
        }
    }

    /// Probes Ollama via `GET /api/tags` and looks for the configured model.
    async fn check_ollama(&self, cfg: &LlmModelConfig) -> HealthStatus {
        let base = cfg.endpoint.trim_end_matches('/');
        let url = format!("{base}/api/tags");
        let started = Instant::now();

        let resp = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                return HealthStatus::fail(
                    cfg.provider,
                    &cfg.endpoint,
                    Some(&cfg.model),
                    started.elapsed().as_millis(),
                    format!("transport error: {e}"),
                );
            }
        };
        let latency = started.elapsed().as_millis();

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return HealthStatus::fail(
                cfg.provider,
                &cfg.endpoint,
                Some(&cfg.model),
                latency,
                format!("HTTP {status}: {}", make_snippet(&text)),
            );
        }

        // Best-effort model existence check: absence is a warning, not a failure.
        let message = match resp.json::<OllamaTags>().await {
            Ok(tags) if tags.models.iter().any(|m| m.name == cfg.model) => {
                format!("model '{}' present", cfg.model)
            }
            Ok(_) => format!("reachable, but model '{}' not pulled", cfg.model),
            Err(_) => "reachable (tag list not decodable)".to_string(),
        };

        HealthStatus::ok(cfg.provider, &cfg.endpoint, Some(&cfg.model), latency, message)
    }

    /// Probes OpenAI via `GET /v1/models` with Bearer auth.
    async fn check_openai(&self, cfg: &LlmModelConfig) -> HealthStatus {
        let Some(api_key) = cfg.api_key.as_deref() else {
            return HealthStatus::fail(
                cfg.provider,
                &cfg.endpoint,
                Some(&cfg.model),
                0,
                "missing API key",
            );
        };

        let base = cfg.endpoint.trim_end_matches('/');
        let url = format!("{base}/v1/models");
        let started = Instant::now();

        let resp = match self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {api_key}"))
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                return HealthStatus::fail(
                    cfg.provider,
                    &cfg.endpoint,
                    Some(&cfg.model),
                    started.elapsed().as_millis(),
                    format!("transport error: {e}"),
                );
            }
        };
        let latency = started.elapsed().as_millis();

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return HealthStatus::fail(
                cfg.provider,
                &cfg.endpoint,
                Some(&cfg.model),
                latency,
                format!("HTTP {status}: {}", make_snippet(&text)),
            );
        }

        HealthStatus::ok(
            cfg.provider,
            &cfg.endpoint,
            Some(&cfg.model),
            latency,
            "models endpoint reachable",
        )
    }
}

/// Minimal shape of the Ollama `/api/tags` response.
#[derive(Debug, Deserialize)]
struct OllamaTags {
    #[serde(default)]
    models: Vec<OllamaTag>,
}

#[derive(Debug, Deserialize)]
struct OllamaTag {
    name: String,
}
