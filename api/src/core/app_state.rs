use std::sync::Arc;

use ai_chat_service::ChatService;
use identity::{Identity, RestIdentity};
use profile_store::{ProfileStore, RestProfileStore};

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// Capabilities are stored as trait objects so tests (and alternative
/// providers) can substitute their own implementations.
#[derive(Clone)]
pub struct AppState {
    /// Chat model backend for the navigator endpoint.
    pub chat: Arc<ChatService>,
    /// Managed identity provider (email+password flows).
    pub identity: Arc<dyn Identity>,
    /// Managed document database (read-only dashboard data).
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// Required: the chat service vars (`LLM_KIND` et al.), `IDENTITY_URL`,
    /// `IDENTITY_API_KEY`, `PROFILE_STORE_URL`.
    pub fn from_env() -> Result<Self, AppError> {
        let chat = ChatService::from_env()?;
        let identity = RestIdentity::from_env()?;
        let profiles = RestProfileStore::from_env()?;

        Ok(Self {
            chat: Arc::new(chat),
            identity: Arc::new(identity),
            profiles: Arc::new(profiles),
        })
    }
}
