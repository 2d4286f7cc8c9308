//! REST client for the document database.
//!
//! Document layout mirrors the store's collections:
//! - `GET {base}/parentProfiles/{uid}`
//! - `GET {base}/studentProfiles/{id}`
//! - `GET {base}/studentProfiles/{id}/grades`
//! - `GET {base}/studentProfiles/{id}/attendance`
//!
//! 404 means the document (or subcollection) does not exist and is returned
//! as `None`/empty; any other non-2xx status is an error.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::capability::{ProfileStore, ProfileStoreError};
use crate::records::{AttendanceRecord, Grade, ParentProfile, StudentProfile};

/// REST implementation of the [`ProfileStore`] capability.
pub struct RestProfileStore {
    client: reqwest::Client,
    base: String,
}

impl RestProfileStore {
    /// Creates a client for the given store endpoint.
    ///
    /// # Errors
    /// - [`ProfileStoreError::InvalidEndpoint`] for a non-http(s) endpoint
    /// - [`ProfileStoreError::Transport`] if the HTTP client cannot be built
    pub fn new(endpoint: &str) -> Result<Self, ProfileStoreError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProfileStoreError::InvalidEndpoint(endpoint.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the client from `PROFILE_STORE_URL`.
    pub fn from_env() -> Result<Self, ProfileStoreError> {
        let endpoint = std::env::var("PROFILE_STORE_URL")
            .map_err(|_| ProfileStoreError::InvalidEndpoint("PROFILE_STORE_URL must be set".into()))?;
        Self::new(&endpoint)
    }

    /// Fetches one document; 404 becomes `None`.
    async fn get_doc<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ProfileStoreError> {
        let url = format!("{}/{}", self.base, path);
        debug!("GET {url}");

        let resp = self.client.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ProfileStoreError::HttpStatus {
                status,
                url,
                snippet: text.chars().take(240).collect(),
            });
        }

        let doc = resp
            .json::<T>()
            .await
            .map_err(|e| ProfileStoreError::Decode(format!("serde error at {path}: {e}")))?;
        Ok(Some(doc))
    }

    /// Fetches a subcollection; 404 becomes an empty list.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ProfileStoreError> {
        Ok(self.get_doc::<Vec<T>>(path).await?.unwrap_or_default())
    }
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    #[instrument(skip(self))]
    async fn parent_profile(&self, uid: &str) -> Result<Option<ParentProfile>, ProfileStoreError> {
        self.get_doc(&format!("parentProfiles/{uid}")).await
    }

    #[instrument(skip(self))]
    async fn student_profile(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentProfile>, ProfileStoreError> {
        self.get_doc(&format!("studentProfiles/{student_id}")).await
    }

    #[instrument(skip(self))]
    async fn grades(&self, student_id: &str) -> Result<Vec<Grade>, ProfileStoreError> {
        self.get_list(&format!("studentProfiles/{student_id}/grades"))
            .await
    }

    #[instrument(skip(self))]
    async fn attendance(
        &self,
        student_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ProfileStoreError> {
        self.get_list(&format!("studentProfiles/{student_id}/attendance"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_endpoint() {
        assert!(RestProfileStore::new("store.example.com").is_err());
        assert!(RestProfileStore::new("").is_err());
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let store = RestProfileStore::new("https://store.example.com/docs/").unwrap();
        assert_eq!(store.base, "https://store.example.com/docs");
    }
}
