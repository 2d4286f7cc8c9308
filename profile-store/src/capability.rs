use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::records::{AttendanceRecord, Grade, ParentProfile, StudentProfile};

/// Errors from the document store boundary.
///
/// "Not found" is deliberately absent: missing documents come back as
/// `Ok(None)` or an empty list, matching the read-only dashboard contract.
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    /// The endpoint is empty or does not start with http/https.
    #[error("invalid profile store endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network/transport failure talking to the store.
    #[error("profile store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream returned a non-successful HTTP status (other than 404).
    #[error("unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        snippet: String,
    },

    /// A document could not be decoded into its record type.
    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Abstract contract for the managed document database, keyed by user and
/// student identifiers. All reads; the portal never writes.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The parent profile for a signed-in account, if one exists.
    async fn parent_profile(&self, uid: &str) -> Result<Option<ParentProfile>, ProfileStoreError>;

    /// A student profile by id, if it exists.
    async fn student_profile(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentProfile>, ProfileStoreError>;

    /// All recorded grades for a student (empty when none).
    async fn grades(&self, student_id: &str) -> Result<Vec<Grade>, ProfileStoreError>;

    /// Attendance entries for a student, most recent first (empty when none).
    async fn attendance(
        &self,
        student_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ProfileStoreError>;
}
