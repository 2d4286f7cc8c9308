//! Read-only capability over the managed document database.
//!
//! Parent/student profiles, grades, and attendance are owned entirely by the
//! external store; the portal only projects them into dashboards. This crate
//! defines the typed records, the [`ProfileStore`] capability trait, and a
//! REST implementation where "not found" is data (`None`/empty), not an
//! error.

mod capability;
mod records;
mod rest_store;

pub use capability::{ProfileStore, ProfileStoreError};
pub use records::{AttendanceRecord, AttendanceStatus, Grade, ParentProfile, StudentProfile};
pub use rest_store::RestProfileStore;
