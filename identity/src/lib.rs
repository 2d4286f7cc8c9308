//! Capability interface for the managed identity provider.
//!
//! The portal never implements authentication itself: email+password
//! sign-in/sign-up are delegated to a hosted identity service. This crate
//! defines the [`Identity`] capability the rest of the backend programs
//! against, the [`RestIdentity`] implementation for an identity-toolkit
//! style REST API, and the fixed mapping from provider error conditions to
//! user-facing messages.

mod capability;
mod error;
mod rest_identity;

pub use capability::{AuthSession, Identity};
pub use error::IdentityError;
pub use rest_identity::RestIdentity;
