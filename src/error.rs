//! Typed error model for principal construction and claim lookups.
//! Every failure is returned to the immediate caller; this crate never
//! logs, retries, or suppresses an error on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IdentityError {
    /// The claims mapping is absent (local login path) or lacks the requested key.
    #[error("missing claim '{key}'")]
    MissingClaim { key: String },
    /// The claim exists but does not hold a string value.
    #[error("claim '{key}' is not a string")]
    ClaimType { key: String },
    /// No user record exists under the given username.
    #[error("unknown user '{username}'")]
    UnknownUser { username: String },
}

impl IdentityError {
    pub fn missing_claim<S: Into<String>>(key: S) -> Self { IdentityError::MissingClaim { key: key.into() } }
    pub fn claim_type<S: Into<String>>(key: S) -> Self { IdentityError::ClaimType { key: key.into() } }
    pub fn unknown_user<S: Into<String>>(username: S) -> Self { IdentityError::UnknownUser { username: username.into() } }
}

pub type IdentityResult<T> = Result<T, IdentityError>;
