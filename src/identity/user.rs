use serde::{Deserialize, Serialize};

/// The stored credential record this crate wraps. Owned by the external
/// credential store; the adapter only ever reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserRecord {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        Self { username: username.into(), password_hash: password_hash.into(), roles }
    }
}
