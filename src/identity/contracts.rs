//! The two capability contracts the principal is consumed through: one by
//! the authorization framework, one by the claims-aware framework.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::claims::Claims;
use crate::error::IdentityResult;

/// Marker prepended to every role identifier when deriving authorities.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Opaque permission token consumed by the authorization framework's
/// access checks. Derived 1:1 from a stored role identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(String);

impl Authority {
    /// Prefix a role identifier verbatim, no case normalization.
    pub fn from_role(role: &str) -> Self { Authority(format!("{ROLE_PREFIX}{role}")) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

/// Identity/authority surface consumed by the authorization framework.
///
/// The four status flags are the account-lifecycle extension points. The
/// provided defaults encode the current policy: every account is valid.
/// Override them to introduce expiry, lock-out, or credential-rotation
/// checks without touching the rest of the contract.
pub trait AccountDetails {
    /// Unique username of the wrapped record.
    fn identifier(&self) -> &str;

    /// Stored hashed secret, unchanged.
    fn credential(&self) -> &str;

    /// One authority per stored role, each `ROLE_`-prefixed.
    fn authorities(&self) -> HashSet<Authority>;

    fn is_account_active(&self) -> bool { true }

    fn is_account_unlocked(&self) -> bool { true }

    fn is_credential_current(&self) -> bool { true }

    fn is_enabled(&self) -> bool { true }
}

/// Claims surface consumed by the claims-aware framework after an external
/// identity exchange.
pub trait ClaimsAware {
    /// The provider claims, or `None` when the principal came from the
    /// local login path.
    fn claims(&self) -> Option<&Claims>;

    /// Human-readable name under the provider's `"name"` convention.
    fn display_name(&self) -> IdentityResult<&str>;
}
