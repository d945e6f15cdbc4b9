use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::claims::{Claims, NAME_KEY};
use super::contracts::{AccountDetails, Authority, ClaimsAware};
use super::user::UserRecord;
use crate::error::{IdentityError, IdentityResult};

/// One identity object over both login origins. A local login wraps only
/// the stored record; an external-identity login additionally carries the
/// provider claims. All downstream queries go through this type either way.
///
/// Immutable after construction; the wrapped record and claims are moved in
/// and frozen, so a `Principal` can be shared across tasks without locks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principal {
    user: UserRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    claims: Option<Claims>,
}

impl Principal {
    /// Wrap a record authenticated against the local credential store.
    pub fn from_local(user: UserRecord) -> Self {
        debug!(user = %user.username, roles = user.roles.len(), "principal.local");
        Self { user, claims: None }
    }

    /// Wrap a record together with the claims returned by an external
    /// identity exchange.
    pub fn from_external_identity(user: UserRecord, claims: Claims) -> Self {
        debug!(user = %user.username, claims = claims.len(), "principal.external");
        Self { user, claims: Some(claims) }
    }

    pub fn user(&self) -> &UserRecord { &self.user }

    pub fn identifier(&self) -> &str { &self.user.username }

    pub fn credential(&self) -> &str { &self.user.password_hash }

    /// Derive one authority per stored role by `ROLE_`-prefixing the role
    /// identifier verbatim. An empty role set yields an empty authority set.
    pub fn authorities(&self) -> HashSet<Authority> {
        self.user.roles.iter().map(|r| Authority::from_role(r)).collect()
    }

    /// `None` on the local login path, never an empty map.
    pub fn claims(&self) -> Option<&Claims> { self.claims.as_ref() }

    pub fn display_name(&self) -> IdentityResult<&str> {
        match &self.claims {
            Some(c) => c.display_name(),
            None => Err(IdentityError::missing_claim(NAME_KEY)),
        }
    }
}

impl AccountDetails for Principal {
    fn identifier(&self) -> &str { Principal::identifier(self) }
    fn credential(&self) -> &str { Principal::credential(self) }
    fn authorities(&self) -> HashSet<Authority> { Principal::authorities(self) }
}

impl ClaimsAware for Principal {
    fn claims(&self) -> Option<&Claims> { Principal::claims(self) }
    fn display_name(&self) -> IdentityResult<&str> { Principal::display_name(self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bob() -> UserRecord {
        UserRecord::new("bob", "h4sh", vec!["USER".into(), "ADMIN".into()])
    }

    fn bob_claims() -> Claims {
        [
            ("name".to_string(), json!("Bob Smith")),
            ("email".to_string(), json!("bob@x.com")),
        ]
        .into_iter()
        .collect()
    }

    fn tokens(p: &Principal) -> HashSet<String> {
        p.authorities().iter().map(|a| a.as_str().to_string()).collect()
    }

    fn token_set(expected: &[&str]) -> HashSet<String> {
        expected.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn local_login_scenario() {
        let p = Principal::from_local(bob());
        assert_eq!(tokens(&p), token_set(&["ROLE_USER", "ROLE_ADMIN"]));
        assert_eq!(p.identifier(), "bob");
        assert_eq!(p.credential(), "h4sh");
        assert!(p.claims().is_none());
        assert_eq!(p.display_name(), Err(IdentityError::missing_claim("name")));
    }

    #[test]
    fn external_login_scenario() {
        let p = Principal::from_external_identity(bob(), bob_claims());
        assert_eq!(p.display_name().unwrap(), "Bob Smith");
        // The full mapping comes back unchanged, not just the name key.
        assert_eq!(p.claims(), Some(&bob_claims()));
        assert_eq!(p.claims().unwrap().get("email"), Some(&json!("bob@x.com")));
        // Identity queries are origin-independent.
        assert_eq!(p.identifier(), "bob");
        assert_eq!(p.credential(), "h4sh");
        assert_eq!(tokens(&p), token_set(&["ROLE_USER", "ROLE_ADMIN"]));
    }

    #[test]
    fn one_authority_per_role_no_normalization() {
        let p = Principal::from_local(UserRecord::new(
            "carol",
            "x",
            vec!["a".into(), "B".into(), "ROLE_nested".into()],
        ));
        assert_eq!(tokens(&p), token_set(&["ROLE_a", "ROLE_B", "ROLE_ROLE_nested"]));
        assert_eq!(p.authorities().len(), 3);
    }

    #[test]
    fn empty_roles_empty_authorities() {
        let p = Principal::from_local(UserRecord::new("norole", "x", vec![]));
        assert!(p.authorities().is_empty());
    }

    #[test]
    fn display_name_missing_key_on_external_path() {
        let claims: Claims = [("email".to_string(), json!("bob@x.com"))].into_iter().collect();
        let p = Principal::from_external_identity(bob(), claims);
        assert_eq!(p.display_name(), Err(IdentityError::missing_claim("name")));
    }

    #[test]
    fn status_flags_stay_true_for_both_paths() {
        // Stub lifecycle policy. If this test starts failing, the change
        // must be an intentional policy introduction, not an accident.
        for p in [
            Principal::from_local(bob()),
            Principal::from_external_identity(bob(), bob_claims()),
        ] {
            assert!(p.is_account_active());
            assert!(p.is_account_unlocked());
            assert!(p.is_credential_current());
            assert!(p.is_enabled());
        }
    }
}
