//! Collaborator seam for the external credential store. Lookup, hashing and
//! token exchange live behind this trait; this crate only wraps the result.

use super::claims::Claims;
use super::principal::Principal;
use super::user::UserRecord;
use crate::error::IdentityResult;

pub trait UserRecordSource: Send + Sync {
    /// Fetch the stored record for `username`, or
    /// [`IdentityError::UnknownUser`](crate::error::IdentityError::UnknownUser).
    fn load_by_username(&self, username: &str) -> IdentityResult<UserRecord>;
}

/// Look up `username` and wrap it for the local login path.
pub fn local_principal(
    source: &dyn UserRecordSource,
    username: &str,
) -> IdentityResult<Principal> {
    Ok(Principal::from_local(source.load_by_username(username)?))
}

/// Look up `username` and wrap it together with the claims returned by an
/// external identity exchange.
pub fn external_principal(
    source: &dyn UserRecordSource,
    username: &str,
    claims: Claims,
) -> IdentityResult<Principal> {
    Ok(Principal::from_external_identity(source.load_by_username(username)?, claims))
}
