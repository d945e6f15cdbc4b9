//! Unified principal model for local-credential and external-identity login.
//! Keep the public surface thin and split implementation across sub-modules.

mod claims;
mod contracts;
mod principal;
mod provider;
mod user;

pub use claims::{Claims, NAME_KEY};
pub use contracts::{AccountDetails, Authority, ClaimsAware, ROLE_PREFIX};
pub use principal::Principal;
pub use provider::{external_principal, local_principal, UserRecordSource};
pub use user::UserRecord;
