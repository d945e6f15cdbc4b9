pub mod error;
pub mod identity;

pub use error::{IdentityError, IdentityResult};
pub use identity::{
    AccountDetails, Authority, Claims, ClaimsAware, Principal, UserRecord, UserRecordSource,
};
