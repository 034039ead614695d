//! Stand-in relay authorities for contract tests.
//!
//! Each double lives in its own module: contract macros emit module-level
//! items named after every contract function, and both doubles export
//! `is_recognized_relay`.

mod failing;
mod mock;

pub use failing::{AuthorityUnavailable, FailingRelayAuthority, FailingRelayAuthorityClient};
pub use mock::{MockRelayAuthority, MockRelayAuthorityClient};
