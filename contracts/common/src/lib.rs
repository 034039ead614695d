#![no_std]

pub mod access;
pub mod error;
pub mod identity;
pub mod storage;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use access::{check_relay_access, require_relay_access, RelayAuthority, RelayAuthorityClient};
pub use error::RegistryError;
pub use storage::DataKey;

#[cfg(test)]
mod test;
