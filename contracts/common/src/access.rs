use soroban_sdk::{contractclient, log, Address, Env};

use crate::{storage, RegistryError};

/// Interface of the contract that decides whether a caller is a recognized
/// cross-network relay.
#[contractclient(name = "RelayAuthorityClient")]
pub trait RelayAuthority {
    fn is_recognized_relay(env: Env, caller: Address) -> bool;
}

/// Asks the configured relay authority whether `caller` is a recognized relay.
///
/// The caller must authorize the invocation. A missing authority or a failed
/// cross-contract call yields `AccessCheckError`; no record is read.
pub fn check_relay_access(env: &Env, caller: &Address) -> Result<bool, RegistryError> {
    caller.require_auth();

    let authority = storage::relay_authority(env).ok_or(RegistryError::AccessCheckError)?;
    let client = RelayAuthorityClient::new(env, &authority);
    match client.try_is_recognized_relay(caller) {
        Ok(Ok(recognized)) => Ok(recognized),
        _ => Err(RegistryError::AccessCheckError),
    }
}

/// Gate run before every read or validation.
pub fn require_relay_access(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    if !check_relay_access(env, caller)? {
        log!(env, "Illegal access by relay", caller.clone());
        return Err(RegistryError::AccessDenied);
    }
    log!(env, "Relay access check passed");
    Ok(())
}
