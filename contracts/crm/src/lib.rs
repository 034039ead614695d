#![no_std]

pub mod events;

use common::{identity, require_relay_access, storage, RegistryError};
use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String};

/// Answer returned by `check` for a credential that is not active.
pub const INVALID_CREDENTIAL: &str = "Invalid";

/// A professional credential and whether it is currently active.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialRecord {
    pub id: String,
    pub specialty: String,
    pub state: bool,
}

#[contract]
pub struct CrmContract;

#[contractimpl]
impl CrmContract {
    /// Deploys the registry against the contract that recognizes relays.
    pub fn __constructor(env: Env, relay_authority: Address) {
        storage::set_relay_authority(&env, &relay_authority);
    }

    /// Record the interoperation chaincode ID on the ledger
    pub fn register(env: Env, chaincode_id: String) {
        log!(&env, "Register called", chaincode_id.clone());
        identity::register_interop_id(&env, &chaincode_id);
        events::publish_registered(&env, chaincode_id);
    }

    pub fn interop_id(env: Env) -> Option<String> {
        identity::interop_id(&env)
    }

    pub fn relay_authority(env: Env) -> Option<Address> {
        storage::relay_authority(&env)
    }

    /// Store a credential. An existing entry with the same id is replaced.
    pub fn create(
        env: Env,
        id: String,
        specialty: String,
        state: bool,
    ) -> Result<(), RegistryError> {
        let credential = CredentialRecord {
            id: id.clone(),
            specialty: specialty.clone(),
            state,
        };
        storage::put_record(&env, &id, &credential)?;

        log!(&env, "Create called", id.clone(), specialty.clone(), state);
        events::publish_credential_created(&env, id, specialty, state);

        Ok(())
    }

    /// Read a credential. Only recognized relays may call this.
    pub fn read(env: Env, caller: Address, id: String) -> Result<CredentialRecord, RegistryError> {
        require_relay_access(&env, &caller)?;
        storage::get_record(&env, &id)
    }

    /// Check a credential and return the holder's specialty, or `"Invalid"`
    /// when the credential is not active.
    pub fn check(env: Env, caller: Address, id: String) -> Result<String, RegistryError> {
        require_relay_access(&env, &caller)?;
        let credential: CredentialRecord = storage::get_record(&env, &id)?;

        if credential.state {
            Ok(credential.specialty)
        } else {
            Ok(String::from_str(&env, INVALID_CREDENTIAL))
        }
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
