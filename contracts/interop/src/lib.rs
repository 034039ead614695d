#![no_std]

pub mod events;

use common::RelayAuthority;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

/// Storage keys
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

const RELAYER_TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
const RELAYER_TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum InteropError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
}

fn relayer_key(relayer: Address) -> (Symbol, Address) {
    (symbol_short!("RELAYER"), relayer)
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), InteropError> {
    caller.require_auth();
    let admin: Address = env
        .storage()
        .instance()
        .get(&ADMIN)
        .ok_or(InteropError::NotInitialized)?;
    if *caller != admin {
        return Err(InteropError::Unauthorized);
    }
    Ok(())
}

/// Keeps the set of relays trusted to carry requests between networks.
#[contract]
pub struct InteropContract;

#[contractimpl]
impl InteropContract {
    /// Initialize with an administrator
    pub fn initialize(env: Env, admin: Address) -> Result<(), InteropError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(InteropError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, InteropError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(InteropError::NotInitialized)
    }

    /// Add a relay allowed to read and validate registry records
    pub fn add_relayer(env: Env, caller: Address, relayer: Address) -> Result<(), InteropError> {
        require_admin(&env, &caller)?;

        let key = relayer_key(relayer.clone());
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, RELAYER_TTL_THRESHOLD, RELAYER_TTL_EXTEND_TO);

        events::publish_relayer_added(&env, relayer);

        Ok(())
    }

    pub fn remove_relayer(
        env: Env,
        caller: Address,
        relayer: Address,
    ) -> Result<(), InteropError> {
        require_admin(&env, &caller)?;

        env.storage()
            .persistent()
            .remove(&relayer_key(relayer.clone()));

        events::publish_relayer_removed(&env, relayer);

        Ok(())
    }

    /// Check if an address is a trusted relayer
    pub fn is_relayer(env: Env, address: Address) -> bool {
        env.storage()
            .persistent()
            .get(&relayer_key(address))
            .unwrap_or(false)
    }
}

#[contractimpl]
impl RelayAuthority for InteropContract {
    fn is_recognized_relay(env: Env, caller: Address) -> bool {
        Self::is_relayer(env, caller)
    }
}
