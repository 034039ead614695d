use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use crate::RelayAuthority;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum MockKey {
    Relay(Address),
}

/// Relay authority whose answers are set directly by the test.
#[contract]
pub struct MockRelayAuthority;

#[contractimpl]
impl MockRelayAuthority {
    pub fn set_relay(env: Env, address: Address, recognized: bool) {
        env.storage()
            .instance()
            .set(&MockKey::Relay(address), &recognized);
    }
}

#[contractimpl]
impl RelayAuthority for MockRelayAuthority {
    fn is_recognized_relay(env: Env, caller: Address) -> bool {
        env.storage()
            .instance()
            .get(&MockKey::Relay(caller))
            .unwrap_or(false)
    }
}
