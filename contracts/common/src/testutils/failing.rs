use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuthorityUnavailable {
    Offline = 1,
}

/// Relay authority that fails every check.
#[contract]
pub struct FailingRelayAuthority;

#[contractimpl]
impl FailingRelayAuthority {
    pub fn is_recognized_relay(_env: Env, _caller: Address) -> Result<bool, AuthorityUnavailable> {
        Err(AuthorityUnavailable::Offline)
    }
}
