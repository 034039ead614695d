use soroban_sdk::{Env, String};

use crate::storage::{extend_persistent_ttl, DataKey};

/// Records the interoperability chaincode identifier of this registry.
///
/// Re-registration replaces the previous value; the last write wins.
pub fn register_interop_id(env: &Env, chaincode_id: &String) {
    let key = DataKey::InteropChaincodeId;
    env.storage().persistent().set(&key, chaincode_id);
    extend_persistent_ttl(env, &key);
}

pub fn interop_id(env: &Env) -> Option<String> {
    env.storage()
        .persistent()
        .get(&DataKey::InteropChaincodeId)
}
