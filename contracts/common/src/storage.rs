use soroban_sdk::{contracttype, Address, Env, String, TryFromVal, Val};

use crate::RegistryError;

const RECORD_TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
const RECORD_TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days

/// Storage keys shared by the registries.
///
/// Records live under `Record(id)`. The other variants are fixed slots, and
/// since every key carries its variant tag, no caller-supplied identifier can
/// land on one of them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    InteropChaincodeId,
    RelayAuthority,
    Record(String),
}

pub(crate) fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}

/// Stores the address of the contract that decides relay recognition.
pub fn set_relay_authority(env: &Env, authority: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::RelayAuthority, authority);
}

pub fn relay_authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::RelayAuthority)
}

/// Encodes `record` and writes it under `id`, replacing whatever was there.
pub fn put_record<T>(env: &Env, id: &String, record: &T) -> Result<(), RegistryError>
where
    Val: TryFromVal<Env, T>,
{
    let value = Val::try_from_val(env, record).map_err(|_| RegistryError::SerializationError)?;
    let key = DataKey::Record(id.clone());
    env.storage().persistent().set(&key, &value);
    extend_persistent_ttl(env, &key);
    Ok(())
}

/// Fetches and decodes the record stored under `id`.
pub fn get_record<T>(env: &Env, id: &String) -> Result<T, RegistryError>
where
    T: TryFromVal<Env, Val>,
{
    let key = DataKey::Record(id.clone());
    let value: Val = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RegistryError::NotFound)?;
    extend_persistent_ttl(env, &key);
    T::try_from_val(env, &value).map_err(|_| RegistryError::CorruptRecord)
}
