use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, Address, Env, String,
};

use crate::testutils::{FailingRelayAuthority, MockRelayAuthority, MockRelayAuthorityClient};
use crate::{
    identity, require_relay_access, storage, DataKey, RegistryError, RelayAuthorityClient,
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sample {
    pub id: String,
    pub weight: u32,
}

#[contract]
pub struct Harness;

#[contractimpl]
impl Harness {
    pub fn __constructor(env: Env, authority: Address) {
        storage::set_relay_authority(&env, &authority);
    }

    pub fn put(env: Env, id: String, weight: u32) -> Result<(), RegistryError> {
        storage::put_record(&env, &id, &Sample { id: id.clone(), weight })
    }

    pub fn get(env: Env, caller: Address, id: String) -> Result<Sample, RegistryError> {
        require_relay_access(&env, &caller)?;
        storage::get_record(&env, &id)
    }

    pub fn register(env: Env, chaincode_id: String) {
        identity::register_interop_id(&env, &chaincode_id);
    }

    pub fn interop_id(env: Env) -> Option<String> {
        identity::interop_id(&env)
    }
}

fn setup(env: &Env) -> (HarnessClient<'_>, MockRelayAuthorityClient<'_>) {
    env.mock_all_auths();
    let authority_id = env.register(MockRelayAuthority, ());
    let harness_id = env.register(Harness, (authority_id.clone(),));
    (
        HarnessClient::new(env, &harness_id),
        MockRelayAuthorityClient::new(env, &authority_id),
    )
}

#[test]
fn test_record_round_trip_for_relay() {
    let env = Env::default();
    let (client, authority) = setup(&env);

    let relay = Address::generate(&env);
    authority.set_relay(&relay, &true);

    let id = String::from_str(&env, "s-1");
    client.put(&id, &7);

    let sample = client.get(&relay, &id);
    assert_eq!(sample.id, id);
    assert_eq!(sample.weight, 7);
}

#[test]
fn test_unrecognized_caller_is_denied() {
    let env = Env::default();
    let (client, _) = setup(&env);

    let stranger = Address::generate(&env);
    let id = String::from_str(&env, "s-1");
    client.put(&id, &7);

    assert_eq!(
        client.try_get(&stranger, &id),
        Err(Ok(RegistryError::AccessDenied))
    );
}

#[test]
fn test_failing_authority_is_access_check_error() {
    let env = Env::default();
    env.mock_all_auths();
    let authority_id = env.register(FailingRelayAuthority, ());
    let harness_id = env.register(Harness, (authority_id,));
    let client = HarnessClient::new(&env, &harness_id);

    let caller = Address::generate(&env);
    assert_eq!(
        client.try_get(&caller, &String::from_str(&env, "s-1")),
        Err(Ok(RegistryError::AccessCheckError))
    );
}

#[test]
fn test_missing_record_is_not_found() {
    let env = Env::default();
    let (client, authority) = setup(&env);

    let relay = Address::generate(&env);
    authority.set_relay(&relay, &true);

    assert_eq!(
        client.try_get(&relay, &String::from_str(&env, "missing")),
        Err(Ok(RegistryError::NotFound))
    );
}

#[test]
fn test_foreign_value_is_corrupt_record() {
    let env = Env::default();
    let (client, authority) = setup(&env);

    let relay = Address::generate(&env);
    authority.set_relay(&relay, &true);

    let id = String::from_str(&env, "s-1");
    env.as_contract(&client.address, || {
        env.storage()
            .persistent()
            .set(&DataKey::Record(id.clone()), &42u32);
    });

    assert_eq!(
        client.try_get(&relay, &id),
        Err(Ok(RegistryError::CorruptRecord))
    );
}

#[test]
fn test_interop_id_does_not_collide_with_records() {
    let env = Env::default();
    let (client, authority) = setup(&env);

    let relay = Address::generate(&env);
    authority.set_relay(&relay, &true);

    // A record whose identifier spells out the reserved slot's name.
    let id = String::from_str(&env, "InteropChaincodeId");
    client.put(&id, &1);
    client.register(&String::from_str(&env, "interop-cc"));

    assert_eq!(client.get(&relay, &id).weight, 1);
    assert_eq!(
        client.interop_id(),
        Some(String::from_str(&env, "interop-cc"))
    );
}

#[test]
fn test_both_authorities_answer_side_by_side() {
    let env = Env::default();
    let mock_id = env.register(MockRelayAuthority, ());
    let failing_id = env.register(FailingRelayAuthority, ());

    let relay = Address::generate(&env);
    MockRelayAuthorityClient::new(&env, &mock_id).set_relay(&relay, &true);

    let mock = RelayAuthorityClient::new(&env, &mock_id);
    assert!(mock.is_recognized_relay(&relay));
    assert!(!mock.is_recognized_relay(&Address::generate(&env)));

    let failing = RelayAuthorityClient::new(&env, &failing_id);
    assert!(failing.try_is_recognized_relay(&relay).is_err());
}
