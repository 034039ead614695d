#![no_main]

use arbitrary::Arbitrary;
use common::testutils::{MockRelayAuthority, MockRelayAuthorityClient};
use common::RegistryError;
use libfuzzer_sys::fuzz_target;
use prescription::{PrescriptionContract, PrescriptionContractClient, ValidationStatus};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

const IDS: [&str; 3] = ["p1", "p2", "p3"];
const SPECIALTIES: [&str; 3] = ["Cardiology", "Oncology", "Neurology"];

#[derive(Arbitrary, Debug)]
enum Op {
    Create { id: u8, specialty: u8 },
    Validate { id: u8, claim: u8, as_relay: bool },
    Read { id: u8, as_relay: bool },
}

fuzz_target!(|ops: Vec<Op>| {
    let env = Env::default();
    env.mock_all_auths();

    let authority_id = env.register(MockRelayAuthority, ());
    let contract_id = env.register(PrescriptionContract, (authority_id.clone(),));
    let client = PrescriptionContractClient::new(&env, &contract_id);

    let relay = Address::generate(&env);
    let stranger = Address::generate(&env);
    MockRelayAuthorityClient::new(&env, &authority_id).set_relay(&relay, &true);

    // Expected (specialty, status) per id.
    let mut model: [Option<(usize, ValidationStatus)>; 3] = [None; 3];

    for op in ops.iter().take(32) {
        match *op {
            Op::Create { id, specialty } => {
                let (i, s) = (id as usize % IDS.len(), specialty as usize % SPECIALTIES.len());
                client.create(
                    &String::from_str(&env, IDS[i]),
                    &String::from_str(&env, "crm"),
                    &String::from_str(&env, SPECIALTIES[s]),
                    &String::from_str(&env, "hospital"),
                    &String::from_str(&env, "medicine"),
                );
                model[i] = Some((s, ValidationStatus::NotValidated));
            }
            Op::Validate { id, claim, as_relay } => {
                let (i, c) = (id as usize % IDS.len(), claim as usize % SPECIALTIES.len());
                let caller = if as_relay { &relay } else { &stranger };
                let result = client.try_validate(
                    caller,
                    &String::from_str(&env, IDS[i]),
                    &String::from_str(&env, SPECIALTIES[c]),
                );
                match (as_relay, model[i].as_mut()) {
                    (false, _) => assert_eq!(result, Err(Ok(RegistryError::AccessDenied))),
                    (true, None) => assert_eq!(result, Err(Ok(RegistryError::NotFound))),
                    (true, Some((s, status))) => {
                        *status = if *s == c {
                            ValidationStatus::Valid
                        } else {
                            ValidationStatus::Invalid
                        };
                        assert_eq!(result, Ok(Ok(*status)));
                    }
                }
            }
            Op::Read { id, as_relay } => {
                let i = id as usize % IDS.len();
                let caller = if as_relay { &relay } else { &stranger };
                let result = client.try_read(caller, &String::from_str(&env, IDS[i]));
                match (as_relay, model[i]) {
                    (false, _) => assert_eq!(result, Err(Ok(RegistryError::AccessDenied))),
                    (true, None) => assert_eq!(result, Err(Ok(RegistryError::NotFound))),
                    (true, Some((_, status))) => {
                        assert_eq!(result.unwrap().unwrap().validated, status);
                    }
                }
            }
        }
    }
});
