use soroban_sdk::{contracttype, symbol_short, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisteredEvent {
    pub chaincode_id: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialCreatedEvent {
    pub id: String,
    pub specialty: String,
    pub state: bool,
}

pub fn publish_registered(env: &Env, chaincode_id: String) {
    env.events().publish(
        (symbol_short!("REGISTER"),),
        RegisteredEvent { chaincode_id },
    );
}

pub fn publish_credential_created(env: &Env, id: String, specialty: String, state: bool) {
    env.events().publish(
        (symbol_short!("CREATE"), id.clone()),
        CredentialCreatedEvent {
            id,
            specialty,
            state,
        },
    );
}
