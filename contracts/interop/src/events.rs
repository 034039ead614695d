use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayerEvent {
    pub relayer: Address,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events()
        .publish((symbol_short!("INIT"),), InitializedEvent { admin });
}

pub fn publish_relayer_added(env: &Env, relayer: Address) {
    env.events().publish(
        (symbol_short!("RLY_ADD"), relayer.clone()),
        RelayerEvent { relayer },
    );
}

pub fn publish_relayer_removed(env: &Env, relayer: Address) {
    env.events().publish(
        (symbol_short!("RLY_REM"), relayer.clone()),
        RelayerEvent { relayer },
    );
}
