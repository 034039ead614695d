use soroban_sdk::{contracttype, symbol_short, Env, String};

use crate::ValidationStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisteredEvent {
    pub chaincode_id: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionCreatedEvent {
    pub id: String,
    pub crm: String,
    pub specialty: String,
    pub hospital: String,
    pub medicine: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionValidatedEvent {
    pub id: String,
    pub claimed_specialty: String,
    pub validated: ValidationStatus,
}

pub fn publish_registered(env: &Env, chaincode_id: String) {
    env.events().publish(
        (symbol_short!("REGISTER"),),
        RegisteredEvent { chaincode_id },
    );
}

pub fn publish_prescription_created(
    env: &Env,
    id: String,
    crm: String,
    specialty: String,
    hospital: String,
    medicine: String,
) {
    env.events().publish(
        (symbol_short!("CREATE"), id.clone(), crm.clone()),
        PrescriptionCreatedEvent {
            id,
            crm,
            specialty,
            hospital,
            medicine,
        },
    );
}

pub fn publish_prescription_validated(
    env: &Env,
    id: String,
    claimed_specialty: String,
    validated: ValidationStatus,
) {
    env.events().publish(
        (symbol_short!("VALIDATE"), id.clone()),
        PrescriptionValidatedEvent {
            id,
            claimed_specialty,
            validated,
        },
    );
}
