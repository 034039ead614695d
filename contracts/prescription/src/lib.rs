#![no_std]

pub mod events;

use common::{identity, require_relay_access, storage, RegistryError};
use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String};

/// Outcome of checking a prescription against the prescriber's specialty as
/// reported by the remote network.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValidationStatus {
    NotValidated,
    Valid,
    Invalid,
}

impl ValidationStatus {
    /// Status for a claimed specialty compared against the stored one.
    pub fn for_claim(stored: &String, claimed: &String) -> Self {
        if stored == claimed {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValidationStatus::NotValidated => "Not validated",
            ValidationStatus::Valid => "Valid",
            ValidationStatus::Invalid => "Invalid",
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionRecord {
    pub id: String,
    /// Identifier of the prescriber's credential in the CRM registry.
    /// Not checked for existence.
    pub crm: String,
    pub specialty: String,
    pub hospital: String,
    pub medicine: String,
    pub validated: ValidationStatus,
}

#[contract]
pub struct PrescriptionContract;

#[contractimpl]
impl PrescriptionContract {
    /// Deploys the registry against the contract that recognizes relays.
    pub fn __constructor(env: Env, relay_authority: Address) {
        storage::set_relay_authority(&env, &relay_authority);
    }

    /// Record the interoperation chaincode ID on the ledger
    pub fn register(env: Env, chaincode_id: String) {
        log!(&env, "Register called", chaincode_id.clone());
        identity::register_interop_id(&env, &chaincode_id);
        events::publish_registered(&env, chaincode_id);
    }

    pub fn interop_id(env: Env) -> Option<String> {
        identity::interop_id(&env)
    }

    pub fn relay_authority(env: Env) -> Option<Address> {
        storage::relay_authority(&env)
    }

    /// Store a new, not yet validated prescription. An existing entry with
    /// the same id is replaced.
    pub fn create(
        env: Env,
        id: String,
        crm: String,
        specialty: String,
        hospital: String,
        medicine: String,
    ) -> Result<(), RegistryError> {
        let prescription = PrescriptionRecord {
            id: id.clone(),
            crm: crm.clone(),
            specialty: specialty.clone(),
            hospital: hospital.clone(),
            medicine: medicine.clone(),
            validated: ValidationStatus::NotValidated,
        };
        storage::put_record(&env, &id, &prescription)?;

        log!(&env, "Create called", id.clone(), crm.clone(), medicine.clone());
        events::publish_prescription_created(&env, id, crm, specialty, hospital, medicine);

        Ok(())
    }

    /// Read a prescription. Only recognized relays may call this.
    pub fn read(
        env: Env,
        caller: Address,
        id: String,
    ) -> Result<PrescriptionRecord, RegistryError> {
        require_relay_access(&env, &caller)?;
        storage::get_record(&env, &id)
    }

    /// Validate a prescription with the specialty reported by the remote
    /// network. The status is recomputed and written back on every call.
    pub fn validate(
        env: Env,
        caller: Address,
        id: String,
        claimed_specialty: String,
    ) -> Result<ValidationStatus, RegistryError> {
        require_relay_access(&env, &caller)?;
        let mut prescription: PrescriptionRecord = storage::get_record(&env, &id)?;

        prescription.validated =
            ValidationStatus::for_claim(&prescription.specialty, &claimed_specialty);
        storage::put_record(&env, &id, &prescription)?;

        log!(
            &env,
            "Prescription validated",
            id.clone(),
            String::from_str(&env, prescription.validated.label())
        );
        events::publish_prescription_validated(
            &env,
            id,
            claimed_specialty,
            prescription.validated,
        );

        Ok(prescription.validated)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
