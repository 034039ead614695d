/// Errors shared by the registry contracts.
///
/// Each variant is a distinct code so callers on the other side of a relay
/// can tell a denial apart from a missing or damaged record.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// The relay authority answered, and the caller is not a recognized relay.
    AccessDenied = 1,
    /// The relay authority could not be consulted.
    AccessCheckError = 2,
    NotFound = 3,
    /// Stored value does not decode as the registry's record type.
    CorruptRecord = 4,
    SerializationError = 5,
}
