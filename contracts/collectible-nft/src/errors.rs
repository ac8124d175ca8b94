use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    NotInitialized = 1,            // Contract not initialized
    AlreadyInitialized = 2,        // Contract already setup
    Unauthorized = 3,              // Caller lacks the required capability
    TokenOutOfRange = 4,           // Token id outside [1, max_supply]
    TokenAlreadyMinted = 5,        // Token id already issued
    TokenNotFound = 6,             // Token id never minted
    InvalidSupply = 7,             // Collection size must be positive
    CapabilityAlreadyGranted = 8,  // Principal already holds the capability
    NotOwner = 9,                  // Caller does not own the token
    SelfTransfer = 10,             // Transfer to the current owner
}
