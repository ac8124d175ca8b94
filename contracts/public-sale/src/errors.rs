use soroban_sdk::contracterror;

/// Contract error types, grouped by concern
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    // Setup and authorization
    AlreadyInitialized = 1,    // Sale already has an administrator
    NotInitialized = 2,        // Sale has no administrator yet
    Unauthorized = 3,          // Caller lacks the required capability
    SettingAlreadySet = 4,     // One-shot configuration value set twice
    SaleNotConfigured = 5,     // A configuration value is still missing
    InvalidSlotCount = 6,      // Inventory size must be positive
    InvalidPrice = 7,          // Unit price must be positive
    InvalidCommissionRate = 8, // Rate must sit strictly between 0 and 100%

    // Purchase validation
    OutOfRange = 101,            // Slot id outside [1, N]
    AlreadySold = 102,           // Slot already has an owner
    InsufficientBalance = 103,   // Buyer cannot cover the unit price
    InsufficientAllowance = 104, // Buyer has not approved the engine
    InsufficientPayment = 105,   // Attached value below the unit price
    SoldOut = 106,               // No unsold slots remain

    // External collaborators
    MintRejected = 201, // Minting authority refused issuance
}
