use crate::access::Capability;
use soroban_sdk::{contracttype, Address};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Capability(Capability), // Capability -> Vec<holder>
    PriceToken,             // Token charged for directed purchases
    PaymentToken,           // Token carrying the attached value of undirected purchases
    TreasuryWallet,         // Retained-proceeds destination
    CommissionWallet,       // Commission recipient
    MintGateway,            // Minting authority contract
    SlotCount,              // Total inventory size N
    UnitPrice,              // Price per slot
    CommissionRateBps,      // Commission rate in basis points
    AllocationNonce,        // Bumped on every allocation attempt
    SoldCount,              // Number of slots sold
    SlotOwner(u32),         // Slot id -> buyer
    Allocation(u32),        // Slot id -> settlement outcome
}

/// Fully-resolved sale configuration. Assembled on demand once every
/// one-shot setter has run; immutable from then on.
#[contracttype]
#[derive(Clone)]
pub struct SaleConfig {
    pub price_token: Address,
    pub payment_token: Address,
    pub treasury_wallet: Address,
    pub commission_wallet: Address,
    pub mint_gateway: Address,
    pub slot_count: u32,
    pub unit_price: i128,
    pub commission_rate_bps: u32,
}

/// Settlement outcome of one successful purchase. Written once per slot,
/// never updated.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allocation {
    pub buyer: Address,
    pub token_id: u32,
    pub gross_amount: i128,
    pub treasury_share: i128,
    pub commission_share: i128,
    pub refund: i128,
}
