use crate::access::Capability;
use crate::errors::SaleError;
use crate::types::Allocation;
use soroban_sdk::{Address, Env, Vec};

/// Interface for the public sale engine.
pub trait SaleTrait {
    /// Set up the sale administrator. Callable once.
    fn initialize(env: Env, admin: Address) -> Result<(), SaleError>;

    /// Token contract charged for directed purchases. One-shot, Admin-gated,
    /// like every setter below.
    fn set_price_token(env: Env, admin: Address, token: Address) -> Result<(), SaleError>;

    /// Token contract carrying the attached value of undirected purchases.
    fn set_payment_token(env: Env, admin: Address, token: Address) -> Result<(), SaleError>;

    /// Destination for the sale's retained proceeds.
    fn set_treasury_wallet(env: Env, admin: Address, wallet: Address) -> Result<(), SaleError>;

    /// Recipient of the commission share of every sale.
    fn set_commission_wallet(env: Env, admin: Address, wallet: Address) -> Result<(), SaleError>;

    /// Address of the minting authority contract.
    fn set_mint_gateway(env: Env, admin: Address, gateway: Address) -> Result<(), SaleError>;

    /// Total inventory size. Slot ids run over [1, count].
    fn set_slot_count(env: Env, admin: Address, count: u32) -> Result<(), SaleError>;

    /// Price per slot, in both payment denominations.
    fn set_unit_price(env: Env, admin: Address, price: i128) -> Result<(), SaleError>;

    /// Commission rate in basis points, strictly between 0 and 10_000.
    fn set_commission_rate(env: Env, admin: Address, rate_bps: u32) -> Result<(), SaleError>;

    /// Buy a specific slot, paying the unit price in the price token.
    fn purchase_by_id(env: Env, buyer: Address, token_id: u32) -> Result<Allocation, SaleError>;

    /// Deposit value and receive a system-chosen unsold slot. Excess over
    /// the unit price is refunded in the same invocation.
    fn purchase_random(env: Env, buyer: Address, paid_value: i128)
        -> Result<Allocation, SaleError>;

    fn is_sold(env: Env, token_id: u32) -> bool;

    fn owner_of(env: Env, token_id: u32) -> Option<Address>;

    fn sold_count(env: Env) -> u32;

    fn unsold_count(env: Env) -> Result<u32, SaleError>;

    fn unsold_ids(env: Env) -> Result<Vec<u32>, SaleError>;

    fn get_allocation(env: Env, token_id: u32) -> Option<Allocation>;

    fn has_capability(env: Env, capability: Capability, who: Address) -> bool;
}
