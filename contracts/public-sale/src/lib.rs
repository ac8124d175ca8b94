#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

pub mod access;
pub mod allocator;
pub mod errors;
pub mod escrow;
pub mod event;
pub mod external;
pub mod fees;
pub mod interface;
pub mod inventory;
pub mod sale;
pub mod types;

use crate::access::{AccessManager, Capability};
use crate::errors::SaleError;
use crate::interface::SaleTrait;
use crate::inventory::InventoryLedger;
use crate::sale::SaleManager;
use crate::types::{Allocation, DataKey};

#[contract]
pub struct PublicSaleContract;

#[contractimpl]
impl SaleTrait for PublicSaleContract {
    fn initialize(env: Env, admin: Address) -> Result<(), SaleError> {
        admin.require_auth();
        AccessManager::init_admin(&env, &admin)?;

        env.events().publish((Symbol::new(&env, "init"),), (admin,));
        Ok(())
    }

    fn set_price_token(env: Env, admin: Address, token: Address) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        SaleManager::store_once(&env, &DataKey::PriceToken, &token)
    }

    fn set_payment_token(env: Env, admin: Address, token: Address) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        SaleManager::store_once(&env, &DataKey::PaymentToken, &token)
    }

    fn set_treasury_wallet(env: Env, admin: Address, wallet: Address) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        SaleManager::store_once(&env, &DataKey::TreasuryWallet, &wallet)
    }

    fn set_commission_wallet(env: Env, admin: Address, wallet: Address) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        SaleManager::store_once(&env, &DataKey::CommissionWallet, &wallet)
    }

    fn set_mint_gateway(env: Env, admin: Address, gateway: Address) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        SaleManager::store_once(&env, &DataKey::MintGateway, &gateway)
    }

    fn set_slot_count(env: Env, admin: Address, count: u32) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        if count == 0 {
            return Err(SaleError::InvalidSlotCount);
        }
        SaleManager::store_once(&env, &DataKey::SlotCount, &count)
    }

    fn set_unit_price(env: Env, admin: Address, price: i128) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        if price <= 0 {
            return Err(SaleError::InvalidPrice);
        }
        SaleManager::store_once(&env, &DataKey::UnitPrice, &price)
    }

    fn set_commission_rate(env: Env, admin: Address, rate_bps: u32) -> Result<(), SaleError> {
        SaleManager::guard_admin(&env, &admin)?;
        if rate_bps == 0 || rate_bps >= 10_000 {
            return Err(SaleError::InvalidCommissionRate);
        }
        SaleManager::store_once(&env, &DataKey::CommissionRateBps, &rate_bps)
    }

    fn purchase_by_id(env: Env, buyer: Address, token_id: u32) -> Result<Allocation, SaleError> {
        SaleManager::purchase_by_id(&env, &buyer, token_id)
    }

    fn purchase_random(
        env: Env,
        buyer: Address,
        paid_value: i128,
    ) -> Result<Allocation, SaleError> {
        SaleManager::purchase_random(&env, &buyer, paid_value)
    }

    fn is_sold(env: Env, token_id: u32) -> bool {
        InventoryLedger::is_sold(&env, token_id)
    }

    fn owner_of(env: Env, token_id: u32) -> Option<Address> {
        InventoryLedger::owner_of(&env, token_id)
    }

    fn sold_count(env: Env) -> u32 {
        InventoryLedger::sold_count(&env)
    }

    fn unsold_count(env: Env) -> Result<u32, SaleError> {
        let slot_count = SaleManager::slot_count(&env)?;
        Ok(InventoryLedger::unsold_count(&env, slot_count))
    }

    fn unsold_ids(env: Env) -> Result<Vec<u32>, SaleError> {
        let slot_count = SaleManager::slot_count(&env)?;
        Ok(InventoryLedger::unsold_ids(&env, slot_count))
    }

    fn get_allocation(env: Env, token_id: u32) -> Option<Allocation> {
        env.storage()
            .persistent()
            .get(&DataKey::Allocation(token_id))
    }

    fn has_capability(env: Env, capability: Capability, who: Address) -> bool {
        AccessManager::has(&env, capability, &who)
    }
}
