use crate::errors::SaleError;
use crate::types::DataKey;
use soroban_sdk::{Address, Env, Vec};

pub struct InventoryLedger;

impl InventoryLedger {
    pub fn is_sold(env: &Env, token_id: u32) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::SlotOwner(token_id))
    }

    pub fn owner_of(env: &Env, token_id: u32) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::SlotOwner(token_id))
    }

    /// Sole mutating entry point for inventory state. A slot moves from
    /// unsold to sold exactly once and the owner is fixed at that moment.
    pub fn mark_sold(
        env: &Env,
        slot_count: u32,
        token_id: u32,
        owner: &Address,
    ) -> Result<(), SaleError> {
        if token_id == 0 || token_id > slot_count {
            return Err(SaleError::OutOfRange);
        }

        if Self::is_sold(env, token_id) {
            return Err(SaleError::AlreadySold);
        }

        env.storage()
            .persistent()
            .set(&DataKey::SlotOwner(token_id), owner);

        let sold = Self::sold_count(env) + 1;
        env.storage().instance().set(&DataKey::SoldCount, &sold);

        Ok(())
    }

    pub fn sold_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::SoldCount)
            .unwrap_or(0)
    }

    pub fn unsold_count(env: &Env, slot_count: u32) -> u32 {
        slot_count - Self::sold_count(env)
    }

    /// Unsold ids in ascending order, the allocator's candidate pool.
    pub fn unsold_ids(env: &Env, slot_count: u32) -> Vec<u32> {
        let mut ids = Vec::new(env);
        for token_id in 1..=slot_count {
            if !Self::is_sold(env, token_id) {
                ids.push_back(token_id);
            }
        }
        ids
    }
}
