#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol};

mod access;
mod distribution;
mod errors;
mod minting;

pub use crate::access::{AccessManager, Capability};
pub use crate::errors::NftError;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Capability(Capability), // Capability -> Vec<holder>
    Name,                   // Collection name
    Symbol,                 // Collection symbol
    MaxSupply,              // Token ids run over [1, MaxSupply]
    TotalMinted,            // Number of tokens issued so far
    Token(u32),             // Token id -> owner
}

#[contract]
pub struct CollectibleNft;

#[contractimpl]
impl CollectibleNft {
    /// Initialize the collection with an admin and a fixed token id range.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        max_supply: u32,
    ) -> Result<(), NftError> {
        admin.require_auth();

        if max_supply == 0 {
            return Err(NftError::InvalidSupply);
        }

        AccessManager::init_admin(&env, &admin)?;

        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::MaxSupply, &max_supply);
        env.storage().instance().set(&DataKey::TotalMinted, &0u32);

        env.events().publish((Symbol::new(&env, "init"),), (admin,));
        Ok(())
    }

    /// Add a principal to a capability's holder set
    pub fn grant_capability(
        env: Env,
        admin: Address,
        capability: Capability,
        who: Address,
    ) -> Result<(), NftError> {
        admin.require_auth();
        AccessManager::grant(&env, &admin, capability, &who)
    }

    /// Remove a principal from a capability's holder set
    pub fn revoke_capability(
        env: Env,
        admin: Address,
        capability: Capability,
        who: Address,
    ) -> Result<(), NftError> {
        admin.require_auth();
        AccessManager::revoke(&env, &admin, capability, &who)
    }

    /// Check if a principal holds a capability
    pub fn has_capability(env: Env, capability: Capability, who: Address) -> bool {
        AccessManager::has(&env, capability, &who)
    }

    pub fn name(env: Env) -> Result<String, NftError> {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(NftError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, NftError> {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .ok_or(NftError::NotInitialized)
    }

    pub fn max_supply(env: Env) -> Result<u32, NftError> {
        env.storage()
            .instance()
            .get(&DataKey::MaxSupply)
            .ok_or(NftError::NotInitialized)
    }

    pub fn total_minted(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalMinted)
            .unwrap_or(0)
    }
}

mod test;
