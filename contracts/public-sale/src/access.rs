use crate::errors::SaleError;
use crate::types::DataKey;
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Capabilities gating administrative operations. Each capability maps to
/// the set of principals holding it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Capability {
    Admin,
}

pub struct AccessManager;

impl AccessManager {
    /// Grant the Admin capability to the initial administrator. Fails if an
    /// administrator already exists.
    pub fn init_admin(env: &Env, admin: &Address) -> Result<(), SaleError> {
        if env
            .storage()
            .instance()
            .has(&DataKey::Capability(Capability::Admin))
        {
            return Err(SaleError::AlreadyInitialized);
        }

        let mut holders = Vec::new(env);
        holders.push_back(admin.clone());
        env.storage()
            .instance()
            .set(&DataKey::Capability(Capability::Admin), &holders);

        Ok(())
    }

    /// Check if a principal holds a capability
    pub fn has(env: &Env, capability: Capability, who: &Address) -> bool {
        let holders: Vec<Address> = env
            .storage()
            .instance()
            .get(&DataKey::Capability(capability))
            .unwrap_or_else(|| Vec::new(env));

        holders.contains(who)
    }

    /// Verify a capability at the start of a gated operation
    pub fn require(env: &Env, capability: Capability, who: &Address) -> Result<(), SaleError> {
        if !env
            .storage()
            .instance()
            .has(&DataKey::Capability(Capability::Admin))
        {
            return Err(SaleError::NotInitialized);
        }

        if !Self::has(env, capability, who) {
            return Err(SaleError::Unauthorized);
        }

        Ok(())
    }
}
