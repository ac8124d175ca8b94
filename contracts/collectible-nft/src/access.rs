use crate::errors::NftError;
use crate::DataKey;
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Capabilities gating privileged operations. Each capability maps to the
/// set of principals holding it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Capability {
    Admin,
    Minter,
    Burner,
}

pub struct AccessManager;

impl AccessManager {
    /// Grant the Admin capability to the initial administrator. Fails if an
    /// administrator already exists.
    pub fn init_admin(env: &Env, admin: &Address) -> Result<(), NftError> {
        if env
            .storage()
            .instance()
            .has(&DataKey::Capability(Capability::Admin))
        {
            return Err(NftError::AlreadyInitialized);
        }

        let mut holders = Vec::new(env);
        holders.push_back(admin.clone());
        env.storage()
            .instance()
            .set(&DataKey::Capability(Capability::Admin), &holders);

        Ok(())
    }

    /// Add a principal to a capability's holder set
    pub fn grant(
        env: &Env,
        admin: &Address,
        capability: Capability,
        who: &Address,
    ) -> Result<(), NftError> {
        Self::require(env, Capability::Admin, admin)?;

        let mut holders = Self::holders(env, capability.clone());
        if holders.contains(who) {
            return Err(NftError::CapabilityAlreadyGranted);
        }

        holders.push_back(who.clone());
        env.storage()
            .instance()
            .set(&DataKey::Capability(capability), &holders);

        Ok(())
    }

    /// Remove a principal from a capability's holder set
    pub fn revoke(
        env: &Env,
        admin: &Address,
        capability: Capability,
        who: &Address,
    ) -> Result<(), NftError> {
        Self::require(env, Capability::Admin, admin)?;

        let mut holders = Self::holders(env, capability.clone());
        if let Some(index) = holders.first_index_of(who) {
            holders.remove(index);
            env.storage()
                .instance()
                .set(&DataKey::Capability(capability), &holders);
        }

        Ok(())
    }

    /// Check if a principal holds a capability
    pub fn has(env: &Env, capability: Capability, who: &Address) -> bool {
        Self::holders(env, capability).contains(who)
    }

    /// Verify a capability at the start of a gated operation
    pub fn require(env: &Env, capability: Capability, who: &Address) -> Result<(), NftError> {
        if !env
            .storage()
            .instance()
            .has(&DataKey::Capability(Capability::Admin))
        {
            return Err(NftError::NotInitialized);
        }

        if !Self::has(env, capability, who) {
            return Err(NftError::Unauthorized);
        }

        Ok(())
    }

    fn holders(env: &Env, capability: Capability) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Capability(capability))
            .unwrap_or_else(|| Vec::new(env))
    }
}
