use crate::access::{AccessManager, Capability};
use crate::errors::NftError;
use crate::{CollectibleNftArgs, CollectibleNftClient, DataKey};
use soroban_sdk::{contractimpl, symbol_short, Address, Env};

#[contractimpl]
impl super::CollectibleNft {
    /// Issue `token_id` to `to`. The minter must hold the Minter capability.
    /// Ids are bounded by the collection's fixed supply and each id can be
    /// issued exactly once.
    pub fn mint(env: Env, minter: Address, to: Address, token_id: u32) -> Result<(), NftError> {
        minter.require_auth();
        AccessManager::require(&env, Capability::Minter, &minter)?;

        let max_supply: u32 = env
            .storage()
            .instance()
            .get(&DataKey::MaxSupply)
            .ok_or(NftError::NotInitialized)?;

        if token_id == 0 || token_id > max_supply {
            return Err(NftError::TokenOutOfRange);
        }

        if env.storage().persistent().has(&DataKey::Token(token_id)) {
            return Err(NftError::TokenAlreadyMinted);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Token(token_id), &to);

        let minted = Self::total_minted(env.clone()) + 1;
        env.storage().instance().set(&DataKey::TotalMinted, &minted);

        env.events()
            .publish((symbol_short!("MINT"), &to), token_id);

        Ok(())
    }

    /// Destroy a token. The owner may burn their own token; Burner
    /// capability holders may burn any token.
    pub fn burn(env: Env, caller: Address, token_id: u32) -> Result<(), NftError> {
        caller.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Token(token_id))
            .ok_or(NftError::TokenNotFound)?;

        if caller != owner && !AccessManager::has(&env, Capability::Burner, &caller) {
            return Err(NftError::Unauthorized);
        }

        env.storage().persistent().remove(&DataKey::Token(token_id));

        env.events()
            .publish((symbol_short!("BURN"), &owner), token_id);

        Ok(())
    }
}
