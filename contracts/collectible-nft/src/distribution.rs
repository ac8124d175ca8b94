use crate::errors::NftError;
use crate::{CollectibleNftArgs, CollectibleNftClient, DataKey};
use soroban_sdk::{contractimpl, symbol_short, Address, Env};

#[contractimpl]
impl super::CollectibleNft {
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), NftError> {
        from.require_auth();

        if from == to {
            return Err(NftError::SelfTransfer);
        }

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Token(token_id))
            .ok_or(NftError::TokenNotFound)?;

        if owner != from {
            return Err(NftError::NotOwner);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Token(token_id), &to);

        env.events()
            .publish((symbol_short!("TRANSFER"), &from, &to), token_id);

        Ok(())
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, NftError> {
        env.storage()
            .persistent()
            .get(&DataKey::Token(token_id))
            .ok_or(NftError::TokenNotFound)
    }

    pub fn token_exists(env: Env, token_id: u32) -> bool {
        env.storage().persistent().has(&DataKey::Token(token_id))
    }
}
