use crate::errors::SaleError;
use crate::types::DataKey;
use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, Vec};

pub struct SlotAllocator;

impl SlotAllocator {
    /// Pick one unsold slot for an undirected purchase.
    ///
    /// Seed material is the buyer address, a per-sale nonce and the current
    /// ledger position. The nonce is bumped on every attempt, before any
    /// other check, so two allocations landing in the same ledger close
    /// never share seed material. The draw is recomputable from on-chain
    /// data after the fact; before submission it depends on the ledger the
    /// transaction lands in.
    pub fn allocate(env: &Env, candidates: &Vec<u32>, buyer: &Address) -> Result<u32, SaleError> {
        let nonce = Self::bump_nonce(env);

        if candidates.is_empty() {
            return Err(SaleError::SoldOut);
        }

        let mut seed = buyer.clone().to_xdr(env);
        seed.extend_from_array(&nonce.to_be_bytes());
        seed.extend_from_array(&env.ledger().timestamp().to_be_bytes());
        seed.extend_from_array(&env.ledger().sequence().to_be_bytes());

        let digest: BytesN<32> = env.crypto().sha256(&seed).into();
        let digest = digest.to_array();
        let raw = u64::from_be_bytes([
            digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
        ]);
        let index = (raw % u64::from(candidates.len())) as u32;

        // index < len, so the lookup always resolves
        Ok(candidates.get(index).unwrap())
    }

    fn bump_nonce(env: &Env) -> u64 {
        let nonce: u64 = env
            .storage()
            .instance()
            .get(&DataKey::AllocationNonce)
            .unwrap_or(0)
            + 1;
        env.storage()
            .instance()
            .set(&DataKey::AllocationNonce, &nonce);
        nonce
    }
}
