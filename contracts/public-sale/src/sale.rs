use crate::access::{AccessManager, Capability};
use crate::allocator::SlotAllocator;
use crate::errors::SaleError;
use crate::escrow;
use crate::event::{self, DeliverNft};
use crate::external::MintGatewayClient;
use crate::fees;
use crate::inventory::InventoryLedger;
use crate::types::{Allocation, DataKey, SaleConfig};
use soroban_sdk::{token, Address, Env, IntoVal, Val};

pub struct SaleManager;

impl SaleManager {
    /// Verify the caller may run an administrative operation
    pub fn guard_admin(env: &Env, admin: &Address) -> Result<(), SaleError> {
        admin.require_auth();
        AccessManager::require(env, Capability::Admin, admin)
    }

    /// Store a one-shot configuration value. Configuration is immutable
    /// once written.
    pub fn store_once<V>(env: &Env, key: &DataKey, value: &V) -> Result<(), SaleError>
    where
        V: IntoVal<Env, Val>,
    {
        if env.storage().instance().has(key) {
            return Err(SaleError::SettingAlreadySet);
        }
        env.storage().instance().set(key, value);
        Ok(())
    }

    /// Assemble the full configuration, failing while any setter has not
    /// run yet.
    pub fn config(env: &Env) -> Result<SaleConfig, SaleError> {
        let storage = env.storage().instance();
        Ok(SaleConfig {
            price_token: storage
                .get(&DataKey::PriceToken)
                .ok_or(SaleError::SaleNotConfigured)?,
            payment_token: storage
                .get(&DataKey::PaymentToken)
                .ok_or(SaleError::SaleNotConfigured)?,
            treasury_wallet: storage
                .get(&DataKey::TreasuryWallet)
                .ok_or(SaleError::SaleNotConfigured)?,
            commission_wallet: storage
                .get(&DataKey::CommissionWallet)
                .ok_or(SaleError::SaleNotConfigured)?,
            mint_gateway: storage
                .get(&DataKey::MintGateway)
                .ok_or(SaleError::SaleNotConfigured)?,
            slot_count: storage
                .get(&DataKey::SlotCount)
                .ok_or(SaleError::SaleNotConfigured)?,
            unit_price: storage
                .get(&DataKey::UnitPrice)
                .ok_or(SaleError::SaleNotConfigured)?,
            commission_rate_bps: storage
                .get(&DataKey::CommissionRateBps)
                .ok_or(SaleError::SaleNotConfigured)?,
        })
    }

    pub fn slot_count(env: &Env) -> Result<u32, SaleError> {
        env.storage()
            .instance()
            .get(&DataKey::SlotCount)
            .ok_or(SaleError::SaleNotConfigured)
    }

    /// Buy a specific slot, paying the unit price in the price token.
    pub fn purchase_by_id(
        env: &Env,
        buyer: &Address,
        token_id: u32,
    ) -> Result<Allocation, SaleError> {
        buyer.require_auth();
        let config = Self::config(env)?;

        if token_id == 0 || token_id > config.slot_count {
            return Err(SaleError::OutOfRange);
        }
        if InventoryLedger::is_sold(env, token_id) {
            return Err(SaleError::AlreadySold);
        }

        let price_token = token::Client::new(env, &config.price_token);
        let engine = env.current_contract_address();
        if price_token.balance(buyer) < config.unit_price {
            return Err(SaleError::InsufficientBalance);
        }
        if price_token.allowance(buyer, &engine) < config.unit_price {
            return Err(SaleError::InsufficientAllowance);
        }

        let (treasury_share, commission_share) =
            fees::split(config.unit_price, config.commission_rate_bps);
        price_token.transfer_from(&engine, buyer, &config.treasury_wallet, &treasury_share);
        price_token.transfer_from(&engine, buyer, &config.commission_wallet, &commission_share);

        InventoryLedger::mark_sold(env, config.slot_count, token_id, buyer)?;

        Self::commit(
            env,
            &config,
            Allocation {
                buyer: buyer.clone(),
                token_id,
                gross_amount: config.unit_price,
                treasury_share,
                commission_share,
                refund: 0,
            },
        )
    }

    /// Deposit value and receive a system-chosen unsold slot. Excess over
    /// the unit price is refunded within the same invocation.
    pub fn purchase_random(
        env: &Env,
        buyer: &Address,
        paid_value: i128,
    ) -> Result<Allocation, SaleError> {
        buyer.require_auth();
        let config = Self::config(env)?;

        let candidates = InventoryLedger::unsold_ids(env, config.slot_count);
        let token_id = SlotAllocator::allocate(env, &candidates, buyer)?;

        let refund = escrow::settle(paid_value, config.unit_price)?;
        let (treasury_share, commission_share) =
            fees::split(config.unit_price, config.commission_rate_bps);

        escrow::receive(env, &config.payment_token, buyer, &paid_value);
        escrow::pay_out(
            env,
            &config.payment_token,
            &config.treasury_wallet,
            &treasury_share,
        );
        escrow::pay_out(
            env,
            &config.payment_token,
            &config.commission_wallet,
            &commission_share,
        );
        if refund > 0 {
            escrow::pay_out(env, &config.payment_token, buyer, &refund);
        }

        InventoryLedger::mark_sold(env, config.slot_count, token_id, buyer)?;

        Self::commit(
            env,
            &config,
            Allocation {
                buyer: buyer.clone(),
                token_id,
                gross_amount: config.unit_price,
                treasury_share,
                commission_share,
                refund,
            },
        )
    }

    /// Final step of both purchase paths. Inventory and value movement are
    /// already committed; the cross-contract mint comes last so a reentrant
    /// call can only observe fully-consistent state.
    fn commit(
        env: &Env,
        config: &SaleConfig,
        allocation: Allocation,
    ) -> Result<Allocation, SaleError> {
        env.storage()
            .persistent()
            .set(&DataKey::Allocation(allocation.token_id), &allocation);

        let gateway = MintGatewayClient::new(env, &config.mint_gateway);
        if gateway
            .try_mint(
                &env.current_contract_address(),
                &allocation.buyer,
                &allocation.token_id,
            )
            .is_err()
        {
            return Err(SaleError::MintRejected);
        }

        env.events().publish(
            (event::DELIVER, allocation.buyer.clone()),
            DeliverNft {
                buyer: allocation.buyer.clone(),
                token_id: allocation.token_id,
            },
        );

        Ok(allocation)
    }
}
