use crate::errors::SaleError;
use soroban_sdk::{token, Address, Env};

/// Compute the refund owed to a buyer who attached `paid_value` to an
/// undirected purchase. The caller must route the refund back to the buyer
/// within the same invocation.
pub fn settle(paid_value: i128, owed: i128) -> Result<i128, SaleError> {
    if paid_value < owed {
        return Err(SaleError::InsufficientPayment);
    }
    Ok(paid_value - owed)
}

/// Pull attached value from the buyer into the contract
pub fn receive(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

/// Pay value out of the contract. A failed transfer traps the invocation,
/// rolling back the whole purchase.
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, amount);
}
