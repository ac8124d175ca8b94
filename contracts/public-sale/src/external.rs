use soroban_sdk::{contractclient, contracterror, Address};

/// Error codes surfaced by minting authority contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MintError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    TokenOutOfRange = 4,
    TokenAlreadyMinted = 5,
    TokenNotFound = 6,
}

/// Interface of the minting authority that finalizes ownership issuance.
#[allow(dead_code)]
#[contractclient(name = "MintGatewayClient")]
pub trait MintGateway {
    /// Issue `token_id` to `to`. `minter` must hold the Minter capability
    /// on the authority contract.
    fn mint(minter: Address, to: Address, token_id: u32) -> Result<(), MintError>;
}
