use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing delivery events.
pub const DELIVER: Symbol = symbol_short!("DELIVER");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeliverNft {
    pub buyer: Address,
    pub token_id: u32,
}
