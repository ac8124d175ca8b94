#![cfg(test)]
extern crate std;

use crate::{Capability, CollectibleNft, CollectibleNftClient, NftError};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

struct NftTest {
    env: Env,
    admin: Address,
    minter: Address,
    client: CollectibleNftClient<'static>,
}

impl NftTest {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(CollectibleNft, ());
        let client = CollectibleNftClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let minter = Address::generate(&env);

        client.initialize(
            &admin,
            &String::from_str(&env, "Collectible"),
            &String::from_str(&env, "CLB"),
            &30,
        );
        client.grant_capability(&admin, &Capability::Minter, &minter);

        NftTest {
            env,
            admin,
            minter,
            client,
        }
    }
}

#[test]
fn test_initialize_sets_collection_metadata() {
    let t = NftTest::new();

    assert_eq!(t.client.name(), String::from_str(&t.env, "Collectible"));
    assert_eq!(t.client.symbol(), String::from_str(&t.env, "CLB"));
    assert_eq!(t.client.max_supply(), 30);
    assert_eq!(t.client.total_minted(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let t = NftTest::new();

    let result = t.client.try_initialize(
        &t.admin,
        &String::from_str(&t.env, "Other"),
        &String::from_str(&t.env, "OTH"),
        &10,
    );
    assert_eq!(result, Err(Ok(NftError::AlreadyInitialized)));
}

#[test]
fn test_initialize_rejects_zero_supply() {
    let env = Env::default();
    env.mock_all_auths();
    let client = CollectibleNftClient::new(&env, &env.register(CollectibleNft, ()));
    let admin = Address::generate(&env);

    let result = client.try_initialize(
        &admin,
        &String::from_str(&env, "Collectible"),
        &String::from_str(&env, "CLB"),
        &0,
    );
    assert_eq!(result, Err(Ok(NftError::InvalidSupply)));
}

#[test]
fn test_mint_requires_minter_capability() {
    let t = NftTest::new();
    let outsider = Address::generate(&t.env);

    let result = t.client.try_mint(&outsider, &outsider, &1);
    assert_eq!(result, Err(Ok(NftError::Unauthorized)));
}

#[test]
fn test_mint_assigns_ownership() {
    let t = NftTest::new();
    let owner = Address::generate(&t.env);

    t.client.mint(&t.minter, &owner, &1);

    assert_eq!(t.client.owner_of(&1), owner);
    assert!(t.client.token_exists(&1));
    assert_eq!(t.client.total_minted(), 1);
}

#[test]
fn test_mint_rejects_duplicate_token_id() {
    let t = NftTest::new();
    let owner = Address::generate(&t.env);

    t.client.mint(&t.minter, &owner, &1);

    let result = t.client.try_mint(&t.minter, &owner, &1);
    assert_eq!(result, Err(Ok(NftError::TokenAlreadyMinted)));
}

#[test]
fn test_mint_rejects_ids_outside_range() {
    let t = NftTest::new();
    let owner = Address::generate(&t.env);

    assert_eq!(
        t.client.try_mint(&t.minter, &owner, &0),
        Err(Ok(NftError::TokenOutOfRange))
    );
    assert_eq!(
        t.client.try_mint(&t.minter, &owner, &31),
        Err(Ok(NftError::TokenOutOfRange))
    );
}

#[test]
fn test_whole_collection_can_be_minted() {
    let t = NftTest::new();
    let owner = Address::generate(&t.env);

    for token_id in 1..=30u32 {
        t.client.mint(&t.minter, &owner, &token_id);
    }

    assert_eq!(t.client.total_minted(), 30);
}

#[test]
fn test_grant_capability_is_admin_gated() {
    let t = NftTest::new();
    let outsider = Address::generate(&t.env);

    let result = t
        .client
        .try_grant_capability(&outsider, &Capability::Minter, &outsider);
    assert_eq!(result, Err(Ok(NftError::Unauthorized)));
}

#[test]
fn test_duplicate_grant_fails() {
    let t = NftTest::new();

    let result = t
        .client
        .try_grant_capability(&t.admin, &Capability::Minter, &t.minter);
    assert_eq!(result, Err(Ok(NftError::CapabilityAlreadyGranted)));
}

#[test]
fn test_revoked_minter_cannot_mint() {
    let t = NftTest::new();
    let owner = Address::generate(&t.env);

    t.client
        .revoke_capability(&t.admin, &Capability::Minter, &t.minter);
    assert!(!t.client.has_capability(&Capability::Minter, &t.minter));

    let result = t.client.try_mint(&t.minter, &owner, &1);
    assert_eq!(result, Err(Ok(NftError::Unauthorized)));
}

#[test]
fn test_transfer_moves_ownership() {
    let t = NftTest::new();
    let alice = Address::generate(&t.env);
    let bob = Address::generate(&t.env);

    t.client.mint(&t.minter, &alice, &7);
    t.client.transfer(&alice, &bob, &7);

    assert_eq!(t.client.owner_of(&7), bob);
}

#[test]
fn test_transfer_rejects_non_owner_and_self() {
    let t = NftTest::new();
    let alice = Address::generate(&t.env);
    let bob = Address::generate(&t.env);

    t.client.mint(&t.minter, &alice, &7);

    assert_eq!(
        t.client.try_transfer(&bob, &alice, &7),
        Err(Ok(NftError::NotOwner))
    );
    assert_eq!(
        t.client.try_transfer(&alice, &alice, &7),
        Err(Ok(NftError::SelfTransfer))
    );
    assert_eq!(
        t.client.try_transfer(&alice, &bob, &8),
        Err(Ok(NftError::TokenNotFound))
    );
}

#[test]
fn test_owner_can_burn_own_token() {
    let t = NftTest::new();
    let alice = Address::generate(&t.env);

    t.client.mint(&t.minter, &alice, &3);
    t.client.burn(&alice, &3);

    assert!(!t.client.token_exists(&3));
}

#[test]
fn test_burner_capability_can_burn_any_token() {
    let t = NftTest::new();
    let alice = Address::generate(&t.env);
    let burner = Address::generate(&t.env);

    t.client
        .grant_capability(&t.admin, &Capability::Burner, &burner);
    t.client.mint(&t.minter, &alice, &3);
    t.client.burn(&burner, &3);

    assert!(!t.client.token_exists(&3));
}

#[test]
fn test_burn_rejects_unrelated_caller() {
    let t = NftTest::new();
    let alice = Address::generate(&t.env);
    let outsider = Address::generate(&t.env);

    t.client.mint(&t.minter, &alice, &3);

    let result = t.client.try_burn(&outsider, &3);
    assert_eq!(result, Err(Ok(NftError::Unauthorized)));
}
