#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};

// Source contracts and their generated clients
use credit_interface::CreditLedgerClient;
use sale_credit::{SaleCreditToken, SaleCreditTokenClient};
use token_sale::{SaleError, SaleParams, TokenSaleContract, TokenSaleContractClient, PAYMENT_UNIT};

#[test]
fn test_token_sale_lifecycle_e2e() {
    let env = Env::default();

    // Automatically handles authorizations for all contract calls in the test
    env.mock_all_auths();

    // Identities
    let owner = Address::generate(&env);
    let fund_wallet = Address::generate(&env);
    let team_wallet = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    // Payment asset
    let asset = env.register_stellar_asset_contract_v2(owner.clone());
    let payment = TokenClient::new(&env, &asset.address());
    let payment_admin = StellarAssetClient::new(&env, &asset.address());
    payment_admin.mint(&alice, &(100 * PAYMENT_UNIT));
    payment_admin.mint(&bob, &(100 * PAYMENT_UNIT));

    // Credit ledger, minted by the deployer until the sale takes over
    let credit_id = env.register(SaleCreditToken, ());
    let credit = SaleCreditTokenClient::new(&env, &credit_id);
    credit.initialize(
        &owner,
        &7u32,
        &String::from_str(&env, "Sale Credit"),
        &String::from_str(&env, "SCR"),
    );

    let sale_id = env.register(TokenSaleContract, ());
    let sale = TokenSaleContractClient::new(&env, &sale_id);

    // Three stages of 30 ledgers, bonus 18% / 9% / 0%
    sale.initialize(
        &owner,
        &SaleParams {
            start_ledger: 10,
            end_ledger: 100,
            fund_owner_wallet: fund_wallet.clone(),
            token_owner_wallet: team_wallet.clone(),
            total_stages: 3,
            stage_max_bonus_percentage: 18,
            token_price: 2000,
            minimum_cap: 50 * PAYMENT_UNIT,
            payment_token: payment.address.clone(),
            credit_token: credit_id.clone(),
        },
    );
    credit.change_minter(&owner, &sale_id);

    // Before the window opens
    env.ledger().set_sequence_number(5);
    assert_eq!(
        sale.try_deposit(&alice, &PAYMENT_UNIT),
        Err(Ok(SaleError::OutOfWindow))
    );

    // Stage 1
    env.ledger().set_sequence_number(10);
    let alice_credits = sale.deposit(&alice, &(10 * PAYMENT_UNIT));
    assert_eq!(alice_credits, 10 * PAYMENT_UNIT * 2000 * 118 / 100);

    // Stage 2, through the bare payment path
    env.ledger().set_sequence_number(45);
    let bob_credits = sale.receive(&bob, &(5 * PAYMENT_UNIT));
    assert_eq!(bob_credits, 5 * PAYMENT_UNIT * 2000 * 109 / 100);

    // Paused, then resumed
    sale.emergency_stop_sale(&owner);
    assert_eq!(
        sale.try_deposit(&bob, &PAYMENT_UNIT),
        Err(Ok(SaleError::SaleInactive))
    );
    sale.restart_sale(&owner);

    // Stage 3
    env.ledger().set_sequence_number(80);
    let late_credits = sale.deposit(&alice, &(5 * PAYMENT_UNIT));
    assert_eq!(late_credits, 5 * PAYMENT_UNIT * 2000);

    let raised = 20 * PAYMENT_UNIT;
    assert_eq!(sale.total_raised(), raised);
    assert_eq!(sale.get_contribution(&alice), 15 * PAYMENT_UNIT);
    assert_eq!(sale.get_contribution(&bob), 5 * PAYMENT_UNIT);
    assert_eq!(payment.balance(&fund_wallet), raised);
    assert_eq!(payment.balance(&sale_id), 0);

    // Credit balances are visible through the generic ledger interface
    let ledger = CreditLedgerClient::new(&env, &credit_id);
    assert_eq!(
        ledger.balance(&alice),
        alice_credits + late_credits
    );
    assert_eq!(ledger.balance(&bob), bob_credits);

    // The team gets 3x the credit sold, plus each stage's bonus on its own sales
    sale.finalize_sale(&owner);
    let credits_sold = alice_credits + bob_credits + late_credits;
    let team_reward = credits_sold * 3 + alice_credits * 18 / 100 + bob_credits * 9 / 100;
    assert_eq!(credit.balance(&team_wallet), team_reward);
    assert_eq!(ledger.total_supply(), credits_sold + team_reward);

    // Decommission and hand minting back
    sale.remove_contract(&owner);
    assert!(sale.is_removed());
    assert_eq!(credit.minter(), owner);
    assert_eq!(
        sale.try_deposit(&alice, &PAYMENT_UNIT),
        Err(Ok(SaleError::Decommissioned))
    );

    // Credits remain transferable after the sale is gone
    credit.transfer(&alice, &bob, &PAYMENT_UNIT);
    assert_eq!(ledger.balance(&bob), bob_credits + PAYMENT_UNIT);
}

#[test]
fn test_cap_change_finalizes_sale_e2e() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let fund_wallet = Address::generate(&env);
    let team_wallet = Address::generate(&env);
    let investor = Address::generate(&env);

    let asset = env.register_stellar_asset_contract_v2(owner.clone());
    let payment = TokenClient::new(&env, &asset.address());
    StellarAssetClient::new(&env, &asset.address()).mint(&investor, &(1000 * PAYMENT_UNIT));

    let credit_id = env.register(SaleCreditToken, ());
    let credit = SaleCreditTokenClient::new(&env, &credit_id);
    credit.initialize(
        &owner,
        &7u32,
        &String::from_str(&env, "Sale Credit"),
        &String::from_str(&env, "SCR"),
    );

    let sale_id = env.register(TokenSaleContract, ());
    let sale = TokenSaleContractClient::new(&env, &sale_id);
    sale.initialize(
        &owner,
        &SaleParams {
            start_ledger: 100,
            end_ledger: 300,
            fund_owner_wallet: fund_wallet.clone(),
            token_owner_wallet: team_wallet.clone(),
            total_stages: 2,
            stage_max_bonus_percentage: 20,
            token_price: 1000,
            minimum_cap: 10 * PAYMENT_UNIT,
            payment_token: payment.address.clone(),
            credit_token: credit_id.clone(),
        },
    );
    credit.change_minter(&owner, &sale_id);

    env.ledger().set_sequence_number(150);
    sale.change_cap(&owner, &(100 * PAYMENT_UNIT));
    let credits = sale.deposit(&investor, &(60 * PAYMENT_UNIT));
    assert_eq!(credits, 60 * PAYMENT_UNIT * 1000 * 120 / 100);
    assert!(!sale.is_cap_reached());

    // Pulling the cap down to just above the raised total closes the sale
    sale.change_cap(&owner, &(60 * PAYMENT_UNIT + PAYMENT_UNIT / 1000));
    assert!(sale.is_cap_reached());
    assert!(sale.is_sale_stopped());
    assert!(sale.is_sale_finalized());

    // All credit sold in stage 1: 3x allocation plus the 20% stage bonus
    assert_eq!(
        credit.balance(&team_wallet),
        credits * 3 + credits * 20 / 100
    );
    assert_eq!(payment.balance(&fund_wallet), 60 * PAYMENT_UNIT);

    assert_eq!(
        sale.try_finalize_sale(&owner),
        Err(Ok(SaleError::AlreadyFinalized))
    );
}
