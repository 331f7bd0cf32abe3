#![no_std]

//! Client for the credit ledger a token sale issues into.
//!
//! The sale only ever needs the minter-gated issuance surface and the minter
//! lookup, so the trait is kept to that. Any contract exposing these entry
//! points with matching argument order can back a sale.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "CreditLedgerClient")]
pub trait CreditLedgerInterface {
    /// Issue `amount` credit to `to`. Rejected unless `minter` is the registered minter.
    fn mint(env: Env, minter: Address, to: Address, amount: i128);

    fn balance(env: Env, id: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn minter(env: Env) -> Address;

    /// Hand minting rights from `minter` to `new_minter`.
    fn change_minter(env: Env, minter: Address, new_minter: Address);
}
