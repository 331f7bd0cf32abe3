use credit_interface::CreditLedgerClient;
use soroban_sdk::{token, Address, Env};

pub fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, to, amount);
}

/// Move this contract's whole balance of `token` to `to`, returning the amount moved.
pub fn sweep(env: &Env, token: &Address, to: &Address) -> i128 {
    let client = token::Client::new(env, token);
    let contract_address = env.current_contract_address();
    let balance = client.balance(&contract_address);
    if balance > 0 {
        client.transfer(&contract_address, to, &balance);
    }
    balance
}

/// Issue credit with this contract acting as the ledger's minter.
pub fn mint_credit(env: &Env, credit_token: &Address, to: &Address, amount: &i128) {
    CreditLedgerClient::new(env, credit_token).mint(&env.current_contract_address(), to, amount);
}

/// Hand minting to `new_minter` if this contract currently holds it. Returns
/// whether rights were handed over.
pub fn release_minter(env: &Env, credit_token: &Address, new_minter: &Address) -> bool {
    let client = CreditLedgerClient::new(env, credit_token);
    let contract_address = env.current_contract_address();
    if client.minter() != contract_address {
        return false;
    }
    client.change_minter(&contract_address, new_minter);
    true
}
