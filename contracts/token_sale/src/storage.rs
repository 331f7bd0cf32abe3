use soroban_sdk::{contracttype, Address, Env};

use crate::errors::SaleError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,                // -> SaleConfig
    State,                 // -> SaleState
    Contribution(Address), // depositor -> i128
    StageCredits(u32),     // stage -> credit issued to depositors in that stage
}

/// Deployment parameters, validated once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleParams {
    pub start_ledger: u32,
    pub end_ledger: u32,
    pub fund_owner_wallet: Address,
    pub token_owner_wallet: Address,
    pub total_stages: u32,
    pub stage_max_bonus_percentage: u32,
    /// Credits issued per payment unit, before bonus.
    pub token_price: i128,
    pub minimum_cap: i128,
    pub payment_token: Address,
    pub credit_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub start_ledger: u32,
    pub end_ledger: u32,
    pub total_stages: u32,
    pub stage_max_bonus_percentage: u32,
    pub token_price: i128,
    pub minimum_cap: i128,
    pub payment_token: Address,
    pub credit_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleState {
    pub owner: Address,
    pub fund_owner_wallet: Address,
    pub token_owner_wallet: Address,
    pub total_raised: i128,
    /// Credit issued to depositors, bonus included.
    pub credits_issued: i128,
    pub cap: i128,
    pub sale_stopped: bool,
    pub sale_finalized: bool,
    pub is_cap_reached: bool,
    pub removed: bool,
}

pub fn load_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn load_state(env: &Env) -> Result<SaleState, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(SaleError::NotInitialized)
}

/// Load state for a mutating call; a removed sale rejects everything.
pub fn load_live_state(env: &Env) -> Result<SaleState, SaleError> {
    let state = load_state(env)?;
    if state.removed {
        return Err(SaleError::Decommissioned);
    }
    Ok(state)
}

pub fn save_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn contribution_of(env: &Env, depositor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(depositor.clone()))
        .unwrap_or(0)
}

pub fn add_contribution(env: &Env, depositor: &Address, amount: i128) -> Result<(), SaleError> {
    let total = contribution_of(env, depositor)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(depositor.clone()), &total);
    Ok(())
}

pub fn stage_credits(env: &Env, stage: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::StageCredits(stage))
        .unwrap_or(0)
}

pub fn add_stage_credits(env: &Env, stage: u32, credits: i128) -> Result<(), SaleError> {
    let total = stage_credits(env, stage)
        .checked_add(credits)
        .ok_or(SaleError::Overflow)?;
    env.storage()
        .persistent()
        .set(&DataKey::StageCredits(stage), &total);
    Ok(())
}
