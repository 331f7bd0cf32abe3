#![no_std]

mod constants;
mod errors;
mod events;
mod staging;
mod storage;
mod token;

pub use constants::{HARD_CAP, MIN_CONTRIBUTION, PAYMENT_UNIT};
pub use errors::SaleError;
pub use storage::{SaleConfig, SaleParams, SaleState};

use constants::{MAX_BONUS_PERCENTAGE, MIN_TOTAL_STAGES, TEAM_ALLOCATION_MULTIPLIER};
use events::{
    CapChangedEvent, ContractRemovedEvent, DepositEvent, FundWalletChangedEvent,
    OwnerChangedEvent, SaleFinalizedEvent, SaleInitializedEvent, SaleRestartedEvent,
    SaleStoppedEvent, TokenWalletChangedEvent,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use storage::{
    add_contribution, add_stage_credits, contribution_of, load_config, load_live_state,
    load_state, save_state, stage_credits, DataKey,
};

#[contract]
pub struct TokenSaleContract;

impl TokenSaleContract {
    fn require_owner(state: &SaleState, caller: &Address) -> Result<(), SaleError> {
        if *caller != state.owner {
            return Err(SaleError::NotOwner);
        }
        caller.require_auth();
        Ok(())
    }

    /// The sale's own address is the null sink: anything sent there is stuck.
    fn require_valid_address(env: &Env, address: &Address) -> Result<(), SaleError> {
        if *address == env.current_contract_address() {
            return Err(SaleError::InvalidAddress);
        }
        Ok(())
    }

    fn require_sale_window(config: &SaleConfig, height: u32) -> Result<(), SaleError> {
        if !staging::is_during_sale_period(config, height) {
            return Err(SaleError::OutOfWindow);
        }
        Ok(())
    }

    fn validate_params(env: &Env, owner: &Address, params: &SaleParams) -> Result<(), SaleError> {
        if params.start_ledger >= params.end_ledger {
            return Err(SaleError::InvalidSaleWindow);
        }

        Self::require_valid_address(env, owner)?;
        Self::require_valid_address(env, &params.fund_owner_wallet)?;
        Self::require_valid_address(env, &params.token_owner_wallet)?;

        if params.total_stages < MIN_TOTAL_STAGES
            || params.stage_max_bonus_percentage > MAX_BONUS_PERCENTAGE
            || params.stage_max_bonus_percentage % params.total_stages != 0
            || (params.end_ledger - params.start_ledger) % params.total_stages != 0
        {
            return Err(SaleError::InvalidStageConfig);
        }

        if params.token_price <= 0
            || params.minimum_cap <= MIN_CONTRIBUTION
            || params.minimum_cap > HARD_CAP
        {
            return Err(SaleError::InvalidAmount);
        }

        Ok(())
    }

    fn accept_deposit(env: &Env, depositor: Address, amount: i128) -> Result<i128, SaleError> {
        let config = load_config(env)?;
        let mut state = load_live_state(env)?;
        let height = env.ledger().sequence();

        Self::require_sale_window(&config, height)?;

        if state.sale_stopped || state.sale_finalized {
            return Err(SaleError::SaleInactive);
        }

        if state.is_cap_reached {
            return Err(SaleError::CapReached);
        }

        if amount < MIN_CONTRIBUTION {
            return Err(SaleError::BelowMinimumContribution);
        }

        Self::require_valid_address(env, &depositor)?;

        let total_raised = state
            .total_raised
            .checked_add(amount)
            .ok_or(SaleError::Overflow)?;
        if total_raised > HARD_CAP {
            return Err(SaleError::CapViolation);
        }

        depositor.require_auth();

        let stage = staging::stage_of(&config, height)?;
        let credits = staging::tokens_for(&config, amount, height)?;

        state.total_raised = total_raised;
        state.credits_issued = state
            .credits_issued
            .checked_add(credits)
            .ok_or(SaleError::Overflow)?;
        state.is_cap_reached = staging::cap_reached(state.total_raised, state.cap);
        save_state(env, &state);
        add_contribution(env, &depositor, amount)?;
        add_stage_credits(env, stage, credits)?;

        // Payment lands on the sale first and is forwarded straight on
        let contract_address = env.current_contract_address();
        token::transfer(env, &config.payment_token, &depositor, &contract_address, &amount);
        token::transfer(
            env,
            &config.payment_token,
            &contract_address,
            &state.fund_owner_wallet,
            &amount,
        );
        token::mint_credit(env, &config.credit_token, &depositor, &credits);

        DepositEvent {
            depositor,
            amount,
            credits,
            stage,
        }
        .publish(env);

        Ok(credits)
    }

    /// Shared terminal transition used by `finalize_sale` and by `change_cap`
    /// when a cap change leaves no room for further deposits.
    ///
    /// The team wallet receives a fixed multiple of all credit sold, plus each
    /// stage's bonus share of the credit sold during that stage.
    fn finalize(env: &Env, config: &SaleConfig, state: &mut SaleState) -> Result<(), SaleError> {
        state.sale_stopped = true;
        state.sale_finalized = true;
        save_state(env, state);

        let mut team_reward = state
            .credits_issued
            .checked_mul(TEAM_ALLOCATION_MULTIPLIER)
            .ok_or(SaleError::Overflow)?;

        for stage in 1..=config.total_stages {
            let reward = staging::reward_tokens_for(config, stage_credits(env, stage), stage)?;
            team_reward = team_reward.checked_add(reward).ok_or(SaleError::Overflow)?;
        }

        if team_reward > 0 {
            token::mint_credit(
                env,
                &config.credit_token,
                &state.token_owner_wallet,
                &team_reward,
            );
        }

        let forwarded = token::sweep(env, &config.payment_token, &state.fund_owner_wallet);

        SaleFinalizedEvent {
            token_owner_wallet: state.token_owner_wallet.clone(),
            total_raised: state.total_raised,
            team_reward,
            forwarded,
        }
        .publish(env);

        Ok(())
    }
}

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale. `owner` becomes the administrator and the cap
    /// starts at `params.minimum_cap`.
    pub fn initialize(env: Env, owner: Address, params: SaleParams) -> Result<(), SaleError> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Config) {
            return Err(SaleError::AlreadyInitialized);
        }

        owner.require_auth();

        Self::validate_params(&env, &owner, &params)?;

        let config = SaleConfig {
            start_ledger: params.start_ledger,
            end_ledger: params.end_ledger,
            total_stages: params.total_stages,
            stage_max_bonus_percentage: params.stage_max_bonus_percentage,
            token_price: params.token_price,
            minimum_cap: params.minimum_cap,
            payment_token: params.payment_token,
            credit_token: params.credit_token,
        };

        let state = SaleState {
            owner: owner.clone(),
            fund_owner_wallet: params.fund_owner_wallet,
            token_owner_wallet: params.token_owner_wallet,
            total_raised: 0,
            credits_issued: 0,
            cap: config.minimum_cap,
            sale_stopped: false,
            sale_finalized: false,
            is_cap_reached: false,
            removed: false,
        };

        env.storage().instance().set(&DataKey::Config, &config);
        save_state(&env, &state);

        SaleInitializedEvent {
            owner,
            start_ledger: config.start_ledger,
            end_ledger: config.end_ledger,
            minimum_cap: config.minimum_cap,
        }
        .publish(&env);

        Ok(())
    }

    /// Pay `amount` of the payment asset and receive credit at the current
    /// stage's bonus. Returns the credit issued.
    pub fn deposit(env: Env, depositor: Address, amount: i128) -> Result<i128, SaleError> {
        Self::accept_deposit(&env, depositor, amount)
    }

    /// Bare payment path; admitted exactly like `deposit`.
    pub fn receive(env: Env, sender: Address, amount: i128) -> Result<i128, SaleError> {
        Self::accept_deposit(&env, sender, amount)
    }

    /// Pause deposits (owner only, during the sale window)
    pub fn emergency_stop_sale(env: Env, caller: Address) -> Result<(), SaleError> {
        let config = load_config(&env)?;
        let mut state = load_live_state(&env)?;
        let height = env.ledger().sequence();

        Self::require_owner(&state, &caller)?;
        Self::require_sale_window(&config, height)?;

        state.sale_stopped = true;
        save_state(&env, &state);

        SaleStoppedEvent {
            owner: caller,
            ledger: height,
        }
        .publish(&env);

        Ok(())
    }

    /// Resume a paused sale (owner only, during the sale window)
    pub fn restart_sale(env: Env, caller: Address) -> Result<(), SaleError> {
        let config = load_config(&env)?;
        let mut state = load_live_state(&env)?;
        let height = env.ledger().sequence();

        Self::require_owner(&state, &caller)?;
        Self::require_sale_window(&config, height)?;

        if !state.sale_stopped {
            return Err(SaleError::SaleNotStopped);
        }

        if state.sale_finalized {
            return Err(SaleError::AlreadyFinalized);
        }

        state.sale_stopped = false;
        save_state(&env, &state);

        SaleRestartedEvent {
            owner: caller,
            ledger: height,
        }
        .publish(&env);

        Ok(())
    }

    /// Replace the wallet that receives payments
    pub fn change_fund_owner_wallet(
        env: Env,
        caller: Address,
        new_wallet: Address,
    ) -> Result<(), SaleError> {
        let mut state = load_live_state(&env)?;
        Self::require_owner(&state, &caller)?;
        Self::require_valid_address(&env, &new_wallet)?;

        let old_wallet = state.fund_owner_wallet.clone();
        state.fund_owner_wallet = new_wallet.clone();
        save_state(&env, &state);

        FundWalletChangedEvent {
            owner: caller,
            old_wallet,
            new_wallet,
        }
        .publish(&env);

        Ok(())
    }

    /// Replace the wallet that receives the team reward at finalization
    pub fn change_token_owner_wallet(
        env: Env,
        caller: Address,
        new_wallet: Address,
    ) -> Result<(), SaleError> {
        let mut state = load_live_state(&env)?;
        Self::require_owner(&state, &caller)?;
        Self::require_valid_address(&env, &new_wallet)?;

        let old_wallet = state.token_owner_wallet.clone();
        state.token_owner_wallet = new_wallet.clone();
        save_state(&env, &state);

        TokenWalletChangedEvent {
            owner: caller,
            old_wallet,
            new_wallet,
        }
        .publish(&env);

        Ok(())
    }

    /// Move the soft cap. If the new cap leaves no room for another minimum
    /// contribution the sale is finalized in the same call.
    pub fn change_cap(env: Env, caller: Address, new_cap: i128) -> Result<(), SaleError> {
        let config = load_config(&env)?;
        let mut state = load_live_state(&env)?;

        Self::require_owner(&state, &caller)?;

        if state.sale_finalized {
            return Err(SaleError::AlreadyFinalized);
        }

        if new_cap < config.minimum_cap || new_cap <= state.total_raised || new_cap > HARD_CAP {
            return Err(SaleError::CapViolation);
        }

        let old_cap = state.cap;
        state.cap = new_cap;
        state.is_cap_reached = staging::cap_reached(state.total_raised, state.cap);
        save_state(&env, &state);

        CapChangedEvent {
            owner: caller,
            old_cap,
            new_cap,
            cap_reached: state.is_cap_reached,
        }
        .publish(&env);

        if state.is_cap_reached {
            log!(&env, "cap reached, finalizing", state.total_raised, new_cap);
            Self::finalize(&env, &config, &mut state)?;
        }

        Ok(())
    }

    /// Stop the sale for good, mint the team reward and forward any payment
    /// balance still held by the sale.
    pub fn finalize_sale(env: Env, caller: Address) -> Result<(), SaleError> {
        let config = load_config(&env)?;
        let mut state = load_live_state(&env)?;

        Self::require_owner(&state, &caller)?;

        if state.sale_finalized {
            return Err(SaleError::AlreadyFinalized);
        }

        Self::finalize(&env, &config, &mut state)
    }

    /// Decommission a finalized sale: sweep leftovers to the owner and, if the
    /// sale still holds credit minting, hand it back to the owner. Every
    /// mutating call fails afterwards.
    pub fn remove_contract(env: Env, caller: Address) -> Result<(), SaleError> {
        let config = load_config(&env)?;
        let mut state = load_live_state(&env)?;

        Self::require_owner(&state, &caller)?;

        if !state.sale_finalized {
            return Err(SaleError::SaleNotFinalized);
        }

        state.removed = true;
        save_state(&env, &state);

        let swept = token::sweep(&env, &config.payment_token, &state.owner);
        let minter_released = token::release_minter(&env, &config.credit_token, &state.owner);
        log!(&env, "sale removed", swept, minter_released);

        ContractRemovedEvent {
            owner: caller,
            swept,
        }
        .publish(&env);

        Ok(())
    }

    /// Transfer the owner role to `new_owner`.
    ///
    /// Requires authorization from the current owner. Emits [`OwnerChangedEvent`].
    pub fn change_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), SaleError> {
        let mut state = load_live_state(&env)?;
        Self::require_owner(&state, &caller)?;

        if new_owner == caller {
            return Err(SaleError::InvalidAddress);
        }
        Self::require_valid_address(&env, &new_owner)?;

        state.owner = new_owner.clone();
        save_state(&env, &state);

        OwnerChangedEvent {
            old_owner: caller,
            new_owner,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        load_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, SaleError> {
        load_state(&env)
    }

    /// Get owner address
    pub fn get_owner(env: Env) -> Result<Address, SaleError> {
        Ok(load_state(&env)?.owner)
    }

    pub fn total_raised(env: Env) -> Result<i128, SaleError> {
        Ok(load_state(&env)?.total_raised)
    }

    pub fn get_cap(env: Env) -> Result<i128, SaleError> {
        Ok(load_state(&env)?.cap)
    }

    pub fn is_cap_reached(env: Env) -> Result<bool, SaleError> {
        Ok(load_state(&env)?.is_cap_reached)
    }

    pub fn is_sale_stopped(env: Env) -> Result<bool, SaleError> {
        Ok(load_state(&env)?.sale_stopped)
    }

    pub fn is_sale_finalized(env: Env) -> Result<bool, SaleError> {
        Ok(load_state(&env)?.sale_finalized)
    }

    pub fn is_removed(env: Env) -> Result<bool, SaleError> {
        Ok(load_state(&env)?.removed)
    }

    /// Total paid in by `depositor` across all deposits
    pub fn get_contribution(env: Env, depositor: Address) -> i128 {
        contribution_of(&env, &depositor)
    }

    /// Stage of the current ledger; `OutOfRange` outside the sale window
    pub fn current_stage(env: Env) -> Result<u32, SaleError> {
        let config = load_config(&env)?;
        staging::stage_of(&config, env.ledger().sequence())
    }

    pub fn stage_of(env: Env, height: u32) -> Result<u32, SaleError> {
        staging::stage_of(&load_config(&env)?, height)
    }

    pub fn bonus_percent_for(env: Env, stage: u32) -> Result<u32, SaleError> {
        staging::bonus_percent_for(&load_config(&env)?, stage)
    }

    /// Credit a payment of `amount` would buy at `height`, bonus included
    pub fn calculate_tokens(env: Env, amount: i128, height: u32) -> Result<i128, SaleError> {
        staging::tokens_for(&load_config(&env)?, amount, height)
    }

    pub fn calculate_reward_tokens(
        env: Env,
        amount: i128,
        stage: u32,
    ) -> Result<i128, SaleError> {
        staging::reward_tokens_for(&load_config(&env)?, amount, stage)
    }

    /// Credit issued to depositors during `stage`
    pub fn get_stage_credits(env: Env, stage: u32) -> i128 {
        stage_credits(&env, stage)
    }

    pub fn is_during_sale_period(env: Env, height: u32) -> Result<bool, SaleError> {
        Ok(staging::is_during_sale_period(&load_config(&env)?, height))
    }

    pub fn hard_cap(_env: Env) -> i128 {
        HARD_CAP
    }

    pub fn minimum_contribution(_env: Env) -> i128 {
        MIN_CONTRIBUTION
    }
}
