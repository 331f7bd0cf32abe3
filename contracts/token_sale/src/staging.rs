//! Stage and bonus arithmetic.
//!
//! Everything here is a pure function of the sale configuration and a ledger
//! height, so the entry points that probe a height and the ones that admit a
//! deposit at that height always agree on stage boundaries.

use crate::constants::{HARD_CAP, MIN_CONTRIBUTION, PERCENT_DENOMINATOR};
use crate::errors::SaleError;
use crate::storage::SaleConfig;

/// `[start_ledger, end_ledger)`, half-open.
pub fn is_during_sale_period(config: &SaleConfig, height: u32) -> bool {
    height >= config.start_ledger && height < config.end_ledger
}

fn stage_width(config: &SaleConfig) -> u32 {
    (config.end_ledger - config.start_ledger) / config.total_stages
}

/// 1-indexed stage containing `height`.
pub fn stage_of(config: &SaleConfig, height: u32) -> Result<u32, SaleError> {
    if !is_during_sale_period(config, height) {
        return Err(SaleError::OutOfRange);
    }
    Ok((height - config.start_ledger) / stage_width(config) + 1)
}

/// Bonus decays linearly from the maximum at stage 1 to zero at the last stage.
pub fn bonus_percent_for(config: &SaleConfig, stage: u32) -> Result<u32, SaleError> {
    if stage < 1 || stage > config.total_stages {
        return Err(SaleError::InvalidStage);
    }
    let remaining = u64::from(config.total_stages - stage);
    let scaled = u64::from(config.stage_max_bonus_percentage) * remaining
        / u64::from(config.total_stages - 1);
    // scaled <= stage_max_bonus_percentage
    Ok(scaled as u32)
}

/// Credits issued for `amount` paid at `height`, bonus included. Zero outside
/// the sale window.
pub fn tokens_for(config: &SaleConfig, amount: i128, height: u32) -> Result<i128, SaleError> {
    if !is_during_sale_period(config, height) {
        return Ok(0);
    }
    let base = amount
        .checked_mul(config.token_price)
        .ok_or(SaleError::Overflow)?;
    let bonus = percent_of(base, bonus_percent_for(config, stage_of(config, height)?)?)?;
    base.checked_add(bonus).ok_or(SaleError::Overflow)
}

/// Operator share of `credits` for one stage.
pub fn reward_tokens_for(config: &SaleConfig, credits: i128, stage: u32) -> Result<i128, SaleError> {
    percent_of(credits, bonus_percent_for(config, stage)?)
}

/// True once the hard cap is met or less than one more minimum contribution
/// fits under the cap.
pub fn cap_reached(total_raised: i128, cap: i128) -> bool {
    total_raised >= HARD_CAP || cap - total_raised <= MIN_CONTRIBUTION
}

fn percent_of(amount: i128, percent: u32) -> Result<i128, SaleError> {
    amount
        .checked_mul(percent as i128)
        .map(|scaled| scaled / PERCENT_DENOMINATOR)
        .ok_or(SaleError::Overflow)
}
