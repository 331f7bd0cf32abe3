/// Decimals of the payment asset (native XLM uses 7).
pub const PAYMENT_DECIMALS: u32 = 7;
pub const PAYMENT_UNIT: i128 = 10i128.pow(PAYMENT_DECIMALS);

/// Smallest deposit the sale admits: 0.01 of a payment unit.
pub const MIN_CONTRIBUTION: i128 = PAYMENT_UNIT / 100;

/// Absolute ceiling on the amount raised.
pub const HARD_CAP: i128 = 1_000_000 * PAYMENT_UNIT;

pub const MIN_TOTAL_STAGES: u32 = 2;
pub const MAX_BONUS_PERCENTAGE: u32 = 100;
pub const PERCENT_DENOMINATOR: i128 = 100;

/// Team allocation minted at finalization, as a multiple of the credit sold.
pub const TEAM_ALLOCATION_MULTIPLIER: i128 = 3;
