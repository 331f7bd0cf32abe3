use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    InvalidAddress = 4,
    OutOfWindow = 5,
    SaleInactive = 6,
    SaleNotStopped = 7,
    AlreadyFinalized = 8,
    SaleNotFinalized = 9,
    CapViolation = 10,
    CapReached = 11,
    BelowMinimumContribution = 12,
    InvalidStage = 13,
    OutOfRange = 14,
    InvalidSaleWindow = 15,
    InvalidStageConfig = 16,
    InvalidAmount = 17,
    Overflow = 18,
    Decommissioned = 19,
}
