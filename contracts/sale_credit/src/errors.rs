use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CreditError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotMinter = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    Overflow = 6,
}
