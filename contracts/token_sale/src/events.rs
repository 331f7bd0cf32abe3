use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleInitializedEvent {
    #[topic]
    pub owner: Address,
    pub start_ledger: u32,
    pub end_ledger: u32,
    pub minimum_cap: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    #[topic]
    pub depositor: Address,
    pub amount: i128,
    pub credits: i128,
    pub stage: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleStoppedEvent {
    #[topic]
    pub owner: Address,
    pub ledger: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleRestartedEvent {
    #[topic]
    pub owner: Address,
    pub ledger: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundWalletChangedEvent {
    #[topic]
    pub owner: Address,
    pub old_wallet: Address,
    pub new_wallet: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenWalletChangedEvent {
    #[topic]
    pub owner: Address,
    pub old_wallet: Address,
    pub new_wallet: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapChangedEvent {
    #[topic]
    pub owner: Address,
    pub old_cap: i128,
    pub new_cap: i128,
    pub cap_reached: bool,
}

/// Emitted once, when the sale becomes terminal.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleFinalizedEvent {
    #[topic]
    pub token_owner_wallet: Address,
    pub total_raised: i128,
    pub team_reward: i128,
    pub forwarded: i128,
}

/// Emitted when the owner role is transferred to a new address.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChangedEvent {
    #[topic]
    pub old_owner: Address,
    pub new_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractRemovedEvent {
    #[topic]
    pub owner: Address,
    pub swept: i128,
}
