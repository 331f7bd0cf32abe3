use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintEvent {
    #[topic]
    pub minter: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEvent {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

/// Emitted when minting rights move to another address.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterChangedEvent {
    #[topic]
    pub old_minter: Address,
    pub new_minter: Address,
}
