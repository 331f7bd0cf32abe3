use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Minter,           // -> Address
    Metadata,         // -> TokenMetadata
    TotalSupply,      // -> i128
    Balance(Address), // holder -> i128
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}
