#![no_std]

mod errors;
mod events;
mod storage;

pub use errors::CreditError;
use events::{MintEvent, MinterChangedEvent, TransferEvent};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use storage::{DataKey, TokenMetadata};

#[contract]
pub struct SaleCreditToken;

impl SaleCreditToken {
    fn require_minter(env: &Env, minter: &Address) -> Result<(), CreditError> {
        let stored_minter: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .ok_or(CreditError::NotInitialized)?;
        if *minter != stored_minter {
            return Err(CreditError::NotMinter);
        }
        minter.require_auth();
        Ok(())
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &amount);
    }

    fn metadata(env: &Env) -> Result<TokenMetadata, CreditError> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(CreditError::NotInitialized)
    }
}

#[contractimpl]
impl SaleCreditToken {
    /// Initialize the ledger with its first minter and display metadata
    pub fn initialize(
        env: Env,
        minter: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), CreditError> {
        if env.storage().instance().has(&DataKey::Minter) {
            return Err(CreditError::AlreadyInitialized);
        }
        minter.require_auth();

        env.storage().instance().set(&DataKey::Minter, &minter);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);

        Ok(())
    }

    /// Issue new credit to `to` (minter only)
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), CreditError> {
        Self::require_minter(&env, &minter)?;

        if amount <= 0 {
            return Err(CreditError::InvalidAmount);
        }

        let supply: i128 = env
            .storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0);
        let new_supply = supply.checked_add(amount).ok_or(CreditError::Overflow)?;
        let new_balance = Self::read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(CreditError::Overflow)?;

        Self::write_balance(&env, &to, new_balance);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &new_supply);

        MintEvent { minter, to, amount }.publish(&env);
        Ok(())
    }

    /// Move credit between holders
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), CreditError> {
        if !env.storage().instance().has(&DataKey::Minter) {
            return Err(CreditError::NotInitialized);
        }
        from.require_auth();

        if amount <= 0 {
            return Err(CreditError::InvalidAmount);
        }

        let from_balance = Self::read_balance(&env, &from);
        if from_balance < amount {
            return Err(CreditError::InsufficientBalance);
        }
        Self::write_balance(&env, &from, from_balance - amount);

        let to_balance = Self::read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(CreditError::Overflow)?;
        Self::write_balance(&env, &to, to_balance);

        TransferEvent { from, to, amount }.publish(&env);
        Ok(())
    }

    /// Transfer minting rights to `new_minter`.
    ///
    /// Requires authorization from the current minter. Emits [`MinterChangedEvent`].
    pub fn change_minter(env: Env, minter: Address, new_minter: Address) -> Result<(), CreditError> {
        Self::require_minter(&env, &minter)?;
        env.storage().instance().set(&DataKey::Minter, &new_minter);
        MinterChangedEvent {
            old_minter: minter,
            new_minter,
        }
        .publish(&env);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        Self::read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    /// Get the current minter
    pub fn minter(env: Env) -> Result<Address, CreditError> {
        env.storage()
            .instance()
            .get(&DataKey::Minter)
            .ok_or(CreditError::NotInitialized)
    }

    pub fn decimals(env: Env) -> Result<u32, CreditError> {
        Ok(Self::metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, CreditError> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, CreditError> {
        Ok(Self::metadata(&env)?.symbol)
    }
}
