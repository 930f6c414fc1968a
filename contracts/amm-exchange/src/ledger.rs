use amm_types::AmmError;
use soroban_sdk::{contractclient, Address, Env};

/// Ledger calls the exchange makes. A subset of SEP-41 plus the admin mint
/// and supply query of the claim token; the native asset contract answers
/// the SEP-41 part.
#[allow(unused)]
#[contractclient(name = "FungibleLedgerClient")]
pub trait FungibleLedger {
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
    fn mint(env: Env, to: Address, amount: i128);
    fn total_supply(env: Env) -> i128;
    fn admin(env: Env) -> Address;
}

/// Native asset movements in and out of the pool
pub struct BaseLedger<'a> {
    client: FungibleLedgerClient<'a>,
    pool: Address,
}

impl<'a> BaseLedger<'a> {
    pub fn new(env: &Env, asset: &Address) -> Self {
        Self {
            client: FungibleLedgerClient::new(env, asset),
            pool: env.current_contract_address(),
        }
    }

    /// Pull `amount` from `from` into the pool (`from` must authorize)
    pub fn transfer_in(&self, from: &Address, amount: u128) -> Result<(), AmmError> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_ledger_amount(amount)?;
        settle(self.client.try_transfer(from, &self.pool, &amount))
    }

    /// Pay `amount` from the pool to `to`
    pub fn transfer_out(&self, to: &Address, amount: u128) -> Result<(), AmmError> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_ledger_amount(amount)?;
        settle(self.client.try_transfer(&self.pool, to, &amount))
    }

    pub fn balance_of_pool(&self) -> Result<u128, AmmError> {
        from_ledger_amount(settle(self.client.try_balance(&self.pool))?)
    }
}

/// Token ledger seen from the pool; one instance for the traded token, one
/// for liquidity claims
pub struct TokenLedger<'a> {
    client: FungibleLedgerClient<'a>,
    pool: Address,
}

impl<'a> TokenLedger<'a> {
    pub fn new(env: &Env, token: &Address) -> Self {
        Self {
            client: FungibleLedgerClient::new(env, token),
            pool: env.current_contract_address(),
        }
    }

    /// Pull `amount` from `from` into the pool against a prior allowance
    pub fn transfer_from(&self, from: &Address, amount: u128) -> Result<(), AmmError> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_ledger_amount(amount)?;
        settle(
            self.client
                .try_transfer_from(&self.pool, from, &self.pool, &amount),
        )
    }

    /// Pay `amount` from the pool to `to`
    pub fn transfer(&self, to: &Address, amount: u128) -> Result<(), AmmError> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_ledger_amount(amount)?;
        settle(self.client.try_transfer(&self.pool, to, &amount))
    }

    /// Mint to `to`; the pool must be the ledger's admin
    pub fn mint(&self, to: &Address, amount: u128) -> Result<(), AmmError> {
        if amount == 0 {
            return Ok(());
        }
        let amount = to_ledger_amount(amount)?;
        settle(self.client.try_mint(to, &amount))
    }

    /// Destroy `amount` of `from`'s balance (`from` must authorize)
    pub fn burn_from(&self, from: &Address, amount: u128) -> Result<(), AmmError> {
        let amount = to_ledger_amount(amount)?;
        settle(self.client.try_burn(from, &amount))
    }

    pub fn balance_of(&self, account: &Address) -> Result<u128, AmmError> {
        from_ledger_amount(settle(self.client.try_balance(account))?)
    }

    pub fn total_supply(&self) -> Result<u128, AmmError> {
        from_ledger_amount(settle(self.client.try_total_supply())?)
    }

    /// Whether the pool alone can mint on this ledger
    pub fn is_administered_by_pool(&self) -> Result<bool, AmmError> {
        Ok(settle(self.client.try_admin())? == self.pool)
    }
}

/// Collapse a `try_` invocation result: any conversion or invocation failure
/// is a failed ledger call
fn settle<T, C, E>(result: Result<Result<T, C>, E>) -> Result<T, AmmError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => Err(AmmError::LedgerTransferFailed),
    }
}

fn to_ledger_amount(amount: u128) -> Result<i128, AmmError> {
    i128::try_from(amount).map_err(|_| AmmError::ArithmeticOverflow)
}

fn from_ledger_amount(amount: i128) -> Result<u128, AmmError> {
    u128::try_from(amount).map_err(|_| AmmError::ArithmeticOverflow)
}
