use crate::AmmError;
use soroban_sdk::contracttype;

/// Pool balances and outstanding claim supply - stored in Instance storage
///
/// Either all three fields are zero or none of them is.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReserveAccount {
    /// Base asset held by the pool
    pub base_reserve: u128,
    /// Token held by the pool
    pub token_reserve: u128,
    /// Total liquidity claims outstanding
    pub total_claims: u128,
}

impl ReserveAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_claims == 0
    }

    /// Credit a deposit
    pub fn deposit(&mut self, base: u128, token: u128, claims: u128) -> Result<(), AmmError> {
        let base_reserve = checked_add(self.base_reserve, base)?;
        let token_reserve = checked_add(self.token_reserve, token)?;
        let total_claims = checked_add(self.total_claims, claims)?;

        self.base_reserve = base_reserve;
        self.token_reserve = token_reserve;
        self.total_claims = total_claims;
        Ok(())
    }

    /// Debit a withdrawal
    pub fn withdraw(&mut self, base: u128, token: u128, claims: u128) -> Result<(), AmmError> {
        let base_reserve = checked_sub(self.base_reserve, base)?;
        let token_reserve = checked_sub(self.token_reserve, token)?;
        let total_claims = checked_sub(self.total_claims, claims)?;

        self.base_reserve = base_reserve;
        self.token_reserve = token_reserve;
        self.total_claims = total_claims;
        Ok(())
    }

    /// Base paid in, token paid out
    pub fn swap_base_in(&mut self, base_in: u128, token_out: u128) -> Result<(), AmmError> {
        let base_reserve = checked_add(self.base_reserve, base_in)?;
        let token_reserve = checked_sub(self.token_reserve, token_out)?;

        self.base_reserve = base_reserve;
        self.token_reserve = token_reserve;
        Ok(())
    }

    /// Token paid in, base paid out
    pub fn swap_token_in(&mut self, token_in: u128, base_out: u128) -> Result<(), AmmError> {
        let token_reserve = checked_add(self.token_reserve, token_in)?;
        let base_reserve = checked_sub(self.base_reserve, base_out)?;

        self.base_reserve = base_reserve;
        self.token_reserve = token_reserve;
        Ok(())
    }
}

fn checked_add(a: u128, b: u128) -> Result<u128, AmmError> {
    a.checked_add(b).ok_or(AmmError::ArithmeticOverflow)
}

fn checked_sub(a: u128, b: u128) -> Result<u128, AmmError> {
    a.checked_sub(b).ok_or(AmmError::ArithmeticOverflow)
}
