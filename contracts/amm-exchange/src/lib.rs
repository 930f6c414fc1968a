#![no_std]

mod events;
mod invariants;
mod ledger;
mod liquidity;
mod storage;
mod swap;

pub mod certora_specs;

use amm_types::{AmmError, ExchangeConfig, ReserveAccount, FEE_DENOMINATOR, FEE_NUMERATOR};
use ledger::{BaseLedger, TokenLedger};
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::{get_config, get_reserves, is_initialized, set_config, set_reserves};

#[contract]
pub struct AmmExchange;

#[contractimpl]
impl AmmExchange {
    /// Initialize the exchange
    ///
    /// # Arguments
    /// * `base_asset` - Native asset contract
    /// * `token` - Traded token contract
    /// * `claim_token` - Liquidity-claim token; must list this exchange as admin
    ///   and have no supply yet
    pub fn initialize(
        env: Env,
        base_asset: Address,
        token: Address,
        claim_token: Address,
    ) -> Result<(), AmmError> {
        if is_initialized(&env) {
            return Err(AmmError::AlreadyInitialized);
        }

        if base_asset == token || base_asset == claim_token || token == claim_token {
            panic!("Identical assets");
        }

        // Claims are only sound if nobody else can mint them
        let claim_ledger = TokenLedger::new(&env, &claim_token);
        if !claim_ledger.is_administered_by_pool()? || claim_ledger.total_supply()? != 0 {
            return Err(AmmError::InvalidClaimToken);
        }

        let config = ExchangeConfig {
            base_asset,
            token,
            claim_token,
        };
        set_config(&env, &config);
        set_reserves(&env, &ReserveAccount::new());

        events::initialized(&env, &config);
        Ok(())
    }

    /// Deposit liquidity
    ///
    /// # Arguments
    /// * `provider` - Depositor; receives the minted claims
    /// * `token_amount` - Maximum tokens the provider is willing to add
    /// * `base_amount` - Base asset added
    ///
    /// # Returns
    /// Claims issued to the provider
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        token_amount: u128,
        base_amount: u128,
    ) -> Result<u128, AmmError> {
        provider.require_auth();
        let config = get_config(&env)?;
        let mut reserves = get_reserves(&env);

        let claims = liquidity::add_liquidity(
            &env,
            &config,
            &mut reserves,
            &provider,
            token_amount,
            base_amount,
        )?;

        set_reserves(&env, &reserves);
        Ok(claims)
    }

    /// Redeem claims
    ///
    /// # Returns
    /// (base_out, token_out) - Amounts paid to the provider
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        claims: u128,
    ) -> Result<(u128, u128), AmmError> {
        provider.require_auth();
        let config = get_config(&env)?;
        let mut reserves = get_reserves(&env);

        let amounts =
            liquidity::remove_liquidity(&env, &config, &mut reserves, &provider, claims)?;

        set_reserves(&env, &reserves);
        Ok(amounts)
    }

    /// Swap base asset for tokens
    ///
    /// Fails with `SlippageExceeded` if fewer than `min_token_out` would be paid.
    pub fn swap_base_for_token(
        env: Env,
        trader: Address,
        base_in: u128,
        min_token_out: u128,
    ) -> Result<u128, AmmError> {
        trader.require_auth();
        let config = get_config(&env)?;
        let mut reserves = get_reserves(&env);

        let token_out = swap::swap_base_for_token(
            &env,
            &config,
            &mut reserves,
            &trader,
            base_in,
            min_token_out,
        )?;

        set_reserves(&env, &reserves);
        Ok(token_out)
    }

    /// Swap tokens for base asset
    ///
    /// Fails with `SlippageExceeded` if less than `min_base_out` would be paid.
    pub fn swap_token_for_base(
        env: Env,
        trader: Address,
        token_in: u128,
        min_base_out: u128,
    ) -> Result<u128, AmmError> {
        trader.require_auth();
        let config = get_config(&env)?;
        let mut reserves = get_reserves(&env);

        let base_out = swap::swap_token_for_base(
            &env,
            &config,
            &mut reserves,
            &trader,
            token_in,
            min_base_out,
        )?;

        set_reserves(&env, &reserves);
        Ok(base_out)
    }

    // === View Functions ===

    /// Tokens paid for `base_in` at current reserves
    pub fn get_token_amount(env: Env, base_in: u128) -> Result<u128, AmmError> {
        get_config(&env)?;
        swap::quote_base_for_token(&env, &get_reserves(&env), base_in)
    }

    /// Base asset paid for `token_in` at current reserves
    pub fn get_base_amount(env: Env, token_in: u128) -> Result<u128, AmmError> {
        get_config(&env)?;
        swap::quote_token_for_base(&env, &get_reserves(&env), token_in)
    }

    /// Current token reserve
    pub fn get_reserve(env: Env) -> u128 {
        get_reserves(&env).token_reserve
    }

    /// Current base reserve
    pub fn base_reserve(env: Env) -> u128 {
        get_reserves(&env).base_reserve
    }

    /// Full reserve account
    pub fn get_reserves(env: Env) -> ReserveAccount {
        get_reserves(&env)
    }

    /// Outstanding liquidity claims
    pub fn total_supply(env: Env) -> u128 {
        get_reserves(&env).total_claims
    }

    /// Claims held by `holder`
    pub fn claim_balance(env: Env, holder: Address) -> Result<u128, AmmError> {
        let config = get_config(&env)?;
        TokenLedger::new(&env, &config.claim_token).balance_of(&holder)
    }

    /// What the ledgers report for the pool
    ///
    /// # Returns
    /// (base held, token held, claim supply)
    pub fn get_holdings(env: Env) -> Result<(u128, u128, u128), AmmError> {
        let config = get_config(&env)?;
        let pool = env.current_contract_address();
        let base_held = BaseLedger::new(&env, &config.base_asset).balance_of_pool()?;
        let token_held = TokenLedger::new(&env, &config.token).balance_of(&pool)?;
        let claim_supply = TokenLedger::new(&env, &config.claim_token).total_supply()?;
        Ok((base_held, token_held, claim_supply))
    }

    /// Get exchange configuration
    pub fn get_config(env: Env) -> Result<ExchangeConfig, AmmError> {
        get_config(&env)
    }

    /// Get base asset address
    pub fn base_asset(env: Env) -> Result<Address, AmmError> {
        Ok(get_config(&env)?.base_asset)
    }

    /// Get token address
    pub fn token(env: Env) -> Result<Address, AmmError> {
        Ok(get_config(&env)?.token)
    }

    /// Get claim token address
    pub fn claim_token(env: Env) -> Result<Address, AmmError> {
        Ok(get_config(&env)?.claim_token)
    }

    /// Swap fee as (numerator, denominator)
    pub fn fee(_env: Env) -> (u128, u128) {
        (FEE_NUMERATOR, FEE_DENOMINATOR)
    }
}
