use crate::events;
use crate::invariants::k_non_decreasing;
use crate::ledger::{BaseLedger, TokenLedger};
use amm_math::quote_output;
use amm_types::{AmmError, ExchangeConfig, ReserveAccount, FEE_DENOMINATOR, FEE_NUMERATOR};
use soroban_sdk::{log, Address, Env};

/// Token out for `base_in` at the current reserves
pub fn quote_base_for_token(
    env: &Env,
    reserves: &ReserveAccount,
    base_in: u128,
) -> Result<u128, AmmError> {
    quote_output(
        env,
        base_in,
        reserves.base_reserve,
        reserves.token_reserve,
        FEE_NUMERATOR,
        FEE_DENOMINATOR,
    )
}

/// Base out for `token_in` at the current reserves
pub fn quote_token_for_base(
    env: &Env,
    reserves: &ReserveAccount,
    token_in: u128,
) -> Result<u128, AmmError> {
    quote_output(
        env,
        token_in,
        reserves.token_reserve,
        reserves.base_reserve,
        FEE_NUMERATOR,
        FEE_DENOMINATOR,
    )
}

/// Sell `base_in` of the base asset for at least `min_token_out` tokens
pub fn swap_base_for_token(
    env: &Env,
    config: &ExchangeConfig,
    reserves: &mut ReserveAccount,
    trader: &Address,
    base_in: u128,
    min_token_out: u128,
) -> Result<u128, AmmError> {
    let token_out = quote_base_for_token(env, reserves, base_in)?;
    if token_out < min_token_out {
        log!(env, "insufficient output amount", token_out, min_token_out);
        return Err(AmmError::SlippageExceeded);
    }

    let mut updated = reserves.clone();
    updated.swap_base_in(base_in, token_out)?;

    BaseLedger::new(env, &config.base_asset).transfer_in(trader, base_in)?;
    TokenLedger::new(env, &config.token).transfer(trader, token_out)?;

    debug_assert!(k_non_decreasing(env, reserves, &updated));

    *reserves = updated;
    events::swapped_base_for_token(env, trader, base_in, token_out);
    Ok(token_out)
}

/// Sell `token_in` tokens for at least `min_base_out` of the base asset
///
/// The token side is pulled with `transfer_from`, so the trader must have
/// approved the exchange beforehand.
pub fn swap_token_for_base(
    env: &Env,
    config: &ExchangeConfig,
    reserves: &mut ReserveAccount,
    trader: &Address,
    token_in: u128,
    min_base_out: u128,
) -> Result<u128, AmmError> {
    let base_out = quote_token_for_base(env, reserves, token_in)?;
    if base_out < min_base_out {
        log!(env, "insufficient output amount", base_out, min_base_out);
        return Err(AmmError::SlippageExceeded);
    }

    let mut updated = reserves.clone();
    updated.swap_token_in(token_in, base_out)?;

    TokenLedger::new(env, &config.token).transfer_from(trader, token_in)?;
    BaseLedger::new(env, &config.base_asset).transfer_out(trader, base_out)?;

    debug_assert!(k_non_decreasing(env, reserves, &updated));

    *reserves = updated;
    events::swapped_token_for_base(env, trader, token_in, base_out);
    Ok(base_out)
}
