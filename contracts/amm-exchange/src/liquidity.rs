use crate::events;
use crate::invariants::{deposit_within_share, reserves_consistent, withdrawal_within_share};
use crate::ledger::{BaseLedger, TokenLedger};
use amm_math::quote_proportional;
use amm_types::{AmmError, ExchangeConfig, ReserveAccount};
use soroban_sdk::{log, Address, Env};

/// Deposit base and token, minting claims to the provider
///
/// The first deposit sets the price and issues claims 1:1 with the base
/// amount. Later deposits pull exactly the token amount matching the current
/// ratio; an offered surplus is left with the provider.
pub fn add_liquidity(
    env: &Env,
    config: &ExchangeConfig,
    reserves: &mut ReserveAccount,
    provider: &Address,
    token_amount: u128,
    base_amount: u128,
) -> Result<u128, AmmError> {
    let (token_required, claims_issued) = if reserves.is_empty() {
        // One-sided bootstrap would leave a reserve at zero with claims out
        if (base_amount == 0) != (token_amount == 0) {
            return Err(AmmError::InvalidDeposit);
        }
        (token_amount, base_amount)
    } else {
        let required = quote_proportional(
            env,
            base_amount,
            reserves.base_reserve,
            reserves.token_reserve,
        )?;
        if token_amount < required {
            log!(env, "insufficient token amount", token_amount, required);
            return Err(AmmError::InsufficientTokenAmount);
        }
        let claims = quote_proportional(
            env,
            base_amount,
            reserves.base_reserve,
            reserves.total_claims,
        )?;
        (required, claims)
    };

    let mut updated = reserves.clone();
    updated.deposit(base_amount, token_required, claims_issued)?;

    BaseLedger::new(env, &config.base_asset).transfer_in(provider, base_amount)?;
    TokenLedger::new(env, &config.token).transfer_from(provider, token_required)?;
    TokenLedger::new(env, &config.claim_token).mint(provider, claims_issued)?;

    debug_assert!(reserves_consistent(&updated));
    debug_assert!(deposit_within_share(env, reserves, base_amount, claims_issued));

    *reserves = updated;
    events::liquidity_added(env, provider, base_amount, token_required, claims_issued);
    Ok(claims_issued)
}

/// Burn claims and pay out the matching share of both reserves
///
/// Returns (base_out, token_out). Redeeming every outstanding claim empties
/// the pool exactly.
pub fn remove_liquidity(
    env: &Env,
    config: &ExchangeConfig,
    reserves: &mut ReserveAccount,
    provider: &Address,
    claims: u128,
) -> Result<(u128, u128), AmmError> {
    if claims == 0 || claims > reserves.total_claims {
        return Err(AmmError::InsufficientClaims);
    }

    let base_out = quote_proportional(env, claims, reserves.total_claims, reserves.base_reserve)?;
    let token_out =
        quote_proportional(env, claims, reserves.total_claims, reserves.token_reserve)?;

    let mut updated = reserves.clone();
    updated.withdraw(base_out, token_out, claims)?;

    let claim_ledger = TokenLedger::new(env, &config.claim_token);
    let held = claim_ledger.balance_of(provider)?;
    if held < claims {
        log!(env, "insufficient claims", held, claims);
        return Err(AmmError::InsufficientClaims);
    }
    claim_ledger.burn_from(provider, claims)?;
    BaseLedger::new(env, &config.base_asset).transfer_out(provider, base_out)?;
    TokenLedger::new(env, &config.token).transfer(provider, token_out)?;

    debug_assert!(reserves_consistent(&updated));
    debug_assert!(withdrawal_within_share(env, reserves, claims, base_out, token_out));

    *reserves = updated;
    events::liquidity_removed(env, provider, claims, base_out, token_out);
    Ok((base_out, token_out))
}
