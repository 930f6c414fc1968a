// ============================================================================
// LIQUIDITY INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Deposits never mint more than the proportional share
// 2. Withdrawals never pay more than the burned share
// 3. Burning every claim empties the pool exactly
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use amm_math::quote_proportional;

#[cfg(feature = "certora")]
use super::account;

#[cfg(feature = "certora")]
use crate::invariants::{deposit_within_share, reserves_consistent, withdrawal_within_share};

/// RULE: Claims minted for a deposit stay within the base share
#[cfg(feature = "certora")]
#[rule]
pub fn deposit_proportional(env: Env, base: u64, token: u64, claims: u64, base_amount: u64) {
    let before = account(base, token, claims);
    cvlr_assume!(reserves_consistent(&before) && !before.is_empty());

    if let Ok(issued) =
        quote_proportional(&env, base_amount as u128, before.base_reserve, before.total_claims)
    {
        cvlr_assert!(deposit_within_share(&env, &before, base_amount as u128, issued));
    }
}

/// RULE: A partial withdrawal pays at most the burned share
#[cfg(feature = "certora")]
#[rule]
pub fn withdrawal_proportional(env: Env, base: u64, token: u64, claims: u64, burned: u64) {
    let before = account(base, token, claims);
    cvlr_assume!(reserves_consistent(&before) && !before.is_empty());
    cvlr_assume!(burned > 0 && burned <= claims);

    let burned = burned as u128;
    let base_out = quote_proportional(&env, burned, before.total_claims, before.base_reserve);
    let token_out = quote_proportional(&env, burned, before.total_claims, before.token_reserve);
    if let (Ok(base_out), Ok(token_out)) = (base_out, token_out) {
        cvlr_assert!(withdrawal_within_share(&env, &before, burned, base_out, token_out));
    }
}

/// RULE: Redeeming all claims leaves nothing behind
#[cfg(feature = "certora")]
#[rule]
pub fn full_withdrawal_exact(env: Env, base: u64, token: u64, claims: u64) {
    let before = account(base, token, claims);
    cvlr_assume!(reserves_consistent(&before) && !before.is_empty());

    let total = before.total_claims;
    let base_out = quote_proportional(&env, total, total, before.base_reserve);
    let token_out = quote_proportional(&env, total, total, before.token_reserve);
    if let (Ok(base_out), Ok(token_out)) = (base_out, token_out) {
        let mut after = before.clone();
        cvlr_assert!(after.withdraw(base_out, token_out, total).is_ok());
        cvlr_assert!(after.is_empty() && after.base_reserve == 0 && after.token_reserve == 0);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
