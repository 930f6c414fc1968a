// ============================================================================
// SWAP INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. k never decreases across a swap in either direction
// 2. A swap leaves a non-empty pool non-empty
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use super::account;

#[cfg(feature = "certora")]
use crate::invariants::{k_non_decreasing, reserves_consistent};

/// RULE: Selling base for tokens never shrinks k
#[cfg(feature = "certora")]
#[rule]
pub fn swap_base_in_k_monotonic(env: Env, base: u64, token: u64, claims: u64, base_in: u64) {
    let before = account(base, token, claims);
    cvlr_assume!(reserves_consistent(&before) && !before.is_empty());

    let Ok(token_out) = crate::swap::quote_base_for_token(&env, &before, base_in as u128) else {
        return;
    };
    let mut after = before.clone();
    if after.swap_base_in(base_in as u128, token_out).is_ok() {
        cvlr_assert!(k_non_decreasing(&env, &before, &after));
        cvlr_assert!(after.token_reserve > 0);
    }
}

/// RULE: Selling tokens for base never shrinks k
#[cfg(feature = "certora")]
#[rule]
pub fn swap_token_in_k_monotonic(env: Env, base: u64, token: u64, claims: u64, token_in: u64) {
    let before = account(base, token, claims);
    cvlr_assume!(reserves_consistent(&before) && !before.is_empty());

    let Ok(base_out) = crate::swap::quote_token_for_base(&env, &before, token_in as u128) else {
        return;
    };
    let mut after = before.clone();
    if after.swap_token_in(token_in as u128, base_out).is_ok() {
        cvlr_assert!(k_non_decreasing(&env, &before, &after));
        cvlr_assert!(after.base_reserve > 0);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
