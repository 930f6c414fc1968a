// ============================================================================
// MATH INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. mul_div rounds down
// 2. A quote never drains the output reserve
// 3. A larger input never quotes a smaller output
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Sanity check - a non-zero quote is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_quote_output(env: Env, amount_in: u128, reserve_in: u128, reserve_out: u128) {
    cvlr_assume!(reserve_in > 0 && reserve_out > 0);
    cvlr_assume!(amount_in <= u64::MAX as u128);
    let out = amm_math::quote_output(&env, amount_in, reserve_in, reserve_out, 1, 100);
    cvlr_satisfy!(matches!(out, Ok(v) if v > 0));
}

/// RULE: mul_div never rounds up
#[cfg(feature = "certora")]
#[rule]
pub fn mul_div_rounds_down(env: Env, a: u64, b: u64, c: u64) {
    cvlr_assume!(c > 0);
    let (a, b, c) = (a as u128, b as u128, c as u128);

    if let Ok(result) = amm_math::mul_div(&env, a, b, c) {
        cvlr_assert!(result * c <= a * b);
        cvlr_assert!(a * b - result * c < c);
    }
}

/// RULE: Quoted output stays strictly below the output reserve
#[cfg(feature = "certora")]
#[rule]
pub fn quote_below_reserve(env: Env, amount_in: u128, reserve_in: u128, reserve_out: u128) {
    cvlr_assume!(reserve_in > 0 && reserve_out > 0);

    if let Ok(out) = amm_math::quote_output(&env, amount_in, reserve_in, reserve_out, 1, 100) {
        cvlr_assert!(out < reserve_out);
    }
}

/// RULE: Quoted output is monotonic in the input amount
#[cfg(feature = "certora")]
#[rule]
pub fn quote_monotonic(env: Env, small: u64, large: u64, reserve_in: u64, reserve_out: u64) {
    cvlr_assume!(reserve_in > 0 && reserve_out > 0);
    cvlr_assume!(small <= large);

    let quote = |amount: u64| {
        amm_math::quote_output(&env, amount as u128, reserve_in as u128, reserve_out as u128, 1, 100)
    };
    if let (Ok(out_small), Ok(out_large)) = (quote(small), quote(large)) {
        cvlr_assert!(out_small <= out_large);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
