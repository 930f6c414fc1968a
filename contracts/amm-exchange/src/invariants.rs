// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates over the reserve account that every operation must preserve.
// They back the debug assertions in the liquidity and swap paths, the unit
// tests below and the Certora rules.
//
// INVARIANT CATEGORIES:
//
// 1. EMPTINESS - reserves and claims are all zero or all non-zero
// 2. PRICING   - k never decreases across a swap
// 3. SHARES    - mint and burn amounts never exceed the proportional share
// 4. CUSTODY   - ledger holdings always cover the recorded reserves
//
// ============================================================================

use amm_math::{constant_product, wide_mul};
use amm_types::ReserveAccount;
use soroban_sdk::Env;

// ============================================================================
// EMPTINESS INVARIANTS
// ============================================================================

/// Invariant: the pool is empty on all three axes or on none
///
/// Property:
///   base_reserve == 0 <=> token_reserve == 0 <=> total_claims == 0
pub fn reserves_consistent(reserves: &ReserveAccount) -> bool {
    let base_empty = reserves.base_reserve == 0;
    let token_empty = reserves.token_reserve == 0;
    let claims_empty = reserves.total_claims == 0;
    base_empty == token_empty && token_empty == claims_empty
}

// ============================================================================
// PRICING INVARIANTS
// ============================================================================

/// Invariant: a swap never shrinks the constant product
///
/// Property:
///   after.base * after.token >= before.base * before.token
pub fn k_non_decreasing(env: &Env, before: &ReserveAccount, after: &ReserveAccount) -> bool {
    constant_product(env, after.base_reserve, after.token_reserve)
        >= constant_product(env, before.base_reserve, before.token_reserve)
}

// ============================================================================
// SHARE INVARIANTS
// ============================================================================

/// Invariant: claims minted on a deposit never exceed the base share
///
/// Property:
///   claims / total_claims <= base_amount / base_reserve   (pre-deposit values)
pub fn deposit_within_share(
    env: &Env,
    before: &ReserveAccount,
    base_amount: u128,
    claims_issued: u128,
) -> bool {
    if before.is_empty() {
        return claims_issued == base_amount;
    }
    wide_mul(env, claims_issued, before.base_reserve)
        <= wide_mul(env, base_amount, before.total_claims)
}

/// Invariant: a withdrawal pays at most the burned share of each reserve
///
/// Property:
///   out / reserve <= claims / total_claims   (pre-burn values, per asset)
pub fn withdrawal_within_share(
    env: &Env,
    before: &ReserveAccount,
    claims: u128,
    base_out: u128,
    token_out: u128,
) -> bool {
    if claims == before.total_claims {
        return base_out == before.base_reserve && token_out == before.token_reserve;
    }
    wide_mul(env, base_out, before.total_claims) <= wide_mul(env, claims, before.base_reserve)
        && wide_mul(env, token_out, before.total_claims)
            <= wide_mul(env, claims, before.token_reserve)
}

// ============================================================================
// CUSTODY INVARIANTS
// ============================================================================

/// Invariant: what the ledgers say the pool holds covers its reserves, and
/// no claims circulate beyond the recorded total
///
/// Holdings may exceed reserves when assets are sent to the pool directly.
/// Claim supply may fall short of the total when a holder burns claims on
/// the claim ledger instead of redeeming them.
pub fn holdings_cover_reserves(
    reserves: &ReserveAccount,
    base_held: u128,
    token_held: u128,
    claim_supply: u128,
) -> bool {
    base_held >= reserves.base_reserve
        && token_held >= reserves.token_reserve
        && claim_supply <= reserves.total_claims
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    fn account(base: u128, token: u128, claims: u128) -> ReserveAccount {
        ReserveAccount {
            base_reserve: base,
            token_reserve: token,
            total_claims: claims,
        }
    }

    #[test]
    fn test_reserves_consistent() {
        assert!(reserves_consistent(&account(0, 0, 0)));
        assert!(reserves_consistent(&account(1, 2, 3)));
        assert!(!reserves_consistent(&account(0, 2, 3)));
        assert!(!reserves_consistent(&account(1, 0, 3)));
        assert!(!reserves_consistent(&account(1, 2, 0)));
    }

    #[test]
    fn test_k_non_decreasing() {
        let env = Env::default();
        let before = account(1000, 2000, 1000);
        assert!(k_non_decreasing(&env, &before, &account(1500, 1340, 1000)));
        assert!(k_non_decreasing(&env, &before, &before));
        assert!(!k_non_decreasing(&env, &before, &account(1500, 1300, 1000)));
    }

    #[test]
    fn test_deposit_within_share() {
        let env = Env::default();
        assert!(deposit_within_share(&env, &account(0, 0, 0), 100, 100));
        assert!(!deposit_within_share(&env, &account(0, 0, 0), 100, 99));

        let before = account(100, 200, 100);
        assert!(deposit_within_share(&env, &before, 50, 50));
        assert!(!deposit_within_share(&env, &before, 50, 51));
    }

    #[test]
    fn test_withdrawal_within_share() {
        let env = Env::default();
        let before = account(100, 200, 100);
        assert!(withdrawal_within_share(&env, &before, 25, 25, 50));
        assert!(!withdrawal_within_share(&env, &before, 25, 26, 50));
        assert!(withdrawal_within_share(&env, &before, 100, 100, 200));
        assert!(!withdrawal_within_share(&env, &before, 100, 99, 200));
    }

    #[test]
    fn test_holdings_cover_reserves() {
        let reserves = account(100, 200, 100);
        assert!(holdings_cover_reserves(&reserves, 100, 200, 100));
        assert!(holdings_cover_reserves(&reserves, 105, 200, 100));
        assert!(!holdings_cover_reserves(&reserves, 99, 200, 100));
        assert!(holdings_cover_reserves(&reserves, 100, 200, 99));
        assert!(!holdings_cover_reserves(&reserves, 100, 200, 101));
    }
}
