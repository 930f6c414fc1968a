use crate::full_math::{mul_div, u128_from_u256, wide_mul};
use amm_types::AmmError;
use soroban_sdk::{Env, U256};

/// Output amount of a constant-product swap with the fee taken from the input
///
/// out = in * (D - N) * reserve_out / (reserve_in * D + in * (D - N))
///
/// Rounds down, so the pool keeps any sub-unit remainder.
pub fn quote_output(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_numerator: u128,
    fee_denominator: u128,
) -> Result<u128, AmmError> {
    if reserve_in == 0 || reserve_out == 0 || fee_denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }

    let fee_complement = fee_denominator
        .checked_sub(fee_numerator)
        .ok_or(AmmError::ArithmeticOverflow)?;

    let reserve_out_wide = U256::from_u128(env, reserve_out);
    let mut input = wide_mul(env, amount_in, fee_complement);
    let mut reserve = wide_mul(env, reserve_in, fee_denominator);

    // Exact whenever the terms fit in 256 bits. Otherwise halve both terms,
    // rounding the input down and the reserve up, so the quote only shrinks.
    let max = U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
    let one = U256::from_u32(env, 1);
    while input > max.div(&reserve_out_wide) || reserve > max.sub(&input) {
        input = input.shr(1);
        reserve = reserve.shr(1).add(&one);
    }

    let numerator = input.mul(&reserve_out_wide);
    let denominator = reserve.add(&input);

    u128_from_u256(&numerator.div(&denominator))
}

/// Linear share: amount * reserve_other / reserve_basis (rounds down)
///
/// Used for the matched token side of a deposit and for claim mint/burn
/// amounts.
pub fn quote_proportional(
    env: &Env,
    amount: u128,
    reserve_basis: u128,
    reserve_other: u128,
) -> Result<u128, AmmError> {
    mul_div(env, amount, reserve_other, reserve_basis)
}

/// k = reserve_a * reserve_b, never overflows
pub fn constant_product(env: &Env, reserve_a: u128, reserve_b: u128) -> U256 {
    wide_mul(env, reserve_a, reserve_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amm_types::{FEE_DENOMINATOR, FEE_NUMERATOR};
    use soroban_sdk::Env;

    const UNIT: u128 = 1_000_000_000_000_000_000;

    // === quote_output tests ===

    #[test]
    fn test_quote_output_without_fee() {
        let env = Env::default();
        // reserves (1000, 2000), 500 in -> 666.666666666666666666 out
        let out = quote_output(&env, 500 * UNIT, 1000 * UNIT, 2000 * UNIT, 0, 1000).unwrap();
        assert_eq!(out, 666_666_666_666_666_666_666);

        // reverse direction: 500 token in -> exactly 200 base out
        let out = quote_output(&env, 500 * UNIT, 2000 * UNIT, 1000 * UNIT, 0, 1000).unwrap();
        assert_eq!(out, 200 * UNIT);
    }

    #[test]
    fn test_quote_output_with_pool_fee() {
        let env = Env::default();
        // 10 base into (100, 200) at 1% -> 18.01637852593266606 token
        let out = quote_output(
            &env,
            10 * UNIT,
            100 * UNIT,
            200 * UNIT,
            FEE_NUMERATOR,
            FEE_DENOMINATOR,
        )
        .unwrap();
        assert_eq!(out, 18_016_378_525_932_666_060);
    }

    #[test]
    fn test_quote_output_fee_reduces_output() {
        let env = Env::default();
        let no_fee = quote_output(&env, 500, 1000, 2000, 0, 1000).unwrap();
        let tier_03 = quote_output(&env, 500, 1000, 2000, 3, 1000).unwrap();
        let tier_1 = quote_output(&env, 500, 1000, 2000, 1, 100).unwrap();
        assert_eq!(no_fee, 666);
        assert_eq!(tier_03, 665);
        assert_eq!(tier_1, 662);
    }

    #[test]
    fn test_quote_output_zero_input() {
        let env = Env::default();
        assert_eq!(quote_output(&env, 0, 1000, 2000, 1, 100), Ok(0));
    }

    #[test]
    fn test_quote_output_empty_reserves() {
        let env = Env::default();
        assert_eq!(
            quote_output(&env, 10, 0, 2000, 1, 100),
            Err(AmmError::DivisionByZero)
        );
        assert_eq!(
            quote_output(&env, 10, 1000, 0, 1, 100),
            Err(AmmError::DivisionByZero)
        );
        assert_eq!(
            quote_output(&env, 0, 0, 0, 1, 100),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn test_quote_output_invalid_fee() {
        let env = Env::default();
        assert_eq!(
            quote_output(&env, 10, 1000, 2000, 0, 0),
            Err(AmmError::DivisionByZero)
        );
        assert_eq!(
            quote_output(&env, 10, 1000, 2000, 101, 100),
            Err(AmmError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_quote_output_large_input() {
        let env = Env::default();
        // fee-scaled input no longer fits u128, the quote still does
        assert_eq!(quote_output(&env, 1u128 << 125, 1000, 2000, 1, 100), Ok(1999));
        assert_eq!(
            quote_output(&env, u128::MAX, 1000, 2000, FEE_NUMERATOR, FEE_DENOMINATOR),
            Ok(1999)
        );
    }

    #[test]
    fn test_quote_output_beyond_256_bits() {
        let env = Env::default();
        // amount * (D - N) * reserve_out needs more than 256 bits
        let out = quote_output(&env, u128::MAX, u128::MAX, u128::MAX, 1, u128::MAX).unwrap();
        assert!(out < u128::MAX);
        assert!(out <= u128::MAX / 2);
        assert!(out >= u128::MAX / 2 - 4);

        let exact = quote_output(&env, 1u128 << 100, 1u128 << 100, 1u128 << 100, 0, 1).unwrap();
        assert_eq!(exact, 1u128 << 99);
    }

    #[test]
    fn test_quote_output_huge_reserves() {
        let env = Env::default();
        // products exceed u128 but the result stays below reserve_out
        let reserve = u128::MAX / 4;
        let out = quote_output(&env, reserve / 1000, reserve, reserve, 0, 1).unwrap();
        assert!(out < reserve / 1000);
        assert!(out > 0);
    }

    #[test]
    fn test_quote_output_is_repeatable() {
        let env = Env::default();
        let first = quote_output(&env, 12345, 99_999, 77_777, 1, 100).unwrap();
        for _ in 0..5 {
            assert_eq!(quote_output(&env, 12345, 99_999, 77_777, 1, 100), Ok(first));
        }
    }

    // === quote_proportional tests ===

    #[test]
    fn test_quote_proportional_basic() {
        let env = Env::default();
        // 50 base against (100, 200) needs 100 token
        assert_eq!(quote_proportional(&env, 50, 100, 200), Ok(100));
        // 25 of 100 claims against 200 token
        assert_eq!(quote_proportional(&env, 25, 100, 200), Ok(50));
    }

    #[test]
    fn test_quote_proportional_rounds_down() {
        let env = Env::default();
        // 1 * 2 / 3 = 0.67
        assert_eq!(quote_proportional(&env, 1, 3, 2), Ok(0));
        // 10 * 7 / 3 = 23.33
        assert_eq!(quote_proportional(&env, 10, 3, 7), Ok(23));
    }

    #[test]
    fn test_quote_proportional_full_share_is_exact() {
        let env = Env::default();
        let total = 333_333_333_333u128;
        let reserve = 987_654_321_987u128;
        assert_eq!(quote_proportional(&env, total, total, reserve), Ok(reserve));
    }

    #[test]
    fn test_quote_proportional_zero_basis() {
        let env = Env::default();
        assert_eq!(
            quote_proportional(&env, 10, 0, 200),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn test_quote_proportional_overflow() {
        let env = Env::default();
        assert_eq!(
            quote_proportional(&env, u128::MAX, 1, 2),
            Err(AmmError::ArithmeticOverflow)
        );
    }

    // === constant_product tests ===

    #[test]
    fn test_constant_product() {
        let env = Env::default();
        assert_eq!(
            constant_product(&env, 1000, 2000),
            U256::from_u128(&env, 2_000_000)
        );
        let max = constant_product(&env, u128::MAX, u128::MAX);
        assert!(max > U256::from_u128(&env, u128::MAX));
    }
}
