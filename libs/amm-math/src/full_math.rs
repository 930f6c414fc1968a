use amm_types::AmmError;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    u128_from_u256(&result)
}

/// Product of two amounts as a 256-bit value
pub fn wide_mul(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

/// Convert U256 back to u128, failing if the value does not fit
pub fn u128_from_u256(value: &U256) -> Result<u128, AmmError> {
    value.to_u128().ok_or(AmmError::ArithmeticOverflow)
}
