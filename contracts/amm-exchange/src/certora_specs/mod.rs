// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the constant-product exchange.
//
// STRUCTURE:
//
// - math_specs.rs      : Pricing and mul_div properties
// - swap_specs.rs      : Swap output bounds and k monotonicity
// - liquidity_specs.rs : Deposit and withdrawal share properties
//
// USAGE:
// - Unit tests: cargo test -p amm-exchange
// - Certora build: cargo build --features certora -p amm-exchange
//
// ============================================================================

pub mod liquidity_specs;
pub mod math_specs;
pub mod swap_specs;

#[cfg(any(feature = "certora", test))]
use amm_types::ReserveAccount;

/// Reserve account from nondeterministic 64-bit inputs
#[cfg(any(feature = "certora", test))]
pub(crate) fn account(base: u64, token: u64, claims: u64) -> ReserveAccount {
    ReserveAccount {
        base_reserve: base as u128,
        token_reserve: token as u128,
        total_claims: claims as u128,
    }
}
