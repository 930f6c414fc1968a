#![no_std]

mod config;
mod error;
mod reserve;

pub use config::*;
pub use error::*;
pub use reserve::*;

/// Swap fee numerator. The fee is taken from the input amount and stays in
/// the pool.
pub const FEE_NUMERATOR: u128 = 1;

/// Swap fee denominator (1 / 100 = 1%)
pub const FEE_DENOMINATOR: u128 = 100;
