#![no_std]

pub mod full_math;
pub mod pricing;

pub use full_math::*;
pub use pricing::*;
