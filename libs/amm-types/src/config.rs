use soroban_sdk::{contracttype, Address};

/// Exchange configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeConfig {
    /// Native asset contract (base side of the pool)
    pub base_asset: Address,
    /// Traded token contract
    pub token: Address,
    /// Liquidity-claim token contract; the exchange is its admin
    pub claim_token: Address,
}
