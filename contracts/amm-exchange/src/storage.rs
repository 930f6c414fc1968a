use amm_types::{AmmError, ExchangeConfig, ReserveAccount};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// Storage layout: the exchange keeps exactly two Instance entries.
// - Config is written once by `initialize`
// - Reserves is rewritten at the end of every successful deposit, withdrawal
//   or swap, after all ledger movements went through
// Claim balances live in the claim token contract, not here.
// ============================================================================

/// Storage keys for the exchange contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Exchange configuration (Instance storage)
    Config,
    /// Reserve account (Instance storage)
    Reserves,
}

// TTL constants
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
pub(crate) const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

// === Config ===

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<ExchangeConfig, AmmError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(AmmError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &ExchangeConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Reserves ===

pub fn get_reserves(env: &Env) -> ReserveAccount {
    let reserves = env
        .storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or_default();
    extend_instance_ttl(env);
    reserves
}

pub fn set_reserves(env: &Env, reserves: &ReserveAccount) {
    env.storage().instance().set(&DataKey::Reserves, reserves);
    extend_instance_ttl(env);
}
