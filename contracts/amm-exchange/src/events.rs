use amm_types::ExchangeConfig;
use soroban_sdk::{Address, Env, Symbol};

pub fn initialized(env: &Env, config: &ExchangeConfig) {
    env.events().publish(
        (Symbol::new(env, "init"),),
        (
            config.base_asset.clone(),
            config.token.clone(),
            config.claim_token.clone(),
        ),
    );
}

pub fn liquidity_added(env: &Env, provider: &Address, base: u128, token: u128, claims: u128) {
    env.events().publish(
        (Symbol::new(env, "add_liquidity"), provider.clone()),
        (base, token, claims),
    );
}

pub fn liquidity_removed(env: &Env, provider: &Address, claims: u128, base: u128, token: u128) {
    env.events().publish(
        (Symbol::new(env, "remove_liquidity"), provider.clone()),
        (claims, base, token),
    );
}

pub fn swapped_base_for_token(env: &Env, trader: &Address, base_in: u128, token_out: u128) {
    env.events().publish(
        (Symbol::new(env, "swap_base"), trader.clone()),
        (base_in, token_out),
    );
}

pub fn swapped_token_for_base(env: &Env, trader: &Address, token_in: u128, base_out: u128) {
    env.events().publish(
        (Symbol::new(env, "swap_token"), trader.clone()),
        (token_in, base_out),
    );
}
