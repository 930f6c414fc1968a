#![no_std]

mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};
use storage::{
    get_admin, get_allowance, get_balance, get_metadata, get_total_supply, is_initialized,
    set_admin, set_allowance, set_balance, set_metadata, set_total_supply, TokenMetadata,
};

/// Fungible asset ledger used for both the traded token and the exchange's
/// liquidity claims. The admin is the only account allowed to mint.
#[contract]
pub struct AmmToken;

#[contractimpl]
impl AmmToken {
    /// Initialize the token and credit `initial_supply` to the admin
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
        initial_supply: i128,
    ) {
        if is_initialized(&env) {
            panic!("Already initialized");
        }
        check_nonnegative(initial_supply);

        set_admin(&env, &admin);
        set_metadata(
            &env,
            &TokenMetadata {
                decimals,
                name,
                symbol,
            },
        );
        set_total_supply(&env, 0);

        if initial_supply > 0 {
            credit(&env, &admin, initial_supply);
            env.events()
                .publish((Symbol::new(&env, "mint"), admin), initial_supply);
        }
    }

    /// Mint new units to `to` (admin only)
    pub fn mint(env: Env, to: Address, amount: i128) {
        check_nonnegative(amount);
        let admin = get_admin(&env);
        admin.require_auth();

        credit(&env, &to, amount);
        env.events().publish((Symbol::new(&env, "mint"), admin, to), amount);
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative(amount);

        set_allowance(&env, &from, &spender, amount, expiration_ledger);
        env.events().publish(
            (Symbol::new(&env, "approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative(amount);

        move_balance(&env, &from, &to, amount);
        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative(amount);

        spend_allowance(&env, &from, &spender, amount);
        move_balance(&env, &from, &to, amount);
        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
    }

    pub fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative(amount);

        debit(&env, &from, amount);
        env.events().publish((Symbol::new(&env, "burn"), from), amount);
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative(amount);

        spend_allowance(&env, &from, &spender, amount);
        debit(&env, &from, amount);
        env.events().publish((Symbol::new(&env, "burn"), from), amount);
    }

    pub fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }

    pub fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    pub fn admin(env: Env) -> Address {
        get_admin(&env)
    }
}

fn check_nonnegative(amount: i128) {
    if amount < 0 {
        panic!("negative amount");
    }
}

fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        panic!("insufficient allowance");
    }
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        panic!("insufficient balance");
    }
    set_balance(env, from, from_balance - amount);
    let to_balance = get_balance(env, to);
    set_balance(
        env,
        to,
        to_balance.checked_add(amount).expect("balance overflow"),
    );
}

/// Mint: raises the holder's balance and the supply
fn credit(env: &Env, to: &Address, amount: i128) {
    let supply = get_total_supply(env)
        .checked_add(amount)
        .expect("supply overflow");
    let balance = get_balance(env, to);
    set_balance(env, to, balance + amount);
    set_total_supply(env, supply);
}

/// Burn: lowers the holder's balance and the supply
fn debit(env: &Env, from: &Address, amount: i128) {
    let balance = get_balance(env, from);
    if balance < amount {
        panic!("insufficient balance");
    }
    set_balance(env, from, balance - amount);
    set_total_supply(env, get_total_supply(env) - amount);
}
