use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::{DataKey, SaleConfig, SaleError, TTL_INSTANCE, TTL_PERSISTENT};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn balance_of(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn contribution_of(env: &Env, participant: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(participant.clone()))
        .unwrap_or(0)
}

pub fn total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn tokens_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokensSold)
        .unwrap_or(0)
}

fn set_balance(env: &Env, holder: &Address, value: i128) {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &value);
    extend_persistent(env, &key);
}

fn set_contribution(env: &Env, participant: &Address, value: i128) {
    let key = DataKey::Contribution(participant.clone());
    env.storage().persistent().set(&key, &value);
    extend_persistent(env, &key);
}

/// Seed contract custody with the full token supply.
pub fn init_custody(env: &Env, total_supply: i128) {
    set_balance(env, &env.current_contract_address(), total_supply);
}

/// Mint tokens against an incoming contribution.
///
/// Owns every balance and aggregate mutation for an investment; the caller is
/// responsible for the phase gate and for pulling the payment afterwards.
/// Either both caps hold for the resulting state or nothing is written.
pub fn credit(env: &Env, config: &SaleConfig, participant: &Address, amount: i128) -> i128 {
    let contribution = contribution_of(env, participant) + amount;
    if contribution > config.max_investment {
        panic_with_error!(env, SaleError::CapExceeded);
    }
    let raised = total_raised(env) + amount;
    if raised > config.hard_cap {
        panic_with_error!(env, SaleError::CapExceeded);
    }

    let tokens_minted = amount / config.token_price;
    let custody = env.current_contract_address();

    set_contribution(env, participant, contribution);
    set_balance(env, participant, balance_of(env, participant) + tokens_minted);
    set_balance(env, &custody, balance_of(env, &custody) - tokens_minted);
    env.storage().instance().set(&DataKey::TotalRaised, &raised);
    env.storage()
        .instance()
        .set(&DataKey::TokensSold, &(tokens_sold(env) + tokens_minted));
    extend_instance(env);

    tokens_minted
}

/// Return the participant's full contribution and zero their entry.
///
/// The tokens go back to custody and the aggregates shrink accordingly, so
/// storage is settled in full before the caller runs the outbound transfer.
pub fn debit_for_refund(env: &Env, participant: &Address) -> i128 {
    let contribution = contribution_of(env, participant);
    if contribution == 0 {
        panic_with_error!(env, SaleError::NothingToRefund);
    }
    let tokens = balance_of(env, participant);
    let custody = env.current_contract_address();

    set_contribution(env, participant, 0);
    set_balance(env, participant, 0);
    set_balance(env, &custody, balance_of(env, &custody) + tokens);
    env.storage()
        .instance()
        .set(&DataKey::TotalRaised, &(total_raised(env) - contribution));
    env.storage()
        .instance()
        .set(&DataKey::TokensSold, &(tokens_sold(env) - tokens));
    extend_instance(env);

    contribution
}

pub fn move_tokens(env: &Env, from: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        panic_with_error!(env, SaleError::AmountTooSmall);
    }
    let from_balance = balance_of(env, from);
    if from_balance < amount {
        panic_with_error!(env, SaleError::InsufficientBalance);
    }
    set_balance(env, from, from_balance - amount);
    set_balance(env, to, balance_of(env, to) + amount);
}
