#![no_std]

mod events;
mod ledger;
mod phase;
mod storage_types;


use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env, String};

pub use storage_types::{SaleConfig, SaleError, SalePhase};
use storage_types::DataKey;

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Set up the sale with its immutable parameters and place the full token
    /// supply in contract custody.
    pub fn initialize(env: Env, config: SaleConfig) {
        if env.storage().instance().has(&DataKey::Config) {
            panic_with_error!(&env, SaleError::AlreadyInitialized);
        }
        config.admin.require_auth();
        validate_config(&env, &config);

        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::Halted, &false);
        env.storage().instance().set(&DataKey::TotalRaised, &0i128);
        env.storage().instance().set(&DataKey::TokensSold, &0i128);
        env.storage()
            .instance()
            .set(&DataKey::ProceedsWithdrawn, &false);
        ledger::init_custody(&env, config.total_supply);
        ledger::extend_instance(&env);
    }

    /// Exchange `amount` of the payment token for sale tokens at the fixed
    /// price. Only valid while the sale window is open.
    pub fn invest(env: Env, participant: Address, amount: i128) -> i128 {
        participant.require_auth();
        let config = get_config(&env);

        if phase::current(&env, &config) != SalePhase::Active {
            panic_with_error!(&env, SaleError::WrongPhase);
        }
        if amount < config.min_investment {
            panic_with_error!(&env, SaleError::AmountTooSmall);
        }

        let tokens_minted = ledger::credit(&env, &config, &participant, amount);

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&participant, &env.current_contract_address(), &amount);

        events::emit_invest(
            &env,
            events::InvestEvent {
                participant,
                amount,
                tokens_minted,
            },
        );

        tokens_minted
    }

    /// Reclaim a contribution after a sale that closed below its soft cap.
    pub fn refund(env: Env, participant: Address) {
        participant.require_auth();
        let config = get_config(&env);

        if phase::current(&env, &config) != SalePhase::Finished {
            panic_with_error!(&env, SaleError::WrongPhase);
        }
        if ledger::total_raised(&env) >= config.soft_cap {
            panic_with_error!(&env, SaleError::SoftCapMet);
        }

        let amount = ledger::debit_for_refund(&env, &participant);

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&env.current_contract_address(), &participant, &amount);

        events::emit_refund(&env, events::RefundEvent { participant, amount });
    }

    /// Admin override: freeze the sale regardless of the window position.
    pub fn halt(env: Env, caller: Address) {
        let config = get_config(&env);
        caller.require_auth();
        if caller != config.admin {
            panic_with_error!(&env, SaleError::Unauthorized);
        }

        env.storage().instance().set(&DataKey::Halted, &true);
        ledger::extend_instance(&env);

        events::emit_halted(&env, events::HaltedEvent { admin: caller });
    }

    /// Lift a halt; the phase returns to whatever the ledger sequence implies.
    pub fn resume(env: Env, caller: Address) {
        let config = get_config(&env);
        caller.require_auth();
        if caller != config.admin {
            panic_with_error!(&env, SaleError::Unauthorized);
        }
        let halted: bool = env
            .storage()
            .instance()
            .get(&DataKey::Halted)
            .unwrap_or(false);
        if !halted {
            panic_with_error!(&env, SaleError::NotHalted);
        }

        env.storage().instance().set(&DataKey::Halted, &false);
        ledger::extend_instance(&env);

        events::emit_resumed(&env, events::ResumedEvent { admin: caller });
    }

    /// Move sale tokens between holders once trading has unlocked.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let config = get_config(&env);

        if env.ledger().sequence() < config.trading_start_ledger {
            panic_with_error!(&env, SaleError::TradingLocked);
        }

        ledger::move_tokens(&env, &from, &to, amount);

        events::emit_transfer(&env, events::TransferEvent { from, to, amount });
    }

    /// Admin collects the raised funds once the sale has finished at or above
    /// its soft cap. One shot.
    pub fn withdraw_proceeds(env: Env, caller: Address) -> i128 {
        let config = get_config(&env);
        caller.require_auth();
        if caller != config.admin {
            panic_with_error!(&env, SaleError::Unauthorized);
        }
        if phase::current(&env, &config) != SalePhase::Finished {
            panic_with_error!(&env, SaleError::WrongPhase);
        }
        let raised = ledger::total_raised(&env);
        if raised < config.soft_cap {
            panic_with_error!(&env, SaleError::SoftCapNotMet);
        }
        let withdrawn: bool = env
            .storage()
            .instance()
            .get(&DataKey::ProceedsWithdrawn)
            .unwrap_or(false);
        if withdrawn {
            panic_with_error!(&env, SaleError::AlreadyWithdrawn);
        }

        env.storage()
            .instance()
            .set(&DataKey::ProceedsWithdrawn, &true);
        ledger::extend_instance(&env);

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&env.current_contract_address(), &caller, &raised);

        events::emit_withdrawn(
            &env,
            events::WithdrawnEvent {
                admin: caller,
                amount: raised,
            },
        );

        raised
    }

    /// View functions
    pub fn name(env: Env) -> String {
        get_config(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_config(&env).symbol
    }

    pub fn admin(env: Env) -> Address {
        get_config(&env).admin
    }

    pub fn token_price(env: Env) -> i128 {
        get_config(&env).token_price
    }

    pub fn max_investment(env: Env) -> i128 {
        get_config(&env).max_investment
    }

    pub fn balance_of(env: Env, holder: Address) -> i128 {
        ledger::balance_of(&env, &holder)
    }

    pub fn contribution_of(env: Env, participant: Address) -> i128 {
        ledger::contribution_of(&env, &participant)
    }

    pub fn total_raised(env: Env) -> i128 {
        ledger::total_raised(&env)
    }

    pub fn get_config(env: Env) -> SaleConfig {
        get_config(&env)
    }

    pub fn get_current_state(env: Env) -> SalePhase {
        let config = get_config(&env);
        phase::current(&env, &config)
    }
}

// Helper functions
fn get_config(env: &Env) -> SaleConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, SaleError::NotInitialized))
}

fn validate_config(env: &Env, config: &SaleConfig) {
    if config.total_supply <= 0 || config.token_price <= 0 {
        panic_with_error!(env, SaleError::InvalidConfig);
    }
    if config.min_investment <= 0 || config.min_investment > config.max_investment {
        panic_with_error!(env, SaleError::InvalidConfig);
    }
    if config.soft_cap <= 0 || config.soft_cap > config.hard_cap {
        panic_with_error!(env, SaleError::InvalidConfig);
    }
    // The custody supply must cover a sold-out sale.
    let supply_value = config
        .total_supply
        .checked_mul(config.token_price)
        .unwrap_or_else(|| panic_with_error!(env, SaleError::InvalidConfig));
    if config.hard_cap > supply_value {
        panic_with_error!(env, SaleError::InvalidConfig);
    }
    if config.duration_ledgers == 0 {
        panic_with_error!(env, SaleError::InvalidConfig);
    }
    let window_end = config
        .start_ledger
        .checked_add(config.duration_ledgers)
        .unwrap_or_else(|| panic_with_error!(env, SaleError::InvalidConfig));
    if config.trading_start_ledger < window_end {
        panic_with_error!(env, SaleError::InvalidConfig);
    }
}
