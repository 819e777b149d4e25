use soroban_sdk::Env;

use crate::ledger;
use crate::storage_types::{DataKey, SaleConfig, SalePhase};

/// Derive the campaign phase from live inputs. The admin halt flag wins over
/// the window position; a sale that has taken its full hard cap is finished
/// even while the window is still open.
pub fn compute(sequence: u32, config: &SaleConfig, halted: bool, total_raised: i128) -> SalePhase {
    if halted {
        return SalePhase::Halted;
    }
    if sequence < config.start_ledger {
        return SalePhase::Pending;
    }
    if sequence >= config.start_ledger.saturating_add(config.duration_ledgers) {
        return SalePhase::Finished;
    }
    if total_raised >= config.hard_cap {
        return SalePhase::Finished;
    }
    SalePhase::Active
}

/// Phase at the current ledger sequence. Re-evaluated on every call; nothing
/// is cached.
pub fn current(env: &Env, config: &SaleConfig) -> SalePhase {
    let halted: bool = env
        .storage()
        .instance()
        .get(&DataKey::Halted)
        .unwrap_or(false);
    compute(
        env.ledger().sequence(),
        config,
        halted,
        ledger::total_raised(env),
    )
}
