use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct InvestEvent {
    pub participant: Address,
    pub amount: i128,
    pub tokens_minted: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundEvent {
    pub participant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct HaltedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct ResumedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawnEvent {
    pub admin: Address,
    pub amount: i128,
}

pub fn emit_invest(env: &Env, event: InvestEvent) {
    env.events().publish((Symbol::new(env, "invest"),), event);
}

pub fn emit_refund(env: &Env, event: RefundEvent) {
    env.events().publish((Symbol::new(env, "refund"),), event);
}

pub fn emit_halted(env: &Env, event: HaltedEvent) {
    env.events().publish((Symbol::new(env, "halted"),), event);
}

pub fn emit_resumed(env: &Env, event: ResumedEvent) {
    env.events().publish((Symbol::new(env, "resumed"),), event);
}

pub fn emit_transfer(env: &Env, event: TransferEvent) {
    env.events().publish((Symbol::new(env, "transfer"),), event);
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish((Symbol::new(env, "withdrawn"),), event);
}
