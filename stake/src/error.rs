//! Stake-ledger errors.

use bond_types::{AccountId, Tier};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StakeError {
    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("lockup of {months} months is outside the allowed range")]
    InvalidLockup { months: u32 },

    #[error("{0} already has an active stake")]
    AlreadyStaked(AccountId),

    #[error("{0} has no active stake")]
    NoActiveStake(AccountId),

    #[error("stake below {tier} minimum: need {minimum}, provided {provided}")]
    BelowTierMinimum {
        tier: Tier,
        minimum: u128,
        provided: u128,
    },

    #[error("{0} already has a pending unstake request")]
    UnstakePending(AccountId),

    #[error("{0} has no pending unstake request")]
    NoUnstakePending(AccountId),

    #[error("requested {requested} exceeds bonded stake of {available}")]
    ExceedsStake { requested: u128, available: u128 },

    #[error("lockup not elapsed: {remaining_secs}s remaining")]
    LockupNotElapsed { remaining_secs: u64 },

    #[error("cooldown not elapsed: {remaining_secs}s remaining")]
    CooldownNotElapsed { remaining_secs: u64 },

    #[error("arithmetic overflow in stake accounting")]
    Overflow,

    #[error("{0}")]
    Other(String),
}
