//! Stake ledger — the bonded-participation core.
//!
//! Accounts lock tokens to unlock tiered capacity. Withdrawal is two-step
//! (request, then finalize after the tier's cooldown) so an in-flight slash
//! proposal cannot be escaped by exiting instantly; the only instant path
//! is `emergency_exit`, which burns a fixed penalty.
//!
//! This crate handles:
//! - Stake records and their lifecycle (bond, unbond request, finalize)
//! - Tier policy (ordered threshold lookup, capacity checks)
//! - Slash reductions (clamped, never failing on shrinkage)
//! - The burn sink every destroyed token is routed to

pub mod error;
pub mod ledger;
pub mod policy;
pub mod record;
pub mod sink;

pub use error::StakeError;
pub use ledger::{EmergencyExit, FinalizedUnstake, StakeLedger};
pub use record::Stake;
pub use sink::BurnSink;
