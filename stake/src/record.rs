//! Per-account stake records.

use bond_types::{AccountId, Tier, Timestamp};
use serde::{Deserialize, Serialize};

/// One account's bonded stake.
///
/// Invariants maintained by the ledger:
/// - `unstake_amount <= amount`
/// - at most one unstake request pending at a time
/// - `amount == 0` implies `active == false`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stake {
    pub owner: AccountId,
    /// Currently bonded balance (raw units).
    pub amount: u128,
    /// Capacity tier chosen (and validated) at stake time.
    pub tier: Tier,
    pub staked_at: Timestamp,
    /// Lockup chosen at stake time, already converted to seconds.
    pub lockup_secs: u64,
    /// Set while an unstake request is pending.
    pub unstake_requested_at: Option<Timestamp>,
    /// Amount earmarked for withdrawal by the pending request.
    pub unstake_amount: u128,
    pub active: bool,
}

impl Stake {
    /// Whether the lockup chosen at stake time has elapsed.
    pub fn lockup_elapsed(&self, now: Timestamp) -> bool {
        self.staked_at.has_elapsed(self.lockup_secs, now)
    }

    /// Whether an unstake request is currently pending.
    pub fn has_pending_unstake(&self) -> bool {
        self.unstake_requested_at.is_some()
    }
}
