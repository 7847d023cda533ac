//! Slash proposals and their lifecycle.

use bond_types::{AccountId, EvidenceHash, ProposalId, SlashTier, Timestamp};
use serde::{Deserialize, Serialize};

/// Where a proposal sits in its lifecycle. Derived from the latches, not
/// stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalState {
    /// Proposed; appeal window may still be open.
    Pending,
    /// Contested by the evaluator; waiting for an admin resolution.
    Appealed,
    /// Penalty applied (directly or via an upheld appeal). Terminal.
    Executed,
    /// Appeal succeeded; the slash never applies. Terminal.
    Cancelled,
}

/// A slash proposal — a permanent audit record.
///
/// `executed` and `cancelled` are one-way latches; exactly one of them is
/// ever set, and only after the proposal leaves `Pending`/`Appealed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashProposal {
    pub id: ProposalId,
    /// The accused account.
    pub evaluator: AccountId,
    pub tier: SlashTier,
    /// Digest anchoring the off-chain evidence. Never empty.
    pub evidence_hash: EvidenceHash,
    pub reason: String,
    pub proposed_at: Timestamp,
    /// Penalty computed from the evaluator's stake at proposal time.
    /// Execution clamps to the stake remaining at that moment; the appeal
    /// stake is always 50% of THIS original amount.
    pub slash_amount: u128,
    pub executed: bool,
    pub appealed: bool,
    /// Collateral posted by the evaluator when appealing (zero otherwise).
    pub appeal_stake: u128,
    pub cancelled: bool,
}

impl SlashProposal {
    pub fn state(&self) -> ProposalState {
        if self.executed {
            ProposalState::Executed
        } else if self.cancelled {
            ProposalState::Cancelled
        } else if self.appealed {
            ProposalState::Appealed
        } else {
            ProposalState::Pending
        }
    }

    /// Whether the evaluator may still file an appeal at `now`.
    pub fn appeal_window_open(&self, appeal_window_secs: u64, now: Timestamp) -> bool {
        !self.proposed_at.has_elapsed(appeal_window_secs, now)
    }
}
