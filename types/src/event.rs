//! Audit-trail events emitted by the engine.
//!
//! Every state transition produces exactly one primary event (plus
//! `EvaluatorBanned` alongside a Fraud execution). Each event carries
//! enough data for an off-chain indexer to reconstruct the transition
//! without reading engine state.

use crate::account::AccountId;
use crate::hash::EvidenceHash;
use crate::tier::{SlashTier, Tier};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Monotonically increasing slash proposal identifier.
pub type ProposalId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    Staked {
        account: AccountId,
        amount: u128,
        tier: Tier,
        lockup_secs: u64,
        timestamp: Timestamp,
    },
    UnstakeInitiated {
        account: AccountId,
        amount: u128,
        timestamp: Timestamp,
    },
    UnstakeCancelled {
        account: AccountId,
        amount: u128,
        timestamp: Timestamp,
    },
    Unstaked {
        account: AccountId,
        amount: u128,
        /// Bonded balance left after the withdrawal.
        remaining: u128,
        timestamp: Timestamp,
    },
    EmergencyExited {
        account: AccountId,
        returned: u128,
        penalty_burned: u128,
        timestamp: Timestamp,
    },
    SlashProposed {
        id: ProposalId,
        evaluator: AccountId,
        tier: SlashTier,
        slash_amount: u128,
        evidence_hash: EvidenceHash,
        timestamp: Timestamp,
    },
    SlashAppealed {
        id: ProposalId,
        evaluator: AccountId,
        appeal_stake: u128,
        timestamp: Timestamp,
    },
    SlashExecuted {
        id: ProposalId,
        evaluator: AccountId,
        /// Amount actually removed, clamped to the stake at execution time.
        applied_amount: u128,
        timestamp: Timestamp,
    },
    AppealResolved {
        id: ProposalId,
        evaluator: AccountId,
        upheld: bool,
        /// Appeal collateral returned (rejected appeal); zero when upheld.
        refunded: u128,
        /// Appeal collateral burned (upheld appeal); zero when rejected.
        forfeited: u128,
        timestamp: Timestamp,
    },
    EvaluatorBanned {
        account: AccountId,
        proposal: ProposalId,
        timestamp: Timestamp,
    },
    TierConfigUpdated {
        tier: Tier,
        minimum_stake: u128,
        cooldown_secs: u64,
        timestamp: Timestamp,
    },
}
