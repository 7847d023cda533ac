//! Core slash registry — drives every proposal through its state machine.
//!
//! The registry owns proposal records and their transitions only. Stake
//! reductions, token movement, burning and banning are coordinated by the
//! engine on top of the snapshots these methods return; like the stake
//! ledger, funds-pulling transitions (appeal) are split into `check_` /
//! `apply_` so the collateral transfer happens between validation and
//! commit.

use std::collections::HashMap;

use crate::error::SlashError;
use crate::proposal::SlashProposal;
use bond_types::{
    AccountId, EvidenceHash, ProposalId, ProtocolParams, SlashTier, Timestamp, BPS_DENOMINATOR,
};

/// Outcome of an admin appeal resolution.
#[derive(Clone, Debug)]
pub struct AppealResolution {
    pub id: ProposalId,
    pub evaluator: AccountId,
    pub tier: SlashTier,
    pub upheld: bool,
    /// Original slash amount to apply (upheld only; clamped by the stake
    /// ledger at application time).
    pub slash_amount: u128,
    /// Collateral refunded to the evaluator (rejected appeal).
    pub refunded: u128,
    /// Collateral forfeited to the burn sink (upheld appeal).
    pub forfeited: u128,
}

/// The slash registry — proposals keyed by a monotonically increasing id.
pub struct SlashRegistry {
    next_id: ProposalId,
    pub proposals: HashMap<ProposalId, SlashProposal>,
}

impl SlashRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            proposals: HashMap::new(),
        }
    }

    pub fn get(&self, id: ProposalId) -> Option<&SlashProposal> {
        self.proposals.get(&id)
    }

    /// Create a new proposal against an evaluator.
    ///
    /// `current_stake` is the evaluator's bonded balance right now; the
    /// slash amount is computed from it and frozen into the record. The
    /// engine has already verified the caller holds the oracle capability
    /// and that the evaluator is not banned.
    pub fn propose(
        &mut self,
        evaluator: &AccountId,
        tier: SlashTier,
        evidence_hash: EvidenceHash,
        reason: String,
        current_stake: u128,
        now: Timestamp,
    ) -> Result<&SlashProposal, SlashError> {
        if evidence_hash.is_empty() {
            return Err(SlashError::EmptyEvidence);
        }
        if current_stake == 0 {
            return Err(SlashError::NoActiveStake(evaluator.clone()));
        }
        let slash_amount = current_stake
            .checked_mul(tier.slash_bps())
            .ok_or(SlashError::Overflow)?
            / BPS_DENOMINATOR;

        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(SlashError::Overflow)?;
        let proposal = SlashProposal {
            id,
            evaluator: evaluator.clone(),
            tier,
            evidence_hash,
            reason,
            proposed_at: now,
            slash_amount,
            executed: false,
            appealed: false,
            appeal_stake: 0,
            cancelled: false,
        };
        Ok(self.proposals.entry(id).or_insert(proposal))
    }

    /// Validate an appeal and return the collateral the evaluator must
    /// post: 50% of the original slash amount, independent of any stake
    /// shrinkage since the proposal.
    pub fn check_appeal(
        &self,
        id: ProposalId,
        caller: &AccountId,
        params: &ProtocolParams,
        now: Timestamp,
    ) -> Result<u128, SlashError> {
        let proposal = self
            .proposals
            .get(&id)
            .ok_or(SlashError::ProposalNotFound(id))?;
        if proposal.cancelled {
            return Err(SlashError::ProposalCancelled(id));
        }
        if proposal.executed {
            return Err(SlashError::AlreadyExecuted(id));
        }
        if proposal.appealed {
            return Err(SlashError::AlreadyAppealed(id));
        }
        if &proposal.evaluator != caller {
            return Err(SlashError::NotEvaluator {
                proposal: id,
                caller: caller.clone(),
            });
        }
        if !proposal.appeal_window_open(params.appeal_window_secs, now) {
            return Err(SlashError::AppealWindowClosed(id));
        }
        let appeal_stake = proposal
            .slash_amount
            .checked_mul(params.appeal_stake_bps)
            .ok_or(SlashError::Overflow)?
            / BPS_DENOMINATOR;
        Ok(appeal_stake)
    }

    /// Commit an appeal validated by [`check_appeal`](Self::check_appeal),
    /// after the collateral has been pulled in.
    pub fn apply_appeal(
        &mut self,
        id: ProposalId,
        appeal_stake: u128,
    ) -> Result<&SlashProposal, SlashError> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(SlashError::ProposalNotFound(id))?;
        proposal.appealed = true;
        proposal.appeal_stake = appeal_stake;
        Ok(proposal)
    }

    /// Latch a proposal executed once the appeal window has closed with no
    /// appeal on file. Permissionless: anyone may trigger it. Returns a
    /// snapshot for the engine to apply (clamped stake reduction, burn,
    /// ban on Fraud).
    pub fn execute(
        &mut self,
        id: ProposalId,
        params: &ProtocolParams,
        now: Timestamp,
    ) -> Result<SlashProposal, SlashError> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(SlashError::ProposalNotFound(id))?;
        if proposal.cancelled {
            return Err(SlashError::ProposalCancelled(id));
        }
        if proposal.executed {
            return Err(SlashError::AlreadyExecuted(id));
        }
        if proposal.appealed {
            return Err(SlashError::AlreadyAppealed(id));
        }
        if proposal.appeal_window_open(params.appeal_window_secs, now) {
            return Err(SlashError::AppealWindowOpen {
                proposal: id,
                remaining_secs: proposal
                    .proposed_at
                    .remaining(params.appeal_window_secs, now),
            });
        }
        proposal.executed = true;
        Ok(proposal.clone())
    }

    /// Resolve a pending appeal. Admin-gated by the engine.
    ///
    /// Rejected (`upheld == false`): the slash is cancelled and the
    /// collateral refunded in full. Upheld: the proposal latches executed
    /// and BOTH the original slash amount and the forfeited collateral are
    /// due for burning.
    pub fn resolve_appeal(
        &mut self,
        id: ProposalId,
        upheld: bool,
    ) -> Result<AppealResolution, SlashError> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(SlashError::ProposalNotFound(id))?;
        if proposal.cancelled {
            return Err(SlashError::ProposalCancelled(id));
        }
        if proposal.executed {
            return Err(SlashError::AlreadyExecuted(id));
        }
        if !proposal.appealed {
            return Err(SlashError::NotAppealed(id));
        }

        if upheld {
            proposal.executed = true;
        } else {
            proposal.cancelled = true;
        }
        Ok(AppealResolution {
            id,
            evaluator: proposal.evaluator.clone(),
            tier: proposal.tier,
            upheld,
            slash_amount: if upheld { proposal.slash_amount } else { 0 },
            refunded: if upheld { 0 } else { proposal.appeal_stake },
            forfeited: if upheld { proposal.appeal_stake } else { 0 },
        })
    }
}

impl SlashRegistry {
    /// Persist all proposals to a slash store.
    pub fn save_to_store(&self, store: &dyn bond_store::SlashStore) -> Result<(), SlashError> {
        for (id, proposal) in &self.proposals {
            let bytes =
                bincode::serialize(proposal).map_err(|e| SlashError::Other(e.to_string()))?;
            store
                .put_proposal(*id, &bytes)
                .map_err(|e| SlashError::Other(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore the registry from a slash store. The id counter resumes
    /// past the highest persisted id.
    pub fn load_from_store(store: &dyn bond_store::SlashStore) -> Result<Self, SlashError> {
        let entries = store
            .iter_proposals()
            .map_err(|e| SlashError::Other(e.to_string()))?;
        let mut proposals = HashMap::new();
        let mut max_id = 0;
        for (id, bytes) in entries {
            let proposal: SlashProposal =
                bincode::deserialize(&bytes).map_err(|e| SlashError::Other(e.to_string()))?;
            max_id = max_id.max(id);
            proposals.insert(id, proposal);
        }
        Ok(Self {
            next_id: max_id + 1,
            proposals,
        })
    }
}

impl Default for SlashRegistry {
    fn default() -> Self {
        Self::new()
    }
}
