//! The BOND engine — every public operation of the subsystem.
//!
//! Call discipline, in order, for every operation:
//! 1. acquire the reentrancy guard (held to the end of the call)
//! 2. capability / ban checks
//! 3. validate against component state (no mutation on failure)
//! 4. pull inbound tokens, then commit state; or commit state, then pay
//!    outbound tokens (interactions never precede effects on the way out)
//! 5. journal the event
//!
//! The token ledger is passed per call rather than owned, mirroring how
//! the component engines take their stores: the engine never assumes a
//! particular custody backend.

use bond_slash::{BanRegistry, SlashRegistry};
use bond_stake::{policy, BurnSink, StakeLedger};
use bond_token::TokenLedger;
use bond_types::{
    AccountId, EvidenceHash, LedgerEvent, ProposalId, ProtocolParams, SlashTier, Tier, TierConfig,
    Timestamp,
};
use bond_utils::format_duration;

use crate::auth::Authorities;
use crate::error::EngineError;
use crate::guard::ReentrancyGuard;

const META_TOTAL_BURNED: &[u8] = b"total_burned";
const META_PARAMS: &[u8] = b"params";

pub struct BondEngine {
    pub params: ProtocolParams,
    pub stakes: StakeLedger,
    pub slashes: SlashRegistry,
    pub bans: BanRegistry,
    pub sink: BurnSink,
    authorities: Authorities,
    guard: ReentrancyGuard,
    events: Vec<LedgerEvent>,
}

impl BondEngine {
    pub fn new(params: ProtocolParams, authorities: Authorities) -> Self {
        Self {
            params,
            stakes: StakeLedger::new(),
            slashes: SlashRegistry::new(),
            bans: BanRegistry::new(),
            sink: BurnSink::new(),
            authorities,
            guard: ReentrancyGuard::new(),
            events: Vec::new(),
        }
    }

    // ── Staking ──────────────────────────────────────────────────────────

    /// Bond `amount` at `tier` for `lockup_months`. Pulls the tokens from
    /// the caller into the subsystem pool.
    pub fn stake(
        &mut self,
        ledger: &mut dyn TokenLedger,
        caller: &AccountId,
        amount: u128,
        tier: Tier,
        lockup_months: u32,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        if self.bans.is_banned(caller) {
            return Err(EngineError::BannedAccount(caller.clone()));
        }
        self.stakes
            .check_stake(caller, amount, tier, lockup_months, &self.params)?;
        ledger.transfer_in(caller, amount)?;
        let stake = self
            .stakes
            .apply_stake(caller, amount, tier, lockup_months, now)?;
        let lockup_secs = stake.lockup_secs;
        tracing::info!(
            account = %caller,
            amount,
            tier = %tier,
            lockup = %format_duration(lockup_secs),
            "stake bonded"
        );
        self.events.push(LedgerEvent::Staked {
            account: caller.clone(),
            amount,
            tier,
            lockup_secs,
            timestamp: now,
        });
        Ok(())
    }

    /// Start the unbonding clock for `amount`. No funds move yet.
    pub fn initiate_unstake(
        &mut self,
        caller: &AccountId,
        amount: u128,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        let stake = self.stakes.initiate_unstake(caller, amount, now)?;
        let cooldown = self.params.tier_config(stake.tier).cooldown_secs;
        tracing::info!(
            account = %caller,
            amount,
            cooldown = %format_duration(cooldown),
            "unstake initiated"
        );
        self.events.push(LedgerEvent::UnstakeInitiated {
            account: caller.clone(),
            amount,
            timestamp: now,
        });
        Ok(())
    }

    /// Withdraw a pending unstake request.
    pub fn cancel_unstake(&mut self, caller: &AccountId, now: Timestamp) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        let cancelled = self.stakes.cancel_unstake(caller)?;
        self.events.push(LedgerEvent::UnstakeCancelled {
            account: caller.clone(),
            amount: cancelled,
            timestamp: now,
        });
        Ok(())
    }

    /// Complete a pending unstake once the tier cooldown has elapsed and
    /// pay the released amount back to the owner.
    pub fn finalize_unstake(
        &mut self,
        ledger: &mut dyn TokenLedger,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        let done = self.stakes.finalize_unstake(caller, &self.params, now)?;
        // State is final; the outbound transfer comes last.
        ledger.transfer_out(caller, done.amount)?;
        tracing::info!(account = %caller, amount = done.amount, remaining = done.remaining, "unstake finalized");
        self.events.push(LedgerEvent::Unstaked {
            account: caller.clone(),
            amount: done.amount,
            remaining: done.remaining,
            timestamp: now,
        });
        Ok(())
    }

    /// Immediate exit at the fixed penalty. The penalty is burned; the
    /// remainder is paid back to the owner.
    pub fn emergency_exit(
        &mut self,
        ledger: &mut dyn TokenLedger,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        let exit = self.stakes.emergency_exit(caller, &self.params)?;
        self.sink.receive(exit.penalty)?;
        ledger.transfer_out(caller, exit.returned)?;
        tracing::warn!(
            account = %caller,
            returned = exit.returned,
            burned = exit.penalty,
            "emergency exit"
        );
        self.events.push(LedgerEvent::EmergencyExited {
            account: caller.clone(),
            returned: exit.returned,
            penalty_burned: exit.penalty,
            timestamp: now,
        });
        Ok(())
    }

    // ── Slashing ─────────────────────────────────────────────────────────

    /// Propose a slash against an evaluator. Oracle capability required.
    pub fn propose_slash(
        &mut self,
        caller: &AccountId,
        evaluator: &AccountId,
        tier: SlashTier,
        evidence_hash: EvidenceHash,
        reason: impl Into<String>,
        now: Timestamp,
    ) -> Result<ProposalId, EngineError> {
        let _guard = self.guard.enter()?;
        self.authorities.require_oracle(caller)?;
        if self.bans.is_banned(evaluator) {
            return Err(EngineError::BannedAccount(evaluator.clone()));
        }
        let current_stake = self.stakes.bonded_amount(evaluator);
        let proposal = self.slashes.propose(
            evaluator,
            tier,
            evidence_hash,
            reason.into(),
            current_stake,
            now,
        )?;
        let (id, slash_amount) = (proposal.id, proposal.slash_amount);
        tracing::info!(
            proposal = id,
            evaluator = %evaluator,
            tier = %tier,
            slash_amount,
            "slash proposed"
        );
        self.events.push(LedgerEvent::SlashProposed {
            id,
            evaluator: evaluator.clone(),
            tier,
            slash_amount,
            evidence_hash,
            timestamp: now,
        });
        Ok(id)
    }

    /// Contest a proposal. Only the named evaluator, only while the appeal
    /// window is open; posts collateral worth 50% of the original slash
    /// amount.
    pub fn appeal_slash(
        &mut self,
        ledger: &mut dyn TokenLedger,
        caller: &AccountId,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        let appeal_stake = self.slashes.check_appeal(id, caller, &self.params, now)?;
        ledger.transfer_in(caller, appeal_stake)?;
        self.slashes.apply_appeal(id, appeal_stake)?;
        tracing::info!(proposal = id, evaluator = %caller, appeal_stake, "slash appealed");
        self.events.push(LedgerEvent::SlashAppealed {
            id,
            evaluator: caller.clone(),
            appeal_stake,
            timestamp: now,
        });
        Ok(())
    }

    /// Execute an unappealed proposal once the window has closed.
    /// Permissionless: `caller` is journaled but unrestricted.
    pub fn execute_slash(
        &mut self,
        caller: &AccountId,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<u128, EngineError> {
        let _guard = self.guard.enter()?;
        let snapshot = self.slashes.execute(id, &self.params, now)?;
        // Clamp to whatever the evaluator still has bonded.
        let applied = self
            .stakes
            .reduce_for_slash(&snapshot.evaluator, snapshot.slash_amount);
        self.sink.receive(applied)?;
        tracing::info!(
            proposal = id,
            evaluator = %snapshot.evaluator,
            triggered_by = %caller,
            proposed_amount = snapshot.slash_amount,
            applied,
            "slash executed"
        );
        self.events.push(LedgerEvent::SlashExecuted {
            id,
            evaluator: snapshot.evaluator.clone(),
            applied_amount: applied,
            timestamp: now,
        });
        if snapshot.tier.is_fraud() {
            ban_evaluator(&mut self.bans, &mut self.events, &snapshot.evaluator, id, now);
        }
        Ok(applied)
    }

    /// Resolve a pending appeal. Admin capability required.
    ///
    /// Rejected: collateral refunded in full, slash cancelled. Upheld:
    /// slash applied (clamped) and the collateral forfeited, both burned.
    pub fn resolve_appeal(
        &mut self,
        ledger: &mut dyn TokenLedger,
        caller: &AccountId,
        id: ProposalId,
        upheld: bool,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        self.authorities.require_admin(caller)?;
        let resolution = self.slashes.resolve_appeal(id, upheld)?;

        if upheld {
            let applied = self
                .stakes
                .reduce_for_slash(&resolution.evaluator, resolution.slash_amount);
            self.sink.receive(applied)?;
            self.sink.receive(resolution.forfeited)?;
            tracing::info!(
                proposal = id,
                evaluator = %resolution.evaluator,
                applied,
                forfeited = resolution.forfeited,
                "appeal rejected on the merits; slash executed"
            );
            self.events.push(LedgerEvent::SlashExecuted {
                id,
                evaluator: resolution.evaluator.clone(),
                applied_amount: applied,
                timestamp: now,
            });
            self.events.push(LedgerEvent::AppealResolved {
                id,
                evaluator: resolution.evaluator.clone(),
                upheld: true,
                refunded: 0,
                forfeited: resolution.forfeited,
                timestamp: now,
            });
            if resolution.tier.is_fraud() {
                ban_evaluator(
                    &mut self.bans,
                    &mut self.events,
                    &resolution.evaluator,
                    id,
                    now,
                );
            }
        } else {
            // State is final (proposal cancelled); refund last.
            ledger.transfer_out(&resolution.evaluator, resolution.refunded)?;
            tracing::info!(
                proposal = id,
                evaluator = %resolution.evaluator,
                refunded = resolution.refunded,
                "appeal succeeded; slash cancelled"
            );
            self.events.push(LedgerEvent::AppealResolved {
                id,
                evaluator: resolution.evaluator.clone(),
                upheld: false,
                refunded: resolution.refunded,
                forfeited: 0,
                timestamp: now,
            });
        }
        Ok(())
    }


    // ── Administration ───────────────────────────────────────────────────

    /// Update a tier's configuration. Admin capability required.
    pub fn update_tier_config(
        &mut self,
        caller: &AccountId,
        tier: Tier,
        config: TierConfig,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let _guard = self.guard.enter()?;
        self.authorities.require_admin(caller)?;
        *self.params.tier_config_mut(tier) = config;
        self.events.push(LedgerEvent::TierConfigUpdated {
            tier,
            minimum_stake: config.minimum_stake,
            cooldown_secs: config.cooldown_secs,
            timestamp: now,
        });
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Whether an account currently satisfies a capacity requirement.
    /// Banned accounts never have capacity, whatever they still hold.
    pub fn has_capacity(&self, account: &AccountId, required: Tier) -> bool {
        !self.bans.is_banned(account) && policy::has_capacity(&self.stakes, account, required)
    }

    /// The highest tier a hypothetical stake of `amount` would qualify for.
    pub fn tier_of(&self, amount: u128) -> Option<Tier> {
        policy::tier_of(amount, &self.params)
    }

    pub fn total_staked(&self) -> u128 {
        self.stakes.total_staked
    }

    pub fn total_burned(&self) -> u128 {
        self.sink.total_burned()
    }

    /// Drain the journal of everything emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Latch a permanent ban and journal it. Takes the fields it touches so it
/// can run while an operation's guard token is still alive.
fn ban_evaluator(
    bans: &mut BanRegistry,
    events: &mut Vec<LedgerEvent>,
    evaluator: &AccountId,
    proposal: ProposalId,
    now: Timestamp,
) {
    bans.ban(evaluator);
    tracing::warn!(evaluator = %evaluator, proposal, "evaluator permanently banned");
    events.push(LedgerEvent::EvaluatorBanned {
        account: evaluator.clone(),
        proposal,
        timestamp: now,
    });
}

impl BondEngine {
    /// Persist the full engine state.
    pub fn save_to_store(
        &self,
        stake_store: &dyn bond_store::StakeStore,
        slash_store: &dyn bond_store::SlashStore,
        meta_store: &dyn bond_store::MetaStore,
    ) -> Result<(), EngineError> {
        self.stakes
            .save_to_store(stake_store)
            .map_err(|e| EngineError::Store(e.to_string()))?;
        self.slashes
            .save_to_store(slash_store)
            .map_err(|e| EngineError::Store(e.to_string()))?;
        self.bans
            .save_to_store(slash_store)
            .map_err(|e| EngineError::Store(e.to_string()))?;
        meta_store
            .put_meta(META_TOTAL_BURNED, &self.sink.total_burned().to_be_bytes())
            .map_err(|e| EngineError::Store(e.to_string()))?;
        let params_bytes =
            bincode::serialize(&self.params).map_err(|e| EngineError::Store(e.to_string()))?;
        meta_store
            .put_meta(META_PARAMS, &params_bytes)
            .map_err(|e| EngineError::Store(e.to_string()))?;
        Ok(())
    }

    /// Restore an engine from stores. Missing metadata falls back to
    /// defaults (fresh deployment).
    pub fn load_from_store(
        stake_store: &dyn bond_store::StakeStore,
        slash_store: &dyn bond_store::SlashStore,
        meta_store: &dyn bond_store::MetaStore,
        authorities: Authorities,
    ) -> Result<Self, EngineError> {
        let stakes = StakeLedger::load_from_store(stake_store)
            .map_err(|e| EngineError::Store(e.to_string()))?;
        let slashes = SlashRegistry::load_from_store(slash_store)
            .map_err(|e| EngineError::Store(e.to_string()))?;
        let bans = BanRegistry::load_from_store(slash_store)
            .map_err(|e| EngineError::Store(e.to_string()))?;

        let sink = match meta_store
            .get_meta(META_TOTAL_BURNED)
            .map_err(|e| EngineError::Store(e.to_string()))?
        {
            Some(bytes) if bytes.len() >= 16 => {
                let arr: [u8; 16] = bytes[..16]
                    .try_into()
                    .map_err(|_| EngineError::Store("bad total_burned encoding".into()))?;
                BurnSink::with_total(u128::from_be_bytes(arr))
            }
            _ => BurnSink::new(),
        };
        let params = match meta_store
            .get_meta(META_PARAMS)
            .map_err(|e| EngineError::Store(e.to_string()))?
        {
            Some(bytes) => {
                bincode::deserialize(&bytes).map_err(|e| EngineError::Store(e.to_string()))?
            }
            None => ProtocolParams::bond_defaults(),
        };

        Ok(Self {
            params,
            stakes,
            slashes,
            bans,
            sink,
            authorities,
            guard: ReentrancyGuard::new(),
            events: Vec::new(),
        })
    }
}
