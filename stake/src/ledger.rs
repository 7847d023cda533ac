//! Core stake ledger — owns every stake record and all bonded-balance
//! accounting.
//!
//! Operations that PULL funds in (staking) are split into a `check_` /
//! `apply_` pair so the orchestrating engine can validate, perform the
//! token transfer, and only then commit state. Operations that PAY funds
//! out mutate state first and leave the outbound transfer to the caller
//! (checks-effects-interactions).

use std::collections::HashMap;

use crate::error::StakeError;
use crate::record::Stake;
use bond_types::params::MONTH_SECS;
use bond_types::{AccountId, ProtocolParams, Tier, Timestamp};

/// Result of finalizing an unstake request.
#[derive(Clone, Debug)]
pub struct FinalizedUnstake {
    /// Amount released back to the owner.
    pub amount: u128,
    /// Bonded balance left after the withdrawal.
    pub remaining: u128,
    /// Whether the record was deactivated (balance reached zero).
    pub deactivated: bool,
}

/// Result of an emergency exit.
#[derive(Clone, Debug)]
pub struct EmergencyExit {
    /// Amount returned to the owner after the penalty.
    pub returned: u128,
    /// Penalty destined for the burn sink.
    pub penalty: u128,
}

/// The stake ledger — one record per account, plus the global bonded total.
pub struct StakeLedger {
    pub accounts: HashMap<AccountId, Stake>,
    /// Sum of all bonded balances. Maintained incrementally on every
    /// mutation; the load path recomputes it from the records.
    pub total_staked: u128,
}

impl StakeLedger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            total_staked: 0,
        }
    }

    /// Get a stake record, active or not.
    pub fn get(&self, owner: &AccountId) -> Option<&Stake> {
        self.accounts.get(owner)
    }

    /// Get an account's active stake record.
    pub fn active(&self, owner: &AccountId) -> Option<&Stake> {
        self.accounts.get(owner).filter(|s| s.active)
    }

    /// Currently bonded balance for an account (zero if inactive).
    pub fn bonded_amount(&self, owner: &AccountId) -> u128 {
        self.active(owner).map_or(0, |s| s.amount)
    }

    /// Validate a stake request without mutating anything.
    ///
    /// The engine calls this, then pulls the tokens in, then commits via
    /// [`apply_stake`](Self::apply_stake).
    pub fn check_stake(
        &self,
        owner: &AccountId,
        amount: u128,
        tier: Tier,
        lockup_months: u32,
        params: &ProtocolParams,
    ) -> Result<(), StakeError> {
        if amount == 0 {
            return Err(StakeError::ZeroAmount);
        }
        if !params.lockup_in_bounds(lockup_months) {
            return Err(StakeError::InvalidLockup {
                months: lockup_months,
            });
        }
        if self.active(owner).is_some() {
            return Err(StakeError::AlreadyStaked(owner.clone()));
        }
        let minimum = params.tier_config(tier).minimum_stake;
        if amount < minimum {
            return Err(StakeError::BelowTierMinimum {
                tier,
                minimum,
                provided: amount,
            });
        }
        if self.total_staked.checked_add(amount).is_none() {
            return Err(StakeError::Overflow);
        }
        Ok(())
    }

    /// Commit a stake validated by [`check_stake`](Self::check_stake).
    /// Replaces any deactivated leftover record for the account.
    pub fn apply_stake(
        &mut self,
        owner: &AccountId,
        amount: u128,
        tier: Tier,
        lockup_months: u32,
        now: Timestamp,
    ) -> Result<Stake, StakeError> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakeError::Overflow)?;
        let stake = Stake {
            owner: owner.clone(),
            amount,
            tier,
            staked_at: now,
            lockup_secs: lockup_months as u64 * MONTH_SECS,
            unstake_requested_at: None,
            unstake_amount: 0,
            active: true,
        };
        self.accounts.insert(owner.clone(), stake.clone());
        Ok(stake)
    }

    /// Validate-and-commit in one step, for callers that move no tokens
    /// (tests and pure-state consumers).
    pub fn stake(
        &mut self,
        owner: &AccountId,
        amount: u128,
        tier: Tier,
        lockup_months: u32,
        params: &ProtocolParams,
        now: Timestamp,
    ) -> Result<Stake, StakeError> {
        self.check_stake(owner, amount, tier, lockup_months, params)?;
        self.apply_stake(owner, amount, tier, lockup_months, now)
    }

    /// Record an unstake request and start the unbonding clock.
    ///
    /// No funds move until [`finalize_unstake`](Self::finalize_unstake).
    pub fn initiate_unstake(
        &mut self,
        owner: &AccountId,
        amount: u128,
        now: Timestamp,
    ) -> Result<&Stake, StakeError> {
        let stake = self
            .accounts
            .get_mut(owner)
            .filter(|s| s.active)
            .ok_or_else(|| StakeError::NoActiveStake(owner.clone()))?;
        if amount == 0 {
            return Err(StakeError::ZeroAmount);
        }
        if amount > stake.amount {
            return Err(StakeError::ExceedsStake {
                requested: amount,
                available: stake.amount,
            });
        }
        if stake.has_pending_unstake() {
            return Err(StakeError::UnstakePending(owner.clone()));
        }
        if !stake.lockup_elapsed(now) {
            return Err(StakeError::LockupNotElapsed {
                remaining_secs: stake.staked_at.remaining(stake.lockup_secs, now),
            });
        }
        stake.unstake_requested_at = Some(now);
        stake.unstake_amount = amount;
        Ok(stake)
    }

    /// Clear a pending unstake request. Returns the cancelled amount.
    pub fn cancel_unstake(&mut self, owner: &AccountId) -> Result<u128, StakeError> {
        let stake = self
            .accounts
            .get_mut(owner)
            .filter(|s| s.active)
            .ok_or_else(|| StakeError::NoActiveStake(owner.clone()))?;
        if !stake.has_pending_unstake() {
            return Err(StakeError::NoUnstakePending(owner.clone()));
        }
        let cancelled = stake.unstake_amount;
        stake.unstake_requested_at = None;
        stake.unstake_amount = 0;
        Ok(cancelled)
    }

    /// Complete a pending unstake request once the tier's cooldown has
    /// elapsed. Mutates the record; the caller pays the released amount
    /// out afterwards.
    pub fn finalize_unstake(
        &mut self,
        owner: &AccountId,
        params: &ProtocolParams,
        now: Timestamp,
    ) -> Result<FinalizedUnstake, StakeError> {
        let stake = self
            .accounts
            .get_mut(owner)
            .filter(|s| s.active)
            .ok_or_else(|| StakeError::NoActiveStake(owner.clone()))?;
        let requested_at = stake
            .unstake_requested_at
            .ok_or_else(|| StakeError::NoUnstakePending(owner.clone()))?;
        let cooldown = params.tier_config(stake.tier).cooldown_secs;
        if !requested_at.has_elapsed(cooldown, now) {
            return Err(StakeError::CooldownNotElapsed {
                remaining_secs: requested_at.remaining(cooldown, now),
            });
        }

        let amount = stake.unstake_amount;
        stake.amount = stake
            .amount
            .checked_sub(amount)
            .ok_or(StakeError::Overflow)?;
        stake.unstake_requested_at = None;
        stake.unstake_amount = 0;
        let remaining = stake.amount;
        let deactivated = remaining == 0;
        if deactivated {
            stake.active = false;
        }
        self.total_staked = self.total_staked.saturating_sub(amount);
        Ok(FinalizedUnstake {
            amount,
            remaining,
            deactivated,
        })
    }

    /// Immediate withdrawal bypassing lockup and cooldown, at the fixed
    /// penalty from `params`. The penalty is burned by the caller; the
    /// remainder is paid back out. Any pending unstake request dies with
    /// the record.
    pub fn emergency_exit(
        &mut self,
        owner: &AccountId,
        params: &ProtocolParams,
    ) -> Result<EmergencyExit, StakeError> {
        let stake = self
            .accounts
            .get_mut(owner)
            .filter(|s| s.active)
            .ok_or_else(|| StakeError::NoActiveStake(owner.clone()))?;
        let amount = stake.amount;
        let penalty = amount
            .checked_mul(params.emergency_exit_penalty_bps)
            .ok_or(StakeError::Overflow)?
            / bond_types::BPS_DENOMINATOR;
        let returned = amount - penalty;

        stake.amount = 0;
        stake.unstake_requested_at = None;
        stake.unstake_amount = 0;
        stake.active = false;
        self.total_staked = self.total_staked.saturating_sub(amount);
        Ok(EmergencyExit { returned, penalty })
    }

    /// Remove up to `requested` from an account's bonded stake for a slash
    /// execution. Clamps to whatever remains: a stake that shrank (or
    /// fully exited) since the proposal is never an error here. Returns
    /// the amount actually removed.
    pub fn reduce_for_slash(&mut self, owner: &AccountId, requested: u128) -> u128 {
        let stake = match self.accounts.get_mut(owner).filter(|s| s.active) {
            Some(s) => s,
            None => return 0,
        };
        let applied = requested.min(stake.amount);
        stake.amount -= applied;
        // Keep the unstake invariant: a pending request can never exceed
        // what is still bonded.
        if stake.unstake_amount > stake.amount {
            stake.unstake_amount = stake.amount;
        }
        if stake.amount == 0 {
            stake.active = false;
            stake.unstake_requested_at = None;
            stake.unstake_amount = 0;
        }
        self.total_staked = self.total_staked.saturating_sub(applied);
        applied
    }
}

impl StakeLedger {
    /// Persist all records to a stake store.
    pub fn save_to_store(&self, store: &dyn bond_store::StakeStore) -> Result<(), StakeError> {
        for (owner, stake) in &self.accounts {
            let bytes =
                bincode::serialize(stake).map_err(|e| StakeError::Other(e.to_string()))?;
            store
                .put_stake(owner, &bytes)
                .map_err(|e| StakeError::Other(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore the ledger from a stake store. `total_staked` is recomputed
    /// from the records rather than trusted from metadata.
    pub fn load_from_store(store: &dyn bond_store::StakeStore) -> Result<Self, StakeError> {
        let entries = store
            .iter_stakes()
            .map_err(|e| StakeError::Other(e.to_string()))?;
        let mut accounts = HashMap::new();
        let mut total_staked: u128 = 0;
        for (owner, bytes) in entries {
            let stake: Stake =
                bincode::deserialize(&bytes).map_err(|e| StakeError::Other(e.to_string()))?;
            if stake.active {
                total_staked = total_staked
                    .checked_add(stake.amount)
                    .ok_or(StakeError::Overflow)?;
            }
            accounts.insert(owner, stake);
        }
        Ok(Self {
            accounts,
            total_staked,
        })
    }
}

impl Default for StakeLedger {
    fn default() -> Self {
        Self::new()
    }
}
