use proptest::prelude::*;

use bond_stake::{StakeError, StakeLedger};
use bond_types::params::MONTH_SECS;
use bond_types::{AccountId, ProtocolParams, Tier, TierConfig, Timestamp, BPS_DENOMINATOR};

fn prop_params() -> ProtocolParams {
    let mut p = ProtocolParams::bond_defaults();
    p.bronze = TierConfig {
        minimum_stake: 100,
        cooldown_secs: 1_000,
        max_activity_per_period: 10,
    };
    p.silver = TierConfig {
        minimum_stake: 500,
        cooldown_secs: 2_000,
        max_activity_per_period: 50,
    };
    p.gold = TierConfig {
        minimum_stake: 2_000,
        cooldown_secs: 4_000,
        max_activity_per_period: 200,
    };
    p.platinum = TierConfig {
        minimum_stake: 10_000,
        cooldown_secs: 8_000,
        max_activity_per_period: 0,
    };
    p
}

fn prop_account(n: u8) -> AccountId {
    AccountId::new(format!("bond_{:0>8}", n))
}

proptest! {
    /// Bond X, request X, wait exactly lockup + cooldown, finalize:
    /// exactly X comes back and the record deactivates. No yield, ever.
    #[test]
    fn full_roundtrip_returns_exactly_the_bonded_amount(
        amount in 100u128..1_000_000,
        lockup_months in 1u32..=48,
    ) {
        let params = prop_params();
        let mut ledger = StakeLedger::new();
        let owner = prop_account(1);

        ledger.stake(&owner, amount, Tier::Bronze, lockup_months, &params, Timestamp::new(0)).unwrap();
        let lockup_end = lockup_months as u64 * MONTH_SECS;
        ledger.initiate_unstake(&owner, amount, Timestamp::new(lockup_end)).unwrap();
        let cooldown_end = lockup_end + params.bronze.cooldown_secs;
        let done = ledger.finalize_unstake(&owner, &params, Timestamp::new(cooldown_end)).unwrap();

        prop_assert_eq!(done.amount, amount);
        prop_assert_eq!(done.remaining, 0);
        prop_assert!(done.deactivated);
        prop_assert_eq!(ledger.total_staked, 0);
    }

    /// Finalize never succeeds strictly before lockup + cooldown have both
    /// elapsed, wherever the attempt lands in that span.
    #[test]
    fn finalize_never_beats_the_gates(
        amount in 100u128..1_000_000,
        lockup_months in 1u32..=48,
        attempt_offset in 0u64..1_000_000,
    ) {
        let params = prop_params();
        let mut ledger = StakeLedger::new();
        let owner = prop_account(1);

        ledger.stake(&owner, amount, Tier::Bronze, lockup_months, &params, Timestamp::new(0)).unwrap();
        let lockup_end = lockup_months as u64 * MONTH_SECS;
        ledger.initiate_unstake(&owner, amount, Timestamp::new(lockup_end)).unwrap();

        let earliest_exit = lockup_end + params.bronze.cooldown_secs;
        let attempt = lockup_end + attempt_offset;
        let result = ledger.finalize_unstake(&owner, &params, Timestamp::new(attempt));
        if attempt < earliest_exit {
            let cooldown_err = matches!(result, Err(StakeError::CooldownNotElapsed { .. }));
            prop_assert!(cooldown_err);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// A slash reduction never removes more than what is bonded, and the
    /// pending-unstake invariant survives any reduction.
    #[test]
    fn slash_reduction_is_clamped_and_preserves_invariants(
        amount in 100u128..1_000_000,
        unstake_frac_pct in 1u64..=100,
        slash_request in 0u128..2_000_000,
    ) {
        let params = prop_params();
        let mut ledger = StakeLedger::new();
        let owner = prop_account(1);

        ledger.stake(&owner, amount, Tier::Bronze, 1, &params, Timestamp::new(0)).unwrap();
        let unstake_amount = amount * unstake_frac_pct as u128 / 100;
        if unstake_amount > 0 {
            ledger.initiate_unstake(&owner, unstake_amount, Timestamp::new(MONTH_SECS)).unwrap();
        }

        let applied = ledger.reduce_for_slash(&owner, slash_request);
        prop_assert!(applied <= amount);
        prop_assert_eq!(applied, slash_request.min(amount));

        if let Some(stake) = ledger.get(&owner) {
            prop_assert!(stake.unstake_amount <= stake.amount);
            prop_assert_eq!(stake.amount == 0, !stake.active);
        }
        prop_assert_eq!(ledger.total_staked, amount - applied);
    }

    /// Emergency exit conserves value: returned + penalty == bonded, with
    /// the penalty at exactly the configured fraction (integer division).
    #[test]
    fn emergency_exit_split_is_exact(amount in 100u128..1_000_000) {
        let params = prop_params();
        let mut ledger = StakeLedger::new();
        let owner = prop_account(1);

        ledger.stake(&owner, amount, Tier::Bronze, 12, &params, Timestamp::new(0)).unwrap();
        let exit = ledger.emergency_exit(&owner, &params).unwrap();

        prop_assert_eq!(exit.returned + exit.penalty, amount);
        prop_assert_eq!(
            exit.penalty,
            amount * params.emergency_exit_penalty_bps / BPS_DENOMINATOR
        );
        prop_assert_eq!(ledger.total_staked, 0);
    }

    /// `total_staked` always equals the sum of active bonded balances,
    /// across any mix of accounts and partial reductions.
    #[test]
    fn total_staked_matches_sum_of_records(
        amounts in proptest::collection::vec(100u128..100_000, 1..8),
        slash_pct in 0u128..=100,
    ) {
        let params = prop_params();
        let mut ledger = StakeLedger::new();

        for (i, amount) in amounts.iter().enumerate() {
            let owner = prop_account(i as u8 + 1);
            ledger.stake(&owner, *amount, Tier::Bronze, 1, &params, Timestamp::new(0)).unwrap();
        }
        // Slash a fraction off the first account.
        let first = prop_account(1);
        ledger.reduce_for_slash(&first, amounts[0] * slash_pct / 100);

        let sum: u128 = ledger
            .accounts
            .values()
            .filter(|s| s.active)
            .map(|s| s.amount)
            .sum();
        prop_assert_eq!(ledger.total_staked, sum);
    }
}
