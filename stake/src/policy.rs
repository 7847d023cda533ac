//! Tier policy — pure lookups over the tier table.
//!
//! No side effects: `tier_of` is an ordered threshold comparison and
//! `has_capacity` a rank comparison against an account's active stake.

use crate::ledger::StakeLedger;
use bond_types::{AccountId, ProtocolParams, Tier};

/// The highest tier whose minimum stake `amount` meets, if any.
pub fn tier_of(amount: u128, params: &ProtocolParams) -> Option<Tier> {
    Tier::ALL
        .iter()
        .rev()
        .find(|t| amount >= params.tier_config(**t).minimum_stake)
        .copied()
}

/// Whether an account's active stake satisfies a capacity requirement.
/// Inactive (or never-staked) accounts have no capacity at all.
pub fn has_capacity(ledger: &StakeLedger, account: &AccountId, required: Tier) -> bool {
    ledger
        .active(account)
        .map_or(false, |s| s.tier.meets(required))
}

/// The activity budget granted by an account's tier, if it has an active
/// stake. `Some(0)` means unlimited.
pub fn activity_limit(
    ledger: &StakeLedger,
    account: &AccountId,
    params: &ProtocolParams,
) -> Option<u32> {
    ledger
        .active(account)
        .map(|s| params.tier_config(s.tier).max_activity_per_period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bond_types::{TierConfig, Timestamp};

    fn test_account(n: u8) -> AccountId {
        AccountId::new(format!("bond_{:0>8}", n))
    }

    fn test_params() -> ProtocolParams {
        let mut p = ProtocolParams::bond_defaults();
        p.bronze = TierConfig { minimum_stake: 100, cooldown_secs: 1_000, max_activity_per_period: 10 };
        p.silver = TierConfig { minimum_stake: 500, cooldown_secs: 2_000, max_activity_per_period: 50 };
        p.gold = TierConfig { minimum_stake: 2_000, cooldown_secs: 4_000, max_activity_per_period: 200 };
        p.platinum = TierConfig { minimum_stake: 10_000, cooldown_secs: 8_000, max_activity_per_period: 0 };
        p
    }

    #[test]
    fn test_tier_of_picks_highest_qualifying() {
        let params = test_params();
        assert_eq!(tier_of(99, &params), None);
        assert_eq!(tier_of(100, &params), Some(Tier::Bronze));
        assert_eq!(tier_of(499, &params), Some(Tier::Bronze));
        assert_eq!(tier_of(500, &params), Some(Tier::Silver));
        assert_eq!(tier_of(2_000, &params), Some(Tier::Gold));
        assert_eq!(tier_of(1_000_000, &params), Some(Tier::Platinum));
    }

    #[test]
    fn test_has_capacity_rank_comparison() {
        let params = test_params();
        let mut ledger = StakeLedger::new();
        let account = test_account(1);
        ledger
            .stake(&account, 2_000, Tier::Gold, 12, &params, Timestamp::new(0))
            .unwrap();

        assert!(has_capacity(&ledger, &account, Tier::Bronze));
        assert!(has_capacity(&ledger, &account, Tier::Gold));
        assert!(!has_capacity(&ledger, &account, Tier::Platinum));
        // Unknown account has no capacity.
        assert!(!has_capacity(&ledger, &test_account(2), Tier::Bronze));
    }

    #[test]
    fn test_capacity_lost_after_exit() {
        let params = test_params();
        let mut ledger = StakeLedger::new();
        let account = test_account(1);
        ledger
            .stake(&account, 500, Tier::Silver, 1, &params, Timestamp::new(0))
            .unwrap();
        assert!(has_capacity(&ledger, &account, Tier::Silver));

        ledger.emergency_exit(&account, &params).unwrap();
        assert!(!has_capacity(&ledger, &account, Tier::Bronze));
        assert_eq!(activity_limit(&ledger, &account, &params), None);
    }

    #[test]
    fn test_activity_limit_follows_tier() {
        let params = test_params();
        let mut ledger = StakeLedger::new();
        let silver = test_account(1);
        let platinum = test_account(2);
        ledger
            .stake(&silver, 500, Tier::Silver, 1, &params, Timestamp::new(0))
            .unwrap();
        ledger
            .stake(&platinum, 10_000, Tier::Platinum, 1, &params, Timestamp::new(0))
            .unwrap();

        assert_eq!(activity_limit(&ledger, &silver, &params), Some(50));
        // Zero encodes "unlimited".
        assert_eq!(activity_limit(&ledger, &platinum, &params), Some(0));
    }
}
