//! Protocol parameters — the tier table plus every time window and penalty
//! the engine consults.
//!
//! All values live in one flat struct so a deployment tunes the protocol in
//! a single place. Slash percentages are deliberately NOT here: they are
//! fixed constants on `SlashTier`.

use crate::tier::Tier;
use crate::TOKEN_UNIT;
use serde::{Deserialize, Serialize};

/// Seconds in one lockup month (30 days).
pub const MONTH_SECS: u64 = 30 * 24 * 3600;

/// Per-tier configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Minimum bonded amount (raw units) to stake at this tier.
    pub minimum_stake: u128,

    /// Unbonding delay between `initiate_unstake` and `finalize_unstake`.
    pub cooldown_secs: u64,

    /// Activity budget per period granted by this tier. 0 = unlimited.
    pub max_activity_per_period: u32,
}

/// All protocol parameters stored by every node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolParams {
    // ── Tier table ───────────────────────────────────────────────────────
    pub bronze: TierConfig,
    pub silver: TierConfig,
    pub gold: TierConfig,
    pub platinum: TierConfig,

    // ── Lockup ───────────────────────────────────────────────────────────
    /// Minimum lockup duration chosen at stake time, in months.
    pub min_lockup_months: u32,

    /// Maximum lockup duration chosen at stake time, in months.
    pub max_lockup_months: u32,

    // ── Slashing ─────────────────────────────────────────────────────────
    /// How long after a proposal the named evaluator may file an appeal.
    /// Execution is blocked until this window has closed.
    pub appeal_window_secs: u64,

    /// Appeal collateral as a fraction of the ORIGINAL slash amount
    /// (basis points). Forfeited and burned if the appeal is rejected.
    pub appeal_stake_bps: u128,

    // ── Emergency exit ───────────────────────────────────────────────────
    /// Fraction of the stake burned when bypassing lockup and cooldown
    /// (basis points).
    pub emergency_exit_penalty_bps: u128,
}

impl ProtocolParams {
    /// BOND defaults — the intended configuration for the live network.
    pub fn bond_defaults() -> Self {
        Self {
            bronze: TierConfig {
                minimum_stake: 100 * TOKEN_UNIT,
                cooldown_secs: 3 * 24 * 3600, // 3 days
                max_activity_per_period: 10,
            },
            silver: TierConfig {
                minimum_stake: 500 * TOKEN_UNIT,
                cooldown_secs: 7 * 24 * 3600, // 7 days
                max_activity_per_period: 50,
            },
            gold: TierConfig {
                minimum_stake: 2_000 * TOKEN_UNIT,
                cooldown_secs: 14 * 24 * 3600, // 14 days
                max_activity_per_period: 200,
            },
            platinum: TierConfig {
                minimum_stake: 10_000 * TOKEN_UNIT,
                cooldown_secs: 21 * 24 * 3600, // 21 days
                max_activity_per_period: 0, // unlimited
            },

            min_lockup_months: 1,
            max_lockup_months: 48,

            appeal_window_secs: 48 * 3600, // 48 hours
            appeal_stake_bps: 5_000,       // 50%

            emergency_exit_penalty_bps: 5_000, // 50%
        }
    }

    /// Look up the configuration for a tier.
    pub fn tier_config(&self, tier: Tier) -> &TierConfig {
        match tier {
            Tier::Bronze => &self.bronze,
            Tier::Silver => &self.silver,
            Tier::Gold => &self.gold,
            Tier::Platinum => &self.platinum,
        }
    }

    /// Mutable tier configuration lookup (admin updates).
    pub fn tier_config_mut(&mut self, tier: Tier) -> &mut TierConfig {
        match tier {
            Tier::Bronze => &mut self.bronze,
            Tier::Silver => &mut self.silver,
            Tier::Gold => &mut self.gold,
            Tier::Platinum => &mut self.platinum,
        }
    }

    /// Whether a lockup choice (in months) is within protocol bounds.
    pub fn lockup_in_bounds(&self, months: u32) -> bool {
        months >= self.min_lockup_months && months <= self.max_lockup_months
    }
}

/// Default is the BOND configuration.
impl Default for ProtocolParams {
    fn default() -> Self {
        Self::bond_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_minimums_are_strictly_increasing() {
        let p = ProtocolParams::bond_defaults();
        for pair in Tier::ALL.windows(2) {
            assert!(
                p.tier_config(pair[0]).minimum_stake < p.tier_config(pair[1]).minimum_stake,
                "{} minimum must be below {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_lockup_bounds() {
        let p = ProtocolParams::bond_defaults();
        assert!(!p.lockup_in_bounds(0));
        assert!(p.lockup_in_bounds(1));
        assert!(p.lockup_in_bounds(48));
        assert!(!p.lockup_in_bounds(49));
    }

    #[test]
    fn test_platinum_is_unlimited_activity() {
        let p = ProtocolParams::bond_defaults();
        assert_eq!(p.platinum.max_activity_per_period, 0);
    }
}
