//! Capacity tiers and slash severity tiers.
//!
//! Both enums carry an ordered rank so comparisons are explicit variant
//! logic, never raw integer indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A capacity tier unlocked by meeting a stake threshold.
///
/// Higher tiers unlock more protocol activity per period. Ordering is by
/// `rank()`: Bronze < Silver < Gold < Platinum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// All tiers in ascending rank order.
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Ordered rank, Bronze lowest.
    pub fn rank(&self) -> u8 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 1,
            Tier::Gold => 2,
            Tier::Platinum => 3,
        }
    }

    /// Whether this tier satisfies a capacity requirement.
    pub fn meets(&self, required: Tier) -> bool {
        self.rank() >= required.rank()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        };
        write!(f, "{}", name)
    }
}

/// Severity of a slash proposal. The percentage of the evaluator's stake
/// removed on execution is fixed per tier, not a governable parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlashTier {
    /// 10% — minor infraction.
    Minor,
    /// 30% — repeated or moderate infraction.
    Moderate,
    /// 60% — major infraction.
    Major,
    /// 100% — fraud; also permanently bans the account.
    Fraud,
}

impl SlashTier {
    /// Fraction of the current stake removed, in basis points.
    pub fn slash_bps(&self) -> u128 {
        match self {
            SlashTier::Minor => 1_000,
            SlashTier::Moderate => 3_000,
            SlashTier::Major => 6_000,
            SlashTier::Fraud => 10_000,
        }
    }

    /// Fraud executions additionally ban the evaluator for good.
    pub fn is_fraud(&self) -> bool {
        matches!(self, SlashTier::Fraud)
    }
}

impl fmt::Display for SlashTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlashTier::Minor => "Minor",
            SlashTier::Moderate => "Moderate",
            SlashTier::Major => "Major",
            SlashTier::Fraud => "Fraud",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ranks_are_strictly_increasing() {
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_meets_is_rank_comparison() {
        assert!(Tier::Gold.meets(Tier::Bronze));
        assert!(Tier::Gold.meets(Tier::Gold));
        assert!(!Tier::Silver.meets(Tier::Platinum));
    }

    #[test]
    fn test_slash_percentages() {
        assert_eq!(SlashTier::Minor.slash_bps(), 1_000);
        assert_eq!(SlashTier::Moderate.slash_bps(), 3_000);
        assert_eq!(SlashTier::Major.slash_bps(), 6_000);
        assert_eq!(SlashTier::Fraud.slash_bps(), 10_000);
        assert!(SlashTier::Fraud.is_fraud());
        assert!(!SlashTier::Major.is_fraud());
    }
}
