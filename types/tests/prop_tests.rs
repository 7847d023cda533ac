use proptest::prelude::*;

use bond_types::{Tier, Timestamp};

proptest! {
    /// A gate that has elapsed stays elapsed as time moves forward.
    #[test]
    fn elapsed_is_monotone(
        start in 0u64..1_000_000,
        duration in 0u64..1_000_000,
        now in 0u64..10_000_000,
        later_offset in 0u64..1_000_000,
    ) {
        let t = Timestamp::new(start);
        if t.has_elapsed(duration, Timestamp::new(now)) {
            prop_assert!(t.has_elapsed(duration, Timestamp::new(now + later_offset)));
        }
    }

    /// `remaining` is zero exactly when the gate has elapsed.
    #[test]
    fn remaining_agrees_with_elapsed(
        start in 0u64..1_000_000,
        duration in 0u64..1_000_000,
        now in 0u64..10_000_000,
    ) {
        let t = Timestamp::new(start);
        let now = Timestamp::new(now);
        prop_assert_eq!(t.remaining(duration, now) == 0, t.has_elapsed(duration, now));
    }

    /// `meets` is a total order consistent with rank.
    #[test]
    fn tier_meets_matches_rank(a in 0usize..4, b in 0usize..4) {
        let ta = Tier::ALL[a];
        let tb = Tier::ALL[b];
        prop_assert_eq!(ta.meets(tb), ta.rank() >= tb.rank());
    }
}
