//! The burn sink — terminal destination for all destroyed value.

use crate::error::StakeError;
use serde::{Deserialize, Serialize};

/// Accumulates every burned token: emergency-exit penalties, executed
/// slashes, and forfeited appeal stakes. Value routed here is gone for
/// good. There is no withdrawal, redistribution, or reset; the counter
/// only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnSink {
    total_burned: u128,
}

impl BurnSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a sink from a persisted counter value.
    pub fn with_total(total_burned: u128) -> Self {
        Self { total_burned }
    }

    /// Receive burned value. The only mutation this type exposes.
    pub fn receive(&mut self, amount: u128) -> Result<(), StakeError> {
        self.total_burned = self
            .total_burned
            .checked_add(amount)
            .ok_or(StakeError::Overflow)?;
        Ok(())
    }

    /// Running total of everything ever burned.
    pub fn total_burned(&self) -> u128 {
        self.total_burned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_accumulates_monotonically() {
        let mut sink = BurnSink::new();
        assert_eq!(sink.total_burned(), 0);
        sink.receive(600).unwrap();
        sink.receive(0).unwrap();
        sink.receive(500).unwrap();
        assert_eq!(sink.total_burned(), 1_100);
    }

    #[test]
    fn test_sink_overflow_is_an_error() {
        let mut sink = BurnSink::with_total(u128::MAX);
        assert!(matches!(sink.receive(1), Err(StakeError::Overflow)));
        // Failed receive leaves the counter untouched.
        assert_eq!(sink.total_burned(), u128::MAX);
    }
}
