//! Evidence hash type for slash proposals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte digest of the off-chain evidence backing a slash proposal.
///
/// The engine never interprets the digest; it only requires one to be
/// present so every proposal is anchored to auditable material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceHash([u8; 32]);

impl EvidenceHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// An all-zero digest counts as "no evidence" and is rejected.
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for EvidenceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EvidenceHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for EvidenceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hash_is_empty() {
        assert!(EvidenceHash::ZERO.is_empty());
        assert!(!EvidenceHash::new([1u8; 32]).is_empty());
    }

    #[test]
    fn test_display_is_full_hex() {
        let h = EvidenceHash::new([0xab; 32]);
        assert_eq!(h.to_string(), "ab".repeat(32));
    }
}
