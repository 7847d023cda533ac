//! Account identifier type with `bond_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A BOND account identifier, always prefixed with `bond_`.
///
/// The engine treats accounts as opaque ids; custody and key management
/// live with the wallet collaborator, outside this subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// The standard prefix for all BOND account ids.
    pub const PREFIX: &'static str = "bond_";

    /// Create a new account id from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `bond_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "account id must start with bond_");
        Self(s)
    }

    /// Return the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this id is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_account_id() {
        let id = AccountId::new("bond_alice");
        assert!(id.is_valid());
        assert_eq!(id.as_str(), "bond_alice");
    }

    #[test]
    #[should_panic(expected = "must start with bond_")]
    fn test_wrong_prefix_panics() {
        AccountId::new("acct_alice");
    }

    #[test]
    fn test_bare_prefix_is_invalid() {
        let id = AccountId::new("bond_");
        assert!(!id.is_valid());
    }
}
