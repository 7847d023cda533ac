//! Ban registry — a one-way latch over accounts.
//!
//! Only a Fraud-tier slash execution writes here, and nothing ever
//! removes an entry. A banned account can never stake again and can
//! never be the subject of a new proposal (there is nothing left to
//! take from it).

use std::collections::HashSet;

use crate::error::SlashError;
use bond_types::AccountId;

#[derive(Clone, Debug, Default)]
pub struct BanRegistry {
    banned: HashSet<AccountId>,
}

impl BanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permanently ban an account. Idempotent.
    pub fn ban(&mut self, account: &AccountId) {
        self.banned.insert(account.clone());
    }

    pub fn is_banned(&self, account: &AccountId) -> bool {
        self.banned.contains(account)
    }

    pub fn banned_count(&self) -> usize {
        self.banned.len()
    }
}

impl BanRegistry {
    /// Persist the ban set to a slash store.
    pub fn save_to_store(&self, store: &dyn bond_store::SlashStore) -> Result<(), SlashError> {
        for account in &self.banned {
            store
                .put_ban(account)
                .map_err(|e| SlashError::Other(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore the ban set from a slash store.
    pub fn load_from_store(store: &dyn bond_store::SlashStore) -> Result<Self, SlashError> {
        let accounts = store
            .iter_bans()
            .map_err(|e| SlashError::Other(e.to_string()))?;
        Ok(Self {
            banned: accounts.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account(n: u8) -> AccountId {
        AccountId::new(format!("bond_{:0>8}", n))
    }

    #[test]
    fn test_ban_is_permanent_and_idempotent() {
        let mut bans = BanRegistry::new();
        let account = test_account(1);
        assert!(!bans.is_banned(&account));

        bans.ban(&account);
        assert!(bans.is_banned(&account));
        bans.ban(&account);
        assert_eq!(bans.banned_count(), 1);
        assert!(!bans.is_banned(&test_account(2)));
    }
}
