//! Nullable stores — thread-safe in-memory storage for testing.

use bond_store::{MetaStore, SlashStore, StakeStore, StoreError};
use bond_types::{AccountId, ProposalId};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

/// In-memory stake store.
pub struct NullStakeStore {
    stakes: Mutex<HashMap<AccountId, Vec<u8>>>,
}

impl NullStakeStore {
    pub fn new() -> Self {
        Self {
            stakes: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullStakeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StakeStore for NullStakeStore {
    fn get_stake(&self, account: &AccountId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.stakes.lock().unwrap().get(account).cloned())
    }

    fn put_stake(&self, account: &AccountId, record: &[u8]) -> Result<(), StoreError> {
        self.stakes
            .lock()
            .unwrap()
            .insert(account.clone(), record.to_vec());
        Ok(())
    }

    fn delete_stake(&self, account: &AccountId) -> Result<(), StoreError> {
        self.stakes.lock().unwrap().remove(account);
        Ok(())
    }

    fn iter_stakes(&self) -> Result<Vec<(AccountId, Vec<u8>)>, StoreError> {
        Ok(self
            .stakes
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

/// In-memory slash store. Proposals are kept ordered by id so iteration
/// is deterministic.
pub struct NullSlashStore {
    proposals: Mutex<BTreeMap<ProposalId, Vec<u8>>>,
    bans: Mutex<HashSet<AccountId>>,
}

impl NullSlashStore {
    pub fn new() -> Self {
        Self {
            proposals: Mutex::new(BTreeMap::new()),
            bans: Mutex::new(HashSet::new()),
        }
    }
}

impl Default for NullSlashStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlashStore for NullSlashStore {
    fn get_proposal(&self, id: ProposalId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.proposals.lock().unwrap().get(&id).cloned())
    }

    fn put_proposal(&self, id: ProposalId, record: &[u8]) -> Result<(), StoreError> {
        self.proposals.lock().unwrap().insert(id, record.to_vec());
        Ok(())
    }

    fn iter_proposals(&self) -> Result<Vec<(ProposalId, Vec<u8>)>, StoreError> {
        Ok(self
            .proposals
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect())
    }

    fn is_banned(&self, account: &AccountId) -> Result<bool, StoreError> {
        Ok(self.bans.lock().unwrap().contains(account))
    }

    fn put_ban(&self, account: &AccountId) -> Result<(), StoreError> {
        self.bans.lock().unwrap().insert(account.clone());
        Ok(())
    }

    fn iter_bans(&self) -> Result<Vec<AccountId>, StoreError> {
        Ok(self.bans.lock().unwrap().iter().cloned().collect())
    }
}

/// In-memory meta store.
pub struct NullMetaStore {
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullMetaStore {
    pub fn new() -> Self {
        Self {
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullMetaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaStore for NullMetaStore {
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
