use bond_store::{SlashStore, StoreError};
use bond_types::{AccountId, ProposalId};
use heed::types::Bytes;
use heed::{Database, Env};
use std::sync::Arc;

pub struct LmdbSlashStore {
    env: Arc<Env>,
    proposals_db: Database<Bytes, Bytes>,
    bans_db: Database<Bytes, Bytes>,
}

impl LmdbSlashStore {
    pub fn new(
        env: Arc<Env>,
        proposals_db: Database<Bytes, Bytes>,
        bans_db: Database<Bytes, Bytes>,
    ) -> Self {
        Self {
            env,
            proposals_db,
            bans_db,
        }
    }
}

impl SlashStore for LmdbSlashStore {
    fn get_proposal(&self, id: ProposalId) -> Result<Option<Vec<u8>>, StoreError> {
        let txn = self.env.read_txn().map_err(crate::LmdbError::from)?;
        let val = self
            .proposals_db
            .get(&txn, &id.to_be_bytes())
            .map_err(crate::LmdbError::from)?;
        Ok(val.map(|v| v.to_vec()))
    }

    fn put_proposal(&self, id: ProposalId, record: &[u8]) -> Result<(), StoreError> {
        let mut txn = self.env.write_txn().map_err(crate::LmdbError::from)?;
        self.proposals_db
            .put(&mut txn, &id.to_be_bytes(), record)
            .map_err(crate::LmdbError::from)?;
        txn.commit().map_err(crate::LmdbError::from)?;
        Ok(())
    }

    fn iter_proposals(&self) -> Result<Vec<(ProposalId, Vec<u8>)>, StoreError> {
        let txn = self.env.read_txn().map_err(crate::LmdbError::from)?;
        let mut results = Vec::new();
        let iter = self
            .proposals_db
            .iter(&txn)
            .map_err(crate::LmdbError::from)?;
        for item in iter {
            let (key, val) = item.map_err(crate::LmdbError::from)?;
            if key.len() != 8 {
                return Err(StoreError::Corruption(
                    "proposal key is not 8 bytes".to_string(),
                ));
            }
            let arr: [u8; 8] = key.try_into().expect("checked length");
            results.push((ProposalId::from_be_bytes(arr), val.to_vec()));
        }
        Ok(results)
    }

    fn is_banned(&self, account: &AccountId) -> Result<bool, StoreError> {
        let txn = self.env.read_txn().map_err(crate::LmdbError::from)?;
        let val = self
            .bans_db
            .get(&txn, account.as_str().as_bytes())
            .map_err(crate::LmdbError::from)?;
        Ok(val.is_some())
    }

    fn put_ban(&self, account: &AccountId) -> Result<(), StoreError> {
        let mut txn = self.env.write_txn().map_err(crate::LmdbError::from)?;
        self.bans_db
            .put(&mut txn, account.as_str().as_bytes(), &[1u8])
            .map_err(crate::LmdbError::from)?;
        txn.commit().map_err(crate::LmdbError::from)?;
        Ok(())
    }

    fn iter_bans(&self) -> Result<Vec<AccountId>, StoreError> {
        let txn = self.env.read_txn().map_err(crate::LmdbError::from)?;
        let mut results = Vec::new();
        let iter = self.bans_db.iter(&txn).map_err(crate::LmdbError::from)?;
        for item in iter {
            let (key, _) = item.map_err(crate::LmdbError::from)?;
            let account_str = std::str::from_utf8(key)
                .map_err(|e| StoreError::Corruption(e.to_string()))?;
            results.push(AccountId::new(account_str.to_string()));
        }
        Ok(results)
    }
}
