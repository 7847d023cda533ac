use bond_store::{StakeStore, StoreError};
use bond_types::AccountId;
use heed::types::Bytes;
use heed::{Database, Env};
use std::sync::Arc;

pub struct LmdbStakeStore {
    env: Arc<Env>,
    stakes_db: Database<Bytes, Bytes>,
}

impl LmdbStakeStore {
    pub fn new(env: Arc<Env>, stakes_db: Database<Bytes, Bytes>) -> Self {
        Self { env, stakes_db }
    }
}

impl StakeStore for LmdbStakeStore {
    fn get_stake(&self, account: &AccountId) -> Result<Option<Vec<u8>>, StoreError> {
        let txn = self.env.read_txn().map_err(crate::LmdbError::from)?;
        let val = self
            .stakes_db
            .get(&txn, account.as_str().as_bytes())
            .map_err(crate::LmdbError::from)?;
        Ok(val.map(|v| v.to_vec()))
    }

    fn put_stake(&self, account: &AccountId, record: &[u8]) -> Result<(), StoreError> {
        let mut txn = self.env.write_txn().map_err(crate::LmdbError::from)?;
        self.stakes_db
            .put(&mut txn, account.as_str().as_bytes(), record)
            .map_err(crate::LmdbError::from)?;
        txn.commit().map_err(crate::LmdbError::from)?;
        Ok(())
    }

    fn delete_stake(&self, account: &AccountId) -> Result<(), StoreError> {
        let mut txn = self.env.write_txn().map_err(crate::LmdbError::from)?;
        self.stakes_db
            .delete(&mut txn, account.as_str().as_bytes())
            .map_err(crate::LmdbError::from)?;
        txn.commit().map_err(crate::LmdbError::from)?;
        Ok(())
    }

    fn iter_stakes(&self) -> Result<Vec<(AccountId, Vec<u8>)>, StoreError> {
        let txn = self.env.read_txn().map_err(crate::LmdbError::from)?;
        let mut results = Vec::new();
        let iter = self.stakes_db.iter(&txn).map_err(crate::LmdbError::from)?;
        for item in iter {
            let (key, val) = item.map_err(crate::LmdbError::from)?;
            let account_str = std::str::from_utf8(key)
                .map_err(|e| StoreError::Corruption(e.to_string()))?;
            results.push((AccountId::new(account_str.to_string()), val.to_vec()));
        }
        Ok(results)
    }
}
