use bond_store::{MetaStore, StoreError};
use heed::types::Bytes;
use heed::{Database, Env};
use std::sync::Arc;

pub struct LmdbMetaStore {
    env: Arc<Env>,
    meta_db: Database<Bytes, Bytes>,
}

impl LmdbMetaStore {
    pub fn new(env: Arc<Env>, meta_db: Database<Bytes, Bytes>) -> Self {
        Self { env, meta_db }
    }
}

impl MetaStore for LmdbMetaStore {
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let txn = self.env.read_txn().map_err(crate::LmdbError::from)?;
        let val = self.meta_db.get(&txn, key).map_err(crate::LmdbError::from)?;
        Ok(val.map(|v| v.to_vec()))
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let mut txn = self.env.write_txn().map_err(crate::LmdbError::from)?;
        self.meta_db
            .put(&mut txn, key, value)
            .map_err(crate::LmdbError::from)?;
        txn.commit().map_err(crate::LmdbError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LmdbEnvironment;

    #[test]
    fn test_meta_roundtrip_and_schema_version() {
        let dir = tempfile::tempdir().expect("temp dir");
        let env = LmdbEnvironment::open(dir.path(), 8, 16 * 1024 * 1024).expect("open env");
        let meta = env.meta_store();

        assert_eq!(meta.get_meta(b"missing").unwrap(), None);
        meta.put_meta(b"total_burned", &42u128.to_be_bytes()).unwrap();
        assert_eq!(
            meta.get_meta(b"total_burned").unwrap().unwrap(),
            42u128.to_be_bytes().to_vec()
        );

        assert_eq!(meta.get_schema_version().unwrap(), 0);
        meta.set_schema_version(3).unwrap();
        assert_eq!(meta.get_schema_version().unwrap(), 3);
    }
}
