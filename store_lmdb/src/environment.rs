//! LMDB environment setup.

use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use crate::error::LmdbError;
use crate::meta::LmdbMetaStore;
use crate::slash::LmdbSlashStore;
use crate::stake::LmdbStakeStore;

const DB_STAKES: &str = "stakes";
const DB_PROPOSALS: &str = "proposals";
const DB_BANS: &str = "bans";
const DB_META: &str = "meta";

/// Wraps the LMDB environment and all database handles.
pub struct LmdbEnvironment {
    env: Arc<Env>,
    stakes_db: Database<Bytes, Bytes>,
    proposals_db: Database<Bytes, Bytes>,
    bans_db: Database<Bytes, Bytes>,
    meta_db: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    pub fn open(path: &Path, max_dbs: u32, map_size: usize) -> Result<Self, LmdbError> {
        // SAFETY: we never open the same environment path twice in one
        // process, which is heed's requirement for `open`.
        let env = unsafe {
            EnvOpenOptions::new()
                .max_dbs(max_dbs)
                .map_size(map_size)
                .open(path)?
        };
        let mut wtxn = env.write_txn()?;
        let stakes_db = env.create_database(&mut wtxn, Some(DB_STAKES))?;
        let proposals_db = env.create_database(&mut wtxn, Some(DB_PROPOSALS))?;
        let bans_db = env.create_database(&mut wtxn, Some(DB_BANS))?;
        let meta_db = env.create_database(&mut wtxn, Some(DB_META))?;
        wtxn.commit()?;
        tracing::debug!(path = %path.display(), "LMDB environment opened");
        Ok(Self {
            env: Arc::new(env),
            stakes_db,
            proposals_db,
            bans_db,
            meta_db,
        })
    }

    pub fn stake_store(&self) -> LmdbStakeStore {
        LmdbStakeStore::new(self.env.clone(), self.stakes_db)
    }

    pub fn slash_store(&self) -> LmdbSlashStore {
        LmdbSlashStore::new(self.env.clone(), self.proposals_db, self.bans_db)
    }

    pub fn meta_store(&self) -> LmdbMetaStore {
        LmdbMetaStore::new(self.env.clone(), self.meta_db)
    }
}
