//! Stake record storage trait.

use crate::StoreError;
use bond_types::AccountId;

/// Store trait for persisting per-account stake records.
pub trait StakeStore {
    fn get_stake(&self, account: &AccountId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_stake(&self, account: &AccountId, record: &[u8]) -> Result<(), StoreError>;
    fn delete_stake(&self, account: &AccountId) -> Result<(), StoreError>;
    fn iter_stakes(&self) -> Result<Vec<(AccountId, Vec<u8>)>, StoreError>;
}
