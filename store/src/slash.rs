//! Slash proposal and ban storage trait.

use crate::StoreError;
use bond_types::{AccountId, ProposalId};

/// Store trait for the slash registry's permanent audit records and the
/// ban latch. Proposals are append-only: `put_proposal` overwrites in
/// place as a proposal advances, but records are never deleted.
pub trait SlashStore {
    fn get_proposal(&self, id: ProposalId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_proposal(&self, id: ProposalId, record: &[u8]) -> Result<(), StoreError>;
    fn iter_proposals(&self) -> Result<Vec<(ProposalId, Vec<u8>)>, StoreError>;

    fn is_banned(&self, account: &AccountId) -> Result<bool, StoreError>;
    fn put_ban(&self, account: &AccountId) -> Result<(), StoreError>;
    fn iter_bans(&self) -> Result<Vec<AccountId>, StoreError>;
}
