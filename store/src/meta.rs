//! Metadata storage trait — counters and schema bookkeeping.

use crate::StoreError;

/// Store trait for small metadata values (totals, next-id counters,
/// schema version).
pub trait MetaStore {
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    fn get_schema_version(&self) -> Result<u32, StoreError> {
        match self.get_meta(b"schema_version")? {
            Some(bytes) if bytes.len() == 4 => {
                let arr: [u8; 4] = bytes.try_into().expect("checked length");
                Ok(u32::from_le_bytes(arr))
            }
            Some(_) => Err(StoreError::Serialization(
                "schema_version has unexpected byte length".to_string(),
            )),
            None => Ok(0),
        }
    }

    fn set_schema_version(&self, version: u32) -> Result<(), StoreError> {
        self.put_meta(b"schema_version", &version.to_le_bytes())
    }
}
