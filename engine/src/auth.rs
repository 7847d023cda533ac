//! Authorization context for restricted operations.
//!
//! Capabilities are injected at engine construction as concrete authority
//! accounts and compared at the top of each restricted call. No global
//! role state.

use crate::error::EngineError;
use bond_types::AccountId;

/// The two privileged authorities of the subsystem.
#[derive(Clone, Debug)]
pub struct Authorities {
    /// May propose slashes.
    pub oracle: AccountId,
    /// May resolve appeals and update tier configuration.
    pub admin: AccountId,
}

impl Authorities {
    pub fn new(oracle: AccountId, admin: AccountId) -> Self {
        Self { oracle, admin }
    }

    pub fn require_oracle(&self, caller: &AccountId) -> Result<(), EngineError> {
        if caller != &self.oracle {
            return Err(EngineError::Unauthorized {
                caller: caller.clone(),
                required: "oracle",
            });
        }
        Ok(())
    }

    pub fn require_admin(&self, caller: &AccountId) -> Result<(), EngineError> {
        if caller != &self.admin {
            return Err(EngineError::Unauthorized {
                caller: caller.clone(),
                required: "admin",
            });
        }
        Ok(())
    }
}
