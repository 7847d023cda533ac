//! The fungible-token transfer primitive consumed by the engine.
//!
//! The BOND engine never implements token custody or minting; it moves
//! value through this trait. `transfer_in` pulls from a participant into
//! the subsystem's pooled balance, `transfer_out` pays back out of it.
//! Implementations must be atomic and fail loudly on insufficient
//! balance; the engine relies on that to keep its own bookkeeping exact.
//!
//! Production backends live with the wallet/ledger collaborator; the
//! deterministic test double is `bond_nullables::NullTokenLedger`.

use bond_types::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("insufficient token balance for {account}: need {needed}, available {available}")]
    InsufficientBalance {
        account: AccountId,
        needed: u128,
        available: u128,
    },

    #[error("unknown account: {0}")]
    UnknownAccount(AccountId),

    #[error("arithmetic overflow in token transfer")]
    Overflow,

    #[error("{0}")]
    Other(String),
}

/// Fungible-balance transfer primitive.
pub trait TokenLedger {
    /// Pull `amount` from `from` into the subsystem's pooled balance.
    fn transfer_in(&mut self, from: &AccountId, amount: u128) -> Result<(), TokenError>;

    /// Pay `amount` out of the subsystem's pooled balance to `to`.
    fn transfer_out(&mut self, to: &AccountId, amount: u128) -> Result<(), TokenError>;
}
