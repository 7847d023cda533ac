//! Nullable token ledger — in-memory fungible balances for testing.
//!
//! Models exactly the collaborator contract the engine relies on: atomic
//! transfers that fail loudly on insufficient balance. The subsystem's
//! pooled balance is tracked explicitly so conservation tests can assert
//! `pool == bonded + held appeal stakes + burned`.

use bond_token::{TokenError, TokenLedger};
use bond_types::AccountId;
use std::collections::HashMap;

pub struct NullTokenLedger {
    balances: HashMap<AccountId, u128>,
    /// Tokens currently held by the staking subsystem.
    pool: u128,
}

impl NullTokenLedger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            pool: 0,
        }
    }

    /// Seed an account with an opening balance.
    pub fn credit(&mut self, account: &AccountId, amount: u128) {
        *self.balances.entry(account.clone()).or_insert(0) += amount;
    }

    pub fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// The subsystem's pooled balance (bonded + appeal collateral + burned).
    pub fn pool(&self) -> u128 {
        self.pool
    }

    /// Sum of every balance plus the pool — constant under all operations.
    pub fn total_supply(&self) -> u128 {
        self.balances.values().sum::<u128>() + self.pool
    }
}

impl Default for NullTokenLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for NullTokenLedger {
    fn transfer_in(&mut self, from: &AccountId, amount: u128) -> Result<(), TokenError> {
        let balance = self
            .balances
            .get_mut(from)
            .ok_or_else(|| TokenError::UnknownAccount(from.clone()))?;
        if *balance < amount {
            return Err(TokenError::InsufficientBalance {
                account: from.clone(),
                needed: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        self.pool = self.pool.checked_add(amount).ok_or(TokenError::Overflow)?;
        Ok(())
    }

    fn transfer_out(&mut self, to: &AccountId, amount: u128) -> Result<(), TokenError> {
        if self.pool < amount {
            return Err(TokenError::InsufficientBalance {
                account: to.clone(),
                needed: amount,
                available: self.pool,
            });
        }
        self.pool -= amount;
        *self.balances.entry(to.clone()).or_insert(0) += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account(n: u8) -> AccountId {
        AccountId::new(format!("bond_{:0>8}", n))
    }

    #[test]
    fn test_transfers_conserve_supply() {
        let mut ledger = NullTokenLedger::new();
        let a = test_account(1);
        ledger.credit(&a, 1_000);
        assert_eq!(ledger.total_supply(), 1_000);

        ledger.transfer_in(&a, 400).unwrap();
        assert_eq!(ledger.balance_of(&a), 600);
        assert_eq!(ledger.pool(), 400);
        assert_eq!(ledger.total_supply(), 1_000);

        ledger.transfer_out(&a, 150).unwrap();
        assert_eq!(ledger.balance_of(&a), 750);
        assert_eq!(ledger.total_supply(), 1_000);
    }

    #[test]
    fn test_transfers_fail_loudly() {
        let mut ledger = NullTokenLedger::new();
        let a = test_account(1);
        ledger.credit(&a, 100);

        assert!(matches!(
            ledger.transfer_in(&a, 101),
            Err(TokenError::InsufficientBalance { .. })
        ));
        assert!(matches!(
            ledger.transfer_in(&test_account(2), 1),
            Err(TokenError::UnknownAccount(_))
        ));
        assert!(matches!(
            ledger.transfer_out(&a, 1),
            Err(TokenError::InsufficientBalance { .. })
        ));
        // Failed transfers mutate nothing.
        assert_eq!(ledger.balance_of(&a), 100);
        assert_eq!(ledger.pool(), 0);
    }
}
