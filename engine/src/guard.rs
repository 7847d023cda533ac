//! Per-call exclusive guard — non-reentrant by construction.
//!
//! Every public engine operation holds a [`GuardToken`] for its full
//! duration. A token-ledger callback that tried to re-enter the engine
//! mid-call would find the flag set and be rejected before touching any
//! state. The token releases the flag on drop, so every exit path
//! (including error returns) unlocks.

use crate::error::EngineError;
use std::cell::Cell;

#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    locked: Cell<bool>,
}

impl ReentrancyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the guard for the duration of the returned token.
    pub fn enter(&self) -> Result<GuardToken<'_>, EngineError> {
        if self.locked.replace(true) {
            return Err(EngineError::ReentrantCall);
        }
        Ok(GuardToken { guard: self })
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }
}

/// RAII token holding the guard; releases on drop.
pub struct GuardToken<'a> {
    guard: &'a ReentrancyGuard,
}

impl Drop for GuardToken<'_> {
    fn drop(&mut self) {
        self.guard.locked.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_excludes_nested_entry() {
        let guard = ReentrancyGuard::new();
        let token = guard.enter().unwrap();
        assert!(guard.is_locked());
        assert!(matches!(guard.enter(), Err(EngineError::ReentrantCall)));
        drop(token);
        assert!(!guard.is_locked());
        assert!(guard.enter().is_ok());
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        let guard = ReentrancyGuard::new();
        fn failing_op(guard: &ReentrancyGuard) -> Result<(), EngineError> {
            let _token = guard.enter()?;
            Err(EngineError::ReentrantCall) // any error path
        }
        assert!(failing_op(&guard).is_err());
        assert!(!guard.is_locked());
    }
}
