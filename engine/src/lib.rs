//! BOND engine — the single entry point for every state-mutating
//! operation of the bonded-staking subsystem.
//!
//! The engine wires the stake ledger, slash registry, ban registry and
//! burn sink together and adds the cross-cutting concerns the component
//! crates deliberately leave out:
//! - capability checks against the injected oracle/admin authorities
//! - a reentrancy guard held for the duration of every call
//! - checks-effects-interactions ordering of token movements
//! - the audit-trail event journal
//! - persistence glue over the `bond-store` traits

pub mod auth;
pub mod engine;
pub mod error;
pub mod guard;

pub use auth::Authorities;
pub use engine::BondEngine;
pub use error::EngineError;
pub use guard::ReentrancyGuard;
