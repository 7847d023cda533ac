//! Fundamental types for the BOND protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account ids, timestamps, evidence hashes, tier enums, protocol
//! parameters, and the audit-trail event enum.

pub mod account;
pub mod event;
pub mod hash;
pub mod params;
pub mod tier;
pub mod time;

pub use account::AccountId;
pub use event::{LedgerEvent, ProposalId};
pub use hash::EvidenceHash;
pub use params::{ProtocolParams, TierConfig};
pub use tier::{SlashTier, Tier};
pub use time::Timestamp;

/// One whole token expressed in raw units (9 decimal places).
pub const TOKEN_UNIT: u128 = 1_000_000_000;

/// Basis-point denominator used for every percentage in the protocol.
pub const BPS_DENOMINATOR: u128 = 10_000;
