//! Slash registry — adversarial enforcement over bonded stakes.
//!
//! An oracle authority proposes a penalty against an evaluator; the
//! evaluator may contest it within the appeal window by posting collateral;
//! once the window closes, execution is permissionless. Every proposal is a
//! permanent audit record — advanced in place, never deleted.
//!
//! State machine per proposal:
//! `Pending → Executed` (window closed, no appeal), or
//! `Pending → Appealed → Executed` (appeal upheld) `| Cancelled` (rejected).

pub mod ban;
pub mod error;
pub mod proposal;
pub mod registry;

pub use ban::BanRegistry;
pub use error::SlashError;
pub use proposal::{ProposalState, SlashProposal};
pub use registry::{AppealResolution, SlashRegistry};
