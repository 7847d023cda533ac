//! Slash-registry errors.

use bond_types::{AccountId, ProposalId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlashError {
    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("evidence hash must not be empty")]
    EmptyEvidence,

    #[error("{0} has no active stake to slash")]
    NoActiveStake(AccountId),

    #[error("only the named evaluator may appeal proposal {proposal}, not {caller}")]
    NotEvaluator {
        proposal: ProposalId,
        caller: AccountId,
    },

    #[error("proposal {0} has already been executed")]
    AlreadyExecuted(ProposalId),

    #[error("proposal {0} is already under appeal")]
    AlreadyAppealed(ProposalId),

    #[error("proposal {0} is not under appeal")]
    NotAppealed(ProposalId),

    #[error("proposal {0} was cancelled by a successful appeal")]
    ProposalCancelled(ProposalId),

    #[error("appeal window for proposal {0} has closed")]
    AppealWindowClosed(ProposalId),

    #[error("appeal window for proposal {proposal} still open: {remaining_secs}s remaining")]
    AppealWindowOpen {
        proposal: ProposalId,
        remaining_secs: u64,
    },

    #[error("arithmetic overflow in slash computation")]
    Overflow,

    #[error("{0}")]
    Other(String),
}
