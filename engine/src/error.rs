//! Top-level engine errors — composes the component crate errors.

use bond_slash::SlashError;
use bond_stake::StakeError;
use bond_token::TokenError;
use bond_types::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("caller {caller} lacks the {required} capability")]
    Unauthorized {
        caller: AccountId,
        required: &'static str,
    },

    #[error("account {0} is permanently banned")]
    BannedAccount(AccountId),

    #[error("reentrant call rejected")]
    ReentrantCall,

    #[error(transparent)]
    Stake(#[from] StakeError),

    #[error(transparent)]
    Slash(#[from] SlashError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("storage error: {0}")]
    Store(String),
}
