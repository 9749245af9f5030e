//! Contract-specific error types
//!
//! Every custody rejection is detected before the ledger mutates, so an
//! `Err` always means the ledger is exactly as it was before the call.

use thiserror::Error;
use types::ids::{Address, ProposalId};

/// Rejections raised by the custody ledger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CustodyError {
    #[error("Unauthorized: {caller} is not a committee member")]
    Unauthorized { caller: Address },

    #[error("Proposal not found: {proposal_id}")]
    NotFound { proposal_id: ProposalId },

    #[error("Proposal {proposal_id} already executed")]
    AlreadyExecuted { proposal_id: ProposalId },

    #[error("Member {member} already signed proposal {proposal_id}")]
    MemberAlreadySigned {
        proposal_id: ProposalId,
        member: Address,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Deposit amount must be positive")]
    InvalidAmount,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

impl CustodyError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading a ledger configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] CustodyError),
}

/// Errors raised while exporting a ledger snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
