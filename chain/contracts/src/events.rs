//! Custody ledger events
//!
//! Events are immutable records emitted by ledger operations. Observers
//! read or drain them for audit logging; the ledger's own state never
//! depends on whether anyone consumes them.

use serde::{Deserialize, Serialize};
use types::ids::{Address, ProposalId};
use types::numeric::Amount;

/// Funds received by the ledger, opening a new proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsReceived {
    pub proposal_id: ProposalId,
    pub from: Address,
    pub amount: Amount,
}

/// Quorum reached and the proposal's funds released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseExecuted {
    pub proposal_id: ProposalId,
    pub recipient: Address,
    pub amount: Amount,
}

/// Enum wrapper for all ledger events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContractEvent {
    FundsReceived(FundsReceived),
    ReleaseExecuted(ReleaseExecuted),
}

impl ContractEvent {
    pub fn proposal_id(&self) -> ProposalId {
        match self {
            ContractEvent::FundsReceived(e) => e.proposal_id,
            ContractEvent::ReleaseExecuted(e) => e.proposal_id,
        }
    }

    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            ContractEvent::FundsReceived(_) => "funds_received",
            ContractEvent::ReleaseExecuted(_) => "release_executed",
        }
    }
}
