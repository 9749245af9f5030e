//! Proposals and their approval records

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use types::ids::{Address, ProposalId};
use types::numeric::Amount;

/// One pending-or-settled release request.
///
/// `signature_count` and `amount` are frozen once `executed` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    /// Member whose deposit opened the proposal
    pub depositor: Address,
    pub amount: Amount,
    /// Distinct members who have approved so far
    pub signature_count: usize,
    /// One-way: false → true on reaching quorum
    pub executed: bool,
}

/// Lifecycle of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Collecting approvals
    Pending { signature_count: usize, threshold: usize },
    /// Quorum reached, funds released (terminal)
    Executed,
}

/// Result of a successful approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApprovalOutcome {
    /// Approval recorded, quorum not yet reached
    Pending { signature_count: usize },
    /// This approval reached quorum and released the funds
    Executed { recipient: Address, amount: Amount },
}

impl ApprovalOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, ApprovalOutcome::Executed { .. })
    }
}

/// A proposal together with the set of members who signed it.
#[derive(Debug, Clone)]
pub(crate) struct ProposalRecord {
    pub(crate) proposal: Proposal,
    pub(crate) signers: BTreeSet<Address>,
}

impl ProposalRecord {
    pub(crate) fn open(id: ProposalId, depositor: Address, amount: Amount) -> Self {
        Self {
            proposal: Proposal {
                id,
                depositor,
                amount,
                signature_count: 0,
                executed: false,
            },
            signers: BTreeSet::new(),
        }
    }

    pub(crate) fn has_signed(&self, member: &Address) -> bool {
        self.signers.contains(member)
    }

    /// Record a signature. The caller has already checked the member is new.
    pub(crate) fn record_signature(&mut self, member: Address) -> usize {
        self.signers.insert(member);
        self.proposal.signature_count = self.signers.len();
        self.proposal.signature_count
    }

    pub(crate) fn status(&self, threshold: usize) -> ProposalStatus {
        if self.proposal.executed {
            ProposalStatus::Executed
        } else {
            ProposalStatus::Pending {
                signature_count: self.proposal.signature_count,
                threshold,
            }
        }
    }
}
