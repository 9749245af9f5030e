//! Custody Ledger — committee-controlled pool with quorum-gated releases
//!
//! Lifecycle of a proposal:
//! `deposit → Pending(count < threshold) → approve ... → Executed`
//!
//! Execution is not a separate call. The approval that reaches the
//! threshold releases the funds in the same operation, so there is never a
//! state where quorum exists but the release is still outstanding.
//!
//! Every operation validates fully before it writes. A rejected call leaves
//! the ledger untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use types::ids::{Address, ProposalId};
use types::numeric::{self, Amount};

use crate::committee::Committee;
use crate::errors::CustodyError;
use crate::events::{ContractEvent, FundsReceived, ReleaseExecuted};
use crate::proposal::{ApprovalOutcome, Proposal, ProposalRecord, ProposalStatus};

/// Who receives a proposal's funds when it executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReleasePolicy {
    /// Return the funds to the member whose deposit opened the proposal
    #[default]
    Depositor,
    /// Send every release to one fixed address
    Recipient { address: Address },
}

impl ReleasePolicy {
    fn recipient_for(&self, proposal: &Proposal) -> Address {
        match self {
            ReleasePolicy::Depositor => proposal.depositor,
            ReleasePolicy::Recipient { address } => *address,
        }
    }
}

#[derive(Debug)]
pub struct CustodyLedger {
    committee: Committee,
    threshold: usize,
    release_policy: ReleasePolicy,
    /// Append-only; index == proposal id
    proposals: Vec<ProposalRecord>,
    /// Deposited value not yet released
    balance: Amount,
    /// Released totals per recipient
    released: BTreeMap<Address, Amount>,
    /// Emitted events log (append-only until drained)
    events: Vec<ContractEvent>,
}

impl CustodyLedger {
    /// Create a ledger that returns released funds to the depositor.
    pub fn new(members: Vec<Address>, threshold: usize) -> Result<Self, CustodyError> {
        Self::with_policy(members, threshold, ReleasePolicy::default())
    }

    /// Create a ledger with an explicit release policy.
    ///
    /// Fails with `InvalidConfiguration` unless the committee is valid (see
    /// [`Committee::new`]) and `1 <= threshold <= members.len()`.
    pub fn with_policy(
        members: Vec<Address>,
        threshold: usize,
        release_policy: ReleasePolicy,
    ) -> Result<Self, CustodyError> {
        let committee = Committee::new(members)?;

        if threshold == 0 || threshold > committee.len() {
            return Err(CustodyError::invalid_config(format!(
                "threshold {} outside 1..={}",
                threshold,
                committee.len()
            )));
        }

        if let ReleasePolicy::Recipient { address } = release_policy {
            if address.is_zero() {
                return Err(CustodyError::invalid_config(
                    "release recipient cannot be the zero address",
                ));
            }
        }

        info!(
            members = committee.len(),
            threshold,
            policy = ?release_policy,
            "Custody ledger initialized"
        );

        Ok(Self {
            committee,
            threshold,
            release_policy,
            proposals: Vec::new(),
            balance: Decimal::ZERO,
            released: BTreeMap::new(),
            events: Vec::new(),
        })
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Take `amount` into custody and open a new proposal for it.
    ///
    /// The deposit is not an approval; the depositor signs separately like
    /// any other member.
    pub fn deposit(&mut self, caller: &Address, amount: Amount) -> Result<ProposalId, CustodyError> {
        self.check_member(caller)?;

        if !numeric::is_positive(&amount) {
            warn!(caller = %caller, amount = %amount, "Deposit rejected: non-positive amount");
            return Err(CustodyError::InvalidAmount);
        }

        let new_balance = exact_credit(self.balance, amount).ok_or_else(|| {
            warn!(caller = %caller, amount = %amount, balance = %self.balance, "Deposit rejected: pool cannot hold amount exactly");
            CustodyError::Overflow
        })?;

        let proposal_id = ProposalId::new(self.proposals.len() as u64);
        self.proposals
            .push(ProposalRecord::open(proposal_id, *caller, amount));
        self.balance = new_balance;

        self.events.push(ContractEvent::FundsReceived(FundsReceived {
            proposal_id,
            from: *caller,
            amount,
        }));

        info!(
            proposal_id = %proposal_id,
            from = %caller,
            amount = %amount,
            "Funds received"
        );
        Ok(proposal_id)
    }

    // ───────────────────────── Approve ─────────────────────────

    /// Record `caller`'s approval of a proposal, executing it on quorum.
    ///
    /// Checks, in order: membership, existence, not executed, not already
    /// signed by `caller`.
    pub fn approve(
        &mut self,
        caller: &Address,
        proposal_id: ProposalId,
    ) -> Result<ApprovalOutcome, CustodyError> {
        self.check_member(caller)?;
        let index = self.index_of(proposal_id)?;

        let record = &mut self.proposals[index];
        if record.proposal.executed {
            warn!(proposal_id = %proposal_id, caller = %caller, "Approval rejected: already executed");
            return Err(CustodyError::AlreadyExecuted { proposal_id });
        }
        if record.has_signed(caller) {
            warn!(proposal_id = %proposal_id, caller = %caller, "Approval rejected: already signed");
            return Err(CustodyError::MemberAlreadySigned {
                proposal_id,
                member: *caller,
            });
        }

        let reaches_quorum = record.proposal.signature_count + 1 >= self.threshold;
        if !reaches_quorum {
            let signature_count = record.record_signature(*caller);
            debug!(
                proposal_id = %proposal_id,
                signer = %caller,
                signature_count,
                threshold = self.threshold,
                "Approval recorded"
            );
            return Ok(ApprovalOutcome::Pending { signature_count });
        }

        // Validate the release before recording anything.
        let amount = record.proposal.amount;
        let recipient = self.release_policy.recipient_for(&record.proposal);
        let new_balance = self
            .balance
            .checked_sub(amount)
            .filter(|b| *b >= Decimal::ZERO)
            .ok_or(CustodyError::Overflow)?;

        let signature_count = record.record_signature(*caller);
        record.proposal.executed = true;
        self.balance = new_balance;
        // Reporting total; saturates at Decimal::MAX.
        let released = self.released.entry(recipient).or_insert(Decimal::ZERO);
        *released = released.saturating_add(amount);

        self.events.push(ContractEvent::ReleaseExecuted(ReleaseExecuted {
            proposal_id,
            recipient,
            amount,
        }));

        info!(
            proposal_id = %proposal_id,
            signer = %caller,
            signature_count,
            recipient = %recipient,
            amount = %amount,
            "Quorum reached, funds released"
        );
        Ok(ApprovalOutcome::Executed { recipient, amount })
    }

    // ───────────────────────── Queries ─────────────────────────

    pub fn is_member(&self, identity: &Address) -> bool {
        self.committee.contains(identity)
    }

    /// Whether `identity` signed the proposal. False for an unknown proposal
    /// or identity.
    pub fn has_signed(&self, proposal_id: ProposalId, identity: &Address) -> bool {
        self.record(proposal_id)
            .is_ok_and(|record| record.has_signed(identity))
    }

    pub fn get_proposal(&self, proposal_id: ProposalId) -> Result<&Proposal, CustodyError> {
        self.record(proposal_id).map(|record| &record.proposal)
    }

    pub fn status(&self, proposal_id: ProposalId) -> Result<ProposalStatus, CustodyError> {
        self.record(proposal_id)
            .map(|record| record.status(self.threshold))
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Committee members in configured order.
    pub fn members(&self) -> &[Address] {
        self.committee.members()
    }

    pub fn release_policy(&self) -> ReleasePolicy {
        self.release_policy
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    /// All proposals in creation order.
    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter().map(|record| &record.proposal)
    }

    /// Value currently held in custody.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Total released to `recipient` so far, capped at `Decimal::MAX`.
    pub fn released_to(&self, recipient: &Address) -> Amount {
        self.released
            .get(recipient)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn released(&self) -> &BTreeMap<Address, Amount> {
        &self.released
    }

    pub(crate) fn records(&self) -> &[ProposalRecord] {
        &self.proposals
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }

    // ───────────────────────── Internal ─────────────────────────

    fn check_member(&self, caller: &Address) -> Result<(), CustodyError> {
        if !self.committee.contains(caller) {
            warn!(caller = %caller, "Rejected call from non-member");
            return Err(CustodyError::Unauthorized { caller: *caller });
        }
        Ok(())
    }

    fn index_of(&self, proposal_id: ProposalId) -> Result<usize, CustodyError> {
        proposal_id
            .as_usize()
            .filter(|index| *index < self.proposals.len())
            .ok_or(CustodyError::NotFound { proposal_id })
    }

    fn record(&self, proposal_id: ProposalId) -> Result<&ProposalRecord, CustodyError> {
        let index = self.index_of(proposal_id)?;
        Ok(&self.proposals[index])
    }
}

/// `balance + amount`, or `None` if the sum overflows or had to be rounded.
///
/// Decimal addition rounds once the result needs more than 28 significant
/// digits. A rounded credit would leave the pool unable to cover every open
/// proposal, so it is refused.
fn exact_credit(balance: Amount, amount: Amount) -> Option<Amount> {
    let sum = balance.checked_add(amount)?;
    let exact = sum.checked_sub(balance) == Some(amount) && sum.checked_sub(amount) == Some(balance);
    exact.then_some(sum)
}
