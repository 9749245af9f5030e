//! Serialized access to a ledger from concurrent callers
//!
//! The ledger itself has no locking. `SharedLedger` puts the whole ledger
//! behind one mutex so that each operation's check-then-write sequence
//! (membership → signed flag → increment → quorum → release) runs without
//! interleaving.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use types::ids::{Address, ProposalId};
use types::numeric::Amount;

use crate::errors::CustodyError;
use crate::events::ContractEvent;
use crate::ledger::CustodyLedger;
use crate::proposal::{ApprovalOutcome, Proposal};
use crate::snapshot::LedgerSnapshot;

/// Cloneable handle to a ledger shared between threads or tasks.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<CustodyLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: CustodyLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn deposit(&self, caller: &Address, amount: Amount) -> Result<ProposalId, CustodyError> {
        self.lock().deposit(caller, amount)
    }

    pub fn approve(
        &self,
        caller: &Address,
        proposal_id: ProposalId,
    ) -> Result<ApprovalOutcome, CustodyError> {
        self.lock().approve(caller, proposal_id)
    }

    pub fn is_member(&self, identity: &Address) -> bool {
        self.lock().is_member(identity)
    }

    pub fn has_signed(&self, proposal_id: ProposalId, identity: &Address) -> bool {
        self.lock().has_signed(proposal_id, identity)
    }

    /// Copy of the proposal as of this call.
    pub fn get_proposal(&self, proposal_id: ProposalId) -> Result<Proposal, CustodyError> {
        self.lock().get_proposal(proposal_id).cloned()
    }

    pub fn threshold(&self) -> usize {
        self.lock().threshold()
    }

    pub fn members(&self) -> Vec<Address> {
        self.lock().members().to_vec()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.lock().snapshot()
    }

    pub fn drain_events(&self) -> Vec<ContractEvent> {
        self.lock().drain_events()
    }

    /// Run `f` with exclusive access, for compound reads that must agree.
    pub fn with<R>(&self, f: impl FnOnce(&mut CustodyLedger) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    // The ledger validates before it writes, so a panic in another holder
    // cannot leave it half-updated and a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, CustodyLedger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
