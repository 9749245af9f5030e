//! Ledger snapshot and state digest
//!
//! A snapshot is a read-only, deterministic image of the ledger: members in
//! configured order, proposals in index order, signers and recipients in
//! sorted order. Its SHA-256 over the canonical JSON encoding lets two
//! parties check they hold the same custody state.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use types::ids::Address;
use types::numeric::Amount;

use crate::errors::SnapshotError;
use crate::ledger::{CustodyLedger, ReleasePolicy};
use crate::proposal::Proposal;

/// Snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSnapshot {
    #[serde(flatten)]
    pub proposal: Proposal,
    pub signers: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: u32,
    pub members: Vec<Address>,
    pub threshold: usize,
    pub release_policy: ReleasePolicy,
    pub balance: Amount,
    pub released: BTreeMap<Address, Amount>,
    pub proposals: Vec<ProposalSnapshot>,
}

impl LedgerSnapshot {
    /// Canonical JSON bytes.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// SHA-256 of the canonical bytes.
    pub fn digest(&self) -> Result<[u8; 32], SnapshotError> {
        Ok(compute_hash(&self.canonical_bytes()?))
    }

    pub fn digest_hex(&self) -> Result<String, SnapshotError> {
        Ok(hex::encode(self.digest()?))
    }
}

impl CustodyLedger {
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            version: SNAPSHOT_VERSION,
            members: self.members().to_vec(),
            threshold: self.threshold(),
            release_policy: self.release_policy(),
            balance: self.balance(),
            released: self.released().clone(),
            proposals: self
                .records()
                .iter()
                .map(|record| ProposalSnapshot {
                    proposal: record.proposal.clone(),
                    signers: record.signers.iter().copied().collect(),
                })
                .collect(),
        }
    }

    /// Digest of the current state. Identical call sequences give identical
    /// digests.
    pub fn state_digest(&self) -> Result<[u8; 32], SnapshotError> {
        self.snapshot().digest()
    }
}

/// Compute SHA-256 hash of arbitrary data.
pub fn compute_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn member(i: u64) -> Address {
        Address::from_index(i)
    }

    fn ledger_with_activity() -> CustodyLedger {
        let members = (0..5).map(member).collect();
        let mut ledger = CustodyLedger::new(members, 2).unwrap();
        let first = ledger.deposit(&member(0), Decimal::ONE).unwrap();
        ledger.deposit(&member(1), Decimal::from(3)).unwrap();
        ledger.approve(&member(3), first).unwrap();
        ledger.approve(&member(1), first).unwrap();
        ledger
    }

    #[test]
    fn test_snapshot_contents() {
        let snapshot = ledger_with_activity().snapshot();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.members.len(), 5);
        assert_eq!(snapshot.threshold, 2);
        assert_eq!(snapshot.balance, Decimal::from(3));
        assert_eq!(snapshot.released.get(&member(0)), Some(&Decimal::ONE));
        assert_eq!(snapshot.proposals.len(), 2);

        // Signers are sorted, not in signing order
        assert_eq!(snapshot.proposals[0].signers, vec![member(1), member(3)]);
        assert!(snapshot.proposals[0].proposal.executed);
        assert!(snapshot.proposals[1].signers.is_empty());
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = ledger_with_activity().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: LedgerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn test_digest_deterministic() {
        let a = ledger_with_activity().state_digest().unwrap();
        let b = ledger_with_activity().state_digest().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_changes_with_state() {
        let mut ledger = ledger_with_activity();
        let before = ledger.state_digest().unwrap();
        ledger.deposit(&member(2), Decimal::ONE).unwrap();
        assert_ne!(before, ledger.state_digest().unwrap());
    }

    #[test]
    fn test_digest_ignores_event_log() {
        let mut ledger = ledger_with_activity();
        let before = ledger.state_digest().unwrap();
        ledger.drain_events();
        assert_eq!(before, ledger.state_digest().unwrap());
    }

    #[test]
    fn test_digest_hex() {
        let hex = ledger_with_activity().snapshot().digest_hex().unwrap();
        assert_eq!(hex.len(), 64);
    }
}
