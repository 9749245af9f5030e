use contracts::ReleasePolicy;
use contracts::proposal::ApprovalOutcome;
use contracts::snapshot::LedgerSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::{Address, ProposalId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeResponse {
    pub members: Vec<Address>,
    pub threshold: usize,
    pub release_policy: ReleasePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub address: Address,
    pub member: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositRequest {
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositResponse {
    pub proposal_id: ProposalId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalResponse {
    pub proposal_id: ProposalId,
    #[serde(flatten)]
    pub outcome: ApprovalOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedResponse {
    pub proposal_id: ProposalId,
    pub address: Address,
    pub signed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    /// Hex SHA-256 of the canonical snapshot
    pub digest: String,
    pub snapshot: LedgerSnapshot,
}
