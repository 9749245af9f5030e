use crate::auth::Caller;
use crate::error::AppError;
use crate::handlers::committee::parse_address;
use crate::models::{ApprovalResponse, DepositRequest, DepositResponse, SignedResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use contracts::proposal::Proposal;
use types::ids::ProposalId;

pub async fn create_deposit(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<DepositRequest>,
) -> Result<(StatusCode, Json<DepositResponse>), AppError> {
    let result = state.ledger.deposit(&caller.address, payload.amount);
    state.publish_events();

    let proposal_id = result?;
    Ok((StatusCode::CREATED, Json(DepositResponse { proposal_id })))
}

pub async fn approve_proposal(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<u64>,
) -> Result<Json<ApprovalResponse>, AppError> {
    let proposal_id = ProposalId::new(id);
    let result = state.ledger.approve(&caller.address, proposal_id);
    state.publish_events();

    let outcome = result?;
    Ok(Json(ApprovalResponse {
        proposal_id,
        outcome,
    }))
}

pub async fn get_proposal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Proposal>, AppError> {
    let proposal = state.ledger.get_proposal(ProposalId::new(id))?;
    Ok(Json(proposal))
}

pub async fn get_signer(
    State(state): State<AppState>,
    Path((id, address)): Path<(u64, String)>,
) -> Result<Json<SignedResponse>, AppError> {
    let proposal_id = ProposalId::new(id);
    let address = parse_address(&address)?;
    Ok(Json(SignedResponse {
        proposal_id,
        address,
        signed: state.ledger.has_signed(proposal_id, &address),
    }))
}
