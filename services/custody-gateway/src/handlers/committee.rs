use crate::error::AppError;
use crate::models::{CommitteeResponse, MemberResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use types::ids::Address;

pub async fn get_committee(State(state): State<AppState>) -> Json<CommitteeResponse> {
    let response = state.ledger.with(|ledger| CommitteeResponse {
        members: ledger.members().to_vec(),
        threshold: ledger.threshold(),
        release_policy: ledger.release_policy(),
    });
    Json(response)
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<MemberResponse>, AppError> {
    let address = parse_address(&address)?;
    Ok(Json(MemberResponse {
        address,
        member: state.ledger.is_member(&address),
    }))
}

pub(crate) fn parse_address(raw: &str) -> Result<Address, AppError> {
    raw.parse()
        .map_err(|e| AppError::BadRequest(format!("Invalid address {}: {}", raw, e)))
}
