use crate::error::AppError;
use crate::models::SnapshotResponse;
use crate::state::AppState;
use axum::{Json, extract::State};

pub async fn get_snapshot(State(state): State<AppState>) -> Result<Json<SnapshotResponse>, AppError> {
    let snapshot = state.ledger.snapshot();
    let digest = snapshot.digest_hex()?;
    Ok(Json(SnapshotResponse { digest, snapshot }))
}
