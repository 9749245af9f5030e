use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contracts::errors::{CustodyError, SnapshotError};
use serde_json::json;
use thiserror::Error;

/// Central error type for the custody gateway
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Custody(#[from] CustodyError),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<SnapshotError> for AppError {
    fn from(err: SnapshotError) -> Self {
        AppError::InternalError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, code) = match &self {
            AppError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Custody(err) => custody_status(err),
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let message = match self {
            AppError::InternalError(_) => "Internal server error".to_string(),
            _ => message,
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}

fn custody_status(err: &CustodyError) -> (StatusCode, &'static str) {
    match err {
        CustodyError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "UNAUTHORIZED"),
        CustodyError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        CustodyError::AlreadyExecuted { .. } => (StatusCode::CONFLICT, "ALREADY_EXECUTED"),
        CustodyError::MemberAlreadySigned { .. } => {
            (StatusCode::CONFLICT, "MEMBER_ALREADY_SIGNED")
        }
        CustodyError::InvalidAmount => (StatusCode::BAD_REQUEST, "INVALID_AMOUNT"),
        CustodyError::Overflow => (StatusCode::UNPROCESSABLE_ENTITY, "OVERFLOW"),
        CustodyError::InvalidConfiguration { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_CONFIGURATION")
        }
    }
}
