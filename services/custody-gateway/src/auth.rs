use crate::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use types::ids::Address;

/// Header carrying the caller identity asserted by the calling environment.
pub const CALLER_HEADER: &str = "X-Caller-Address";

/// Identity of the party making a state-changing call.
///
/// There is no login step: the front-end or signing proxy in front of the
/// gateway asserts the caller, and the ledger decides what that identity may do.
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub address: Address,
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(CALLER_HEADER)
            .ok_or_else(|| AppError::Unauthenticated(format!("missing {} header", CALLER_HEADER)))?;

        let raw = header
            .to_str()
            .map_err(|_| AppError::Unauthenticated("Invalid header string".into()))?;

        let address = raw
            .parse::<Address>()
            .map_err(|e| AppError::Unauthenticated(format!("Invalid caller address: {}", e)))?;

        Ok(Caller { address })
    }
}
