//! Error types for address parsing

use thiserror::Error;

/// Errors raised when parsing an [`Address`](crate::ids::Address).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address length: expected 40 hex digits, got {len}")]
    InvalidLength { len: usize },

    #[error("Invalid hex in address: {0}")]
    InvalidHex(String),
}
