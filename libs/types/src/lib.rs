//! Types library for the multi-party custody ledger
//!
//! Identity and value types shared by the ledger core and its callers.
//!
//! # Modules
//! - `ids`: Member addresses and proposal indices
//! - `numeric`: Amount type and validation helpers
//! - `errors`: Address parse errors

pub mod errors;
pub mod ids;
pub mod numeric;
