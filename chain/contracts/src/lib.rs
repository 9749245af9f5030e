//! Multi-party custody ledger
//!
//! A fixed committee jointly controls a pool of value. Each deposit opens a
//! proposal; its funds are released only when a quorum of distinct members
//! has approved it, and the quorum-reaching approval performs the release.
//!
//! # Modules
//! - `committee`: Fixed, validated committee membership
//! - `proposal`: Proposal records, status, approval outcomes
//! - `ledger`: The custody ledger state machine
//! - `events`: Funds-received and release-executed events
//! - `errors`: Custody, configuration and snapshot errors
//! - `config`: JSON deployment configuration
//! - `snapshot`: Deterministic state export and SHA-256 digest
//! - `shared`: Single-lock handle for concurrent callers

pub mod committee;
pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod proposal;
pub mod shared;
pub mod snapshot;

pub use committee::MAX_MEMBERS;
pub use ledger::{CustodyLedger, ReleasePolicy};
pub use shared::SharedLedger;
