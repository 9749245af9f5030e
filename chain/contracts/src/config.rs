//! Ledger deployment configuration
//!
//! The committee, threshold and release policy are the only inputs a ledger
//! takes. They are read from a JSON document such as:
//!
//! ```json
//! {
//!   "members": ["0x9997ed8442f70dc8365d8bebb2c72644b7c9adc4", "0x391b638eb7d21b122be2ed69eb81da7e0f168177"],
//!   "threshold": 1,
//!   "release_policy": { "kind": "depositor" }
//! }
//! ```
//!
//! Deployment parameter files that name the fields `_address` and `_number`
//! are accepted as well.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use types::ids::Address;

use crate::errors::ConfigError;
use crate::ledger::{CustodyLedger, ReleasePolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(alias = "_address")]
    pub members: Vec<Address>,
    #[serde(alias = "_number")]
    pub threshold: usize,
    #[serde(default)]
    pub release_policy: ReleasePolicy,
}

impl LedgerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            members = config.members.len(),
            threshold = config.threshold,
            "Loaded ledger configuration"
        );
        Ok(config)
    }

    /// Build a ledger from this configuration.
    pub fn build(&self) -> Result<CustodyLedger, ConfigError> {
        Ok(CustodyLedger::with_policy(
            self.members.clone(),
            self.threshold,
            self.release_policy,
        )?)
    }
}

impl CustodyLedger {
    pub fn from_config(config: &LedgerConfig) -> Result<Self, ConfigError> {
        config.build()
    }
}
