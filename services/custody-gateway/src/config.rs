use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Path to the JSON ledger configuration (committee, threshold, policy).
pub const CONFIG_ENV: &str = "CUSTODY_CONFIG";
/// Listen address override.
pub const BIND_ENV: &str = "CUSTODY_BIND";

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub ledger_config_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let ledger_config_path = lookup(CONFIG_ENV)
            .map(PathBuf::from)
            .with_context(|| format!("{} must point to a ledger config file", CONFIG_ENV))?;

        let bind = lookup(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("invalid {}: {}", BIND_ENV, bind))?;

        Ok(Self {
            ledger_config_path,
            bind_addr,
        })
    }
}
