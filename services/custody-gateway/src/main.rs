mod auth;
mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use config::GatewayConfig;
use contracts::config::LedgerConfig;
use contracts::{CustodyLedger, SharedLedger};
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting custody gateway");

    let config = GatewayConfig::from_env()?;
    let ledger_config = LedgerConfig::load(&config.ledger_config_path)?;
    let ledger = CustodyLedger::from_config(&ledger_config)?;

    let state = AppState::new(SharedLedger::new(ledger));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
