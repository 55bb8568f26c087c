//! Payroll Ledger web server.
//!
//! Reads the configuration named by `PAYROLL_CONFIG` (default
//! `config/payroll.yaml`), opens the JSON data file and serves the web UI.

use std::env;
use std::net::{AddrParseError, SocketAddr};

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::config::ConfigLoader;
use payroll_ledger::error::PayrollError;
use payroll_ledger::storage::JsonFileStorage;
use payroll_ledger::store::PayrollStore;

const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    let config_path =
        env::var("PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load_or_default(&config_path)?.into_config();

    let addr: SocketAddr = config.server.bind_address.parse().map_err(|e: AddrParseError| {
        PayrollError::ConfigParseError {
            path: config_path.clone(),
            message: format!("server.bind_address: {}", e),
        }
    })?;

    let store = PayrollStore::open(
        JsonFileStorage::new(&config.storage.data_file),
        config.overtime_policy(),
    );
    info!(
        data_file = %config.storage.data_file.display(),
        employees = store.len(),
        threshold = %config.overtime.threshold,
        multiplier = %config.overtime.multiplier,
        "Payroll store ready"
    );

    let router = create_router(AppState::new(store)).layer(TraceLayer::new_for_http());

    info!(%addr, "Starting payroll server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
