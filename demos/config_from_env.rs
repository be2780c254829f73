//! Example: Building a client from `BINANCE_*` environment variables.
//!
//! Reads `BINANCE_API_KEY`, `BINANCE_SECRET_KEY`, `BINANCE_TESTNET`,
//! `BINANCE_BASE_URL`, `BINANCE_PROXY_URL` and `BINANCE_TIMEOUT_MS`, also
//! from a `.env` file.
//!
//! Run with: cargo run --example config_from_env

use binance_spot_client::ClientConfig;
use binance_spot_client::spot::rest::SpotRestClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env()?;
    println!("{:?}", config);

    let client = SpotRestClient::from_config(&config)?;
    println!("{:?}", client);

    let status = client.get_system_status().await;
    match status {
        Ok(status) => println!("Wallet system: {} ({})", status.msg, status.status),
        Err(err) => println!("System status unavailable on {}: {}", client.base_url(), err),
    }

    let time = client.get_server_time().await?;
    println!("Server time: {}", time.server_time);

    if client.has_credentials() {
        let account_status = client.get_account_status(None).await?;
        println!("Account status: {}", account_status.data);
    }

    Ok(())
}
