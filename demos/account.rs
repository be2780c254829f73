//! Example: Reading account state from signed endpoints.
//!
//! Run with: cargo run --example account

use std::sync::Arc;

use binance_spot_client::auth::EnvCredentials;
use binance_spot_client::spot::rest::SpotRestClient;
use binance_spot_client::spot::rest::endpoints::BINANCE_TESTNET_URL;
use binance_spot_client::spot::rest::private::{
    AccountInfoRequest, AllOrdersRequest, MyTradesRequest, OpenOrdersRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set BINANCE_API_KEY and BINANCE_SECRET_KEY to run this example.");
            return Ok(());
        }
    };

    let client = SpotRestClient::builder()
        .base_url(BINANCE_TESTNET_URL)
        .credentials(credentials)
        .build()?;

    let request = AccountInfoRequest::default()
        .omit_zero_balances(true)
        .recv_window(5000);
    let account = client.get_account_info(Some(&request)).await?;
    println!("Account type: {} (can trade: {})", account.account_type, account.can_trade);
    for balance in &account.balances {
        println!("  {}: {} free, {} locked", balance.asset, balance.free, balance.locked);
    }

    let open = client
        .get_open_orders(Some(&OpenOrdersRequest::for_symbol("BTCUSDT")))
        .await?;
    println!("Open BTCUSDT orders: {}", open.len());

    let orders = client
        .get_all_orders(&AllOrdersRequest::new("BTCUSDT").limit(5))
        .await?;
    for order in &orders {
        println!("  #{} {} {} {} @ {}", order.order_id, order.side, order.status, order.orig_qty, order.price);
    }

    let trades = client
        .get_my_trades(&MyTradesRequest::new("BTCUSDT").limit(5))
        .await?;
    println!("Recent BTCUSDT fills: {}", trades.len());

    for usage in client.get_order_count_usage(None).await? {
        println!(
            "Orders per {} {}: {}/{}",
            usage.interval_num, usage.interval, usage.count, usage.limit
        );
    }

    Ok(())
}
