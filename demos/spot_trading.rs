//! Example: Placing, replacing and canceling orders on the Spot testnet.
//!
//! Run with: cargo run --example spot_trading

use std::str::FromStr;
use std::sync::Arc;

use binance_spot_client::auth::EnvCredentials;
use binance_spot_client::spot::rest::SpotRestClient;
use binance_spot_client::spot::rest::endpoints::BINANCE_TESTNET_URL;
use binance_spot_client::spot::rest::private::{
    CancelOpenOrdersRequest, CancelOrderRequest, CancelReplaceRequest, NewOrderRequest,
    QueryOrderRequest,
};
use binance_spot_client::types::{CancelReplaceMode, NewOrderRespType, TimeInForce};
use binance_spot_client::{OrderSide, OrderType};
use rust_decimal::Decimal;

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

    // A limit buy far below the market so it rests on the book.
    let request = NewOrderRequest::limit(
        "BTCUSDT",
        OrderSide::Buy,
        Decimal::from_str("0.001")?,
        Decimal::from_str("10000")?,
    )
    .new_order_resp_type(NewOrderRespType::Result);
    let placed = client.new_order(&request).await?;
    println!("Placed order {} ({:?})", placed.order_id, placed.status);

    let order = client
        .query_order(&QueryOrderRequest::by_order_id("BTCUSDT", placed.order_id))
        .await?;
    println!("Queried: {} {} @ {}", order.status, order.orig_qty, order.price);

    let replace = CancelReplaceRequest::new(
        "BTCUSDT",
        OrderSide::Buy,
        OrderType::Limit,
        CancelReplaceMode::StopOnFailure,
    )
    .cancel_order_id(placed.order_id)
    .time_in_force(TimeInForce::GTC)
    .quantity(Decimal::from_str("0.001")?)
    .price(Decimal::from_str("11000")?);
    let replaced = match client.cancel_replace_order(&replace).await {
        Ok(response) => response,
        Err(err) => {
            if let Some(api_error) = err.api_error() {
                println!("Cancel-replace failed: {}", api_error);
                if let Some(data) = &api_error.data {
                    println!("Leg details: {}", data);
                }
            }
            return Err(err.into());
        }
    };
    println!(
        "Cancel-replace: cancel {:?}, new order {:?}",
        replaced.cancel_result, replaced.new_order_result
    );

    if let Some(new_order) = replaced.new_order_response {
        let canceled = client
            .cancel_order(&CancelOrderRequest::by_order_id("BTCUSDT", new_order.order_id))
            .await?;
        println!("Canceled order {} ({})", canceled.order_id, canceled.status);
    }

    let swept = client
        .cancel_open_orders(&CancelOpenOrdersRequest::new("BTCUSDT"))
        .await;
    match swept {
        Ok(entries) => println!("Canceled {} remaining entries", entries.len()),
        Err(err) => println!("Nothing left to cancel: {}", err),
    }

    Ok(())
}
