use binance_spot_client::ClientConfig;
use binance_spot_client::spot::rest::SpotRestClient;
use binance_spot_client::spot::rest::private::{AccountInfoRequest, OpenOrdersRequest};
use binance_spot_client::spot::rest::public::{OrderBookRequest, SymbolsRequest};

fn live_tests_enabled() -> bool {
    std::env::var("BINANCE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_spot_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = SpotRestClient::from_config(&ClientConfig::from_env()?)?;
    client.ping().await?;
    let time = client.get_server_time().await?;
    assert!(time.server_time > 0);

    let book = client
        .get_order_book(&OrderBookRequest::new("BTCUSDT").limit(5))
        .await?;
    assert!(book.bids.len() <= 5);

    let prices = client
        .get_ticker_price(Some(&SymbolsRequest::for_symbol("BTCUSDT")))
        .await?;
    assert_eq!(prices.len(), 1);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_spot_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    if config.credentials().is_none() {
        return Ok(());
    }
    let client = SpotRestClient::from_config(&config)?;

    let request = AccountInfoRequest::default().omit_zero_balances(true);
    let account = client.get_account_info(Some(&request)).await?;
    assert!(!account.account_type.is_empty());

    let _open = client
        .get_open_orders(Some(&OpenOrdersRequest::for_symbol("BTCUSDT")))
        .await?;
    let _usage = client.get_order_count_usage(None).await?;

    Ok(())
}
