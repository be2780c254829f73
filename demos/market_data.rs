//! Example: Fetching public market data from Binance.
//!
//! No credentials are needed. Set `RUST_LOG=binance_spot_client=debug` to see
//! every response body as it arrives.
//!
//! Run with: cargo run --example market_data

use binance_spot_client::spot::rest::SpotRestClient;
use binance_spot_client::spot::rest::public::{
    AggTradesRequest, ExchangeInfoRequest, KlinesRequest, OrderBookRequest, RecentTradesRequest,
    RollingWindowTickerRequest, SymbolsRequest, TickerRequest,
};
use binance_spot_client::types::{KlineInterval, TickerType, pretty_print};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = SpotRestClient::new()?;

    println!("=== Connectivity ===");
    client.ping().await?;
    let time = client.get_server_time().await?;
    println!("Server time: {}", time.server_time);

    println!("\n=== Exchange Info (BTCUSDT) ===");
    let info = client
        .get_exchange_info(Some(&ExchangeInfoRequest::for_symbol("BTCUSDT")))
        .await?;
    if let Some(symbol) = info.symbol("BTCUSDT") {
        println!(
            "{}: {} / {}, status {}, order types {:?}",
            symbol.symbol, symbol.base_asset, symbol.quote_asset, symbol.status, symbol.order_types
        );
    }

    println!("\n=== Order Book (BTCUSDT, top 5) ===");
    let book = client
        .get_order_book(&OrderBookRequest::new("BTCUSDT").limit(5))
        .await?;
    for (bid, ask) in book.bids.iter().zip(book.asks.iter()) {
        println!("{} @ {}    |    {} @ {}", bid.quantity, bid.price, ask.quantity, ask.price);
    }

    println!("\n=== Recent Trades ===");
    let trades = client
        .get_recent_trades(&RecentTradesRequest::new("BTCUSDT").limit(3))
        .await?;
    for trade in &trades {
        println!("#{} {} @ {} (buyer maker: {})", trade.id, trade.qty, trade.price, trade.is_buyer_maker);
    }

    println!("\n=== Aggregate Trades ===");
    let agg = client
        .get_agg_trades(&AggTradesRequest::new("BTCUSDT").limit(3))
        .await?;
    for trade in &agg {
        println!("#{} {} @ {}", trade.agg_trade_id, trade.quantity, trade.price);
    }

    println!("\n=== Klines (1h) ===");
    let klines = client
        .get_klines(&KlinesRequest::new("BTCUSDT", KlineInterval::Hour1).limit(3))
        .await?;
    for kline in &klines {
        println!(
            "{}: O={} H={} L={} C={} V={}",
            kline.open_time, kline.open, kline.high, kline.low, kline.close, kline.volume
        );
    }

    println!("\n=== Average Price ===");
    let avg = client.get_avg_price("BTCUSDT").await?;
    println!("{} minute average: {}", avg.mins, avg.price);

    println!("\n=== 24hr Ticker (MINI) ===");
    let request = TickerRequest::for_symbols(["BTCUSDT", "ETHUSDT"]).ticker_type(TickerType::Mini);
    for ticker in client.get_ticker_24hr(Some(&request)).await? {
        println!("{}: last {} volume {}", ticker.symbol, ticker.last_price, ticker.volume);
    }

    println!("\n=== Book Ticker ===");
    let tickers = client
        .get_book_ticker(Some(&SymbolsRequest::for_symbol("BTCUSDT")))
        .await?;
    if let Some(ticker) = tickers.first() {
        println!("bid {} ask {} spread {}", ticker.bid_price, ticker.ask_price, ticker.spread());
    }

    println!("\n=== Rolling Window (4h) ===");
    let request = RollingWindowTickerRequest::for_symbol("BTCUSDT").window_size("4h");
    let rolling = client.get_rolling_window_ticker(&request).await?;
    println!("{}", pretty_print(&rolling));

    Ok(())
}
