//! Public REST API endpoints (market data).

mod types;

pub use types::*;

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::public;

impl SpotRestClient {
    /// Test connectivity to the REST API.
    pub async fn ping(&self) -> Result<(), BinanceError> {
        let _: serde_json::Value = self.public_get(public::PING).await?;
        Ok(())
    }

    /// Get the server time.
    ///
    /// Useful for checking how far the local clock drifts from the exchange.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_spot_client::spot::rest::SpotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SpotRestClient::new()?;
    ///     let time = client.get_server_time().await?;
    ///     println!("Server time: {}", time.server_time);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_server_time(&self) -> Result<ServerTime, BinanceError> {
        self.public_get(public::TIME).await
    }

    /// Get exchange trading rules and symbol information.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional filter by symbol(s) or permissions.
    pub async fn get_exchange_info(
        &self,
        request: Option<&ExchangeInfoRequest>,
    ) -> Result<ExchangeInfo, BinanceError> {
        match request {
            Some(req) => self.public_get_with_params(public::EXCHANGE_INFO, req).await,
            None => self.public_get(public::EXCHANGE_INFO).await,
        }
    }

    /// Get the order book for a symbol.
    pub async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, BinanceError> {
        self.public_get_with_params(public::DEPTH, request).await
    }

    /// Get recent trades for a symbol.
    pub async fn get_recent_trades(
        &self,
        request: &RecentTradesRequest,
    ) -> Result<Vec<Trade>, BinanceError> {
        self.public_get_with_params(public::TRADES, request).await
    }

    /// Get older trades for a symbol.
    ///
    /// Requires an API key (no signature).
    pub async fn get_historical_trades(
        &self,
        request: &HistoricalTradesRequest,
    ) -> Result<Vec<Trade>, BinanceError> {
        self.keyed_get_with_params(public::HISTORICAL_TRADES, request)
            .await
    }

    /// Get compressed, aggregate trades.
    pub async fn get_agg_trades(
        &self,
        request: &AggTradesRequest,
    ) -> Result<Vec<AggTrade>, BinanceError> {
        self.public_get_with_params(public::AGG_TRADES, request).await
    }

    /// Get kline/candlestick bars.
    pub async fn get_klines(&self, request: &KlinesRequest) -> Result<Vec<Kline>, BinanceError> {
        self.public_get_with_params(public::KLINES, request).await
    }

    /// Get kline/candlestick bars optimized for presentation.
    pub async fn get_ui_klines(&self, request: &KlinesRequest) -> Result<Vec<Kline>, BinanceError> {
        self.public_get_with_params(public::UI_KLINES, request).await
    }

    /// Get the current average price for a symbol.
    pub async fn get_avg_price(&self, symbol: &str) -> Result<AvgPrice, BinanceError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            symbol: &'a str,
        }
        self.public_get_with_params(public::AVG_PRICE, &Params { symbol })
            .await
    }

    /// Get 24hr rolling window price change statistics.
    ///
    /// Without a request, statistics for every symbol are returned.
    pub async fn get_ticker_24hr(
        &self,
        request: Option<&TickerRequest>,
    ) -> Result<Vec<Ticker24hr>, BinanceError> {
        let default = TickerRequest::default();
        self.public_get_many(public::TICKER_24HR, request.unwrap_or(&default))
            .await
    }

    /// Get the latest price for one, several or all symbols.
    pub async fn get_ticker_price(
        &self,
        request: Option<&SymbolsRequest>,
    ) -> Result<Vec<TickerPrice>, BinanceError> {
        let default = SymbolsRequest::default();
        self.public_get_many(public::TICKER_PRICE, request.unwrap_or(&default))
            .await
    }

    /// Get the best price and quantity on the order book.
    pub async fn get_book_ticker(
        &self,
        request: Option<&SymbolsRequest>,
    ) -> Result<Vec<BookTicker>, BinanceError> {
        let default = SymbolsRequest::default();
        self.public_get_many(public::BOOK_TICKER, request.unwrap_or(&default))
            .await
    }

    /// Get price change statistics within a requested window.
    pub async fn get_rolling_window_ticker(
        &self,
        request: &RollingWindowTickerRequest,
    ) -> Result<Vec<RollingWindowTicker>, BinanceError> {
        self.public_get_many(public::TICKER, request).await
    }

    /// Get the wallet system status.
    pub async fn get_system_status(&self) -> Result<SystemStatus, BinanceError> {
        self.public_get(public::SYSTEM_STATUS).await
    }

    /// GET an arbitrary public path and return the raw JSON.
    ///
    /// `path` may carry its own query string, e.g. `/api/v3/depth?symbol=BTCUSDT`.
    /// A missing leading `/` is added.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, BinanceError> {
        self.public_get(path).await
    }
}
