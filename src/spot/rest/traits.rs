//! Trait definition for the Binance REST API client.
//!
//! [`BinanceClient`] abstracts every REST operation so callers can depend on
//! the trait and substitute a mock or a wrapper in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use binance_spot_client::spot::rest::{BinanceClient, SpotRestClient};
//!
//! async fn check_clock<C: BinanceClient>(client: &C) -> Result<(), binance_spot_client::BinanceError> {
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {}", time.server_time);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::BinanceError;
use crate::spot::rest::private::{
    AccountInfo, AccountInfoRequest, AccountStatus, AccountTrade, AllOrdersRequest,
    CancelOpenOrdersRequest, CancelOrderRequest, CancelOrderResponse, CancelReplaceRequest,
    CancelReplaceResponse, CanceledOpenOrder, MyTradesRequest, NewOrderRequest, NewOrderResponse,
    OpenOrdersRequest, Order, OrderCountUsage, QueryOrderRequest, RecvWindowRequest,
};
use crate::spot::rest::public::{
    AggTrade, AggTradesRequest, AvgPrice, BookTicker, ExchangeInfo, ExchangeInfoRequest,
    HistoricalTradesRequest, Kline, KlinesRequest, OrderBook, OrderBookRequest,
    RecentTradesRequest, RollingWindowTicker, RollingWindowTickerRequest, ServerTime,
    SymbolsRequest, SystemStatus, Ticker24hr, TickerPrice, TickerRequest, Trade,
};

/// Trait defining all Binance Spot REST API operations.
///
/// All methods are async and return `Result<T, BinanceError>`.
pub trait BinanceClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Test connectivity.
    fn ping(&self) -> impl Future<Output = Result<(), BinanceError>> + Send;

    /// Get the server time.
    fn get_server_time(&self) -> impl Future<Output = Result<ServerTime, BinanceError>> + Send;

    /// Get exchange trading rules and symbol information.
    fn get_exchange_info(
        &self,
        request: Option<&ExchangeInfoRequest>,
    ) -> impl Future<Output = Result<ExchangeInfo, BinanceError>> + Send;

    /// Get the order book for a symbol.
    fn get_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> impl Future<Output = Result<OrderBook, BinanceError>> + Send;

    /// Get recent trades.
    fn get_recent_trades(
        &self,
        request: &RecentTradesRequest,
    ) -> impl Future<Output = Result<Vec<Trade>, BinanceError>> + Send;

    /// Get older trades.
    fn get_historical_trades(
        &self,
        request: &HistoricalTradesRequest,
    ) -> impl Future<Output = Result<Vec<Trade>, BinanceError>> + Send;

    /// Get aggregate trades.
    fn get_agg_trades(
        &self,
        request: &AggTradesRequest,
    ) -> impl Future<Output = Result<Vec<AggTrade>, BinanceError>> + Send;

    /// Get klines.
    fn get_klines(
        &self,
        request: &KlinesRequest,
    ) -> impl Future<Output = Result<Vec<Kline>, BinanceError>> + Send;

    /// Get UI klines.
    fn get_ui_klines(
        &self,
        request: &KlinesRequest,
    ) -> impl Future<Output = Result<Vec<Kline>, BinanceError>> + Send;

    /// Get the current average price.
    fn get_avg_price(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<AvgPrice, BinanceError>> + Send;

    /// Get 24hr ticker statistics.
    fn get_ticker_24hr(
        &self,
        request: Option<&TickerRequest>,
    ) -> impl Future<Output = Result<Vec<Ticker24hr>, BinanceError>> + Send;

    /// Get latest prices.
    fn get_ticker_price(
        &self,
        request: Option<&SymbolsRequest>,
    ) -> impl Future<Output = Result<Vec<TickerPrice>, BinanceError>> + Send;

    /// Get best bid/ask.
    fn get_book_ticker(
        &self,
        request: Option<&SymbolsRequest>,
    ) -> impl Future<Output = Result<Vec<BookTicker>, BinanceError>> + Send;

    /// Get rolling window ticker statistics.
    fn get_rolling_window_ticker(
        &self,
        request: &RollingWindowTickerRequest,
    ) -> impl Future<Output = Result<Vec<RollingWindowTicker>, BinanceError>> + Send;

    /// Get the wallet system status.
    fn get_system_status(&self) -> impl Future<Output = Result<SystemStatus, BinanceError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get account information.
    fn get_account_info(
        &self,
        request: Option<&AccountInfoRequest>,
    ) -> impl Future<Output = Result<AccountInfo, BinanceError>> + Send;

    /// Get the account status.
    fn get_account_status(
        &self,
        request: Option<&RecvWindowRequest>,
    ) -> impl Future<Output = Result<AccountStatus, BinanceError>> + Send;

    /// Get the account trade list.
    fn get_my_trades(
        &self,
        request: &MyTradesRequest,
    ) -> impl Future<Output = Result<Vec<AccountTrade>, BinanceError>> + Send;

    /// Get the unfilled order count.
    fn get_order_count_usage(
        &self,
        request: Option<&RecvWindowRequest>,
    ) -> impl Future<Output = Result<Vec<OrderCountUsage>, BinanceError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Place a new order.
    fn new_order(
        &self,
        request: &NewOrderRequest,
    ) -> impl Future<Output = Result<NewOrderResponse, BinanceError>> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> impl Future<Output = Result<CancelOrderResponse, BinanceError>> + Send;

    /// Cancel all open orders on a symbol.
    fn cancel_open_orders(
        &self,
        request: &CancelOpenOrdersRequest,
    ) -> impl Future<Output = Result<Vec<CanceledOpenOrder>, BinanceError>> + Send;

    /// Cancel an order and place a new one.
    fn cancel_replace_order(
        &self,
        request: &CancelReplaceRequest,
    ) -> impl Future<Output = Result<CancelReplaceResponse, BinanceError>> + Send;

    /// Query an order.
    fn query_order(
        &self,
        request: &QueryOrderRequest,
    ) -> impl Future<Output = Result<Order, BinanceError>> + Send;

    /// Get open orders.
    fn get_open_orders(
        &self,
        request: Option<&OpenOrdersRequest>,
    ) -> impl Future<Output = Result<Vec<Order>, BinanceError>> + Send;

    /// Get all orders on a symbol.
    fn get_all_orders(
        &self,
        request: &AllOrdersRequest,
    ) -> impl Future<Output = Result<Vec<Order>, BinanceError>> + Send;
}
