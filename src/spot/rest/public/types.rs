//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::json_list;
use crate::types::{KlineInterval, OrderType, TickerType};

/// Server time response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Server time in milliseconds since the epoch.
    pub server_time: i64,
}

/// Wallet system status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    /// 0 for normal, 1 for system maintenance.
    pub status: u8,
    /// "normal" or "system_maintenance".
    pub msg: String,
}

impl SystemStatus {
    /// Whether the system is operating normally.
    pub fn is_normal(&self) -> bool {
        self.status == 0
    }
}

/// Request parameters for exchange info.
///
/// Set at most one of `symbol`, `symbols` or `permissions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExchangeInfoRequest {
    /// A single symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Several symbols.
    #[serde(with = "json_list", skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
    /// Filter by permission, e.g. `SPOT`.
    #[serde(with = "json_list", skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl ExchangeInfoRequest {
    /// Request info for a single symbol.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Default::default()
        }
    }

    /// Request info for several symbols.
    pub fn for_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: Some(symbols.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Request info for all symbols with the given permissions.
    pub fn for_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: Some(permissions.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

/// Exchange trading rules and symbol information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    /// Server timezone (always UTC).
    pub timezone: String,
    /// Server time in milliseconds.
    pub server_time: i64,
    /// Rate limits applied to the API.
    #[serde(default)]
    pub rate_limits: Vec<RateLimit>,
    /// Exchange-wide filters.
    #[serde(default)]
    pub exchange_filters: Vec<serde_json::Value>,
    /// Symbols matching the request.
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

/// A rate limit rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    /// `REQUEST_WEIGHT`, `ORDERS` or `RAW_REQUESTS`.
    pub rate_limit_type: String,
    /// `SECOND`, `MINUTE` or `DAY`.
    pub interval: String,
    /// Number of intervals in the window.
    pub interval_num: u32,
    /// Limit within the window.
    pub limit: u32,
}

/// Trading rules for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Symbol name, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Trading status, e.g. `TRADING` or `BREAK`.
    pub status: String,
    /// Base asset.
    pub base_asset: String,
    /// Base asset precision.
    pub base_asset_precision: u32,
    /// Quote asset.
    pub quote_asset: String,
    /// Quote asset precision.
    #[serde(default)]
    pub quote_asset_precision: u32,
    /// Order types accepted on this symbol.
    #[serde(default)]
    pub order_types: Vec<OrderType>,
    /// Whether iceberg orders are allowed.
    #[serde(default)]
    pub iceberg_allowed: bool,
    /// Whether OCO orders are allowed.
    #[serde(default)]
    pub oco_allowed: bool,
    /// Whether cancel-replace is allowed.
    #[serde(default)]
    pub cancel_replace_allowed: bool,
    /// Whether spot trading is allowed.
    #[serde(default)]
    pub is_spot_trading_allowed: bool,
    /// Whether margin trading is allowed.
    #[serde(default)]
    pub is_margin_trading_allowed: bool,
    /// Symbol filters (price, lot size, notional, ...).
    #[serde(default)]
    pub filters: Vec<serde_json::Value>,
    /// Permissions, e.g. `SPOT`.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl ExchangeInfo {
    /// Find a symbol by name.
    pub fn symbol(&self, symbol: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|s| s.symbol == symbol)
    }
}

/// Request parameters for order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Depth (default 100, max 5000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl OrderBookRequest {
    /// Create a new order book request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    /// Set the depth.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Order book snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    /// Last update ID.
    pub last_update_id: u64,
    /// Bid levels, best first.
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best first.
    pub asks: Vec<PriceLevel>,
}

/// A single order book level, sent as `["price", "qty"]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Decimal, Decimal)")]
pub struct PriceLevel {
    /// Price.
    pub price: Decimal,
    /// Quantity.
    pub quantity: Decimal,
}

impl From<(Decimal, Decimal)> for PriceLevel {
    fn from((price, quantity): (Decimal, Decimal)) -> Self {
        Self { price, quantity }
    }
}

/// Request parameters for recent trades.
#[derive(Debug, Clone, Serialize)]
pub struct RecentTradesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Number of trades (default 500, max 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RecentTradesRequest {
    /// Create a new recent trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    /// Set the number of trades.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request parameters for historical trades.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalTradesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Number of trades (default 500, max 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Trade ID to fetch from. Defaults to the most recent trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
}

impl HistoricalTradesRequest {
    /// Create a new historical trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
            from_id: None,
        }
    }

    /// Set the number of trades.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start from a trade ID.
    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }
}

/// A public trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade ID.
    pub id: u64,
    /// Price.
    pub price: Decimal,
    /// Base quantity.
    pub qty: Decimal,
    /// Quote quantity.
    pub quote_qty: Decimal,
    /// Trade time in milliseconds.
    pub time: i64,
    /// Whether the buyer was the maker.
    pub is_buyer_maker: bool,
    /// Whether the trade was the best price match.
    #[serde(default)]
    pub is_best_match: bool,
}

/// Request parameters for aggregate trades.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggTradesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Aggregate trade ID to fetch from (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    /// Start time in milliseconds (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Number of trades (default 500, max 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AggTradesRequest {
    /// Create a new aggregate trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            from_id: None,
            start_time: None,
            end_time: None,
            limit: None,
        }
    }

    /// Start from an aggregate trade ID.
    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }

    /// Set the start time.
    pub fn start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end time.
    pub fn end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Set the number of trades.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// An aggregate trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggTrade {
    /// Aggregate trade ID.
    #[serde(rename = "a")]
    pub agg_trade_id: u64,
    /// Price.
    #[serde(rename = "p")]
    pub price: Decimal,
    /// Quantity.
    #[serde(rename = "q")]
    pub quantity: Decimal,
    /// First trade ID.
    #[serde(rename = "f")]
    pub first_trade_id: u64,
    /// Last trade ID.
    #[serde(rename = "l")]
    pub last_trade_id: u64,
    /// Timestamp in milliseconds.
    #[serde(rename = "T")]
    pub timestamp: i64,
    /// Whether the buyer was the maker.
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
    /// Whether the trade was the best price match.
    #[serde(rename = "M", default)]
    pub is_best_match: bool,
}

/// Request parameters for klines and UI klines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KlinesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Kline interval.
    pub interval: KlineInterval,
    /// Start time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Time zone for interpreting intervals, e.g. `+08:00` (default `0`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Number of klines (default 500, max 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl KlinesRequest {
    /// Create a new klines request.
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            start_time: None,
            end_time: None,
            time_zone: None,
            limit: None,
        }
    }

    /// Set the start time.
    pub fn start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end time.
    pub fn end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Set the time zone.
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Set the number of klines.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A kline/candlestick.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kline {
    /// Open time in milliseconds.
    pub open_time: i64,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Base asset volume.
    pub volume: Decimal,
    /// Close time in milliseconds.
    pub close_time: i64,
    /// Quote asset volume.
    pub quote_volume: Decimal,
    /// Number of trades.
    pub trades: u64,
    /// Taker buy base asset volume.
    pub taker_buy_base_volume: Decimal,
    /// Taker buy quote asset volume.
    pub taker_buy_quote_volume: Decimal,
}

impl<'de> Deserialize<'de> for Kline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (
            i64,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            i64,
            Decimal,
            u64,
            Decimal,
            Decimal,
            serde::de::IgnoredAny,
        ) = Deserialize::deserialize(deserializer)?;
        Ok(Kline {
            open_time: arr.0,
            open: arr.1,
            high: arr.2,
            low: arr.3,
            close: arr.4,
            volume: arr.5,
            close_time: arr.6,
            quote_volume: arr.7,
            trades: arr.8,
            taker_buy_base_volume: arr.9,
            taker_buy_quote_volume: arr.10,
        })
    }
}

/// Current average price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvgPrice {
    /// Averaging window in minutes.
    pub mins: u32,
    /// Average price.
    pub price: Decimal,
    /// Time of the last trade in the window.
    #[serde(default)]
    pub close_time: Option<i64>,
}

/// Request parameters for 24hr ticker statistics.
///
/// With neither `symbol` nor `symbols`, statistics for every symbol are returned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickerRequest {
    /// A single symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Several symbols.
    #[serde(with = "json_list", skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
    /// `FULL` (default) or `MINI`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticker_type: Option<TickerType>,
}

impl TickerRequest {
    /// Request statistics for a single symbol.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Default::default()
        }
    }

    /// Request statistics for several symbols.
    pub fn for_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: Some(symbols.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Set the payload size.
    pub fn ticker_type(mut self, ticker_type: TickerType) -> Self {
        self.ticker_type = Some(ticker_type);
        self
    }
}

/// Symbol filter shared by the price and book tickers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SymbolsRequest {
    /// A single symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Several symbols.
    #[serde(with = "json_list", skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
}

impl SymbolsRequest {
    /// Filter on a single symbol.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            symbols: None,
        }
    }

    /// Filter on several symbols.
    pub fn for_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbol: None,
            symbols: Some(symbols.into_iter().map(Into::into).collect()),
        }
    }
}

/// 24hr ticker statistics.
///
/// Fields marked optional are absent from `MINI` responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hr {
    pub symbol: String,
    #[serde(default)]
    pub price_change: Option<Decimal>,
    #[serde(default)]
    pub price_change_percent: Option<Decimal>,
    #[serde(default)]
    pub weighted_avg_price: Option<Decimal>,
    #[serde(default)]
    pub prev_close_price: Option<Decimal>,
    pub last_price: Decimal,
    #[serde(default)]
    pub last_qty: Option<Decimal>,
    #[serde(default)]
    pub bid_price: Option<Decimal>,
    #[serde(default)]
    pub bid_qty: Option<Decimal>,
    #[serde(default)]
    pub ask_price: Option<Decimal>,
    #[serde(default)]
    pub ask_qty: Option<Decimal>,
    pub open_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub volume: Decimal,
    pub quote_volume: Decimal,
    pub open_time: i64,
    pub close_time: i64,
    /// First trade ID (-1 when there were no trades).
    pub first_id: i64,
    /// Last trade ID (-1 when there were no trades).
    pub last_id: i64,
    /// Trade count.
    pub count: u64,
}

/// Latest price for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerPrice {
    /// Trading symbol.
    pub symbol: String,
    /// Latest price.
    pub price: Decimal,
}

/// Best bid and ask for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    /// Trading symbol.
    pub symbol: String,
    /// Best bid price.
    pub bid_price: Decimal,
    /// Quantity at the best bid.
    pub bid_qty: Decimal,
    /// Best ask price.
    pub ask_price: Decimal,
    /// Quantity at the best ask.
    pub ask_qty: Decimal,
}

impl BookTicker {
    /// Ask minus bid.
    pub fn spread(&self) -> Decimal {
        self.ask_price - self.bid_price
    }
}

/// Request parameters for rolling window ticker statistics.
///
/// One of `symbol` or `symbols` is required.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingWindowTickerRequest {
    /// A single symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Several symbols (max 100).
    #[serde(with = "json_list", skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
    /// Window size, `1m`..`59m`, `1h`..`23h` or `1d`..`7d` (default `1d`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<String>,
    /// `FULL` (default) or `MINI`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticker_type: Option<TickerType>,
}

impl RollingWindowTickerRequest {
    /// Request statistics for a single symbol.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            symbols: None,
            window_size: None,
            ticker_type: None,
        }
    }

    /// Request statistics for several symbols.
    pub fn for_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbol: None,
            symbols: Some(symbols.into_iter().map(Into::into).collect()),
            window_size: None,
            ticker_type: None,
        }
    }

    /// Set the window size.
    pub fn window_size(mut self, window_size: impl Into<String>) -> Self {
        self.window_size = Some(window_size.into());
        self
    }

    /// Set the payload size.
    pub fn ticker_type(mut self, ticker_type: TickerType) -> Self {
        self.ticker_type = Some(ticker_type);
        self
    }
}

/// Rolling window ticker statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingWindowTicker {
    pub symbol: String,
    #[serde(default)]
    pub price_change: Option<Decimal>,
    #[serde(default)]
    pub price_change_percent: Option<Decimal>,
    #[serde(default)]
    pub weighted_avg_price: Option<Decimal>,
    pub open_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub last_price: Decimal,
    pub volume: Decimal,
    pub quote_volume: Decimal,
    pub open_time: i64,
    pub close_time: i64,
    pub first_id: i64,
    pub last_id: i64,
    pub count: u64,
}
