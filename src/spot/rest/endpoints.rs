//! Binance REST API endpoint constants.

/// Base URL for the Binance Spot REST API.
pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

/// Alternate production hosts with the same API surface.
pub const BINANCE_ALT_BASE_URLS: [&str; 4] = [
    "https://api1.binance.com",
    "https://api2.binance.com",
    "https://api3.binance.com",
    "https://api4.binance.com",
];

/// Host serving only endpoints with no security type (public market data).
pub const BINANCE_MARKET_DATA_URL: &str = "https://data.binance.com";

/// Base URL for the Spot testnet.
pub const BINANCE_TESTNET_URL: &str = "https://testnet.binance.vision";

/// Public endpoints (no authentication required).
pub mod public {
    /// Test connectivity.
    pub const PING: &str = "/api/v3/ping";
    /// Get server time.
    pub const TIME: &str = "/api/v3/time";
    /// Exchange trading rules and symbol information.
    pub const EXCHANGE_INFO: &str = "/api/v3/exchangeInfo";
    /// Order book.
    pub const DEPTH: &str = "/api/v3/depth";
    /// Recent trades.
    pub const TRADES: &str = "/api/v3/trades";
    /// Older trades (API key required).
    pub const HISTORICAL_TRADES: &str = "/api/v3/historicalTrades";
    /// Compressed/aggregate trades.
    pub const AGG_TRADES: &str = "/api/v3/aggTrades";
    /// Kline/candlestick data.
    pub const KLINES: &str = "/api/v3/klines";
    /// Klines optimized for presentation.
    pub const UI_KLINES: &str = "/api/v3/uiKlines";
    /// Current average price.
    pub const AVG_PRICE: &str = "/api/v3/avgPrice";
    /// 24hr rolling window price change statistics.
    pub const TICKER_24HR: &str = "/api/v3/ticker/24hr";
    /// Latest price.
    pub const TICKER_PRICE: &str = "/api/v3/ticker/price";
    /// Best price/qty on the order book.
    pub const BOOK_TICKER: &str = "/api/v3/ticker/bookTicker";
    /// Rolling window price change statistics.
    pub const TICKER: &str = "/api/v3/ticker";
    /// Wallet system status.
    pub const SYSTEM_STATUS: &str = "/sapi/v1/system/status";
}

/// Private endpoints (signed).
pub mod private {
    // Account endpoints
    /// Account information.
    pub const ACCOUNT: &str = "/api/v3/account";
    /// Account status.
    pub const ACCOUNT_STATUS: &str = "/sapi/v1/account/status";
    /// Account trade list.
    pub const MY_TRADES: &str = "/api/v3/myTrades";
    /// Current order count usage.
    pub const RATE_LIMIT_ORDER: &str = "/api/v3/rateLimit/order";

    // Trading endpoints
    /// New order, cancel order and query order.
    pub const ORDER: &str = "/api/v3/order";
    /// Cancel an order and place a new one.
    pub const CANCEL_REPLACE: &str = "/api/v3/order/cancelReplace";
    /// Current open orders, cancel all open orders on a symbol.
    pub const OPEN_ORDERS: &str = "/api/v3/openOrders";
    /// All account orders.
    pub const ALL_ORDERS: &str = "/api/v3/allOrders";
}
