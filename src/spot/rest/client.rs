//! Binance Spot REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{CredentialsProvider, SystemTimestamp, TimestampProvider, sign_query};
use crate::config::{ClientConfig, DEFAULT_TIMEOUT_MS};
use crate::error::{ApiError, BinanceError};
use crate::spot::rest::endpoints::BINANCE_BASE_URL;
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
use crate::spot::rest::traits::BinanceClient;
use crate::types::serde_helpers::parse_one_or_many;

/// Header carrying the API key on `MARKET_DATA` and `SIGNED` requests.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// The Binance Spot REST API client.
///
/// Every endpoint method forwards the fields that are set on its request
/// struct, performs one round trip, logs the outcome and returns it unchanged.
/// There is no retry by default and no rate-limit bookkeeping.
///
/// # Example
///
/// ```rust,no_run
/// use binance_spot_client::spot::rest::SpotRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = SpotRestClient::new()?;
///
///     let time = client.get_server_time().await?;
///     println!("Server time: {}", time.server_time);
///
///     Ok(())
/// }
/// ```
///
/// For signed endpoints, provide credentials:
///
/// ```rust,no_run
/// use binance_spot_client::spot::rest::SpotRestClient;
/// use binance_spot_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "secret_key"));
///     let client = SpotRestClient::builder()
///         .credentials(credentials)
///         .proxy("http://127.0.0.1:7890")
///         .build()?;
///
///     let account = client.get_account_info(None).await?;
///     println!("Balances: {}", account.balances.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
}

impl SpotRestClient {
    /// Create a production client for public endpoints with default settings.
    ///
    /// Use [`SpotRestClient::builder()`] to configure credentials, testnet or a proxy.
    pub fn new() -> Result<Self, BinanceError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> SpotRestClientBuilder {
        SpotRestClientBuilder::new()
    }

    /// Build a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, BinanceError> {
        SpotRestClientBuilder::from_config(config).build()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn url(&self, endpoint: &str, query: &str) -> String {
        let slash = if endpoint.starts_with('/') { "" } else { "/" };
        if query.is_empty() {
            format!("{}{}{}", self.base_url, slash, endpoint)
        } else {
            format!("{}{}{}?{}", self.base_url, slash, endpoint, query)
        }
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        let request = self.http_client.get(self.url(endpoint, ""));
        self.dispatch(endpoint, request, |body: &str| serde_json::from_str(body))
            .await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = encode_params(params)?;
        let request = self.http_client.get(self.url(endpoint, &query));
        self.dispatch(endpoint, request, |body: &str| serde_json::from_str(body))
            .await
    }

    /// Make a public GET request whose response is one object or an array of them.
    pub(crate) async fn public_get_many<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<Vec<T>, BinanceError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = encode_params(params)?;
        let request = self.http_client.get(self.url(endpoint, &query));
        self.dispatch(endpoint, request, parse_one_or_many).await
    }

    /// Make a GET request that needs the API key header but no signature.
    pub(crate) async fn keyed_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BinanceError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let query = encode_params(params)?;
        let request = self
            .http_client
            .get(self.url(endpoint, &query))
            .header(API_KEY_HEADER, &creds.api_key);
        self.dispatch(endpoint, request, |body: &str| serde_json::from_str(body))
            .await
    }

    /// Make a signed request.
    ///
    /// Appends `timestamp` to the encoded parameters, signs the whole query
    /// string and appends `signature`. All parameters travel in the query
    /// string, whatever the method.
    pub(crate) async fn signed_request<T, P>(
        &self,
        method: Method,
        endpoint: &str,
        params: &P,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BinanceError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let mut query = encode_params(params)?;
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&format!(
            "timestamp={}",
            self.timestamp_provider.timestamp_millis()
        ));

        let signature = sign_query(creds, &query)?;
        query.push_str("&signature=");
        query.push_str(&signature);

        let request = self
            .http_client
            .request(method, self.url(endpoint, &query))
            .header(API_KEY_HEADER, &creds.api_key);
        self.dispatch(endpoint, request, |body: &str| serde_json::from_str(body))
            .await
    }

    /// Send a request, decode the body, and log the outcome.
    async fn dispatch<T, F>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
        decode: F,
    ) -> Result<T, BinanceError>
    where
        F: FnOnce(&str) -> Result<T, serde_json::Error>,
    {
        let result = Self::execute(request).await.and_then(|body| {
            tracing::debug!(endpoint, body = %body, "Binance response");
            decode(&body).map_err(|e| {
                BinanceError::InvalidResponse(format!(
                    "Failed to parse response: {}. Body: {}",
                    e, body
                ))
            })
        });

        if let Err(e) = &result {
            tracing::warn!(endpoint, error = %e, "Binance request failed");
        }
        result
    }

    /// Send a request and return the body of a successful response.
    async fn execute(request: RequestBuilder) -> Result<String, BinanceError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        // Binance reports failures with a non-2xx status and a {code, msg} body.
        Err(match ApiError::from_body(status.as_u16(), &body) {
            Some(api_error) => BinanceError::Api(api_error),
            None => BinanceError::InvalidResponse(format!("HTTP {}: {}", status, body)),
        })
    }
}

fn encode_params<P>(params: &P) -> Result<String, BinanceError>
where
    P: Serialize + ?Sized,
{
    Ok(serde_urlencoded::to_string(params)?)
}

impl std::fmt::Debug for SpotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Proxy URL schemes the HTTP client can route through.
const PROXY_SCHEMES: [&str; 4] = ["http", "https", "socks5", "socks5h"];

/// Builder for [`SpotRestClient`].
pub struct SpotRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    proxy_url: Option<String>,
    timeout: Duration,
    max_retries: u32,
}

impl SpotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BINANCE_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            user_agent: None,
            proxy_url: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_retries: 0,
        }
    }

    /// Create a builder pre-filled from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new()
            .base_url(config.base_url.clone())
            .timeout(config.timeout())
            .max_retries(config.max_retries);
        if let Some(credentials) = config.credentials() {
            builder = builder.credentials(Arc::new(credentials));
        }
        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(proxy_url.clone());
        }
        builder
    }

    /// Set the base URL (testnet, an alternate host, or a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for keyed and signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider for signed requests.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Route all requests through a proxy.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for transient failures (default 0).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    ///
    /// Fails when the base URL or proxy URL cannot be parsed, the proxy
    /// scheme is not HTTP(S) or SOCKS5, or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<SpotRestClient, BinanceError> {
        url::Url::parse(&self.base_url)?;
        let base_url = self.base_url.trim_end_matches('/').to_string();

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("binance-spot-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("binance-spot-client"));
        headers.insert(USER_AGENT, header_value);

        let mut http_builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout);
        if let Some(proxy_url) = &self.proxy_url {
            let proxy_url = url::Url::parse(proxy_url)?;
            if !PROXY_SCHEMES.contains(&proxy_url.scheme()) {
                return Err(BinanceError::Config(format!(
                    "unsupported proxy scheme '{}', expected one of {:?}",
                    proxy_url.scheme(),
                    PROXY_SCHEMES
                )));
            }
            http_builder = http_builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }
        let reqwest_client = http_builder.build()?;

        let mut client = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client = client.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemTimestamp));

        Ok(SpotRestClient {
            http_client: client.build(),
            base_url,
            credentials: self.credentials,
            timestamp_provider,
        })
    }
}

impl Default for SpotRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// BinanceClient trait implementation.

impl BinanceClient for SpotRestClient {
    // ========== Public Endpoints ==========

    async fn ping(&self) -> Result<(), BinanceError> {
        SpotRestClient::ping(self).await
    }

    async fn get_server_time(&self) -> Result<ServerTime, BinanceError> {
        SpotRestClient::get_server_time(self).await
    }

    async fn get_exchange_info(
        &self,
        request: Option<&ExchangeInfoRequest>,
    ) -> Result<ExchangeInfo, BinanceError> {
        SpotRestClient::get_exchange_info(self, request).await
    }

    async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, BinanceError> {
        SpotRestClient::get_order_book(self, request).await
    }

    async fn get_recent_trades(
        &self,
        request: &RecentTradesRequest,
    ) -> Result<Vec<Trade>, BinanceError> {
        SpotRestClient::get_recent_trades(self, request).await
    }

    async fn get_historical_trades(
        &self,
        request: &HistoricalTradesRequest,
    ) -> Result<Vec<Trade>, BinanceError> {
        SpotRestClient::get_historical_trades(self, request).await
    }

    async fn get_agg_trades(
        &self,
        request: &AggTradesRequest,
    ) -> Result<Vec<AggTrade>, BinanceError> {
        SpotRestClient::get_agg_trades(self, request).await
    }

    async fn get_klines(&self, request: &KlinesRequest) -> Result<Vec<Kline>, BinanceError> {
        SpotRestClient::get_klines(self, request).await
    }

    async fn get_ui_klines(&self, request: &KlinesRequest) -> Result<Vec<Kline>, BinanceError> {
        SpotRestClient::get_ui_klines(self, request).await
    }

    async fn get_avg_price(&self, symbol: &str) -> Result<AvgPrice, BinanceError> {
        SpotRestClient::get_avg_price(self, symbol).await
    }

    async fn get_ticker_24hr(
        &self,
        request: Option<&TickerRequest>,
    ) -> Result<Vec<Ticker24hr>, BinanceError> {
        SpotRestClient::get_ticker_24hr(self, request).await
    }

    async fn get_ticker_price(
        &self,
        request: Option<&SymbolsRequest>,
    ) -> Result<Vec<TickerPrice>, BinanceError> {
        SpotRestClient::get_ticker_price(self, request).await
    }

    async fn get_book_ticker(
        &self,
        request: Option<&SymbolsRequest>,
    ) -> Result<Vec<BookTicker>, BinanceError> {
        SpotRestClient::get_book_ticker(self, request).await
    }

    async fn get_rolling_window_ticker(
        &self,
        request: &RollingWindowTickerRequest,
    ) -> Result<Vec<RollingWindowTicker>, BinanceError> {
        SpotRestClient::get_rolling_window_ticker(self, request).await
    }

    async fn get_system_status(&self) -> Result<SystemStatus, BinanceError> {
        SpotRestClient::get_system_status(self).await
    }

    // ========== Private Endpoints - Account ==========

    async fn get_account_info(
        &self,
        request: Option<&AccountInfoRequest>,
    ) -> Result<AccountInfo, BinanceError> {
        SpotRestClient::get_account_info(self, request).await
    }

    async fn get_account_status(
        &self,
        request: Option<&RecvWindowRequest>,
    ) -> Result<AccountStatus, BinanceError> {
        SpotRestClient::get_account_status(self, request).await
    }

    async fn get_my_trades(
        &self,
        request: &MyTradesRequest,
    ) -> Result<Vec<AccountTrade>, BinanceError> {
        SpotRestClient::get_my_trades(self, request).await
    }

    async fn get_order_count_usage(
        &self,
        request: Option<&RecvWindowRequest>,
    ) -> Result<Vec<OrderCountUsage>, BinanceError> {
        SpotRestClient::get_order_count_usage(self, request).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn new_order(&self, request: &NewOrderRequest) -> Result<NewOrderResponse, BinanceError> {
        SpotRestClient::new_order(self, request).await
    }

    async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelOrderResponse, BinanceError> {
        SpotRestClient::cancel_order(self, request).await
    }

    async fn cancel_open_orders(
        &self,
        request: &CancelOpenOrdersRequest,
    ) -> Result<Vec<CanceledOpenOrder>, BinanceError> {
        SpotRestClient::cancel_open_orders(self, request).await
    }

    async fn cancel_replace_order(
        &self,
        request: &CancelReplaceRequest,
    ) -> Result<CancelReplaceResponse, BinanceError> {
        SpotRestClient::cancel_replace_order(self, request).await
    }

    async fn query_order(&self, request: &QueryOrderRequest) -> Result<Order, BinanceError> {
        SpotRestClient::query_order(self, request).await
    }

    async fn get_open_orders(
        &self,
        request: Option<&OpenOrdersRequest>,
    ) -> Result<Vec<Order>, BinanceError> {
        SpotRestClient::get_open_orders(self, request).await
    }

    async fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError> {
        SpotRestClient::get_all_orders(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = SpotRestClient::builder()
            .base_url("https://testnet.binance.vision/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://testnet.binance.vision");
        assert_eq!(
            client.url("/api/v3/ping", ""),
            "https://testnet.binance.vision/api/v3/ping"
        );
        assert_eq!(
            client.url("/api/v3/depth", "symbol=BTCUSDT"),
            "https://testnet.binance.vision/api/v3/depth?symbol=BTCUSDT"
        );
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = SpotRestClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, BinanceError::Url(_)));
    }

    #[test]
    fn test_builder_rejects_bad_proxy_url() {
        let err = SpotRestClient::builder().proxy("::::").build().unwrap_err();
        assert!(matches!(err, BinanceError::Url(_)));
    }

    #[test]
    fn test_builder_rejects_unsupported_proxy_scheme() {
        let err = SpotRestClient::builder()
            .proxy("ftp://127.0.0.1:21")
            .build()
            .unwrap_err();
        assert!(matches!(err, BinanceError::Config(msg) if msg.contains("ftp")));
    }

    #[test]
    fn test_builder_accepts_socks5_proxy() {
        let client = SpotRestClient::builder()
            .proxy("socks5://localhost:1080")
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_url_adds_missing_leading_slash() {
        let client = SpotRestClient::new().unwrap();
        assert_eq!(
            client.url("api/v3/ping", ""),
            "https://api.binance.com/api/v3/ping"
        );
        assert_eq!(
            client.url("api/v3/depth", "symbol=BTCUSDT"),
            "https://api.binance.com/api/v3/depth?symbol=BTCUSDT"
        );
    }

    #[test]
    fn test_unencodable_params_are_an_encode_error() {
        #[derive(Serialize)]
        struct Nested {
            symbols: Vec<String>,
        }

        let err = encode_params(&Nested {
            symbols: vec!["BTCUSDT".to_string()],
        })
        .unwrap_err();
        assert!(matches!(err, BinanceError::Encode(_)));
    }

    #[test]
    fn test_builder_accepts_proxy() {
        let client = SpotRestClient::builder()
            .proxy("http://127.0.0.1:7890")
            .max_retries(2)
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::new(crate::config::Environment::Testnet)
            .with_credentials("key", "secret");
        let client = SpotRestClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://testnet.binance.vision");
        assert!(client.has_credentials());
    }

    #[test]
    fn test_signed_call_without_credentials_fails_early() {
        let client = SpotRestClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let result = tokio_test::block_on(client.get_account_info(None));
        assert!(matches!(result, Err(BinanceError::MissingCredentials)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = SpotRestClient::builder()
            .credentials(Arc::new(StaticCredentials::new("key", "top_secret")))
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("top_secret"));
    }
}
