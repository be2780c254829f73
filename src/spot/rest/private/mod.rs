//! Private REST API endpoints (signed).
//!
//! These endpoints require API credentials to be configured on the client.
//! Calling one without credentials fails with
//! [`BinanceError::MissingCredentials`] before anything is sent.

mod types;

pub use types::*;

use reqwest::Method;

use crate::error::BinanceError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::private;

impl SpotRestClient {
    /// Get current account information.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_spot_client::spot::rest::SpotRestClient;
    /// use binance_spot_client::spot::rest::private::AccountInfoRequest;
    /// use binance_spot_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = SpotRestClient::builder().credentials(credentials).build()?;
    ///
    ///     let request = AccountInfoRequest::default().omit_zero_balances(true);
    ///     let account = client.get_account_info(Some(&request)).await?;
    ///     for balance in &account.balances {
    ///         println!("{}: {} free, {} locked", balance.asset, balance.free, balance.locked);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_info(
        &self,
        request: Option<&AccountInfoRequest>,
    ) -> Result<AccountInfo, BinanceError> {
        let request = request.copied().unwrap_or_default();
        self.signed_request(Method::GET, private::ACCOUNT, &request)
            .await
    }

    /// Get the account status.
    pub async fn get_account_status(
        &self,
        request: Option<&RecvWindowRequest>,
    ) -> Result<AccountStatus, BinanceError> {
        let request = request.copied().unwrap_or_default();
        self.signed_request(Method::GET, private::ACCOUNT_STATUS, &request)
            .await
    }

    /// Get trades of the account on a symbol.
    pub async fn get_my_trades(
        &self,
        request: &MyTradesRequest,
    ) -> Result<Vec<AccountTrade>, BinanceError> {
        self.signed_request(Method::GET, private::MY_TRADES, request)
            .await
    }

    /// Get the current unfilled order count for every order rate limit interval.
    pub async fn get_order_count_usage(
        &self,
        request: Option<&RecvWindowRequest>,
    ) -> Result<Vec<OrderCountUsage>, BinanceError> {
        let request = request.copied().unwrap_or_default();
        self.signed_request(Method::GET, private::RATE_LIMIT_ORDER, &request)
            .await
    }

    /// Place a new order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_spot_client::spot::rest::SpotRestClient;
    /// use binance_spot_client::spot::rest::private::NewOrderRequest;
    /// use binance_spot_client::auth::StaticCredentials;
    /// use binance_spot_client::OrderSide;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = SpotRestClient::builder().credentials(credentials).build()?;
    ///
    ///     let request = NewOrderRequest::limit(
    ///         "BTCUSDT",
    ///         OrderSide::Buy,
    ///         Decimal::new(1, 3),
    ///         Decimal::from(30000),
    ///     );
    ///     let response = client.new_order(&request).await?;
    ///     println!("Order ID: {}", response.order_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<NewOrderResponse, BinanceError> {
        self.signed_request(Method::POST, private::ORDER, request)
            .await
    }

    /// Cancel an active order.
    pub async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelOrderResponse, BinanceError> {
        self.signed_request(Method::DELETE, private::ORDER, request)
            .await
    }

    /// Cancel all open orders on a symbol, including order lists.
    pub async fn cancel_open_orders(
        &self,
        request: &CancelOpenOrdersRequest,
    ) -> Result<Vec<CanceledOpenOrder>, BinanceError> {
        self.signed_request(Method::DELETE, private::OPEN_ORDERS, request)
            .await
    }

    /// Cancel an existing order and place a new one.
    ///
    /// A failure on either leg comes back as [`BinanceError::Api`] with the
    /// per-leg results in the error's `data` field.
    pub async fn cancel_replace_order(
        &self,
        request: &CancelReplaceRequest,
    ) -> Result<CancelReplaceResponse, BinanceError> {
        self.signed_request(Method::POST, private::CANCEL_REPLACE, request)
            .await
    }

    /// Check an order's status.
    pub async fn query_order(&self, request: &QueryOrderRequest) -> Result<Order, BinanceError> {
        self.signed_request(Method::GET, private::ORDER, request)
            .await
    }

    /// Get all open orders on a symbol, or on every symbol without a request.
    pub async fn get_open_orders(
        &self,
        request: Option<&OpenOrdersRequest>,
    ) -> Result<Vec<Order>, BinanceError> {
        let default = OpenOrdersRequest::default();
        self.signed_request(Method::GET, private::OPEN_ORDERS, request.unwrap_or(&default))
            .await
    }

    /// Get all account orders on a symbol: active, canceled or filled.
    pub async fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, BinanceError> {
        self.signed_request(Method::GET, private::ALL_ORDERS, request)
            .await
    }
}
