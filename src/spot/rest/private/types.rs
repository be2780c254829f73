//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{
    CancelReplaceMode, CancelReplaceResult, CancelRestrictions, NewOrderRespType, OrderSide,
    OrderStatus, OrderType, SelfTradePreventionMode, TimeInForce,
};

/// Request carrying only `recvWindow`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecvWindowRequest {
    /// Milliseconds the request stays valid after `timestamp` (max 60000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl RecvWindowRequest {
    /// Create a request with the given receive window.
    pub fn new(recv_window: u64) -> Self {
        Self {
            recv_window: Some(recv_window),
        }
    }
}

/// Request for account information.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfoRequest {
    /// Hide zero balances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_zero_balances: Option<bool>,
    /// Receive window in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl AccountInfoRequest {
    /// Hide or show zero balances.
    pub fn omit_zero_balances(mut self, omit: bool) -> Self {
        self.omit_zero_balances = Some(omit);
        self
    }

    /// Set the receive window.
    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Account information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Maker commission in basis points.
    #[serde(default)]
    pub maker_commission: i64,
    /// Taker commission in basis points.
    #[serde(default)]
    pub taker_commission: i64,
    #[serde(default)]
    pub buyer_commission: i64,
    #[serde(default)]
    pub seller_commission: i64,
    /// Commission rates as fractions.
    #[serde(default)]
    pub commission_rates: Option<CommissionRates>,
    pub can_trade: bool,
    pub can_withdraw: bool,
    pub can_deposit: bool,
    #[serde(default)]
    pub brokered: bool,
    #[serde(default)]
    pub require_self_trade_prevention: bool,
    #[serde(default)]
    pub prevent_sor: bool,
    /// Last account update time in milliseconds.
    pub update_time: i64,
    /// Account type, e.g. `SPOT`.
    pub account_type: String,
    /// Asset balances.
    pub balances: Vec<Balance>,
    #[serde(default)]
    pub permissions: Vec<String>,
    /// User ID.
    #[serde(default)]
    pub uid: Option<u64>,
}

impl AccountInfo {
    /// Find the balance of an asset.
    pub fn balance(&self, asset: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.asset == asset)
    }
}

/// Commission rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionRates {
    pub maker: Decimal,
    pub taker: Decimal,
    pub buyer: Decimal,
    pub seller: Decimal,
}

/// Balance of a single asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Asset name.
    pub asset: String,
    /// Available amount.
    pub free: Decimal,
    /// Amount locked in open orders.
    pub locked: Decimal,
}

impl Balance {
    /// Free plus locked.
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

/// Account status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatus {
    /// Status text, e.g. `Normal`.
    pub data: String,
}

/// Request to place a new order.
///
/// Which optional fields are mandatory depends on the order type, e.g.
/// `LIMIT` needs `timeInForce`, `quantity` and `price`. The exchange validates
/// the combination.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Buy or sell.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Base asset quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Quote asset quantity for `MARKET` orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_order_qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Unique client order ID. Generated by the exchange when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<i64>,
    /// Must be at least 1000000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Trailing delta in basis points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_delta: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iceberg_qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_order_resp_type: Option<NewOrderRespType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_trade_prevention_mode: Option<SelfTradePreventionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl NewOrderRequest {
    /// Create a new order request with only the required fields set.
    pub fn new(symbol: impl Into<String>, side: OrderSide, order_type: OrderType) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            time_in_force: None,
            quantity: None,
            quote_order_qty: None,
            price: None,
            new_client_order_id: None,
            strategy_id: None,
            strategy_type: None,
            stop_price: None,
            trailing_delta: None,
            iceberg_qty: None,
            new_order_resp_type: None,
            self_trade_prevention_mode: None,
            recv_window: None,
        }
    }

    /// Create a good-till-canceled limit order.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self::new(symbol, side, OrderType::Limit)
            .time_in_force(TimeInForce::GTC)
            .quantity(quantity)
            .price(price)
    }

    /// Create a market order for a base asset quantity.
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Market).quantity(quantity)
    }

    /// Create a market order spending or receiving a quote asset quantity.
    pub fn market_quote(symbol: impl Into<String>, side: OrderSide, quote_order_qty: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Market).quote_order_qty(quote_order_qty)
    }

    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn quote_order_qty(mut self, quote_order_qty: Decimal) -> Self {
        self.quote_order_qty = Some(quote_order_qty);
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn new_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn strategy_id(mut self, strategy_id: i64) -> Self {
        self.strategy_id = Some(strategy_id);
        self
    }

    pub fn strategy_type(mut self, strategy_type: i64) -> Self {
        self.strategy_type = Some(strategy_type);
        self
    }

    pub fn stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn trailing_delta(mut self, trailing_delta: i64) -> Self {
        self.trailing_delta = Some(trailing_delta);
        self
    }

    pub fn iceberg_qty(mut self, iceberg_qty: Decimal) -> Self {
        self.iceberg_qty = Some(iceberg_qty);
        self
    }

    pub fn new_order_resp_type(mut self, resp_type: NewOrderRespType) -> Self {
        self.new_order_resp_type = Some(resp_type);
        self
    }

    pub fn self_trade_prevention_mode(mut self, mode: SelfTradePreventionMode) -> Self {
        self.self_trade_prevention_mode = Some(mode);
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Response to a new order.
///
/// `ACK` responses only carry the identifiers; `RESULT` adds the order state
/// and `FULL` adds the fills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderResponse {
    pub symbol: String,
    pub order_id: u64,
    /// -1 unless the order is part of an order list.
    pub order_list_id: i64,
    pub client_order_id: String,
    /// Transaction time in milliseconds.
    pub transact_time: i64,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub orig_qty: Option<Decimal>,
    #[serde(default)]
    pub executed_qty: Option<Decimal>,
    #[serde(default)]
    pub cummulative_quote_qty: Option<Decimal>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    #[serde(rename = "type", default)]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub side: Option<OrderSide>,
    #[serde(default)]
    pub working_time: Option<i64>,
    #[serde(default)]
    pub self_trade_prevention_mode: Option<String>,
    #[serde(default)]
    pub fills: Vec<Fill>,
}

/// A fill of a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub price: Decimal,
    pub qty: Decimal,
    pub commission: Decimal,
    pub commission_asset: String,
    #[serde(default)]
    pub trade_id: Option<u64>,
}

/// Request to cancel an order.
///
/// Either `order_id` or `orig_client_order_id` must be set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    /// New ID for the cancel. Generated by the exchange when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_restrictions: Option<CancelRestrictions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl CancelOrderRequest {
    /// Create a cancel request for a symbol without an order reference.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            orig_client_order_id: None,
            new_client_order_id: None,
            cancel_restrictions: None,
            recv_window: None,
        }
    }

    /// Cancel by exchange order ID.
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self::new(symbol).order_id(order_id)
    }

    /// Cancel by client order ID.
    pub fn by_client_order_id(symbol: impl Into<String>, client_order_id: impl Into<String>) -> Self {
        Self::new(symbol).orig_client_order_id(client_order_id)
    }

    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn orig_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.orig_client_order_id = Some(id.into());
        self
    }

    pub fn new_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn cancel_restrictions(mut self, restrictions: CancelRestrictions) -> Self {
        self.cancel_restrictions = Some(restrictions);
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// A canceled order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    pub symbol: String,
    pub orig_client_order_id: String,
    pub order_id: u64,
    pub order_list_id: i64,
    /// Client ID of the cancel itself.
    pub client_order_id: String,
    #[serde(default)]
    pub transact_time: Option<i64>,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
    pub cummulative_quote_qty: Decimal,
    pub status: OrderStatus,
    pub time_in_force: TimeInForce,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    #[serde(default)]
    pub self_trade_prevention_mode: Option<String>,
}

/// Request to cancel all open orders on a symbol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOpenOrdersRequest {
    /// Trading symbol.
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl CancelOpenOrdersRequest {
    /// Create a new request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            recv_window: None,
        }
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// One entry of a cancel-all response: a single order or a whole order list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanceledOpenOrder {
    /// A standalone order.
    Order(CancelOrderResponse),
    /// An order list (OCO, OTO, ...).
    List(OrderListReport),
}

/// A canceled order list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListReport {
    pub order_list_id: i64,
    /// e.g. `OCO`.
    pub contingency_type: String,
    pub list_status_type: String,
    pub list_order_status: String,
    pub list_client_order_id: String,
    pub transaction_time: i64,
    pub symbol: String,
    /// Order references (`symbol`, `orderId`, `clientOrderId`).
    #[serde(default)]
    pub orders: Vec<serde_json::Value>,
    #[serde(default)]
    pub order_reports: Vec<CancelOrderResponse>,
}

/// Request to cancel an existing order and place a new one on the same symbol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReplaceRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Side of the new order.
    pub side: OrderSide,
    /// Type of the new order.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// What to do when the cancel fails.
    pub cancel_replace_mode: CancelReplaceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_order_qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// New ID for the cancel leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_new_client_order_id: Option<String>,
    /// Client ID of the order to cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_orig_client_order_id: Option<String>,
    /// Exchange ID of the order to cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_delta: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iceberg_qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_order_resp_type: Option<NewOrderRespType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_trade_prevention_mode: Option<SelfTradePreventionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_restrictions: Option<CancelRestrictions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl CancelReplaceRequest {
    /// Create a cancel-replace request with only the required fields set.
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        mode: CancelReplaceMode,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            cancel_replace_mode: mode,
            time_in_force: None,
            quantity: None,
            quote_order_qty: None,
            price: None,
            cancel_new_client_order_id: None,
            cancel_orig_client_order_id: None,
            cancel_order_id: None,
            new_client_order_id: None,
            strategy_id: None,
            strategy_type: None,
            stop_price: None,
            trailing_delta: None,
            iceberg_qty: None,
            new_order_resp_type: None,
            self_trade_prevention_mode: None,
            cancel_restrictions: None,
            recv_window: None,
        }
    }

    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn quote_order_qty(mut self, quote_order_qty: Decimal) -> Self {
        self.quote_order_qty = Some(quote_order_qty);
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn cancel_new_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.cancel_new_client_order_id = Some(id.into());
        self
    }

    pub fn cancel_orig_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.cancel_orig_client_order_id = Some(id.into());
        self
    }

    pub fn cancel_order_id(mut self, order_id: u64) -> Self {
        self.cancel_order_id = Some(order_id);
        self
    }

    pub fn new_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn strategy_id(mut self, strategy_id: i64) -> Self {
        self.strategy_id = Some(strategy_id);
        self
    }

    pub fn strategy_type(mut self, strategy_type: i64) -> Self {
        self.strategy_type = Some(strategy_type);
        self
    }

    pub fn stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn trailing_delta(mut self, trailing_delta: i64) -> Self {
        self.trailing_delta = Some(trailing_delta);
        self
    }

    pub fn iceberg_qty(mut self, iceberg_qty: Decimal) -> Self {
        self.iceberg_qty = Some(iceberg_qty);
        self
    }

    pub fn new_order_resp_type(mut self, resp_type: NewOrderRespType) -> Self {
        self.new_order_resp_type = Some(resp_type);
        self
    }

    pub fn self_trade_prevention_mode(mut self, mode: SelfTradePreventionMode) -> Self {
        self.self_trade_prevention_mode = Some(mode);
        self
    }

    pub fn cancel_restrictions(mut self, restrictions: CancelRestrictions) -> Self {
        self.cancel_restrictions = Some(restrictions);
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Successful cancel-replace response.
///
/// When either leg fails the exchange answers with an error instead; the
/// per-leg details are then in [`ApiError::data`](crate::error::ApiError::data).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReplaceResponse {
    pub cancel_result: CancelReplaceResult,
    pub new_order_result: CancelReplaceResult,
    #[serde(default)]
    pub cancel_response: Option<CancelOrderResponse>,
    #[serde(default)]
    pub new_order_response: Option<NewOrderResponse>,
}

/// Request to query a single order.
///
/// Either `order_id` or `orig_client_order_id` must be set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl QueryOrderRequest {
    /// Create a query for a symbol without an order reference.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            orig_client_order_id: None,
            recv_window: None,
        }
    }

    /// Query by exchange order ID.
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self::new(symbol).order_id(order_id)
    }

    /// Query by client order ID.
    pub fn by_client_order_id(symbol: impl Into<String>, client_order_id: impl Into<String>) -> Self {
        Self::new(symbol).orig_client_order_id(client_order_id)
    }

    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn orig_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.orig_client_order_id = Some(id.into());
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Order details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub symbol: String,
    pub order_id: u64,
    pub order_list_id: i64,
    pub client_order_id: String,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
    /// Total quote quantity filled so far.
    pub cummulative_quote_qty: Decimal,
    pub status: OrderStatus,
    pub time_in_force: TimeInForce,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub iceberg_qty: Option<Decimal>,
    /// Creation time in milliseconds.
    pub time: i64,
    /// Last update time in milliseconds.
    pub update_time: i64,
    /// Whether the order is on the book.
    pub is_working: bool,
    #[serde(default)]
    pub working_time: Option<i64>,
    #[serde(default)]
    pub orig_quote_order_qty: Option<Decimal>,
    #[serde(default)]
    pub self_trade_prevention_mode: Option<String>,
}

/// Request for current open orders.
///
/// Without a symbol, open orders on every symbol are returned at a higher
/// request weight.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl OpenOrdersRequest {
    /// Restrict to a symbol.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            recv_window: None,
        }
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Request for all orders (open, canceled or filled) on a symbol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllOrdersRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Return orders with an ID at or above this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Default 500, max 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl AllOrdersRequest {
    /// Create a new request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            start_time: None,
            end_time: None,
            limit: None,
            recv_window: None,
        }
    }

    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// Request for the account trade list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTradesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Only trades of this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Trade ID to fetch from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    /// Default 500, max 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recv_window: Option<u64>,
}

impl MyTradesRequest {
    /// Create a new request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            start_time: None,
            end_time: None,
            from_id: None,
            limit: None,
            recv_window: None,
        }
    }

    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn start_time(mut self, start_time: u64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: u64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn from_id(mut self, from_id: u64) -> Self {
        self.from_id = Some(from_id);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

/// A trade executed by the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTrade {
    pub symbol: String,
    pub id: u64,
    pub order_id: u64,
    pub order_list_id: i64,
    pub price: Decimal,
    pub qty: Decimal,
    pub quote_qty: Decimal,
    pub commission: Decimal,
    pub commission_asset: String,
    /// Trade time in milliseconds.
    pub time: i64,
    pub is_buyer: bool,
    pub is_maker: bool,
    #[serde(default)]
    pub is_best_match: bool,
}

/// Unfilled order count for one rate limit interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCountUsage {
    /// Always `ORDERS`.
    pub rate_limit_type: String,
    pub interval: String,
    pub interval_num: u32,
    pub limit: u32,
    /// Orders counted in the current interval.
    pub count: u32,
}
