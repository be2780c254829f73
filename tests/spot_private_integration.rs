use std::sync::Arc;

use rust_decimal::Decimal;
use wiremock::matchers::{header, header_exists, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_spot_client::auth::{Credentials, StaticCredentials, TimestampProvider, sign_query};
use binance_spot_client::error::BinanceError;
use binance_spot_client::spot::rest::SpotRestClient;
use binance_spot_client::spot::rest::private::{
    AccountInfoRequest, AllOrdersRequest, CancelOpenOrdersRequest, CancelOrderRequest,
    CancelReplaceRequest, CanceledOpenOrder, MyTradesRequest, NewOrderRequest, OpenOrdersRequest,
    QueryOrderRequest, RecvWindowRequest,
};
use binance_spot_client::types::{
    CancelReplaceMode, CancelReplaceResult, NewOrderRespType, OrderSide, OrderStatus, OrderType,
    TimeInForce,
};

// Key pair and timestamp from the Binance signed-endpoint documentation.
const DOC_API_KEY: &str = "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A";
const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
const DOC_TIMESTAMP: u64 = 1_499_827_319_559;

struct FixedTimestamp(u64);

impl TimestampProvider for FixedTimestamp {
    fn timestamp_millis(&self) -> u64 {
        self.0
    }
}

fn build_private_client(server: &MockServer) -> SpotRestClient {
    SpotRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(DOC_API_KEY, DOC_SECRET)))
        .timestamp_provider(Arc::new(FixedTimestamp(DOC_TIMESTAMP)))
        .build()
        .unwrap()
}

fn expected_signature(query: &str) -> String {
    sign_query(&Credentials::new(DOC_API_KEY, DOC_SECRET), query).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn order_json(order_id: u64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "symbol": "LTCBTC",
        "orderId": order_id,
        "orderListId": -1,
        "clientOrderId": "myOrder1",
        "price": "0.1",
        "origQty": "1.0",
        "executedQty": "0.0",
        "cummulativeQuoteQty": "0.0",
        "status": status,
        "timeInForce": "GTC",
        "type": "LIMIT",
        "side": "BUY",
        "stopPrice": "0.0",
        "icebergQty": "0.0",
        "time": 1_499_827_319_559_i64,
        "updateTime": 1_499_827_319_559_i64,
        "isWorking": true,
        "workingTime": 1_499_827_319_559_i64,
        "origQuoteOrderQty": "0.000000",
        "selfTradePreventionMode": "NONE"
    })
}

fn cancel_json(order_id: u64) -> serde_json::Value {
    serde_json::json!({
        "symbol": "LTCBTC",
        "origClientOrderId": "myOrder1",
        "orderId": order_id,
        "orderListId": -1,
        "clientOrderId": "cancelMyOrder1",
        "transactTime": 1_684_804_350_068_i64,
        "price": "2.00000000",
        "origQty": "1.00000000",
        "executedQty": "0.00000000",
        "cummulativeQuoteQty": "0.00000000",
        "status": "CANCELED",
        "timeInForce": "GTC",
        "type": "LIMIT",
        "side": "BUY",
        "selfTradePreventionMode": "NONE"
    })
}

#[tokio::test]
async fn test_new_order_signature_matches_documented_example() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/order"))
        .and(header("X-MBX-APIKEY", DOC_API_KEY))
        .and(query_param("symbol", "LTCBTC"))
        .and(query_param("side", "BUY"))
        .and(query_param("type", "LIMIT"))
        .and(query_param("timeInForce", "GTC"))
        .and(query_param("quantity", "1"))
        .and(query_param("price", "0.1"))
        .and(query_param("recvWindow", "5000"))
        .and(query_param("timestamp", "1499827319559"))
        .and(query_param(
            "signature",
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71",
        ))
        .and(query_param_is_missing("quoteOrderQty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "symbol": "LTCBTC",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1_507_725_176_595_i64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = NewOrderRequest::limit("LTCBTC", OrderSide::Buy, dec("1"), dec("0.1"))
        .recv_window(5000);
    let response = client.new_order(&request).await.unwrap();
    assert_eq!(response.order_id, 28);
    assert!(response.fills.is_empty());
}

#[tokio::test]
async fn test_new_order_full_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/order"))
        .and(query_param("type", "MARKET"))
        .and(query_param("quoteOrderQty", "25"))
        .and(query_param("newOrderRespType", "FULL"))
        .and(query_param_is_missing("price"))
        .and(query_param_is_missing("timeInForce"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "symbol": "BTCUSDT",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1_507_725_176_595_i64,
            "price": "0.00000000",
            "origQty": "0.00062500",
            "executedQty": "0.00062500",
            "cummulativeQuoteQty": "25.00000000",
            "status": "FILLED",
            "timeInForce": "GTC",
            "type": "MARKET",
            "side": "BUY",
            "fills": [{
                "price": "40000.00000000",
                "qty": "0.00062500",
                "commission": "0.00000062",
                "commissionAsset": "BTC",
                "tradeId": 56
            }]
        })))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = NewOrderRequest::market_quote("BTCUSDT", OrderSide::Buy, dec("25"))
        .new_order_resp_type(NewOrderRespType::Full);
    let response = client.new_order(&request).await.unwrap();
    assert_eq!(response.status, Some(OrderStatus::Filled));
    assert_eq!(response.fills[0].price, dec("40000"));
}

#[tokio::test]
async fn test_get_account_info() {
    let server = MockServer::start().await;
    let query = "omitZeroBalances=true&timestamp=1499827319559";
    Mock::given(method("GET"))
        .and(path("/api/v3/account"))
        .and(header("X-MBX-APIKEY", DOC_API_KEY))
        .and(query_param("omitZeroBalances", "true"))
        .and(query_param("signature", expected_signature(query)))
        .and(query_param_is_missing("recvWindow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "makerCommission": 15,
            "takerCommission": 15,
            "buyerCommission": 0,
            "sellerCommission": 0,
            "commissionRates": {
                "maker": "0.00150000",
                "taker": "0.00150000",
                "buyer": "0.00000000",
                "seller": "0.00000000"
            },
            "canTrade": true,
            "canWithdraw": true,
            "canDeposit": true,
            "brokered": false,
            "requireSelfTradePrevention": false,
            "preventSor": false,
            "updateTime": 123_456_789,
            "accountType": "SPOT",
            "balances": [
                { "asset": "BTC", "free": "4723846.89208129", "locked": "0.00000000" },
                { "asset": "LTC", "free": "4763368.68006011", "locked": "1.00000000" }
            ],
            "permissions": ["SPOT"],
            "uid": 354_937_868
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = AccountInfoRequest::default().omit_zero_balances(true);
    let account = client.get_account_info(Some(&request)).await.unwrap();
    assert!(account.can_trade);
    assert_eq!(account.maker_commission, 15);
    assert_eq!(account.balance("LTC").unwrap().locked, dec("1"));
}

#[tokio::test]
async fn test_get_account_status_with_recv_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sapi/v1/account/status"))
        .and(query_param("recvWindow", "10000"))
        .and(header_exists("X-MBX-APIKEY"))
        .and(query_param_is_missing("omitZeroBalances"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": "Normal" })),
        )
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let status = client
        .get_account_status(Some(&RecvWindowRequest::new(10_000)))
        .await
        .unwrap();
    assert_eq!(status.data, "Normal");
}

#[tokio::test]
async fn test_cancel_order() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/order"))
        .and(query_param("symbol", "LTCBTC"))
        .and(query_param("origClientOrderId", "myOrder1"))
        .and(query_param_is_missing("orderId"))
        .and(query_param("timestamp", "1499827319559"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cancel_json(4)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = CancelOrderRequest::by_client_order_id("LTCBTC", "myOrder1");
    let canceled = client.cancel_order(&request).await.unwrap();
    assert_eq!(canceled.order_id, 4);
    assert_eq!(canceled.status, OrderStatus::Canceled);
}

#[tokio::test]
async fn test_cancel_unknown_order() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v3/order"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "code": -2011, "msg": "Unknown order sent." })),
        )
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let err = client
        .cancel_order(&CancelOrderRequest::by_order_id("LTCBTC", 999))
        .await
        .unwrap_err();
    assert!(err.api_error().unwrap().is_unknown_order());
}

#[tokio::test]
async fn test_cancel_open_orders() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        cancel_json(11),
        {
            "orderListId": 1929,
            "contingencyType": "OCO",
            "listStatusType": "ALL_DONE",
            "listOrderStatus": "ALL_DONE",
            "listClientOrderId": "2inzWQdDvZLHbbAmAozX2N",
            "transactionTime": 1_585_230_948_299_i64,
            "symbol": "LTCBTC",
            "orders": [
                { "symbol": "LTCBTC", "orderId": 20, "clientOrderId": "CwOOIPHSmYywx6jZX77TdL" },
                { "symbol": "LTCBTC", "orderId": 21, "clientOrderId": "461cPg51vQjV3zIMOXNz39" }
            ],
            "orderReports": [cancel_json(20), cancel_json(21)]
        }
    ]);

    Mock::given(method("DELETE"))
        .and(path("/api/v3/openOrders"))
        .and(query_param("symbol", "LTCBTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let canceled = client
        .cancel_open_orders(&CancelOpenOrdersRequest::new("LTCBTC"))
        .await
        .unwrap();
    assert_eq!(canceled.len(), 2);
    assert!(matches!(&canceled[0], CanceledOpenOrder::Order(o) if o.order_id == 11));
    match &canceled[1] {
        CanceledOpenOrder::List(list) => assert_eq!(list.order_reports.len(), 2),
        other => panic!("expected an order list, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_replace_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/order/cancelReplace"))
        .and(query_param("cancelReplaceMode", "STOP_ON_FAILURE"))
        .and(query_param("cancelOrderId", "4"))
        .and(query_param("quoteOrderQty", "10"))
        .and(query_param("timeInForce", "GTC"))
        .and(query_param_is_missing("quantity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cancelResult": "SUCCESS",
            "newOrderResult": "SUCCESS",
            "cancelResponse": cancel_json(4),
            "newOrderResponse": {
                "symbol": "LTCBTC",
                "orderId": 5,
                "orderListId": -1,
                "clientOrderId": "newOrder",
                "transactTime": 1_684_804_350_068_i64
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = CancelReplaceRequest::new(
        "LTCBTC",
        OrderSide::Buy,
        OrderType::Limit,
        CancelReplaceMode::StopOnFailure,
    )
    .time_in_force(TimeInForce::GTC)
    .quote_order_qty(dec("10"))
    .price(dec("2"))
    .cancel_order_id(4);
    let response = client.cancel_replace_order(&request).await.unwrap();
    assert_eq!(response.cancel_result, CancelReplaceResult::Success);
    assert_eq!(response.new_order_response.unwrap().order_id, 5);
}

#[tokio::test]
async fn test_cancel_replace_failure_keeps_leg_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/order/cancelReplace"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "code": -2022,
            "msg": "Order cancel-replace failed.",
            "data": {
                "cancelResult": "FAILURE",
                "newOrderResult": "NOT_ATTEMPTED",
                "cancelResponse": { "code": -2011, "msg": "Unknown order sent." },
                "newOrderResponse": null
            }
        })))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = CancelReplaceRequest::new(
        "LTCBTC",
        OrderSide::Sell,
        OrderType::Market,
        CancelReplaceMode::StopOnFailure,
    )
    .quantity(dec("1"))
    .cancel_orig_client_order_id("gone");
    let err = client.cancel_replace_order(&request).await.unwrap_err();
    let api_error = err.api_error().unwrap();
    assert_eq!(api_error.status, 409);
    assert!(api_error.is_cancel_replace_failure());
    let data = api_error.data.as_ref().unwrap();
    assert_eq!(data["cancelResponse"]["code"], -2011);
}

#[tokio::test]
async fn test_query_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/order"))
        .and(query_param("symbol", "LTCBTC"))
        .and(query_param("orderId", "1"))
        .and(query_param_is_missing("origClientOrderId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json(1, "NEW")))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let order = client
        .query_order(&QueryOrderRequest::by_order_id("LTCBTC", 1))
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::New);
    assert!(order.is_working);
}

#[tokio::test]
async fn test_get_open_orders_all_symbols() {
    let server = MockServer::start().await;
    let query = "timestamp=1499827319559";
    Mock::given(method("GET"))
        .and(path("/api/v3/openOrders"))
        .and(query_param_is_missing("symbol"))
        .and(query_param("signature", expected_signature(query)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([order_json(1, "NEW"), order_json(2, "PARTIALLY_FILLED")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let orders = client.get_open_orders(None).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].status, OrderStatus::PartiallyFilled);
}

#[tokio::test]
async fn test_get_open_orders_for_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/openOrders"))
        .and(query_param("symbol", "LTCBTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let orders = client
        .get_open_orders(Some(&OpenOrdersRequest::for_symbol("LTCBTC")))
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_get_all_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/allOrders"))
        .and(query_param("symbol", "LTCBTC"))
        .and(query_param("startTime", "1499827000000"))
        .and(query_param("limit", "10"))
        .and(query_param_is_missing("orderId"))
        .and(query_param_is_missing("endTime"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([order_json(1, "FILLED")])),
        )
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = AllOrdersRequest::new("LTCBTC")
        .start_time(1_499_827_000_000)
        .limit(10);
    let orders = client.get_all_orders(&request).await.unwrap();
    assert_eq!(orders[0].status, OrderStatus::Filled);
}

#[tokio::test]
async fn test_get_my_trades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/myTrades"))
        .and(query_param("symbol", "BNBBTC"))
        .and(query_param("fromId", "28457"))
        .and(query_param_is_missing("orderId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "symbol": "BNBBTC",
            "id": 28457,
            "orderId": 100_234,
            "orderListId": -1,
            "price": "4.00000100",
            "qty": "12.00000000",
            "quoteQty": "48.000012",
            "commission": "10.10000000",
            "commissionAsset": "BNB",
            "time": 1_499_865_549_590_i64,
            "isBuyer": true,
            "isMaker": false,
            "isBestMatch": true
        }])))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let trades = client
        .get_my_trades(&MyTradesRequest::new("BNBBTC").from_id(28457))
        .await
        .unwrap();
    assert_eq!(trades[0].order_id, 100_234);
    assert_eq!(trades[0].commission_asset, "BNB");
}

#[tokio::test]
async fn test_get_order_count_usage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/rateLimit/order"))
        .and(header_exists("X-MBX-APIKEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "rateLimitType": "ORDERS", "interval": "SECOND", "intervalNum": 10, "limit": 50, "count": 0 },
            { "rateLimitType": "ORDERS", "interval": "DAY", "intervalNum": 1, "limit": 160000, "count": 0 }
        ])))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let usage = client.get_order_count_usage(None).await.unwrap();
    assert_eq!(usage.len(), 2);
    assert_eq!(usage[1].limit, 160_000);
}

#[tokio::test]
async fn test_signed_request_without_credentials_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/order"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = SpotRestClient::builder().base_url(server.uri()).build().unwrap();
    let request = NewOrderRequest::market("BTCUSDT", OrderSide::Sell, dec("0.01"));
    let result = client.new_order(&request).await;
    assert!(matches!(result, Err(BinanceError::MissingCredentials)));
}

#[tokio::test]
async fn test_invalid_signature_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/account"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -1022,
            "msg": "Signature for this request is not valid."
        })))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let err = client.get_account_info(None).await.unwrap_err();
    assert!(err.api_error().unwrap().is_invalid_signature());
}
