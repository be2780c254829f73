//! Error types for the Binance client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Binance client operations.
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Request parameters could not be encoded as a query string
    #[error("Failed to encode request parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Binance API returned an error
    #[error("Binance API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for this endpoint")]
    MissingCredentials,
}

impl BinanceError {
    /// The exchange error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            BinanceError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        match self {
            BinanceError::Http(err) => err.is_timeout(),
            BinanceError::HttpMiddleware(reqwest_middleware::Error::Reqwest(err)) => {
                err.is_timeout()
            }
            _ => false,
        }
    }
}

/// An error reported by Binance in the response body.
///
/// Binance answers failed requests with a non-2xx status and a body like
/// `{"code": -1121, "msg": "Invalid symbol."}`. A failed cancel-replace also
/// carries a `data` object describing both legs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
    /// HTTP status of the response.
    #[serde(skip)]
    pub status: u16,
    /// Binance error code (negative numbers, e.g. `-2011`).
    pub code: i64,
    /// Human-readable error message.
    pub msg: String,
    /// Extra payload (cancel-replace failures).
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (HTTP {}): {}", self.code, self.status, self.msg)
    }
}

impl ApiError {
    /// Create a new API error from status, code and message.
    pub fn new(status: u16, code: i64, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
            data: None,
        }
    }

    /// Parse an error body, attaching the HTTP status.
    ///
    /// Returns `None` when the body is not in Binance's error shape.
    pub fn from_body(status: u16, body: &str) -> Option<Self> {
        serde_json::from_str::<ApiError>(body)
            .ok()
            .map(|err| Self { status, ..err })
    }

    /// Request weight or order rate limit was exceeded (HTTP 429 or code -1003).
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429 || self.code == error_codes::TOO_MANY_REQUESTS
    }

    /// The IP has been auto-banned for continuing to send requests after a 429.
    pub fn is_ip_banned(&self) -> bool {
        self.status == 418
    }

    /// The request signature was not valid.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::INVALID_SIGNATURE
    }

    /// The API key was rejected or lacks permission for the action.
    pub fn is_unauthorized(&self) -> bool {
        self.code == error_codes::UNAUTHORIZED || self.code == error_codes::REJECTED_MBX_KEY
    }

    /// The `timestamp` was outside of the `recvWindow`.
    pub fn is_timestamp_outside_recv_window(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }

    /// The order to cancel or query does not exist.
    pub fn is_unknown_order(&self) -> bool {
        self.code == error_codes::CANCEL_REJECTED || self.code == error_codes::NO_SUCH_ORDER
    }

    /// The new order was rejected by the matching engine.
    pub fn is_new_order_rejected(&self) -> bool {
        self.code == error_codes::NEW_ORDER_REJECTED
    }

    /// Cancel-replace failed on at least one leg.
    pub fn is_cancel_replace_failure(&self) -> bool {
        self.code == error_codes::ORDER_CANCEL_REPLACE_PARTIALLY_FAILED
            || self.code == error_codes::ORDER_CANCEL_REPLACE_FAILED
    }
}

/// Known Binance error codes for pattern matching.
pub mod error_codes {
    /// General server or network errors
    pub const UNKNOWN: i64 = -1000;
    pub const DISCONNECTED: i64 = -1001;
    pub const UNAUTHORIZED: i64 = -1002;
    pub const TOO_MANY_REQUESTS: i64 = -1003;
    pub const UNEXPECTED_RESPONSE: i64 = -1006;
    pub const TIMEOUT: i64 = -1007;
    pub const INVALID_TIMESTAMP: i64 = -1021;
    pub const INVALID_SIGNATURE: i64 = -1022;

    /// Request issues
    pub const ILLEGAL_CHARS: i64 = -1100;
    pub const TOO_MANY_PARAMETERS: i64 = -1101;
    pub const MANDATORY_PARAM_EMPTY_OR_MALFORMED: i64 = -1102;
    pub const UNKNOWN_PARAM: i64 = -1103;
    pub const BAD_PRECISION: i64 = -1111;
    pub const INVALID_TIF: i64 = -1115;
    pub const INVALID_ORDER_TYPE: i64 = -1116;
    pub const INVALID_SIDE: i64 = -1117;
    pub const BAD_SYMBOL: i64 = -1121;
    pub const INVALID_LISTEN_KEY: i64 = -1125;
    pub const INVALID_PARAMETER: i64 = -1130;

    /// Order and trading errors
    pub const NEW_ORDER_REJECTED: i64 = -2010;
    pub const CANCEL_REJECTED: i64 = -2011;
    pub const NO_SUCH_ORDER: i64 = -2013;
    pub const BAD_API_KEY_FMT: i64 = -2014;
    pub const REJECTED_MBX_KEY: i64 = -2015;
    pub const ORDER_CANCEL_REPLACE_PARTIALLY_FAILED: i64 = -2021;
    pub const ORDER_CANCEL_REPLACE_FAILED: i64 = -2022;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_body() {
        let body = r#"{"code":-1121,"msg":"Invalid symbol."}"#;
        let error = ApiError::from_body(400, body).unwrap();
        assert_eq!(error.status, 400);
        assert_eq!(error.code, error_codes::BAD_SYMBOL);
        assert_eq!(error.msg, "Invalid symbol.");
        assert!(error.data.is_none());
    }

    #[test]
    fn test_api_error_from_non_error_body() {
        assert!(ApiError::from_body(502, "<html>Bad Gateway</html>").is_none());
        assert!(ApiError::from_body(500, r#"{"status":"down"}"#).is_none());
    }

    #[test]
    fn test_api_error_cancel_replace_data() {
        let body = r#"{
            "code": -2022,
            "msg": "Order cancel-replace failed.",
            "data": {
                "cancelResult": "FAILURE",
                "newOrderResult": "NOT_ATTEMPTED"
            }
        }"#;
        let error = ApiError::from_body(409, body).unwrap();
        assert!(error.is_cancel_replace_failure());
        assert_eq!(error.data.unwrap()["cancelResult"], "FAILURE");
    }

    #[test]
    fn test_api_error_predicates() {
        assert!(ApiError::new(429, -1003, "Too many requests").is_rate_limit());
        assert!(ApiError::new(418, -1003, "Way too many requests").is_ip_banned());
        assert!(ApiError::new(400, -1022, "Signature invalid").is_invalid_signature());
        assert!(ApiError::new(400, -1021, "Timestamp outside recvWindow").is_timestamp_outside_recv_window());
        assert!(ApiError::new(400, -2011, "Unknown order sent.").is_unknown_order());
        assert!(ApiError::new(401, -2015, "Invalid API-key").is_unauthorized());
        assert!(!ApiError::new(400, -1121, "Invalid symbol.").is_rate_limit());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(400, -2010, "Account has insufficient balance");
        assert_eq!(
            error.to_string(),
            "-2010 (HTTP 400): Account has insufficient balance"
        );
    }
}
