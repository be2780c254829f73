//! Common types used across the Binance client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;

use serde::Serialize;

/// Render a response as indented JSON for display or logging.
///
/// # Example
///
/// ```rust
/// use binance_spot_client::spot::rest::public::ServerTime;
/// use binance_spot_client::types::pretty_print;
///
/// let time = ServerTime { server_time: 1_499_827_319_559 };
/// assert!(pretty_print(&time).contains("\"serverTime\": 1499827319559"));
/// ```
pub fn pretty_print<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {e}>"))
}
