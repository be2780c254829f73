//! # Binance Spot Client
//!
//! An async Rust client library for the Binance Spot REST API.
//!
//! ## Features
//!
//! - Market data, account and trading endpoints
//! - Typed request structs: unset optional fields are left out of the query
//! - HMAC-SHA256 request signing
//! - Production or testnet, optional proxy, configurable timeout
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binance_spot_client::spot::rest::SpotRestClient;
//! use binance_spot_client::spot::rest::public::OrderBookRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotRestClient::new()?;
//!     client.ping().await?;
//!
//!     let book = client.get_order_book(&OrderBookRequest::new("BTCUSDT").limit(5)).await?;
//!     println!("Best bid: {:?}", book.bids.first());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, BinanceError};
pub use types::common::{OrderSide, OrderStatus, OrderType, TimeInForce};

/// Result type alias using BinanceError
pub type Result<T> = std::result::Result<T, BinanceError>;
