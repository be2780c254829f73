//! Binance Spot REST API client.
//!
//! Market data lives in [`public`], account and trading endpoints in
//! [`private`].
//!
//! # Trait-based API
//!
//! The [`BinanceClient`] trait abstracts all REST API operations so code can
//! be written against it and tested with a mock implementation.
//!
//! ```rust,ignore
//! use binance_spot_client::spot::rest::{BinanceClient, SpotRestClient};
//!
//! async fn use_client<C: BinanceClient>(client: &C) -> Result<(), binance_spot_client::BinanceError> {
//!     client.ping().await?;
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {}", time.server_time);
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{API_KEY_HEADER, SpotRestClient, SpotRestClientBuilder};
pub use endpoints::*;
pub use traits::BinanceClient;
