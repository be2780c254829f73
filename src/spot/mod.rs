//! Binance Spot API clients.
//!
//! - [`rest`] - REST API client for market data, account and trading endpoints

pub mod rest;

pub use rest::SpotRestClient;
