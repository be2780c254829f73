//! Authentication module for Binance API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond timestamps for signed requests
//! - HMAC-SHA256 query signing for `SIGNED` endpoints

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    API_KEY_ENV, Credentials, CredentialsProvider, EnvCredentials, SECRET_KEY_ENV, StaticCredentials,
};
pub use signature::sign_query;
pub use timestamp::{SystemTimestamp, TimestampProvider};
