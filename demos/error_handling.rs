//! Example: Working with BinanceError and ApiError.
//!
//! Run with: cargo run --example error_handling

use binance_spot_client::BinanceError;
use binance_spot_client::error::{ApiError, error_codes};

fn main() {
    let body = r#"{"code":-1003,"msg":"Too many requests."}"#;
    let api_error = ApiError::from_body(429, body).unwrap_or_else(|| ApiError::new(429, 0, body));
    println!("API error: {}", api_error);
    println!("Is rate limit: {}", api_error.is_rate_limit());
    println!("Is IP ban: {}", api_error.is_ip_banned());

    let err = BinanceError::Api(api_error);
    match &err {
        BinanceError::Api(inner) if inner.code == error_codes::TOO_MANY_REQUESTS => {
            println!("Matched known rate limit error");
        }
        BinanceError::Api(inner) => println!("Other exchange error: {}", inner),
        BinanceError::MissingCredentials => println!("Configure an API key first"),
        other => println!("Transport or decode error: {}", other),
    }

    let missing = BinanceError::MissingCredentials;
    println!("{}", missing);
    assert!(missing.api_error().is_none());
}
