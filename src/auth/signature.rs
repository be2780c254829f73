//! HMAC-SHA256 signature generation for Binance `SIGNED` endpoints.
//!
//! The signature is computed over the complete query string (including
//! `timestamp`) using the API secret as key:
//! ```text
//! hex(HMAC-SHA256(secret_key, query_string))
//! ```
//!
//! It is then appended to the query as `&signature=<hex>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BinanceError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a query string for Binance's `SIGNED` endpoints.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `query` - The URL-encoded parameters, `timestamp` included
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature (64 characters).
///
/// # Example
///
/// ```rust
/// use binance_spot_client::auth::{Credentials, sign_query};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "secret_key");
/// let signature = sign_query(&credentials, "symbol=BTCUSDT&timestamp=1499827319559")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(credentials: &Credentials, query: &str) -> Result<String, BinanceError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BinanceError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(query.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}
