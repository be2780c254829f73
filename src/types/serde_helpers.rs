//! Custom serde helpers for Binance's serialization formats.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serializer, ser};

/// Serialize a list of strings as a JSON array inside a single query parameter.
///
/// Binance expects multi-symbol filters as `symbols=["BTCUSDT","BNBUSDT"]`
/// (percent-encoded by the URL encoder).
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use binance_spot_client::types::serde_helpers::json_list;
///
/// #[derive(Serialize)]
/// struct Params {
///     #[serde(with = "json_list", skip_serializing_if = "Option::is_none")]
///     symbols: Option<Vec<String>>,
/// }
///
/// let params = Params {
///     symbols: Some(vec!["BTCUSDT".into(), "BNBUSDT".into()]),
/// };
/// let query = serde_urlencoded::to_string(&params).unwrap();
/// assert_eq!(query, "symbols=%5B%22BTCUSDT%22%2C%22BNBUSDT%22%5D");
/// ```
pub mod json_list {
    use super::*;

    /// Serialize as a JSON array string.
    pub fn serialize<S>(list: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match list {
            Some(items) => {
                let json = serde_json::to_string(items).map_err(ser::Error::custom)?;
                serializer.serialize_str(&json)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a JSON array string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| serde_json::from_str(&s).map_err(de::Error::custom))
            .transpose()
    }
}

/// Deserialize either a single object or an array of objects into a `Vec`.
///
/// Ticker endpoints return an object when queried with `symbol` and an
/// array when queried with `symbols` or without a filter.
pub fn one_or_many<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: DeserializeOwned,
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).map_err(de::Error::custom),
        other => serde_json::from_value(other)
            .map(|item| vec![item])
            .map_err(de::Error::custom),
    }
}

/// Parse a response body that is either a single object or an array.
pub(crate) fn parse_one_or_many<T>(body: &str) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_str(body);
    let items = one_or_many(&mut de)?;
    de.end()?;
    Ok(items)
}
