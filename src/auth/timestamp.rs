//! Timestamps for signed Binance requests.
//!
//! Every `SIGNED` request carries a `timestamp` parameter in milliseconds since
//! the UNIX epoch. The server rejects it when it falls outside `recvWindow`.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing request timestamps.
///
/// Swap in a fixed implementation to make signed requests reproducible in tests,
/// or an offset one to compensate for local clock drift.
pub trait TimestampProvider: Send + Sync {
    /// Current time in milliseconds since the UNIX epoch.
    fn timestamp_millis(&self) -> u64;
}

/// Timestamp provider backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimestamp;

impl TimestampProvider for SystemTimestamp {
    fn timestamp_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_timestamp_is_millis() {
        let ts = SystemTimestamp.timestamp_millis();
        // 2020-01-01 in ms; a seconds or micros value would fall far outside this range.
        assert!(ts > 1_577_836_800_000);
        assert!(ts < 10_000_000_000_000);
    }

    #[test]
    fn test_system_timestamp_non_decreasing() {
        let first = SystemTimestamp.timestamp_millis();
        let second = SystemTimestamp.timestamp_millis();
        assert!(second >= first);
    }
}
