//! Route handlers and the helpers they share.
//!
//! Every successful response is wrapped in [`DataResponse`] unless the route
//! needs a different envelope (auth and health). Failures are returned as
//! [`ApiError`](crate::api::error::ApiError).

pub mod analytics;
pub mod auth;
pub mod fallback;
pub mod health;
pub mod leaderboard;
pub mod users;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

pub const CURRENCY: &str = "USD";

#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Current UTC time as RFC 3339 with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Lenient integer parse: skips leading whitespace, accepts an optional sign
/// and an optional `0x`/`0X` hex prefix, then reads the leading run of digits,
/// ignoring anything after it. Returns `None` when no digit follows.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits = rest.chars().take_while(|c| c.is_digit(radix)).count();
    if digits == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&rest[..digits], radix).unwrap_or(i64::MAX);

    Some(if negative { -magnitude } else { magnitude })
}

/// Path ids go through [`parse_int`]; negative values can never match a user.
pub fn parse_id(raw: &str) -> Option<u64> {
    parse_int(raw).and_then(|id| u64::try_from(id).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_leading_digits() {
        assert_eq!(parse_int("3"), Some(3));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("3abc"), Some(3));
        assert_eq!(parse_int("7.9"), Some(7));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int("-2"), Some(-2));
        assert_eq!(parse_int("007"), Some(7));
    }

    #[test]
    fn parse_int_rejects_non_numeric() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("x1"), None);
    }

    #[test]
    fn parse_int_reads_hex_prefix() {
        assert_eq!(parse_int("0x3"), Some(3));
        assert_eq!(parse_int("0X1f"), Some(31));
        assert_eq!(parse_int("-0x10"), Some(-16));
        assert_eq!(parse_int("0x1g"), Some(1));
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("0xz"), None);
        assert_eq!(parse_int("00x3"), Some(0));
    }

    #[test]
    fn parse_int_saturates_huge_values() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn parse_id_rejects_negative() {
        assert_eq!(parse_id("5"), Some(5));
        assert_eq!(parse_id("-5"), None);
        assert_eq!(parse_id("five"), None);
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'), "{ts}");
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
