//! Lenient date-time deserialization.
//!
//! Test-drive timestamps arrive both as ISO 8601 (`2024-03-10T14:30:00`) and in
//! the space-separated form SQLite's `CURRENT_TIMESTAMP` produces
//! (`2024-03-10 14:30:00`). Both are accepted; serialization keeps chrono's
//! ISO 8601 output.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

const FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a naive date-time in any of the accepted layouts.
pub fn parse_naive_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("invalid date-time '{}', expected YYYY-MM-DD HH:MM:SS", value))
}

/// Deserialize an optional naive date-time; `null` and a missing field map to `None`.
///
/// Use together with `#[serde(default)]`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_naive_datetime(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_separators() {
        let iso = parse_naive_datetime("2024-03-10T14:30:00").unwrap();
        let spaced = parse_naive_datetime("2024-03-10 14:30:00").unwrap();
        assert_eq!(iso, spaced);
    }

    #[test]
    fn test_parse_without_seconds() {
        let parsed = parse_naive_datetime("2024-03-10 09:00").unwrap();
        assert_eq!(parsed.to_string(), "2024-03-10 09:00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_naive_datetime("next tuesday").is_err());
        assert!(parse_naive_datetime("2024-13-01 10:00:00").is_err());
    }
}
