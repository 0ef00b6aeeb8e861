//! Serde helper functions for form and query deserialization.
//!
//! Form submissions send empty strings for blank fields and plain strings
//! for flags; these helpers normalise both.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating blank strings as None.
///
/// Surrounding whitespace is trimmed from kept values.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Deserialize an optional `YYYY-MM-DD` date.
///
/// Blank or malformed values become None instead of failing the request.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

/// Deserialize an optional flag sent either as a JSON boolean or as a string.
///
/// A present value other than `true` / `"true"` is `Some(false)`.
pub fn deserialize_optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag: Option<Flag> = Option::deserialize(deserializer)?;
    Ok(flag.map(|flag| match flag {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.trim() == "true",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_lenient_date")]
        date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "deserialize_optional_flag")]
        member: Option<bool>,
    }

    fn parse(json: &str) -> TestStruct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        assert_eq!(parse(r#"{"name": ""}"#).name, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        assert_eq!(parse(r#"{"name": "   "}"#).name, None);
    }

    #[test]
    fn test_deserialize_optional_string_trims_value() {
        assert_eq!(parse(r#"{"name": " Alice "}"#).name, Some("Alice".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_missing() {
        assert_eq!(parse("{}").name, None);
    }

    #[test]
    fn test_deserialize_lenient_date_valid() {
        assert_eq!(
            parse(r#"{"date": "2024-06-15"}"#).date,
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_deserialize_lenient_date_malformed_is_none() {
        assert_eq!(parse(r#"{"date": "15/06/2024"}"#).date, None);
        assert_eq!(parse(r#"{"date": ""}"#).date, None);
    }

    #[test]
    fn test_deserialize_optional_flag_accepts_string_and_bool() {
        assert_eq!(parse(r#"{"member": "true"}"#).member, Some(true));
        assert_eq!(parse(r#"{"member": true}"#).member, Some(true));
        assert_eq!(parse(r#"{"member": "false"}"#).member, Some(false));
        assert_eq!(parse(r#"{"member": "yes"}"#).member, Some(false));
        assert_eq!(parse("{}").member, None);
    }
}
