//! Date parsing for WSDOT's WCF JSON services.
//!
//! The Traffic and WSF APIs serialize dates the old ASP.NET way,
//! `"/Date(1445974200000-0700)/"`: milliseconds since the Unix epoch
//! followed by an optional UTC offset. Some endpoints have moved to
//! RFC 3339, so both forms are accepted.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Error from parsing a WCF date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized date: {0:?}")]
pub struct WcfDateError(pub String);

/// Parse a WCF `/Date(ms±hhmm)/` string or an RFC 3339 timestamp.
pub fn parse_wcf_date(s: &str) -> Result<DateTime<FixedOffset>, WcfDateError> {
    let trimmed = s.trim();

    let Some(inner) = trimmed
        .strip_prefix("/Date(")
        .and_then(|rest| rest.strip_suffix(")/"))
    else {
        return DateTime::parse_from_rfc3339(trimmed).map_err(|_| WcfDateError(s.to_string()));
    };

    let unrecognized = || WcfDateError(s.to_string());
    if inner.is_empty() {
        return Err(unrecognized());
    }

    // Offset sign search skips the first char so negative epochs still parse
    let offset_start = inner
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '+' || c == '-')
        .map(|(pos, _)| pos);
    let (millis, offset) = match offset_start {
        Some(pos) => inner.split_at(pos),
        None => (inner, ""),
    };

    let millis: i64 = millis.parse().map_err(|_| unrecognized())?;
    let offset = parse_offset(offset).ok_or_else(unrecognized)?;

    let utc = DateTime::from_timestamp_millis(millis).ok_or_else(unrecognized)?;
    Ok(utc.with_timezone(&offset))
}

/// Parse a `±hhmm` offset; empty means UTC.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s.is_empty() {
        return FixedOffset::east_opt(0);
    }

    let (sign, digits) = s.split_at(1);
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    let secs = hours * 3600 + minutes * 60;

    match sign {
        "+" => FixedOffset::east_opt(secs),
        "-" => FixedOffset::west_opt(secs),
        _ => None,
    }
}

/// Serde adapter for optional WCF date fields.
///
/// Use with `#[serde(default, deserialize_with = "wcf_date::option")]`.
pub fn option<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_wcf_date(&s).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wcf_date_with_offset() {
        let dt = parse_wcf_date("/Date(1445974200000-0700)/").unwrap();
        assert_eq!(dt.timestamp_millis(), 1_445_974_200_000);
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn parses_wcf_date_positive_offset() {
        let dt = parse_wcf_date("/Date(0+0530)/").unwrap();
        assert_eq!(dt.timestamp_millis(), 0);
        assert_eq!(dt.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn parses_wcf_date_without_offset() {
        let dt = parse_wcf_date("/Date(1445974200000)/").unwrap();
        assert_eq!(dt.timestamp_millis(), 1_445_974_200_000);
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn parses_negative_epoch() {
        let dt = parse_wcf_date("/Date(-86400000-0800)/").unwrap();
        assert_eq!(dt.timestamp_millis(), -86_400_000);
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_wcf_date("2015-10-27T12:30:00-07:00").unwrap();
        assert_eq!(dt.timestamp_millis(), 1_445_974_200_000);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_wcf_date("").is_err());
        assert!(parse_wcf_date("yesterday").is_err());
        assert!(parse_wcf_date("/Date(abc)/").is_err());
        assert!(parse_wcf_date("/Date(123-07)/").is_err());
        assert!(parse_wcf_date("/Date(123-0700").is_err());
        assert!(parse_wcf_date("/Date()/").is_err());
        assert!(parse_wcf_date("/Date(é)/").is_err());
    }

    #[test]
    fn serde_option_adapter() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "option")]
            when: Option<DateTime<FixedOffset>>,
        }

        let w: Wrapper = serde_json::from_str(r#"{"when": "\/Date(1445974200000-0700)\/"}"#).unwrap();
        assert_eq!(w.when.unwrap().timestamp_millis(), 1_445_974_200_000);

        let w: Wrapper = serde_json::from_str(r#"{"when": null}"#).unwrap();
        assert!(w.when.is_none());

        let w: Wrapper = serde_json::from_str("{}").unwrap();
        assert!(w.when.is_none());

        assert!(serde_json::from_str::<Wrapper>(r#"{"when": "nope"}"#).is_err());
    }
}
