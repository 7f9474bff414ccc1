//! State route identifier type.

use std::fmt;

use serde::Serialize;

/// Errors from converting a route name into a [`RouteCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteIdError {
    /// No route name was supplied.
    #[error("missing route name")]
    MissingRouteName,

    /// The route name has no trailing digits to build a code from.
    #[error("could not convert {0:?} into a valid state route")]
    InvalidRouteName(String),
}

/// A state route identifier in the form the ELC accepts.
///
/// Route codes start with at least three digits (e.g., "005", "090",
/// "005S1"). Free-form names such as "SR 5" or "I-90" are converted by
/// taking their trailing digits and padding them to three places.
///
/// # Examples
///
/// ```
/// use wsdot_client::domain::RouteCode;
///
/// assert_eq!(RouteCode::normalize(Some("SR 5")).unwrap().as_str(), "005");
/// assert_eq!(RouteCode::normalize(Some("I-90")).unwrap().as_str(), "090");
/// assert_eq!(RouteCode::normalize(Some("005")).unwrap().as_str(), "005");
///
/// assert!(RouteCode::normalize(Some("abc")).is_err());
/// assert!(RouteCode::normalize_lenient(Some("abc")).is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteCode(String);

impl RouteCode {
    /// Convert a route name into a route code, failing on unusable input.
    ///
    /// Names that already begin with three digits are kept exactly as given,
    /// even when more digits or a suffix follow.
    pub fn normalize(raw: Option<&str>) -> Result<Self, RouteIdError> {
        let raw = raw.ok_or(RouteIdError::MissingRouteName)?;

        let bytes = raw.as_bytes();
        if bytes.len() >= 3 && bytes[..3].iter().all(u8::is_ascii_digit) {
            return Ok(RouteCode(raw.to_string()));
        }

        let digits_start = raw
            .bytes()
            .rposition(|b| !b.is_ascii_digit())
            .map_or(0, |pos| pos + 1);
        let digits = &raw[digits_start..];
        if digits.is_empty() {
            return Err(RouteIdError::InvalidRouteName(raw.to_string()));
        }

        // Numeric value of the digit run, without overflowing on long runs
        let significant = digits.trim_start_matches('0');
        let significant = if significant.is_empty() { "0" } else { significant };

        Ok(RouteCode(format!("{significant:0>3}")))
    }

    /// Like [`RouteCode::normalize`], but signals failure as `None`.
    pub fn normalize_lenient(raw: Option<&str>) -> Option<Self> {
        Self::normalize(raw).ok()
    }

    /// Returns the route code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteCode({})", self.0)
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing an already-normalized code is a no-op
        #[test]
        fn idempotent(name in "[A-Z]{1,3}[ -]?[0-9]{1,3}") {
            let once = RouteCode::normalize(Some(&name)).unwrap();
            let twice = RouteCode::normalize(Some(once.as_str())).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Codes built from a short trailing run are exactly three digits
        #[test]
        fn short_runs_pad_to_three(prefix in "[A-Za-z -]{0,5}", n in 0u32..1000) {
            let name = format!("{prefix}{n}");
            let code = RouteCode::normalize(Some(&name)).unwrap();
            prop_assert_eq!(code.as_str().len(), 3);
            prop_assert_eq!(code.as_str().parse::<u32>().unwrap(), n);
        }

        /// Names without digits are always rejected
        #[test]
        fn no_digits_rejected(name in "[A-Za-z -]{0,12}") {
            prop_assert!(RouteCode::normalize(Some(&name)).is_err());
        }

        /// Anything starting with three digits is returned unchanged
        #[test]
        fn valid_prefix_unchanged(name in "[0-9]{3}[0-9A-Z]{0,8}") {
            let code = RouteCode::normalize(Some(&name)).unwrap();
            prop_assert_eq!(code.as_str(), name.as_str());
        }
    }
}
