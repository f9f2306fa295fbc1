//! Checkers for the `format` keyword.
//!
//! Only the names listed in `Format` are enforced. Any other format value is
//! an annotation the engine does not understand and passes silently.

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, NaiveDate};
use url::Url;
use uuid::Uuid;

/// A recognized `format` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DateTime,
    Date,
    Time,
    Email,
    Uri,
    Uuid,
    Ipv4,
    Ipv6,
}

impl Format {
    /// Look up a format by its keyword value; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "date-time" => Some(Format::DateTime),
            "date" => Some(Format::Date),
            "time" => Some(Format::Time),
            "email" => Some(Format::Email),
            "uri" => Some(Format::Uri),
            "uuid" => Some(Format::Uuid),
            "ipv4" => Some(Format::Ipv4),
            "ipv6" => Some(Format::Ipv6),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::DateTime => "date-time",
            Format::Date => "date",
            Format::Time => "time",
            Format::Email => "email",
            Format::Uri => "uri",
            Format::Uuid => "uuid",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
        }
    }

    /// True when `value` is a well-formed instance of this format.
    pub fn matches(self, value: &str) -> bool {
        match self {
            Format::DateTime => DateTime::parse_from_rfc3339(value).is_ok(),
            Format::Date => is_full_date(value),
            Format::Time => is_full_time(value),
            Format::Email => is_email(value),
            Format::Uri => is_absolute_uri(value),
            Format::Uuid => value.len() == 36 && Uuid::parse_str(value).is_ok(),
            Format::Ipv4 => value.parse::<Ipv4Addr>().is_ok(),
            Format::Ipv6 => value.parse::<Ipv6Addr>().is_ok(),
        }
    }
}

/// RFC 3339 `full-date`, e.g. `2024-02-29`. The calendar is checked, so
/// `2023-02-29` fails.
fn is_full_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// RFC 3339 `full-time`, e.g. `23:20:50.52Z` or `08:00:00+05:30`.
fn is_full_time(value: &str) -> bool {
    // Anchor to an arbitrary date and reuse the RFC 3339 timestamp parser,
    // which already handles fractions and offsets.
    !value.contains('T')
        && !value.contains('t')
        && DateTime::parse_from_rfc3339(&format!("1970-01-01T{value}")).is_ok()
}

/// Simple `local@domain.tld` shape check.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// An absolute URI: a scheme followed by a well-formed remainder.
fn is_absolute_uri(value: &str) -> bool {
    // `Url::parse` silently strips surrounding whitespace and tabs.
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    Url::parse(value).is_ok()
}
