//! Amount and date input normalization.
//!
//! The converter accepts loosely typed amounts and dates at its boundary.
//! Normalization into [`Decimal`] and [`NaiveDate`] happens here, once,
//! before any rate source is consulted; malformed input is a client error,
//! distinct from a not-found error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::ConvertError;

/// A monetary amount accepted by the converter.
#[derive(Debug, Clone)]
pub enum AmountInput {
    /// An already-typed decimal, taken as-is.
    Decimal(Decimal),
    /// A floating-point value, converted lossily as a convenience.
    Float(f64),
    /// A decimal string, parsed without precision loss.
    Text(String),
}

impl AmountInput {
    /// Normalizes the input into a decimal.
    pub fn into_decimal(self) -> Result<Decimal, ConvertError> {
        match self {
            Self::Decimal(amount) => Ok(amount),
            Self::Float(amount) => {
                Decimal::from_f64(amount).ok_or_else(|| ConvertError::InvalidAmount(amount.to_string()))
            }
            Self::Text(amount) => amount
                .parse()
                .map_err(|_| ConvertError::InvalidAmount(amount)),
        }
    }
}

impl From<Decimal> for AmountInput {
    fn from(amount: Decimal) -> Self {
        Self::Decimal(amount)
    }
}

impl From<f64> for AmountInput {
    fn from(amount: f64) -> Self {
        Self::Float(amount)
    }
}

impl From<&str> for AmountInput {
    fn from(amount: &str) -> Self {
        Self::Text(amount.to_owned())
    }
}

impl From<String> for AmountInput {
    fn from(amount: String) -> Self {
        Self::Text(amount)
    }
}

/// A calendar date accepted by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// An already-typed calendar date, taken as-is.
    Date(NaiveDate),
    /// A datetime, truncated to the calendar date it denotes.
    DateTime(NaiveDateTime),
    /// A date string, parsed as ISO `YYYY-MM-DD` with a lenient
    /// datetime-string fallback.
    Text(String),
}

impl DateInput {
    /// Normalizes the input into a calendar date.
    ///
    /// Strings are parsed strictly as `%Y-%m-%d` first. When that fails, one
    /// lenient datetime parse is attempted (RFC 3339, then a bare
    /// `%Y-%m-%dT%H:%M:%S`) and its date part is taken.
    pub fn into_date(self) -> Result<NaiveDate, ConvertError> {
        match self {
            Self::Date(date) => Ok(date),
            Self::DateTime(datetime) => Ok(datetime.date()),
            Self::Text(text) => parse_date_text(&text).ok_or(ConvertError::InvalidDate(text)),
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|datetime| datetime.date())
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::DateTime(datetime.naive_utc())
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
