//! Conversion error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::currency::CurrencyCode;

/// Errors surfaced by rate lookups and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The source has no rate for the requested pair (and date, if historical).
    #[error("Unable to find exchange rate for {base}/{quote}{}", on_date(.date))]
    RateNotFound {
        /// Base currency of the failed lookup.
        base: CurrencyCode,
        /// Quote currency of the failed lookup.
        quote: CurrencyCode,
        /// Requested date for historical lookups.
        date: Option<NaiveDate>,
    },

    /// No conversion path could produce a result for the request.
    #[error("Unable to convert {amount} {base} to {quote}{}", on_date(.date))]
    ConversionNotPerformed {
        /// Amount that was to be converted.
        amount: Decimal,
        /// Base currency of the failed conversion.
        base: CurrencyCode,
        /// Quote currency of the failed conversion.
        quote: CurrencyCode,
        /// Requested date for historical conversions.
        date: Option<NaiveDate>,
    },

    /// Amount input could not be normalized to a decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date input could not be normalized to a calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

fn on_date(date: &Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!(" on {date}"),
        None => String::new(),
    }
}
