//! Rate and conversion request/response types.
//!
//! Requests are immutable values created per call; historical variants carry
//! a calendar date, never a timestamp.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// A request for a single exchange rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateRequest {
    /// Rate as of now.
    Current {
        /// Currency the rate is quoted for.
        base: CurrencyCode,
        /// Currency the rate is expressed in.
        quote: CurrencyCode,
    },
    /// Rate on a specific calendar date.
    Historical {
        /// Currency the rate is quoted for.
        base: CurrencyCode,
        /// Currency the rate is expressed in.
        quote: CurrencyCode,
        /// Effective date of the requested rate.
        date: NaiveDate,
    },
}

impl RateRequest {
    /// Base currency of the request.
    #[must_use]
    pub const fn base(&self) -> &CurrencyCode {
        match self {
            Self::Current { base, .. } | Self::Historical { base, .. } => base,
        }
    }

    /// Quote currency of the request.
    #[must_use]
    pub const fn quote(&self) -> &CurrencyCode {
        match self {
            Self::Current { quote, .. } | Self::Historical { quote, .. } => quote,
        }
    }

    /// Requested date, if historical.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Current { .. } => None,
            Self::Historical { date, .. } => Some(*date),
        }
    }
}

/// A request to convert an amount between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionRequest {
    /// Conversion at the current rate.
    Current {
        /// Amount in the base currency.
        amount: Decimal,
        /// Currency converted from.
        base: CurrencyCode,
        /// Currency converted to.
        quote: CurrencyCode,
    },
    /// Conversion at the rate of a specific calendar date.
    Historical {
        /// Amount in the base currency.
        amount: Decimal,
        /// Currency converted from.
        base: CurrencyCode,
        /// Currency converted to.
        quote: CurrencyCode,
        /// Effective date of the conversion.
        date: NaiveDate,
    },
}

impl ConversionRequest {
    /// Amount in the base currency.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::Current { amount, .. } | Self::Historical { amount, .. } => *amount,
        }
    }

    /// Base currency of the request.
    #[must_use]
    pub const fn base(&self) -> &CurrencyCode {
        match self {
            Self::Current { base, .. } | Self::Historical { base, .. } => base,
        }
    }

    /// Quote currency of the request.
    #[must_use]
    pub const fn quote(&self) -> &CurrencyCode {
        match self {
            Self::Current { quote, .. } | Self::Historical { quote, .. } => quote,
        }
    }

    /// Requested date, if historical.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Current { .. } => None,
            Self::Historical { date, .. } => Some(*date),
        }
    }

    /// The rate request of the same variant for this conversion's pair.
    #[must_use]
    pub fn rate_request(&self) -> RateRequest {
        match self {
            Self::Current { base, quote, .. } => RateRequest::Current {
                base: base.clone(),
                quote: quote.clone(),
            },
            Self::Historical {
                base, quote, date, ..
            } => RateRequest::Historical {
                base: base.clone(),
                quote: quote.clone(),
                date: *date,
            },
        }
    }
}

/// A successful conversion result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Converted amount in the quote currency, not yet rounded.
    pub amount: Decimal,
    /// Date the conversion is effective for.
    pub as_of: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_request_for_current_conversion() {
        let request = ConversionRequest::Current {
            amount: dec!(10),
            base: "EUR".into(),
            quote: "PHP".into(),
        };
        assert_eq!(
            request.rate_request(),
            RateRequest::Current {
                base: "EUR".into(),
                quote: "PHP".into(),
            }
        );
    }

    #[test]
    fn test_rate_request_keeps_historical_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        let request = ConversionRequest::Historical {
            amount: dec!(10),
            base: "EUR".into(),
            quote: "PHP".into(),
            date,
        };
        assert_eq!(request.rate_request().date(), Some(date));
        assert_eq!(request.amount(), dec!(10));
    }
}
