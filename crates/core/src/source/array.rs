//! In-memory rate source backed by rate tables.
//!
//! Intended for development and testing: rates are declared up front, one
//! table for current rates plus one table per historical date. Lookup is
//! direct only; an optional pivot currency additionally derives
//! `base -> quote` from `base -> pivot` and `pivot -> quote`. There is no
//! implicit inverse lookup.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::currency::CurrencyCode;
use crate::error::ConvertError;
use crate::model::{Conversion, ConversionRequest, RateRequest};
use crate::source::RateSource;

type RateTable = HashMap<CurrencyCode, HashMap<CurrencyCode, Decimal>>;

/// Rate source answering from in-memory tables.
#[derive(Debug, Clone)]
pub struct ArraySource {
    current: RateTable,
    historical: HashMap<NaiveDate, RateTable>,
    pivot: Option<CurrencyCode>,
    today: NaiveDate,
}

impl ArraySource {
    /// Creates an empty source. Every lookup fails until rates are added.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: HashMap::new(),
            historical: HashMap::new(),
            pivot: None,
            today: Utc::now().date_naive(),
        }
    }

    /// Adds a current rate for `base -> quote`.
    #[must_use]
    pub fn with_rate(
        mut self,
        base: impl Into<CurrencyCode>,
        quote: impl Into<CurrencyCode>,
        rate: Decimal,
    ) -> Self {
        self.current
            .entry(base.into())
            .or_default()
            .insert(quote.into(), rate);
        self
    }

    /// Adds a rate for `base -> quote` effective on `date`.
    #[must_use]
    pub fn with_historical_rate(
        mut self,
        date: NaiveDate,
        base: impl Into<CurrencyCode>,
        quote: impl Into<CurrencyCode>,
        rate: Decimal,
    ) -> Self {
        self.historical
            .entry(date)
            .or_default()
            .entry(base.into())
            .or_default()
            .insert(quote.into(), rate);
        self
    }

    /// Enables triangulation through `pivot` when a direct rate is missing.
    ///
    /// The derived rate is the unrounded product of `base -> pivot` and
    /// `pivot -> quote` from the same table.
    #[must_use]
    pub fn with_pivot(mut self, pivot: impl Into<CurrencyCode>) -> Self {
        self.pivot = Some(pivot.into());
        self
    }

    /// Overrides the date reported as `as_of` for current conversions.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn table(&self, date: Option<NaiveDate>) -> Option<&RateTable> {
        match date {
            None => Some(&self.current),
            Some(date) => self.historical.get(&date),
        }
    }

    fn lookup(&self, base: &CurrencyCode, quote: &CurrencyCode, date: Option<NaiveDate>) -> Option<Decimal> {
        let table = self.table(date)?;
        if let Some(rate) = table.get(base).and_then(|quotes| quotes.get(quote)) {
            return Some(*rate);
        }
        let pivot = self.pivot.as_ref()?;
        if pivot == base || pivot == quote {
            return None;
        }
        let leg_in = *table.get(base)?.get(pivot)?;
        let leg_out = *table.get(pivot)?.get(quote)?;
        Some(leg_in * leg_out)
    }
}

impl Default for ArraySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for ArraySource {
    fn rate(&self, request: &RateRequest) -> Result<Decimal, ConvertError> {
        self.lookup(request.base(), request.quote(), request.date())
            .ok_or_else(|| ConvertError::RateNotFound {
                base: request.base().clone(),
                quote: request.quote().clone(),
                date: request.date(),
            })
    }

    fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        let rate = self
            .lookup(request.base(), request.quote(), request.date())
            .ok_or_else(|| ConvertError::ConversionNotPerformed {
                amount: request.amount(),
                base: request.base().clone(),
                quote: request.quote().clone(),
                date: request.date(),
            })?;
        Ok(Conversion {
            amount: request.amount() * rate,
            as_of: request.date().unwrap_or(self.today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn source() -> ArraySource {
        ArraySource::new()
            .with_rate("EUR", "PHP", dec!(65.9745))
            .with_historical_rate(date(2025, 6, 13), "EUR", "PHP", dec!(66.1844))
    }

    #[test]
    fn test_current_rate() {
        let request = RateRequest::Current {
            base: "EUR".into(),
            quote: "PHP".into(),
        };
        assert_eq!(source().rate(&request).unwrap(), dec!(65.9745));
    }

    #[test]
    fn test_historical_rate() {
        let request = RateRequest::Historical {
            base: "EUR".into(),
            quote: "PHP".into(),
            date: date(2025, 6, 13),
        };
        assert_eq!(source().rate(&request).unwrap(), dec!(66.1844));
    }

    #[test]
    fn test_no_implicit_inverse() {
        let request = RateRequest::Current {
            base: "PHP".into(),
            quote: "EUR".into(),
        };
        let err = source().rate(&request).unwrap_err();
        assert_eq!(err.to_string(), "Unable to find exchange rate for PHP/EUR");
    }

    #[test]
    fn test_missing_historical_date() {
        let request = RateRequest::Historical {
            base: "EUR".into(),
            quote: "PHP".into(),
            date: date(2025, 6, 14),
        };
        let err = source().rate(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to find exchange rate for EUR/PHP on 2025-06-14"
        );
    }

    #[test]
    fn test_pivot_triangulation() {
        let source = ArraySource::new()
            .with_rate("EUR", "USD", dec!(1.1000))
            .with_rate("USD", "PHP", dec!(56.50))
            .with_pivot("USD");
        let request = RateRequest::Current {
            base: "EUR".into(),
            quote: "PHP".into(),
        };
        assert_eq!(source.rate(&request).unwrap(), dec!(62.150000));
    }

    #[test]
    fn test_direct_rate_wins_over_pivot() {
        let source = ArraySource::new()
            .with_rate("EUR", "USD", dec!(1.1000))
            .with_rate("USD", "PHP", dec!(56.50))
            .with_rate("EUR", "PHP", dec!(62.00))
            .with_pivot("USD");
        let request = RateRequest::Current {
            base: "EUR".into(),
            quote: "PHP".into(),
        };
        assert_eq!(source.rate(&request).unwrap(), dec!(62.00));
    }

    #[test]
    fn test_native_conversion() {
        let request = ConversionRequest::Historical {
            amount: dec!(1500),
            base: "EUR".into(),
            quote: "PHP".into(),
            date: date(2025, 6, 13),
        };
        let conversion = source().convert(&request).unwrap();
        assert_eq!(conversion.amount, dec!(99276.6000));
        assert_eq!(conversion.as_of, date(2025, 6, 13));
    }

    #[test]
    fn test_native_conversion_reports_conversion_error() {
        let request = ConversionRequest::Current {
            amount: dec!(1),
            base: "PHP".into(),
            quote: "EUR".into(),
        };
        let err = source().convert(&request).unwrap_err();
        assert_eq!(err.to_string(), "Unable to convert 1 PHP to EUR");
    }

    #[test]
    fn test_current_conversion_as_of_today() {
        let today = date(2025, 7, 1);
        let source = source().with_today(today);
        let request = ConversionRequest::Current {
            amount: dec!(10),
            base: "EUR".into(),
            quote: "PHP".into(),
        };
        assert_eq!(source.convert(&request).unwrap().as_of, today);
    }
}
