//! The public conversion facade.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Round once, at this boundary, to the caller's precision
//! - Use banker's rounding (round half to even)
//! - Intermediate conversion amounts stay unrounded

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::currency::CurrencyCode;
use crate::error::ConvertError;
use crate::input::{AmountInput, DateInput};
use crate::model::{ConversionRequest, RateRequest};
use crate::resolve::{ConversionResolver, ConversionStrategy, build_resolver};
use crate::source::RateSource;

/// Rounds a value to `precision` fractional digits using banker's rounding
/// (round half to even), which minimizes cumulative errors.
#[must_use]
pub fn round_half_even(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven)
}

/// Converts amounts and resolves exchange rates through an injected source.
///
/// The converter is immutable after construction and holds no per-call
/// state, so it is safe to share across threads as long as the source is.
/// Each operation performs at most two sequential source calls: the native
/// conversion attempt and, under the fallback strategy, one rate lookup.
pub struct CurrencyConverter {
    source: Arc<dyn RateSource>,
    resolver: Box<dyn ConversionResolver>,
}

impl CurrencyConverter {
    /// Creates a converter with the default [`ConversionStrategy::Fallback`].
    pub fn new(source: impl RateSource + 'static) -> Self {
        Self::with_strategy(source, ConversionStrategy::default())
    }

    /// Creates a converter with an explicit strategy.
    pub fn with_strategy(source: impl RateSource + 'static, strategy: ConversionStrategy) -> Self {
        Self::from_shared(Arc::new(source), strategy)
    }

    /// Creates a converter around an already-shared source.
    #[must_use]
    pub fn from_shared(source: Arc<dyn RateSource>, strategy: ConversionStrategy) -> Self {
        let resolver = build_resolver(strategy, Arc::clone(&source));
        Self { source, resolver }
    }

    /// Returns the current exchange rate for `base`/`quote` as a canonical
    /// decimal string.
    ///
    /// Quoting a currency against itself yields `"1"` without consulting
    /// the source.
    ///
    /// # Errors
    ///
    /// [`ConvertError::RateNotFound`] when the source has no rate for the
    /// pair.
    pub fn exchange_rate(
        &self,
        base: impl Into<CurrencyCode>,
        quote: impl Into<CurrencyCode>,
    ) -> Result<String, ConvertError> {
        let (base, quote) = (base.into(), quote.into());
        if base == quote {
            return Ok(Decimal::ONE.to_string());
        }
        let rate = self.source.rate(&RateRequest::Current { base, quote })?;
        Ok(rate.to_string())
    }

    /// Returns the exchange rate for `base`/`quote` on `date` as a canonical
    /// decimal string.
    ///
    /// The date is normalized first; the same-currency shortcut applies
    /// identically, ignoring the date.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidDate`] for a malformed date string, raised
    /// before any source call; [`ConvertError::RateNotFound`] when the source
    /// has no rate for the pair on that date.
    pub fn historical_exchange_rate(
        &self,
        base: impl Into<CurrencyCode>,
        quote: impl Into<CurrencyCode>,
        date: impl Into<DateInput>,
    ) -> Result<String, ConvertError> {
        let date = date.into().into_date()?;
        let (base, quote) = (base.into(), quote.into());
        if base == quote {
            return Ok(Decimal::ONE.to_string());
        }
        let rate = self
            .source
            .rate(&RateRequest::Historical { base, quote, date })?;
        Ok(rate.to_string())
    }

    /// Converts `amount` from `base` to `quote` at the current rate, rounded
    /// half-even to `precision` fractional digits.
    ///
    /// Converting a currency into itself returns the rounded amount with
    /// zero source calls; this is an explicit comparison, not a rate-of-1
    /// multiplication.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidAmount`] for a malformed amount, raised before
    /// any source call; [`ConvertError::ConversionNotPerformed`] or
    /// [`ConvertError::RateNotFound`] from dispatch, depending on strategy.
    pub fn convert(
        &self,
        amount: impl Into<AmountInput>,
        base: impl Into<CurrencyCode>,
        quote: impl Into<CurrencyCode>,
        precision: u32,
    ) -> Result<String, ConvertError> {
        let amount = amount.into().into_decimal()?;
        let (base, quote) = (base.into(), quote.into());
        if base == quote {
            return Ok(round_half_even(amount, precision).to_string());
        }
        debug!(%base, %quote, "dispatching current conversion");
        let conversion = self
            .resolver
            .resolve(&ConversionRequest::Current { amount, base, quote })?;
        Ok(round_half_even(conversion.amount, precision).to_string())
    }

    /// Converts `amount` from `base` to `quote` at the rate effective on
    /// `date`, rounded half-even to `precision` fractional digits.
    ///
    /// The same-currency shortcut returns the rounded amount effective on
    /// the requested date, with zero source calls.
    pub fn convert_on_date(
        &self,
        amount: impl Into<AmountInput>,
        base: impl Into<CurrencyCode>,
        quote: impl Into<CurrencyCode>,
        precision: u32,
        date: impl Into<DateInput>,
    ) -> Result<String, ConvertError> {
        let amount = amount.into().into_decimal()?;
        let date = date.into().into_date()?;
        let (base, quote) = (base.into(), quote.into());
        if base == quote {
            // effective on the requested date, deterministically
            return Ok(round_half_even(amount, precision).to_string());
        }
        debug!(%base, %quote, %date, "dispatching historical conversion");
        let conversion = self.resolver.resolve(&ConversionRequest::Historical {
            amount,
            base,
            quote,
            date,
        })?;
        Ok(round_half_even(conversion.amount, precision).to_string())
    }
}
