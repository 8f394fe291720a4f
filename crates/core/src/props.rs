//! Property-based tests for the conversion facade.
//!
//! - Same-currency requests never reach the source
//! - Results are rounded half-even to the requested precision, exactly once

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::converter::{CurrencyConverter, round_half_even};
use crate::resolve::ConversionStrategy;
use crate::source::{ArraySource, NullSource, RateSource};
use crate::testkit::CountingSource;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate rounding precisions (0 to 6).
fn precision() -> impl Strategy<Value = u32> {
    0u32..=6
}

/// Strategy to generate three-letter currency codes.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any currency code, quoting it against itself is exactly "1" and
    /// the source is never consulted.
    #[test]
    fn prop_same_currency_rate_is_one(code in currency_code()) {
        let counting = Arc::new(CountingSource::new(NullSource::new()));
        let converter = CurrencyConverter::from_shared(
            Arc::clone(&counting) as Arc<dyn RateSource>,
            ConversionStrategy::Fallback,
        );

        prop_assert_eq!(converter.exchange_rate(code.as_str(), code.as_str()).unwrap(), "1");
        prop_assert_eq!(counting.calls(), 0);
    }

    /// Converting a currency into itself is plain half-even rounding of the
    /// amount, with zero source calls.
    #[test]
    fn prop_same_currency_conversion_is_rounding(
        amount in positive_amount(),
        code in currency_code(),
        precision in precision(),
    ) {
        let counting = Arc::new(CountingSource::new(NullSource::new()));
        let converter = CurrencyConverter::from_shared(
            Arc::clone(&counting) as Arc<dyn RateSource>,
            ConversionStrategy::Fallback,
        );

        let result = converter
            .convert(amount, code.as_str(), code.as_str(), precision)
            .unwrap();
        prop_assert_eq!(result, round_half_even(amount, precision).to_string());
        prop_assert_eq!(counting.calls(), 0);
    }

    /// A derived conversion equals the unrounded product of amount and rate,
    /// rounded half-even exactly once at the facade.
    #[test]
    fn prop_calculated_conversion_rounds_once(
        amount in positive_amount(),
        rate in positive_rate(),
        precision in precision(),
    ) {
        let source = ArraySource::new().with_rate("EUR", "PHP", rate);
        let converter =
            CurrencyConverter::with_strategy(source, ConversionStrategy::CalculatedOnly);

        let result = converter.convert(amount, "EUR", "PHP", precision).unwrap();
        prop_assert_eq!(result, round_half_even(amount * rate, precision).to_string());
    }

    /// Rounded results carry at most `precision` fractional digits.
    #[test]
    fn prop_result_scale_is_bounded(
        amount in positive_amount(),
        rate in positive_rate(),
        precision in precision(),
    ) {
        let source = ArraySource::new().with_rate("EUR", "PHP", rate);
        let converter = CurrencyConverter::new(source);

        let result = converter.convert(amount, "EUR", "PHP", precision).unwrap();
        let parsed: Decimal = result.parse().unwrap();
        prop_assert!(parsed.scale() <= precision);
    }
}
