//! Rate source that knows no rates at all.

use rust_decimal::Decimal;

use crate::error::ConvertError;
use crate::model::{Conversion, ConversionRequest, RateRequest};
use crate::source::RateSource;

/// Source answering every request with the matching not-found error.
///
/// Useful for testing behavior that must not consult any source, such as
/// the same-currency shortcut.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSource;

impl NullSource {
    /// Creates the null source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RateSource for NullSource {
    fn rate(&self, request: &RateRequest) -> Result<Decimal, ConvertError> {
        Err(ConvertError::RateNotFound {
            base: request.base().clone(),
            quote: request.quote().clone(),
            date: request.date(),
        })
    }

    fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        Err(ConvertError::ConversionNotPerformed {
            amount: request.amount(),
            base: request.base().clone(),
            quote: request.quote().clone(),
            date: request.date(),
        })
    }
}
