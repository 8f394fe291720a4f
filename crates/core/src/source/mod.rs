//! Rate source contract and in-memory sources.
//!
//! A source is the sole injected collaborator of the converter. "Rate not
//! found" is an expected error value, never a panic; concrete sources
//! (HTTP clients, caches) live outside this crate.

pub mod array;
pub mod null;

pub use array::ArraySource;
pub use null::NullSource;

use rust_decimal::Decimal;

use crate::error::ConvertError;
use crate::model::{Conversion, ConversionRequest, RateRequest};

/// Contract for exchange rate providers.
///
/// Implementations must answer every request they claim to support or return
/// an error. Each call is a single synchronous request/response exchange;
/// retries, rate limiting, and timeouts are the implementation's concern.
pub trait RateSource: Send + Sync {
    /// Looks up a single exchange rate.
    fn rate(&self, request: &RateRequest) -> Result<Decimal, ConvertError>;

    /// Performs a native amount conversion.
    ///
    /// Sources without a native conversion path answer with
    /// [`ConvertError::ConversionNotPerformed`].
    fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError>;
}

impl<S: RateSource + ?Sized> RateSource for std::sync::Arc<S> {
    fn rate(&self, request: &RateRequest) -> Result<Decimal, ConvertError> {
        (**self).rate(request)
    }

    fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        (**self).convert(request)
    }
}
