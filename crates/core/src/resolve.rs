//! Conversion strategies and dispatch.
//!
//! A [`ConversionStrategy`] selects, once at construction, how conversion
//! requests are satisfied: natively by the source, derived from a rate
//! lookup, or natively with the derivation as fallback. Rate lookups never
//! go through this dispatch; a rate request either is answerable by the
//! source or is not.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConvertError;
use crate::model::{Conversion, ConversionRequest};
use crate::source::RateSource;

/// How conversion requests are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStrategy {
    /// Only the source's native conversion path is used.
    NativeOnly,
    /// Conversions are always derived from a single rate lookup.
    CalculatedOnly,
    /// Native first, derived conversion when the source cannot answer.
    #[default]
    Fallback,
}

/// Answers conversion requests.
///
/// Implementations are immutable and safe to call concurrently as long as
/// the wrapped source is.
pub trait ConversionResolver: Send + Sync {
    /// Resolves a conversion request.
    fn resolve(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError>;
}

/// Resolver delegating to the source's native conversion path.
pub struct NativeResolver {
    source: Arc<dyn RateSource>,
}

impl NativeResolver {
    /// Wraps a source.
    #[must_use]
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }
}

impl ConversionResolver for NativeResolver {
    fn resolve(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        self.source.convert(request)
    }
}

/// Resolver deriving a conversion from a single rate lookup.
///
/// The rate request uses the same current/historical variant as the
/// conversion request; the looked-up rate is multiplied with the amount
/// without rounding. Rounding is applied once, by the caller.
pub struct CalculatedResolver {
    source: Arc<dyn RateSource>,
}

impl CalculatedResolver {
    /// Wraps a source.
    #[must_use]
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }
}

impl ConversionResolver for CalculatedResolver {
    fn resolve(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        match self.source.rate(&request.rate_request()) {
            Ok(rate) => Ok(Conversion {
                amount: request.amount() * rate,
                as_of: request.date().unwrap_or_else(|| Utc::now().date_naive()),
            }),
            Err(cause) => {
                debug!(%cause, base = %request.base(), quote = %request.quote(),
                    "calculated conversion failed");
                Err(ConvertError::ConversionNotPerformed {
                    amount: request.amount(),
                    base: request.base().clone(),
                    quote: request.quote().clone(),
                    date: request.date(),
                })
            }
        }
    }
}

/// Resolver trying an ordered list of resolvers.
///
/// Returns the first success without invoking the remaining resolvers. When
/// every resolver fails, the last resolver's error is returned; the later,
/// more specific failure wins.
pub struct ChainResolver {
    resolvers: Vec<Box<dyn ConversionResolver>>,
}

impl ChainResolver {
    /// Builds a chain from an ordered, non-empty resolver list.
    ///
    /// # Panics
    ///
    /// Panics if `resolvers` is empty.
    #[must_use]
    pub fn new(resolvers: Vec<Box<dyn ConversionResolver>>) -> Self {
        assert!(!resolvers.is_empty(), "chain requires at least one resolver");
        Self { resolvers }
    }
}

impl ConversionResolver for ChainResolver {
    fn resolve(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        let mut last_error = None;
        for (index, resolver) in self.resolvers.iter().enumerate() {
            match resolver.resolve(request) {
                Ok(conversion) => return Ok(conversion),
                Err(error) => {
                    debug!(index, %error, "conversion resolver failed, trying next");
                    last_error = Some(error);
                }
            }
        }
        // new() guarantees at least one resolver ran
        Err(last_error.unwrap_or_else(|| unreachable!()))
    }
}

/// Builds the conversion dispatch graph for a strategy.
#[must_use]
pub fn build_resolver(
    strategy: ConversionStrategy,
    source: Arc<dyn RateSource>,
) -> Box<dyn ConversionResolver> {
    match strategy {
        ConversionStrategy::NativeOnly => Box::new(NativeResolver::new(source)),
        ConversionStrategy::CalculatedOnly => Box::new(CalculatedResolver::new(source)),
        ConversionStrategy::Fallback => Box::new(ChainResolver::new(vec![
            Box::new(NativeResolver::new(Arc::clone(&source))),
            Box::new(CalculatedResolver::new(source)),
        ])),
    }
}
