//! Test-only helpers shared across unit and property tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use rust_decimal::Decimal;

use crate::error::ConvertError;
use crate::model::{Conversion, ConversionRequest, RateRequest};
use crate::source::RateSource;

/// Counts every source call so shortcut tests can assert zero lookups.
pub struct CountingSource<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: RateSource> RateSource for CountingSource<S> {
    fn rate(&self, request: &RateRequest) -> Result<Decimal, ConvertError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.rate(request)
    }

    fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.convert(request)
    }
}
