//! Core currency conversion logic for Cambio.
//!
//! This crate resolves exchange rates (current or historical) and converts
//! amounts between currencies through a pluggable [`RateSource`]. It contains
//! pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `converter` - The public conversion facade
//! - `currency` - Currency code type
//! - `error` - Conversion error types
//! - `input` - Amount and date input normalization
//! - `model` - Rate and conversion request/response types
//! - `resolve` - Conversion strategies and dispatch
//! - `source` - Rate source contract and in-memory sources

pub mod converter;
pub mod currency;
pub mod error;
pub mod input;
pub mod model;
pub mod resolve;
pub mod source;

#[cfg(test)]
mod props;
#[cfg(test)]
mod testkit;

pub use converter::{CurrencyConverter, round_half_even};
pub use currency::CurrencyCode;
pub use error::ConvertError;
pub use input::{AmountInput, DateInput};
pub use model::{Conversion, ConversionRequest, RateRequest};
pub use resolve::{ConversionResolver, ConversionStrategy};
pub use source::{ArraySource, NullSource, RateSource};
