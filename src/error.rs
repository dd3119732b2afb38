//! Error types for the recoverable failure paths.
//!
//! Row-index misuse through [`resolve`](crate::mapper::resolve) is a programming
//! error and panics; [`try_resolve`](crate::mapper::try_resolve) reports the same
//! condition as a [`RowIndexError`] for hosts that prefer to check.

use thiserror::Error;

/// Errors produced while parsing or constructing a price amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount text carried a leading minus sign.
    #[error("price amount must not be negative: {0:?}")]
    Negative(String),

    /// The amount text was not a plain decimal number.
    #[error("malformed price amount: {0:?}")]
    Malformed(String),

    /// The amount carried more fractional digits than can be represented.
    #[error("price amount {text:?} exceeds {max} fractional digits")]
    Precision { text: String, max: u8 },

    /// The amount does not fit in the fixed-point representation.
    #[error("price amount out of range: {0:?}")]
    Overflow(String),
}

/// A row index that does not address any row of the current catalog.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIndexError {
    #[error("row index {index} out of range for {row_count} rows")]
    OutOfRange { index: usize, row_count: usize },
}

/// Errors related to loading or validating a [`TableStyle`](crate::TableStyle).
#[derive(Error, Debug)]
pub enum StyleError {
    /// TOML parsing or schema errors
    #[error("style parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("style serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A color field that is not a `#rrggbb` hex triplet
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// The free label must render as visible text
    #[error("free label must not be empty")]
    EmptyFreeLabel,
}
