//! Error types for pricing, Greeks and volatility estimation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    /// The price source could not be opened or read.
    #[error("cannot read price series from {}: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token in the price source is not a decimal number.
    #[error("invalid price {token:?} on line {line}")]
    Parse { line: u64, token: String },

    #[error("at least 2 prices required, found {found}")]
    InsufficientData { found: usize },

    /// Two prices give one log-return and a zero-degrees-of-freedom variance.
    #[error("at least 3 prices required for a sample variance, found 2")]
    DegenerateSample,

    #[error("invalid option kind: {0:?} (expected call or put)")]
    InvalidOptionKind(String),

    #[error("domain error: {0}")]
    DomainComputation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::DomainComputation(msg.into())
    }

    pub fn invalid_kind(value: impl Into<String>) -> Self {
        Self::InvalidOptionKind(value.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
