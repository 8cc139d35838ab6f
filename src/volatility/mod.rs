//! Historical volatility
//!
//! Annualized realized volatility from a series of observed prices, plus the
//! reader that turns a text price source into that series.

pub mod estimator;
pub mod reader;

pub use estimator::*;
pub use reader::*;
