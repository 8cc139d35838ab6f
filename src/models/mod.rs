//! Pricing Models
//!
//! - `normal`: standard normal density and CDF approximation
//! - `bs`: Black-Scholes prices and Greeks

pub mod bs;
pub mod normal;
