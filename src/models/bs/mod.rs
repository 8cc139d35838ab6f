// Closed-form Black-Scholes for European options: pricing, Greeks and the shared
// input types. Both engines use the Abramowitz & Stegun CDF from `models::normal`.

pub mod greeks;
pub mod pricing;
pub mod types;

pub use greeks::compute;
pub use pricing::{d1_d2, price};
pub use types::{Greeks, MarketInputs, OptionKind};
