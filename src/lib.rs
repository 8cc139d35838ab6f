//! # hvol-bs: Black-Scholes Pricing with Historical Volatility
//!
//! `hvol-bs` prices European options with the closed-form Black-Scholes model and
//! computes their Greeks, estimating volatility from a series of observed prices
//! rather than taking it as an input.
//!
//! ## Core Features
//!
//! - **Normal distribution**: standard normal density and the Abramowitz & Stegun CDF
//! - **Historical volatility**: annualized sample volatility of daily log-returns
//! - **Option pricing**: Black-Scholes call and put prices
//! - **Greeks**: delta, gamma, theta, vega and rho for both sides in one pass
//!
//! ## Quick Start
//!
//! ```rust
//! use hvol_bs::{analyze_series, AnalysisRequest, OptionKind};
//!
//! let prices = [100.0, 105.0, 102.0, 110.0, 108.0, 115.0];
//! let request = AnalysisRequest { spot: 100.0, strike: 100.0, rate: 0.05, time: 0.5 };
//!
//! let analysis = analyze_series(&request, &prices, Some(OptionKind::Call))?;
//! println!("vol = {:.4}", analysis.volatility.annualized_volatility);
//! println!("price = {:.4}", analysis.price.unwrap_or_default());
//! println!("delta = {:.6}", analysis.greeks.delta_call);
//! # Ok::<(), hvol_bs::PricingError>(())
//! ```
//!
//! ## Conventions
//!
//! - Volatility is annualized with 252 trading days per year.
//! - The sample variance of `m` log-returns divides by `m - 1`, so at least three
//!   prices are required.
//! - Theta is per year; vega and rho are per unit (1.00) change in volatility and rate.
//!   Use [`Greeks::per_percentage_point`] for the per-1% convention.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod volatility;

// ================================================================================================
// IMPORTS
// ================================================================================================

use log::{debug, info};
use std::path::Path;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{default_config_template, MarketConfig, ReportConfig, RunConfig, SeriesConfig};
pub use error::{PricingError, PricingResult};
pub use models::bs::{Greeks, MarketInputs, OptionKind};
pub use models::normal::{cumulative, density};
pub use report::{format_price, GreeksReport};
pub use volatility::{
    estimate, estimate_detailed, parse_price_series, read_price_series, VolatilityEstimate,
    TRADING_DAYS_PER_YEAR,
};

// ================================================================================================
// WORKFLOW
// ================================================================================================

/// Market parameters supplied alongside a price series; volatility is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisRequest {
    pub spot: f64,
    pub strike: f64,
    /// Annualized risk-free rate (0.05 = 5%)
    pub rate: f64,
    /// Time to expiration in years
    pub time: f64,
}

impl AnalysisRequest {
    /// Combine with an estimated volatility into pricing inputs.
    pub fn with_volatility(&self, volatility: f64) -> MarketInputs {
        MarketInputs::new(self.spot, self.strike, self.rate, self.time, volatility)
    }
}

/// Everything computed for one request.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    pub volatility: VolatilityEstimate,
    pub inputs: MarketInputs,
    pub greeks: Greeks,
    /// Kind that was priced, if any
    pub kind: Option<OptionKind>,
    /// `None` when no option kind was requested
    pub price: Option<f64>,
}

/// Estimate volatility from `prices`, then compute the Greeks and, if `kind` is
/// given, the option price.
///
/// # Errors
///
/// * [`PricingError::InsufficientData`] / [`PricingError::DegenerateSample`] for
///   fewer than three prices
/// * [`PricingError::DomainComputation`] for non-positive prices or market inputs,
///   including a zero volatility from a constant series
pub fn analyze_series(
    request: &AnalysisRequest,
    prices: &[f64],
    kind: Option<OptionKind>,
) -> PricingResult<Analysis> {
    let volatility = estimate_detailed(prices)?;
    let inputs = request.with_volatility(volatility.annualized_volatility);
    info!(
        "estimated volatility {:.6} from {} prices",
        volatility.annualized_volatility, volatility.observations
    );

    let greeks = models::bs::compute(&inputs)?;
    let price = kind.map(|k| models::bs::price(&inputs, k)).transpose()?;
    debug!("analysis complete: kind={:?} price={:?}", kind, price);

    Ok(Analysis {
        volatility,
        inputs,
        greeks,
        kind,
        price,
    })
}

/// [`analyze_series`] over a price file read with `series` settings.
pub fn analyze_file<P: AsRef<Path>>(
    path: P,
    series: &SeriesConfig,
    request: &AnalysisRequest,
    kind: Option<OptionKind>,
) -> PricingResult<Analysis> {
    let prices = read_price_series(path, series)?;
    analyze_series(request, &prices, kind)
}

/// Price with a textual option kind: `call`, `put`, `c`, `p`, `1` or `2`.
pub fn price_option(inputs: &MarketInputs, option_type: &str) -> PricingResult<f64> {
    let kind: OptionKind = option_type.parse()?;
    models::bs::price(inputs, kind)
}

/// Greeks for the given inputs.
pub fn compute_greeks(inputs: &MarketInputs) -> PricingResult<Greeks> {
    models::bs::compute(inputs)
}
