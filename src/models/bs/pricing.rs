use super::types::{MarketInputs, OptionKind};
use crate::error::{PricingError, PricingResult};
use crate::models::normal::cumulative;
use log::debug;

/// Black-Scholes `(d1, d2)` for validated inputs.
pub fn d1_d2(inputs: &MarketInputs) -> PricingResult<(f64, f64)> {
    inputs.validate()?;

    let MarketInputs {
        spot,
        strike,
        rate,
        time,
        volatility,
    } = *inputs;
    let vol_sqrt_t = volatility * time.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility.powi(2)) * time) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    if !d1.is_finite() || !d2.is_finite() {
        return Err(PricingError::domain(format!(
            "non-finite d1/d2 ({}, {}) for {:?}",
            d1, d2, inputs
        )));
    }
    debug!("d1 = {:.8}, d2 = {:.8}", d1, d2);
    Ok((d1, d2))
}

/// Price of a European option under Black-Scholes with the A&S normal CDF.
pub fn price(inputs: &MarketInputs, kind: OptionKind) -> PricingResult<f64> {
    let (d1, d2) = d1_d2(inputs)?;
    let discounted_strike = inputs.strike * inputs.discount_factor();

    let value = match kind {
        OptionKind::Call => inputs.spot * cumulative(d1) - discounted_strike * cumulative(d2),
        OptionKind::Put => discounted_strike * cumulative(-d2) - inputs.spot * cumulative(-d1),
    };

    if !value.is_finite() {
        return Err(PricingError::domain(format!("non-finite {} price", kind)));
    }
    debug!("{} price = {:.6}", kind, value);
    Ok(value)
}
