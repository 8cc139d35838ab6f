use super::pricing::d1_d2;
use super::types::{Greeks, MarketInputs};
use crate::error::{PricingError, PricingResult};
use crate::models::normal::{cumulative, density};
use log::debug;

/// Computes all eight Greeks in one pass from the same `d1`/`d2` as [`super::price`].
pub fn compute(inputs: &MarketInputs) -> PricingResult<Greeks> {
    let (d1, d2) = d1_d2(inputs)?;

    let MarketInputs {
        spot,
        strike,
        rate,
        time,
        volatility,
    } = *inputs;
    let sqrt_t = time.sqrt();
    let pdf_d1 = density(d1);
    let discounted_strike = strike * inputs.discount_factor();

    let delta_call = cumulative(d1);
    let decay = -(spot * pdf_d1 * volatility) / (2.0 * sqrt_t);

    let greeks = Greeks {
        delta_call,
        delta_put: delta_call - 1.0,
        gamma: pdf_d1 / (spot * volatility * sqrt_t),
        theta_call: decay - rate * discounted_strike * cumulative(d2),
        theta_put: decay + rate * discounted_strike * cumulative(-d2),
        vega: spot * pdf_d1 * sqrt_t,
        rho_call: time * discounted_strike * cumulative(d2),
        rho_put: -time * discounted_strike * cumulative(-d2),
    };

    if !greeks.all_finite() {
        return Err(PricingError::domain(format!(
            "non-finite Greeks for {:?}",
            inputs
        )));
    }
    debug!("greeks = {:?}", greeks);
    Ok(greeks)
}
