use crate::error::{PricingError, PricingResult};
use log::debug;
use statrs::statistics::Statistics;

/// Trading days used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Intermediate and final quantities of a historical volatility estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilityEstimate {
    /// Number of prices the estimate was built from
    pub observations: usize,
    /// `ln(p[i] / p[i-1])` for consecutive prices
    pub log_returns: Vec<f64>,
    pub mean_log_return: f64,
    /// Sample variance of the log-returns (divisor: returns - 1)
    pub daily_variance: f64,
    pub daily_volatility: f64,
    /// `daily_volatility * sqrt(252)`
    pub annualized_volatility: f64,
}

/// Log-returns of consecutive prices. Every price must be positive and finite.
pub fn log_returns(prices: &[f64]) -> PricingResult<Vec<f64>> {
    if let Some((i, p)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p <= 0.0)
    {
        return Err(PricingError::domain(format!(
            "price #{} must be positive and finite, got {}",
            i + 1,
            p
        )));
    }

    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Annualized historical volatility of a price series.
pub fn estimate(prices: &[f64]) -> PricingResult<f64> {
    estimate_detailed(prices).map(|e| e.annualized_volatility)
}

/// Historical volatility with its intermediate statistics.
///
/// Fails with [`PricingError::InsufficientData`] below two prices and with
/// [`PricingError::DegenerateSample`] for exactly two, where the sample variance
/// of a single log-return has no degrees of freedom.
pub fn estimate_detailed(prices: &[f64]) -> PricingResult<VolatilityEstimate> {
    match prices.len() {
        n @ (0 | 1) => return Err(PricingError::InsufficientData { found: n }),
        2 => return Err(PricingError::DegenerateSample),
        _ => {}
    }

    let log_returns = log_returns(prices)?;
    let mean_log_return = log_returns.iter().mean();
    // unbiased: divides by (returns - 1) = (prices - 2)
    let daily_variance = log_returns.iter().variance();

    if !daily_variance.is_finite() {
        return Err(PricingError::domain(format!(
            "non-finite variance {} over {} log-returns",
            daily_variance,
            log_returns.len()
        )));
    }

    let daily_volatility = daily_variance.sqrt();
    let annualized_volatility = daily_volatility * TRADING_DAYS_PER_YEAR.sqrt();
    debug!(
        "{} prices: mean log-return {:.8}, variance {:.8}, annualized vol {:.6}",
        prices.len(),
        mean_log_return,
        daily_variance,
        annualized_volatility
    );

    Ok(VolatilityEstimate {
        observations: prices.len(),
        log_returns,
        mean_log_return,
        daily_variance,
        daily_volatility,
        annualized_volatility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_series_has_zero_volatility() {
        assert_eq!(estimate(&[100.0, 100.0, 100.0, 100.0]).unwrap(), 0.0);
    }

    #[test]
    fn regression_baseline() {
        let prices = [100.0, 105.0, 102.0, 110.0, 108.0, 115.0];
        let est = estimate_detailed(&prices).unwrap();

        assert_eq!(est.observations, 6);
        assert_eq!(est.log_returns.len(), 5);
        assert_relative_eq!(est.mean_log_return, 0.027_952_388_475_031_75, max_relative = 1e-12);
        assert_relative_eq!(est.daily_variance, 0.002_324_027_969_608_076, max_relative = 1e-10);
        assert_relative_eq!(
            est.annualized_volatility,
            0.765_281_025_729_264_5,
            max_relative = 1e-10
        );
    }

    #[test]
    fn two_pass_formula_agrees() {
        let prices: [f64; 7] = [50.0, 51.5, 49.8, 50.2, 52.9, 53.1, 52.0];
        let returns: Vec<f64> = prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>()
            / (prices.len() - 2) as f64;
        let expected = var.sqrt() * 252f64.sqrt();

        assert_relative_eq!(estimate(&prices).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn too_few_prices() {
        assert!(matches!(
            estimate(&[100.0]),
            Err(PricingError::InsufficientData { found: 1 })
        ));
        assert!(matches!(
            estimate(&[]),
            Err(PricingError::InsufficientData { found: 0 })
        ));
        assert!(matches!(
            estimate(&[100.0, 101.0]),
            Err(PricingError::DegenerateSample)
        ));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let err = estimate(&[100.0, 0.0, 101.0]).unwrap_err();
        assert!(matches!(err, PricingError::DomainComputation(_)));
        assert!(estimate(&[100.0, -3.0, 101.0, 99.0]).is_err());
        assert!(estimate(&[100.0, f64::NAN, 101.0]).is_err());
    }
}
