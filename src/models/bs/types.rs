use crate::error::{PricingError, PricingResult};
use std::fmt;
use std::str::FromStr;

/// European option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `call`/`put`, `c`/`p` (any case) and the menu codes `1`/`2`.
impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> PricingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" | "1" => Ok(OptionKind::Call),
            "put" | "p" | "2" => Ok(OptionKind::Put),
            _ => Err(PricingError::invalid_kind(s)),
        }
    }
}

/// Menu codes: 1 = call, 2 = put.
impl TryFrom<i32> for OptionKind {
    type Error = PricingError;

    fn try_from(code: i32) -> PricingResult<Self> {
        match code {
            1 => Ok(OptionKind::Call),
            2 => Ok(OptionKind::Put),
            other => Err(PricingError::invalid_kind(other.to_string())),
        }
    }
}

/// Scalar market inputs shared by pricing and Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Underlying spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Annualized risk-free rate (0.05 = 5%)
    pub rate: f64,
    /// Time to expiration in years
    pub time: f64,
    /// Annualized volatility of log-returns
    pub volatility: f64,
}

impl MarketInputs {
    pub fn new(spot: f64, strike: f64, rate: f64, time: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            time,
            volatility,
        }
    }

    /// Checks the closed-form formulas are defined for these inputs.
    pub fn validate(&self) -> PricingResult<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("time", self.time),
            ("volatility", self.volatility),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PricingError::domain(format!("{} is not finite: {}", name, value)));
        }

        if self.spot <= 0.0 {
            return Err(PricingError::domain(format!("spot must be positive, got {}", self.spot)));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::domain(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if self.time <= 0.0 {
            return Err(PricingError::domain(format!(
                "time to expiration must be positive, got {}",
                self.time
            )));
        }
        if self.volatility <= 0.0 {
            return Err(PricingError::domain(format!(
                "volatility must be positive, got {}",
                self.volatility
            )));
        }
        Ok(())
    }

    /// Discount factor `e^(-rT)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }
}

/// Black-Scholes sensitivities for both sides of the contract.
///
/// Vega and rho are per unit change (1.00) of volatility and rate; theta is per year.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta_call: f64,
    pub delta_put: f64,
    /// Same for calls and puts
    pub gamma: f64,
    pub theta_call: f64,
    pub theta_put: f64,
    /// Same for calls and puts
    pub vega: f64,
    pub rho_call: f64,
    pub rho_put: f64,
}

impl Greeks {
    /// Delta for one side.
    pub fn delta(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.delta_call,
            OptionKind::Put => self.delta_put,
        }
    }

    /// Theta for one side.
    pub fn theta(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.theta_call,
            OptionKind::Put => self.theta_put,
        }
    }

    /// Rho for one side.
    pub fn rho(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.rho_call,
            OptionKind::Put => self.rho_put,
        }
    }

    /// Vega and rho per percentage point instead of per unit.
    pub fn per_percentage_point(&self) -> Self {
        Self {
            vega: self.vega * 0.01,
            rho_call: self.rho_call * 0.01,
            rho_put: self.rho_put * 0.01,
            ..*self
        }
    }

    pub(crate) fn all_finite(&self) -> bool {
        [
            self.delta_call,
            self.delta_put,
            self.gamma,
            self.theta_call,
            self.theta_put,
            self.vega,
            self.rho_call,
            self.rho_put,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_kind_aliases() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" p ".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!("2".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!(matches!(
            "straddle".parse::<OptionKind>(),
            Err(PricingError::InvalidOptionKind(_))
        ));
    }

    #[test]
    fn menu_code_three_is_rejected() {
        assert_eq!(OptionKind::try_from(1).unwrap(), OptionKind::Call);
        match OptionKind::try_from(3) {
            Err(PricingError::InvalidOptionKind(v)) => assert_eq!(v, "3"),
            other => panic!("expected InvalidOptionKind, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_non_positive_inputs() {
        let ok = MarketInputs::new(100.0, 100.0, 0.05, 1.0, 0.2);
        assert!(ok.validate().is_ok());

        // negative rates are allowed
        assert!(MarketInputs { rate: -0.01, ..ok }.validate().is_ok());

        for bad in [
            MarketInputs { spot: 0.0, ..ok },
            MarketInputs { strike: -5.0, ..ok },
            MarketInputs { time: 0.0, ..ok },
            MarketInputs { volatility: 0.0, ..ok },
            MarketInputs { rate: f64::NAN, ..ok },
        ] {
            assert!(matches!(
                bad.validate(),
                Err(PricingError::DomainComputation(_))
            ));
        }
    }

    #[test]
    fn per_percentage_point_rescales_vega_and_rho_only() {
        let g = Greeks {
            delta_call: 0.6,
            delta_put: -0.4,
            gamma: 0.02,
            theta_call: -6.0,
            theta_put: -2.0,
            vega: 37.5,
            rho_call: 53.0,
            rho_put: -42.0,
        };
        let scaled = g.per_percentage_point();
        assert_eq!(scaled.delta_call, g.delta_call);
        assert_eq!(scaled.theta_put, g.theta_put);
        assert!((scaled.vega - 0.375).abs() < 1e-12);
        assert!((scaled.rho_put + 0.42).abs() < 1e-12);
    }
}
