//! Console presentation of prices and Greeks.
//!
//! Kept separate from the engines so the numerical code stays free of I/O.

use crate::models::bs::Greeks;
use std::fmt;

/// `"Option Price: 10.4506"` with the given number of decimals.
pub fn format_price(price: f64, decimals: usize) -> String {
    format!("Option Price: {:.*}", decimals, price)
}

/// Labelled Greeks with a one-line explanation of each.
#[derive(Debug, Clone, Copy)]
pub struct GreeksReport<'a> {
    greeks: &'a Greeks,
    decimals: usize,
}

impl<'a> GreeksReport<'a> {
    pub fn new(greeks: &'a Greeks, decimals: usize) -> Self {
        Self { greeks, decimals }
    }

    /// `(label, value, explanation)` in report order.
    pub fn rows(&self) -> [(&'static str, f64, &'static str); 8] {
        let g = self.greeks;
        [
            (
                "Delta (Call)",
                g.delta_call,
                "Change in the CALL price when the stock price increases by $1.",
            ),
            (
                "Delta (Put)",
                g.delta_put,
                "Change in the PUT price when the stock price increases by $1.",
            ),
            (
                "Gamma",
                g.gamma,
                "Change in Delta when the stock price increases by $1 (same for calls and puts).",
            ),
            (
                "Theta (Call)",
                g.theta_call,
                "Change in the CALL price per year of time decay.",
            ),
            (
                "Theta (Put)",
                g.theta_put,
                "Change in the PUT price per year of time decay.",
            ),
            (
                "Vega",
                g.vega,
                "Change in the option price when volatility increases by 1.00 (100 percentage points).",
            ),
            (
                "Rho (Call)",
                g.rho_call,
                "Change in the CALL price when the interest rate increases by 1.00 (100 percentage points).",
            ),
            (
                "Rho (Put)",
                g.rho_put,
                "Change in the PUT price when the interest rate increases by 1.00 (100 percentage points).",
            ),
        ]
    }
}

impl fmt::Display for GreeksReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Option Greeks Explanation =====")?;
        writeln!(f)?;
        for (label, value, explanation) in self.rows() {
            writeln!(f, "{:<17} {:.*}", format!("{}:", label), self.decimals, value)?;
            writeln!(f, "  -> {}", explanation)?;
            writeln!(f)?;
        }
        write!(f, "{}", "=".repeat(38))
    }
}
