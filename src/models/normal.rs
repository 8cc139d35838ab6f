// Standard normal density and the Abramowitz & Stegun (26.2.17) CDF approximation.
// The polynomial coefficients are fixed so that prices reproduce the reference
// outputs; do not swap in an erf-based CDF here.

use std::f64::consts::PI;

const P: f64 = 0.2316419;
const A1: f64 = 0.319381530;
const A2: f64 = -0.356563782;
const A3: f64 = 1.781477937;
const A4: f64 = -1.821255978;
const A5: f64 = 1.330274429;

/// Standard normal probability density, `exp(-x²/2) / sqrt(2π)`.
pub fn density(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF approximation with maximum absolute error of about 7.5e-8.
///
/// With `k = 1 / (1 + p|x|)` the upper tail is `density(x) * (a1 k + ... + a5 k^5)`,
/// and negative arguments are reflected through `1 - c`.
pub fn cumulative(x: f64) -> f64 {
    let k = 1.0 / (1.0 + P * x.abs());
    let poly = k * (A1 + k * (A2 + k * (A3 + k * (A4 + k * A5))));
    let c = 1.0 - density(x) * poly;

    if x >= 0.0 {
        c
    } else {
        1.0 - c
    }
}
