// demos/pricing_demo.rs

//! Demonstration of historical volatility estimation and Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Estimate annualized volatility from a price series
//! 2. Price a call and a put with the estimated volatility
//! 3. Compute and print the Greeks report
//! 4. Compare the per-unit and per-percentage-point vega/rho conventions

use anyhow::Result;
use hvol_bs::{
    analyze_series, format_price, price_option, AnalysisRequest, GreeksReport, OptionKind,
};

fn main() -> Result<()> {
    env_logger::init();

    println!("Historical Volatility Black-Scholes Demo");
    println!("========================================");

    let prices = create_demo_prices();
    println!("Price series loaded: {} observations", prices.len());

    let request = AnalysisRequest {
        spot: 112.0,
        strike: 110.0,
        rate: 0.04,
        time: 0.25,
    };

    println!("\nStep 1: Estimating volatility...");
    let analysis = analyze_series(&request, &prices, Some(OptionKind::Call))?;
    let vol = &analysis.volatility;
    println!("  Mean daily log-return: {:.6}", vol.mean_log_return);
    println!("  Daily volatility:      {:.6}", vol.daily_volatility);
    println!("  Annualized volatility: {:.2}%", vol.annualized_volatility * 100.0);

    println!("\nStep 2: Pricing...");
    if let Some(call) = analysis.price {
        println!("  Call  {}", format_price(call, 4));
    }
    let put = price_option(&analysis.inputs, "put")?;
    println!("  Put   {}", format_price(put, 4));

    println!("\nStep 3: Greeks");
    println!("{}", GreeksReport::new(&analysis.greeks, 6));

    println!("\nStep 4: Per 1% conventions");
    let pct = analysis.greeks.per_percentage_point();
    println!("  Vega per 1% vol:       {:.6}", pct.vega);
    println!("  Rho (Call) per 1% rate: {:.6}", pct.rho_call);

    Ok(())
}

/// Thirty synthetic daily closes drifting upward.
fn create_demo_prices() -> Vec<f64> {
    let moves = [
        0.8, -0.4, 1.2, 0.3, -1.1, 0.6, 0.9, -0.2, 0.4, -0.7, 1.5, 0.1, -0.3, 0.7, -0.9, 0.2,
        1.0, -0.5, 0.3, 0.6, -1.2, 0.8, 0.4, -0.1, 0.5, -0.6, 1.1, 0.2, -0.4,
    ];
    let mut prices = vec![100.0];
    for pct in moves {
        let last = *prices.last().unwrap_or(&100.0);
        prices.push(last * (1.0 + pct / 100.0));
    }
    prices
}
