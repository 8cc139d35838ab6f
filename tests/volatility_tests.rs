
use approx::assert_relative_eq;
use hvol_bs::{
    analyze_file, analyze_series, estimate, estimate_detailed, read_price_series, AnalysisRequest,
    OptionKind, PricingError, SeriesConfig, TRADING_DAYS_PER_YEAR,
};
use statrs::statistics::Statistics;
use test_utils::{data_path, write_temp_prices, REFERENCE_PRICES, REFERENCE_VOLATILITY};

fn request() -> AnalysisRequest {
    AnalysisRequest {
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        time: 0.5,
    }
}

/// Regression baseline for the six-price reference series.
#[test]
fn test_reference_series_volatility() {
    let vol = estimate(&REFERENCE_PRICES).unwrap();
    assert_relative_eq!(vol, REFERENCE_VOLATILITY, max_relative = 1e-10);

    // deterministic across calls
    assert_eq!(vol, estimate(&REFERENCE_PRICES).unwrap());
}

#[test]
fn test_reference_file_matches_in_memory_series() {
    let prices = read_price_series(data_path("reference_prices.csv"), &SeriesConfig::default())
        .expect("Failed to load reference prices");
    assert_eq!(prices, REFERENCE_PRICES.to_vec());
}

/// Sixty simulated daily closes with roughly 20% annual volatility.
#[test]
fn test_daily_closes_file() {
    let prices = read_price_series(data_path("daily_closes.csv"), &SeriesConfig::default())
        .expect("Failed to load daily closes");
    assert_eq!(prices.len(), 60);

    let est = estimate_detailed(&prices).unwrap();
    assert_eq!(est.log_returns.len(), 59);
    assert_relative_eq!(est.annualized_volatility, 0.202_443_899_486_634_9, max_relative = 1e-9);

    // daily sample std dev scaled by sqrt(252)
    let daily = est.log_returns.iter().std_dev();
    assert_relative_eq!(
        est.annualized_volatility,
        daily * TRADING_DAYS_PER_YEAR.sqrt(),
        max_relative = 1e-12
    );
}

#[test]
fn test_volatility_scales_with_returns() {
    // doubling every log-return doubles the volatility
    let base: Vec<f64> = REFERENCE_PRICES.to_vec();
    let squared: Vec<f64> = base.iter().map(|p| p * p / 100.0).collect();
    assert_relative_eq!(
        estimate(&squared).unwrap(),
        2.0 * estimate(&base).unwrap(),
        max_relative = 1e-9
    );
}

#[test]
fn test_scale_invariance() {
    let scaled: Vec<f64> = REFERENCE_PRICES.iter().map(|p| p * 37.5).collect();
    assert_relative_eq!(
        estimate(&scaled).unwrap(),
        REFERENCE_VOLATILITY,
        max_relative = 1e-10
    );
}

#[test]
fn test_insufficient_and_degenerate_series() {
    assert!(matches!(
        estimate(&[100.0]),
        Err(PricingError::InsufficientData { found: 1 })
    ));
    assert!(matches!(
        estimate(&[100.0, 110.0]),
        Err(PricingError::DegenerateSample)
    ));
}

#[test]
fn test_analyze_series_with_and_without_price() {
    let priced = analyze_series(&request(), &REFERENCE_PRICES, Some(OptionKind::Put)).unwrap();
    assert_eq!(priced.kind, Some(OptionKind::Put));
    assert_relative_eq!(priced.inputs.volatility, REFERENCE_VOLATILITY, max_relative = 1e-10);
    let put = priced.price.expect("put price requested");
    assert!(put > 0.0);

    let unpriced = analyze_series(&request(), &REFERENCE_PRICES, None).unwrap();
    assert!(unpriced.price.is_none());
    assert_eq!(unpriced.greeks, priced.greeks);
}

/// A constant series yields zero volatility, which pricing must reject rather
/// than silently passing through.
#[test]
fn test_constant_series_fails_downstream() {
    let flat = [100.0, 100.0, 100.0, 100.0];
    assert_eq!(estimate(&flat).unwrap(), 0.0);
    assert!(matches!(
        analyze_series(&request(), &flat, Some(OptionKind::Call)),
        Err(PricingError::DomainComputation(_))
    ));
}

#[test]
fn test_analyze_file_end_to_end() {
    let path = write_temp_prices("end_to_end", "100\n105\n102\n110\n108\n115\n");
    let analysis = analyze_file(&path, &SeriesConfig::default(), &request(), Some(OptionKind::Call))
        .expect("Analysis should succeed");
    let _ = std::fs::remove_file(&path);

    assert_eq!(analysis.volatility.observations, 6);
    let call = analysis.price.unwrap();
    assert_relative_eq!(
        call,
        hvol_bs::price_option(&analysis.inputs, "call").unwrap(),
        max_relative = 1e-15
    );
}

#[test]
fn test_capped_series() {
    let path = write_temp_prices("capped", "100 105 102\n110 108 115\n");
    let config = SeriesConfig {
        max_points: Some(4),
        ..SeriesConfig::default()
    };
    let prices = read_price_series(&path, &config).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(prices, vec![100.0, 105.0, 102.0, 110.0]);
}

#[test]
fn test_unreadable_source_aborts() {
    let missing = data_path("does_not_exist.csv");
    match analyze_file(&missing, &SeriesConfig::default(), &request(), None) {
        Err(PricingError::InputUnreadable { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected InputUnreadable, got {:?}", other),
    }
}

#[test]
fn test_malformed_file() {
    let path = write_temp_prices("malformed", "100\n101\n1o2\n");
    let result = read_price_series(&path, &SeriesConfig::default());
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(PricingError::Parse { line: 3, .. })));
}
