use crate::error::{PricingError, PricingResult};
use crate::models::bs::OptionKind;
use std::path::PathBuf;

/// Legacy cap on the number of prices read from a series.
pub const LEGACY_MAX_POINTS: usize = 999;

/// Scalar market parameters. Missing values are prompted for by the CLI.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct MarketConfig {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    /// Annualized risk-free rate (0.05 = 5%)
    pub rate: Option<f64>,
    /// Time to expiration in years
    pub time: Option<f64>,
}

/// Where and how to read the historical price series.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SeriesConfig {
    pub path: Option<PathBuf>,

    /// Maximum number of prices read (None = unbounded)
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_points: Option<usize>,

    /// Field delimiter in addition to whitespace and newlines
    #[cfg_attr(feature = "serde", serde(default = "default_delimiter"))]
    pub delimiter: char,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_points: None,
            delimiter: default_delimiter(),
        }
    }
}

/// Output options.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ReportConfig {
    /// Print the Greeks report
    #[cfg_attr(feature = "serde", serde(default))]
    pub greeks: bool,

    /// "call", "put", "1" or "2"
    #[cfg_attr(feature = "serde", serde(default))]
    pub option_kind: Option<String>,

    #[cfg_attr(feature = "serde", serde(default = "default_price_decimals"))]
    pub price_decimals: usize,

    #[cfg_attr(feature = "serde", serde(default = "default_greeks_decimals"))]
    pub greeks_decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            greeks: false,
            option_kind: None,
            price_decimals: default_price_decimals(),
            greeks_decimals: default_greeks_decimals(),
        }
    }
}

/// Root configuration for a pricing run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RunConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub market: MarketConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub series: SeriesConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub report: ReportConfig,
}

impl RunConfig {
    /// Matches the legacy program: 999-price cap and Greeks enabled.
    pub fn legacy() -> Self {
        Self {
            series: SeriesConfig {
                max_points: Some(LEGACY_MAX_POINTS),
                ..SeriesConfig::default()
            },
            report: ReportConfig {
                greeks: true,
                ..ReportConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> PricingResult<()> {
        if !self.series.delimiter.is_ascii() {
            return Err(PricingError::config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.series.delimiter
            )));
        }
        if self.series.max_points == Some(0) {
            return Err(PricingError::config("max_points must be at least 1"));
        }
        if let Some(kind) = &self.report.option_kind {
            kind.parse::<OptionKind>()?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> PricingResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PricingError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> PricingResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| PricingError::config(format!("failed to parse: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

/// Commented TOML template with every supported key.
pub fn default_config_template() -> &'static str {
    r#"# hvol configuration

[market]
# spot = 100.0
# strike = 100.0
# rate = 0.05        # annualized, 0.05 = 5%
# time = 0.5         # years to expiration

[series]
# path = "prices.csv"
# max_points = 999   # omit for no cap
delimiter = ","

[report]
greeks = false
# option_kind = "call"   # call | put | 1 | 2
price_decimals = 4
greeks_decimals = 6
"#
}

fn default_delimiter() -> char {
    ','
}

fn default_price_decimals() -> usize {
    4
}

fn default_greeks_decimals() -> usize {
    6
}
