use crate::config::SeriesConfig;
use crate::error::{PricingError, PricingResult};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a price series from a file, in file order.
pub fn read_price_series<P: AsRef<Path>>(
    path: P,
    config: &SeriesConfig,
) -> PricingResult<Vec<f64>> {
    let path = path.as_ref();
    let unreadable = |source| PricingError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let prices = parse_price_series(file, config).map_err(|e| match e {
        PricingError::InputUnreadable { source, .. } => unreadable(source),
        other => other,
    })?;
    debug!("read {} prices from {}", prices.len(), path.display());
    Ok(prices)
}

/// Parses delimiter-, whitespace- or newline-separated decimal prices.
///
/// No header row is expected. Empty fields are skipped. Reading stops after
/// `config.max_points` values when a cap is configured. The delimiter must be
/// a single ASCII character.
pub fn parse_price_series<R: Read>(source: R, config: &SeriesConfig) -> PricingResult<Vec<f64>> {
    let delimiter = u8::try_from(config.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            PricingError::config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                config.delimiter
            ))
        })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(source);

    let mut prices = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        for token in record.iter().flat_map(str::split_whitespace) {
            if config.max_points.is_some_and(|cap| prices.len() >= cap) {
                warn!(
                    "price series truncated at {} values (max_points)",
                    prices.len()
                );
                return Ok(prices);
            }
            let value = token.parse::<f64>().map_err(|_| PricingError::Parse {
                line,
                token: token.to_string(),
            })?;
            prices.push(value);
        }
    }
    Ok(prices)
}

fn csv_error(err: csv::Error) -> PricingError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PricingError::InputUnreadable {
            path: Default::default(),
            source,
        },
        csv::ErrorKind::Utf8 { err, .. } => PricingError::Parse {
            line,
            token: err.to_string(),
        },
        other => PricingError::Parse {
            line,
            token: format!("{:?}", other),
        },
    }
}
