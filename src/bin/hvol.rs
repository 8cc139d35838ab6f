// src/bin/hvol.rs
//
// Command-line front end: collects market inputs from flags, a TOML config or
// interactive prompts, estimates volatility from a price file, then prints the
// Greeks report and the option price.

use anyhow::{Context, Result};
use clap::Parser;
use hvol_bs::{
    default_config_template, estimate_detailed, format_price, models::bs, read_price_series,
    AnalysisRequest, GreeksReport, OptionKind, RunConfig,
};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "hvol")]
#[command(about = "Black-Scholes option price and Greeks using historical volatility")]
struct Args {
    /// Current stock price
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Annualized risk-free rate (0.05 for 5%)
    #[arg(long)]
    rate: Option<f64>,

    /// Time to expiration in years (0.5 for 6 months)
    #[arg(long)]
    time: Option<f64>,

    /// File of historical prices, one per line
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Option to price: call, put, 1 or 2
    #[arg(long)]
    kind: Option<String>,

    /// Print the Greeks report
    #[arg(long, conflicts_with = "no_greeks")]
    greeks: bool,

    /// Skip the Greeks report without prompting
    #[arg(long)]
    no_greeks: bool,

    /// Maximum number of prices to read
    #[arg(long)]
    max_points: Option<usize>,

    /// Path to configuration file (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print a default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// `Some` when the Greeks choice was made on the command line.
    fn greeks_choice(&self) -> Option<bool> {
        match (self.greeks, self.no_greeks) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.generate_config {
        println!("{}", default_config_template());
        return;
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if let Err(e) = run(&args, &mut input, &mut output) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, out: &mut W) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(
            RunConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
        ),
        None => None,
    };
    let from_file = config.is_some();
    let mut config = config.unwrap_or_default();
    if let Some(cap) = args.max_points {
        config.series.max_points = Some(cap);
    }
    config.validate()?;

    let market = &config.market;
    let request = AnalysisRequest {
        spot: resolve(args.spot, market.spot, "Stock price: ", input, out)?,
        strike: resolve(args.strike, market.strike, "Strike price: ", input, out)?,
        rate: resolve(
            args.rate,
            market.rate,
            "Interest rate (e.g., 0.05 for 5%): ",
            input,
            out,
        )?,
        time: resolve(
            args.time,
            market.time,
            "Time to Expiration (in years, e.g., 0.5 for 6 months): ",
            input,
            out,
        )?,
    };
    let path: PathBuf = resolve(
        args.prices.clone(),
        config.series.path.clone(),
        "CSV file containing 1 price per line: ",
        input,
        out,
    )?;
    debug!("request = {:?}, prices = {}", request, path.display());

    let prices = read_price_series(&path, &config.series)?;
    let estimate = estimate_detailed(&prices).context("Failed to calculate volatility")?;
    let inputs = request.with_volatility(estimate.annualized_volatility);

    let show_greeks = match (args.greeks_choice(), from_file) {
        (Some(flag), _) => flag,
        (None, true) => config.report.greeks,
        (None, false) => {
            let answer: i32 = prompt(
                "Do you want Greek analytics? (1 for yes, 0 for no): ",
                input,
                out,
            )?;
            answer == 1
        }
    };
    if show_greeks {
        let greeks = bs::compute(&inputs)?;
        writeln!(out)?;
        writeln!(out, "{}", GreeksReport::new(&greeks, config.report.greeks_decimals))?;
    }

    let kind_text: String = match args.kind.clone().or(config.report.option_kind.clone()) {
        Some(text) => text,
        None => prompt("1: Call or 2: Put: ", input, out)?,
    };
    let kind = match kind_text.parse::<OptionKind>() {
        Ok(kind) => kind,
        Err(e) => {
            debug!("{}", e);
            writeln!(out, "Invalid option choice.")?;
            return Ok(());
        }
    };

    let price = bs::price(&inputs, kind)?;
    writeln!(out, "{}", format_price(price, config.report.price_decimals))?;
    Ok(())
}

/// Flag, then config value, then an interactive prompt.
fn resolve<T, R, W>(
    flag: Option<T>,
    configured: Option<T>,
    label: &str,
    input: &mut R,
    out: &mut W,
) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    match flag.or(configured) {
        Some(value) => Ok(value),
        None => prompt(label, input, out),
    }
}

fn prompt<T, R, W>(label: &str, input: &mut R, out: &mut W) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("unexpected end of input at prompt {:?}", label.trim());
    }
    line.trim()
        .parse()
        .with_context(|| format!("invalid value {:?} for {:?}", line.trim(), label.trim()))
}
