use anyhow::{Context, Result};
use cbpfetch::{CountySelector, Dataset, SourceConfig, SourceMode};
use reqwest::blocking::Client;
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Survey year used when none is given.
const DEFAULT_YEAR: u16 = 2014;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) configure the source ─────────────────────────────────────
    let mut args = env::args().skip(1);
    let state_fips = args
        .next()
        .context("usage: cbpfetch <state_fips> [year] [county[,county...]]")?;
    let year = match args.next() {
        Some(y) => y.parse::<u16>().with_context(|| format!("bad year `{y}`"))?,
        None => DEFAULT_YEAR,
    };
    let selector = match args.next() {
        Some(counties) => CountySelector::parse(&counties)?,
        None => CountySelector::All,
    };

    let cfg = match env::var("CBP_FILE") {
        Ok(path) => {
            let mut cfg = SourceConfig::new(state_fips, year, SourceMode::File);
            cfg.filepath = Some(path.into());
            cfg
        }
        Err(_) => {
            let mut cfg = SourceConfig::new(state_fips, year, SourceMode::Api);
            cfg.api_key = env::var("CENSUS_API_KEY").ok();
            cfg
        }
    };

    // ─── 3) load & report ────────────────────────────────────────────
    let client = Client::new();
    let dataset = Dataset::load(&client, &cfg)?;
    info!(rows = dataset.len(), "loaded dataset");

    let sectors = dataset.select_two_digit(&selector);
    let totals = sectors.totals();

    println!("{:<8} {:>12} {:>8}", dataset.naics_column(), "EMP", "ESTAB");
    for total in &totals {
        println!(
            "{:<8} {:>12} {:>8}",
            total.naics_code, total.employment, total.establishments
        );
    }
    info!(industries = totals.len(), "done");

    Ok(())
}
