//! Download the master NAICS code/title list for a survey year and write
//! it to a local CSV. One-off utility; the key comes from the environment.

use anyhow::{Context, Result};
use cbpfetch::fetch::{api, urls};
use cbpfetch::schema;
use reqwest::blocking::Client;
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_YEAR: u16 = 2014;
const OUT_PATH: &str = "naics_list.csv";

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    let year = match env::args().nth(1) {
        Some(y) => y.parse::<u16>().with_context(|| format!("bad year `{y}`"))?,
        None => DEFAULT_YEAR,
    };
    let key = env::var("CENSUS_API_KEY").context("CENSUS_API_KEY is not set")?;

    let naics_column = schema::naics_column_for_year(year)?;
    let title_column = schema::naics_title_column(naics_column);
    let variables = vec![naics_column.to_string(), title_column.clone()];

    let url = urls::national_url(year, &variables, &key)?;
    info!(year, "fetching national NAICS code list");
    let client = Client::new();
    let raw = api::fetch_table(&client, &url)?;

    let code_idx = raw
        .headers
        .iter()
        .position(|h| h == naics_column)
        .with_context(|| format!("column `{naics_column}` missing from response"))?;
    let title_idx = raw
        .headers
        .iter()
        .position(|h| *h == title_column)
        .with_context(|| format!("column `{title_column}` missing from response"))?;

    let mut writer = csv::Writer::from_path(OUT_PATH)?;
    writer.write_record(["code", "title"])?;
    for row in &raw.rows {
        let code = row.get(code_idx).map(String::as_str).unwrap_or("");
        let title = row.get(title_idx).map(String::as_str).unwrap_or("");
        writer.write_record([code, title])?;
    }
    writer.flush()?;

    info!(rows = raw.rows.len(), path = OUT_PATH, "wrote NAICS list");
    Ok(())
}
