//! Source selection and retrieval of raw CBP tables.
//!
//! A [`SourceConfig`] names where one state-year of data comes from: the
//! Census API (one blocking GET) or a local delimited file. Validation
//! runs before any I/O, so a misconfigured load never touches the network.

pub mod api;
pub mod file;
pub mod urls;

use crate::error::{Error, Result};
use crate::process::RawTable;
use crate::schema;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Api,
    File,
}

impl FromStr for SourceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "api" => Ok(SourceMode::Api),
            // the file reader predates the rename; "csv" is still accepted
            "file" | "csv" => Ok(SourceMode::File),
            other => Err(Error::Configuration(format!(
                "unrecognized source mode `{other}` (expected `api` or `file`)"
            ))),
        }
    }
}

/// Where and how to load one state-year of county data.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Two-digit state FIPS code.
    pub state_fips: String,
    /// Survey year; selects the NAICS vintage column.
    pub year: u16,
    pub mode: SourceMode,
    /// Census API key. Required in API mode.
    pub api_key: Option<String>,
    /// Override of the API variable list. Must include the vintage's
    /// industry-code column if set.
    pub variables: Option<Vec<String>>,
    /// Path to the local table. Required in file mode.
    pub filepath: Option<PathBuf>,
    /// Replace suppressed employment counts with midpoints (API mode only).
    pub impute: bool,
}

impl SourceConfig {
    pub fn new(state_fips: impl Into<String>, year: u16, mode: SourceMode) -> Self {
        SourceConfig {
            state_fips: state_fips.into(),
            year,
            mode,
            api_key: None,
            variables: None,
            filepath: None,
            impute: true,
        }
    }

    /// Check mode-specific required parameters. Called by the loader
    /// before any request is issued.
    pub fn validate(&self) -> Result<()> {
        if self.state_fips.len() != 2 {
            return Err(Error::Configuration(format!(
                "state_fips must be a 2-character FIPS code, got `{}`",
                self.state_fips
            )));
        }
        schema::naics_column_for_year(self.year)?;
        match self.mode {
            SourceMode::Api if self.api_key.is_none() => Err(Error::Configuration(
                "API mode requires an api_key".into(),
            )),
            SourceMode::File if self.filepath.is_none() => Err(Error::Configuration(
                "file mode requires a filepath".into(),
            )),
            _ => Ok(()),
        }
    }
}

/// Retrieve the raw table named by `cfg`, dispatching on its mode.
pub fn load_raw(client: &Client, cfg: &SourceConfig) -> Result<RawTable> {
    cfg.validate()?;
    let naics_column = schema::naics_column_for_year(cfg.year)?;

    match cfg.mode {
        SourceMode::Api => {
            let key = cfg
                .api_key
                .as_deref()
                .ok_or_else(|| Error::Configuration("API mode requires an api_key".into()))?;
            let variables = match &cfg.variables {
                Some(vars) => vars.clone(),
                None => schema::default_variables(naics_column),
            };
            let url = urls::query_url(cfg.year, &variables, &cfg.state_fips, key)?;
            info!(state = %cfg.state_fips, year = cfg.year, "fetching county data from API");
            api::fetch_table(client, &url)
        }
        SourceMode::File => {
            let path = cfg
                .filepath
                .as_deref()
                .ok_or_else(|| Error::Configuration("file mode requires a filepath".into()))?;
            info!(path = %path.display(), "reading county data from file");
            file::read_table(path)
        }
    }
}
