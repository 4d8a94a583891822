//! The in-memory county table and its aggregation views.
//!
//! A [`Dataset`] is built once from exactly one source and never mutated;
//! every query hands back a fresh table. The suppression-flag column is
//! consumed during construction, so a constructed dataset always carries
//! concrete employment counts.

pub mod filter;

pub use filter::CountySelector;

use crate::error::Result;
use crate::fetch::{self, SourceConfig, SourceMode};
use crate::process;
use crate::schema;
use reqwest::blocking::Client;
use std::collections::BTreeMap;
use tracing::info;

/// One county-industry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Two-digit state FIPS code.
    pub state: String,
    /// Three-digit county FIPS code.
    pub county: String,
    /// NAICS code: 2–4 digits, the `"00"` all-industries sentinel, or a
    /// range token such as `"31-33"`.
    pub naics_code: String,
    pub naics_title: String,
    pub geo_title: String,
    pub employment: u64,
    pub establishments: u64,
}

/// Per-industry sums across counties, one row per distinct code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryTotal {
    pub naics_code: String,
    pub employment: u64,
    pub establishments: u64,
}

/// County Business Patterns rows for all counties of one state-year.
#[derive(Debug, Clone)]
pub struct Dataset {
    naics_column: String,
    records: Vec<Record>,
}

impl Dataset {
    /// Load a dataset from the source named by `cfg`.
    ///
    /// Configuration is validated first, so API mode without a key fails
    /// before any request goes out. Imputation applies only to API data;
    /// local files are assumed pre-cleaned.
    #[tracing::instrument(level = "info", skip(client, cfg), fields(state = %cfg.state_fips, year = cfg.year))]
    pub fn load(client: &Client, cfg: &SourceConfig) -> Result<Dataset> {
        let raw = fetch::load_raw(client, cfg)?;
        let naics_column = schema::naics_column_for_year(cfg.year)?;
        let impute = cfg.mode == SourceMode::Api && cfg.impute;
        let records = process::build_records(&raw, naics_column, impute)?;
        info!(rows = records.len(), "dataset loaded");
        Ok(Dataset {
            naics_column: naics_column.to_string(),
            records,
        })
    }

    /// Wrap already-built records. Used by the filter views and tests.
    pub fn from_records(naics_column: impl Into<String>, records: Vec<Record>) -> Dataset {
        Dataset {
            naics_column: naics_column.into(),
            records,
        }
    }

    /// Industry-code column label the survey vintage selected.
    pub fn naics_column(&self) -> &str {
        &self.naics_column
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum employment and establishments per industry code.
    ///
    /// One output row per code present in the input, ordered by code; no
    /// zero-filling for absent codes.
    pub fn totals(&self) -> Vec<IndustryTotal> {
        let mut sums: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
        for record in &self.records {
            let entry = sums.entry(record.naics_code.as_str()).or_default();
            entry.0 += record.employment;
            entry.1 += record.establishments;
        }
        sums.into_iter()
            .map(|(code, (employment, establishments))| IndustryTotal {
                naics_code: code.to_string(),
                employment,
                establishments,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(county: &str, naics: &str, emp: u64, estab: u64) -> Record {
        Record {
            state: "01".into(),
            county: county.into(),
            naics_code: naics.into(),
            naics_title: String::new(),
            geo_title: String::new(),
            employment: emp,
            establishments: estab,
        }
    }

    #[test]
    fn totals_sum_per_industry_code() {
        let ds = Dataset::from_records(
            "NAICS2012",
            vec![
                record("013", "11", 5, 1),
                record("015", "11", 7, 2),
                record("013", "22", 3, 1),
            ],
        );
        let totals = ds.totals();
        assert_eq!(totals.len(), 2);
        assert_eq!(
            totals[0],
            IndustryTotal {
                naics_code: "11".into(),
                employment: 12,
                establishments: 3
            }
        );
        assert_eq!(totals[1].naics_code, "22");
        assert_eq!(totals[1].employment, 3);
    }

    #[test]
    fn totals_do_not_zero_fill() {
        let ds = Dataset::from_records("NAICS2012", vec![record("013", "11", 5, 1)]);
        let totals = ds.totals();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].naics_code, "11");
    }

    #[test]
    fn api_mode_without_key_fails_before_any_request() {
        // no local server is running; an attempted request would error
        // differently, so a Configuration error proves validation ran first
        let cfg = SourceConfig::new("01", 2014, SourceMode::Api);
        let client = Client::new();
        assert!(matches!(
            Dataset::load(&client, &cfg),
            Err(crate::error::Error::Configuration(_))
        ));
    }

    #[test]
    fn loads_a_local_file_without_imputation() -> Result<()> {
        use std::io::Write;
        let mut tmp = tempfile::NamedTempFile::new()?;
        writeln!(tmp, "EMP,EMPFLAG,ESTAB,NAICS2012,NAICS2012_TTL,GEO_TTL,state,county")?;
        writeln!(tmp, ",a,3,00,Total,\"Autauga County, Alabama\",01,001")?;
        writeln!(tmp, "80,,7,11,Agriculture,\"Autauga County, Alabama\",01,001")?;
        tmp.flush()?;

        let mut cfg = SourceConfig::new("01", 2014, SourceMode::File);
        cfg.filepath = Some(tmp.path().to_path_buf());
        let client = Client::new();
        let ds = Dataset::load(&client, &cfg)?;

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.naics_column(), "NAICS2012");
        // file mode never imputes: the flagged blank stays zero
        assert_eq!(ds.records()[0].employment, 0);
        assert_eq!(ds.records()[0].naics_code, "00");
        assert_eq!(ds.records()[0].county, "001");
        assert_eq!(ds.records()[1].employment, 80);
        assert_eq!(ds.records()[1].geo_title, "Autauga County, Alabama");
        Ok(())
    }

    #[test]
    fn queries_leave_the_original_untouched() {
        let ds = Dataset::from_records(
            "NAICS2012",
            vec![record("013", "11", 5, 1), record("015", "11", 7, 2)],
        );
        let filtered = ds.filter_by_county(&CountySelector::One("013".into()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(ds.len(), 2);
        let _ = ds.totals();
        assert_eq!(ds.len(), 2);
    }
}
