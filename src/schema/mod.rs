//! Survey-vintage column metadata and the employment imputation table.
//!
//! The CBP API renames its industry-code column whenever NAICS is revised,
//! so the survey year decides which column name appears in both the request
//! variable list and the response headers. Everything downstream (URL
//! construction, record building, the Dataset's own label) reads the name
//! from here.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Column names the API appends from the geography clauses.
pub const STATE_COLUMN: &str = "state";
pub const COUNTY_COLUMN: &str = "county";

/// Count and flag columns, stable across vintages.
pub const EMP_COLUMN: &str = "EMP";
pub const EMP_FLAG_COLUMN: &str = "EMPFLAG";
pub const ESTAB_COLUMN: &str = "ESTAB";

/// Geography display-label column.
pub const GEO_TITLE_COLUMN: &str = "GEO_TTL";

/// Industry-code column name for a survey year.
///
/// Years 2012 onward use the 2012 NAICS revision; 2008–2011 the 2007
/// revision. Earlier years are not served with NAICS columns at all.
pub fn naics_column_for_year(year: u16) -> Result<&'static str> {
    match year {
        y if y >= 2012 => Ok("NAICS2012"),
        2008..=2011 => Ok("NAICS2007"),
        y => Err(Error::Configuration(format!(
            "year {y} predates the earliest supported NAICS vintage (2008)"
        ))),
    }
}

/// Display-label column paired with an industry-code column.
pub fn naics_title_column(naics_column: &str) -> String {
    format!("{naics_column}_TTL")
}

/// Default API variable list for a vintage: counts, suppression flag,
/// industry code + title, geography title.
pub fn default_variables(naics_column: &str) -> Vec<String> {
    vec![
        EMP_COLUMN.to_string(),
        EMP_FLAG_COLUMN.to_string(),
        ESTAB_COLUMN.to_string(),
        naics_column.to_string(),
        naics_title_column(naics_column),
        GEO_TITLE_COLUMN.to_string(),
    ]
}

/// Suppression flag → midpoint employment estimate.
///
/// Initialized once, never mutated.
pub static EMP_IMPUTATION: Lazy<HashMap<&'static str, u64>> = Lazy::new(|| {
    HashMap::from([
        ("a", 10),
        ("b", 60),
        ("c", 175),
        ("e", 375),
        ("f", 750),
        ("g", 1_750),
        ("h", 3_750),
        ("i", 7_500),
        ("j", 17_500),
        ("k", 37_500),
        ("l", 75_000),
        ("m", 110_000),
    ])
});
